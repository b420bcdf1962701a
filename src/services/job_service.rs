//! Job offer service
//!
//! Operates on the injected [`JobOfferStore`] interface rather than a
//! concrete pool, so tests run against an in-memory store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    constants::offer_statuses,
    db::repositories::job_repo::{JobOfferChanges, JobOfferFilter, JobOfferStore, NewJobOffer},
    error::{AppError, AppResult},
    models::JobOffer,
    utils::validation::{validate_contract_type, validate_salary_range},
};

/// Job offer service for business logic
pub struct JobService;

impl JobService {
    /// Publish a new offer for a company
    #[allow(clippy::too_many_arguments)]
    pub async fn create_offer<S: JobOfferStore + ?Sized>(
        store: &S,
        company_id: &Uuid,
        title: &str,
        description: &str,
        location: &str,
        contract_type: &str,
        salary_min: Option<i32>,
        salary_max: Option<i32>,
        deadline: Option<DateTime<Utc>>,
    ) -> AppResult<JobOffer> {
        validate_contract_type(contract_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_salary_range(salary_min, salary_max)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(deadline) = deadline {
            if deadline <= Utc::now() {
                return Err(AppError::Validation(
                    "Application deadline must be in the future".to_string(),
                ));
            }
        }

        store
            .insert(NewJobOffer {
                company_id: *company_id,
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                contract_type: contract_type.to_string(),
                salary_min,
                salary_max,
                deadline,
            })
            .await
    }

    /// Get offer by ID
    pub async fn get_offer<S: JobOfferStore + ?Sized>(store: &S, id: &Uuid) -> AppResult<JobOffer> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job offer not found".to_string()))
    }

    /// Public listing: open offers only
    pub async fn list_open_offers<S: JobOfferStore + ?Sized>(
        store: &S,
        page: u32,
        per_page: u32,
        location: Option<&str>,
        contract_type: Option<&str>,
    ) -> AppResult<(Vec<JobOffer>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        store
            .list(
                offset,
                limit,
                &JobOfferFilter {
                    location: location.map(str::to_string),
                    contract_type: contract_type.map(str::to_string),
                    company_id: None,
                    status: Some(offer_statuses::OPEN.to_string()),
                },
            )
            .await
    }

    /// Offers published by a company, any status
    pub async fn list_company_offers<S: JobOfferStore + ?Sized>(
        store: &S,
        company_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<JobOffer>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        store
            .list(
                offset,
                limit,
                &JobOfferFilter {
                    company_id: Some(*company_id),
                    ..JobOfferFilter::default()
                },
            )
            .await
    }

    /// Update an offer owned by the requesting company
    pub async fn update_offer<S: JobOfferStore + ?Sized>(
        store: &S,
        requester_id: &Uuid,
        id: &Uuid,
        changes: JobOfferChanges,
    ) -> AppResult<JobOffer> {
        let offer = Self::get_offer(store, id).await?;
        Self::check_ownership(&offer, requester_id)?;

        if let Some(contract_type) = changes.contract_type.as_deref() {
            validate_contract_type(contract_type)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        let new_min = changes.salary_min.or(offer.salary_min);
        let new_max = changes.salary_max.or(offer.salary_max);
        validate_salary_range(new_min, new_max)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        store.update(id, changes).await
    }

    /// Close an offer owned by the requesting company
    pub async fn close_offer<S: JobOfferStore + ?Sized>(
        store: &S,
        requester_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<JobOffer> {
        let offer = Self::get_offer(store, id).await?;
        Self::check_ownership(&offer, requester_id)?;

        if offer.status == offer_statuses::CLOSED {
            return Err(AppError::Conflict("Offer is already closed".to_string()));
        }

        store.set_status(id, offer_statuses::CLOSED).await
    }

    /// Close any offer (moderation surface)
    pub async fn moderate_close_offer<S: JobOfferStore + ?Sized>(
        store: &S,
        id: &Uuid,
    ) -> AppResult<JobOffer> {
        Self::get_offer(store, id).await?;
        store.set_status(id, offer_statuses::CLOSED).await
    }

    /// Delete an offer owned by the requesting company
    pub async fn delete_offer<S: JobOfferStore + ?Sized>(
        store: &S,
        requester_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        let offer = Self::get_offer(store, id).await?;
        Self::check_ownership(&offer, requester_id)?;

        store.delete(id).await
    }

    fn check_ownership(offer: &JobOffer, requester_id: &Uuid) -> AppResult<()> {
        if offer.company_id != *requester_id {
            return Err(AppError::Forbidden(
                "Offer belongs to another company".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store substituted behind the same interface
    #[derive(Default)]
    struct InMemoryJobOfferStore {
        offers: Mutex<Vec<JobOffer>>,
    }

    #[async_trait]
    impl JobOfferStore for InMemoryJobOfferStore {
        async fn insert(&self, offer: NewJobOffer) -> AppResult<JobOffer> {
            let now = Utc::now();
            let offer = JobOffer {
                id: Uuid::new_v4(),
                company_id: offer.company_id,
                title: offer.title,
                description: offer.description,
                location: offer.location,
                contract_type: offer.contract_type,
                salary_min: offer.salary_min,
                salary_max: offer.salary_max,
                deadline: offer.deadline,
                status: offer_statuses::OPEN.to_string(),
                created_at: now,
                updated_at: now,
            };
            self.offers.lock().unwrap().push(offer.clone());
            Ok(offer)
        }

        async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<JobOffer>> {
            Ok(self.offers.lock().unwrap().iter().find(|o| o.id == *id).cloned())
        }

        async fn update(&self, id: &Uuid, changes: JobOfferChanges) -> AppResult<JobOffer> {
            let mut offers = self.offers.lock().unwrap();
            let offer = offers
                .iter_mut()
                .find(|o| o.id == *id)
                .ok_or_else(|| AppError::NotFound("Job offer not found".to_string()))?;
            if let Some(title) = changes.title {
                offer.title = title;
            }
            if let Some(description) = changes.description {
                offer.description = description;
            }
            if let Some(location) = changes.location {
                offer.location = location;
            }
            if let Some(contract_type) = changes.contract_type {
                offer.contract_type = contract_type;
            }
            if let Some(salary_min) = changes.salary_min {
                offer.salary_min = Some(salary_min);
            }
            if let Some(salary_max) = changes.salary_max {
                offer.salary_max = Some(salary_max);
            }
            if let Some(deadline) = changes.deadline {
                offer.deadline = Some(deadline);
            }
            offer.updated_at = Utc::now();
            Ok(offer.clone())
        }

        async fn set_status(&self, id: &Uuid, status: &str) -> AppResult<JobOffer> {
            let mut offers = self.offers.lock().unwrap();
            let offer = offers
                .iter_mut()
                .find(|o| o.id == *id)
                .ok_or_else(|| AppError::NotFound("Job offer not found".to_string()))?;
            offer.status = status.to_string();
            offer.updated_at = Utc::now();
            Ok(offer.clone())
        }

        async fn delete(&self, id: &Uuid) -> AppResult<()> {
            self.offers.lock().unwrap().retain(|o| o.id != *id);
            Ok(())
        }

        async fn list(
            &self,
            offset: i64,
            limit: i64,
            filter: &JobOfferFilter,
        ) -> AppResult<(Vec<JobOffer>, i64)> {
            let offers = self.offers.lock().unwrap();
            let matches: Vec<JobOffer> = offers
                .iter()
                .filter(|o| filter.location.as_deref().is_none_or(|l| o.location == l))
                .filter(|o| {
                    filter.contract_type.as_deref().is_none_or(|c| o.contract_type == c)
                })
                .filter(|o| filter.company_id.is_none_or(|c| o.company_id == c))
                .filter(|o| filter.status.as_deref().is_none_or(|s| o.status == s))
                .cloned()
                .collect();
            let total = matches.len() as i64;
            let page = matches
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((page, total))
        }

        async fn count(&self) -> AppResult<i64> {
            Ok(self.offers.lock().unwrap().len() as i64)
        }
    }

    async fn seed_offer(store: &InMemoryJobOfferStore, company_id: &Uuid) -> JobOffer {
        JobService::create_offer(
            store,
            company_id,
            "Warehouse assistant",
            "Entry-level position",
            "La Paz",
            "full_time",
            Some(3000),
            Some(4500),
            None,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_offer_starts_open() {
        let store = InMemoryJobOfferStore::default();
        let company = Uuid::new_v4();

        let offer = seed_offer(&store, &company).await;
        assert_eq!(offer.status, "open");
        assert_eq!(offer.company_id, company);
    }

    #[tokio::test]
    async fn test_create_offer_rejects_bad_input() {
        let store = InMemoryJobOfferStore::default();
        let company = Uuid::new_v4();

        let bad_contract = JobService::create_offer(
            &store, &company, "t", "d", "La Paz", "freelance", None, None, None,
        )
        .await;
        assert!(matches!(bad_contract, Err(AppError::Validation(_))));

        let bad_salary = JobService::create_offer(
            &store, &company, "t", "d", "La Paz", "full_time", Some(5000), Some(1000), None,
        )
        .await;
        assert!(matches!(bad_salary, Err(AppError::Validation(_))));

        let past_deadline = JobService::create_offer(
            &store,
            &company,
            "t",
            "d",
            "La Paz",
            "full_time",
            None,
            None,
            Some(Utc::now() - chrono::Duration::hours(1)),
        )
        .await;
        assert!(matches!(past_deadline, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_public_listing_excludes_closed_offers() {
        let store = InMemoryJobOfferStore::default();
        let company = Uuid::new_v4();

        let open = seed_offer(&store, &company).await;
        let closed = seed_offer(&store, &company).await;
        JobService::close_offer(&store, &company, &closed.id).await.unwrap();

        let (offers, total) = JobService::list_open_offers(&store, 1, 20, None, None)
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(offers[0].id, open.id);
    }

    #[tokio::test]
    async fn test_ownership_enforced() {
        let store = InMemoryJobOfferStore::default();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let offer = seed_offer(&store, &owner).await;

        let update = JobService::update_offer(
            &store,
            &stranger,
            &offer.id,
            JobOfferChanges {
                title: Some("hijacked".to_string()),
                ..JobOfferChanges::default()
            },
        )
        .await;
        assert!(matches!(update, Err(AppError::Forbidden(_))));

        let close = JobService::close_offer(&store, &stranger, &offer.id).await;
        assert!(matches!(close, Err(AppError::Forbidden(_))));

        let delete = JobService::delete_offer(&store, &stranger, &offer.id).await;
        assert!(matches!(delete, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_close_twice_conflicts_but_moderation_always_closes() {
        let store = InMemoryJobOfferStore::default();
        let company = Uuid::new_v4();

        let offer = seed_offer(&store, &company).await;
        JobService::close_offer(&store, &company, &offer.id).await.unwrap();

        let again = JobService::close_offer(&store, &company, &offer.id).await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        // Moderation path has no ownership or state precondition
        let moderated = JobService::moderate_close_offer(&store, &offer.id).await.unwrap();
        assert_eq!(moderated.status, "closed");
    }

    #[tokio::test]
    async fn test_update_checks_combined_salary_range() {
        let store = InMemoryJobOfferStore::default();
        let company = Uuid::new_v4();

        let offer = seed_offer(&store, &company).await; // 3000..4500

        // New minimum above the existing maximum
        let result = JobService::update_offer(
            &store,
            &company,
            &offer.id,
            JobOfferChanges {
                salary_min: Some(5000),
                ..JobOfferChanges::default()
            },
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
