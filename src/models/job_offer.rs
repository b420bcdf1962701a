//! Job offer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::offer_statuses;

/// Job offer published by a company on the youth employment portal
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: Uuid,
    /// User account of the publishing company
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    /// Applications close after this instant, if set
    pub deadline: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobOffer {
    /// Whether the offer currently accepts applications
    pub fn is_open(&self) -> bool {
        if self.status != offer_statuses::OPEN {
            return false;
        }
        match self.deadline {
            Some(deadline) => Utc::now() < deadline,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn offer(status: &str, deadline: Option<DateTime<Utc>>) -> JobOffer {
        let now = Utc::now();
        JobOffer {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            title: "Warehouse assistant".to_string(),
            description: "Entry-level position".to_string(),
            location: "La Paz".to_string(),
            contract_type: "full_time".to_string(),
            salary_min: None,
            salary_max: None,
            deadline,
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_open_without_deadline() {
        assert!(offer("open", None).is_open());
    }

    #[test]
    fn test_closed_status_is_not_open() {
        assert!(!offer("closed", None).is_open());
    }

    #[test]
    fn test_expired_deadline_is_not_open() {
        assert!(!offer("open", Some(Utc::now() - Duration::hours(1))).is_open());
        assert!(offer("open", Some(Utc::now() + Duration::hours(1))).is_open());
    }
}
