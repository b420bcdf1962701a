//! Admin service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    access::{AccountStatus, Role},
    db::repositories::{
        AssociationRepository, AthleteRepository, CoachRepository, CourseRepository,
        JudgeRepository, UserRepository,
    },
    error::{AppError, AppResult},
    models::User,
};

/// Platform-wide statistics
#[derive(Debug, serde::Serialize)]
pub struct PlatformStats {
    pub total_users: i64,
    pub pending_users: i64,
    pub active_users: i64,
    pub suspended_users: i64,
    pub associations: i64,
    pub athletes: i64,
    pub coaches: i64,
    pub judges: i64,
    pub courses: i64,
}

/// Admin service for account approval and platform management
pub struct AdminService;

impl AdminService {
    /// Approve a pending account
    pub async fn approve_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.status != AccountStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Account is {}, only pending accounts can be approved",
                user.status
            )));
        }

        UserRepository::update_status(pool, id, AccountStatus::Active).await
    }

    /// Reject a pending account
    pub async fn reject_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.status != AccountStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Account is {}, only pending accounts can be rejected",
                user.status
            )));
        }

        UserRepository::update_status(pool, id, AccountStatus::Rejected).await
    }

    /// Suspend an active account
    pub async fn suspend_user(pool: &PgPool, requester_id: &Uuid, id: &Uuid) -> AppResult<User> {
        if requester_id == id {
            return Err(AppError::Validation("Cannot suspend yourself".to_string()));
        }

        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.status != AccountStatus::Active {
            return Err(AppError::Conflict(format!(
                "Account is {}, only active accounts can be suspended",
                user.status
            )));
        }

        UserRepository::update_status(pool, id, AccountStatus::Suspended).await
    }

    /// Reinstate a suspended account
    pub async fn reinstate_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.status != AccountStatus::Suspended {
            return Err(AppError::Conflict(format!(
                "Account is {}, only suspended accounts can be reinstated",
                user.status
            )));
        }

        UserRepository::update_status(pool, id, AccountStatus::Active).await
    }

    /// Change a user's role
    pub async fn update_user_role(pool: &PgPool, id: &Uuid, role: Role) -> AppResult<User> {
        if UserRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        UserRepository::update_role(pool, id, role).await
    }

    /// Gather platform statistics
    pub async fn platform_stats(pool: &PgPool) -> AppResult<PlatformStats> {
        let (total_users, pending_users, active_users, suspended_users) = futures::try_join!(
            UserRepository::count(pool),
            UserRepository::count_by_status(pool, AccountStatus::Pending),
            UserRepository::count_by_status(pool, AccountStatus::Active),
            UserRepository::count_by_status(pool, AccountStatus::Suspended),
        )?;

        let (associations, athletes, coaches, judges, courses) = futures::try_join!(
            AssociationRepository::count(pool),
            AthleteRepository::count(pool),
            CoachRepository::count(pool),
            JudgeRepository::count(pool),
            CourseRepository::count(pool),
        )?;

        Ok(PlatformStats {
            total_users,
            pending_users,
            active_users,
            suspended_users,
            associations,
            athletes,
            coaches,
            judges,
            courses,
        })
    }
}
