//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    access::{authorize_role, AccountStatus, Role},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<Role>,
        status: Option<AccountStatus>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search, role, status).await
    }

    /// Update user profile
    ///
    /// Users may only update their own profile; the federation admin may
    /// update anyone's.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        target_id: &Uuid,
        requester_role: &str,
        full_name: Option<&str>,
        email: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        let is_admin = requester_role
            .parse::<Role>()
            .is_ok_and(|r| authorize_role(r, Role::ADMIN_FAB));

        if requester_id != target_id && !is_admin {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        // If changing password, verify current password
        let password_hash = if let Some(new_pwd) = new_password {
            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            let user = UserRepository::find_by_id(pool, target_id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

            if !AuthService::verify_password(current_pwd, &user.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }

            Some(AuthService::hash_password(new_pwd)?)
        } else {
            None
        };

        UserRepository::update(pool, target_id, email, full_name, password_hash.as_deref()).await
    }
}
