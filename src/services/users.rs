use uuid::Uuid;
use validator::Validate;

use crate::domain::notification::NewNotification;
use crate::domain::user::{NewUser, UpdateUser};
use crate::dto::users::{RegisterUserForm, UpdateUserForm, UserResponse};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{NotificationWriter, UserReader, UserWriter};
use crate::services::auth::hash_password;
use crate::services::{ServiceError, ServiceResult};

/// Registers a new account. The account stays inactive until the activation
/// signature handed out here is redeemed.
pub fn register_user<R>(repo: &R, form: RegisterUserForm) -> ServiceResult<UserResponse>
where
    R: UserReader + UserWriter + ?Sized,
{
    form.validate()?;

    if repo.get_by_username(form.username.trim())?.is_some() {
        return Err(ServiceError::Validation(
            "Username already registered".to_string(),
        ));
    }
    if repo.get_by_email(form.email.trim())?.is_some() {
        return Err(ServiceError::Validation(
            "Email already registered".to_string(),
        ));
    }

    let new_user = NewUser::new(
        form.username,
        form.email,
        hash_password(&form.password)?,
        Uuid::new_v4().to_string(),
    );

    Ok(repo.create(&new_user)?.into())
}

/// Redeems an activation signature and drops a welcome notification for the
/// freshly activated account.
pub fn activate_user<R, N>(repo: &R, notifications: &N, sig: &str) -> ServiceResult<UserResponse>
where
    R: UserWriter + ?Sized,
    N: NotificationWriter + ?Sized,
{
    let user = repo.activate(sig)?.ok_or(ServiceError::NotFound)?;

    let welcome = NewNotification::new(
        user.id,
        format!("Welcome aboard, {}! Your account is now active.", user.username),
    );
    if let Err(e) = notifications.create(&welcome) {
        // The account is active either way; losing the greeting is not worth
        // failing the request over.
        log::error!("Failed to create welcome notification: {e}");
    }

    Ok(user.into())
}

/// Returns the authenticated user's own profile.
pub fn get_me<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<UserResponse>
where
    R: UserReader + ?Sized,
{
    match repo.get_by_id(user.user_id)? {
        Some(account) => Ok(account.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Applies profile updates for the authenticated user.
pub fn update_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateUserForm,
) -> ServiceResult<UserResponse>
where
    R: UserWriter + ?Sized,
{
    form.validate()?;

    let password_hash = match form.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    let updates = UpdateUser::new(form.email, password_hash);

    Ok(repo.update(user.user_id, &updates)?.into())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::User;
    use crate::repository::mock::{MockNotificationRepository, MockUserRepository};

    fn stored_user() -> User {
        let now = Utc::now().naive_utc();
        User {
            id: 1,
            username: "rick".to_string(),
            email: "rick@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_active: true,
            sig: "sig".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn register_rejects_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_username()
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_create().never();

        let form = RegisterUserForm {
            username: "rick".to_string(),
            email: "other@example.com".to_string(),
            password: "a-long-password".to_string(),
        };
        assert!(matches!(
            register_user(&repo, form).unwrap_err(),
            ServiceError::Validation(_)
        ));
    }

    #[test]
    fn register_rejects_short_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_username().never();
        repo.expect_create().never();

        let form = RegisterUserForm {
            username: "rick".to_string(),
            email: "rick@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(matches!(
            register_user(&repo, form).unwrap_err(),
            ServiceError::Validation(_)
        ));
    }

    #[test]
    fn activation_writes_a_welcome_notification() {
        let mut repo = MockUserRepository::new();
        repo.expect_activate()
            .withf(|sig| sig == "sig")
            .returning(|_| Ok(Some(stored_user())));

        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_create()
            .withf(|n| n.user_id == 1 && n.body.contains("rick"))
            .returning(|n| {
                Ok(crate::domain::notification::Notification {
                    id: 1,
                    user_id: n.user_id,
                    body: n.body.clone(),
                    is_read: false,
                    created_at: Utc::now().naive_utc(),
                })
            });

        let response = activate_user(&repo, &notifications, "sig").unwrap();
        assert_eq!(response.username, "rick");
    }

    #[test]
    fn unknown_signature_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_activate().returning(|_| Ok(None));
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_create().never();

        assert!(matches!(
            activate_user(&repo, &notifications, "nope").unwrap_err(),
            ServiceError::NotFound
        ));
    }
}
