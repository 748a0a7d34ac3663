//! Route guards for pages that need a session or an administrator.

use super::auth::AuthContext;
use crate::core::error::{AppError, Result};
use shared::UserInfo;

/// The logged-in user.
///
/// # Errors
///
/// `AppError::Unauthorized` without a user.
pub fn require_auth(auth: &AuthContext) -> Result<UserInfo> {
    auth.user()
        .ok_or_else(|| AppError::Unauthorized("Please login to continue".to_string()))
}

/// The logged-in administrator.
///
/// # Errors
///
/// `AppError::Unauthorized` without a user, `AppError::Forbidden` for customers.
pub fn require_admin(auth: &AuthContext) -> Result<UserInfo> {
    let user = require_auth(auth)?;
    if !user.is_admin() {
        tracing::warn!(email = %user.email, "Admin page refused");
        return Err(AppError::Forbidden("Admin access only".to_string()));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::auth::tests::signed_in;
    use shared::UserRole;

    #[tokio::test]
    async fn test_guards() {
        let anonymous = signed_in(None).await;
        assert!(matches!(require_auth(&anonymous), Err(AppError::Unauthorized(_))));
        assert!(matches!(require_admin(&anonymous), Err(AppError::Unauthorized(_))));

        let customer = signed_in(Some(UserRole::User)).await;
        assert!(require_auth(&customer).is_ok());
        assert_eq!(
            require_admin(&customer),
            Err(AppError::Forbidden("Admin access only".to_string()))
        );

        let admin = signed_in(Some(UserRole::Admin)).await;
        assert!(require_admin(&admin).is_ok());
    }
}
