//! # Auth Context
//!
//! Holds the bearer token and the current user, shared by every page.
//!
//! The token lives in two places: the API client (so requests carry it) and
//! the [`SessionStore`] (so it survives a restart). This context keeps both
//! in step with its own state.

use super::session::{SessionStore, StoredSession};
use crate::core::error::{AppError, Result};
use crate::core::service::AuthApi;
use crate::services::api::ApiError;
use crate::utils::validation;
use parking_lot::RwLock;
use shared::{ChangePasswordRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, UserInfo};
use std::sync::Arc;

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// True until [`AuthContext::init`] has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

/// Cheap-clone handle; clones share state.
#[derive(Clone)]
pub struct AuthContext {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn SessionStore>,
    state: Arc<RwLock<AuthState>>,
}

impl AuthContext {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(AuthState::default())),
        }
    }

    /// Restore a stored session.
    ///
    /// A token the API rejects is discarded. When the API cannot be reached
    /// the token is kept and the user stays unknown.
    pub async fn init(&self) -> Option<UserInfo> {
        let Some(session) = self.store.load() else {
            self.state.write().loading = false;
            return None;
        };

        self.api.set_token(Some(session.token.clone()));
        self.state.write().token = Some(session.token);

        let user = match self.api.me().await {
            Ok(user) => {
                tracing::info!(email = %user.email, role = user.role.as_str(), "Session restored");
                self.state.write().user = Some(user.clone());
                Some(user)
            }
            Err(e @ (ApiError::Network(_) | ApiError::Parse(_))) => {
                tracing::warn!(error = %e, "Could not verify stored session");
                None
            }
            Err(e) => {
                tracing::info!(error = %e, "Stored session rejected");
                self.logout();
                None
            }
        };

        self.state.write().loading = false;
        user
    }

    /// Log in and persist the session.
    ///
    /// # Errors
    ///
    /// The backend detail, or "Login failed" when there is none.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo> {
        let response = self
            .api
            .login(email.trim().to_string(), password.to_string())
            .await
            .map_err(|e| AppError::Api(e.message_or("Login failed")))?;

        let TokenResponse { access_token, user, .. } = response;
        self.api.set_token(Some(access_token.clone()));

        let stored = StoredSession {
            token: access_token.clone(),
            role: user.role,
        };
        if let Err(e) = self.store.save(&stored) {
            tracing::warn!(error = %e, "Logged in but the session was not persisted");
        }

        let mut state = self.state.write();
        state.token = Some(access_token);
        state.user = Some(user.clone());
        state.loading = false;
        Ok(user)
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// `Validation` for a bad form, otherwise the backend detail or
    /// "Registration failed".
    pub async fn register(&self, form: RegisterRequest) -> Result<TokenResponse> {
        validation::validate_registration(&form.email, &form.password, &form.full_name, &form.phone)
            .into_result()?;

        let form = RegisterRequest {
            email: form.email.trim().to_string(),
            full_name: form.full_name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            password: form.password,
        };

        self.api
            .register(form)
            .await
            .map_err(|e| AppError::Api(e.message_or("Registration failed")))
    }

    /// Forget the token, the user and the persisted session.
    pub fn logout(&self) {
        self.api.set_token(None);
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }

        let mut state = self.state.write();
        state.token = None;
        state.user = None;
        tracing::info!("Logged out");
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserInfo> {
        if let Some(name) = &request.full_name {
            validation::validate_full_name(name).into_result()?;
        }
        if let Some(phone) = &request.phone {
            validation::validate_phone(phone).into_result()?;
        }

        let user = self
            .api
            .update_me(request)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to update profile"))?;
        self.state.write().user = Some(user.clone());
        Ok(user)
    }

    /// Change the password, returning the backend's confirmation.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<String> {
        validation::validate_password(new_password).into_result()?;

        let request = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.api
            .change_password(request)
            .await
            .map(|response| response.message)
            .map_err(|e| AppError::from_api(e, "Failed to change password"))
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .read()
            .user
            .as_ref()
            .map(UserInfo::is_admin)
            .unwrap_or(false)
    }
}
