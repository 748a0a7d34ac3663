//! # Authentication Endpoints
//!
//! Login, registration and profile management under `/api/auth`.

use super::client::ApiClient;
use super::error::ApiError;
use reqwest::Method;
use shared::{
    ChangePasswordRequest, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
    UpdateProfileRequest, UserInfo,
};

/// Login with email and password.
///
/// Sent without the bearer token so a stale session cannot turn a wrong
/// password into a session expiry.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<TokenResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let result: Result<TokenResponse, ApiError> = client
        .send(client.anonymous(Method::POST, "/auth/login").json(&request))
        .await;

    match &result {
        Ok(response) => tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            role = response.user.role.as_str(),
            "Login successful"
        ),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

/// Register a new customer account.
///
/// The API answers with a token, but registering does not log the user in.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    tracing::info!("Registering account");
    client
        .send(client.anonymous(Method::POST, "/auth/register").json(request))
        .await
}

/// Fetch the profile of the token holder.
pub async fn me(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.send(client.get("/auth/me")).await
}

/// Update name and/or phone of the token holder.
pub async fn update_me(client: &ApiClient, request: &UpdateProfileRequest) -> Result<UserInfo, ApiError> {
    client.send(client.put("/auth/me").json(request)).await
}

#[tracing::instrument(skip(client, request))]
pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    client.send(client.post("/auth/change-password").json(request)).await
}
