use log::debug;
use shared::{
    AuthResponse, GoogleAuthRequest, LoginRequest, ProfileUpdate, SignupRequest,
    UserProfile, UserResponse,
};

use crate::api::client::{validate_body, ApiClient};
use crate::api::request::RequestOptions;
use crate::error::ApiError;

/// Creates an account and stores the returned session.
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    debug!("Registering new user: {}", request.email);
    validate_body("/auth/signup", request)?;

    let auth: AuthResponse = client
        .fetch_json_anonymous("/auth/signup", RequestOptions::post(request)?)
        .await?;
    client.session().save(&auth)?;

    debug!("Successfully registered user: {}", request.email);
    Ok(auth)
}

/// Email/password login. Bad credentials come back as `RequestFailed`
/// with the server's message; the stored session is only replaced on success.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    debug!("Attempting login for user: {}", request.email);
    validate_body("/auth/login", request)?;

    let auth: AuthResponse = client
        .fetch_json_anonymous("/auth/login", RequestOptions::post(request)?)
        .await?;
    client.session().save(&auth)?;

    debug!("Login successful for user: {}", request.email);
    Ok(auth)
}

/// Exchanges a Google OAuth access token for a CurriForge session.
pub async fn google_login(client: &ApiClient, token: &str) -> Result<AuthResponse, ApiError> {
    debug!("Attempting Google login");
    let request = GoogleAuthRequest {
        token: token.to_string(),
    };

    let auth: AuthResponse = client
        .fetch_json_anonymous("/auth/google", RequestOptions::post(&request)?)
        .await?;
    client.session().save(&auth)?;
    Ok(auth)
}

pub async fn me(client: &ApiClient) -> Result<Option<UserResponse>, ApiError> {
    debug!("Fetching current user");
    client.fetch_json("/auth/me", RequestOptions::get()).await
}

/// Saves profile changes and refreshes the stored profile to match.
pub async fn update_profile(
    client: &ApiClient,
    update: &ProfileUpdate,
) -> Result<Option<UserResponse>, ApiError> {
    debug!("Updating user profile");
    validate_body("/auth/profile", update)?;

    let user: Option<UserResponse> = client
        .fetch_json("/auth/profile", RequestOptions::put(update)?)
        .await?;
    if let Some(user) = &user {
        client.session().set_user(&UserProfile::from(user.clone()))?;
    }
    Ok(user)
}

/// Local logout; the API has no server-side session to end.
pub fn logout(client: &ApiClient) {
    debug!("Logging out");
    client.session().logout(client.navigator());
}
