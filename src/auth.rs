//! Identity provider client for Spare Gold.
//!
//! This module provides the sign-in/sign-up/sign-out operations against the
//! remote identity provider, local credential validation performed before
//! any network call, and the mapping of provider error codes to the fixed
//! set of user-facing messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SpareError, SpareResult};
use crate::models::UserProfile;
use crate::validation::{validate_email, validate_password, validate_required};

/// How long the transient sign-up success indicator stays visible before
/// the view navigates back to sign-in.
pub const SIGN_UP_SUCCESS_SECS: u64 = 3;

/// Default REST endpoint of the identity provider.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Provider failure categories with fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorCode {
    InvalidEmail,
    UserDisabled,
    UserNotFound,
    WrongPassword,
    /// Anything unmapped falls back to the generic message
    Other,
}

impl AuthErrorCode {
    /// Parse a provider error code. Both the SDK-style (`auth/...`) and the
    /// REST-style (`EMAIL_NOT_FOUND`) spellings are recognized.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "auth/invalid-email" | "INVALID_EMAIL" => AuthErrorCode::InvalidEmail,
            "auth/user-disabled" | "USER_DISABLED" => AuthErrorCode::UserDisabled,
            "auth/user-not-found" | "EMAIL_NOT_FOUND" => AuthErrorCode::UserNotFound,
            "auth/wrong-password" | "INVALID_PASSWORD" => AuthErrorCode::WrongPassword,
            _ => AuthErrorCode::Other,
        }
    }

    /// The message shown to the user for this failure.
    pub fn friendly_message(&self) -> &'static str {
        match self {
            AuthErrorCode::InvalidEmail => "The email address is not valid.",
            AuthErrorCode::UserDisabled => "This account has been disabled.",
            AuthErrorCode::UserNotFound => "No account found with this email.",
            AuthErrorCode::WrongPassword => "Incorrect password. Please try again.",
            AuthErrorCode::Other => "An error occurred. Please try again.",
        }
    }
}

/// Failure returned by an identity provider call.
#[derive(Debug, Clone)]
pub struct AuthError {
    pub code: AuthErrorCode,
    /// Raw provider message (sign-up surfaces this verbatim)
    pub message: String,
}

impl AuthError {
    /// Build from a provider error code string.
    pub fn from_provider(code: impl Into<String>) -> Self {
        let message = code.into();
        Self {
            code: AuthErrorCode::from_provider_code(&message),
            message,
        }
    }

    /// Build from a transport-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: AuthErrorCode::Other,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

/// Remote identity provider operations.
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password, returning the provider's user record.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<UserProfile, AuthError>> + Send;

    /// Create an account with email and password.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<UserProfile, AuthError>> + Send;

    /// End the provider session.
    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), AuthError>> + Send;
}

/// Configuration for the REST identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// REST endpoint base URL
    pub base_url: String,
    /// Project API key appended to every request
    pub api_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    error: ProviderErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
}

/// Identity provider backed by the hosted REST API.
pub struct RestIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestIdentityProvider {
    /// Create a provider client from configuration.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        if config.api_key.is_empty() {
            return Err(AuthError::network("auth api_key is not configured"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    async fn post_credentials(
        &self,
        operation: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AuthError> {
        let url = format!("{}/{}?key={}", self.base_url, operation, self.api_key);
        let request = CredentialsRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;

        if !response.status().is_success() {
            let body: ProviderErrorBody = response.json().await.unwrap_or_default();
            return Err(AuthError::from_provider(body.error.message));
        }

        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;

        Ok(UserProfile {
            uid: body.local_id,
            email: body.email.unwrap_or_else(|| email.to_string()),
            display_name: body.display_name,
            photo_url: body.profile_picture,
        })
    }
}

impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        self.post_credentials("accounts:signInWithPassword", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        self.post_credentials("accounts:signUp", email, password)
            .await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // Session state is held on the device; the provider keeps no
        // server-side session to terminate.
        Ok(())
    }
}

/// Sign-in and sign-up operations layered over an identity provider.
pub struct AuthService<P: IdentityProvider> {
    provider: P,
}

impl<P: IdentityProvider> AuthService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Validate credentials locally, then sign in with the provider.
    ///
    /// Provider failures are mapped to the fixed set of friendly messages;
    /// the provider is never called when local validation fails.
    pub async fn sign_in(&self, email: &str, password: &str) -> SpareResult<UserProfile> {
        validate_email(email)?;
        validate_password(password)?;

        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                tracing::info!(uid = %user.uid, "signed in");
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(message = %err.message, "sign-in failed");
                Err(SpareError::auth(err.code.friendly_message()))
            }
        }
    }

    /// Create an account, then immediately sign in with the same
    /// credentials. Provider failures surface the raw provider message.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> SpareResult<UserProfile> {
        validate_required("fullName", full_name)?;
        validate_required("email", email)?;
        validate_required("password", password)?;

        self.provider
            .sign_up(email, password)
            .await
            .map_err(|err| SpareError::auth(err.message))?;

        let user = self
            .provider
            .sign_in(email, password)
            .await
            .map_err(|err| SpareError::auth(err.message))?;

        tracing::info!(uid = %user.uid, "account created and signed in");
        Ok(user)
    }

    /// Sign out with the provider.
    pub async fn sign_out(&self) -> SpareResult<()> {
        self.provider
            .sign_out()
            .await
            .map_err(|err| SpareError::auth(err.message))
    }
}
