use async_trait::async_trait;
use gloo_net::http::Request;
use std::fmt;
use web_sys::RequestCredentials;

use crate::services::profile::{ClientProfile, ClientProfilePayload, InvalidProfile};
use crate::stores::api_config;
use crate::utils::ViewState;

/// Message shown for every failed profile load; details only go to the log
pub const PROFILE_ERROR_MESSAGE: &str = "Failed to load client profile";

/// Path of the therapist-scoped client lookup, relative to the API base
const CLIENTS_PATH: &str = "/api/therapist/clients";

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetchError {
    /// The request never produced a response (offline, CORS, DNS...)
    Network(String),
    /// Non-2xx status with its status text
    Status(u16, String),
    /// Body was not JSON of the expected shape
    Decode(String),
    /// Body decoded but failed validation
    Invalid(InvalidProfile),
}

impl fmt::Display for ProfileFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "request failed: {}", e),
            Self::Status(code, text) => write!(f, "HTTP error: {} {}", code, text),
            Self::Decode(e) => write!(f, "failed to parse response: {}", e),
            Self::Invalid(e) => write!(f, "invalid profile: {}", e),
        }
    }
}

impl std::error::Error for ProfileFetchError {}

impl From<InvalidProfile> for ProfileFetchError {
    fn from(e: InvalidProfile) -> Self {
        Self::Invalid(e)
    }
}

/// Anything that can look up a client profile by identifier
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn fetch_client_profile(&self, client_id: &str)
        -> Result<ClientProfile, ProfileFetchError>;
}

/// Akesomind REST API client
pub struct AkesomindApi {
    base_url: String,
}

impl AkesomindApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client bound to the configured API base
    pub fn from_config() -> Self {
        Self::new(api_config::api_base())
    }

    pub fn client_profile_url(&self, client_id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            CLIENTS_PATH,
            urlencoding::encode(client_id)
        )
    }
}

#[async_trait(?Send)]
impl ProfileSource for AkesomindApi {
    async fn fetch_client_profile(
        &self,
        client_id: &str,
    ) -> Result<ClientProfile, ProfileFetchError> {
        let url = self.client_profile_url(client_id);
        log::debug!("Fetching client profile: {}", url);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ProfileFetchError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ProfileFetchError::Network(e.to_string()))?;

        decode_profile_response(status, &status_text, &body)
    }
}

/// Turn a settled HTTP response into a validated profile
pub fn decode_profile_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<ClientProfile, ProfileFetchError> {
    if !(200..300).contains(&status) {
        return Err(ProfileFetchError::Status(status, status_text.to_string()));
    }

    let payload: ClientProfilePayload =
        serde_json::from_str(body).map_err(|e| ProfileFetchError::Decode(e.to_string()))?;

    Ok(ClientProfile::try_from(payload)?)
}

/// Fetch one profile and fold the outcome into a view state
pub async fn load_profile<S>(source: &S, client_id: &str) -> ViewState<ClientProfile>
where
    S: ProfileSource + ?Sized,
{
    match source.fetch_client_profile(client_id).await {
        Ok(profile) => {
            log::info!("Loaded client profile {}", client_id);
            ViewState::Loaded(profile)
        }
        Err(e) => {
            log::error!("Failed to load client profile {}: {}", client_id, e);
            ViewState::Error(PROFILE_ERROR_MESSAGE.to_string())
        }
    }
}
