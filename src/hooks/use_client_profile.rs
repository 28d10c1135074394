//! use_client_profile hook - loads a client profile whenever the identifier changes
//!
//! Every identifier change starts a new generation. Requests that were
//! already in flight are left to finish, but their results are dropped
//! unless they belong to the latest generation.

use dioxus::prelude::*;

use crate::services::{load_profile, AkesomindApi, ClientProfile};
use crate::utils::{normalize_identifier, Generation, RequestGeneration, ViewState};

/// A request the session wants issued
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    pub client_id: String,
    pub generation: Generation,
}

/// View state of one profile view plus the generation bookkeeping behind it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSession {
    generations: RequestGeneration,
    state: ViewState<ClientProfile>,
}

impl ProfileSession {
    pub fn state(&self) -> &ViewState<ClientProfile> {
        &self.state
    }

    /// Switch to a new identifier
    ///
    /// Returns the request to issue, or None when there is nothing to fetch.
    pub fn select(&mut self, client_id: Option<&str>) -> Option<ProfileRequest> {
        let generation = self.generations.advance();

        match normalize_identifier(client_id) {
            Some(id) => {
                self.state = ViewState::Loading;
                Some(ProfileRequest {
                    client_id: id.to_string(),
                    generation,
                })
            }
            None => {
                self.state = ViewState::Empty;
                None
            }
        }
    }

    /// Apply a settled result; returns false if it was superseded
    pub fn settle(&mut self, generation: Generation, outcome: ViewState<ClientProfile>) -> bool {
        if !self.generations.is_current(generation) {
            log::debug!(
                "Dropping stale profile result {} (latest {})",
                generation,
                self.generations.latest()
            );
            return false;
        }

        self.state = outcome;
        true
    }
}

/// Hook that keeps a profile session in sync with `client_id`
///
/// # Example
/// ```rust
/// let session = use_client_profile(client_id.clone());
///
/// match session.read().state() {
///     ViewState::Loading => rsx! { "Loading..." },
///     ...
/// }
/// ```
pub fn use_client_profile(client_id: Option<String>) -> Signal<ProfileSession> {
    let mut session = use_signal(ProfileSession::default);

    use_effect(use_reactive!(|client_id| {
        let Some(request) = session.write().select(client_id.as_deref()) else {
            log::debug!("No client identifier, skipping profile fetch");
            return;
        };

        spawn(async move {
            let api = AkesomindApi::from_config();
            let outcome = load_profile(&api, &request.client_id).await;
            session.write().settle(request.generation, outcome);
        });
    }));

    session
}
