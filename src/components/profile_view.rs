use chrono::{Local, TimeZone};
use dioxus::prelude::*;

use crate::hooks::use_client_profile;
use crate::services::ClientProfile;
use crate::utils::{format_date, format_datetime_in, ViewState};

/// Display strings for a loaded profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub full_name: String,
    pub email_line: String,
    pub birthday_line: String,
    pub last_session_line: String,
}

impl ProfileSummary {
    /// Build the summary with session times shown in `tz`
    pub fn in_zone<Tz>(profile: &ClientProfile, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let last_session = match profile.last_session {
            Some(ts) => format_datetime_in(ts, tz),
            None => "Never".to_string(),
        };

        Self {
            full_name: profile.full_name(),
            email_line: format!("Email: {}", profile.email),
            birthday_line: format!("Birthday: {}", format_date(profile.birthday)),
            last_session_line: format!("Last session: {}", last_session),
        }
    }

    /// Summary in the browser's local time zone
    pub fn local(profile: &ClientProfile) -> Self {
        Self::in_zone(profile, &Local)
    }
}

/// Client profile card for the therapist dashboard
///
/// Fetches `/api/therapist/clients/{client_id}` whenever `client_id`
/// changes. Renders nothing when no identifier is given.
#[component]
pub fn ProfileView(#[props(!optional)] client_id: Option<String>) -> Element {
    let session = use_client_profile(client_id);
    let view = session.read().state().clone().map(|profile| ProfileSummary::local(&profile));

    rsx! {
        ProfileCard { view }
    }
}

/// Markup for one view state
#[component]
fn ProfileCard(view: ViewState<ProfileSummary>) -> Element {
    match view {
        ViewState::Empty => rsx! {},
        ViewState::Loading => rsx! {
            div {
                class: "p-6 text-muted-foreground animate-pulse",
                role: "status",
                aria_live: "polite",
                aria_busy: "true",
                "Loading..."
            }
        },
        ViewState::Error(message) => rsx! {
            div {
                class: "p-6 text-red-500",
                role: "alert",
                "{message}"
            }
        },
        ViewState::Loaded(summary) => rsx! {
            section {
                class: "p-6 space-y-2",
                h2 {
                    class: "text-2xl font-bold",
                    "{summary.full_name}"
                }
                p { "{summary.email_line}" }
                p { "{summary.birthday_line}" }
                p { "{summary.last_session_line}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::akesomind::decode_profile_response;
    use chrono::{FixedOffset, Utc};

    fn render(view: ViewState<ProfileSummary>) -> String {
        let mut dom = VirtualDom::new_with_props(
            ProfileCard,
            ProfileCardProps::builder().view(view).build(),
        );
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn ann() -> ClientProfile {
        decode_profile_response(
            200,
            "OK",
            r#"{"firstName":"Ann","lastName":"Lee","email":"a@x.com","birthday":"1990-01-02","lastSession":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_matches_fields() {
        let summary = ProfileSummary::in_zone(&ann(), &Utc);
        assert_eq!(
            summary,
            ProfileSummary {
                full_name: "Ann Lee".to_string(),
                email_line: "Email: a@x.com".to_string(),
                birthday_line: "Birthday: 1/2/1990".to_string(),
                last_session_line: "Last session: 3/1/2024, 10:00:00 AM".to_string(),
            }
        );
    }

    #[test]
    fn test_summary_birthday_ignores_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let summary = ProfileSummary::in_zone(&ann(), &tokyo);
        assert_eq!(summary.birthday_line, "Birthday: 1/2/1990");
        assert_eq!(summary.last_session_line, "Last session: 3/1/2024, 7:00:00 PM");
    }

    #[test]
    fn test_summary_without_session() {
        let mut profile = ann();
        profile.last_session = None;
        assert_eq!(
            ProfileSummary::local(&profile).last_session_line,
            "Last session: Never"
        );
    }

    #[test]
    fn test_local_summary_keeps_static_fields() {
        let summary = ProfileSummary::local(&ann());
        assert_eq!(summary.full_name, "Ann Lee");
        assert_eq!(summary.email_line, "Email: a@x.com");
        assert!(summary.last_session_line.starts_with("Last session: "));
    }

    #[test]
    fn test_render_empty_shows_nothing() {
        let html = render(ViewState::Empty);
        assert!(!html.contains("Loading..."));
        assert!(!html.contains("Email:"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_render_loading_indicator() {
        let html = render(ViewState::Loading);
        assert!(html.contains("Loading..."));
        assert!(html.contains("role=\"status\""));
    }

    #[test]
    fn test_render_error_without_profile_fields() {
        let html = render(ViewState::Error("Failed to load client profile".to_string()));
        assert!(html.contains("Failed to load client profile"));
        assert!(!html.contains("Email:"));
        assert!(!html.contains("Birthday:"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn test_render_loaded_profile() {
        let html = render(ViewState::Loaded(ProfileSummary::in_zone(&ann(), &Utc)));
        assert!(html.contains("Ann Lee"));
        assert!(html.contains("Email: a@x.com"));
        assert!(html.contains("Birthday: 1/2/1990"));
        assert!(html.contains("Last session: 3/1/2024, 10:00:00 AM"));
    }
}
