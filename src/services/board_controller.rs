use std::sync::Arc;

use tracing::{info, warn};

use super::activities_api::{ActivitiesApi, ApiError};
use crate::domain::activity::Catalog;

pub const GENERIC_FAILURE: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    fn name(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    fn transport_failure_text(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// What one mutation cycle produced: the banner to show and, when the
/// mutation was accepted, the follow-up catalog fetch's outcome. A rejected
/// mutation never refreshes.
pub struct ActionReport {
    pub notice: Notice,
    pub refresh: Option<Result<Catalog, ApiError>>,
}

/// Orchestrates the request/response cycles against the activities server.
/// Each operation runs independently; overlapping operations are not
/// serialized, so the last-completing refresh wins.
pub struct BoardController {
    api: Arc<dyn ActivitiesApi>,
}

impl BoardController {
    pub fn new(api: Arc<dyn ActivitiesApi>) -> Self {
        Self { api }
    }

    pub async fn refresh(&self) -> Result<Catalog, ApiError> {
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                info!(activities = catalog.len(), "catalog refreshed");
                Ok(catalog)
            }
            Err(err) => {
                warn!(error = %err, "catalog refresh failed");
                Err(err)
            }
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ActionReport {
        self.mutate(Mutation::Signup, activity, email).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> ActionReport {
        self.mutate(Mutation::Unregister, activity, email).await
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> ActionReport {
        let outcome = match mutation {
            Mutation::Signup => self.api.signup(activity, email).await,
            Mutation::Unregister => self.api.unregister(activity, email).await,
        };

        match outcome {
            Ok(message) => {
                info!(operation = mutation.name(), activity = %activity, "mutation accepted");
                // The refresh is issued only once the mutation's response is
                // in, so the fetched catalog reflects its effect.
                let refresh = self.refresh().await;
                ActionReport {
                    notice: Notice::success(message),
                    refresh: Some(refresh),
                }
            }
            Err(err) => {
                warn!(
                    operation = mutation.name(),
                    activity = %activity,
                    error = %err,
                    "mutation rejected"
                );
                ActionReport {
                    notice: Notice::error(failure_text(&err, mutation)),
                    refresh: None,
                }
            }
        }
    }
}

fn failure_text(err: &ApiError, mutation: Mutation) -> String {
    match err {
        ApiError::Rejected {
            detail: Some(detail),
        } => detail.clone(),
        ApiError::Rejected { detail: None } => GENERIC_FAILURE.to_string(),
        _ => mutation.transport_failure_text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::activities_api::MockActivitiesApi;
    use crate::test_helpers::sample_catalog;
    use mockall::Sequence;
    use reqwest::StatusCode;

    fn controller(api: MockActivitiesApi) -> BoardController {
        BoardController::new(Arc::new(api))
    }

    #[tokio::test]
    async fn signup_success_shows_message_then_refreshes() {
        let mut api = MockActivitiesApi::new();
        let mut seq = Sequence::new();
        api.expect_signup()
            .withf(|activity, email| activity == "Chess Club" && email == "a@x.com")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("Signed up a@x.com for Chess Club".to_string()));
        api.expect_fetch_activities()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(sample_catalog()));

        let report = controller(api).signup("Chess Club", "a@x.com").await;

        assert_eq!(
            report.notice,
            Notice::success("Signed up a@x.com for Chess Club")
        );
        let refreshed = report.refresh.unwrap().unwrap();
        assert!(refreshed.contains_key("Chess Club"));
    }

    #[tokio::test]
    async fn rejected_signup_uses_server_detail_and_skips_refresh() {
        let mut api = MockActivitiesApi::new();
        api.expect_signup().times(1).returning(|_, _| {
            Err(ApiError::Rejected {
                detail: Some("Already registered".to_string()),
            })
        });
        api.expect_fetch_activities().never();

        let report = controller(api).signup("Chess Club", "a@x.com").await;

        assert_eq!(report.notice, Notice::error("Already registered"));
        assert!(report.refresh.is_none());
    }

    #[tokio::test]
    async fn rejection_without_detail_falls_back_to_generic_text() {
        let mut api = MockActivitiesApi::new();
        api.expect_signup()
            .times(1)
            .returning(|_, _| Err(ApiError::Rejected { detail: None }));
        api.expect_fetch_activities().never();

        let report = controller(api).signup("Chess Club", "a@x.com").await;

        assert_eq!(report.notice, Notice::error(GENERIC_FAILURE));
    }

    #[tokio::test]
    async fn unregister_success_refreshes_like_signup() {
        let mut api = MockActivitiesApi::new();
        let mut seq = Sequence::new();
        api.expect_unregister()
            .withf(|activity, email| activity == "Chess Club" && email == "a@x.com")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("Unregistered a@x.com from Chess Club".to_string()));
        api.expect_fetch_activities()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(sample_catalog()));

        let report = controller(api).unregister("Chess Club", "a@x.com").await;

        assert_eq!(report.notice.kind, NoticeKind::Success);
        assert!(report.refresh.unwrap().is_ok());
    }

    #[test]
    fn transport_failures_get_operation_specific_text() {
        let report_text = failure_text(
            &ApiError::FetchFailed {
                status: StatusCode::BAD_GATEWAY,
            },
            Mutation::Unregister,
        );
        assert_eq!(report_text, "Failed to unregister. Please try again.");

        let report_text = failure_text(
            &ApiError::InvalidBaseUrl,
            Mutation::Signup,
        );
        assert_eq!(report_text, "Failed to sign up. Please try again.");
    }

    #[tokio::test]
    async fn post_mutation_refresh_failure_is_reported() {
        let mut api = MockActivitiesApi::new();
        api.expect_signup()
            .times(1)
            .returning(|_, _| Ok("Signed up".to_string()));
        api.expect_fetch_activities().times(1).returning(|| {
            Err(ApiError::FetchFailed {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        });

        let report = controller(api).signup("Chess Club", "a@x.com").await;

        assert_eq!(report.notice.kind, NoticeKind::Success);
        assert!(report.refresh.unwrap().is_err());
    }

    #[tokio::test]
    async fn refresh_passes_catalog_through() {
        let mut api = MockActivitiesApi::new();
        api.expect_fetch_activities()
            .times(1)
            .returning(|| Ok(sample_catalog()));

        let catalog = controller(api).refresh().await.unwrap();
        assert!(catalog.contains_key("Chess Club"));
    }
}
