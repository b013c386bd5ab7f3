//! Report routes.
//!
//! Both endpoints load a ledger snapshot for the requested month and run the
//! core aggregator over it.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use monthend_core::ledger::InMemoryLedger;
use monthend_core::reports::{AggregationError, ReportRequest, ReportService};
use monthend_db::{ReportError, ReportRepository};
use monthend_shared::AppError;
use monthend_shared::types::{JournalId, ReportContextId};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::AppState;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/trial-balance", get(get_trial_balance))
        .route("/reports/profit-loss", get(get_profit_and_loss))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters shared by both reports.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Reference date (defaults to today in the configured time zone).
    pub as_of: Option<NaiveDate>,
    /// Saved report context whose date overrides `as_of`.
    pub context_id: Option<ReportContextId>,
    /// Comma-separated journal IDs; only their lines are counted.
    pub journal_ids: Option<String>,
}

impl ReportQuery {
    /// Builds the core request, filling in today's date when none is given.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `journal_ids` holds a malformed ID.
    pub fn to_request(&self, time_zone: Tz) -> Result<ReportRequest, AppError> {
        let reference_date = self
            .as_of
            .unwrap_or_else(|| Utc::now().with_timezone(&time_zone).date_naive());
        let journal_ids = self
            .journal_ids
            .as_deref()
            .map(parse_journal_list)
            .transpose()?
            .unwrap_or_default();

        let request = ReportRequest::new(reference_date).with_journals(journal_ids);
        Ok(match self.context_id {
            Some(id) => request.with_context(id),
            None => request,
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /reports/trial-balance
///
/// Responds with `[groups, {"journal_ids": [...]}]`.
async fn get_trial_balance(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let request = match query.to_request(state.time_zone) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    let snapshot = match load_snapshot(&state, &request).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    match ReportService::trial_balance(&snapshot, &request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => aggregation_failure(&e),
    }
}

/// GET /reports/profit-loss
async fn get_profit_and_loss(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let request = match query.to_request(state.time_zone) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    let snapshot = match load_snapshot(&state, &request).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    match ReportService::profit_and_loss(&snapshot, &request) {
        Ok(groups) => (StatusCode::OK, Json(groups)).into_response(),
        Err(e) => aggregation_failure(&e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

async fn load_snapshot(
    state: &AppState,
    request: &ReportRequest,
) -> Result<InMemoryLedger, Response> {
    let repo = ReportRepository::new((*state.db).clone());
    repo.load_snapshot(request).await.map_err(|e| {
        error!(error = %e, reference_date = %request.reference_date, "Failed to load ledger snapshot");
        error_response(&app_error(e))
    })
}

fn aggregation_failure<E: std::error::Error>(err: &AggregationError<E>) -> Response {
    error!(error = %err, "Failed to aggregate report");
    error_response(&AppError::Internal(err.to_string()))
}

/// Parses a comma-separated list of journal IDs, ignoring blank entries.
fn parse_journal_list(s: &str) -> Result<Vec<JournalId>, AppError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<JournalId>().map_err(|e| {
                warn!(journal_id = part, error = %e, "Rejected malformed journal ID");
                AppError::Validation(format!("Invalid journal ID: {part}"))
            })
        })
        .collect()
}

/// Maps an application error to a JSON error response.
fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if err.is_internal() {
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}

fn app_error(err: ReportError) -> AppError {
    match err {
        ReportError::Database(e) => AppError::Database(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    use super::*;
    use crate::create_router;

    fn test_app() -> Router {
        create_router(AppState::new(
            DatabaseConnection::Disconnected,
            chrono_tz::UTC,
        ))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[test]
    fn test_query_with_date_and_context() {
        let context_id = ReportContextId::new();
        let query = ReportQuery {
            as_of: NaiveDate::from_ymd_opt(2024, 3, 15),
            context_id: Some(context_id),
            journal_ids: None,
        };

        let request = query.to_request(chrono_tz::UTC).unwrap();

        assert_eq!(request.reference_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(request.context_id, Some(context_id));
        assert!(request.journal_ids.is_empty());
    }

    #[test]
    fn test_query_parses_journal_list() {
        let bank = JournalId::new();
        let bills = JournalId::new();
        let query = ReportQuery {
            as_of: NaiveDate::from_ymd_opt(2024, 3, 15),
            context_id: None,
            journal_ids: Some(format!("{bank}, {bills},")),
        };

        let request = query.to_request(chrono_tz::UTC).unwrap();

        assert_eq!(request.journal_ids, vec![bank, bills]);
    }

    #[test]
    fn test_query_rejects_malformed_journal_id() {
        let query = ReportQuery {
            as_of: None,
            context_id: None,
            journal_ids: Some(format!("{},bank", JournalId::new())),
        };

        let err = query.to_request(chrono_tz::UTC).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Invalid journal ID: bank");
    }

    #[test]
    fn test_aggregation_failure_hides_details() {
        let err: AggregationError<std::convert::Infallible> = AggregationError::AmountOverflow {
            account_code: "101000".to_string(),
        };

        let response = aggregation_failure(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_query_defaults_to_today_in_time_zone() {
        let query = ReportQuery {
            as_of: None,
            context_id: None,
            journal_ids: None,
        };
        let tz: Tz = "Pacific/Kiritimati".parse().unwrap();

        let before = Utc::now().with_timezone(&tz).date_naive();
        let request = query.to_request(tz).unwrap();
        let after = Utc::now().with_timezone(&tz).date_naive();

        assert!(request.reference_date == before || request.reference_date == after);
        assert!(request.context_id.is_none());
    }

    #[test]
    fn test_report_error_maps_to_database_error() {
        let err = app_error(ReportError::Database(sea_orm::DbErr::Custom(
            "connection refused".to_string(),
        )));

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[rstest]
    #[case("/api/v1/reports/trial-balance?as_of=2024-13-01")]
    #[case("/api/v1/reports/profit-loss?as_of=yesterday")]
    #[case("/api/v1/reports/profit-loss?context_id=not-a-uuid")]
    #[case("/api/v1/reports/trial-balance?journal_ids=not-a-uuid")]
    #[tokio::test]
    async fn test_malformed_query_is_rejected(#[case] uri: &str) {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_journal_id_reports_validation_error() {
        let (status, body) = get("/api/v1/reports/profit-loss?journal_ids=bank").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Validation error: Invalid journal ID: bank");
    }

    #[rstest]
    #[case("/api/v1/reports/trial-balance?as_of=2024-03-15")]
    #[case("/api/v1/reports/profit-loss")]
    #[tokio::test]
    async fn test_database_failure_returns_500(#[case] uri: &str) {
        let (status, body) = get(uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "DATABASE_ERROR");
        assert_eq!(json["message"], "An error occurred");
    }
}
