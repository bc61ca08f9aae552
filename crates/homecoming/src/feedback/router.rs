use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{FeedbackId, FeedbackSubmission};
use super::repository::FeedbackRepository;
use super::service::{Clock, FeedbackError, FeedbackService};

/// Routes for the community feedback wall.
pub fn feedback_router<R, C>(service: Arc<FeedbackService<R, C>>) -> Router
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(
            "/feedbacks",
            get(list_handler::<R, C>).post(create_handler::<R, C>),
        )
        .route("/feedbacks/:id", delete(delete_handler::<R, C>))
        .with_state(service)
}

pub(crate) async fn list_handler<R, C>(State(service): State<Arc<FeedbackService<R, C>>>) -> Response
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    match service.list() {
        Ok(feedbacks) => (
            StatusCode::OK,
            Json(json!({ "success": true, "feedbacks": feedbacks })),
        )
            .into_response(),
        Err(err) => failure(err),
    }
}

pub(crate) async fn create_handler<R, C>(
    State(service): State<Arc<FeedbackService<R, C>>>,
    payload: Result<Json<FeedbackSubmission>, JsonRejection>,
) -> Response
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable feedback payload");
            return failure(FeedbackError::MissingField);
        }
    };

    match service.submit(submission) {
        Ok(feedback) => (
            StatusCode::OK,
            Json(json!({ "success": true, "feedback": feedback })),
        )
            .into_response(),
        Err(err) => failure(err),
    }
}

pub(crate) async fn delete_handler<R, C>(
    State(service): State<Arc<FeedbackService<R, C>>>,
    Path(id): Path<String>,
) -> Response
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    match service.delete(&FeedbackId(id)) {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(err) => failure(err),
    }
}

fn failure(err: FeedbackError) -> Response {
    let status = match err {
        FeedbackError::MissingField => StatusCode::BAD_REQUEST,
        FeedbackError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        warn!(error = %err, "feedback request failed");
    }
    let payload = json!({ "success": false, "error": err.to_string() });
    (status, Json(payload)).into_response()
}
