use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use homecoming::feedback::{
    feedback_router, Feedback, FeedbackId, FeedbackRepository, FeedbackService, RepositoryError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Default)]
struct VecRepository {
    entries: Mutex<HashMap<FeedbackId, Feedback>>,
}

impl FeedbackRepository for VecRepository {
    fn insert(&self, feedback: Feedback) -> Result<Feedback, RepositoryError> {
        let mut guard = self.entries.lock().expect("poisoned");
        guard.insert(feedback.id.clone(), feedback.clone());
        Ok(feedback)
    }

    fn list(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(self.entries.lock().expect("poisoned").values().cloned().collect())
    }

    fn remove(&self, id: &FeedbackId) -> Result<(), RepositoryError> {
        self.entries.lock().expect("poisoned").remove(id);
        Ok(())
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[tokio::test]
async fn jane_says_hello_and_leaves() {
    let service = Arc::new(FeedbackService::new(Arc::new(VecRepository::default())));
    let router = feedback_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/feedbacks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "name": "Jane", "text": "Hello" }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("create");
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["feedback"]["id"]
        .as_str()
        .expect("id")
        .to_string();

    let response = router
        .clone()
        .oneshot(Request::get("/feedbacks").body(Body::empty()).expect("request"))
        .await
        .expect("list");
    let listed = body_json(response).await;
    assert_eq!(listed["feedbacks"][0]["name"], json!("Jane"));
    assert_eq!(listed["feedbacks"][0]["text"], json!("Hello"));

    let response = router
        .clone()
        .oneshot(
            Request::delete(format!("/feedbacks/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(Request::get("/feedbacks").body(Body::empty()).expect("request"))
        .await
        .expect("list");
    assert_eq!(body_json(response).await["feedbacks"], json!([]));
}
