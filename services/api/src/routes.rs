use crate::infra::AppState;
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use homecoming::bonus::{BonusScorer, CategoryTotal, TierView};
use homecoming::error::AppError;
use homecoming::feedback::{feedback_router, Clock, FeedbackRepository, FeedbackService};
use homecoming::quiz::{ArchetypeKey, ArchetypeResult, QuizAnswers, QUESTIONS, QUESTION_COUNT};
use homecoming::scoring::{
    generate_base_score, AttributeKind, AttributeSheet, BaseScoreBreakdown, LegacyRoll,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Six attribute values keyed the way the character builder names them.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttributeAllocation {
    pub(crate) assets: i32,
    pub(crate) intellect: i32,
    pub(crate) constitution: i32,
    pub(crate) legacy: i32,
    pub(crate) social_capital: i32,
    pub(crate) luck: i32,
}

impl AttributeAllocation {
    pub(crate) fn pairs(self) -> [(AttributeKind, i32); 6] {
        [
            (AttributeKind::Assets, self.assets),
            (AttributeKind::Intellect, self.intellect),
            (AttributeKind::Constitution, self.constitution),
            (AttributeKind::Legacy, self.legacy),
            (AttributeKind::SocialCapital, self.social_capital),
            (AttributeKind::Luck, self.luck),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BaseScoreRequest {
    pub(crate) attributes: AttributeAllocation,
    pub(crate) legacy_roll: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CombinedScoreRequest {
    pub(crate) base_total: i64,
    /// Category key to item key to raw value. Omitted items keep their defaults.
    #[serde(default)]
    pub(crate) bonus: BTreeMap<String, BTreeMap<String, i64>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CombinedScoreResponse {
    pub(crate) base_total: i64,
    pub(crate) bonus_total: i64,
    pub(crate) categories: Vec<CategoryTotal>,
    pub(crate) total: i64,
    pub(crate) tier: TierView,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) answers: BTreeMap<u8, ArchetypeKey>,
}

pub(crate) fn with_homecoming_routes<R, C>(service: Arc<FeedbackService<R, C>>) -> axum::Router
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    feedback_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scoring/catalog",
            axum::routing::get(bonus_catalog_endpoint),
        )
        .route(
            "/api/v1/scoring/base",
            axum::routing::post(base_score_endpoint),
        )
        .route(
            "/api/v1/scoring/combined",
            axum::routing::post(combined_score_endpoint),
        )
        .route(
            "/api/v1/quiz/questions",
            axum::routing::get(quiz_questions_endpoint),
        )
        .route(
            "/api/v1/quiz/classify",
            axum::routing::post(quiz_classify_endpoint),
        )
}

/// Browser clients of the site shell call the API cross-origin.
pub(crate) fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn bonus_catalog_endpoint() -> Json<BonusScorer> {
    Json(BonusScorer::standard())
}

pub(crate) async fn base_score_endpoint(
    Json(payload): Json<BaseScoreRequest>,
) -> Result<Json<BaseScoreBreakdown>, AppError> {
    let sheet = AttributeSheet::from_values(payload.attributes.pairs())?;
    let legacy_roll = LegacyRoll::new(payload.legacy_roll)?;
    let breakdown = generate_base_score(&sheet, legacy_roll)?;
    Ok(Json(breakdown))
}

pub(crate) async fn combined_score_endpoint(
    Json(payload): Json<CombinedScoreRequest>,
) -> Result<Json<CombinedScoreResponse>, AppError> {
    let mut scorer = BonusScorer::standard();
    for (category, items) in &payload.bonus {
        for (item, value) in items {
            scorer.set_line_item(category, item, *value)?;
        }
    }

    let combined = scorer.combined_with(payload.base_total);
    Ok(Json(CombinedScoreResponse {
        base_total: combined.base_total,
        bonus_total: combined.bonus_total,
        categories: scorer.category_totals(),
        total: combined.total,
        tier: combined.tier,
    }))
}

pub(crate) async fn quiz_questions_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "count": QUESTION_COUNT, "questions": QUESTIONS.as_slice() }))
}

pub(crate) async fn quiz_classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ArchetypeResult>, AppError> {
    let mut answers = QuizAnswers::new();
    for (question, label) in payload.answers {
        answers.record_answer(question, label)?;
    }
    let result = ArchetypeResult::from_answers(&answers)?;
    Ok(Json(result))
}
