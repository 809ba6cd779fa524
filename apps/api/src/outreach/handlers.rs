//! Axum route handlers for the Outreach API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::outreach::models::{ContactRequest, GenerationResult, Scenario, ScriptLength};
use crate::outreach::prompts::scenario_label;
use crate::outreach::tracker::RequestStatus;
use crate::outreach::validation::validate_contact;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInfo {
    pub id: Scenario,
    pub label: &'static str,
    pub prompt_label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptResponse {
    pub request_id: u64,
    /// False when a newer submission was issued before this one resolved.
    pub latest: bool,
    pub result: GenerationResult,
    pub length: ScriptLength,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/scenarios
pub async fn handle_list_scenarios() -> Json<Vec<ScenarioInfo>> {
    Json(
        Scenario::ALL
            .into_iter()
            .map(|id| ScenarioInfo {
                id,
                label: id.form_label(),
                prompt_label: scenario_label(id),
            })
            .collect(),
    )
}

/// POST /api/v1/scripts
///
/// Validates the contact, then runs exactly one generation call. The tracked
/// status moves to Loading before the call and is resolved afterwards unless a
/// newer submission has superseded this one.
///
/// The call and its resolution run on their own task, so a client that
/// disconnects mid-flight neither aborts the provider call nor leaves the
/// status stuck in Loading.
pub async fn handle_generate_script(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ScriptResponse>, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::Validation(format!("请求格式错误：{}", e.body_text())))?;

    // Precondition failures never reach the provider or touch the status
    validate_contact(&request)?;

    let token = state.tracker.begin();
    info!("Generating script #{} for {:?}", token.value(), request.scenario);

    let generator = state.generator.clone();
    let tracker = state.tracker.clone();
    let task = tokio::spawn(async move {
        let outcome = generator.generate(&request).await;
        let latest = tracker.resolve(token, &outcome);
        (outcome, latest)
    });

    let (outcome, latest) = match task.await {
        Ok(done) => done,
        Err(e) => {
            state.tracker.abandon(token);
            return Err(AppError::Internal(anyhow::anyhow!(
                "generation task for request {} failed: {e}",
                token.value()
            )));
        }
    };
    let result = outcome?;

    Ok(Json(ScriptResponse {
        request_id: token.value(),
        latest,
        length: result.script_length(),
        result,
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/scripts/latest
pub async fn handle_latest_status(State(state): State<AppState>) -> Json<RequestStatus> {
    Json(state.tracker.status())
}
