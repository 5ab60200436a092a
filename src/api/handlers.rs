//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use super::AppState;
use super::error::ApiError;
use super::types::ServiceInfo;
use crate::payload::{PlanEntry, ProductionPlanRequest, plan_entries};

/// Returns service name and version.
///
/// `GET /` → 200 + `ServiceInfo` JSON
pub async fn get_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Dispatches one production-plan request.
///
/// `POST /productionplan` → 200 + `Vec<PlanEntry>` JSON in dispatch order
/// → 400 + `ErrorResponse` for malformed scenarios
/// → 422 + `ErrorResponse` when the load cannot be met
pub async fn post_production_plan(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ProductionPlanRequest>, JsonRejection>,
) -> Result<Json<Vec<PlanEntry>>, ApiError> {
    let Json(request) = body?;
    let scenario = request.into_scenario();
    let plan = state.dispatcher.dispatch(&scenario)?;

    tracing::info!(
        load_mw = plan.load_mw(),
        units = plan.allocations().len(),
        backtracked = plan.adjustment().is_some(),
        "production plan computed"
    );
    Ok(Json(plan_entries(plan.allocations())))
}
