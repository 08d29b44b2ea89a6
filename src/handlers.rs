use crate::dates::{date_key, parse_date};
use crate::errors::AppError;
use crate::models::{
    DashboardQuery, DashboardResponse, DetailsQuery, ReloadResponse, SelectRequest,
    SelectionResponse,
};
use crate::state::{AppState, SelectError};
use crate::ui::render_index;
use crate::views::{build_dashboard, selection_response};
use crate::window::clamp_days;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::{debug, info};

const NO_SUMMARY: &str = "summary data unavailable";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    let latest = dashboard
        .store()
        .and_then(|store| store.latest_date())
        .map(date_key);
    Html(render_index(latest.as_deref()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let days = clamp_days(query.days.as_deref());
    let dashboard = state.dashboard.lock().await;
    let store = dashboard
        .store()
        .ok_or_else(|| AppError::unavailable(NO_SUMMARY))?;

    Ok(Json(build_dashboard(
        store,
        days,
        dashboard.selection(),
        dashboard.details(),
    )))
}

pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let date = parse_date(payload.date.trim())
        .ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?;

    let mut dashboard = state.dashboard.lock().await;
    let selection = *dashboard.select(date).map_err(|err| match err {
        SelectError::NoData => AppError::unavailable(NO_SUMMARY),
        SelectError::UnknownDate(date) => AppError::not_found(format!("no report for {date}")),
    })?;
    debug!(report_date = %date, token = selection.token(), "selection changed");

    Ok(Json(selection_response(&selection, dashboard.details())))
}

pub async fn get_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<SelectionResponse>, AppError> {
    let dashboard = state.dashboard.lock().await;
    let selection = dashboard
        .selection()
        .ok_or_else(|| AppError::unavailable(NO_SUMMARY))?;
    if !selection.is_current(query.token) {
        return Err(AppError::conflict(format!(
            "token {} is stale, latest is {}",
            query.token,
            selection.token()
        )));
    }

    Ok(Json(selection_response(selection, dashboard.details())))
}

pub async fn reload(State(state): State<AppState>) -> Json<ReloadResponse> {
    let mut dashboard = state.dashboard.lock().await;
    let (summary, details) = dashboard.reload(&state.sources).await;
    let record_count = dashboard.store().map_or(0, |store| store.len());
    let event_count = dashboard.details().event_count();
    info!(record_count, event_count, "data reloaded");

    Json(ReloadResponse {
        summary,
        details,
        record_count,
        event_count,
    })
}
