use crate::errors::AppError;
use crate::estimator::{self, ImpactLevel};
use crate::models::{
    ActivityInput, EstimateResponse, FootprintRecord, Goal, GoalStatusResponse, HistoryResponse,
    SaveGoalRequest, SaveRecordRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (record_count, latest_total, weekly_average) = {
        let history = state.history.lock().await;
        (
            history.records().len(),
            history.records().first().map(|record| record.total),
            history.weekly_average(),
        )
    };
    let goal = state.goals.lock().await.goal();

    Html(render_index(record_count, latest_total, weekly_average, goal))
}

pub async fn estimate(Json(input): Json<ActivityInput>) -> Json<EstimateResponse> {
    let result = estimator::estimate(&input);

    Json(EstimateResponse {
        total: result.total,
        breakdown: result.breakdown,
        shares: estimator::category_shares(&result.breakdown, result.total),
        percent_of_average: estimator::percent_of_average(result.total),
        impact: ImpactLevel::from_total(result.total).summary(),
    })
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let history = state.history.lock().await;

    Ok(Json(HistoryResponse {
        records: history.records().to_vec(),
        weekly_average: history.weekly_average(),
        monthly_average: history.monthly_average(),
    }))
}

pub async fn add_record(
    State(state): State<AppState>,
    Json(payload): Json<SaveRecordRequest>,
) -> Result<Json<FootprintRecord>, AppError> {
    let record = state
        .history
        .lock()
        .await
        .add_record(payload.total, payload.breakdown)
        .await?;

    Ok(Json(record))
}

pub async fn clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.lock().await.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_goal(State(state): State<AppState>) -> Result<Json<GoalStatusResponse>, AppError> {
    Ok(Json(goal_status(&state).await))
}

pub async fn save_goal(
    State(state): State<AppState>,
    Json(payload): Json<SaveGoalRequest>,
) -> Result<Json<GoalStatusResponse>, AppError> {
    if !payload.target.is_finite() || payload.target <= 0.0 {
        return Err(AppError::bad_request("target must be a positive number"));
    }

    let goal = Goal {
        target: payload.target,
        period: payload.period,
    };
    state.goals.lock().await.save(goal).await?;

    Ok(Json(goal_status(&state).await))
}

pub async fn clear_goal(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.goals.lock().await.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

// Form fallbacks for the clear buttons when scripts are unavailable.
pub async fn clear_history_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.history.lock().await.clear().await?;
    Ok(Redirect::to("/"))
}

pub async fn clear_goal_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.goals.lock().await.clear().await?;
    Ok(Redirect::to("/"))
}

async fn goal_status(state: &AppState) -> GoalStatusResponse {
    let goal = state.goals.lock().await.goal();
    let Some(goal) = goal else {
        return GoalStatusResponse {
            goal: None,
            current_average: None,
            progress: None,
            on_track: None,
        };
    };

    let current = {
        let history = state.history.lock().await;
        goal.current_average(&history)
    };

    GoalStatusResponse {
        goal: Some(goal),
        current_average: Some(current),
        progress: Some(goal.progress(current)),
        on_track: Some(goal.is_on_track(current)),
    }
}
