use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/estimate", post(handlers::estimate))
        .route(
            "/api/history",
            get(handlers::get_history)
                .post(handlers::add_record)
                .delete(handlers::clear_history),
        )
        .route(
            "/api/goal",
            get(handlers::get_goal)
                .put(handlers::save_goal)
                .delete(handlers::clear_goal),
        )
        .route("/history/clear", post(handlers::clear_history_form))
        .route("/goal/clear", post(handlers::clear_goal_form))
        .with_state(state)
}
