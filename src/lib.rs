pub mod app;
pub mod errors;
pub mod estimator;
pub mod goals;
pub mod handlers;
pub mod history;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use goals::GoalStore;
pub use history::HistoryStore;
pub use state::AppState;
pub use storage::{resolve_data_dir, KvStore};
