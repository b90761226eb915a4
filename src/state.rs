use crate::goals::GoalStore;
use crate::history::HistoryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<Mutex<HistoryStore>>,
    pub goals: Arc<Mutex<GoalStore>>,
}

impl AppState {
    pub fn new(history: HistoryStore, goals: GoalStore) -> Self {
        Self {
            history: Arc::new(Mutex::new(history)),
            goals: Arc::new(Mutex::new(goals)),
        }
    }
}
