use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::models::{Goal, GoalPeriod};
use crate::storage::KvStore;
use chrono::{DateTime, Utc};
use tracing::error;

pub const GOAL_KEY: &str = "ecotrack_goal";

pub struct GoalStore {
    kv: KvStore,
    goal: Option<Goal>,
}

impl GoalStore {
    pub async fn load(kv: KvStore) -> Self {
        let goal = match kv.read(GOAL_KEY).await {
            Some(raw) => match serde_json::from_str::<Goal>(&raw) {
                Ok(goal) if goal.target.is_finite() && goal.target > 0.0 => Some(goal),
                Ok(goal) => {
                    error!("discarding persisted goal with invalid target {}", goal.target);
                    None
                }
                Err(err) => {
                    error!("failed to parse goal snapshot: {err}");
                    None
                }
            },
            None => None,
        };

        Self { kv, goal }
    }

    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }

    // Target validity (> 0, finite) is enforced at the request boundary.
    pub async fn save(&mut self, goal: Goal) -> Result<(), AppError> {
        let payload = serde_json::to_string_pretty(&goal)?;
        self.kv.write(GOAL_KEY, &payload).await?;
        self.goal = Some(goal);
        Ok(())
    }

    pub async fn clear(&mut self) -> Result<(), AppError> {
        self.goal = None;
        self.kv.remove(GOAL_KEY).await
    }
}

impl Goal {
    // Clamped so a negative average never reads above 100.
    pub fn progress(&self, current_average: f64) -> f64 {
        let used = (current_average / self.target * 100.0).min(100.0);
        (100.0 - used).clamp(0.0, 100.0)
    }

    pub fn is_on_track(&self, current_average: f64) -> bool {
        current_average <= self.target
    }

    // No daily window exists; daily goals compare against the weekly average.
    pub fn current_average(&self, history: &HistoryStore) -> f64 {
        self.current_average_at(Utc::now(), history)
    }

    pub fn current_average_at(&self, now: DateTime<Utc>, history: &HistoryStore) -> f64 {
        match self.period {
            GoalPeriod::Monthly => history.monthly_average_at(now),
            GoalPeriod::Daily | GoalPeriod::Weekly => history.weekly_average_at(now),
        }
    }
}
