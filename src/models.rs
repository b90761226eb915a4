use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ActivityInput {
    pub transport: TransportInput,
    pub energy: EnergyInput,
    pub food: FoodInput,
    pub waste: WasteInput,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TransportInput {
    pub car_miles: f64,
    pub flights: f64,
    pub public_transport_miles: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct EnergyInput {
    pub electricity_kwh: f64,
    pub gas_therms: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FoodInput {
    pub meat_servings: f64,
    pub dairy_servings: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct WasteInput {
    pub recycling_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub transport: i64,
    pub energy: i64,
    pub food: i64,
    pub waste: i64,
}

impl Breakdown {
    pub fn total(&self) -> i64 {
        self.transport
            .saturating_add(self.energy)
            .saturating_add(self.food)
            .saturating_add(self.waste)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub total: i64,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub total: i64,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub target: f64,
    pub period: GoalPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPeriod::Daily => "daily",
            GoalPeriod::Weekly => "weekly",
            GoalPeriod::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub total: i64,
    pub breakdown: Breakdown,
    pub shares: CategoryShares,
    pub percent_of_average: i64,
    pub impact: ImpactSummary,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryShares {
    pub transport: i64,
    pub energy: i64,
    pub food: i64,
    pub waste: i64,
}

#[derive(Debug, Serialize)]
pub struct ImpactSummary {
    pub level: &'static str,
    pub label: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SaveRecordRequest {
    pub total: i64,
    pub breakdown: Breakdown,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<FootprintRecord>,
    pub weekly_average: f64,
    pub monthly_average: f64,
}

#[derive(Debug, Deserialize)]
pub struct SaveGoalRequest {
    pub target: f64,
    pub period: GoalPeriod,
}

#[derive(Debug, Serialize)]
pub struct GoalStatusResponse {
    pub goal: Option<Goal>,
    pub current_average: Option<f64>,
    pub progress: Option<f64>,
    pub on_track: Option<bool>,
}
