use crate::models::{ActivityInput, Breakdown, CategoryShares, Estimate, ImpactSummary};

// Illustrative coefficients, kg CO2 per year-equivalent per unit of activity.
const CAR_KG_PER_MILE: f64 = 0.411;
const FLIGHT_KG_EACH: f64 = 90.0;
const TRANSIT_KG_PER_MILE: f64 = 0.089;
const ELECTRICITY_KG_PER_KWH: f64 = 0.92;
const GAS_KG_PER_THERM: f64 = 5.3;
const MEAT_KG_PER_SERVING: f64 = 25.0;
const DAIRY_KG_PER_SERVING: f64 = 10.0;
const WASTE_BASE_KG: f64 = 500.0;
const RECYCLING_KG_PER_PERCENT: f64 = 50.0;

pub const AVERAGE_ANNUAL_KG: i64 = 16_000;

pub fn estimate(input: &ActivityInput) -> Estimate {
    let transport = input.transport.car_miles * CAR_KG_PER_MILE
        + input.transport.flights * FLIGHT_KG_EACH
        + input.transport.public_transport_miles * TRANSIT_KG_PER_MILE;
    let energy = input.energy.electricity_kwh * ELECTRICITY_KG_PER_KWH
        + input.energy.gas_therms * GAS_KG_PER_THERM;
    let food = input.food.meat_servings * MEAT_KG_PER_SERVING
        + input.food.dairy_servings * DAIRY_KG_PER_SERVING;
    let waste =
        (WASTE_BASE_KG - input.waste.recycling_percent * RECYCLING_KG_PER_PERCENT).max(0.0);

    let breakdown = Breakdown {
        transport: round_kg(transport),
        energy: round_kg(energy),
        food: round_kg(food),
        waste: round_kg(waste),
    };

    Estimate {
        total: breakdown.total(),
        breakdown,
    }
}

// Every category goes through this before the total is formed, so the four
// displayed numbers sum exactly to the displayed total.
fn round_kg(kg: f64) -> i64 {
    kg.round() as i64
}

pub fn percent_of_average(total: i64) -> i64 {
    (total as f64 / AVERAGE_ANNUAL_KG as f64 * 100.0).round() as i64
}

pub fn category_share(value: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round() as i64
}

pub fn category_shares(breakdown: &Breakdown, total: i64) -> CategoryShares {
    CategoryShares {
        transport: category_share(breakdown.transport, total),
        energy: category_share(breakdown.energy, total),
        food: category_share(breakdown.food, total),
        waste: category_share(breakdown.waste, total),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactLevel {
    Excellent,
    Good,
    Average,
    High,
}

impl ImpactLevel {
    pub fn from_total(total: i64) -> Self {
        Self::from_percent(percent_of_average(total))
    }

    pub fn from_percent(percent: i64) -> Self {
        if percent < 70 {
            ImpactLevel::Excellent
        } else if percent < 100 {
            ImpactLevel::Good
        } else if percent < 130 {
            ImpactLevel::Average
        } else {
            ImpactLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Excellent => "Excellent!",
            ImpactLevel::Good => "Good",
            ImpactLevel::Average => "Average",
            ImpactLevel::High => "High",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ImpactLevel::Excellent => "You're well below average!",
            ImpactLevel::Good => "You're doing better than average",
            ImpactLevel::Average => "There's room for improvement",
            ImpactLevel::High => "Consider making some changes",
        }
    }

    pub fn summary(&self) -> ImpactSummary {
        ImpactSummary {
            level: match self {
                ImpactLevel::Excellent => "excellent",
                ImpactLevel::Good => "good",
                ImpactLevel::Average => "average",
                ImpactLevel::High => "high",
            },
            label: self.label(),
            message: self.message(),
        }
    }
}
