mod engine;
mod rental;
mod revolving;
mod types;

pub use engine::run_scenario;
pub use rental::{amortized_payment, compute_rental_economics};
pub use revolving::project_revolving_credit;
pub use types::{
    GlobalSettings, HomeLoanInputs, ProjectionResult, ProjectionYear, RentalEconomicsResult,
    RentalInputs, RepaymentType, ScenarioInputs, ScenarioResult, ScenarioSummary,
};
