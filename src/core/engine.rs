use tracing::debug;

use super::rental::compute_rental_economics;
use super::revolving::project_revolving_credit;
use super::types::{RepaymentType, ScenarioInputs, ScenarioResult, ScenarioSummary};

pub fn run_scenario(inputs: &ScenarioInputs) -> ScenarioResult {
    let settings = inputs.settings;
    let rental = compute_rental_economics(&inputs.rental, settings.marginal_tax_rate);
    let projection = project_revolving_credit(
        inputs.home_loan.balance,
        inputs.home_loan.interest_rate,
        rental.annual_cash_freed,
        settings.projection_years,
    );

    let summary = ScenarioSummary {
        interest_only_enabled: inputs.rental.repayment_type == RepaymentType::InterestOnly,
        projection_years: settings.projection_years,
        annual_cash_freed: rental.annual_cash_freed,
        total_extra_paid: rental.annual_cash_freed * settings.projection_years as f64,
        cumulative_interest_saved: projection.cumulative_interest_saved(),
        payoff_year: projection.payoff_year(),
    };

    debug!(
        years = settings.projection_years,
        cash_freed = rental.annual_cash_freed,
        interest_saved = summary.cumulative_interest_saved,
        "scenario evaluated"
    );

    ScenarioResult {
        rental,
        projection,
        summary,
    }
}
