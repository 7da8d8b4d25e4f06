use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RepaymentType {
    InterestOnly,
    PrincipalAndInterest,
}

#[derive(Debug, Clone)]
pub struct RentalInputs {
    pub loan_balance: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub repayment_type: RepaymentType,
    pub weekly_rent: f64,
    pub insurance_annual: f64,
    pub rates_annual: f64,
    pub maintenance_annual: f64,
    pub management_fee_rate: f64,
    pub depreciation_annual: f64,
}

/// Owner-occupied loan. Only `balance` and `interest_rate` feed the
/// projection; the remaining fields travel with the input record untouched.
#[derive(Debug, Clone)]
pub struct HomeLoanInputs {
    pub balance: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub insurance_annual: f64,
    pub rates_annual: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct GlobalSettings {
    pub marginal_tax_rate: f64,
    pub projection_years: u32,
}

#[derive(Debug, Clone)]
pub struct ScenarioInputs {
    pub home_loan: HomeLoanInputs,
    pub rental: RentalInputs,
    pub settings: GlobalSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalEconomicsResult {
    pub annual_rent: f64,
    pub rental_interest: f64,
    pub management_fee: f64,
    pub total_expenses: f64,
    pub net_profit_before_tax: f64,
    pub estimated_tax_saved: f64,
    pub pni_annual_repayment: f64,
    pub interest_only_annual_repayment: f64,
    pub annual_cash_freed: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    pub year: u32,
    pub closing_balance: f64,
    pub interest_saved_this_year: f64,
    pub cumulative_principal_redirected: f64,
    pub cumulative_interest_saved: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectionResult {
    pub years: Vec<ProjectionYear>,
}

impl ProjectionResult {
    /// First year whose projected balance is at or below zero.
    pub fn payoff_year(&self) -> Option<u32> {
        self.years
            .iter()
            .find(|y| y.closing_balance <= 0.0)
            .map(|y| y.year)
    }

    pub fn cumulative_interest_saved(&self) -> f64 {
        self.years
            .last()
            .map(|y| y.cumulative_interest_saved)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub interest_only_enabled: bool,
    pub projection_years: u32,
    pub annual_cash_freed: f64,
    pub total_extra_paid: f64,
    pub cumulative_interest_saved: f64,
    pub payoff_year: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub rental: RentalEconomicsResult,
    pub projection: ProjectionResult,
    pub summary: ScenarioSummary,
}
