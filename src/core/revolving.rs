use super::types::{ProjectionResult, ProjectionYear};

/// Projects a constant annual deposit into a revolving credit facility.
///
/// Each year the deposit comes off the balance first, then the interest that
/// no longer accrues is measured on the reduced balance. The balance is not
/// floored at zero.
pub fn project_revolving_credit(
    home_loan_balance: f64,
    home_loan_rate: f64,
    annual_cash_freed: f64,
    projection_years: u32,
) -> ProjectionResult {
    let (_, _, years) = (1..=projection_years).fold(
        (
            home_loan_balance,
            0.0_f64,
            Vec::with_capacity(projection_years as usize),
        ),
        |(balance, cumulative_saved, mut years), year| {
            let balance = balance - annual_cash_freed;
            let interest_saved = balance * home_loan_rate;
            let cumulative_saved = cumulative_saved + interest_saved;
            years.push(ProjectionYear {
                year,
                closing_balance: balance,
                interest_saved_this_year: interest_saved,
                cumulative_principal_redirected: annual_cash_freed * year as f64,
                cumulative_interest_saved: cumulative_saved,
            });
            (balance, cumulative_saved, years)
        },
    );

    ProjectionResult { years }
}
