use super::types::{RentalEconomicsResult, RentalInputs, RepaymentType};

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: u32 = 12;

pub fn compute_rental_economics(rental: &RentalInputs, tax_rate: f64) -> RentalEconomicsResult {
    let annual_rent = rental.weekly_rent * WEEKS_PER_YEAR;
    // Simple interest on the full balance, not an amortised schedule.
    let rental_interest = rental.loan_balance * rental.interest_rate;
    let management_fee = annual_rent * rental.management_fee_rate;

    let total_expenses = rental_interest
        + rental.insurance_annual
        + rental.rates_annual
        + rental.maintenance_annual
        + management_fee
        + rental.depreciation_annual;
    let net_profit_before_tax = annual_rent - total_expenses;
    // Relief is capped at the rent it shelters; no loss carry-forward.
    let estimated_tax_saved = total_expenses.min(annual_rent) * tax_rate;

    let pni_monthly = amortized_payment(
        rental.interest_rate / MONTHS_PER_YEAR as f64,
        rental.term_years.saturating_mul(MONTHS_PER_YEAR),
        rental.loan_balance,
    );
    let pni_annual_repayment = pni_monthly * MONTHS_PER_YEAR as f64;
    let interest_only_annual_repayment = rental_interest;

    let annual_cash_freed = match rental.repayment_type {
        RepaymentType::InterestOnly => pni_annual_repayment - interest_only_annual_repayment,
        RepaymentType::PrincipalAndInterest => 0.0,
    };

    RentalEconomicsResult {
        annual_rent,
        rental_interest,
        management_fee,
        total_expenses,
        net_profit_before_tax,
        estimated_tax_saved,
        pni_annual_repayment,
        interest_only_annual_repayment,
        annual_cash_freed,
    }
}

/// Level payment that retires `present_value` over `periods` at `rate` per period.
///
/// A zero rate falls back to straight-line repayment and zero periods yield
/// no payment, so the function is total over its inputs.
pub fn amortized_payment(rate: f64, periods: u32, present_value: f64) -> f64 {
    if periods == 0 {
        return 0.0;
    }

    let n = periods as f64;
    if rate.abs() < 1e-12 {
        return present_value / n;
    }

    let denom = 1.0 - (1.0 + rate).powf(-n);
    present_value * rate / denom
}
