use std::fmt;

use crate::core::ScenarioResult;

/// Whole-dollar currency with thousands separators, e.g. `$39,520`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn render_text_summary(result: &ScenarioResult) -> String {
    TextSummary(result).to_string()
}

/// Plain-text rendering of a scenario: rental block, loan strategy block and
/// the yearly series.
pub struct TextSummary<'a>(pub &'a ScenarioResult);

impl fmt::Display for TextSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rental = &self.0.rental;
        let summary = &self.0.summary;

        writeln!(f, "Rental Property")?;
        writeln!(
            f,
            "  Annual Rent:                    {}",
            format_currency(rental.annual_rent)
        )?;
        writeln!(
            f,
            "  Total Rental Expenses:          {}",
            format_currency(rental.total_expenses)
        )?;
        writeln!(
            f,
            "  Net Rental Profit (Before Tax): {}",
            format_currency(rental.net_profit_before_tax)
        )?;
        writeln!(
            f,
            "  Estimated Tax Saved:            {}",
            format_currency(rental.estimated_tax_saved)
        )?;
        writeln!(f)?;

        writeln!(f, "Owner-Occupied Loan Strategy")?;
        if summary.interest_only_enabled {
            writeln!(
                f,
                "  Annual Cash Freed (from IO switch): {}",
                format_currency(summary.annual_cash_freed)
            )?;
        } else {
            writeln!(f, "  Interest-only mode not enabled.")?;
        }
        writeln!(
            f,
            "  Total Extra Paid into Revolving Credit ({} yrs): {}",
            summary.projection_years,
            format_currency(summary.total_extra_paid)
        )?;
        writeln!(
            f,
            "  Cumulative Interest Saved on Home Loan: {}",
            format_currency(summary.cumulative_interest_saved)
        )?;
        if let Some(year) = summary.payoff_year {
            writeln!(
                f,
                "  Note: redirected cash exceeds the home loan balance from year {year}; later figures assume a negative balance."
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>4}  {:>16}  {:>16}  {:>22}",
            "Year", "Balance", "Total Extra Paid", "Cumulative Int. Saved"
        )?;
        for year in &self.0.projection.years {
            writeln!(
                f,
                "{:>4}  {:>16}  {:>16}  {:>22}",
                year.year,
                format_currency(year.closing_balance),
                format_currency(year.cumulative_principal_redirected),
                format_currency(year.cumulative_interest_saved)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        GlobalSettings, HomeLoanInputs, RentalInputs, RepaymentType, ScenarioInputs, run_scenario,
    };

    fn sample_inputs(repayment_type: RepaymentType) -> ScenarioInputs {
        ScenarioInputs {
            home_loan: HomeLoanInputs {
                balance: 975_000.0,
                interest_rate: 0.0499,
                term_years: 30,
                insurance_annual: 4_200.0,
                rates_annual: 4_300.0,
            },
            rental: RentalInputs {
                loan_balance: 385_000.0,
                interest_rate: 0.0499,
                term_years: 30,
                repayment_type,
                weekly_rent: 760.0,
                insurance_annual: 3_500.0,
                rates_annual: 4_300.0,
                maintenance_annual: 2_000.0,
                management_fee_rate: 0.052,
                depreciation_annual: 1_500.0,
            },
            settings: GlobalSettings {
                marginal_tax_rate: 0.33,
                projection_years: 3,
            },
        }
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(39_520.0), "$39,520");
        assert_eq!(format_currency(1_234_567.6), "$1,234,568");
        assert_eq!(format_currency(-6_963.46), "-$6,963");
    }

    #[test]
    fn format_currency_does_not_print_negative_zero() {
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn format_currency_rounds_halves_away_from_zero() {
        assert_eq!(format_currency(0.5), "$1");
        assert_eq!(format_currency(2.5), "$3");
        assert_eq!(format_currency(-0.5), "-$1");
    }

    #[test]
    fn text_summary_display_matches_rendered_string() {
        let result = run_scenario(&sample_inputs(RepaymentType::InterestOnly));
        assert_eq!(TextSummary(&result).to_string(), render_text_summary(&result));
    }

    #[test]
    fn text_summary_flags_balance_running_below_zero() {
        let mut inputs = sample_inputs(RepaymentType::InterestOnly);
        inputs.home_loan.balance = 8_000.0;
        let text = render_text_summary(&run_scenario(&inputs));

        assert!(text.contains("from year 2;"));
    }

    #[test]
    fn text_summary_lists_rental_figures_and_years() {
        let result = run_scenario(&sample_inputs(RepaymentType::InterestOnly));
        let text = render_text_summary(&result);

        assert!(text.contains("Annual Rent:                    $39,520"));
        assert!(text.contains("Total Rental Expenses:          $32,567"));
        assert!(text.contains("Net Rental Profit (Before Tax): $6,953"));
        assert!(text.contains("Estimated Tax Saved:            $10,747"));
        assert!(text.contains("Annual Cash Freed (from IO switch): $5,561"));
        assert!(text.contains("(3 yrs): $16,684"));
        assert_eq!(text.lines().filter(|l| l.starts_with("   ")).count(), 3);
    }

    #[test]
    fn text_summary_notes_when_interest_only_is_off() {
        let result = run_scenario(&sample_inputs(RepaymentType::PrincipalAndInterest));
        let text = render_text_summary(&result);

        assert!(text.contains("Interest-only mode not enabled."));
        assert!(!text.contains("Annual Cash Freed"));
    }
}
