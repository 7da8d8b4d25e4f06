use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use crate::core::{GlobalSettings, HomeLoanInputs, RentalInputs, RepaymentType, ScenarioInputs};

pub const MAX_PROJECTION_YEARS: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{flag} must be between 0 and 100")]
    PercentOutOfRange { flag: &'static str },
    #[error("{flag} must be a finite amount >= 0")]
    InvalidAmount { flag: &'static str },
    #[error("{flag} must be > 0")]
    ZeroTerm { flag: &'static str },
    #[error("--projection-years must be between 1 and 10, got {0}")]
    ProjectionYears(u32),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum CliRepaymentType {
    InterestOnly,
    PrincipalAndInterest,
}

impl From<CliRepaymentType> for RepaymentType {
    fn from(value: CliRepaymentType) -> Self {
        match value {
            CliRepaymentType::InterestOnly => RepaymentType::InterestOnly,
            CliRepaymentType::PrincipalAndInterest => RepaymentType::PrincipalAndInterest,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ApiRepaymentType {
    #[serde(alias = "interestOnly", alias = "interest_only", alias = "io")]
    InterestOnly,
    #[serde(
        alias = "principalAndInterest",
        alias = "principal_and_interest",
        alias = "pni"
    )]
    PrincipalAndInterest,
}

impl From<ApiRepaymentType> for CliRepaymentType {
    fn from(value: ApiRepaymentType) -> Self {
        match value {
            ApiRepaymentType::InterestOnly => CliRepaymentType::InterestOnly,
            ApiRepaymentType::PrincipalAndInterest => CliRepaymentType::PrincipalAndInterest,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SimulatePayload {
    home_loan_balance: Option<f64>,
    home_interest_rate: Option<f64>,
    home_term_years: Option<u32>,
    home_insurance: Option<f64>,
    home_rates: Option<f64>,

    rental_loan_balance: Option<f64>,
    rental_interest_rate: Option<f64>,
    rental_term_years: Option<u32>,
    repayment_type: Option<ApiRepaymentType>,
    weekly_rent: Option<f64>,
    rental_insurance: Option<f64>,
    rental_rates: Option<f64>,
    rental_maintenance: Option<f64>,
    management_fee: Option<f64>,
    depreciation: Option<f64>,

    tax_rate: Option<f64>,
    projection_years: Option<u32>,
}

#[derive(Parser, Debug)]
#[command(
    name = "nzprop",
    about = "NZ property tax and revolving credit optimiser (rental economics + home loan offset projection)"
)]
pub(crate) struct Cli {
    #[arg(long, default_value_t = 975_000.0, help = "Owner-occupied home loan balance")]
    pub(crate) home_loan_balance: f64,
    #[arg(
        long,
        default_value_t = 4.99,
        help = "Home loan interest rate in percent, e.g. 4.99"
    )]
    pub(crate) home_interest_rate: f64,
    #[arg(long, default_value_t = 30, help = "Home loan term in years")]
    pub(crate) home_term_years: u32,
    #[arg(long, default_value_t = 4_200.0, help = "Home insurance per year")]
    pub(crate) home_insurance: f64,
    #[arg(long, default_value_t = 4_300.0, help = "Home council rates per year")]
    pub(crate) home_rates: f64,

    #[arg(long, default_value_t = 385_000.0)]
    pub(crate) rental_loan_balance: f64,
    #[arg(
        long,
        default_value_t = 4.99,
        help = "Rental loan interest rate in percent"
    )]
    pub(crate) rental_interest_rate: f64,
    #[arg(long, default_value_t = 30)]
    pub(crate) rental_term_years: u32,
    #[arg(long, value_enum, default_value_t = CliRepaymentType::InterestOnly)]
    pub(crate) repayment_type: CliRepaymentType,
    #[arg(long, default_value_t = 760.0)]
    pub(crate) weekly_rent: f64,
    #[arg(long, default_value_t = 3_500.0, help = "Rental insurance per year")]
    pub(crate) rental_insurance: f64,
    #[arg(long, default_value_t = 4_300.0, help = "Rental council rates per year")]
    pub(crate) rental_rates: f64,
    #[arg(long, default_value_t = 2_000.0, help = "Annual rental maintenance")]
    pub(crate) rental_maintenance: f64,
    #[arg(
        long,
        default_value_t = 5.2,
        help = "Property management fee in percent of rent"
    )]
    pub(crate) management_fee: f64,
    #[arg(long, default_value_t = 1_500.0, help = "Chattel depreciation per year")]
    pub(crate) depreciation: f64,

    #[arg(long, default_value_t = 33.0, help = "Marginal tax rate in percent")]
    pub(crate) tax_rate: f64,
    #[arg(
        long,
        default_value_t = 5,
        help = "Projection period in years (1-10)"
    )]
    pub(crate) projection_years: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn default_cli() -> Cli {
    Cli {
        home_loan_balance: 975_000.0,
        home_interest_rate: 4.99,
        home_term_years: 30,
        home_insurance: 4_200.0,
        home_rates: 4_300.0,
        rental_loan_balance: 385_000.0,
        rental_interest_rate: 4.99,
        rental_term_years: 30,
        repayment_type: CliRepaymentType::InterestOnly,
        weekly_rent: 760.0,
        rental_insurance: 3_500.0,
        rental_rates: 4_300.0,
        rental_maintenance: 2_000.0,
        management_fee: 5.2,
        depreciation: 1_500.0,
        tax_rate: 33.0,
        projection_years: 5,
        format: OutputFormat::Text,
    }
}

pub(crate) fn build_inputs(cli: &Cli) -> Result<ScenarioInputs, InputError> {
    for (flag, rate) in [
        ("--home-interest-rate", cli.home_interest_rate),
        ("--rental-interest-rate", cli.rental_interest_rate),
        ("--management-fee", cli.management_fee),
        ("--tax-rate", cli.tax_rate),
    ] {
        if !(0.0..=100.0).contains(&rate) {
            return Err(InputError::PercentOutOfRange { flag });
        }
    }

    for (flag, amount) in [
        ("--home-loan-balance", cli.home_loan_balance),
        ("--home-insurance", cli.home_insurance),
        ("--home-rates", cli.home_rates),
        ("--rental-loan-balance", cli.rental_loan_balance),
        ("--weekly-rent", cli.weekly_rent),
        ("--rental-insurance", cli.rental_insurance),
        ("--rental-rates", cli.rental_rates),
        ("--rental-maintenance", cli.rental_maintenance),
        ("--depreciation", cli.depreciation),
    ] {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InputError::InvalidAmount { flag });
        }
    }

    if cli.home_term_years == 0 {
        return Err(InputError::ZeroTerm {
            flag: "--home-term-years",
        });
    }
    if cli.rental_term_years == 0 {
        return Err(InputError::ZeroTerm {
            flag: "--rental-term-years",
        });
    }

    if !(1..=MAX_PROJECTION_YEARS).contains(&cli.projection_years) {
        return Err(InputError::ProjectionYears(cli.projection_years));
    }

    Ok(ScenarioInputs {
        home_loan: HomeLoanInputs {
            balance: cli.home_loan_balance,
            interest_rate: cli.home_interest_rate / 100.0,
            term_years: cli.home_term_years,
            insurance_annual: cli.home_insurance,
            rates_annual: cli.home_rates,
        },
        rental: RentalInputs {
            loan_balance: cli.rental_loan_balance,
            interest_rate: cli.rental_interest_rate / 100.0,
            term_years: cli.rental_term_years,
            repayment_type: cli.repayment_type.into(),
            weekly_rent: cli.weekly_rent,
            insurance_annual: cli.rental_insurance,
            rates_annual: cli.rental_rates,
            maintenance_annual: cli.rental_maintenance,
            management_fee_rate: cli.management_fee / 100.0,
            depreciation_annual: cli.depreciation,
        },
        settings: GlobalSettings {
            marginal_tax_rate: cli.tax_rate / 100.0,
            projection_years: cli.projection_years,
        },
    })
}

pub(crate) fn inputs_from_payload(payload: SimulatePayload) -> Result<ScenarioInputs, InputError> {
    let mut cli = default_cli();

    if let Some(v) = payload.home_loan_balance {
        cli.home_loan_balance = v;
    }
    if let Some(v) = payload.home_interest_rate {
        cli.home_interest_rate = v;
    }
    if let Some(v) = payload.home_term_years {
        cli.home_term_years = v;
    }
    if let Some(v) = payload.home_insurance {
        cli.home_insurance = v;
    }
    if let Some(v) = payload.home_rates {
        cli.home_rates = v;
    }

    if let Some(v) = payload.rental_loan_balance {
        cli.rental_loan_balance = v;
    }
    if let Some(v) = payload.rental_interest_rate {
        cli.rental_interest_rate = v;
    }
    if let Some(v) = payload.rental_term_years {
        cli.rental_term_years = v;
    }
    if let Some(v) = payload.repayment_type {
        cli.repayment_type = v.into();
    }
    if let Some(v) = payload.weekly_rent {
        cli.weekly_rent = v;
    }
    if let Some(v) = payload.rental_insurance {
        cli.rental_insurance = v;
    }
    if let Some(v) = payload.rental_rates {
        cli.rental_rates = v;
    }
    if let Some(v) = payload.rental_maintenance {
        cli.rental_maintenance = v;
    }
    if let Some(v) = payload.management_fee {
        cli.management_fee = v;
    }
    if let Some(v) = payload.depreciation {
        cli.depreciation = v;
    }

    if let Some(v) = payload.tax_rate {
        cli.tax_rate = v;
    }
    if let Some(v) = payload.projection_years {
        cli.projection_years = v;
    }

    build_inputs(&cli)
}
