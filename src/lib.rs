//! Compares deductible rental-loan interest against a non-deductible home
//! loan and projects the effect of redirecting interest-only savings into a
//! revolving credit facility.

pub mod api;
pub mod core;
pub mod report;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nzprop=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
