//! Basic example demonstrating the forecast models
//!
//! Run with: cargo run --example basic -p forecast-facade
//!
//! Set `RUST_LOG=debug` to see fit diagnostics.

use forecast_facade::linalg::format::format_bracketed_vector;
use forecast_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RAW: &str = "\
w01;245\nw02;247\nw03;256\nw04;257\nw05;257\nw06;258\nw07;255\nw08;253\nw09;255\nw10;251\n\
w11;251\nw12;256\nw13;256\nw14;253\nw15;249\nw16;247\nw17;246\nw18;244\nw19;242\nw20;244\n";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_core=info".into()),
        )
        .init();

    println!("=== forecast Basic Examples ===\n");

    let history = parse_series(RAW)?;
    println!("History ({} points): {}\n", history.len(), format_bracketed_vector(&history));

    let config = ForecastConfig::default();
    let specs = [
        config.model,
        ModelSpec::SimpleLinear,
        ModelSpec::Polynomial { order: 3 },
        ModelSpec::AutoRegression { p: 3 },
        ModelSpec::Arma { p: 3, q: 1 },
        ModelSpec::Arima { p: 3, d: 1, q: 1 },
    ];

    for (i, spec) in specs.iter().enumerate() {
        let mut model = spec.build()?;
        let score = model.fit(&history)?;
        let projection = project(model.as_ref(), history.len(), config.horizon)?;

        println!("{}. {} ({})", i + 1, spec, model.family());
        println!("   R²: {:.4}", score.value());
        println!(
            "   Forecast: {:?}",
            projection
                .prospective
                .iter()
                .map(|p| format!("{:.2}", p.value))
                .collect::<Vec<_>>()
        );
        if !projection.retrospective.is_empty() {
            println!("   Fitted history points: {}", projection.retrospective.len());
        }
        println!("   {}\n", model);
    }

    Ok(())
}
