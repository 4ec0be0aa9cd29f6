mod csv_provider;

use chrono::NaiveDate;
use csv_provider::{CsvInflationProvider, CsvStockProvider};
use realret_core::provider::{normalize_b3_ticker, InflationIndexProvider, StockPriceProvider};
use realret_core::{EngineConfig, RealReturnEngine, RealReturnError, RealReturnResult};
use serde::Serialize;
use std::error::Error;
use std::fs;

/// JSON document handed to the chart front end.
#[derive(Debug, Serialize)]
struct ChartPayload<'a> {
    ticker: &'a str,
    start: NaiveDate,
    end: NaiveDate,
    result: &'a RealReturnResult,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 6 || args.len() > 7 {
        eprintln!(
            "usage: {} <prices.csv> <ipca.csv> <ticker> <start YYYY-MM-DD> <end YYYY-MM-DD> [initial_amount]",
            args[0]
        );
        std::process::exit(2);
    }

    let ticker = normalize_b3_ticker(&args[3]);
    let start = NaiveDate::parse_from_str(&args[4], "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(&args[5], "%Y-%m-%d")?;
    let initial_amount: Option<f64> = match args.get(6) {
        Some(raw) => Some(raw.parse()?),
        None => None,
    };

    let prices = CsvStockProvider::new(&args[1]).fetch(&ticker, start, end)?;
    let inflation = CsvInflationProvider::new(&args[2]).fetch(start, end)?;

    let engine = RealReturnEngine::new(EngineConfig::default());
    let computed = match initial_amount {
        Some(amount) => engine.compute_with_projection(&prices, &inflation, start, end, amount),
        None => engine.compute(&prices, &inflation, start, end),
    };
    let result = computed.map_err(report_error)?;

    print_summary(&ticker, &result);

    let payload = ChartPayload {
        ticker: &ticker,
        start,
        end,
        result: &result,
    };
    let out_path = "real_return.json";
    fs::write(out_path, serde_json::to_string_pretty(&payload)?)?;
    println!("Chart data written to {}", out_path);

    Ok(())
}

// Defensive errors mean a pipeline invariant broke, not bad user input.
fn report_error(err: RealReturnError) -> RealReturnError {
    if err.is_defensive() {
        eprintln!("internal error, please report: {}", err);
    } else {
        eprintln!("error: {}", err);
    }
    err
}

fn print_summary(ticker: &str, result: &RealReturnResult) {
    println!("{} vs IPCA", ticker);
    println!("  Nominal return:   {:+.2}%", result.total_nominal_pct);
    println!("  Inflation (IPCA): {:+.2}%", result.total_inflation_pct);
    println!("  Real return:      {:+.2}%", result.total_real_pct);
    println!("  Outcome:          {}", result.outcome);

    if let Some(projection) = &result.projection {
        println!(
            "  R$ {:.2} invested -> R$ {:.2} (break-even with inflation: R$ {:.2})",
            projection.initial_amount,
            projection.final_amount,
            projection.inflation_adjusted_amount
        );
    }

    for warning in &result.warnings {
        println!("  warning: dropped price on {} ({})", warning.date, warning.reason);
    }
}
