//! Output formatting: a plain-text summary table, or a per-scenario CSV
//! export of the month-by-month ledger.

use std::fs;
use std::path::Path;

use forecast_core::emergency_fund::EmergencyFundEstimate;
use forecast_core::Forecast;
use rust_decimal::Decimal;

pub fn print_summary(forecast: &Forecast, estimate: &EmergencyFundEstimate) {
    println!("scenario: {}", forecast.name);
    println!("{:<9} {:>14} {:>12} {:>12}", "month", "balance", "costs", "income");
    for (month, balance) in &forecast.balance {
        let costs = forecast.costs.get(month).copied().unwrap_or(Decimal::ZERO);
        let income = forecast.income.get(month).copied().unwrap_or(Decimal::ZERO);
        println!("{month:<9} {balance:>14} {costs:>12} {income:>12}");
        for note in forecast.notes.get(month).into_iter().flatten() {
            println!("  note: {note}");
        }
    }
    println!(
        "emergency fund: median monthly expense {}, {}",
        estimate.median_monthly_expense, estimate.recommendation
    );
    println!();
}

/// Write `forecast`'s ledger to `<dir>/<scenario name>.csv`. Multiple
/// notes in one month are joined with `; ` inside the single `notes`
/// cell, since `,` is already the field delimiter.
pub fn write_csv(dir: &Path, forecast: &Forecast) -> color_eyre::Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.csv", sanitize_filename(&forecast.name)));
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(["month", "balance", "costs", "income", "notes"])?;
    for (month, balance) in &forecast.balance {
        let costs = forecast.costs.get(month).copied().unwrap_or(Decimal::ZERO);
        let income = forecast.income.get(month).copied().unwrap_or(Decimal::ZERO);
        let notes = forecast
            .notes
            .get(month)
            .map(|notes| notes.join("; "))
            .unwrap_or_default();
        writer.write_record([
            month.to_string(),
            balance.to_string(),
            costs.to_string(),
            income.to_string(),
            notes,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
