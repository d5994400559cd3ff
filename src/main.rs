use clap::Parser;
use dialoguer::Select;
use std::path::Path;

use agro_fatten_rs::analysis::{
    break_even_price, estimate_daily_consumption, initial_arroba_value, monthly_cost,
    monthly_cost_per_head, profit_curve, project_profit,
};
use agro_fatten_rs::cli::{Cli, Command};
use agro_fatten_rs::error::{FattenError, Result};
use agro_fatten_rs::formulator;
use agro_fatten_rs::formulator::constants::{CURVE_POINTS, CURVE_PRICE_STEP};
use agro_fatten_rs::interface::{
    display_batch_list, display_calculation, display_cost_summary, display_profit_report,
    export_cost_ledger, export_profit_report, prompt_batch, prompt_cost_entry, prompt_mix_request,
    prompt_yes_no, resolve_batch_name,
};
use agro_fatten_rs::state::{HerdStateManager, load_batches, save_batches};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Ration => cmd_ration(),
        Command::AddBatch => cmd_add_batch(&cli.file),
        Command::AddCost { batch } => cmd_add_cost(&cli.file, batch.as_deref()),
        Command::Costs { batch, export } => {
            cmd_costs(&cli.file, batch.as_deref(), export.as_deref())
        }
        Command::Report {
            batch,
            arroba_price,
            export,
        } => cmd_report(&cli.file, batch.as_deref(), arroba_price, export.as_deref()),
        Command::List => cmd_list(&cli.file),
    }
}

/// Load the herd state, or start empty when the file does not exist yet.
fn load_state(file_path: &str) -> Result<HerdStateManager> {
    let path = Path::new(file_path);
    if path.exists() {
        Ok(HerdStateManager::new(load_batches(path)?))
    } else {
        Ok(HerdStateManager::new(vec![]))
    }
}

/// Resolve a batch name from an argument or an interactive selection.
fn select_batch(manager: &HerdStateManager, arg: Option<&str>) -> Result<String> {
    let names = manager.batch_names();
    if names.is_empty() {
        return Err(FattenError::InvalidInput(
            "No batches registered. Use 'add-batch' first.".to_string(),
        ));
    }

    match arg {
        Some(input) => resolve_batch_name(&names, input)?
            .ok_or_else(|| FattenError::BatchNotFound(input.to_string())),
        None => {
            let selection = Select::new()
                .with_prompt("Select a batch")
                .items(&names)
                .default(0)
                .interact()?;
            Ok(names[selection].clone())
        }
    }
}

/// Calculate the cost of a ration mix interactively.
fn cmd_ration() -> Result<()> {
    let request = prompt_mix_request()?;

    match formulator::calculate(&request) {
        Ok(result) => display_calculation(&result),
        Err(e) => println!("Cannot calculate: {}", e),
    }

    Ok(())
}

/// Register a new fattening batch.
fn cmd_add_batch(file_path: &str) -> Result<()> {
    let mut manager = load_state(file_path)?;
    let batch = prompt_batch()?;

    if manager.get_batch(&batch.name).is_some() {
        let replace = prompt_yes_no("A batch with this name exists. Replace it?", false)?;
        if !replace {
            println!("Batch not saved.");
            return Ok(());
        }
    }

    match initial_arroba_value(&batch) {
        Ok(value) => println!("Initial cost per arroba: {:.2}", value),
        Err(e) => println!("Initial cost per arroba unavailable: {}", e),
    }

    manager.insert_batch(batch);
    save_batches(file_path, &manager.to_batches())?;
    println!("Batch saved. {} batch(es) on file.", manager.len());

    Ok(())
}

/// Record a cost entry for a batch.
fn cmd_add_cost(file_path: &str, batch_arg: Option<&str>) -> Result<()> {
    let mut manager = load_state(file_path)?;
    let name = select_batch(&manager, batch_arg)?;

    let entry = prompt_cost_entry()?;
    manager.add_cost(&name, entry)?;
    save_batches(file_path, &manager.to_batches())?;

    let batch = manager
        .get_batch(&name)
        .ok_or_else(|| FattenError::BatchNotFound(name.clone()))?;
    println!(
        "Cost recorded. {} entries, {:.2} accumulated.",
        batch.costs.len(),
        batch.accumulated_cost()
    );

    Ok(())
}

/// Show the cost ledger and monthly summaries for a batch.
fn cmd_costs(file_path: &str, batch_arg: Option<&str>, export: Option<&str>) -> Result<()> {
    let manager = load_state(file_path)?;
    let name = select_batch(&manager, batch_arg)?;
    let batch = manager
        .get_batch(&name)
        .ok_or_else(|| FattenError::BatchNotFound(name.clone()))?;

    let per_head = monthly_cost_per_head(batch)?;
    let total = monthly_cost(batch)?;
    let consumption = estimate_daily_consumption(batch.current_weight);

    display_cost_summary(batch, per_head, total, consumption);

    if let Some(path) = export {
        export_cost_ledger(path, batch)?;
        println!("Cost ledger exported to {}", path);
    }

    Ok(())
}

/// Project profit, ROI, and break-even price for a batch.
fn cmd_report(
    file_path: &str,
    batch_arg: Option<&str>,
    arroba_price: Option<f64>,
    export: Option<&str>,
) -> Result<()> {
    let manager = load_state(file_path)?;
    let name = select_batch(&manager, batch_arg)?;
    let batch = manager
        .get_batch(&name)
        .ok_or_else(|| FattenError::BatchNotFound(name.clone()))?;

    let price = arroba_price.unwrap_or(batch.arroba_price);
    let metrics = project_profit(batch, price)?;
    let break_even = break_even_price(batch)?;

    // Center the projection curve on the quoted price
    let curve_start = (price - CURVE_PRICE_STEP * (CURVE_POINTS as f64 / 2.0)).max(0.0);
    let curve = profit_curve(batch, curve_start, CURVE_PRICE_STEP, CURVE_POINTS)?;

    display_profit_report(batch, price, &metrics, break_even, &curve);

    if let Some(path) = export {
        export_profit_report(path, batch, &metrics, break_even, &curve)?;
        println!("Report exported to {}", path);
    }

    Ok(())
}

/// List all registered batches.
fn cmd_list(file_path: &str) -> Result<()> {
    let manager = load_state(file_path)?;
    display_batch_list(&manager.all_batches());
    Ok(())
}
