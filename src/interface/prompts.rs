use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{FattenError, Result};
use crate::formulator::composition::sum_percentages;
use crate::models::{Batch, CostCategory, CostEntry, Ingredient, MixRequest};

fn prompt_f64(prompt: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    let raw: String = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| FattenError::InvalidInput("Invalid number".to_string()))
}

fn prompt_u32(prompt: &str, default: Option<u32>) -> Result<u32> {
    let mut input = Input::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    let raw: String = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| FattenError::InvalidInput("Invalid number".to_string()))
}

fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let raw: String = Input::new()
        .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
        .default(default.to_string())
        .interact_text()?;

    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FattenError::InvalidInput("Invalid date".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full ration mix request interactively.
///
/// Ingredients are entered until an empty name is given; the running
/// percentage total is shown after each so the user can steer toward 100.
pub fn prompt_mix_request() -> Result<MixRequest> {
    let total_weight = prompt_f64("Total ration weight (kg)", Some(100.0))?;
    let herd_size = prompt_u32("Herd size (head)", None)?;
    let daily_consumption_per_head = prompt_f64("Daily consumption per head (kg)", Some(2.5))?;

    let mut ingredients = Vec::new();
    loop {
        let name: String = Input::new()
            .with_prompt("Ingredient name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let name = name.trim();
        if name.is_empty() {
            break;
        }

        let percentage = prompt_f64(&format!("  {} share of mix (%)", name), None)?;
        let price_per_kg = prompt_f64(&format!("  {} price (per kg)", name), None)?;

        ingredients.push(Ingredient::new(name, percentage, price_per_kg));
        println!("  Running total: {}%", sum_percentages(&ingredients));
    }

    Ok(MixRequest {
        total_weight,
        herd_size,
        daily_consumption_per_head,
        ingredients,
    })
}

/// Collect a new fattening batch interactively.
pub fn prompt_batch() -> Result<Batch> {
    let name: String = Input::new().with_prompt("Batch name").interact_text()?;
    let cattle_count = prompt_u32("Head count", None)?;
    let purchase_value = prompt_f64("Total purchase value", None)?;
    let transport_cost = prompt_f64("Transport cost", Some(0.0))?;
    let initial_weight = prompt_f64("Initial weight per head (kg)", None)?;
    let target_weight = prompt_f64("Target weight per head (kg)", None)?;

    let today = Local::now().date_naive();
    let start_date = prompt_date("Start date", today)?;
    let end_date = prompt_date("Estimated end date", today)?;
    let arroba_price = prompt_f64("Current arroba price", None)?;

    Ok(Batch {
        name: name.trim().to_string(),
        cattle_count,
        purchase_value,
        transport_cost,
        initial_weight,
        current_weight: initial_weight,
        target_weight,
        start_date,
        end_date,
        arroba_price,
        costs: vec![],
    })
}

/// Collect a cost ledger entry interactively.
pub fn prompt_cost_entry() -> Result<CostEntry> {
    let labels: Vec<&str> = CostCategory::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("Cost category")
        .items(&labels)
        .default(0)
        .interact()?;
    let category = CostCategory::ALL[selection];

    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let amount = prompt_f64("Amount", None)?;
    let date = prompt_date("Date", Local::now().date_naive())?;

    Ok(CostEntry {
        category,
        description: description.trim().to_string(),
        amount,
        date,
    })
}

/// Resolve a batch name against the known names, with fuzzy fallback.
///
/// Exact matches (case-insensitive) win; otherwise close matches are offered
/// for confirmation or selection.
pub fn resolve_batch_name(names: &[String], input: &str) -> Result<Option<String>> {
    let exact = names
        .iter()
        .find(|n| n.to_lowercase() == input.to_lowercase());

    if let Some(name) = exact {
        return Ok(Some(name.clone()));
    }

    let mut candidates: Vec<(&String, f64)> = names
        .iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| name.clone()));
    }

    let options: Vec<String> = candidates.iter().take(5).map(|(n, _)| (*n).clone()).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which batch did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}
