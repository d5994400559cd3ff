pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_cost_ledger, export_profit_report};
pub use prompts::{
    prompt_batch, prompt_cost_entry, prompt_mix_request, prompt_yes_no, resolve_batch_name,
};
pub use render::{display_batch_list, display_calculation, display_cost_summary, display_profit_report};
