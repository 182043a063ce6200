//! Budget evaluator.
//!
//! Aggregates planned expenses against the user's budget profile. Only the
//! bookable categories (flights, hotels) count towards totals; activities are
//! booked directly with providers by the user, so activity expenses are
//! silently excluded — the report says so explicitly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use voyagent_core::error::ToolError;
use voyagent_core::profile::UserPreferences;

/// Categories that count towards the managed budget.
pub const BOOKABLE_CATEGORIES: &[&str] = &["flights", "hotels"];

const EXCLUSION_NOTE: &str = "Activities not included - book directly with providers";

/// A caller-supplied planned expense. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
}

/// The budget analysis returned to the agent runtime.
#[derive(Debug, Serialize)]
pub struct BudgetReport {
    pub total_spent: f64,
    pub budget_limit: f64,
    pub remaining: f64,
    pub breakdown: BTreeMap<String, f64>,
    pub within_budget: bool,
    pub warnings: Vec<String>,
    pub currency: String,
    pub note: String,
}

/// Parse the `planned_expenses` argument.
///
/// Accepts a JSON array of expenses or a JSON-encoded array in a string (the
/// shape LLM runtimes most often produce). Anything else is malformed input.
pub fn parse_expenses(value: &Value) -> Result<Vec<Expense>, ToolError> {
    let parsed = match value {
        Value::Array(_) => serde_json::from_value(value.clone()),
        Value::String(s) => serde_json::from_str(s),
        _ => {
            return Err(ToolError::InvalidArguments(
                "planned_expenses must be a JSON array of {category, amount} objects".into(),
            ));
        }
    };
    parsed.map_err(|e| ToolError::InvalidArguments(format!("invalid planned_expenses: {e}")))
}

/// Evaluate planned expenses against the budget profile.
pub fn evaluate(expenses: &[Expense], preferences: &UserPreferences) -> BudgetReport {
    let budget = &preferences.budget;

    let mut breakdown: BTreeMap<String, f64> = BOOKABLE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), 0.0))
        .collect();
    for expense in expenses {
        // Unrecognized categories (notably "activities") are excluded.
        if let Some(spent) = breakdown.get_mut(&expense.category) {
            *spent += expense.amount;
        }
    }

    let total_spent: f64 = breakdown.values().sum();
    let remaining = budget.total - total_spent;
    let within_budget = total_spent <= budget.total;

    let mut warnings = Vec::new();
    for (category, spent) in &breakdown {
        if let Some(limit) = budget.breakdown.get(category) {
            if spent > limit {
                warnings.push(format!(
                    "{} exceeds budget: ${spent:.2} > ${limit:.2}",
                    capitalize(category)
                ));
            }
        }
    }
    if !within_budget {
        warnings.push(format!("Total budget exceeded by ${:.2}", remaining.abs()));
    }

    BudgetReport {
        total_spent: round2(total_spent),
        budget_limit: budget.total,
        remaining: round2(remaining),
        breakdown,
        within_budget,
        warnings,
        currency: budget.currency.clone(),
        note: EXCLUSION_NOTE.into(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
