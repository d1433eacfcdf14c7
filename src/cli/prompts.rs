use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::FinmexError;

/// Prompt the user for free-form text input.
pub fn text(prompt: &str) -> Result<String, FinmexError> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

/// Prompt for any numeric amount (fees, minimums, rates).
pub fn number(prompt: &str) -> Result<f64, FinmexError> {
    Ok(Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

/// Prompt for an amount that must be greater than zero. The calculation
/// core divides by these, so the guard lives here at the input boundary.
pub fn positive_amount(prompt: &str) -> Result<f64, FinmexError> {
    Ok(Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value > 0.0 {
                Ok(())
            } else {
                Err("Value must be greater than zero")
            }
        })
        .interact_text()?)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool, FinmexError> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Let the user pick one entry from a list, returning its index.
pub fn pick(prompt: &str, items: &[String]) -> Result<usize, FinmexError> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
