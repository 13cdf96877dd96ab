use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

pub fn input(prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Ledger codes are conventionally upper case.
pub fn input_code(prompt: &str) -> Result<String> {
    Ok(input(prompt)?.to_uppercase())
}
