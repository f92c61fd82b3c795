//! Interactive prompts and spinners

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prompt for confirmation, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Ask before a destructive action unless `assume_yes` is set
pub fn confirm_unless(assume_yes: bool, prompt: &str) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    confirm(prompt)
}

/// Create a spinner.
///
/// Falls back to a plain spinner if the template is rejected.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
