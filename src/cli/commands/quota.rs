use anyhow::Result;

use correio::{ CorreioConfig, ProviderConfig, ProviderKind };

use super::OutputFormat;
use crate::cli::ui;

/// Show DeepL character usage for the configured account settings.
///
/// The mock client keeps its counter in memory, so this reports a fresh client.
pub fn execute(config: &CorreioConfig, format: OutputFormat) -> Result<()> {
    let provider = config.providers
        .iter()
        .find(|p| p.kind == ProviderKind::DeepL)
        .cloned()
        .unwrap_or_else(|| ProviderConfig::new(ProviderKind::DeepL));

    let usage = config.build_deepl_adapter(&provider).check_quota()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&usage)?),
        OutputFormat::Text => {
            ui::print_result("Characters used", &usage.character_count.to_string());
            ui::print_result("Character limit", &usage.character_limit.to_string());
            ui::print_result("Remaining", &usage.remaining().to_string());
            ui::print_info("Usage is counted per process; a fresh client starts at zero");
        }
    }

    Ok(())
}
