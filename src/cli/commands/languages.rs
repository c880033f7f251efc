use anyhow::Result;
use serde_json::json;

use correio::{ CorreioConfig, ProviderConfig, ProviderKind };

use super::OutputFormat;
use crate::cli::ui;

/// List the configured allow-list next to what the Google client advertises
pub fn execute(config: &CorreioConfig, format: OutputFormat) -> Result<()> {
    let google = config.build_google_adapter(&ProviderConfig::new(ProviderKind::Google));
    let backend_languages = google.backend_languages();
    let supported = config.supported_languages.codes();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "supported_languages": supported,
                "google_backend_languages": backend_languages,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            ui::print_result("Supported languages", &supported.join(", "));
            ui::print_result("Google backend languages", &backend_languages.join(", "));
        }
    }

    Ok(())
}
