use anyhow::{ anyhow, Result };
use serde_json::json;

use correio::{ CorreioConfig, Message };

use super::OutputFormat;
use crate::cli::ui;

/// Translate one piece of text through the configured provider chain.
///
/// With a source language the text travels as a [`Message`]; without one it
/// goes through the bare-text path. An exhausted provider chain is reported
/// once, through the returned error.
pub fn execute(
    config: &CorreioConfig,
    text: &str,
    to: &str,
    from: Option<&str>,
    sender: &str,
    recipient: &str,
    format: OutputFormat
) -> Result<()> {
    let mut service = config.build_service()?;

    match from {
        Some(source) => {
            let mut message = Message::new(text, source, sender, recipient)
                .with_target_language(to);
            let translated = service.translate_message(&mut message);

            match format {
                OutputFormat::Json => {
                    let output = json!({
                        "translated": translated,
                        "message": message,
                        "statistics": service.statistics(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    ui::print_result("Original", &format!("{} ({})", message.content, source));
                    if translated {
                        ui::print_success(&format!("Translated to {}", to));
                        ui::print_text(message.display_text());
                    }
                }
            }

            if !translated {
                return Err(anyhow!("All providers failed to translate the message to {}; original text kept", to));
            }
        }
        None => {
            let translated = service.translate_text(text, to);

            match format {
                OutputFormat::Json => {
                    let output = json!({
                        "text": text,
                        "target_language": to,
                        "translation": translated,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    if let Some(result) = &translated {
                        ui::print_result("Result", result);
                    }
                }
            }

            if translated.is_none() {
                return Err(anyhow!("All providers failed to translate the text to {}", to));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead_chain() -> CorreioConfig {
        CorreioConfig::from_yaml("providers:\n  - kind: google\n    available: false\n").unwrap()
    }

    #[test]
    fn test_exhausted_chain_is_reported_through_error() {
        let config = dead_chain();

        let err = execute(&config, "Olá", "EN", None, "a", "b", OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "All providers failed to translate the text to EN");

        let err = execute(&config, "Olá", "EN", Some("PT"), "a", "b", OutputFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("All providers failed to translate the message"));
    }

    #[test]
    fn test_successful_translation_returns_ok() {
        let config = CorreioConfig::default();
        assert!(execute(&config, "Olá", "EN", Some("PT"), "a", "b", OutputFormat::Text).is_ok());
        assert!(execute(&config, "Olá", "EN", None, "a", "b", OutputFormat::Json).is_ok());
    }
}
