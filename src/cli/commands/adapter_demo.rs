use anyhow::Result;
use serde_json::json;

use correio::{ CorreioConfig, Message, ProviderConfig, ProviderKind, TranslationService, Translator };

use super::OutputFormat;
use crate::cli::ui;

/// Adapter walkthrough: normal translation, same-language bypass, bare text,
/// fallback past a dead provider, exhausted chain and DeepL quota
pub fn execute(config: &CorreioConfig, format: OutputFormat) -> Result<()> {
    ui::print_header("CORREIO DIGITAL - ADAPTER PATTERN\nMessage translation with provider fallback");

    let mut service = config.build_service()?;
    ui::print_info(
        &format!("Translation service configured (priority: {})", service.provider_names().join(" -> "))
    );

    ui::print_section("SCENARIO 1: Successful translation");
    let mut greeting = Message::new(
        "Olá, como você está?",
        "PT",
        "usuario@correio.com",
        "friend@correio.com"
    ).with_target_language("EN");
    show_message_translation(&mut service, &mut greeting);

    ui::print_section("SCENARIO 2: Source language equals target language");
    let mut same = Message::new(
        "Hello, how are you?",
        "EN",
        "user@correio.com",
        "another@correio.com"
    ).with_target_language("EN");
    show_message_translation(&mut service, &mut same);

    ui::print_section("SCENARIO 3: Direct text translation");
    let text = "Bom dia!";
    ui::print_result("Text", text);
    match service.translate_text(text, "ES") {
        Some(result) => ui::print_success(&format!("Result: '{}'", result)),
        None => ui::print_warning("No provider could translate the text"),
    }

    ui::print_section("SCENARIO 4: Fallback when the primary provider is down");
    let degraded = degraded_config(config);
    let mut fallback_service = degraded.build_service()?;
    let mut urgent = Message::new(
        "Preciso de ajuda urgente",
        "PT",
        "support@correio.com",
        "client@correio.com"
    ).with_target_language("FR");
    show_message_translation(&mut fallback_service, &mut urgent);

    ui::print_section("SCENARIO 5: Unsupported language code");
    let mut unsupported = Message::new(
        "Mensagem sem idioma conhecido",
        "PT",
        "user@correio.com",
        "friend@correio.com"
    ).with_target_language("XX");
    show_message_translation(&mut service, &mut unsupported);

    ui::print_section("SCENARIO 6: DeepL-specific feature (quota)");
    let deepl = config.build_deepl_adapter(&ProviderConfig::new(ProviderKind::DeepL));
    ui::print_info("Usage is counted per DeepL client; this one is fresh and used only here");
    match deepl.translate("Boa noite", "DE") {
        Ok(result) => ui::print_result("DeepL", &result),
        Err(e) => ui::print_warning(&e.to_string()),
    }
    match deepl.check_quota() {
        Ok(usage) =>
            ui::print_result(
                "DeepL quota",
                &format!("{} of {} characters used", usage.character_count, usage.character_limit)
            ),
        Err(e) => ui::print_warning(&e.to_string()),
    }

    ui::print_section("FINAL STATISTICS");
    let statistics = service.statistics();
    match format {
        OutputFormat::Json => {
            let output = json!({
                "statistics": statistics,
                "history": service.history(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            ui::print_result("Messages translated", &statistics.translated_count.to_string());
            ui::print_result("Providers available", &statistics.provider_names.join(", "));
            println!("\nTranslation history:");
            for (i, msg) in service.history().iter().enumerate() {
                println!(
                    "   {}. {} -> {}: '{}' -> '{}'",
                    i + 1,
                    msg.source_language,
                    msg.target_language.as_deref().unwrap_or("-"),
                    msg.content,
                    msg.display_text()
                );
            }
        }
    }

    println!();
    ui::print_header("DEMO COMPLETE");
    Ok(())
}

fn show_message_translation(service: &mut TranslationService, message: &mut Message) {
    ui::print_result(
        "Message",
        &format!(
            "'{}' ({} -> {})",
            message.content,
            message.source_language,
            message.target_language.as_deref().unwrap_or("-")
        )
    );

    if service.translate_message(message) {
        ui::print_success(&format!("Translated message: '{}'", message.display_text()));
    } else {
        ui::print_warning(&format!("Translation failed; showing original: '{}'", message.display_text()));
    }
}

// Same chain with the first provider marked unavailable.
fn degraded_config(config: &CorreioConfig) -> CorreioConfig {
    let mut degraded = config.clone();
    if let Some(first) = degraded.providers.first_mut() {
        first.available = false;
    }
    degraded
}
