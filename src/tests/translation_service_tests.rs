#[cfg(test)]
mod tests {
    use crate::config::ConfigError;
    use crate::implementations::adapters::{ DeepLAdapter, GoogleAdapter };
    use crate::implementations::backends::{ DeepLApi, GoogleTranslateApi };
    use crate::implementations::translation_service::{ TranslationService, UNKNOWN_SOURCE_LANGUAGE };
    use crate::models::Message;
    use crate::tests::support::{ call_log, setup, BrokenGoogle, ScriptedTranslator };
    use crate::traits::translator::Translator;

    fn default_service() -> TranslationService {
        let providers: Vec<Box<dyn Translator>> = vec![
            Box::new(GoogleAdapter::new(GoogleTranslateApi::new())),
            Box::new(DeepLAdapter::new(DeepLApi::new()))
        ];
        TranslationService::new(providers).unwrap()
    }

    fn pt_to_en(content: &str) -> Message {
        Message::new(content, "PT", "user1", "user2").with_target_language("EN")
    }

    #[test]
    fn test_service_requires_a_provider() {
        setup();
        match TranslationService::new(Vec::new()) {
            Err(ConfigError::NoProviders) => {}
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("empty provider chain must be rejected"),
        }
    }

    #[test]
    fn test_statistics_reflect_chain() {
        let service = default_service();
        let stats = service.statistics();
        assert_eq!(stats.provider_count, 2);
        assert_eq!(stats.provider_names, vec!["Google Translate".to_string(), "DeepL".to_string()]);
        assert_eq!(stats.translated_count, 0);
    }

    #[test]
    fn test_translate_message_uses_first_provider() {
        setup();
        let mut service = default_service();
        let mut message = pt_to_en("Olá");

        assert!(service.translate_message(&mut message));
        assert_eq!(message.translation(), Some("[Google] Olá -> EN"));
        assert_eq!(service.statistics().translated_count, 1);
    }

    #[test]
    fn test_same_language_bypasses_providers() {
        setup();
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::succeeding("A", &calls)]
        ).unwrap();

        for (source, target) in [("EN", "EN"), ("pt", "PT")] {
            let mut message = Message::new("Hello", source, "user1", "user2")
                .with_target_language(target);
            assert!(service.translate_message(&mut message));
            assert_eq!(message.translation(), Some("Hello"));
        }
        assert!(calls.borrow().is_empty());
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_missing_target_language_is_a_noop() {
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::succeeding("A", &calls)]
        ).unwrap();
        let mut message = Message::new("Olá", "PT", "user1", "user2");

        assert!(!service.translate_message(&mut message));
        assert!(message.translation().is_none());
        assert_eq!(message.display_text(), "Olá");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_falls_back_to_next_provider() {
        setup();
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::failing("A", &calls), ScriptedTranslator::succeeding("B", &calls)]
        ).unwrap();

        let result = service.translate_text("Teste", "EN");
        assert_eq!(result.as_deref(), Some("<B> Teste (EN)"));
        assert_eq!(*calls.borrow(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_stops_after_first_success() {
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![
                ScriptedTranslator::failing("A", &calls),
                ScriptedTranslator::succeeding("B", &calls),
                ScriptedTranslator::succeeding("C", &calls)
            ]
        ).unwrap();

        let mut message = pt_to_en("Olá");
        assert!(service.translate_message(&mut message));
        assert_eq!(message.translation(), Some("<B> Olá (EN)"));
        assert_eq!(*calls.borrow(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_real_adapters_fall_back_past_broken_backend() {
        let providers: Vec<Box<dyn Translator>> = vec![
            Box::new(GoogleAdapter::new(BrokenGoogle::default())),
            Box::new(GoogleAdapter::new(GoogleTranslateApi::new()))
        ];
        let mut service = TranslationService::new(providers).unwrap();
        assert_eq!(service.translate_text("Teste", "EN").as_deref(), Some("[Google] Teste -> EN"));
    }

    #[test]
    fn test_exhausted_chain_reports_failure() {
        setup();
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::failing("A", &calls), ScriptedTranslator::failing("B", &calls)]
        ).unwrap();

        assert!(service.translate_text("Teste", "EN").is_none());

        let mut message = pt_to_en("Teste");
        assert!(!service.translate_message(&mut message));
        assert!(message.translation().is_none());

        // Each provider is tried once per call, never retried
        assert_eq!(calls.borrow().len(), 4);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_unsupported_language_exhausts_real_chain() {
        let mut service = default_service();
        let mut message = Message::new("Olá", "PT", "user1", "user2").with_target_language("XX");
        assert!(!service.translate_message(&mut message));
        assert!(message.translation().is_none());
        assert_eq!(service.translate_text("Olá", "XX"), None);
    }

    #[test]
    fn test_translate_or_original_falls_back_to_input() {
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::failing("A", &calls)]
        ).unwrap();
        assert_eq!(service.translate_or_original("Bom dia", "EN"), "Bom dia");

        let mut working = default_service();
        assert_eq!(working.translate_or_original("Bom dia", "ES"), "[Google] Bom dia -> ES");
    }

    #[test]
    fn test_translation_is_assigned_once() {
        setup();
        let calls = call_log();
        let mut service = TranslationService::new(
            vec![ScriptedTranslator::succeeding("A", &calls)]
        ).unwrap();
        let mut message = pt_to_en("Olá");

        assert!(service.translate_message(&mut message));
        assert_eq!(message.translation(), Some("<A> Olá (EN)"));

        message.target_language = Some("ES".to_string());
        assert!(service.translate_message(&mut message));

        assert_eq!(message.translation(), Some("<A> Olá (EN)"));
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.statistics().translated_count, 1);
    }

    #[test]
    fn test_history_grows_only_on_success() {
        let mut service = default_service();
        let mut first = pt_to_en("Olá");
        let mut second = Message::new("Hello", "EN", "user3", "user4").with_target_language("PT");
        let mut rejected = Message::new("Oi", "PT", "user1", "user2").with_target_language("XX");

        assert!(service.translate_message(&mut first));
        assert!(service.translate_message(&mut second));
        assert!(!service.translate_message(&mut rejected));

        let history = service.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "Olá");
        assert_eq!(history[1].translation(), Some("[Google] Hello -> PT"));
    }

    #[test]
    fn test_direct_text_is_recorded_in_history() {
        let mut service = default_service();
        let translated = service.translate_text("Bom dia", "ES").unwrap();

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content, "Bom dia");
        assert_eq!(history[0].source_language, UNKNOWN_SOURCE_LANGUAGE);
        assert_eq!(history[0].target_language.as_deref(), Some("ES"));
        assert_eq!(history[0].translation(), Some(translated.as_str()));
    }

    #[test]
    fn test_history_is_a_snapshot() {
        let mut service = default_service();
        service.translate_message(&mut pt_to_en("Olá"));

        let mut snapshot = service.history();
        snapshot.clear();
        assert_eq!(service.history().len(), 1);

        let before = service.history();
        service.translate_message(&mut pt_to_en("Tchau"));
        assert_eq!(before.len(), 1);
        assert_eq!(service.history().len(), 2);
    }

    #[test]
    fn test_clear_history() {
        let mut service = default_service();
        service.translate_message(&mut pt_to_en("Teste"));
        assert_eq!(service.statistics().translated_count, 1);

        service.clear_history();
        assert!(service.history().is_empty());
        assert_eq!(service.statistics().translated_count, 0);
        assert_eq!(service.statistics().provider_count, 2);
    }
}
