mod support;
mod translation_service_tests;
