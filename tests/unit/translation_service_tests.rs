/*!
 * Tests for translation orchestration over text, paragraphs and page nodes
 */

use std::fs;
use std::sync::atomic::Ordering;
use tempfile::tempdir;

use yatwai::errors::AppError;
use yatwai::providers::mock::MockProvider;
use yatwai::translation_service::{TranslationService, build_translation_prompt};
use yatwai::web_page::extract_text_units;

/// Test that a single text translation issues exactly one request whose
/// prompt carries both the text and the language label, and that the
/// provider's answer comes back verbatim
#[tokio::test]
async fn test_translateText_withWorkingProvider_shouldIssueOneVerbatimRequest() {
    let provider = MockProvider::working();
    let count = provider.request_count();
    let prompts = provider.prompt_log();

    let service = TranslationService::with_provider(Box::new(provider));
    let result = service
        .translate_text("Hello world", "français")
        .await
        .expect("working provider should translate");

    assert_eq!(count.load(Ordering::SeqCst), 1);

    let log = prompts.lock().expect("prompt log");
    assert_eq!(log.len(), 1);
    assert!(log[0].contains("Hello world"));
    assert!(log[0].contains("français"));

    // The mock echoes the prompt back; the service must not post-process it
    assert_eq!(
        result,
        format!(
            "[translated] {}",
            build_translation_prompt("Hello world", "français")
        )
    );
}

/// Test the paragraph filter: blank and whitespace-only paragraphs produce
/// no provider call and no output entry, order is preserved
#[tokio::test]
async fn test_translateParagraphs_withBlankEntries_shouldSkipThem() {
    let provider = MockProvider::working();
    let count = provider.request_count();
    let prompts = provider.prompt_log();

    let service = TranslationService::with_provider(Box::new(provider));
    let paragraphs = vec![
        "Hello".to_string(),
        String::new(),
        "  ".to_string(),
        "World".to_string(),
    ];

    let translated = service
        .translate_paragraphs(&paragraphs, "português")
        .await
        .expect("working provider should translate");

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(translated.len(), 2);

    let log = prompts.lock().expect("prompt log");
    assert!(log[0].contains("Hello"));
    assert!(log[1].contains("World"));
    assert!(translated[0].contains("Hello"));
    assert!(translated[1].contains("World"));
}

/// Test that a mid-batch provider failure aborts the whole call and no
/// partial output is returned
#[tokio::test]
async fn test_translateParagraphs_withMidBatchFailure_shouldDiscardPartialOutput() {
    let provider = MockProvider::fail_after(1);
    let count = provider.request_count();

    let service = TranslationService::with_provider(Box::new(provider));
    let paragraphs = vec!["Hello".to_string(), "World".to_string()];

    let result = service.translate_paragraphs(&paragraphs, "português").await;

    // The first unit succeeded, the second failed; nothing is returned
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert!(matches!(result, Err(AppError::Provider(_))));
}

/// Test that a provider failure on a single text surfaces as a provider error
#[tokio::test]
async fn test_translateText_withFailingProvider_shouldReportProviderError() {
    let service = TranslationService::with_provider(Box::new(MockProvider::failing()));

    let result = service.translate_text("Hello world", "português").await;
    assert!(matches!(result, Err(AppError::Provider(_))));
}

/// Test the site pipeline from extraction to node records: script content
/// never reaches the provider and each accepted node becomes one record
#[tokio::test]
async fn test_translateTextUnits_withExtractedPage_shouldTranslateAcceptedNodesOnly() {
    let html = "<html><body><script>ignored</script>\
                <p>Hi there</p><p>42</p><p>ok</p></body></html>";
    let units = extract_text_units(html).expect("parseable page");

    let provider = MockProvider::working().with_custom_response(|_| "Oi, tudo bem".to_string());
    let prompts = provider.prompt_log();

    let service = TranslationService::with_provider(Box::new(provider));
    let records = service
        .translate_text_units(units, "português")
        .await
        .expect("working provider should translate");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tag, "p");
    assert_eq!(records[0].original, "Hi there");
    assert_eq!(records[0].translated, "Oi, tudo bem");

    let log = prompts.lock().expect("prompt log");
    assert_eq!(log.len(), 1);
    assert!(log[0].contains("Hi there"));
    assert!(!log[0].contains("ignored"));
}

/// Test document translation end to end with a plain text fixture
#[tokio::test]
async fn test_translateDocument_withTextFixture_shouldTranslateRetainedParagraphs() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("letter.txt");
    fs::write(&path, "Hello\n\n  \n\nWorld").expect("write fixture");

    let provider = MockProvider::working();
    let count = provider.request_count();

    let service = TranslationService::with_provider(Box::new(provider));
    let translated = service
        .translate_document(&path, "português")
        .await
        .expect("working provider should translate");

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(translated.len(), 2);
    assert!(translated[0].contains("Hello"));
    assert!(translated[1].contains("World"));
}

/// Test that an unreadable document aborts before any provider call
#[tokio::test]
async fn test_translateDocument_withMissingFile_shouldFailWithoutProviderCalls() {
    let provider = MockProvider::working();
    let count = provider.request_count();

    let service = TranslationService::with_provider(Box::new(provider));
    let result = service
        .translate_document(std::path::Path::new("/nonexistent/report.docx"), "português")
        .await;

    assert!(matches!(result, Err(AppError::Document(_))));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

/// Test the prompt wire format stays fixed
#[test]
fn test_buildTranslationPrompt_withTextAndLanguage_shouldMatchContract() {
    assert_eq!(
        build_translation_prompt("Good morning", "español"),
        "Translate the following text to español: Good morning"
    );
}
