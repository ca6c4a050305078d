/*!
 * # yatwai - Yet Another Translation With AI
 *
 * A Rust library for translating text, document paragraphs and webpage
 * text nodes using an LLM completion endpoint.
 *
 * ## Features
 *
 * - Translate a plain string in one call
 * - Translate word-processor documents paragraph by paragraph
 * - Translate the text nodes of a web page, reporting each node's tag,
 *   original text and translation
 * - Strictly sequential processing: one provider request per unit, in
 *   order, first failure aborts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Process configuration (credential, endpoint, model)
 * - `translation_service`: The orchestrator owning the three entry points
 * - `document_processor`: Paragraph extraction from document files
 * - `web_page`: Page fetching and text-node extraction
 * - `providers`: Completion provider clients:
 *   - `providers::openai`: OpenAI-compatible chat completions client
 *   - `providers::mock`: Scripted provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod document_processor;
pub mod errors;
pub mod providers;
pub mod translation_service;
pub mod web_page;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, DocumentError, FetchError, ProviderError};
pub use translation_service::{NodeTranslation, TranslationService};
pub use web_page::TextUnit;
