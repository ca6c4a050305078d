use log::{debug, info};
use std::path::Path;

use crate::app_config::Config;
use crate::document_processor;
use crate::errors::AppError;
use crate::providers::Provider;
use crate::providers::openai::OpenAI;
use crate::web_page::{self, TextUnit};

// @module: Translation orchestration over text, documents and web pages

// @struct: One translated page node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTranslation {
    // @field: Tag name of the source element
    pub tag: String,

    // @field: Trimmed original text
    pub original: String,

    // @field: Translated text, verbatim from the provider
    pub translated: String,
}

/// Translation service owning the completion provider
///
/// All three entry points funnel through `translate_text`, which issues a
/// single provider request per unit. Units are processed strictly in order
/// and the first failure aborts the whole call, discarding partial output.
#[derive(Debug)]
pub struct TranslationService {
    /// The completion provider used for every unit
    provider: Box<dyn Provider>,
}

impl TranslationService {
    /// Create a service backed by the configured completion endpoint
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let client = OpenAI::new(&config.api_key, &config.endpoint, &config.model);
        Ok(Self {
            provider: Box::new(client),
        })
    }

    /// Create a service with an injected provider
    pub fn with_provider(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Translate a single text to the target language
    ///
    /// Issues exactly one completion request and returns the provider's
    /// response content unmodified.
    pub async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, AppError> {
        let prompt = build_translation_prompt(text, target_language);
        debug!("Submitting translation unit ({} chars)", text.chars().count());

        let translated = self.provider.complete(&prompt).await?;
        Ok(translated)
    }

    /// Translate the paragraphs of a document file, in document order
    pub async fn translate_document(
        &self,
        path: &Path,
        target_language: &str,
    ) -> Result<Vec<String>, AppError> {
        let paragraphs = document_processor::read_paragraphs(path)?;
        info!(
            "Read {} paragraph(s) from {}",
            paragraphs.len(),
            path.display()
        );

        self.translate_paragraphs(&paragraphs, target_language).await
    }

    /// Translate a paragraph sequence, skipping blank entries
    ///
    /// Paragraphs whose trimmed text is empty produce no output entry, so
    /// the result can be shorter than the input. Retained paragraphs keep
    /// their relative order.
    pub async fn translate_paragraphs(
        &self,
        paragraphs: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, AppError> {
        let mut translated = Vec::new();

        for paragraph in paragraphs {
            if paragraph.trim().is_empty() {
                continue;
            }

            translated.push(self.translate_text(paragraph, target_language).await?);
        }

        Ok(translated)
    }

    /// Translate the text nodes of a web page
    ///
    /// The URL gets an `https://` scheme when missing. The page is fetched,
    /// script and style subtrees are dropped, and the remaining candidate
    /// nodes are translated one by one in document order.
    pub async fn translate_site(
        &self,
        url: &str,
        target_language: &str,
    ) -> Result<Vec<NodeTranslation>, AppError> {
        let url = web_page::normalize_url(url);
        info!("Fetching {}", url);

        let html = web_page::fetch_page(&url).await?;
        let units = web_page::extract_text_units(&html)?;
        info!("Found {} translatable text node(s)", units.len());

        self.translate_text_units(units, target_language).await
    }

    /// Translate extracted text units into per-node records
    pub async fn translate_text_units(
        &self,
        units: Vec<TextUnit>,
        target_language: &str,
    ) -> Result<Vec<NodeTranslation>, AppError> {
        let mut results = Vec::with_capacity(units.len());

        for unit in units {
            let translated = self.translate_text(&unit.text, target_language).await?;
            results.push(NodeTranslation {
                tag: unit.tag,
                original: unit.text,
                translated,
            });
        }

        Ok(results)
    }
}

// @returns: The single-turn prompt submitted for one unit
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!("Translate the following text to {}: {}", target_language, text)
}
