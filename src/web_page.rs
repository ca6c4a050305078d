/*!
 * Web page fetching and text-node extraction.
 *
 * The site translation mode works on the page's DOM: the page is fetched
 * with a browser-like user agent, `<script>` and `<style>` subtrees are
 * removed outright, and the remaining tree is walked in document order
 * collecting the text-bearing elements worth translating.
 */

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use reqwest::{Client, header};
use std::time::Duration;

use crate::errors::{AppError, FetchError};

/// Tags whose direct text content is considered for translation
const TEXT_TAGS: [&str; 9] = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div"];

/// Tags whose entire subtree is dropped before extraction
const NOISE_TAGS: [&str; 2] = ["script", "style"];

/// User agent sent with page fetches; some sites refuse unknown clients
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Page fetch timeout in seconds
const FETCH_TIMEOUT_SECS: u64 = 10;

/// One text-bearing element accepted for translation
#[derive(Debug, Clone, PartialEq)]
pub struct TextUnit {
    /// Tag name of the owning element
    pub tag: String,
    /// Trimmed text content
    pub text: String,
}

/// Prepend `https://` when the input carries no scheme
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Fetch a page body over HTTP
///
/// Uses a 10-second timeout and a browser-like user agent. Any non-success
/// status is an error; there is no retry.
pub async fn fetch_page(url: &str) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

    let response = client
        .get(url)
        .header(header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status_code: status.as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))
}

/// Extract the translatable text units from an HTML page, in document order
///
/// An element yields a unit only when its child list holds exactly one node
/// and that node is text: mixed text-and-element content is skipped rather
/// than aggregated. The accepted text must be longer than 3 characters after
/// trimming and must not be entirely numeric.
pub fn extract_text_units(html: &str) -> Result<Vec<TextUnit>, AppError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| AppError::Parse(e.to_string()))?;

    // Removal happens before the walk: an element that mixes text with a
    // script child has a lone text child afterwards, and then qualifies.
    strip_noise_subtrees(&dom.document);

    let mut units = Vec::new();
    collect_text_units(&dom.document, &mut units);
    Ok(units)
}

fn is_noise_element(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => NOISE_TAGS.contains(&name.local.as_ref()),
        _ => false,
    }
}

fn strip_noise_subtrees(handle: &Handle) {
    let mut children = handle.children.borrow_mut();
    children.retain(|child| !is_noise_element(child));
    for child in children.iter() {
        strip_noise_subtrees(child);
    }
}

fn collect_text_units(handle: &Handle, units: &mut Vec<TextUnit>) {
    if let NodeData::Element { ref name, .. } = handle.data {
        let tag = name.local.as_ref();
        if TEXT_TAGS.contains(&tag) {
            if let Some(text) = direct_text_content(handle) {
                let trimmed = text.trim();
                if is_accepted(trimmed) {
                    units.push(TextUnit {
                        tag: tag.to_string(),
                        text: trimmed.to_string(),
                    });
                }
            }
        }
    }

    for child in handle.children.borrow().iter() {
        collect_text_units(child, units);
    }
}

/// The element's own string content, present only for a lone text child
fn direct_text_content(handle: &Handle) -> Option<String> {
    let children = handle.children.borrow();
    if children.len() != 1 {
        return None;
    }

    match &children[0].data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

fn is_accepted(trimmed: &str) -> bool {
    trimmed.chars().count() > 3 && !trimmed.chars().all(char::is_numeric)
}
