//! Site Generation — orchestrates the prompt → model → extract → archive pipeline.
//!
//! Flow: validate description → compose two-message request → single model
//! call → extract html/css/js segments → assemble zip archive.
//!
//! One activation, one attempt: failures are surfaced, never retried.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::archive::build_site_archive;
use crate::generation::extract::extract_segment;
use crate::generation::prompts::SITE_SYSTEM;
use crate::llm_client::SiteModel;

/// The three segments pulled out of a well-formed model response.
/// Valid only when all three are non-empty.
#[derive(Debug, Clone)]
pub struct ExtractedSite {
    pub markup: String,
    pub styling: String,
    pub behavior: String,
}

/// Byte sizes of the three archive entries, reported back to the shell.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySizes {
    pub html: usize,
    pub css: usize,
    pub js: usize,
}

/// A successful generation: the packaged archive plus entry metadata.
#[derive(Debug, Clone)]
pub struct GeneratedSite {
    pub archive: Bytes,
    pub entries: EntrySizes,
}

/// Runs the full generation pipeline for one activation.
///
/// Steps:
/// 1. Trim-validate the description — blank input never reaches the network.
/// 2. Single model call (fixed system instruction + user description).
/// 3. Extract the `html`, `css`, `js` segments; all three must be non-empty.
/// 4. Package the segments as an in-memory zip archive.
pub async fn generate_site(
    model: &dyn SiteModel,
    description: &str,
) -> Result<GeneratedSite, AppError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AppError::EmptyInput);
    }

    info!("Generating site from {}-char description", description.len());
    let raw = model
        .complete(SITE_SYSTEM, description)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let site = extract_site(&raw).ok_or(AppError::InvalidFormat)?;
    info!(
        "Segments extracted: html={}B css={}B js={}B",
        site.markup.len(),
        site.styling.len(),
        site.behavior.len()
    );

    let entries = EntrySizes {
        html: site.markup.len(),
        css: site.styling.len(),
        js: site.behavior.len(),
    };
    let archive = build_site_archive(&site.markup, &site.styling, &site.behavior)
        .map_err(AppError::Internal)?;

    Ok(GeneratedSite { archive, entries })
}

/// Pulls the three delimited segments out of a raw response.
///
/// `None` when any segment is missing *or* present but empty — the output
/// contract requires all three with content, so both cases are violations.
fn extract_site(raw: &str) -> Option<ExtractedSite> {
    let markup = extract_segment(raw, "html").filter(|s| !s.is_empty())?;
    let styling = extract_segment(raw, "css").filter(|s| !s.is_empty())?;
    let behavior = extract_segment(raw, "js").filter(|s| !s.is_empty())?;

    Some(ExtractedSite {
        markup,
        styling,
        behavior,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use zip::ZipArchive;

    use crate::llm_client::LlmError;

    const WELL_FORMED: &str = "\
--html--\n<h1>Bakery</h1>\n--html--\n\n\
--css--\nh1 { font-family: Inter; }\n--css--\n\n\
--js--\nconsole.log('hi');\n--js--\n";

    const MISSING_JS: &str =
        "--html--X--html----css--Y--css--";

    /// Canned provider: returns a fixed response (or error) and counts calls.
    struct StubModel {
        response: Result<String, String>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SiteModel for StubModel {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_well_formed_response_produces_three_entry_archive() {
        let model = StubModel::ok(WELL_FORMED);
        let site = generate_site(&model, "a bakery landing page").await.unwrap();

        assert_eq!(site.entries.html, "<h1>Bakery</h1>".len());

        let mut archive = ZipArchive::new(Cursor::new(site.archive.to_vec())).unwrap();
        assert_eq!(archive.len(), 3);
        for (name, expected) in [
            ("index.html", "<h1>Bakery</h1>"),
            ("style.css", "h1 { font-family: Inter; }"),
            ("script.js", "console.log('hi');"),
        ] {
            let mut entry = archive.by_name(name).unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            assert_eq!(content, expected);
        }
    }

    #[tokio::test]
    async fn test_missing_js_block_is_invalid_format() {
        let model = StubModel::ok(MISSING_JS);
        let result = generate_site(&model, "a portfolio").await;
        assert!(matches!(result, Err(AppError::InvalidFormat)));
    }

    #[tokio::test]
    async fn test_present_but_empty_segment_is_invalid_format() {
        let response = "--html--X--html----css--  --css----js--Z--js--";
        let model = StubModel::ok(response);
        let result = generate_site(&model, "a blog").await;
        assert!(matches!(result, Err(AppError::InvalidFormat)));
    }

    #[tokio::test]
    async fn test_blank_description_never_calls_the_model() {
        let model = StubModel::ok(WELL_FORMED);
        let result = generate_site(&model, "   ").await;

        assert!(matches!(result, Err(AppError::EmptyInput)));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_its_message() {
        let model = StubModel::failing("Quota exceeded for gemini-2.5-flash");
        let result = generate_site(&model, "a shop").await;

        match result {
            Err(AppError::Generation(msg)) => {
                assert!(msg.contains("Quota exceeded for gemini-2.5-flash"));
            }
            other => panic!("expected Generation error, got {other:?}"),
        }
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_description_surrounding_whitespace_is_accepted() {
        let model = StubModel::ok(WELL_FORMED);
        let result = generate_site(&model, "  a café site  ").await;
        assert!(result.is_ok());
        assert_eq!(model.call_count(), 1);
    }
}
