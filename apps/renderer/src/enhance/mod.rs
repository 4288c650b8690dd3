//! AI enhancement pass: rewrites the free-text fields of a record through an
//! external text enhancer.
//!
//! The pass produces a record of identical shape: same ids, same ordering,
//! enhanced text substituted field-for-field. A failed or empty reply keeps
//! the original text for that field, so the pass itself never fails.
//!
//! Enhanced fields: summary, experience descriptions, custom section content.
//! Identity, education, skills and languages are copied unchanged.

pub mod prompts;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::ENHANCE_SYSTEM;
use crate::llm_client::{GenerationParams, LlmClient, LlmError};
use crate::models::record::Record;

use prompts::{
    build_enhance_prompt, JOB_DESCRIPTION_CONTEXT, SECTION_CONTENT_CONTEXT, SUMMARY_CONTEXT,
};

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    /// Returns an improved version of `text`. `context` names the field
    /// ("professional summary", "job description", ...).
    async fn enhance(&self, text: &str, context: &str) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnhancer: remote model via LlmClient
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextEnhancer for LlmEnhancer {
    async fn enhance(&self, text: &str, context: &str) -> Result<String, AppError> {
        let prompt = build_enhance_prompt(text, context);
        let response = self
            .llm
            .call_with(&prompt, ENHANCE_SYSTEM, GenerationParams::ENHANCE)
            .await?;
        let enhanced = response.text().ok_or(LlmError::EmptyContent)?;
        info!(
            "Enhanced {}: {} -> {} characters",
            context,
            text.len(),
            enhanced.len()
        );
        Ok(enhanced.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record pass
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PassStats {
    enhanced: usize,
    kept: usize,
}

/// Runs `enhancer` over every enhanceable field of `record`.
///
/// Fields are processed one at a time in document order.
pub async fn enhance_record(record: &Record, enhancer: &dyn TextEnhancer) -> Record {
    let mut stats = PassStats::default();
    let mut enhanced = record.clone();

    enhanced.summary =
        enhance_field(enhancer, &record.summary, SUMMARY_CONTEXT, &mut stats).await;

    for entry in &mut enhanced.experience {
        entry.description = enhance_field(
            enhancer,
            &entry.description,
            JOB_DESCRIPTION_CONTEXT,
            &mut stats,
        )
        .await;
    }

    for section in &mut enhanced.custom_sections {
        section.content = enhance_field(
            enhancer,
            &section.content,
            SECTION_CONTENT_CONTEXT,
            &mut stats,
        )
        .await;
    }

    info!(
        enhanced = stats.enhanced,
        kept = stats.kept,
        "CV enhancement completed"
    );
    enhanced
}

async fn enhance_field(
    enhancer: &dyn TextEnhancer,
    text: &str,
    context: &str,
    stats: &mut PassStats,
) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    match enhancer.enhance(text, context).await {
        Ok(out) if !out.trim().is_empty() => {
            stats.enhanced += 1;
            out.trim().to_string()
        }
        Ok(_) => {
            warn!("No enhancement received for {context}, using original text");
            stats.kept += 1;
            text.to_string()
        }
        Err(e) => {
            warn!(code = e.code(), "Error enhancing {context}: {e}; using original text");
            stats.kept += 1;
            text.to_string()
        }
    }
}
