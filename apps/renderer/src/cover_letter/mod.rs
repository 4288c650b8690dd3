//! Cover letter generation from a CV record and a target job.
//!
//! The record supplies identity and background, `JobDetails` the position.
//! Prompt assembly is deterministic; the writing itself is delegated to a
//! `LetterWriter`.

pub mod prompts;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::COVER_LETTER_SYSTEM;
use crate::llm_client::{GenerationParams, LlmClient, LlmError};
use crate::models::job::JobDetails;
use crate::models::record::Record;

use prompts::build_cover_letter_prompt;

#[async_trait]
pub trait LetterWriter: Send + Sync {
    /// Drafts a letter for the given user prompt.
    async fn write(&self, prompt: &str) -> Result<String, AppError>;
}

pub struct LlmLetterWriter {
    llm: LlmClient,
}

impl LlmLetterWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl LetterWriter for LlmLetterWriter {
    async fn write(&self, prompt: &str) -> Result<String, AppError> {
        let response = self
            .llm
            .call_with(prompt, COVER_LETTER_SYSTEM, GenerationParams::COVER_LETTER)
            .await?;
        let letter = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(letter.to_string())
    }
}

/// A letter needs at least a job title, a company and the applicant's name.
pub fn check_inputs(job: &JobDetails, record: &Record) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("job title", &job.job_title),
        ("company name", &job.company_name),
        ("full name", &record.personal_info.full_name),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "cover letter requires {}",
            missing.join(", ")
        )))
    }
}

/// Checks the inputs, builds the prompt and returns the drafted letter.
pub async fn generate_cover_letter(
    job: &JobDetails,
    record: &Record,
    writer: &dyn LetterWriter,
) -> Result<String, AppError> {
    check_inputs(job, record)?;

    let prompt = build_cover_letter_prompt(job, record);
    let letter = writer.write(&prompt).await?;
    let letter = letter.trim();
    if letter.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    info!(
        "Generated cover letter for {} at {} ({} characters)",
        job.job_title.trim(),
        job.company_name.trim(),
        letter.len()
    );
    Ok(letter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::models::record::{ExperienceEntry, PersonalInfo};

    /// Returns a canned letter and keeps the prompts it was given.
    struct Canned {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LetterWriter for Canned {
        async fn write(&self, prompt: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn job() -> JobDetails {
        JobDetails {
            job_title: "Data Engineer".to_string(),
            company_name: "Umbrella".to_string(),
            ..Default::default()
        }
    }

    fn record() -> Record {
        Record {
            personal_info: PersonalInfo {
                full_name: "Katherine Johnson".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                job_title: "Analyst".to_string(),
                company: "NACA".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_check_inputs_names_missing_fields() {
        assert!(check_inputs(&job(), &record()).is_ok());

        let err = check_inputs(&JobDetails::default(), &Record::default()).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        let message = err.to_string();
        assert!(message.contains("job title"));
        assert!(message.contains("company name"));
        assert!(message.contains("full name"));
    }

    #[tokio::test]
    async fn test_generates_trimmed_letter() {
        let writer = Canned::new("\n Dear Hiring Manager,\n\n... \n");
        let letter = generate_cover_letter(&job(), &record(), &writer)
            .await
            .unwrap();
        assert_eq!(letter, "Dear Hiring Manager,\n\n...");

        let prompts = writer.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("• Analyst at NACA"));
    }

    #[tokio::test]
    async fn test_missing_inputs_skip_the_writer() {
        let writer = Canned::new("unused");
        let job = JobDetails {
            company_name: " ".to_string(),
            ..job()
        };
        let err = generate_cover_letter(&job, &record(), &writer)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(writer.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_reply_is_an_error() {
        let writer = Canned::new("   ");
        let err = generate_cover_letter(&job(), &record(), &writer)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "LLM_ERROR");
    }
}
