use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_renderer::config::Config;
use cv_renderer::cover_letter::{generate_cover_letter, LlmLetterWriter};
use cv_renderer::enhance::{enhance_record, LlmEnhancer};
use cv_renderer::errors::AppError;
use cv_renderer::llm_client::{self, LlmClient};
use cv_renderer::models::{validate_record, JobDetails, Record};
use cv_renderer::render::{catalog, render, to_plain_text};

#[derive(Debug, Parser)]
#[command(name = "cv-renderer", version, about = "Render CV records into templated documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a record with one of the templates.
    Render {
        /// Record JSON file, or `-` for stdin.
        #[arg(short, long)]
        input: PathBuf,
        /// Template id ("1".."6"). Defaults to DEFAULT_TEMPLATE.
        #[arg(short, long)]
        template: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Run the AI enhancement pass before rendering.
        #[arg(long)]
        enhance: bool,
    },
    /// Print the record with its free text enhanced.
    Enhance {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Draft a cover letter for a job from the record's background.
    CoverLetter {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        company: String,
        #[arg(long, default_value = "")]
        job_description: String,
        #[arg(long, default_value = "")]
        additional_info: String,
    },
    /// List the available templates.
    Templates,
    /// Report duplicate ids and malformed dates.
    Check {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the document.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_renderer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting cv-renderer v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command, &config).await {
        Ok(code) => Ok(code),
        Err(e) => {
            error!(code = e.code(), "{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<ExitCode, AppError> {
    match command {
        Command::Render {
            input,
            template,
            format,
            enhance,
        } => {
            let mut record = load_record(&input)?;
            if enhance {
                record = enhance_with_llm(&record, config).await?;
            }
            let template_id = template.unwrap_or_else(|| config.default_template.clone());
            let document = render(&record, &template_id);
            if document.is_placeholder() {
                warn!("Unknown template id '{template_id}', rendering placeholder");
            }
            match format {
                OutputFormat::Json => println!("{}", to_json(&document)?),
                OutputFormat::Text => print!("{}", to_plain_text(&document)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Enhance { input } => {
            let record = load_record(&input)?;
            let enhanced = enhance_with_llm(&record, config).await?;
            println!("{}", to_json(&enhanced)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::CoverLetter {
            input,
            job_title,
            company,
            job_description,
            additional_info,
        } => {
            let record = load_record(&input)?;
            let job = JobDetails {
                job_title,
                company_name: company,
                job_description,
                additional_info,
            };
            let writer = LlmLetterWriter::new(build_llm(config)?);
            info!("Generating cover letter (model: {})", llm_client::MODEL);
            let letter = generate_cover_letter(&job, &record, &writer).await?;
            println!("{letter}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Templates => {
            for template in catalog() {
                println!(
                    "{}\t{}\t{}\t{}",
                    template.id, template.name, template.category, template.color
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { input } => {
            let record = load_record(&input)?;
            let report = validate_record(&record);
            println!("{}", to_json(&report)?);
            if report.passed {
                Ok(ExitCode::SUCCESS)
            } else {
                warn!("Record has {} issue(s)", report.issues.len());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn build_llm(config: &Config) -> Result<LlmClient, AppError> {
    let api_key = config.require_api_key()?;
    Ok(LlmClient::new(
        api_key.to_string(),
        Duration::from_secs(config.llm_timeout_secs),
    ))
}

async fn enhance_with_llm(record: &Record, config: &Config) -> Result<Record, AppError> {
    let llm = build_llm(config)?;
    info!("Enhancing CV (model: {})", llm_client::MODEL);
    Ok(enhance_record(record, &LlmEnhancer::new(llm)).await)
}

fn to_json(value: &impl Serialize) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))
}

/// Reads a record from a JSON file, or from stdin when the path is `-`.
fn load_record(path: &Path) -> Result<Record, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(Record::from_json(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_record_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"personalInfo": {{"fullName": "Alan Turing"}}, "skills": ["logic"]}}"#
        )
        .unwrap();
        let record = load_record(file.path()).unwrap();
        assert_eq!(record.personal_info.full_name, "Alan Turing");
        assert_eq!(record.skills, vec!["logic"]);
    }

    #[test]
    fn test_load_record_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_record(file.path()).unwrap_err();
        assert_eq!(err.code(), "INVALID_RECORD");
    }

    #[test]
    fn test_load_record_missing_file() {
        let err = load_record(Path::new("/nonexistent/record.json")).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_cli_parses_render_flags() {
        let cli = Cli::parse_from([
            "cv-renderer",
            "render",
            "--input",
            "cv.json",
            "--template",
            "3",
            "--format",
            "text",
        ]);
        match cli.command {
            Command::Render {
                template,
                format,
                enhance,
                ..
            } => {
                assert_eq!(template.as_deref(), Some("3"));
                assert_eq!(format, OutputFormat::Text);
                assert!(!enhance);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_cover_letter_flags() {
        let cli = Cli::parse_from([
            "cv-renderer",
            "cover-letter",
            "-i",
            "cv.json",
            "--job-title",
            "Site Reliability Engineer",
            "--company",
            "Initech",
        ]);
        match cli.command {
            Command::CoverLetter {
                job_title,
                company,
                job_description,
                additional_info,
                ..
            } => {
                assert_eq!(job_title, "Site Reliability Engineer");
                assert_eq!(company, "Initech");
                assert_eq!(job_description, "");
                assert_eq!(additional_info, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
