use crate::models::job::JobDetails;
use crate::models::record::{EducationEntry, ExperienceEntry, Record};

pub const DEGREE_FALLBACK: &str = "Degree";
pub const INSTITUTION_FALLBACK: &str = "Institution";
pub const POSITION_FALLBACK: &str = "Position";
pub const COMPANY_FALLBACK: &str = "Company";

/// Used instead of the background block when the record has no usable
/// education or experience.
pub const NO_BACKGROUND_NOTE: &str = "Note: No background information provided. \
    Focus on the personal information and job details to create the cover letter.";

const BACKGROUND_INSTRUCTION: &str = "IMPORTANT: Use this background information \
    extensively to create a highly personalized cover letter. Specifically mention relevant \
    experience, education, and achievements that directly align with the job requirements. \
    Reference specific companies, roles, educational qualifications, and accomplishments to \
    demonstrate the candidate's qualifications for this position.";

const CLOSING_INSTRUCTION: &str = "Generate a compelling cover letter that connects the \
    candidate's background to this specific role and company. Make it professional, engaging, \
    and tailored to the position.";

/// User prompt for one cover letter.
pub fn build_cover_letter_prompt(job: &JobDetails, record: &Record) -> String {
    let info = &record.personal_info;
    let mut prompt = format!(
        "Please generate a professional cover letter with the following information:\n\n\
         PERSONAL INFORMATION:\n\
         - Name: {}\n\
         - Email: {}\n\
         - Phone: {}\n\
         - Location: {}\n\n\
         JOB INFORMATION:\n\
         - Job Title: {}\n\
         - Company Name: {}\n\
         - Job Description: {}\n",
        info.full_name.trim(),
        info.email.trim(),
        info.phone.trim(),
        info.location.trim(),
        job.job_title.trim(),
        job.company_name.trim(),
        job.job_description.trim(),
    );
    if !job.additional_info.trim().is_empty() {
        prompt.push_str(&format!(
            "- Additional Information: {}\n",
            job.additional_info.trim()
        ));
    }
    prompt.push('\n');
    prompt.push_str(&background_block(record));
    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

/// The background block, or the no-background note when there is nothing
/// worth citing.
pub fn background_block(record: &Record) -> String {
    let education = education_lines(&record.education);
    let experience = experience_lines(&record.experience);
    if education.is_empty() && experience.is_empty() {
        return NO_BACKGROUND_NOTE.to_string();
    }

    let mut block = String::from("BACKGROUND INFORMATION:\n\n");
    if !education.is_empty() {
        block.push_str("EDUCATION:\n");
        block.push_str(&education.join("\n"));
        block.push_str("\n\n");
    }
    if !experience.is_empty() {
        block.push_str("WORK EXPERIENCE:\n");
        block.push_str(&experience.join("\n"));
        block.push_str("\n\n");
    }
    block.push_str(BACKGROUND_INSTRUCTION);
    block
}

/// One bullet per education entry naming a degree or an institution.
pub fn education_lines(entries: &[EducationEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !is_blank(&e.degree) || !is_blank(&e.institution))
        .map(|e| {
            background_line(
                &format!(
                    "{} from {}",
                    or_fallback(&e.degree, DEGREE_FALLBACK),
                    or_fallback(&e.institution, INSTITUTION_FALLBACK)
                ),
                &e.start_date,
                &e.graduation_date,
                e.description.as_deref().unwrap_or_default(),
            )
        })
        .collect()
}

/// One bullet per experience entry naming a job title or a company.
pub fn experience_lines(entries: &[ExperienceEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !is_blank(&e.job_title) || !is_blank(&e.company))
        .map(|e| {
            background_line(
                &format!(
                    "{} at {}",
                    or_fallback(&e.job_title, POSITION_FALLBACK),
                    or_fallback(&e.company, COMPANY_FALLBACK)
                ),
                &e.start_date,
                &e.end_date,
                &e.description,
            )
        })
        .collect()
}

// Dates only appear as a pair; a half-open range is left out.
fn background_line(headline: &str, start: &str, end: &str, description: &str) -> String {
    let mut line = format!("• {headline}");
    if !is_blank(start) && !is_blank(end) {
        line.push_str(&format!(" ({} - {})", start.trim(), end.trim()));
    }
    if !is_blank(description) {
        line.push_str(&format!("\n  {}", description.trim()));
    }
    line
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::PersonalInfo;

    fn job() -> JobDetails {
        JobDetails {
            job_title: "Platform Engineer".to_string(),
            company_name: "Initech".to_string(),
            job_description: "Own the deploy pipeline".to_string(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn test_skips_entries_without_headline() {
        let entries = vec![
            EducationEntry {
                degree: "BSc Physics".to_string(),
                ..Default::default()
            },
            EducationEntry {
                location: "Paris".to_string(),
                start_date: "2015-09".to_string(),
                graduation_date: "2018-06".to_string(),
                ..Default::default()
            },
            EducationEntry {
                institution: "  ETH Zurich ".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(
            education_lines(&entries),
            vec![
                "• BSc Physics from Institution".to_string(),
                "• Degree from ETH Zurich".to_string(),
            ]
        );
    }

    #[test]
    fn test_experience_fallbacks_and_dates() {
        let entries = vec![
            ExperienceEntry {
                company: "Globex".to_string(),
                start_date: "2019-01".to_string(),
                end_date: "2021-06".to_string(),
                description: "Shipped billing v2".to_string(),
                ..Default::default()
            },
            ExperienceEntry {
                job_title: "SRE".to_string(),
                start_date: "2021-07".to_string(),
                ..Default::default()
            },
            ExperienceEntry {
                description: "no title, no company".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(
            experience_lines(&entries),
            vec![
                "• Position at Globex (2019-01 - 2021-06)\n  Shipped billing v2".to_string(),
                "• SRE at Company".to_string(),
            ]
        );
    }

    #[test]
    fn test_education_description_is_indented() {
        let entries = vec![EducationEntry {
            degree: "MSc".to_string(),
            institution: "KTH".to_string(),
            start_date: "2016-09".to_string(),
            graduation_date: "2018-06".to_string(),
            description: Some("Thesis on consensus".to_string()),
            ..Default::default()
        }];
        assert_eq!(
            education_lines(&entries),
            vec!["• MSc from KTH (2016-09 - 2018-06)\n  Thesis on consensus".to_string()]
        );
    }

    #[test]
    fn test_prompt_without_background_uses_note() {
        let record = Record {
            personal_info: PersonalInfo {
                full_name: "Grace Hopper".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                location: "Arlington".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let prompt = build_cover_letter_prompt(&job(), &record);
        assert!(prompt.contains("- Name: Grace Hopper\n"));
        assert!(prompt.contains("- Company Name: Initech\n"));
        assert!(prompt.contains(NO_BACKGROUND_NOTE));
        assert!(!prompt.contains("BACKGROUND INFORMATION:"));
        assert!(!prompt.contains("Additional Information"));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    #[test]
    fn test_prompt_with_background_lists_sections() {
        let record = Record {
            experience: vec![ExperienceEntry {
                job_title: "Engineer".to_string(),
                company: "Hooli".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let job = JobDetails {
            additional_info: "Relocating to Berlin".to_string(),
            ..job()
        };
        let prompt = build_cover_letter_prompt(&job, &record);
        assert!(prompt.contains("- Additional Information: Relocating to Berlin\n"));
        assert!(prompt.contains("BACKGROUND INFORMATION:\n\nWORK EXPERIENCE:\n• Engineer at Hooli\n"));
        assert!(!prompt.contains("EDUCATION:"));
        assert!(prompt.contains(BACKGROUND_INSTRUCTION));
        assert!(!prompt.contains(NO_BACKGROUND_NOTE));
    }
}
