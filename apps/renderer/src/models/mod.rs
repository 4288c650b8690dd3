pub mod job;
pub mod record;
pub mod validation;

pub use job::JobDetails;
pub use record::{
    CustomSection, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo, Record,
};
pub use validation::{validate_record, RecordIssue, ValidationReport};
