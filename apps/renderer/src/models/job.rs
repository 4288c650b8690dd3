use serde::{Deserialize, Serialize};

use crate::models::record::null_as_default;

/// The position a cover letter is written for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_description: String,
    /// Anything else the applicant wants the letter to mention.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_info: String,
}
