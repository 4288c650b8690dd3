//! The canonical CV record fed to the renderer.
//!
//! Field names serialize in camelCase so the editor's JSON payload
//! deserializes as-is. Every field defaults to empty: a half-filled form is a
//! valid record. Missing keys and explicit `null`s read the same way.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's empty value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity block shown in the document header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nationality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// `YYYY-MM` or empty.
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    /// `YYYY-MM`, or empty for a current position.
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// One editing session's worth of CV data.
///
/// Owned by the editor; the renderer only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_sections: Vec<CustomSection>,
}

impl Record {
    /// Parses a record from the editor's JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_record() {
        let record = Record::from_json("{}").unwrap();
        assert_eq!(record, Record::default());
    }

    #[test]
    fn test_parses_editor_payload() {
        let raw = r#"{
            "personalInfo": { "fullName": "Ada Lovelace", "email": "ada@example.com" },
            "summary": "Analyst",
            "experience": [{
                "id": "1700000000000",
                "jobTitle": "Engineer",
                "company": "Analytical Engines",
                "startDate": "2020-01",
                "endDate": ""
            }],
            "education": [{ "id": "e1", "degree": "BSc", "institution": "UCL", "graduationDate": "2019-06" }],
            "skills": ["Rust", "Rust"],
            "languages": [{ "id": "l1", "language": "French", "proficiency": "Fluent" }]
        }"#;
        let record = Record::from_json(raw).unwrap();
        assert_eq!(record.personal_info.full_name, "Ada Lovelace");
        assert_eq!(record.personal_info.phone, "");
        assert_eq!(record.experience[0].job_title, "Engineer");
        assert_eq!(record.experience[0].end_date, "");
        assert_eq!(record.education[0].description, None);
        assert_eq!(record.skills, vec!["Rust", "Rust"]);
        assert!(record.custom_sections.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = Record {
            custom_sections: vec![CustomSection {
                id: "c1".to_string(),
                title: "Awards".to_string(),
                content: "Best paper".to_string(),
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("customSections").is_some());
        assert!(value["personalInfo"].get("fullName").is_some());
    }

    #[test]
    fn test_null_fields_are_empty() {
        let record = Record::from_json(r#"{"summary": null, "customSections": null}"#).unwrap();
        assert_eq!(record, Record::default());

        let raw = r#"{
            "personalInfo": null,
            "skills": null,
            "experience": [{ "jobTitle": "Engineer", "description": null, "endDate": null }],
            "education": [{ "degree": null, "description": null }]
        }"#;
        let record = Record::from_json(raw).unwrap();
        assert_eq!(record.personal_info, PersonalInfo::default());
        assert!(record.skills.is_empty());
        assert_eq!(record.experience[0].job_title, "Engineer");
        assert_eq!(record.experience[0].description, "");
        assert_eq!(record.experience[0].end_date, "");
        assert_eq!(record.education[0].degree, "");
        assert_eq!(record.education[0].description, None);
    }
}
