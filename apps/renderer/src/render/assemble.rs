//! Section assembly shared by every template.
//!
//! Order: header, summary, education, experience, skills, languages, then one
//! section per custom section. A section only appears when its data is
//! non-empty; the header always appears.

use crate::models::record::{
    CustomSection, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo, Record,
};
use crate::render::classify::classify;
use crate::render::dates::{education_range, experience_range, format_birth_date};
use crate::render::document::{
    Block, ContactField, ContactKind, Document, Entry, Header, KeyValue, Node, Notice, Section,
};
use crate::render::layout::{LayoutStyle, SectionKind};

pub const NAME_FALLBACK: &str = "Your Name";
pub const CUSTOM_TITLE_FALLBACK: &str = "Additional Information";
pub const PLACEHOLDER_MESSAGE: &str =
    "Template preview will appear here once you start filling in your details.";

/// Builds the full document for a known template.
pub fn assemble(record: &Record, style: LayoutStyle) -> Document {
    let mut nodes = vec![Node::Header(header(&record.personal_info))];

    if let Some(section) = summary_section(&record.summary, &style) {
        nodes.push(Node::Section(section));
    }
    if let Some(section) = education_section(&record.education, &style) {
        nodes.push(Node::Section(section));
    }
    if let Some(section) = experience_section(&record.experience, &style) {
        nodes.push(Node::Section(section));
    }
    if let Some(section) = skills_section(&record.skills, &style) {
        nodes.push(Node::Section(section));
    }
    if let Some(section) = languages_section(&record.languages, &style) {
        nodes.push(Node::Section(section));
    }
    nodes.extend(
        record
            .custom_sections
            .iter()
            .map(|s| Node::Section(custom_section(s, &style))),
    );

    Document {
        template_id: style.kind.id().to_string(),
        layout: Some(style),
        nodes,
    }
}

/// Document for an unknown template id.
pub fn placeholder(template_id: &str) -> Document {
    Document {
        template_id: template_id.to_string(),
        layout: None,
        nodes: vec![Node::Notice(Notice {
            message: PLACEHOLDER_MESSAGE.to_string(),
            detail: format!("Selected template: {template_id}"),
        })],
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn header(info: &PersonalInfo) -> Header {
    let fields = [
        (ContactKind::Email, non_empty(&info.email)),
        (ContactKind::Phone, non_empty(&info.phone)),
        (ContactKind::Location, non_empty(&info.location)),
        (ContactKind::Nationality, non_empty(&info.nationality)),
        (
            ContactKind::DateOfBirth,
            non_empty(&format_birth_date(&info.date_of_birth)),
        ),
        (ContactKind::Linkedin, non_empty(&info.linkedin)),
    ];

    Header {
        name: non_empty(&info.full_name).unwrap_or_else(|| NAME_FALLBACK.to_string()),
        contacts: fields
            .into_iter()
            .filter_map(|(kind, value)| value.map(|value| ContactField { kind, value }))
            .collect(),
    }
}

fn section(kind: SectionKind, title: String, style: &LayoutStyle, blocks: Vec<Block>) -> Section {
    Section {
        kind,
        title,
        region: style.region(kind),
        blocks,
    }
}

fn summary_section(summary: &str, style: &LayoutStyle) -> Option<Section> {
    let text = non_empty(summary)?;
    Some(section(
        SectionKind::Summary,
        style.heading(SectionKind::Summary).to_string(),
        style,
        vec![Block::Paragraph { text }],
    ))
}

fn education_section(entries: &[EducationEntry], style: &LayoutStyle) -> Option<Section> {
    if entries.is_empty() {
        return None;
    }
    let blocks = entries
        .iter()
        .map(|edu| {
            Block::Entry(Entry {
                title: non_empty(&edu.degree),
                organization: non_empty(&edu.institution),
                location: non_empty(&edu.location),
                dates: education_range(&edu.start_date, &edu.graduation_date),
                details: edu
                    .description
                    .as_deref()
                    .and_then(|d| Block::from_text(classify(d)))
                    .map(Box::new),
            })
        })
        .collect();
    Some(section(
        SectionKind::Education,
        style.heading(SectionKind::Education).to_string(),
        style,
        blocks,
    ))
}

fn experience_section(entries: &[ExperienceEntry], style: &LayoutStyle) -> Option<Section> {
    if entries.is_empty() {
        return None;
    }
    let blocks = entries
        .iter()
        .map(|exp| {
            Block::Entry(Entry {
                title: non_empty(&exp.job_title),
                organization: non_empty(&exp.company),
                location: non_empty(&exp.location),
                dates: Some(experience_range(&exp.start_date, &exp.end_date)),
                details: Block::from_text(classify(&exp.description)).map(Box::new),
            })
        })
        .collect();
    Some(section(
        SectionKind::Experience,
        style.heading(SectionKind::Experience).to_string(),
        style,
        blocks,
    ))
}

fn skills_section(skills: &[String], style: &LayoutStyle) -> Option<Section> {
    if skills.is_empty() {
        return None;
    }
    Some(section(
        SectionKind::Skills,
        style.heading(SectionKind::Skills).to_string(),
        style,
        vec![Block::Tags {
            items: skills.to_vec(),
        }],
    ))
}

fn languages_section(languages: &[LanguageEntry], style: &LayoutStyle) -> Option<Section> {
    if languages.is_empty() {
        return None;
    }
    let pairs = languages
        .iter()
        .map(|l| KeyValue {
            key: l.language.clone(),
            value: l.proficiency.clone(),
        })
        .collect();
    Some(section(
        SectionKind::Languages,
        style.heading(SectionKind::Languages).to_string(),
        style,
        vec![Block::Pairs { pairs }],
    ))
}

fn custom_section(custom: &CustomSection, style: &LayoutStyle) -> Section {
    let title = non_empty(&custom.title).unwrap_or_else(|| CUSTOM_TITLE_FALLBACK.to_string());
    let blocks = Block::from_text(classify(&custom.content))
        .into_iter()
        .collect();
    section(SectionKind::Custom, title, style, blocks)
}
