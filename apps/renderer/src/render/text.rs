//! Plain-text export of a rendered document, for terminals and `.txt` downloads.

use crate::render::document::{Block, ContactField, Document, Entry, Header, Node, Section};
use crate::render::layout::{ContactDisplay, LayoutStyle, SkillsDisplay};

const BULLET: &str = "• ";

pub fn to_plain_text(document: &Document) -> String {
    let mut out = String::new();
    for node in &document.nodes {
        match node {
            Node::Header(header) => write_header(&mut out, header, document.layout.as_ref()),
            Node::Section(section) => write_section(&mut out, section, document.layout.as_ref()),
            Node::Notice(notice) => {
                out.push_str(&notice.message);
                out.push('\n');
                out.push_str(&notice.detail);
                out.push('\n');
            }
        }
    }
    out
}

fn write_header(out: &mut String, header: &Header, style: Option<&LayoutStyle>) {
    out.push_str(&header.name);
    out.push('\n');

    let display = style
        .map(|s| s.contacts)
        .unwrap_or(ContactDisplay::Stacked);
    match display {
        ContactDisplay::Inline { separator } if !header.contacts.is_empty() => {
            let values: Vec<&str> = header.contacts.iter().map(|c| c.value.as_str()).collect();
            out.push_str(&values.join(separator));
            out.push('\n');
        }
        ContactDisplay::Inline { .. } => {}
        ContactDisplay::Stacked => {
            for contact in &header.contacts {
                out.push_str(&contact.value);
                out.push('\n');
            }
        }
        ContactDisplay::Labelled => {
            for contact in &header.contacts {
                out.push_str(&labelled(contact));
                out.push('\n');
            }
        }
    }
}

fn labelled(contact: &ContactField) -> String {
    format!("{}: {}", contact.kind.label(), contact.value)
}

fn write_section(out: &mut String, section: &Section, style: Option<&LayoutStyle>) {
    out.push('\n');
    out.push_str(&section.title.to_uppercase());
    out.push('\n');
    for block in &section.blocks {
        write_block(out, block, style);
    }
}

fn write_block(out: &mut String, block: &Block, style: Option<&LayoutStyle>) {
    match block {
        Block::Paragraph { text } => {
            out.push_str(text);
            out.push('\n');
        }
        Block::List { items } => {
            for item in items {
                out.push_str(BULLET);
                out.push_str(item);
                out.push('\n');
            }
        }
        Block::Entry(entry) => write_entry(out, entry, style),
        Block::Tags { items } => {
            let separator = match style.map(|s| s.skills) {
                Some(SkillsDisplay::Inline { separator }) => separator,
                _ => ", ",
            };
            out.push_str(&items.join(separator));
            out.push('\n');
        }
        Block::Pairs { pairs } => {
            for pair in pairs {
                out.push_str(&format!("{}: {}", pair.key, pair.value));
                out.push('\n');
            }
        }
    }
}

fn write_entry(out: &mut String, entry: &Entry, style: Option<&LayoutStyle>) {
    if let Some(title) = &entry.title {
        out.push_str(title);
        out.push('\n');
    }
    let place: Vec<&str> = [entry.organization.as_deref(), entry.location.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !place.is_empty() {
        out.push_str(&place.join(" • "));
        out.push('\n');
    }
    if let Some(dates) = &entry.dates {
        out.push_str(dates);
        out.push('\n');
    }
    if let Some(details) = &entry.details {
        write_block(out, details, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{ExperienceEntry, LanguageEntry, PersonalInfo, Record};
    use crate::render::render;

    fn record() -> Record {
        Record {
            personal_info: PersonalInfo {
                full_name: "Linus".to_string(),
                email: "linus@example.com".to_string(),
                phone: "555".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                id: "1".to_string(),
                job_title: "Maintainer".to_string(),
                company: "Kernel".to_string(),
                location: "Portland".to_string(),
                start_date: "2020-01".to_string(),
                description: "- Merged patches\n- Wrote git".to_string(),
                ..Default::default()
            }],
            skills: vec!["C".to_string(), "Git".to_string()],
            languages: vec![LanguageEntry {
                id: "l".to_string(),
                language: "Finnish".to_string(),
                proficiency: "Native".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_modern_plain_text() {
        let text = to_plain_text(&render(&record(), "1"));
        let expected = "Linus\n\
            linus@example.com\n\
            555\n\
            \n\
            WORK EXPERIENCE\n\
            Maintainer\n\
            Kernel • Portland\n\
            January 2020 – Present\n\
            • Merged patches\n\
            • Wrote git\n\
            \n\
            SKILLS\n\
            C, Git\n\
            \n\
            LANGUAGES\n\
            Finnish: Native\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_inline_contacts_and_skills() {
        let text = to_plain_text(&render(&record(), "2"));
        assert!(text.starts_with("Linus\nlinus@example.com • 555\n"));
        assert!(text.contains("CORE COMPETENCIES\nC • Git\n"));
    }

    #[test]
    fn test_labelled_contacts() {
        let text = to_plain_text(&render(&record(), "5"));
        assert!(text.contains("Email: linus@example.com\nPhone: 555\n"));
    }

    #[test]
    fn test_placeholder_text() {
        let text = to_plain_text(&render(&record(), "99"));
        assert!(text.ends_with("Selected template: 99\n"));
    }
}
