//! Template registry: maps a template id to the visual arrangement used for
//! the rendered document.
//!
//! Variants only differ in presentation (headings, alignment, where a section
//! sits). Which sections appear, and in what order, is decided once in
//! `assemble` for every template.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Template kinds
// ────────────────────────────────────────────────────────────────────────────

/// The six templates offered by the template picker. Ids `"1"`..`"6"` are the
/// only coupling point with the picker and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Single-column formal layout.
    ModernProfessional,
    /// Centered serif header, inline contact line.
    ClassicExecutive,
    /// Card-based creative layout.
    CreativeDesigner,
    /// Minimalist layout with a thin rule down the side.
    TechMinimalist,
    /// Header banner with a two-column body.
    CorporateStandard,
    /// Gradient cards, colourful accents.
    AcademicScholar,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::ModernProfessional,
        TemplateKind::ClassicExecutive,
        TemplateKind::CreativeDesigner,
        TemplateKind::TechMinimalist,
        TemplateKind::CorporateStandard,
        TemplateKind::AcademicScholar,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "1" => Some(TemplateKind::ModernProfessional),
            "2" => Some(TemplateKind::ClassicExecutive),
            "3" => Some(TemplateKind::CreativeDesigner),
            "4" => Some(TemplateKind::TechMinimalist),
            "5" => Some(TemplateKind::CorporateStandard),
            "6" => Some(TemplateKind::AcademicScholar),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TemplateKind::ModernProfessional => "1",
            TemplateKind::ClassicExecutive => "2",
            TemplateKind::CreativeDesigner => "3",
            TemplateKind::TechMinimalist => "4",
            TemplateKind::CorporateStandard => "5",
            TemplateKind::AcademicScholar => "6",
        }
    }

    /// Picker metadata for this template.
    pub fn info(&self) -> TemplateInfo {
        let (name, category, color) = match self {
            TemplateKind::ModernProfessional => ("Modern Professional", "Modern", "blue"),
            TemplateKind::ClassicExecutive => ("Classic Executive", "Classic", "gray"),
            TemplateKind::CreativeDesigner => ("Creative Designer", "Creative", "purple"),
            TemplateKind::TechMinimalist => ("Tech Minimalist", "Tech", "green"),
            TemplateKind::CorporateStandard => ("Corporate Standard", "Corporate", "navy"),
            TemplateKind::AcademicScholar => ("Academic Scholar", "Academic", "burgundy"),
        };
        TemplateInfo {
            id: self.id(),
            name,
            category,
            color,
        }
    }

    /// The visual arrangement for this template.
    pub fn style(&self) -> LayoutStyle {
        match self {
            TemplateKind::ModernProfessional => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Left,
                contacts: ContactDisplay::Stacked,
                headings: SectionHeadings {
                    summary: "Professional Summary",
                    experience: "Work Experience",
                    education: "Education",
                    skills: "Skills",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Badges,
                columns: ColumnLayout::Single,
                accent: "blue-500",
            },
            TemplateKind::ClassicExecutive => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Centered,
                contacts: ContactDisplay::Inline { separator: " • " },
                headings: SectionHeadings {
                    summary: "Executive Summary",
                    experience: "Professional Experience",
                    education: "Education",
                    skills: "Core Competencies",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Inline { separator: " • " },
                columns: ColumnLayout::Single,
                accent: "gray-600",
            },
            TemplateKind::CreativeDesigner => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Card,
                contacts: ContactDisplay::Inline { separator: " | " },
                headings: SectionHeadings {
                    summary: "Professional Summary",
                    experience: "Experience",
                    education: "Education",
                    skills: "Skills",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Badges,
                columns: ColumnLayout::Single,
                accent: "indigo-500",
            },
            TemplateKind::TechMinimalist => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Left,
                contacts: ContactDisplay::Inline { separator: " · " },
                headings: SectionHeadings {
                    summary: "Summary",
                    experience: "Experience",
                    education: "Education",
                    skills: "Skills",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Inline { separator: " • " },
                columns: ColumnLayout::Single,
                accent: "gray-400",
            },
            TemplateKind::CorporateStandard => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Banner,
                contacts: ContactDisplay::Labelled,
                headings: SectionHeadings {
                    summary: "Executive Summary",
                    experience: "Professional Experience",
                    education: "Education",
                    skills: "Core Competencies",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Badges,
                columns: ColumnLayout::TwoColumn {
                    sidebar: vec![SectionKind::Skills, SectionKind::Languages],
                },
                accent: "gray-800",
            },
            TemplateKind::AcademicScholar => LayoutStyle {
                kind: *self,
                header: HeaderAlignment::Banner,
                contacts: ContactDisplay::Inline { separator: " • " },
                headings: SectionHeadings {
                    summary: "About Me",
                    experience: "Work Experience",
                    education: "Education",
                    skills: "Skills",
                    languages: "Languages",
                },
                skills: SkillsDisplay::Badges,
                columns: ColumnLayout::Single,
                accent: "purple-500",
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style descriptors
// ────────────────────────────────────────────────────────────────────────────

/// Section identity, independent of the heading a template gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Education,
    Experience,
    Skills,
    Languages,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlignment {
    Left,
    Centered,
    Card,
    Banner,
}

/// How identity fields are laid out under the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "display", rename_all = "snake_case")]
pub enum ContactDisplay {
    /// One field per line.
    Stacked,
    /// All fields on one line.
    Inline { separator: &'static str },
    /// One field per line, prefixed with its label ("Date of Birth: …").
    Labelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "display", rename_all = "snake_case")]
pub enum SkillsDisplay {
    Badges,
    Inline { separator: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "columns", rename_all = "snake_case")]
pub enum ColumnLayout {
    Single,
    /// Listed sections go to the sidebar; everything else stays in the main column.
    TwoColumn { sidebar: Vec<SectionKind> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeadings {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutStyle {
    pub kind: TemplateKind,
    pub header: HeaderAlignment,
    pub contacts: ContactDisplay,
    pub headings: SectionHeadings,
    pub skills: SkillsDisplay,
    pub columns: ColumnLayout,
    /// Accent colour token for rules and list markers.
    pub accent: &'static str,
}

impl LayoutStyle {
    /// Heading for a built-in section. Custom sections carry their own title.
    pub fn heading(&self, kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Summary => self.headings.summary,
            SectionKind::Education => self.headings.education,
            SectionKind::Experience => self.headings.experience,
            SectionKind::Skills => self.headings.skills,
            SectionKind::Languages => self.headings.languages,
            SectionKind::Custom => "",
        }
    }

    pub fn region(&self, kind: SectionKind) -> Region {
        match &self.columns {
            ColumnLayout::TwoColumn { sidebar } if sidebar.contains(&kind) => Region::Sidebar,
            _ => Region::Main,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Result of resolving a template id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Template(TemplateKind),
    /// Unknown id: the document shows a notice plus the raw id.
    Placeholder(String),
}

pub fn select_layout(template_id: &str) -> Layout {
    match TemplateKind::from_id(template_id) {
        Some(kind) => Layout::Template(kind),
        None => Layout::Placeholder(template_id.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub color: &'static str,
}

/// All templates in picker order.
pub fn catalog() -> Vec<TemplateInfo> {
    TemplateKind::ALL.iter().map(TemplateKind::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_select_known_ids() {
        assert_eq!(
            select_layout("1"),
            Layout::Template(TemplateKind::ModernProfessional)
        );
        assert_eq!(
            select_layout(" 5 "),
            Layout::Template(TemplateKind::CorporateStandard)
        );
    }

    #[test]
    fn test_select_unknown_id_is_placeholder() {
        assert_eq!(select_layout("99"), Layout::Placeholder("99".to_string()));
        assert_eq!(select_layout(""), Layout::Placeholder(String::new()));
        assert_eq!(select_layout("0"), Layout::Placeholder("0".to_string()));
    }

    #[test]
    fn test_catalog_in_picker_order() {
        let ids: Vec<&str> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(catalog()[1].name, "Classic Executive");
    }

    #[test]
    fn test_corporate_sidebar_regions() {
        let style = TemplateKind::CorporateStandard.style();
        assert_eq!(style.region(SectionKind::Skills), Region::Sidebar);
        assert_eq!(style.region(SectionKind::Languages), Region::Sidebar);
        assert_eq!(style.region(SectionKind::Experience), Region::Main);
    }

    #[test]
    fn test_single_column_templates_use_main_region() {
        for kind in TemplateKind::ALL {
            if kind == TemplateKind::CorporateStandard {
                continue;
            }
            assert_eq!(kind.style().region(SectionKind::Skills), Region::Main);
        }
    }

    #[test]
    fn test_headings_differ_per_template() {
        assert_eq!(
            TemplateKind::ClassicExecutive.style().heading(SectionKind::Skills),
            "Core Competencies"
        );
        assert_eq!(
            TemplateKind::AcademicScholar.style().heading(SectionKind::Summary),
            "About Me"
        );
    }
}
