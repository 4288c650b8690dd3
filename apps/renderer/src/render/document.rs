//! The renderer's output: an ordered tree of typed nodes, independent of the
//! markup it will eventually be turned into.

use serde::Serialize;

use crate::render::classify::TextBlock;
use crate::render::layout::{LayoutStyle, Region, SectionKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Canonical id of the selected template; the placeholder keeps the id
    /// as requested.
    pub template_id: String,
    /// `None` for the placeholder document.
    pub layout: Option<LayoutStyle>,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Header(Header),
    Section(Section),
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub contacts: Vec<ContactField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Nationality,
    DateOfBirth,
    Linkedin,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
            ContactKind::Nationality => "Nationality",
            ContactKind::DateOfBirth => "Date of Birth",
            ContactKind::Linkedin => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactField {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub region: Region,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    List { items: Vec<String> },
    Entry(Entry),
    /// Skill badges. Order preserved, duplicates kept.
    Tags { items: Vec<String> },
    Pairs { pairs: Vec<KeyValue> },
}

impl Block {
    /// Converts a classified text block; `None` for empty text.
    pub fn from_text(block: TextBlock) -> Option<Block> {
        match block {
            TextBlock::Empty => None,
            TextBlock::List { items } => Some(Block::List { items }),
            TextBlock::Paragraph { text } => Some(Block::Paragraph { text }),
        }
    }
}

/// One job or degree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Job title or degree.
    pub title: Option<String>,
    /// Company or institution.
    pub organization: Option<String>,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub details: Option<Box<Block>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub detail: String,
}

impl Document {
    pub fn header(&self) -> Option<&Header> {
        self.nodes.iter().find_map(|n| match n {
            Node::Header(h) => Some(h),
            _ => None,
        })
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Section(s) => Some(s),
            _ => None,
        })
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().find(|s| s.kind == kind)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.nodes.iter().find_map(|n| match n {
            Node::Notice(notice) => Some(notice),
            _ => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        self.layout.is_none()
    }
}
