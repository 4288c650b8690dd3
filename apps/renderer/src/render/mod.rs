// Document rendering engine.
// Pure and synchronous: (Record, template id) -> Document, no I/O.
// Field-level formatting lives in dates/classify; section rules live in assemble.

pub mod assemble;
pub mod classify;
pub mod dates;
pub mod document;
pub mod layout;
pub mod text;

use tracing::debug;

use crate::models::record::Record;

pub use classify::{classify, TextBlock};
pub use dates::format_month;
pub use document::{Block, Document, Node, Section};
pub use layout::{catalog, select_layout, Layout, SectionKind, TemplateInfo, TemplateKind};
pub use text::to_plain_text;

/// Renders `record` with the template identified by `template_id`.
///
/// Never fails: unknown ids produce the placeholder document, empty fields are
/// omitted.
pub fn render(record: &Record, template_id: &str) -> Document {
    let document = match select_layout(template_id) {
        Layout::Template(kind) => assemble::assemble(record, kind.style()),
        Layout::Placeholder(id) => assemble::placeholder(&id),
    };
    debug!(
        template_id,
        nodes = document.nodes.len(),
        placeholder = document.is_placeholder(),
        "rendered document"
    );
    document
}
