//! Rendered contract document
//!
//! The filled block sequence together with the layout it will be
//! serialized with. Built once per render and never modified.

use crate::config::RenderConfig;
use crate::template::{Block, TemplateKind};

/// A filled contract ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    kind: TemplateKind,
    blocks: Vec<Block>,
    layout: RenderConfig,
}

impl RenderedDocument {
    /// Assemble from filled blocks
    #[inline]
    #[must_use]
    pub fn new(kind: TemplateKind, blocks: Vec<Block>, layout: RenderConfig) -> Self {
        Self {
            kind,
            blocks,
            layout,
        }
    }

    /// Template the blocks were filled from
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Paragraph blocks in document order
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Page and font settings
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &RenderConfig {
        &self.layout
    }

    /// Plain-text rendition; each break becomes a newline
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            for _ in 0..block.breaks {
                out.push('\n');
            }
            out.push_str(&block.text);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_places_breaks_before_text() {
        let doc = RenderedDocument::new(
            TemplateKind::Regular,
            vec![
                Block::line("Address: Main St", 1),
                Block::line("Vendor account: 42", 2),
                Block::heading("Summary:"),
            ],
            RenderConfig::default(),
        );

        assert_eq!(
            doc.plain_text(),
            "\nAddress: Main St\n\nVendor account: 42\nSummary:\n"
        );
    }

    #[test]
    fn accessors() {
        let doc = RenderedDocument::new(TemplateKind::Campfire, Vec::new(), RenderConfig::default());
        assert_eq!(doc.kind(), TemplateKind::Campfire);
        assert!(doc.blocks().is_empty());
        assert_eq!(doc.layout().font.family, "Arial");
    }
}
