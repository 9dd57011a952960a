//! Plain-text serializer

use crate::document::RenderedDocument;
use crate::error::SerializeError;
use crate::serializers::DocumentSerializer;

/// UTF-8 text, one paragraph per line group
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSerializer;

impl DocumentSerializer for PlainTextSerializer {
    fn serialize(&self, document: &RenderedDocument) -> Result<Vec<u8>, SerializeError> {
        Ok(document.plain_text().into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn media_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
