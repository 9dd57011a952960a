//! Document serializers
//!
//! Turn a `RenderedDocument` into the bytes of an output file:
//! - Word documents (.docx) for the delivered contract
//! - Plain text for previews

use crate::document::RenderedDocument;
use crate::error::SerializeError;

mod docx;
mod text;

pub use docx::DocxSerializer;
pub use text::PlainTextSerializer;

/// Serializer trait for rendering documents into a file format
///
/// Output must depend only on the document: the same document always
/// serializes to the same bytes.
pub trait DocumentSerializer: Send + Sync {
    /// Serialize the whole document
    ///
    /// # Errors
    /// `SerializeError` if the document cannot be represented in this format
    fn serialize(&self, document: &RenderedDocument) -> Result<Vec<u8>, SerializeError>;

    /// File extension (without dot)
    fn extension(&self) -> &'static str;

    /// IANA media type of the output
    fn media_type(&self) -> &'static str;
}
