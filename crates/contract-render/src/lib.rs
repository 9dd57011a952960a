//! Vendor contract renderer
//!
//! Fills one of two fixed vendor agreement templates with a contract
//! record and writes the result as a Word document.
//!
//! # Pipeline
//!
//! ```text
//! JSON record → ContractInput → template::fill → RenderedDocument → DocxSerializer → file
//!                                    ↑
//!                          TemplateKind (regular | campfire)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use contract_render::{ContractInput, ContractRenderer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = ContractInput::from_json_str(
//!     r#"{"contract_type": "regular", "contractor_name": "Jane Doe", "number_of_content": 2}"#,
//! )?;
//!
//! let renderer = ContractRenderer::default();
//! let path = renderer.render_to_path(&input, "contract.docx").await?;
//! println!("Contract generated: {}", path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod count;
pub mod document;
pub mod error;
pub mod input;
pub mod renderer;
pub mod serializers;
pub mod template;
pub mod writer;

// Re-exports for convenience
pub use config::{FontConfig, Margins, PageConfig, RenderConfig};
pub use count::{count_phrase, resolve_count};
pub use document::RenderedDocument;
pub use error::{
    ConfigError, ContractError, ContractResult, InputError, SerializeError, WriteError,
};
pub use input::{ContentCount, ContractInput};
pub use renderer::ContractRenderer;
pub use serializers::{DocumentSerializer, DocxSerializer, PlainTextSerializer};
pub use template::{Block, TemplateKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering contracts
    pub use crate::config::RenderConfig;
    pub use crate::error::{ContractError, ContractResult};
    pub use crate::input::ContractInput;
    pub use crate::renderer::ContractRenderer;
    pub use crate::serializers::{DocumentSerializer, DocxSerializer, PlainTextSerializer};
    pub use crate::template::TemplateKind;
}
