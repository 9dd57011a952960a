//! Contract renderer - main entry point
//!
//! Runs the pipeline for one contract:
//! select template → fill → serialize → write.

use crate::config::RenderConfig;
use crate::document::RenderedDocument;
use crate::error::ContractResult;
use crate::input::ContractInput;
use crate::serializers::{DocumentSerializer, DocxSerializer};
use crate::template;
use crate::writer::{resolve_output_path, write_atomic};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Fills contract templates and writes them as Word documents
#[derive(Debug, Clone, Default)]
pub struct ContractRenderer {
    config: RenderConfig,
}

impl ContractRenderer {
    /// Create renderer with explicit layout settings
    #[inline]
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Layout settings applied to every document
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Select and fill the template for `input`
    ///
    /// # Errors
    /// `ContractError::Input` if `number_of_content` is not numeric
    pub fn build(&self, input: &ContractInput) -> ContractResult<RenderedDocument> {
        let kind = input.template_kind();
        let blocks = template::fill(input)?;
        debug!(%kind, blocks = blocks.len(), "filled contract template");
        Ok(RenderedDocument::new(kind, blocks, self.config.clone()))
    }

    /// Build and serialize to .docx bytes
    ///
    /// # Errors
    /// `ContractError::Input` or `ContractError::Serialize`
    pub fn render_bytes(&self, input: &ContractInput) -> ContractResult<Vec<u8>> {
        let document = self.build(input)?;
        Ok(DocxSerializer.serialize(&document)?)
    }

    /// Build, serialize and write the contract
    ///
    /// When `path` is an existing directory the file name is derived from
    /// the contractor name. Returns the path written.
    ///
    /// # Errors
    /// - `ContractError::Input` for a non-numeric count
    /// - `ContractError::Serialize` if the document cannot be assembled
    /// - `ContractError::Write` if the destination is not writable
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn render_to_path(
        &self,
        input: &ContractInput,
        path: impl AsRef<Path>,
    ) -> ContractResult<PathBuf> {
        let bytes = self.render_bytes(input)?;
        let target = resolve_output_path(path.as_ref(), input, DocxSerializer.extension());

        write_atomic(&target, &bytes).await?;
        info!(path = %target.display(), bytes = bytes.len(), "contract written");
        Ok(target)
    }
}
