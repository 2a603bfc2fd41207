//! Export pipeline.
//!
//! Converts every commitment in a [`Collation`], renders the template with the
//! resulting data dictionary and either returns the document or writes it to
//! disk. This is the single call behind "preview" and "export" commands.
//!
//! For more control, build a [`TemplateData`](crate::fields::TemplateData)
//! yourself and call a [`TemplateEngine`] directly.

use crate::error::ExportError;
use crate::fields::Collation;
use crate::formats::wml::WmlOptions;
use crate::template::TemplateEngine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Specifies how to export a collation.
///
/// ```ignore
/// let spec = ExportSpec::new(&collation)
///     .with_output_path("Commitment_Preview.xml")
///     .with_options(options);
/// ```
#[derive(Debug)]
pub struct ExportSpec<'a> {
    pub collation: &'a Collation,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    pub options: WmlOptions,
}

impl<'a> ExportSpec<'a> {
    pub fn new(collation: &'a Collation) -> Self {
        Self {
            collation,
            output: None,
            options: WmlOptions::default(),
        }
    }

    /// Sets the output file path. If provided, the document is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_options(mut self, options: WmlOptions) -> Self {
        self.options = options;
        self
    }
}

/// The output from a successful export.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportArtifact {
    /// Rendered document held in memory (no output path given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Runs the export described by `spec` with the given template engine.
///
/// # Errors
///
/// Returns [`ExportError`] if rendering fails or the output file cannot be
/// written. Conversion of individual commitments never fails.
pub fn export(
    spec: ExportSpec<'_>,
    engine: &dyn TemplateEngine,
) -> Result<ExportArtifact, ExportError> {
    let data = spec.collation.template_data(&spec.options);
    let rendered = engine.render(&data)?;
    match spec.output {
        Some(path) => {
            fs::write(&path, rendered.as_bytes())
                .map_err(|err| ExportError::Io(format!("{}: {err}", path.display())))?;
            info!(
                path = %path.display(),
                commitments = spec.collation.languages().len(),
                "wrote export"
            );
            Ok(ExportArtifact::File(path))
        }
        None => Ok(ExportArtifact::InMemory(rendered)),
    }
}
