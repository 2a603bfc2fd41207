//! Rich-text commitments to WordprocessingML
//!
//!     Users author "commitment" texts in a rich-text editor. To export them, each
//!     commitment's HTML is converted to a WordprocessingML (WML) fragment and
//!     substituted into a document template. This crate holds that conversion,
//!     the data dictionary it feeds, and a placeholder template engine.
//!
//! Architecture
//!
//!     This is a pure lib: no code here assumes a shell environment. The
//!     collate-cli crate is the shell around it.
//!
//!     .
//!     ├── error.rs                # ExportError
//!     ├── ir                      # RichNode tree (closed set of node kinds)
//!     ├── formats
//!     │   ├── common              # XML escaping
//!     │   ├── html                # normalizer + html5ever parsing → ir
//!     │   └── wml                 # ir → WML runs and paragraphs
//!     ├── fields.rs               # commitments, collation, template data
//!     ├── template.rs             # TemplateEngine trait, XmlTemplate
//!     └── export.rs               # collation → rendered document
//!
//! Core Algorithm
//!
//!     The converter is a recursive translator over the ir tree (see
//!     ./formats/wml/serializer.rs). The paragraph segmentation decision lives
//!     one level up, in ./formats/wml/mod.rs: content without `<p>` tags is
//!     wrapped in one paragraph, otherwise every top-level node becomes its own.
//!
//!     Conversion is total. Unknown tags pass their children through, unknown
//!     leaves vanish, and the output always holds at least one paragraph with
//!     at least one run. Errors only exist around it: loading templates,
//!     reading input, writing output.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── wml                     # converter behaviour and properties
//!     ├── export                  # fixture collation rendered end to end
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so
//!     they are included as modules from tests/lib.rs.
//!
pub mod error;
pub mod export;
pub mod fields;
pub mod formats;
pub mod ir;
pub mod template;

pub use error::ExportError;
pub use export::{export, ExportArtifact, ExportSpec};
pub use fields::{Collation, CommitmentLanguage, TemplateData};
pub use formats::{convert, html_to_wml, WmlOptions};
pub use template::{TemplateEngine, XmlTemplate};
