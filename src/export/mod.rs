//! Document export - text summary, PDF, and share links

pub mod pdf;
pub mod share;
pub mod summary;

use thiserror::Error;

pub use pdf::render_pdf;
pub use share::whatsapp_link;
pub use summary::summary_text;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("embedded template missing: {0}")]
    TemplateMissing(&'static str),

    #[error("template rendering failed")]
    Template(#[from] tera::Error),

    #[error("pdf generation failed")]
    Pdf(#[from] printpdf::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
