//! Single-pass PDF 1.5 writer.
//!
//! Values from [`types`] and the document structures from [`structures`]
//! are registered with a [`Writer`], which numbers them, writes them to the
//! output and finishes the file with its cross-reference table and trailer.

mod sink;
pub mod structures;
pub mod types;
mod writer;

pub use sink::{PdfWrite, Sink};
pub use writer::{DocumentObject, Error, PDF_VERSION, TrailerKey, Writer};
