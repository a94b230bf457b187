use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Error writing PDF document"))]
    Pdf { source: pdfout::Error },

    #[snafu(display("Failed to read image {}", path.display()))]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Image {} is not usable: {source}", path.display()))]
    Jpeg {
        path: PathBuf,
        source: crate::jpeg::Error,
    },

    #[snafu(display("Failed to write {}", path.display()))]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Page size {width}x{height} is not a positive finite size"))]
    PageSize { width: f64, height: f64 },
}
