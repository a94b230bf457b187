use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Letter size, in points.
const DEFAULT_WIDTH: f64 = 612.0;
const DEFAULT_HEIGHT: f64 = 792.0;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to write the document to
    pub output: PathBuf,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub author: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub keywords: String,

    /// JPEG file to place on its own page; may be repeated
    #[arg(short, long = "image", value_name = "FILE")]
    pub images: Vec<PathBuf>,

    /// Page width in points
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Page height in points
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            3 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "pdfout",
            "out.pdf",
            "--title",
            "Holiday",
            "-i",
            "a.jpg",
            "--image",
            "b.jpg",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, PathBuf::from("out.pdf"));
        assert_eq!(cli.title, "Holiday");
        assert_eq!(cli.author, "");
        assert_eq!(cli.images, [PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_cli_requires_output() {
        assert!(Cli::try_parse_from(["pdfout"]).is_err());
    }
}
