use std::{
    fs::File,
    io::{BufWriter, Write},
};

use chrono::{DateTime, FixedOffset, Local};
use snafu::ResultExt;
use tracing::info;

mod cli;
mod document;
mod error;
mod jpeg;

use document::{Layout, Picture};

fn main() -> Result<(), Box<error::Error>> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .init();

    let pictures = cli
        .images
        .iter()
        .map(|path| Picture::load(path))
        .collect::<error::Result<Vec<_>>>()?;

    let layout = Layout::new(cli.width, cli.height)?;
    let now: DateTime<FixedOffset> = Local::now().into();

    let file = File::create(&cli.output).context(error::Output {
        path: cli.output.clone(),
    })?;

    let metadata = document::Metadata {
        title: &cli.title,
        author: &cli.author,
        subject: &cli.subject,
        keywords: &cli.keywords,
        date: now,
    };

    let mut file = document::build(BufWriter::new(file), &layout, &metadata, pictures)?;
    file.flush().context(error::Output {
        path: cli.output.clone(),
    })?;

    info!(path = %cli.output.display(), "document written");

    Ok(())
}
