#![doc = include_str!("../readme.md")]

use clap::Parser;
use color_eyre::eyre::Result;
use rs021::prelude::*;
use std::fs::File;
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(
    name = "decode021",
    version,
    about = "Decode ASTERIX category 021 data blocks to JSON format"
)]
struct Options {
    /// Print a human-readable dump instead of JSON
    #[arg(long)]
    text: bool,

    /// Output file instead of stdout
    #[arg(long, short, default_value=None)]
    output: Option<String>,

    /// Hex-encoded data blocks to decode (read from stdin when empty)
    blocks: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let mut file = match &options.output {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    if !options.blocks.is_empty() {
        for block in &options.blocks {
            decode_line(block, options.text, &mut file)?;
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(error) = decode_line(line, options.text, &mut file) {
            warn!("skipping line: {error}");
        }
    }
    Ok(())
}

/// Decode every data block concatenated in one hex string.
fn decode_line(hex: &str, text: bool, file: &mut Option<File>) -> Result<()> {
    let bytes = hex::decode(hex)?;
    let mut rest = &bytes[..];
    while !rest.is_empty() {
        let (record, consumed) = Cat21::from_bytes(rest)?;
        rest = &rest[consumed..];
        let rendered = if text {
            format!("{record}")
        } else {
            serde_json::to_string(&record)?
        };
        match file {
            Some(file) => writeln!(file, "{rendered}")?,
            None => println!("{rendered}"),
        }
    }
    Ok(())
}
