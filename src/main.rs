//! outloud: narrate structured documents as ordered, outline-numbered tracks.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use outloud::{config, export, formats, input, outline, segment};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "outloud")]
#[command(about = "Narrate structured documents as ordered tracks", long_about = None)]
struct Args {
    /// Files or directories to narrate
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Deepest heading level that still starts a new track
    #[arg(long, short = 'd', value_name = "DEPTH")]
    depth: Option<i64>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Output directory for tracks
    #[arg(long, short = 'o', value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Speech engine template; {file} expands to the artifact path
    #[arg(long, value_name = "CMD")]
    engine: Option<String>,

    /// Write per-track text files instead of invoking the speech engine
    #[arg(long)]
    text_only: bool,

    /// Append a synthetic zero level to non-leaf track names
    #[arg(long)]
    trailing_zero: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> outloud::error::Result<()> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(depth) = args.depth {
        cfg.toc_depth = depth;
    }
    if let Some(engine) = args.engine {
        cfg.engine = engine;
    }
    if let Some(out_dir) = args.out_dir {
        cfg.out_dir = out_dir.display().to_string();
    }
    if args.trailing_zero {
        cfg.trailing_zero = true;
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };
    let documents = input::find_documents(paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let out_dir = PathBuf::from(&cfg.out_dir);
    fs::create_dir_all(&out_dir)?;

    let template = if args.text_only {
        None
    } else {
        Some(export::parse_template(&cfg.engine)?)
    };
    let format = formats::markdown::MarkdownFormat;
    let cutoff = cfg.cutoff();
    let total = documents.len();
    let mut list = export::TrackList::new();

    for (index, path) in documents.iter().enumerate() {
        let ordinal = index + 1;
        eprintln!("[{ordinal}/{total}] {}", path.display());

        let document = input::load_document(path, &format)?;
        let widths =
            outline::DepthWidths::measure(&document.paragraphs, cutoff).with_file_count(total);
        let mut counter = outline::OutlineCounter::new(widths, ordinal, cfg.trailing_zero);

        match &template {
            Some(argv) => {
                let mut sink =
                    export::SpeechCommand::new(argv, &cfg.extension, &out_dir, path, &mut list);
                segment::segment_document(&document, &mut counter, &mut sink)?;
            }
            None => {
                let mut sink = export::TextTracks::new(&out_dir, path, &mut list);
                segment::segment_document(&document, &mut counter, &mut sink)?;
            }
        }
    }

    if cfg.playlist {
        list.write_playlist(&out_dir.join("tracks.m3u"))?;
    }
    list.write_manifest(&out_dir.join("tracks.json"))?;

    println!(
        "{} tracks from {total} documents in {}",
        list.len(),
        out_dir.display()
    );
    Ok(())
}
