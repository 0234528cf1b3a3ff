//! Export backends: where a closed segment becomes an artifact.
//!
//! The walk hands over sanitized, ordered segments; everything past that
//! point lives here. The track list is the one piece of state shared across
//! documents, which is why a run processes documents strictly one after
//! another.

use crate::error::{Error, Result};
use crate::segment::{Segment, TrackSink};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// One exported artifact.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrackRecord {
    /// Track name (sanitized outline label plus title).
    pub name: String,
    /// Artifact file name inside the output directory.
    pub file: String,
    /// Source document file name.
    pub source: String,
    /// Number of characters synthesized.
    pub characters: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Ordered record of every artifact exported during one run.
///
/// Created per run and passed by reference into each sink; it drives the
/// playlist and the manifest afterwards.
pub struct TrackList {
    /// Exported tracks in emission order.
    pub tracks: Vec<TrackRecord>,
}

impl TrackList {
    /// Empty list for a new run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of exported tracks so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether nothing has been exported yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Write an extended `.m3u` playlist of the run's artifacts.
    ///
    /// # Errors
    ///
    /// Returns any filesystem failure.
    pub fn write_playlist(&self, path: &Path) -> io::Result<()> {
        let mut lines = vec!["#EXTM3U".to_string()];
        for track in &self.tracks {
            lines.push(format!("#EXTINF:-1,{}", track.name));
            lines.push(track.file.clone());
        }
        lines.push(String::new());
        fs::write(path, lines.join("\n"))
    }

    /// Write the `tracks.json` manifest consumed by taggers and other
    /// post-processing tools.
    ///
    /// # Errors
    ///
    /// Returns serialization or filesystem failures.
    pub fn write_manifest(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Plain-text backend: one `.txt` file per segment.
///
/// Stands in for the speech engine in dry runs; the artifact content is
/// exactly the segment text.
pub struct TextTracks<'run> {
    out_dir: &'run Path,
    source: String,
    list: &'run mut TrackList,
}

impl<'run> TextTracks<'run> {
    /// Text backend writing into `out_dir`, recording into `list`.
    pub fn new(out_dir: &'run Path, source: &Path, list: &'run mut TrackList) -> Self {
        Self {
            out_dir,
            source: file_name(source),
            list,
        }
    }
}

impl TrackSink for TextTracks<'_> {
    fn emit(&mut self, segment: Segment) -> Result<()> {
        if segment.text.is_empty() {
            eprintln!("  skipping empty segment: {}", segment.name);
            return Ok(());
        }
        let file = format!("{}.txt", segment.name);
        fs::write(self.out_dir.join(&file), &segment.text)?;
        self.list.tracks.push(TrackRecord {
            name: segment.name,
            file,
            source: self.source.clone(),
            characters: segment.text.chars().count(),
        });
        Ok(())
    }
}

/// Shell-invoked speech engine backend.
///
/// The engine is configured as a command template (`espeak-ng -w {file}
/// --stdin` by default): tokenized once per run, `{file}` expanded to the
/// artifact path per segment, segment text piped on stdin. A non-zero exit
/// status fails the run.
pub struct SpeechCommand<'run> {
    argv: &'run [String],
    extension: &'run str,
    out_dir: &'run Path,
    source: String,
    list: &'run mut TrackList,
}

impl<'run> SpeechCommand<'run> {
    /// Speech backend writing `{name}.{extension}` artifacts into `out_dir`.
    pub fn new(
        argv: &'run [String],
        extension: &'run str,
        out_dir: &'run Path,
        source: &Path,
        list: &'run mut TrackList,
    ) -> Self {
        Self {
            argv,
            extension,
            out_dir,
            source: file_name(source),
            list,
        }
    }
}

impl TrackSink for SpeechCommand<'_> {
    fn emit(&mut self, segment: Segment) -> Result<()> {
        if segment.text.is_empty() {
            eprintln!("  skipping empty segment: {}", segment.name);
            return Ok(());
        }
        let file = format!("{}.{}", segment.name, self.extension);
        let target = self.out_dir.join(&file);
        let target = target.to_string_lossy();

        let argv: Vec<String> = self
            .argv
            .iter()
            .map(|token| token.replace("{file}", &target))
            .collect();
        let mut child = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(segment.text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(Error::Engine {
                command: argv[0].clone(),
                status,
            });
        }
        self.list.tracks.push(TrackRecord {
            name: segment.name,
            file,
            source: self.source.clone(),
            characters: segment.text.chars().count(),
        });
        Ok(())
    }
}

/// Tokenize a speech engine template with shell quoting rules.
///
/// # Errors
///
/// Returns [`Error::EngineTemplate`] when the template is empty or its
/// quoting is unbalanced.
pub fn parse_template(template: &str) -> Result<Vec<String>> {
    let mut lexer = shlex::Shlex::new(template);
    let argv: Vec<String> = lexer.by_ref().collect();
    if lexer.had_error || argv.is_empty() {
        return Err(Error::EngineTemplate(template.to_string()));
    }
    Ok(argv)
}

/// Displayable file name for track records.
fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
