//! Configuration to acknowledge narration preferences as well as set defaults.
//!
//! Specifically, we try to find an outloud.toml, and if present we load settings from there.
//! This provides the outline cutoff depth, the speech engine template, and output preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from outloud.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 1)]
    /// Deepest heading level that still starts a new track; deeper headings
    /// fold into the enclosing track. Negative values clamp to 0, meaning
    /// one track per file.
    pub toc_depth: i64,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "tracks".to_string())]
    /// Directory artifacts are written into.
    pub out_dir: String,
    #[facet(default = "espeak-ng -w {file} --stdin".to_string())]
    /// Speech engine command template; `{file}` expands to the artifact
    /// path and segment text arrives on stdin.
    pub engine: String,
    #[facet(default = "wav".to_string())]
    /// Artifact extension produced by the engine template.
    pub extension: String,
    #[facet(default = false)]
    /// Append a synthetic zero level to non-leaf track names so a parent's
    /// own track sorts ahead of its children.
    pub trailing_zero: bool,
    #[facet(default = true)]
    /// Write a tracks.m3u playlist after the run.
    pub playlist: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from outloud.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("outloud.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Outline cutoff depth with negative inputs clamped to zero.
    #[must_use]
    pub fn cutoff(&self) -> usize {
        usize::try_from(self.toc_depth.max(0)).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
