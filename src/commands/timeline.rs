//! Timeline subcommand handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use lyrsync::timeline::untimed_lines;
use lyrsync::{Config, Timeline};

/// Print the timeline built from a lyrics file.
///
/// Files without timestamp tags are not an error: their text is printed as-is
/// with a notice on stderr.
pub fn handle(path: &Path, json: bool, config: &Config) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lyrics file: {}", path.display()))?;
    let timeline = Timeline::build_with(&source, &config.timeline_options());

    if !timeline.has_lyrics() {
        eprintln!(
            "No synchronized lyrics in {}, showing text only",
            path.display()
        );
        for line in untimed_lines(&source) {
            println!("{}", line);
        }
        return Ok(());
    }

    if json {
        let out = serde_json::to_string_pretty(&timeline).context("Failed to serialize timeline")?;
        println!("{}", out);
    } else {
        print!("{}", timeline.to_lrc());
    }
    Ok(())
}
