use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::diff::ApplyError;
use crate::patch::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {}", .path.display(), .source)]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {}", .path.display(), .source)]
    WriteFile { path: PathBuf, source: io::Error },
    /// Each offending line has already been reported by the time this
    /// surfaces; the carried list keeps them available to callers.
    #[error("invalid patch file {}", .path.display())]
    InvalidPatch {
        path: PathBuf,
        errors: Vec<ParseError>,
    },
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error("unknown subcommand {name}{}", render_suggestions(.candidates))]
    UnknownSubcommand {
        name: String,
        candidates: Vec<String>,
    },
    #[error("cannot write to console: {0}")]
    Console(#[from] io::Error),
}

fn render_suggestions(candidates: &[String]) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let mut text = String::from("\nMaybe you meant:");
    for name in candidates {
        text.push_str("\n    ");
        text.push_str(name);
    }
    text
}
