use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::diff::{EditScript, Op};

static PATCH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([AR]) (\d+) (.*)$").expect("patch line pattern compiles"));

/// One patch line the decoder could not understand. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid patch action: {raw}")]
pub struct ParseError {
    pub line: usize,
    pub raw: String,
}

/// Renders a script as patch text, one `A <index> <content>` or
/// `R <index> <content>` line per op, each terminated by a single newline.
pub fn encode(script: &EditScript<String>) -> String {
    let mut text = String::new();
    for op in script.ops() {
        let _ = match op {
            Op::Add { index, value } => writeln!(text, "A {index} {value}"),
            Op::Remove { index, value } => writeln!(text, "R {index} {value}"),
        };
    }
    text
}

/// Parses patch text back into a script, preserving op order.
///
/// Blank lines are skipped. A malformed line does not stop the scan; every
/// one is recorded and the decode fails afterwards, so the caller can report
/// them all at once.
pub fn decode(text: &str) -> Result<EditScript<String>, Vec<ParseError>> {
    let mut ops = Vec::new();
    let mut errors = Vec::new();
    for (row, raw) in text.lines().enumerate() {
        if raw.is_empty() {
            continue;
        }
        let caps = match PATCH_LINE.captures(raw) {
            Some(caps) => caps,
            None => {
                errors.push(ParseError {
                    line: row + 1,
                    raw: raw.to_string(),
                });
                continue;
            }
        };
        let index = match caps[2].parse::<usize>() {
            Ok(index) => index,
            // digit run too large to index anything
            Err(_) => {
                errors.push(ParseError {
                    line: row + 1,
                    raw: raw.to_string(),
                });
                continue;
            }
        };
        let value = caps[3].to_string();
        ops.push(match &caps[1] {
            "A" => Op::Add { index, value },
            "R" => Op::Remove { index, value },
            _ => unreachable!("pattern only admits A and R"),
        });
    }
    if errors.is_empty() {
        Ok(EditScript::from(ops))
    } else {
        Err(errors)
    }
}
