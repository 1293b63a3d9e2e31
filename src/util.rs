use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::err::Error;

/// Reads a file into terminator-free lines. LF and CRLF both end a line and
/// neither reaches the line values.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

fn write_terminated(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Writes lines to `path`, each followed by exactly one `\n`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), Error> {
    write_terminated(path, lines).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

pub mod test {
    use rand::prelude::*;

    const WORDS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];

    /// Endless seeded sequences of 0..10 lines drawn from a small pool, so
    /// repeated lines and shared infixes come up often.
    pub fn create_test_lines(seed: u64) -> impl Iterator<Item = Vec<String>> {
        let mut rng = StdRng::seed_from_u64(seed);
        std::iter::repeat_with(move || {
            let len = rng.random_range(0..10);
            (0..len)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())].to_string())
                .collect()
        })
    }

    /// A `len`-line sequence plus a copy reworked by `edits` random
    /// insertions and removals.
    pub fn create_bench_lines(seed: u64, len: usize, edits: usize) -> (Vec<String>, Vec<String>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let old: Vec<String> = (0..len)
            .map(|i| format!("line {i} {}", rng.random_range(0..1000)))
            .collect();
        let mut new = old.clone();
        for _ in 0..edits {
            if new.is_empty() || rng.random_bool(0.5) {
                let at = rng.random_range(0..=new.len());
                new.insert(at, format!("inserted {}", rng.random_range(0..1000)));
            } else {
                let at = rng.random_range(0..new.len());
                new.remove(at);
            }
        }
        (old, new)
    }
}
