use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::diff::EditScript;
use crate::err::Error;
use crate::patch::encode;
use crate::util::read_lines;

pub fn diff(old_path: &Path, new_path: &Path) -> Result<(), Error> {
    log::info!("reading old file...");
    let old = read_lines(old_path)?;
    log::info!("reading new file...");
    let new = read_lines(new_path)?;

    log::info!("comparing...");
    let script = EditScript::from_compare(&old, &new);
    log::debug!("script has {} ops", script.len());

    log::info!("writing patch to stdout...");
    let mut writer = BufWriter::new(io::stdout().lock());
    writer.write_all(encode(&script).as_bytes())?;
    writer.flush()?;
    Ok(())
}
