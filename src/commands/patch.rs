use std::fs;
use std::path::Path;

use crate::err::Error;
use crate::patch::decode;
use crate::util::{read_lines, write_lines};

pub fn patch(file_path: &Path, patch_path: &Path) -> Result<(), Error> {
    log::info!("reading file...");
    let lines = read_lines(file_path)?;
    log::info!("reading patch file...");
    let text = fs::read_to_string(patch_path).map_err(|source| Error::ReadFile {
        path: patch_path.to_path_buf(),
        source,
    })?;

    let script = match decode(&text) {
        Ok(script) => script,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}:{}: {}", patch_path.display(), err.line, err);
            }
            return Err(Error::InvalidPatch {
                path: patch_path.to_path_buf(),
                errors,
            });
        }
    };

    log::info!("patching...");
    let patched = script.apply(&lines)?;

    log::info!("writing patched file...");
    write_lines(file_path, &patched)
}
