use std::{env, fs, path::Path};

use eyre::{Result, WrapErr};

/// Convert a long path to a short path by replacing the current working
/// directory with `.`.
///
/// ```no_run
/// use synacore_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/listing.asm";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./listing.asm");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.to_string_lossy().to_string(), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as
/// needed.
///
/// ```no_run
/// use synacore_common::utils::io::file::write_file;
///
/// write_file("/tmp/listing.asm", "0:\thalt").expect("write failed");
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    if let Some(prefix) = path.parent() {
        fs::create_dir_all(prefix)
            .wrap_err_with(|| format!("unable to create directory: {}", prefix.display()))?;
    }

    fs::write(path, contents).wrap_err_with(|| format!("unable to write file: {path_str}"))?;
    Ok(())
}

/// Read the contents of a file on the disc.
pub fn read_file(path_str: &str) -> Result<String> {
    fs::read_to_string(path_str).wrap_err_with(|| format!("unable to read file: {path_str}"))
}

/// Delete a file or directory on the disc, recursively.
pub fn delete_path(path_str: &str) -> bool {
    let path = Path::new(path_str);
    if path.is_dir() {
        fs::remove_dir_all(path).is_ok()
    } else {
        fs::remove_file(path).is_ok()
    }
}
