use std::{env, io::Write, path::Path};

use eyre::{eyre, Result};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is unspecified, return `{cwd}/output/{stem}/{filename}`, where `stem` is the
///   target image's file stem
/// - if `output` is specified, return `/{output}/{filename}`
pub fn build_output_path(output: &str, target: &str, filename: &str) -> Result<String> {
    // if output is unspecified, build a path based on the target
    if output.is_empty() {
        // get the current working directory
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        let stem =
            Path::new(target).file_stem().and_then(|stem| stem.to_str()).unwrap_or("local");

        return Ok(format!("{}/output/{}/{}", cwd, stem, filename));
    }

    // output is specified, return the path
    Ok(format!("{}/{}", output, filename))
}

/// pass the input to the `less` command
pub fn print_with_less(input: &str) -> Result<()> {
    let mut child =
        std::process::Command::new("less").stdin(std::process::Stdio::piped()).spawn()?;

    let stdin = child.stdin.as_mut().ok_or_else(|| eyre!("unable to get stdin for less"))?;
    stdin.write_all(input.as_bytes())?;

    child.wait()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_default_uses_target_stem() {
        let path = build_output_path("", "/tmp/challenge.bin", "disassembled.asm");
        assert!(path
            .expect("failed to build output path")
            .ends_with("/output/challenge/disassembled.asm"));
    }

    #[test]
    fn test_output_default_without_stem() {
        let path = build_output_path("", "", "disassembled.asm");
        assert!(path
            .expect("failed to build output path")
            .ends_with("/output/local/disassembled.asm"));
    }

    #[test]
    fn test_output_specified() {
        let path = build_output_path("/some_dir", "/tmp/challenge.bin", "disassembled.asm");
        assert_eq!(path.expect("failed to build output path"), "/some_dir/disassembled.asm");
    }
}
