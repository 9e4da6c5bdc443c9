use std::{fs, path::Path};

use color_eyre::{Result, eyre::WrapErr as _};

/// Reads the prompt file, one prompt per line.
///
/// Lines are trimmed and lines that are empty afterwards are dropped, the
/// order of the remaining ones is kept.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let src =
        fs::read_to_string(path).wrap_err_with(|| format!("Couldn't read {}", path.display()))?;

    Ok(src
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn skips_blank_and_whitespace_only_lines() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "a red cat\n\n   \n\ta blue dog  \n")?;

        let prompts = load(file.path())?;
        assert_eq!(prompts, vec!["a red cat", "a blue dog"]);
        Ok(())
    }

    #[test]
    fn keeps_order_and_duplicates() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "twice\nonce\ntwice\n")?;

        let prompts = load(file.path())?;
        assert_eq!(prompts, vec!["twice", "once", "twice"]);
        Ok(())
    }

    #[test]
    fn handles_crlf_endings() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "a red cat\r\n\r\na blue dog\r\n")?;

        let prompts = load(file.path())?;
        assert_eq!(prompts, vec!["a red cat", "a blue dog"]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error_naming_the_path() {
        let err = load(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
