use std::fs;
use std::path::Path;
use anyhow::{bail, Result};
use regex::{Captures, Regex};
use tracing::warn;

const ENV_VAR_PATTERN: &str = r"\$\{(\w+)\}";

/// Read a text file, honouring a BOM and falling back to GBK for non-UTF-8 input
pub fn read_text_file_with_guess_encoding(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Configuration file not found: {}", path.display());
    }

    let bytes = fs::read(path)?;
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }

    warn!(
        "{} is not valid {}, retrying as GBK",
        path.display(),
        encoding.name()
    );
    let (text, _, _) = encoding_rs::GBK.decode(&bytes);
    Ok(text.into_owned())
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unknown variables are left untouched so validation can flag them.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(ENV_VAR_PATTERN)?;
    let replaced = pattern.replace_all(content, |caps: &Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
