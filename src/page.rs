//! Viewer-page templating.
//!
//! Reads the batch config JSON and substitutes its values into a static template. Each failure
//! class maps to its own process exit code.

use std::path::{Path, PathBuf};

/// Literal tokens replaced in the template, paired with the config key they take.
pub const PLACEHOLDERS: [(&str, &str); 3] =
    [("I_SIZE", "i_size"), ("T_SIZES", "t_sizes"), ("S_PREFIX", "prefix")];

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("failed to read/parse {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{} must contain 'i_size' and 't_sizes' and 'prefix' keys (missing {missing:?})", .path.display())]
    MissingKeys {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    #[error("failed to read template {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    /// Process exit code for this failure (success is 0).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } => 1,
            Self::MissingKeys { .. } => 2,
            Self::Template { .. } => 3,
            Self::Output { .. } => 4,
        }
    }
}

/// Replace each placeholder with the JSON encoding of its config value.
///
/// Replacement runs token by token in [`PLACEHOLDERS`] order. Returns the missing keys if the
/// config lacks any.
pub fn substitute_placeholders(
    template: &str,
    cfg: &serde_json::Value,
) -> Result<String, Vec<&'static str>> {
    let missing = missing_keys(cfg);
    if !missing.is_empty() {
        return Err(missing);
    }

    let mut out = template.to_owned();
    for (token, key) in PLACEHOLDERS {
        out = out.replace(token, &cfg[key].to_string());
    }
    Ok(out)
}

/// Required keys absent from `cfg` (everything, if `cfg` is not an object).
pub fn missing_keys(cfg: &serde_json::Value) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .map(|&(_, key)| key)
        .filter(|key| cfg.get(key).is_none())
        .collect()
}

pub fn render_page(config: &Path, template: &Path, out: &Path) -> Result<(), PageError> {
    let cfg: serde_json::Value = std::fs::read_to_string(config)
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
        .map_err(|source| PageError::Config {
            path: config.to_path_buf(),
            source,
        })?;

    let missing = missing_keys(&cfg);
    if !missing.is_empty() {
        return Err(PageError::MissingKeys {
            path: config.to_path_buf(),
            missing,
        });
    }

    tracing::info!("reading {}", template.display());
    let text = std::fs::read_to_string(template).map_err(|source| PageError::Template {
        path: template.to_path_buf(),
        source,
    })?;

    let html = substitute_placeholders(&text, &cfg).map_err(|missing| PageError::MissingKeys {
        path: config.to_path_buf(),
        missing,
    })?;

    tracing::info!("writing {}", out.display());
    std::fs::write(out, html).map_err(|source| PageError::Output {
        path: out.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
