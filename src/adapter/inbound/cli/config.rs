//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use super::output;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
#[allow(clippy::result_large_err)]
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set POLYGON_API_KEY and OPENAI_API_KEY (or ANTHROPIC_API_KEY)");
    output::note(&format!("3. Run: stocksent check config -c {}", path.display()));
    output::note(&format!("4. Run: stocksent run -c {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    #[test]
    fn template_parses_and_validates() {
        Config::parse_toml(CONFIG_TEMPLATE).unwrap();
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database = \"keep.db\"").unwrap();

        assert!(execute_init(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "database = \"keep.db\"");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
