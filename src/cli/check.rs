//! Diagnostic checks.

use crate::cli::{output, Cli};
use crate::config::Config;

/// Validate the configuration file.
pub fn config(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);

    match Config::load(&path) {
        Ok(config) => {
            output::ok(&format!("config valid: {}", path.display()));
            output::key_value("runtime", &config.runtime.api_url);
            match &config.functions {
                Some(functions) => output::key_value("functions", &functions.api_url),
                None => output::key_value("functions", "disabled"),
            }
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("config invalid: {}", path.display()))),
    }
}
