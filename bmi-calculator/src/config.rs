use std::{env, path::PathBuf, str::FromStr};

use dotenv::dotenv;

use crate::error::{Error, Result};

const LOG_CONFIG_VAR: &str = "BMI_LOG_CONFIG";
const OUTPUT_VAR: &str = "BMI_OUTPUT";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_config: PathBuf,
    pub output: OutputFormat,
}

impl Config {
    /// Reads configuration from the process environment, loading `.env` first
    /// if one is present. A given `output` takes precedence over `BMI_OUTPUT`,
    /// which is then not parsed at all.
    pub fn from_env(output: Option<OutputFormat>) -> Result<Self> {
        dotenv().ok();
        Self::from_vars(|name| env::var(name).ok(), output)
    }

    fn from_vars(
        var: impl Fn(&str) -> Option<String>,
        output: Option<OutputFormat>,
    ) -> Result<Self> {
        let log_config: PathBuf = var(LOG_CONFIG_VAR)
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
            .into();
        let output = match output {
            Some(output) => output,
            None => var(OUTPUT_VAR)
                .map(|format| format.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(Self { log_config, output })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_config: DEFAULT_LOG_CONFIG.into(),
            output: OutputFormat::default(),
        }
    }
}
