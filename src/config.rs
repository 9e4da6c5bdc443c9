use std::{env, path::PathBuf};

use color_eyre::{Result, eyre::eyre};

use crate::{cli::Cli, image_model::Model};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Everything a run needs, resolved once before any prompt is processed.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub descriptions_file: PathBuf,
    pub output_dir: PathBuf,
    pub model: Model,
}

impl Config {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let env_key = env::var(API_KEY_VAR).ok();
        Self::from_parts(cli, env_key)
    }

    fn from_parts(cli: Cli, env_key: Option<String>) -> Result<Self> {
        let api_key = cli
            .api_key
            .or(env_key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| eyre!("No API key found. Set {API_KEY_VAR} or pass --api-key."))?;

        Ok(Self {
            api_key,
            descriptions_file: cli.descriptions_file,
            output_dir: cli.output_dir,
            model: cli.model,
        })
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("imgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flag_key_wins_over_env_key() {
        let config = Config::from_parts(cli(&["--api-key", "sk-flag"]), Some("sk-env".into()));
        assert_eq!(config.unwrap().api_key, "sk-flag");
    }

    #[test]
    fn env_key_is_the_fallback() {
        let config = Config::from_parts(cli(&[]), Some("  sk-env\n".into()));
        assert_eq!(config.unwrap().api_key, "sk-env");
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Config::from_parts(cli(&[]), None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(Config::from_parts(cli(&[]), Some("   ".into())).is_err());
        assert!(Config::from_parts(cli(&["--api-key", ""]), None).is_err());
    }
}
