pub mod settings;

use crate::core::{ConfigProvider, MissingCommanderPolicy};
use crate::report::PrintMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::{Parser, ValueEnum};
use settings::Settings;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Card-data API and recommendation JSON
    Api,
    /// Headless browser scrape of the recommendation page
    Browser,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "commander-recs")]
#[command(about = "Collects synergy-ranked card recommendations for a list of commanders")]
pub struct CliConfig {
    #[arg(long, help = "The path to the file with the commander names")]
    pub src: Option<String>,

    #[arg(long, help = "The out path")]
    pub out: Option<String>,

    #[arg(
        long,
        default_value_t = 10,
        allow_negative_numbers = true,
        help = "(optional) The threshold for the synergy"
    )]
    pub synergy: i32,

    #[arg(long, help = "(optional) Log the messages")]
    pub log: bool,

    #[arg(long, help = "(optional) Prints the cards to the console as cards")]
    pub cardprint: bool,

    #[arg(long, help = "(optional) Prints the card names out to the console")]
    pub print: bool,

    #[arg(long, value_enum, default_value_t = SourceKind::Api)]
    pub source: SourceKind,

    #[arg(long, help = "Skip names that are not legendary creatures instead of failing")]
    pub skip_missing: bool,

    #[arg(long, default_value_t = 30, help = "Seconds to wait for any request or page load")]
    pub timeout: u64,

    #[arg(long, help = "TOML file overriding endpoints, selector and text layout")]
    pub config: Option<String>,
}

impl CliConfig {
    /// `None` when `--src` or `--out` is missing.
    pub fn into_run_config(self) -> Result<Option<RunConfig>> {
        let (Some(source_path), Some(output_path)) = (self.src, self.out) else {
            return Ok(None);
        };

        let settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        let mut print_modes = Vec::new();
        if self.cardprint {
            print_modes.push(PrintMode::CardPrint);
        }
        if self.print {
            print_modes.push(PrintMode::Names);
        }

        Ok(Some(RunConfig {
            source_path,
            output_path,
            synergy_threshold: self.synergy,
            missing_policy: if self.skip_missing {
                MissingCommanderPolicy::Skip
            } else {
                MissingCommanderPolicy::Abort
            },
            strategy: self.source,
            timeout_seconds: self.timeout,
            print_modes,
            settings,
        }))
    }
}

/// Everything one run needs, resolved from flags and the settings file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_path: String,
    pub output_path: String,
    pub synergy_threshold: i32,
    pub missing_policy: MissingCommanderPolicy,
    pub strategy: SourceKind,
    pub timeout_seconds: u64,
    pub print_modes: Vec<PrintMode>,
    pub settings: Settings,
}

impl RunConfig {
    pub fn new(source_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            synergy_threshold: 10,
            missing_policy: MissingCommanderPolicy::Abort,
            strategy: SourceKind::Api,
            timeout_seconds: 30,
            print_modes: Vec::new(),
            settings: Settings::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("src", &self.source_path)?;
        validate_path("out", &self.output_path)?;
        validate_range("synergy", self.synergy_threshold, 0, i32::MAX)?;
        validate_range("timeout", self.timeout_seconds, 1, u64::MAX)?;
        self.settings.validate()
    }
}

impl ConfigProvider for RunConfig {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn synergy_threshold(&self) -> i32 {
        self.synergy_threshold
    }

    fn missing_policy(&self) -> MissingCommanderPolicy {
        self.missing_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["commander-recs", "--src", "names.txt", "--out", "recs.json"]);
        let config = cli.into_run_config().unwrap().unwrap();

        assert_eq!(config.synergy_threshold, 10);
        assert_eq!(config.strategy, SourceKind::Api);
        assert_eq!(config.missing_policy, MissingCommanderPolicy::Abort);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.print_modes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_required_paths_yield_none() {
        let cli = CliConfig::parse_from(["commander-recs", "--src", "names.txt"]);
        assert!(cli.into_run_config().unwrap().is_none());

        let cli = CliConfig::parse_from(["commander-recs", "--out", "recs.json"]);
        assert!(cli.into_run_config().unwrap().is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = CliConfig::parse_from([
            "commander-recs",
            "--src",
            "names.txt",
            "--out",
            "recs.json",
            "--synergy",
            "25",
            "--log",
            "--cardprint",
            "--print",
            "--source",
            "browser",
            "--skip-missing",
            "--timeout",
            "5",
        ]);
        assert!(cli.log);
        let config = cli.into_run_config().unwrap().unwrap();

        assert_eq!(config.synergy_threshold, 25);
        assert_eq!(config.strategy, SourceKind::Browser);
        assert_eq!(config.missing_policy, MissingCommanderPolicy::Skip);
        assert_eq!(config.print_modes, vec![PrintMode::CardPrint, PrintMode::Names]);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_validation_ranges() {
        let mut config = RunConfig::new("names.txt", "recs.json");
        config.synergy_threshold = -1;
        assert!(config.validate().is_err());

        let mut config = RunConfig::new("names.txt", "recs.json");
        config.synergy_threshold = 150;
        assert!(config.validate().is_ok());

        let mut config = RunConfig::new("names.txt", "recs.json");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        assert!(RunConfig::new("", "recs.json").validate().is_err());
    }
}
