use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use planner_engine::{ClientSettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "meal-planner")]
#[command(about = "Plan a meal, build a shopping list and check the budget from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL; endpoint paths are appended verbatim.
    #[arg(long, env = "PLANNER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, value_parser = ["file", "terminal", "both"], default_value = "file")]
    pub log_to: String,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "info")]
    pub log_level: String,

    /// Abort backend calls that take longer than this. Unset means wait indefinitely.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
}

impl Cli {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ClientSettings::new(self.base_url.clone())
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log_to.as_str() {
            "terminal" => LogDestination::Terminal,
            "both" => LogDestination::Both,
            _ => LogDestination::File,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_are_applied() {
        let cli = Cli::try_parse_from([
            "meal-planner",
            "--base-url",
            "http://planner.internal:8080/",
            "--log-to",
            "both",
            "--log-level",
            "debug",
            "--request-timeout-secs",
            "90",
        ])
        .unwrap();

        let settings = cli.client_settings();
        assert_eq!(settings.base_url, "http://planner.internal:8080/");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(90)));
        assert_eq!(settings.connect_timeout, None);
        assert!(matches!(cli.log_destination(), LogDestination::Both));
        assert_eq!(cli.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn no_timeout_by_default() {
        let cli = Cli::try_parse_from(["meal-planner", "--base-url", "http://x"]).unwrap();
        assert_eq!(cli.client_settings().request_timeout, None);
        assert!(matches!(cli.log_destination(), LogDestination::File));
    }

    #[test]
    fn unknown_log_target_is_rejected() {
        assert!(Cli::try_parse_from(["meal-planner", "--log-to", "syslog"]).is_err());
    }
}
