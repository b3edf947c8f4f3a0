//! Command-line surface and run configuration.

use std::time::Duration;

use clap::Parser;

use crate::action::ActionFlags;
use crate::error::{CtlError, Result};
use crate::filter::FilterCriteria;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Control Chromecast devices from the command line.
///
/// Without an action flag, the matching devices are listed.
#[derive(Parser, Debug)]
#[command(name = "ccctrl", version)]
pub struct Args {
    /// Print more information
    #[arg(long)]
    pub verbose: bool,

    /// Device(s) to control
    #[arg(short = 'd', long = "devices", value_name = "NAME")]
    pub devices: Vec<String>,

    /// Include a cast type (group for example)
    #[arg(short = 'i', long = "include-type", value_name = "TYPE")]
    pub include_type: Vec<String>,

    /// Ignore a cast type (group for example)
    #[arg(short = 'I', long = "ignore-type", value_name = "TYPE")]
    pub ignore_type: Vec<String>,

    /// Show info about the target device(s)
    #[arg(short = 's', long)]
    pub show: bool,

    /// Set the volume of the target device(s) between 0.0 and 1.0
    #[arg(short = 'v', long, value_name = "VOLUME", allow_negative_numbers = true)]
    pub set_volume: Option<f64>,

    /// Mute the target device(s)
    #[arg(short = 'm', long)]
    pub mute: bool,

    /// Unmute the target device(s)
    #[arg(short = 'u', long)]
    pub unmute: bool,

    /// Turn the volume of the target device(s) up a bit
    #[arg(long)]
    pub volume_up: bool,

    /// Turn the volume of the target device(s) down a bit
    #[arg(long)]
    pub volume_down: bool,

    /// Reboot the target device(s)
    #[arg(short = 'r', long)]
    pub reboot: bool,

    /// Discovery window in seconds (1 to 3600)
    #[arg(short = 't', long, value_name = "SECONDS", default_value_t = 5)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The action flags, independent of how they were spelled
    pub fn action_flags(&self) -> ActionFlags {
        ActionFlags {
            set_volume: self.set_volume,
            show: self.show,
            mute: self.mute,
            unmute: self.unmute,
            reboot: self.reboot,
            volume_up: self.volume_up,
            volume_down: self.volume_down,
        }
    }

    /// Validate command line arguments
    ///
    /// At most one action flag may be given. The volume range itself is checked by the
    /// action builder.
    pub fn validate(&self) -> Result<()> {
        let selected = self.action_flags().selected();
        if selected.len() > 1 {
            return Err(CtlError::ConflictingActions(selected));
        }

        let max_timeout = cast_discovery::MAX_TIMEOUT.as_secs();
        if self.timeout == 0 || self.timeout > max_timeout {
            return Err(CtlError::InvalidConfig(format!(
                "Discovery timeout must be between 1 and {} seconds",
                max_timeout
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(CtlError::InvalidConfig(format!(
                "Invalid log level '{}'. Valid levels: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration for one run, derived from validated arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub criteria: FilterCriteria,
    pub actions: ActionFlags,
    pub verbose: bool,
    pub discovery_timeout: Duration,
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let actions = args.action_flags();
        Self {
            criteria: FilterCriteria {
                names: args.devices,
                include_types: args.include_type,
                ignore_types: args.ignore_type,
            },
            actions,
            verbose: args.verbose,
            discovery_timeout: Duration::from_secs(args.timeout),
            log_level: args.log_level.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ccctrl").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.verbose);
        assert!(args.devices.is_empty());
        assert_eq!(args.timeout, 5);
        assert_eq!(args.log_level, "warn");
        assert!(args.validate().is_ok());
        assert!(args.action_flags().selected().is_empty());
    }

    #[test]
    fn test_repeatable_filters() {
        let args = parse(&["-d", "Kitchen", "--devices", "Den", "-i", "audio", "-I", "group"]);
        let config = Config::from(args);
        assert_eq!(config.criteria.names, vec!["Kitchen", "Den"]);
        assert_eq!(config.criteria.include_types, vec!["audio"]);
        assert_eq!(config.criteria.ignore_types, vec!["group"]);
    }

    #[test]
    fn test_set_volume_short_flag() {
        let args = parse(&["-v", "0.3"]);
        assert_eq!(args.set_volume, Some(0.3));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_negative_volume_parses_for_builder_rejection() {
        let args = parse(&["--set-volume", "-0.5"]);
        assert_eq!(args.set_volume, Some(-0.5));
    }

    #[rstest]
    #[case(&["--show", "--mute"], vec!["--show", "--mute"])]
    #[case(&["-u", "-v", "0.4"], vec!["--set-volume", "--unmute"])]
    #[case(&["--volume-up", "--volume-down", "-r"], vec!["--reboot", "--volume-up", "--volume-down"])]
    fn test_conflicting_actions(#[case] argv: &[&str], #[case] expected: Vec<&'static str>) {
        match parse(argv).validate() {
            Err(CtlError::ConflictingActions(flags)) => assert_eq!(flags, expected),
            other => panic!("Expected ConflictingActions, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_level() {
        let args = parse(&["--log-level", "loud"]);
        assert!(matches!(args.validate(), Err(CtlError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_timeout() {
        let args = parse(&["--timeout", "0"]);
        assert!(matches!(args.validate(), Err(CtlError::InvalidConfig(_))));
    }

    #[rstest]
    #[case("3601")]
    #[case("18446744073709551615")]
    fn test_timeout_above_limit(#[case] timeout: &str) {
        let args = parse(&["--timeout", timeout]);
        match args.validate() {
            Err(CtlError::InvalidConfig(msg)) => {
                assert_eq!(msg, "Discovery timeout must be between 1 and 3600 seconds")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_at_limit() {
        assert!(parse(&["--timeout", "3600"]).validate().is_ok());
    }

    #[test]
    fn test_config_from_args() {
        let args = parse(&["--show", "--verbose", "-t", "2", "--log-level", "DEBUG"]);
        let config = Config::from(args);
        assert!(config.verbose);
        assert!(config.actions.show);
        assert_eq!(config.discovery_timeout, Duration::from_secs(2));
        assert_eq!(config.log_level, "debug");
    }
}
