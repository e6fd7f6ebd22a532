//! Native `site_app` mode: validates a widget config file and prints what it would mount.

use std::path::PathBuf;
use std::process::ExitCode;

use desktop_runtime::{logging, WidgetConfig};

const USAGE: &str = "Usage: site_app [-v|-vv|-vvv] [CONFIG.toml]\n\
\n\
Validates a quick controls config (defaults when omitted) and prints the resolved widgets.\n\
Build for wasm32 with the `csr` feature to run the widgets in a browser.";

#[derive(Debug, Default, PartialEq, Eq)]
/// Parsed command line.
pub struct CheckArgs {
    /// Number of `v`s passed in verbosity flags.
    pub verbosity: u8,
    /// Config file to validate.
    pub config: Option<PathBuf>,
}

impl CheckArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--verbose" => parsed.verbosity = parsed.verbosity.saturating_add(1),
                flag if flag.len() > 1
                    && flag.starts_with('-')
                    && flag[1..].bytes().all(|byte| byte == b'v') =>
                {
                    let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                    parsed.verbosity = parsed.verbosity.saturating_add(count);
                }
                flag if flag.starts_with('-') => return Err(format!("unknown flag `{flag}`")),
                path => {
                    if parsed.config.replace(PathBuf::from(path)).is_some() {
                        return Err("only one config path may be given".to_string());
                    }
                }
            }
        }
        Ok(parsed)
    }
}

/// Human-readable summary of what `config` mounts.
pub fn describe(config: &WidgetConfig) -> String {
    let kinds = config.quick_sliders.enabled_kinds();
    let sliders = if kinds.is_empty() {
        "none".to_string()
    } else {
        kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "quick sliders: {sliders}\ntooltip delay: {} ms\nprimary color: {}",
        config.button.tooltip_delay_ms, config.theme.primary
    )
}

/// Runs the checker and reports the process status.
pub fn run(args: impl IntoIterator<Item = String>) -> ExitCode {
    let args = match CheckArgs::parse(args) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    logging::init(args.verbosity);

    match WidgetConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => {
            println!("{}", describe(&config));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "widget config rejected");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn verbosity_flags_accumulate() {
        let parsed = CheckArgs::parse(args(&["-vv", "--verbose", "widgets.toml"])).expect("args");
        assert_eq!(
            parsed,
            CheckArgs {
                verbosity: 3,
                config: Some(PathBuf::from("widgets.toml")),
            }
        );
        assert_eq!(CheckArgs::parse(args(&[])), Ok(CheckArgs::default()));
    }

    #[test]
    fn unknown_flags_and_extra_paths_are_rejected() {
        assert!(CheckArgs::parse(args(&["-x"])).is_err());
        assert!(CheckArgs::parse(args(&["a.toml", "b.toml"])).is_err());
    }

    #[test]
    fn summary_lists_mounted_sliders_in_order() {
        let config = WidgetConfig::from_toml_str("[quick_sliders]\nshow_volume = false\n")
            .expect("config");
        assert_eq!(
            describe(&config),
            "quick sliders: brightness, input-volume\ntooltip delay: 400 ms\nprimary color: #d0bcff"
        );
    }

    #[test]
    fn disabled_panel_summarizes_as_none() {
        let config =
            WidgetConfig::from_toml_str("[quick_sliders]\nenable = false\n").expect("config");
        assert!(describe(&config).starts_with("quick sliders: none\n"));
    }
}
