//! Diagnostics go to stderr through `tracing`; stdout belongs to the prompt
//! dialogue. `RUST_LOG`, when set, replaces the level chosen from the flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown.
const LOG_TARGETS: [&str; 3] = ["vetted", "vetted_core", "vetted_adapters"];

/// Install the process-wide subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = build_filter(level_for(args));
    let json = args.output_format == OutputFormat::Json;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let layer = if json {
        layer.json().with_ansi(false).boxed()
    } else {
        let ansi = !args.no_color && std::io::stderr().is_terminal();
        layer.without_time().with_ansi(ansi).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot install log subscriber: {e}"))
}

fn build_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    })
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn each_verbose_flag_lowers_the_threshold() {
        let levels: Vec<_> = (0..=4).map(|v| level_for(&flags(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_keeps_only_errors() {
        assert_eq!(level_for(&flags(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&flags(2, true)), LevelFilter::ERROR);
    }
}
