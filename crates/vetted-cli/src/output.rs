//! Everything the binary prints goes through [`OutputManager`], including
//! the engine's rejection messages. Results go to stdout; with JSON output
//! every status line and rejection moves to stderr.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use vetted_core::{
    application::{ApplicationError, ports::LineWriter},
    error::VettedResult,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Styling of one status line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
    Header,
    Rejection,
}

impl Tone {
    fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("\u{2713}"),
            Self::Warning => Some("\u{26a0}"),
            Self::Info => Some("\u{2139}"),
            Self::Header | Self::Rejection => None,
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().bold().to_string(),
            Self::Warning | Self::Rejection => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
            Self::Header => text.cyan().bold().to_string(),
        }
    }

    /// Status lines are hidden by `--quiet`; rejections belong to the dialogue.
    fn silenced_by_quiet(self) -> bool {
        !matches!(self, Self::Rejection)
    }
}

#[derive(Debug, Clone)]
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
    status_term: Term,
}

impl OutputManager {
    /// The `--output-format` flag wins; when it is `auto` the config value is
    /// tried, and a remaining `auto` becomes human on a terminal, plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            resolved => resolved,
        };
        let color =
            format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        let status_term = if format == OutputFormat::Json {
            Term::stderr()
        } else {
            Term::stdout()
        };

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
            status_term,
        }
    }

    /// Command results. Always written.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.status(Tone::Header, text)
    }

    pub fn rejection(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Rejection, msg)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet && tone.silenced_by_quiet() {
            return Ok(());
        }
        self.status_term.write_line(&self.styled(tone, msg))
    }

    fn styled(&self, tone: Tone, msg: &str) -> String {
        let body = if self.color {
            tone.paint(msg)
        } else {
            msg.to_owned()
        };
        match tone.glyph() {
            Some(glyph) if self.color => format!("{} {body}", tone.paint(glyph)),
            Some(glyph) => format!("{glyph} {body}"),
            None => body,
        }
    }
}

impl LineWriter for OutputManager {
    fn write_line(&mut self, line: &str) -> VettedResult<()> {
        self.rejection(line).map_err(|e| {
            ApplicationError::Io {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn rejections_survive_quiet_mode() {
        assert!(!Tone::Rejection.silenced_by_quiet());
        assert!(Tone::Info.silenced_by_quiet());

        let mut out = manager(true, true, OutputFormat::Plain);
        assert!(out.write_line("Input does not meet criteria").is_ok());
    }

    #[test]
    fn plain_rejection_is_the_bare_message() {
        let out = manager(false, false, OutputFormat::Plain);
        assert_eq!(
            out.styled(Tone::Rejection, "Expected a value between 1 and 4"),
            "Expected a value between 1 and 4"
        );
        assert_eq!(out.styled(Tone::Success, "done"), "\u{2713} done");
    }

    #[test]
    fn color_only_for_human_format() {
        assert!(manager(false, false, OutputFormat::Human).color);
        assert!(!manager(false, true, OutputFormat::Human).color);
        assert!(!manager(false, false, OutputFormat::Plain).color);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        assert!(OutputManager::new(&args, &config).is_json());
    }

    #[test]
    fn explicit_flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        assert!(!OutputManager::new(&args, &config).is_json());
    }
}
