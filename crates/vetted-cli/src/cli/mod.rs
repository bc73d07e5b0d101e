//! Command-line surface of `vetted`: subcommands and their flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};


#[derive(Debug, Parser)]
#[command(
    name    = "vetted",
    bin_name = "vetted",
    version,
    author,
    about    = "Ask until valid",
    long_about = "Vetted asks for typed console input and keeps asking until \
                  the answer parses and passes its checks.",
    after_help = "EXAMPLES:\n\
        \x20 vetted form user-registration --file forms.json\n\
        \x20 vetted shop --items Sword,Shield,Bow\n\
        \x20 vetted inventory market.csv\n\
        \x20 vetted completions bash > /usr/share/bash-completion/completions/vetted",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}


#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in a form from a forms document.
    #[command(
        visible_alias = "f",
        about = "Prompt for every field of a form",
        after_help = "EXAMPLES:\n\
            \x20 vetted form --file forms.json\n\
            \x20 vetted form user-registration --file forms.toml --max-attempts 3\n\
            \x20 vetted form --file forms.json --list"
    )]
    Form(FormArgs),

    /// Run the shop demo.
    #[command(
        about = "Interactive shop demo",
        after_help = "EXAMPLES:\n\
            \x20 vetted shop\n\
            \x20 vetted shop --items Sword,Shield --start-at-zero"
    )]
    Shop(ShopArgs),

    /// Show the stock in an inventory file.
    #[command(
        visible_alias = "inv",
        about = "Display an inventory file",
        after_help = "EXAMPLES:\n\
            \x20 vetted inventory market.csv\n\
            \x20 vetted inventory market.csv --output-format json"
    )]
    Inventory(InventoryArgs),

    #[command(
        about = "Write the default settings to a config file",
        after_help = "EXAMPLES:\n\
            \x20 vetted init           # default location\n\
            \x20 vetted init --local   # .vetted.toml in CWD"
    )]
    Init(InitArgs),

    #[command(
        about = "Print a shell completion script",
        after_help = "EXAMPLES:\n\
            \x20 vetted completions bash > ~/.local/share/bash-completion/completions/vetted\n\
            \x20 vetted completions zsh  > ~/.zfunc/_vetted\n\
            \x20 vetted completions fish > ~/.config/fish/completions/vetted.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Show the effective settings",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vetted config get prompt.max_attempts\n\
            \x20 vetted config list\n\
            \x20 vetted config path"
    )]
    Config(ConfigCommands),
}


/// Arguments for `vetted form`.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Form to run; defaults to `forms.default_form` from the config.
    #[arg(value_name = "NAME", help = "Form name")]
    pub name: Option<String>,

    /// Forms document (JSON or TOML); defaults to `forms.path`.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Forms document (.json or .toml)"
    )]
    pub file: Option<PathBuf>,

    /// Give up on a field after this many rejected answers (0 = never).
    #[arg(
        long = "max-attempts",
        value_name = "N",
        help = "Rejected answers allowed per field (0 = unlimited)"
    )]
    pub max_attempts: Option<u32>,

    /// Print the form names in the document and exit.
    #[arg(long = "list", help = "List forms in the document")]
    pub list: bool,
}


/// Arguments for `vetted shop`.
#[derive(Debug, Args)]
pub struct ShopArgs {
    /// Goods for sale; defaults to `shop.items`.
    #[arg(
        long = "items",
        value_name = "ITEM",
        value_delimiter = ',',
        help = "Comma-separated goods for sale"
    )]
    pub items: Vec<String>,

    /// Number the menu from 0 instead of 1.
    #[arg(long = "start-at-zero", help = "Number menu entries from 0")]
    pub start_at_zero: bool,

    /// Give up on a question after this many rejected answers (0 = never).
    #[arg(
        long = "max-attempts",
        value_name = "N",
        help = "Rejected answers allowed per question (0 = unlimited)"
    )]
    pub max_attempts: Option<u32>,
}


/// Arguments for `vetted inventory`.
#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Inventory file: `#`-prefixed header lines, comma-separated rows.
    #[arg(value_name = "FILE", help = "Inventory file")]
    pub file: PathBuf,
}


/// Arguments for `vetted init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.vetted.toml` in the current directory instead.
    #[arg(long)]
    pub local: bool,

    /// Replace a file that is already there.
    #[arg(short, long)]
    pub force: bool,
}


/// Arguments for `vetted completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}


/// Subcommands for `vetted config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting.
    Get {
        /// Dotted key path, e.g. `prompt.max_attempts`.
        key: String,
    },
    /// Print every setting as TOML.
    List,
    /// Print the path to the default configuration file.
    Path,
}
