use std::path::PathBuf;

use clap::{Parser, Subcommand};

use emoji_cli::commands::convert_ops::ConvertArgs;
use emoji_cli::commands::{config_ops, convert_ops};

// Without a subcommand the arguments are converted, so `emojify hello world`
// is the same as `emojify convert hello world`.
#[derive(Parser)]
#[command(
    name = "emojify",
    about = "Annoy your coworkers with emoji messages in Slack"
)]
struct Cli {
    /// Log conversion traces to stderr (requires the `trace` feature)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write JSON trace logs to this directory instead (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a sentence to emojis (the default command)
    Convert(ConvertArgs),
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose || cli.log_dir.is_some() {
        emoji_engine::trace_init::init_tracing(cli.log_dir.as_deref());
    }

    match cli.command {
        Some(Command::Convert(args)) => convert_ops::convert_cmd(&args),
        Some(Command::SettingsExport) => config_ops::settings_export(),
        Some(Command::SettingsValidate { file }) => config_ops::settings_validate(&file),
        None => convert_ops::convert_cmd(&cli.convert),
    }
}
