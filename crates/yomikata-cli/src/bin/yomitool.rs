use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use yomikata_cli::commands::config_ops::{self, Overrides};
use yomikata_cli::commands::transcribe_ops::{self, Source};
use yomikata_cli::trace_init;

#[derive(Parser)]
#[command(name = "yomitool", about = "Romaji and furigana for analyzed Japanese text")]
struct Cli {
    /// Custom romaji table (TOML)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom fallback glosses (TOML)
    #[arg(long, global = true)]
    glosses: Option<String>,
    /// Custom settings (TOML)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace to DIR/yomikata-trace.jsonl (requires --features trace)
    #[arg(long, global = true, value_name = "DIR")]
    trace: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct InputArgs {
    /// MeCab output file (stdin if omitted or "-")
    file: Option<String>,
    /// Input is a JSON array of token arrays instead of MeCab output
    #[arg(long)]
    tokens_json: bool,
}

impl InputArgs {
    fn source(&self) -> Source<'_> {
        Source {
            file: self.file.as_deref(),
            json: self.tokens_json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the romaji line for the analyzed text
    Romaji {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print ruby HTML for the analyzed text
    Furigana {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Per-sentence, per-token breakdown with glosses
    Annotate {
        #[command(flatten)]
        input: InputArgs,
        /// Vocabulary TOML ([glosses] table) taking precedence over the fallback glosses
        #[arg(long)]
        vocab: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate romaji tables
    RomajiTable {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate fallback glosses
    Glosses {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default as TOML
    Export,
    /// Validate a custom TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = cli.trace.as_deref().map(trace_init::init_tracing);

    config_ops::apply_overrides(&Overrides {
        romaji: cli.romaji.as_deref(),
        glosses: cli.glosses.as_deref(),
        settings: cli.settings.as_deref(),
    });

    match cli.command {
        Command::Romaji { input } => transcribe_ops::romaji_cmd(&input.source()),
        Command::Furigana { input } => transcribe_ops::furigana_cmd(&input.source()),
        Command::Annotate { input, vocab, json } => {
            transcribe_ops::annotate_cmd(&input.source(), vocab.as_deref(), json)
        }
        Command::RomajiTable { action } => match action {
            ConfigAction::Export => config_ops::romaji_export(),
            ConfigAction::Validate { file } => config_ops::romaji_validate(&file),
        },
        Command::Glosses { action } => match action {
            ConfigAction::Export => config_ops::glosses_export(),
            ConfigAction::Validate { file } => config_ops::glosses_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
