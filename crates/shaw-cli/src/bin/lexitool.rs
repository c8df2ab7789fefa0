use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shaw_cli::commands::{config_ops, lexicon_ops, user_dict_ops};
use shaw_cli::trace_init;

#[derive(Parser)]
#[command(name = "lexitool", about = "Shavian lexicon build tool")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the ReadLex lexicon and phrase list
    Fetch {
        /// Output directory
        output_dir: String,
    },
    /// Compile ReadLex JSON into a binary lexicon
    Compile {
        /// ReadLex converter JSON
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show lexicon info (compiled, JSON or user lexicon)
    Info {
        /// Lexicon file
        file: String,
    },
    /// Look up a word (exact match)
    Lookup {
        /// Lexicon file (compiled or JSON)
        lexicon_file: String,
        /// Word to look up
        word: String,
    },
    /// List words starting with a prefix
    Prefix {
        /// Lexicon file (compiled or JSON)
        lexicon_file: String,
        /// Prefix to search
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value = "20")]
        n: usize,
    },
    /// Bracket the known multi-word phrases in a text
    Phrase {
        /// Phrase list file
        phrases_file: String,
        /// Text to scan
        text: String,
    },
    /// Export the default IPA table as TOML
    IpaExport,
    /// Validate a custom IPA table TOML file
    IpaValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Manage the user lexicon
    UserDict {
        /// User lexicon file (default: $XDG_DATA_HOME/shaw/user_lexicon.shul)
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: UserDictAction,
    },
}

#[derive(Subcommand)]
enum UserDictAction {
    /// Add a spelling
    Add {
        /// Latin word
        word: String,
        /// Shavian spelling
        script: String,
        /// POS tag the spelling applies to (default: any)
        #[arg(long)]
        tag: Option<String>,
    },
    /// Remove a spelling
    Remove {
        /// Latin word
        word: String,
        /// Shavian spelling
        script: String,
    },
    /// List all registered spellings
    List,
}

fn main() {
    let cli = Cli::parse();
    trace_init::init_tracing(cli.log_json);

    match cli.command {
        Command::Fetch { output_dir } => lexicon_ops::fetch(&output_dir),
        Command::Compile {
            input_file,
            output_file,
        } => lexicon_ops::compile(&input_file, &output_file),
        Command::Info { file } => lexicon_ops::info(&file),
        Command::Lookup { lexicon_file, word } => lexicon_ops::lookup(&lexicon_file, &word),
        Command::Prefix {
            lexicon_file,
            query,
            n,
        } => lexicon_ops::prefix(&lexicon_file, &query, n),
        Command::Phrase { phrases_file, text } => lexicon_ops::phrase(&phrases_file, &text),
        Command::IpaExport => config_ops::ipa_export(),
        Command::IpaValidate { file } => config_ops::ipa_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::UserDict { file, action } => {
            let path = file.unwrap_or_else(user_dict_ops::default_user_dict_path);
            match action {
                UserDictAction::Add { word, script, tag } => {
                    user_dict_ops::user_dict_add(&path, &word, &script, tag.as_deref())
                }
                UserDictAction::Remove { word, script } => {
                    user_dict_ops::user_dict_remove(&path, &word, &script)
                }
                UserDictAction::List => user_dict_ops::user_dict_list(&path),
            }
        }
    }
}
