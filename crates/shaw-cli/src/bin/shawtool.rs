use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shaw_cli::commands::convert_ops;
use shaw_cli::engine::EngineOptions;
use shaw_cli::trace_init;

#[derive(Parser)]
#[command(name = "shawtool", about = "Latin to Shavian transliteration")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    /// Also write a debug trace to this directory (requires --features trace)
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

/// Resources shared by every command.
#[derive(Args)]
struct Resources {
    /// Phrase list (CSV) the tokenizer merges; checked at startup
    #[arg(long)]
    phrases: Option<PathBuf>,
    /// Pronouncing dictionary (word TAB ipa) tried before spelling rules
    #[arg(long)]
    ipa_dict: Option<PathBuf>,
    /// User lexicon layered over the system lexicon
    #[arg(long)]
    user_dict: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Custom IPA table TOML
    #[arg(long)]
    ipa_table: Option<PathBuf>,
}

impl Resources {
    fn with_lexicon(self, lexicon: PathBuf) -> EngineOptions {
        EngineOptions {
            lexicon,
            phrases: self.phrases,
            ipa_dict: self.ipa_dict,
            user_dict: self.user_dict,
            settings: self.settings,
            ipa_table: self.ipa_table,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert an annotated token document
    Convert {
        /// Lexicon file (compiled or JSON)
        lexicon: PathBuf,
        /// Token document JSON (`-` for stdin)
        #[arg(default_value = "-")]
        tokens: String,
        #[command(flatten)]
        resources: Resources,
    },
    /// Show which rule rendered each token
    Explain {
        /// Lexicon file (compiled or JSON)
        lexicon: PathBuf,
        /// Token document JSON (`-` for stdin)
        #[arg(default_value = "-")]
        tokens: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        resources: Resources,
    },
    /// Answer ID:PAYLOAD requests on stdin until EOF
    Serve {
        /// Lexicon file (compiled or JSON)
        lexicon: PathBuf,
        #[command(flatten)]
        resources: Resources,
    },
    /// Show the phonetic fallback for words
    Phonemize {
        /// Words to transcribe
        #[arg(required = true)]
        words: Vec<String>,
        #[command(flatten)]
        resources: Resources,
    },
}

#[cfg(feature = "trace")]
fn init_file_trace(cli: &Cli) {
    if let Some(dir) = &cli.trace_dir {
        trace_init::init_file_tracing(dir);
    }
}

#[cfg(not(feature = "trace"))]
fn init_file_trace(_cli: &Cli) {}

fn main() {
    let cli = Cli::parse();
    init_file_trace(&cli);
    trace_init::init_tracing(cli.log_json);

    match cli.command {
        Command::Convert {
            lexicon,
            tokens,
            resources,
        } => convert_ops::convert_cmd(&resources.with_lexicon(lexicon), &tokens),
        Command::Explain {
            lexicon,
            tokens,
            json,
            resources,
        } => convert_ops::explain_cmd(&resources.with_lexicon(lexicon), &tokens, json),
        Command::Serve { lexicon, resources } => {
            convert_ops::serve_cmd(&resources.with_lexicon(lexicon))
        }
        Command::Phonemize { words, resources } => {
            convert_ops::phonemize_cmd(&resources.with_lexicon(PathBuf::new()), &words)
        }
    }
}
