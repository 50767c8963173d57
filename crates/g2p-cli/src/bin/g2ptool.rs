use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use g2p_cli::commands::resources::EngineOptions;
use g2p_cli::commands::rule_ops::ApplyOptions;
use g2p_cli::commands::{config_ops, convert_ops, dict_ops, rule_ops};

#[derive(Parser)]
#[command(name = "g2ptool", about = "Han text to IPA transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Where the dictionary comes from.
#[derive(Args)]
struct DictArgs {
    /// Dictionary file
    #[arg(short, long)]
    dict: String,
    /// Dictionary format (cedict, tsv)
    #[arg(long, default_value = "cedict")]
    format: String,
    /// Key CC-CEDICT entries by their traditional headword
    #[arg(long)]
    traditional: bool,
}

/// Settings file plus switches that turn individual settings on.
#[derive(Args)]
struct EngineArgs {
    /// Settings TOML file (default: embedded settings)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Extra rule file, applied after the built-in tables (repeatable)
    #[arg(long = "rules")]
    rules: Vec<PathBuf>,
    /// Output Chao tone letters
    #[arg(long)]
    tones: bool,
    /// Map full-width punctuation to ASCII
    #[arg(long)]
    normalize_punctuation: bool,
    /// Use precomposed affricate ligatures
    #[arg(long)]
    ligatures: bool,
}

impl EngineArgs {
    fn into_options(self, traditional: bool) -> EngineOptions {
        EngineOptions {
            settings_file: self.settings,
            rule_files: self.rules,
            tones: self.tones,
            traditional,
            normalize_punctuation: self.normalize_punctuation,
            ligatures: self.ligatures,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to IPA (reads lines from stdin when TEXT is omitted)
    Transliterate {
        #[command(flatten)]
        dict: DictArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Text to transliterate
        text: Option<String>,
    },
    /// Show how each token of the input was transliterated
    Segments {
        #[command(flatten)]
        dict: DictArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Text to segment
        text: String,
    },
    /// Split text into dictionary words by greedy longest match
    Tokenize {
        #[command(flatten)]
        dict: DictArgs,
        /// Text to tokenize
        text: String,
    },
    /// Look up a key in the dictionary (exact match)
    Lookup {
        #[command(flatten)]
        dict: DictArgs,
        /// Key to look up
        key: String,
    },
    /// Common-prefix search (all keys that are prefixes of the query)
    Prefix {
        #[command(flatten)]
        dict: DictArgs,
        /// Query string
        query: String,
    },
    /// List dictionary entries in key order
    Dump {
        #[command(flatten)]
        dict: DictArgs,
        /// Stop after this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show dictionary statistics
    Info {
        #[command(flatten)]
        dict: DictArgs,
    },
    /// Apply rules to a romanized string
    Apply {
        /// Rule file (repeatable, applied in order)
        #[arg(long = "rules")]
        rules: Vec<PathBuf>,
        /// Skip the built-in pinyin tables
        #[arg(long)]
        no_builtin: bool,
        /// Use the tone-letter table instead of dropping tones
        #[arg(long)]
        tones: bool,
        /// Print every rule that changed the string
        #[arg(long)]
        explain: bool,
        /// Output the explanation as JSON
        #[arg(long, requires = "explain")]
        json: bool,
        /// Romanized input, e.g. ni3hao3
        input: String,
    },
    /// Parse rule files and report errors
    RulesCheck {
        /// Load the built-in tables first, so their symbols are visible
        #[arg(long)]
        with_builtin: bool,
        /// Rule files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print a built-in rule table (lists the tables when NAME is omitted)
    RulesExport {
        /// Table name, e.g. pinyin-to-ipa.txt
        name: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    g2p_cli::trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Transliterate { dict, engine, text } => {
            let opts = engine.into_options(dict.traditional);
            convert_ops::transliterate(&dict.dict, &dict.format, &opts, text.as_deref())
        }
        Command::Segments {
            dict,
            engine,
            json,
            text,
        } => {
            let opts = engine.into_options(dict.traditional);
            convert_ops::segments(&dict.dict, &dict.format, &opts, &text, json)
        }
        Command::Tokenize { dict, text } => {
            dict_ops::tokenize(&dict.dict, &dict.format, dict.traditional, &text)
        }
        Command::Lookup { dict, key } => {
            dict_ops::lookup(&dict.dict, &dict.format, dict.traditional, &key)
        }
        Command::Prefix { dict, query } => {
            dict_ops::prefix(&dict.dict, &dict.format, dict.traditional, &query)
        }
        Command::Dump { dict, limit } => {
            dict_ops::dump(&dict.dict, &dict.format, dict.traditional, limit)
        }
        Command::Info { dict } => dict_ops::info(&dict.dict, &dict.format, dict.traditional),
        Command::Apply {
            rules,
            no_builtin,
            tones,
            explain,
            json,
            input,
        } => {
            let opts = ApplyOptions {
                rule_files: rules,
                builtin: !no_builtin,
                tones,
                explain,
                json,
            };
            rule_ops::apply(&input, &opts)
        }
        Command::RulesCheck {
            with_builtin,
            files,
        } => rule_ops::check(&files, with_builtin),
        Command::RulesExport { name } => rule_ops::export(name.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
