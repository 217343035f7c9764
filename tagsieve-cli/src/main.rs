use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tagsieve::{NameSet, Sanitizer, SanitizerConfig, Tokenizer};
use tracing::info;

mod formatters;

use formatters::{CleanRecord, TokenRecord};

#[derive(Parser)]
#[command(name = "tagsieve", version = tagsieve::version())]
#[command(about = "Strip markup down to a whitelist of tags and attributes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize one document
    Clean {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        whitelist: WhitelistArgs,

        /// Output a JSON record instead of the bare result
        #[arg(long)]
        json: bool,
    },

    /// Dump the token stream of one document
    Tokens {
        #[command(flatten)]
        source: SourceArgs,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sanitize every line of a file as an independent document
    Batch {
        /// File containing inputs (one per line)
        inputs_file: PathBuf,

        #[command(flatten)]
        whitelist: WhitelistArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Input string to process
    #[arg(short, long, conflicts_with = "file")]
    input: Option<String>,

    /// File to read the input from
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct WhitelistArgs {
    /// JSON file with `allowed_tags` / `allowed_attributes`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Allowed tag names, comma separated (overrides the config file)
    #[arg(short, long)]
    tags: Option<String>,

    /// Allowed attribute names, comma separated (overrides the config file)
    #[arg(short, long)]
    attributes: Option<String>,
}

impl SourceArgs {
    fn read(&self) -> Result<String> {
        if let Some(input) = &self.input {
            Ok(input.clone())
        } else if let Some(file) = &self.file {
            fs::read_to_string(file).with_context(|| format!("Failed to read file: {:?}", file))
        } else {
            anyhow::bail!("Either --input or --file must be specified");
        }
    }
}

impl WhitelistArgs {
    fn load(&self) -> Result<SanitizerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SanitizerConfig::allow_all(),
        };
        if let Some(tags) = &self.tags {
            config.allowed_tags = Some(NameSet::parse_tags(tags).context("Invalid --tags")?);
        }
        if let Some(attributes) = &self.attributes {
            config.allowed_attributes =
                Some(NameSet::parse_attributes(attributes).context("Invalid --attributes")?);
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SanitizerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config file: {:?}", path))
}

fn read_inputs_from_file(file_path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(file_path)
        .with_context(|| format!("Failed to open file: {:?}", file_path))?;
    let reader = BufReader::new(file);

    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }

    Ok(inputs)
}

fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Clean {
            source,
            whitelist,
            json,
        } => {
            let input = source.read()?;
            let config = whitelist.load()?;

            let mut sanitizer = Sanitizer::new(config);
            sanitizer.sanitize(&input);

            if json {
                let record = CleanRecord::new(&input, &sanitizer);
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", sanitizer.result());
            }
        }

        Commands::Tokens { source, json } => {
            let input = source.read()?;
            let records: Vec<TokenRecord> = Tokenizer::new(&input).map(TokenRecord::from).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                formatters::output_tokens(&records);
            }
        }

        Commands::Batch {
            inputs_file,
            whitelist,
        } => {
            let inputs = read_inputs_from_file(&inputs_file)?;
            let mut sanitizer = Sanitizer::new(whitelist.load()?);
            info!(file = %inputs_file.display(), lines = inputs.len(), "batch start");

            for input in &inputs {
                sanitizer.reset();
                sanitizer.sanitize(input);
                let record = CleanRecord::new(input, &sanitizer);
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_comes_from_library() {
        assert_eq!(
            Cli::command().get_version(),
            Some(tagsieve::version())
        );
    }

    #[test]
    fn test_flags_override_allow_all() {
        let whitelist = WhitelistArgs {
            config: None,
            tags: Some("P,b".to_string()),
            attributes: None,
        };
        let config = whitelist.load().unwrap();
        assert!(config.is_allowed_tag("p"));
        assert!(!config.is_allowed_tag("i"));
        assert_eq!(config.allowed_attributes, None);
    }

    #[test]
    fn test_invalid_tag_flag_is_an_error() {
        let whitelist = WhitelistArgs {
            config: None,
            tags: Some("p, <b>".to_string()),
            attributes: None,
        };
        assert!(whitelist.load().is_err());
    }
}
