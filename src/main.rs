use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use yaml_bundle::output::EntryFormatter;
use yaml_bundle::{DirLoader, Locale, ResolveOptions, Resolver};

/// Look up entries of a localized YAML resource bundle
#[derive(Parser, Debug)]
#[command(name = "ybundle")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Flat key to print (all entries are printed when omitted)
    #[arg(value_name = "KEY")]
    key: Option<String>,

    /// Directory holding the bundle resources
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Base name of the bundle (e.g. "messages" for messages_ja.yaml)
    #[arg(short, long)]
    base: String,

    /// Locale tag such as "ja", "ja_JP" or "en-US" (root locale when omitted)
    #[arg(short, long, default_value = "", value_parser = validate_locale)]
    locale: Locale,

    /// Formats to probe in priority order (e.g. "yaml,yml")
    #[arg(long, value_delimiter = ',', default_value = "yaml,yml")]
    formats: Vec<String>,

    /// Do not fall back to less specific locales for missing keys
    #[arg(long)]
    no_parent: bool,

    /// Also expose sequence elements as key[0], key[1], ...
    #[arg(long)]
    index_keys: bool,

    /// Print entries as JSON
    #[arg(long, conflicts_with = "key")]
    json: bool,

    /// Log resolution steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Validate a locale tag
fn validate_locale(s: &str) -> Result<Locale, String> {
    Locale::parse(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let options = ResolveOptions::new()
        .with_formats(cli.formats.iter().cloned())
        .with_parent_chain(!cli.no_parent)
        .with_index_keys(cli.index_keys);

    let resolver = Resolver::with_options(DirLoader::new(&cli.dir), options);
    let bundle = resolver
        .resolve(&cli.base, &cli.locale)
        .with_context(|| format!("Failed to resolve bundle '{}' in {}", cli.base, cli.dir.display()))?;

    let formatter = EntryFormatter::with_color(std::io::stdout().is_terminal());
    let output = match &cli.key {
        Some(key) => formatter.format_value(bundle.get(key)?),
        None if cli.json => formatter
            .format_json(&bundle)
            .context("Failed to serialize entries as JSON")?,
        None => formatter.format_entries(&bundle),
    };
    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
