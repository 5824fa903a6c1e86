use clap::{Parser, ValueEnum};

use tokenline::{log_status, ConfigPatch, Result, TokenBuilder};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tokenline")]
#[command(version = VERSION)]
#[command(about = "Assemble conditional whitespace-delimited token strings")]
struct Cli {
    /// Token fragments to merge; each may hold several whitespace-separated tokens
    fragments: Vec<String>,

    /// Initial base token
    #[arg(long)]
    base: Option<String>,

    /// Config patch as inline JSON or @path to a JSON file
    #[arg(long, value_name = "JSON|@PATH")]
    config: Option<String>,

    /// Drop tokens already present in the sequence
    #[arg(long)]
    ignore_duplicate: bool,

    /// String joining tokens in the final output
    #[arg(long)]
    separator: Option<String>,

    /// Prepended to the final string
    #[arg(long)]
    prefix: Option<String>,

    /// Appended to the final string
    #[arg(long)]
    suffix: Option<String>,

    /// Final case transform
    #[arg(long, value_enum)]
    case: Option<CaseTransform>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseTransform {
    Lower,
    Upper,
    Camel,
    Sentence,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(line) => println!("{}", line),
        Err(err) => {
            eprintln!("[{}] {}", err.code(), err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut builder = TokenBuilder::with_base(cli.base.unwrap_or_default());

    if let Some(spec) = cli.config.as_deref() {
        let patch = ConfigPatch::from_spec(spec)?;
        if let Some(path) = spec.strip_prefix('@') {
            log_status!("config", "Loaded config from {}", path);
        }
        builder = builder.config(patch);
    }

    // Individual flags override whatever --config supplied.
    builder = builder.config(ConfigPatch {
        ignore_duplicate: cli.ignore_duplicate.then_some(true),
        separator: cli.separator,
        prefix: cli.prefix,
        suffix: cli.suffix,
    });

    let mut builder = builder.merge(&cli.fragments);

    Ok(match cli.case {
        None => builder.end(),
        Some(CaseTransform::Lower) => builder.to_lowercase(),
        Some(CaseTransform::Upper) => builder.to_uppercase(),
        Some(CaseTransform::Camel) => builder.to_camel_case(),
        Some(CaseTransform::Sentence) => builder.to_sentence_case(),
    })
}
