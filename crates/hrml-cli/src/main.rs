use clap::{Parser, Subcommand, ValueEnum};
use hrml_resolver::{resolve_all, Strategy};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod input;

use input::{split_input, Input};

#[derive(Parser)]
#[command(name = "hrml")]
#[command(about = "HRML: answer tag.tag~attribute queries against HRML markup")]
#[command(version)]
struct Cli {
    /// Log parsing and resolution details to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the queries of an input file and print one result per line
    Query {
        /// Input file: HRML lines, an empty line, then query lines
        path: String,

        /// Algorithm used to find attribute values
        #[arg(short, long, value_enum, default_value_t = ParserKind::TagTree)]
        parser: ParserKind,
    },

    /// Check the HRML section of an input file for structural errors
    Check {
        /// Input file: HRML lines, an empty line, then query lines
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParserKind {
    /// Build the tag tree once, then walk it per query
    #[value(alias = "tag_tree")]
    TagTree,
    /// Re-scan the markup for every query
    #[value(alias = "in_stream")]
    InStream,
}

impl From<ParserKind> for Strategy {
    fn from(kind: ParserKind) -> Self {
        match kind {
            ParserKind::TagTree => Strategy::TagTree,
            ParserKind::InStream => Strategy::InStream,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Query { path, parser } => cmd_query(&path, parser.into()),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_tracing(verbose: bool) {
    if !verbose {
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();
}

fn read_input(path: &str) -> Input {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => split_input(&source),
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_query(path: &str, strategy: Strategy) {
    let input = read_input(path);

    let resolver = match strategy.build(&input.markup) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%strategy, queries = input.queries.len(), "resolving queries");
    for line in resolve_all(&resolver, &input.queries) {
        println!("{line}");
    }
}

fn cmd_check(path: &str) {
    let input = read_input(path);

    match hrml_parser::Parser::parse(&input.markup) {
        Ok(doc) => {
            tracing::info!(tags = doc.len(), queries = input.queries.len(), "document is well-formed");
            eprintln!("OK: {path}");
        }
        Err(e) => {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    }
}
