use std::collections::{HashMap};
use std::{fs, io};
use std::io::{Read};
use std::path::{PathBuf};

use ansi_term::Colour::{Blue};
use clap::{Parser};
use thiserror::{Error};
use tracing_subscriber::{EnvFilter};

use valdump::{json, Sink, WriteSink, DUMP_ELEMENT, dump_out};

/// Dump a JSON document in a readable form.
#[derive(Parser, Debug)]
#[command(name = "valdump", version, about, long_about = None)]
struct Args {
    /// The JSON file to dump. Reads stdin if omitted.
    file: Option<PathBuf>,

    /// Spaces per nesting level.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Indent with a tab per nesting level instead of spaces.
    #[arg(long, conflicts_with = "indent")]
    tabs: bool,

    /// Colour the output.
    #[arg(long)]
    colour: bool,
}

impl Args {
    /// The indentation per nesting level.
    fn unit(&self) -> String {
        if self.tabs { "\t".to_owned() } else { " ".repeat(self.indent) }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------------------------------------------------------------

/// Paints dumps before passing them on.
struct Painted<S>(S);

impl<S: Sink> Sink for Painted<S> {
    fn receive(&mut self, text: String) { self.0.receive(Blue.paint(text).to_string()); }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut text = String::new();
    match &args.file {
        Some(path) => { text = fs::read_to_string(path)?; },
        None => { io::stdin().lock().read_to_string(&mut text)?; },
    }
    let value = json::parse(&text)?;

    let stdout = WriteSink(io::stdout());
    let sink: Box<dyn Sink> = if args.colour { Box::new(Painted(stdout)) } else { Box::new(stdout) };
    let mut surface = HashMap::from([(DUMP_ELEMENT.to_owned(), sink)]);
    dump_out(&mut surface, &value, &args.unit());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("valdump=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("valdump: {}", error);
        std::process::exit(1);
    }
}
