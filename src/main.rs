//! tagmark - restricted Markdown to HTML translator

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tagmark::{Error, Result, translate};

#[derive(Parser)]
#[command(name = "tagmark")]
#[command(version, about = "Translate restricted Markdown into HTML-like markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    tagmark notes.md                 Print the translation to stdout
    tagmark notes.md --out out.html  Save the translation to a file")]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(long, value_name = "OUTPUT")]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input).map_err(|source| Error::Read {
        path: cli.input.clone(),
        source,
    })?;

    let html = translate(&source)?;

    match &cli.out {
        Some(path) => {
            fs::write(path, &html).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            println!("saved to {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
