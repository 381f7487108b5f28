use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use minilang_lexer::{report, tokenize};

const DEMO_PROGRAM: &str = "\
int main()
begin
 int n, re = 0, rem;
 while(expr)
 begin
 expr=expr+expr;
 end
end";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Source,
    Tokens,
    Ids,
    Symbols,
}

/// Tokenize a program and print its token, id and symbol tables.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Source file, `-` for stdin. Defaults to a built-in demonstration program.
    path: Option<PathBuf>,

    /// Sections to print.
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["source", "tokens", "ids", "symbols"]
    )]
    sections: Vec<Section>,
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        None => Ok(DEMO_PROGRAM.to_string()),
        Some(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

fn banner(title: &str) {
    println!("\n=== {title} ===");
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = read_source(cli.path.as_ref())?;
    let (tokens, registry) = tokenize(&source).context("tokenization failed")?;
    info!("{} tokens, {} registry entries", tokens.len(), registry.len());

    for section in &cli.sections {
        match section {
            Section::Source => {
                banner("SOURCE CODE");
                println!("{}", source.trim_end());
            }
            Section::Tokens => {
                banner("TOKEN TABLE");
                print!("{}", report::token_table(&tokens));
            }
            Section::Ids => {
                banner("TOKEN ID MAP");
                print!("{}", report::id_map_table(&registry));
            }
            Section::Symbols => {
                banner("SYMBOL TABLE");
                print!("{}", report::symbol_table(&tokens));
            }
        }
    }

    Ok(())
}
