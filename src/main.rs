use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use monkey::{lexer::tokens::TokenKind, parse, render_error, tokenize, Lexer};

const PROMPT: &str = ">> ";

#[derive(ClapParser)]
#[command(name = "monkey")]
#[command(about = "Lexer and Pratt parser front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive loop (the default)
    Repl {
        /// Parse each line and print the program instead of its tokens
        #[arg(long)]
        parse: bool,
    },
    /// Print the token stream of a source file
    Tokens {
        /// Path to the source file
        path: PathBuf,
    },
    /// Parse a source file and print the reconstructed program
    Parse {
        /// Path to the source file
        path: PathBuf,
        /// Print how long each phase took
        #[arg(long)]
        timings: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl { parse: false }) {
        Commands::Repl { parse } => repl(parse),
        Commands::Tokens { path } => {
            let source = read_source(&path)?;
            for token in tokenize(&source) {
                println!("{}", token.debug());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse { path, timings } => parse_file(&path, timings),
    }
}

fn read_source(path: &Path) -> Result<String> {
    read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_file(path: &Path, timings: bool) -> Result<ExitCode> {
    let source = read_source(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let start = Instant::now();
    if timings {
        let token_count = tokenize(&source).len();
        println!("Tokenized {} tokens in {:?}", token_count, start.elapsed());
    }

    let parse_start = Instant::now();
    let (program, errors) = parse(&source);

    if timings {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, &source, &file_name));
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}

fn repl(parse_lines: bool) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            return Ok(ExitCode::SUCCESS);
        }

        if parse_lines {
            let (program, errors) = parse(&line);
            if errors.is_empty() {
                println!("{}", program);
            } else {
                for error in &errors {
                    print!("{}", render_error(error, &line, "repl"));
                }
            }
            continue;
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EOF {
                break;
            }
            println!("{}", token);
        }
        println!();
    }
}
