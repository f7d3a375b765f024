mod common;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser as ClapParser, ValueEnum};
use owo_colors::OwoColorize;
use slc_lexer::{Lexer, LexerOptions};
use slc_parser::Parser;
use slc_syntax::dump_program;

use common::render_error;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// One line per token: lexeme and kind
    Tokens,
    /// Indented tree dump
    Ast,
    /// The program as JSON
    Json,
}

#[derive(ClapParser, Debug)]
#[command(name = "slc", version, about = "Scan and parse SLC source")]
#[command(group(ArgGroup::new("input").required(true).args(["file", "code"])))]
struct Cli {
    /// Source file to read
    file: Option<PathBuf>,

    /// Source text given inline
    #[arg(short = 'e', long = "eval")]
    code: Option<String>,

    /// What to print. Falls back to $SLC_EMIT, then `ast`.
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Allow digits and '_' in names after the first letter
    #[arg(long = "alnum-idents", default_value_t = false)]
    alnum_idents: bool,

    /// Report each stage on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn resolve_emit(flag: Option<Emit>) -> Emit {
    if let Some(e) = flag {
        return e;
    }
    std::env::var("SLC_EMIT")
        .ok()
        .and_then(|v| Emit::from_str(&v, true).ok())
        .unwrap_or(Emit::Ast)
}

fn log_debug(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("{} {}", format!("[{:<5}]", "Debug").dimmed(), msg);
    }
}

fn fail(msg: String) -> ! {
    eprintln!("{}: {}", "error".red().bold(), msg.red());
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    let emit = resolve_emit(cli.emit);

    let src = match (&cli.code, &cli.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => {
            if !path.exists() {
                fail(format!("File not found: {}", path.display()));
            }
            fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("Failed to read {}: {}", path.display(), e)))
        }
        (None, None) => fail("no input given".to_string()),
    };

    let options = LexerOptions {
        alphanumeric_identifiers: cli.alnum_idents,
    };
    let mut lexer = Lexer::with_options(&src, options);
    let tokens = match lexer.scan() {
        Ok(t) => t,
        Err(e) => {
            render_error("Lex error", &src, &e);
            process::exit(1);
        }
    };
    log_debug(cli.verbose, &format!("scanned {} tokens", tokens.len()));

    if emit == Emit::Tokens {
        for tok in &tokens {
            println!("{:<20} {}", tok.lexeme, tok.kind.name());
        }
        return;
    }

    let mut parser = Parser::new(tokens);
    let program = match parser.parse_program() {
        Ok(p) => p,
        Err(e) => {
            render_error("Parse error", &src, &e);
            process::exit(1);
        }
    };
    log_debug(
        cli.verbose,
        &format!("parsed {} function(s)", program.functions.len()),
    );

    match emit {
        Emit::Ast => print!("{}", dump_program(&program)),
        Emit::Json => match serde_json::to_string_pretty(&program) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("Failed to serialize program: {}", e)),
        },
        Emit::Tokens => {}
    }
}
