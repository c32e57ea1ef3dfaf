use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;
use treelox::{
    Session,
    interpreter::{lexer::tokenize, parser::parse},
};

/// Exit code for a successful run.
const EX_OK: u8 = 0;
/// Exit code for malformed command-line arguments.
const EX_USAGE: u8 = 64;
/// Exit code for a script that could not be read or did not run cleanly.
const EX_DATAERR: u8 = 65;
/// Exit code for an internal failure, such as a terminal the REPL cannot use.
const EX_SOFTWARE: u8 = 70;

/// treelox is a tree-walking interpreter for a small C-like scripting
/// language. Runs a script file, or starts an interactive prompt when no file
/// is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Prints every token before running.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed program before running.
    #[arg(long)]
    ast: bool,

    /// Increases log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // --help and --version also arrive here, on stdout.
            let code = if error.use_stderr() { EX_USAGE } else { EX_OK };
            let _ = error.print();
            return ExitCode::from(code);
        },
    };
    init_tracing(args.verbose);

    let code = match &args.script {
        Some(path) => run_file(path, &args),
        None => run_prompt(&args),
    };
    ExitCode::from(code)
}

/// Installs a stderr subscriber. `RUST_LOG` wins unless `-v` was given.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .init();
}

fn run_file(path: &Path, args: &Args) -> u8 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read '{}': {error}", path.display());
            return EX_DATAERR;
        },
    };

    let name = path.display().to_string();
    let mut session = Session::new();
    if run_source(&mut session, &source, &name, args) {
        EX_OK
    } else {
        EX_DATAERR
    }
}

fn run_prompt(args: &Args) -> u8 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Failed to start the prompt: {error}");
            return EX_SOFTWARE;
        },
    };

    let mut session = Session::new();
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    break;
                }
                if let Err(error) = editor.add_history_entry(line.as_str()) {
                    tracing::warn!(%error, "could not record history");
                }
                run_source(&mut session, &line, "<stdin>", args);
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Failed to read input: {error}");
                return EX_SOFTWARE;
            },
        }
    }
    EX_OK
}

/// Runs one chunk of source, printing the requested dumps and any
/// diagnostics. Returns `true` if the run produced no errors.
fn run_source(session: &mut Session, source: &str, name: &str, args: &Args) -> bool {
    if args.tokens || args.ast {
        let (tokens, _) = tokenize(source);
        if args.tokens {
            for token in &tokens {
                println!("token: {token}");
            }
        }
        if args.ast {
            let (program, _) = parse(tokens);
            for statement in &program {
                println!("{statement}");
            }
        }
    }

    match session.run(source) {
        Ok(()) => true,
        Err(error) => {
            eprintln!("{}", error.report(name));
            false
        },
    }
}
