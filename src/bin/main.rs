use clap::{error::ErrorKind, Parser};
use log::warn;
use lox_scanner::{runner::Lox, Error};
use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 74;

/// Prints the tokens of a Lox script, or of each line typed at the prompt.
#[derive(Debug, Parser)]
#[clap(name = "lox", version)]
struct Args {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Usage: lox [script]");
            process::exit(EX_USAGE);
        },
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut lox = Lox::new(stdout.lock(), stderr.lock());

    let result = match args.script {
        Some(path) => lox.run_file(path),
        None => {
            // an interrupt at the prompt ends the session like end of input
            if let Err(e) = ctrlc::set_handler(|| process::exit(0)) {
                warn!("could not install interrupt handler: {}", e);
            }
            lox.run_prompt(io::stdin().lock())
        },
    };

    if let Err(e) = result {
        let code = match e {
            Error::Io(_) => EX_IOERR,
            _ => EX_DATAERR,
        };
        let (_, mut err_out) = lox.into_inner();
        let _ = writeln!(err_out, "{}", e);
        process::exit(code);
    }
}
