use std::io::{self, BufRead, Write};
use std::process;

use clap::{ArgAction, Parser};
use colored::Colorize;
use log::LevelFilter;

use keycalc::keypad::{Keypad, Screen};
use keycalc::session::{BufferState, Session, ERROR_MARKER};

#[derive(Parser)]
#[command(name = "keycalc")]
#[command(about = "Keypad calculator for + - * / expressions", version)]
struct Cli {
    /// Expressions to evaluate; starts the interactive keypad if omitted
    exprs: Vec<String>,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,

    /// Disable colored output
    #[arg(long, env = "KEYCALC_NO_COLOR")]
    no_color: bool,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn paint(display: &str) -> String {
    if display == ERROR_MARKER {
        display.red().bold().to_string()
    } else {
        display.bold().to_string()
    }
}

/// Terminal screen: the display is printed once per input line, alerts
/// right away
#[derive(Default)]
struct Terminal {
    display: String,
}

impl Screen for Terminal {
    fn show(&mut self, display: &str) {
        self.display = display.to_string();
    }

    fn alert(&mut self, message: &str) {
        println!("{}", message.yellow());
    }
}

fn run_batch(exprs: &[String]) -> bool {
    let mut session = Session::new();
    let mut ok = true;
    for expr in exprs {
        for c in expr.chars() {
            session.append_char(c);
        }
        session.evaluate();
        if session.state() == BufferState::Error {
            ok = false;
            eprintln!("{}", format!("Error: cannot evaluate '{}'", expr).red());
        }
        println!("{}", paint(session.buffer()));
    }
    ok
}

fn run_interactive() -> io::Result<()> {
    let mut pad = Keypad::new(Terminal::default());
    println!("digits and + - * / to type, = to evaluate, c to clear, h for history, q to quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }
        pad.type_str(&line);
        println!("{}", paint(&pad.screen().display));
        print!("> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);
    if cli.no_color {
        colored::control::set_override(false);
    }

    if !cli.exprs.is_empty() {
        if !run_batch(&cli.exprs) {
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run_interactive() {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(1);
    }
}
