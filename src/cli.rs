use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "lisk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scheme dialect interpreter", long_about = None)]
pub struct Args {
    /// Evaluate a single expression and exit
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    pub eval: Option<String>,

    /// When to color error output
    #[arg(long = "color", value_name = "WHEN", value_enum, default_value = "auto")]
    pub color: ColorChoice,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Complete {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

pub fn generate_completions(shell: Shell) {
    generate(shell, &mut Args::command(), "lisk", &mut io::stdout());
}
