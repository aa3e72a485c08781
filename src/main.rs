use clap::Parser;
use lisk::cli::{generate_completions, Args, Commands};
use lisk::config::AppConfig;
use lisk::diagnostic::render_diagnostic;
use lisk::interpreter::Interpreter;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "starting lisk");

    let mut interpreter = Interpreter::new();

    if let Some(source) = &args.eval {
        execute_expression(&mut interpreter, source, &config);
        return;
    }

    run_interactive_mode(&mut interpreter, &config);
}

fn execute_expression(interpreter: &mut Interpreter, source: &str, config: &AppConfig) {
    verbose_log(config, &format!("evaluating: {}", source));

    match interpreter.run(source) {
        Ok(result) => println!("{}", result),
        Err(error) => {
            let rendered =
                render_diagnostic(source, &error.to_diagnostic(), config.color_enabled);
            eprint!("{}", rendered);
            std::process::exit(1);
        }
    }
}

fn run_interactive_mode(interpreter: &mut Interpreter, config: &AppConfig) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let source = line.trim_end_matches(['\n', '\r']);
                verbose_log(config, &format!("evaluating: {}", source));

                match interpreter.run(source) {
                    Ok(result) => println!("{}", result),
                    Err(error) => error_message(config, &error.to_string()),
                }
            }
            Err(error) => {
                error_message(config, &format!("error reading input: {}", error));
                break;
            }
        }
    }
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[lisk:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    let formatted = format!("[ERROR]: {}", message);
    if config.color_enabled {
        eprintln!("{}", formatted.red().bold());
    } else {
        eprintln!("{}", formatted);
    }
}
