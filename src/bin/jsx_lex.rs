//! Command-line interface for jsx-lex
//! This binary runs the markup lexer over a file and prints the result in a
//! chosen stage/format combination.
//!
//! Usage:
//!   jsx-lex execute `<path>` [--format `<format>`]  - Lex a markup file
//!   jsx-lex list-formats                          - List available formats

use clap::{Arg, Command};
use jsx_lex::jsx_lex::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    let matches = Command::new("jsx-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A lexer for a JSX-like markup dialect")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Lex a markup file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'line-simple', 'line-json')")
                        .default_value("line-simple"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches.get_one::<String>("path").unwrap();
            let format = execute_matches.get_one::<String>("format").unwrap();
            handle_execute_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
