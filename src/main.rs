mod grammar;
mod lang;
mod lexer;
mod parser;
mod parser_error;
mod xml;

use std::env;
use std::io::{Read, Write};

use crate::parser::Parser;

/// Exit code for command-line misuse.
const PARAM_ERR: i32 = 10;
/// Exit code for unexpected internal failures (stdin/stdout I/O).
const INTERNAL_ERR: i32 = 99;

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {}
        2 if args[1] == "--help" => {
            print_usage();
            return;
        }
        2 => {
            eprintln!("error: unknown parameter '{}'", args[1]);
            std::process::exit(PARAM_ERR);
        }
        _ => {
            eprintln!("error: wrong amount of parameters");
            std::process::exit(PARAM_ERR);
        }
    }

    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("error: failed to read input: {}", e);
        std::process::exit(INTERNAL_ERR);
    }

    let program = match Parser::new(&source).parse() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let document = xml::to_xml(&program);
    if let Err(e) = std::io::stdout().write_all(document.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(INTERNAL_ERR);
    }
}

fn print_usage() {
    println!("usage: ipparse [--help] < source.src");
    println!();
    println!("A filter that reads IPPcode22 source code from standard input, checks");
    println!("its lexical and syntactic correctness and prints the XML representation");
    println!("of the program to standard output.");
    println!();
    println!("options:");
    println!("  --help        print this help and exit");
}
