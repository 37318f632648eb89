//! linemark CLI - interactive Markdown to HTML converter.
//!
//! With a file argument the file is converted directly. Without one, lines
//! are collected from stdin until a case-insensitive `exit` sentinel (or
//! end of input); submitting nothing before the sentinel is a fatal
//! "no text" condition and the converter is never invoked.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let input = if args.len() > 1 && args[1] != "-" {
        match std::fs::read_to_string(&args[1]) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("linemark: {}: {err}", args[1]);
                return ExitCode::FAILURE;
            }
        }
    } else {
        match collect_until_sentinel() {
            Some(text) => text,
            None => {
                eprintln!("No text!");
                return ExitCode::FAILURE;
            }
        }
    };

    let html = linemark::to_html(&input);
    let mut stdout = io::stdout().lock();
    if stdout.write_all(html.as_bytes()).is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Read stdin line by line until the `exit` sentinel or end of input.
/// Returns `None` when no content arrived before the sentinel.
fn collect_until_sentinel() -> Option<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("Enter text in Markdown format.");
        println!("To submit your Markdown text, enter \"exit\".\n");
    }
    collect_lines(stdin.lock())
}

fn collect_lines(reader: impl BufRead) -> Option<String> {
    let mut doc = String::new();
    for line in reader.lines() {
        let Ok(line) = line else { break };
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        doc.push_str(&line);
        doc.push('\n');
    }
    if doc.is_empty() { None } else { Some(doc) }
}
