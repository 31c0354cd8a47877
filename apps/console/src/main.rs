//! # vending-machine
//!
//! Starts the console vending machine on stdin/stdout.

use std::process::ExitCode;

use vend_console::text;

fn main() -> ExitCode {
    match vend_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", text::startup_failed(&err));
            ExitCode::FAILURE
        }
    }
}
