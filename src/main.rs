//! codesift - structured code search for coding assistants
//!
//! Command-line usage:
//!   codesift <pattern> [path] [--format count|lines|context|full] [--glob ...] [-i]
//!   codesift --tool better_grep --usage       - Print the tool's usage prompt
//!   codesift --describe                       - Print the tool definition as JSON
//!   codesift --args '{"pattern": "..."}'      - Call the tool with JSON arguments

use codesift::cli::run_cli;

fn main() {
    // Initialize logging
    env_logger::init();

    match run_cli() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
