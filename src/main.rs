//! `quality-report`: print a data-quality report for one tabular file.
//!
//! Usage: `quality-report <path> [--json]`

use std::process::ExitCode;

use tabular_quality::loader::LoadOptions;
use tabular_quality::quality::QualityChecker;

fn main() -> ExitCode {
    let mut path: Option<String> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("usage: quality-report <path> [--json]");
                return ExitCode::FAILURE;
            }
        }
    }
    let Some(path) = path else {
        eprintln!("usage: quality-report <path> [--json]");
        return ExitCode::FAILURE;
    };

    match run(&path, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut checker = QualityChecker::from_path(path, &LoadOptions::default())?;
    let report = checker.run_all_checks();

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("\n=== Data Quality Report ===\n");
        print!("{report}");
    }
    Ok(())
}
