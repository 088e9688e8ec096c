use super::types::DoctorResult;
use crate::cli::format::print_json;
use crate::cli::Cli;
use crate::output_by_format;
use oma_core::error::Result;

/// Output the doctor result in the appropriate format
pub fn output_result(cli: &Cli, result: &DoctorResult) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json(result),
        human => {
            for check in &result.checks {
                let icon = if check.passed() { "[OK]" } else { "[XX]" };
                println!("{icon} {}: {}", check.name, check.location());
            }
            println!();
            println!("Result: {}/{} checks passed.", result.passed, result.total);
        }
    )
}
