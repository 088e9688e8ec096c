//! Format output dispatch helpers

/// Dispatch on the output format; the json branch returns a `Result`.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => print_json(&outcome),
///     human => { println!("done"); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

/// Print a serializable value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> oma_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
