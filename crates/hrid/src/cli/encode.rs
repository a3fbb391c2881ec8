use std::fmt::Write;

use anyhow::Context;
use hrid::IdConverter;

use crate::cli::report_failure;

/// Numbers in, IDs out.
pub struct EncodeCommand {
    pub values: Vec<String>,
}

impl EncodeCommand {
    /// Returns one line per converted value and the number of values that were skipped.
    pub fn execute(&self, converter: &IdConverter, no_color: bool) -> (String, usize) {
        let mut output = String::new();
        let mut failed = 0;

        for value in &self.values {
            match encode(converter, value) {
                Ok(id) => {
                    let _ = writeln!(output, "{id}");
                }
                Err(e) => {
                    failed += 1;
                    report_failure(value, &e, no_color);
                }
            }
        }

        (output, failed)
    }
}

fn encode(converter: &IdConverter, value: &str) -> anyhow::Result<String> {
    let nr = value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{value}: not a valid number"))?;

    Ok(converter.to_id(nr))
}
