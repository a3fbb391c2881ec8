use std::fmt::Write;

use anyhow::Context;
use hrid::IdConverter;

use crate::cli::report_failure;

/// IDs in, numbers out.
pub struct DecodeCommand {
    pub values: Vec<String>,
}

impl DecodeCommand {
    pub fn execute(&self, converter: &IdConverter, no_color: bool) -> (String, usize) {
        let mut output = String::new();
        let mut failed = 0;

        for value in &self.values {
            match decode(converter, value) {
                Ok(nr) => {
                    let _ = writeln!(output, "{nr}");
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

fn decode(converter: &IdConverter, value: &str) -> anyhow::Result<u64> {
    converter
        .to_nr(value)
        .with_context(|| format!("{value}: not a valid ID"))
}
