use ansi_term::Color;
use anyhow::Context;
use clap::Parser;
use hrid::{ConvError, IdConverter, Options, id};
use tokio::io::AsyncWriteExt;

use crate::cli::{decode::DecodeCommand, encode::EncodeCommand};

mod decode;
mod encode;

const LONG_ABOUT: &str = "\
hrid, the Human Readable ID converter.

  hrid [FLAGS] NUMBER...     generates human readable IDs and prints them on stdout
  hrid [FLAGS] --id ID...    re-interprets the IDs as numbers and prints them on stdout";

#[derive(clap::Args, Clone, Debug)]
struct ConverterArgs {
    /// Conversion alphabet: the first symbol represents 0, the second 1, etc.
    #[arg(long = "alphabet", short = 'a', env = "HRID_ALPHABET", default_value = id::ALPHABET)]
    alphabet: String,

    /// Minimum length of generated IDs, 0 for no padding
    #[arg(long = "length", short = 'l', env = "HRID_LENGTH", default_value_t = id::MIN_LEN)]
    length: usize,

    /// Ignore casing when converting IDs to numbers
    #[arg(
        long = "ignore-case",
        env = "HRID_IGNORE_CASE",
        default_value_t = id::IGNORE_CASE,
        action = clap::ArgAction::Set
    )]
    ignore_case: bool,

    /// Size of space-delimited groups in generated IDs, 0 for no grouping
    #[arg(long = "group-size", short = 'g', env = "HRID_GROUP_SIZE", default_value_t = id::GROUP_SIZE)]
    group_size: usize,

    /// Number of checksum symbols to append
    #[arg(long = "checksum", short = 'c', env = "HRID_CHECKSUM", default_value_t = id::CHECKSUM_LEN)]
    checksum: usize,
}

impl From<ConverterArgs> for Options {
    fn from(args: ConverterArgs) -> Self {
        Options {
            alphabet: args.alphabet,
            min_len: args.length,
            ignore_case: args.ignore_case,
            group_size: args.group_size,
            checksum_len: args.checksum,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = LONG_ABOUT)]
struct Command {
    #[command(flatten)]
    converter: ConverterArgs,

    /// Arguments are IDs to convert into numbers, instead of numbers to convert into IDs
    #[arg(long = "id", short = 'i')]
    id: bool,

    /// Log the options the converter is created with
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,

    #[arg(long = "no-color", default_value = "false")]
    no_color: bool,

    #[arg(required = true)]
    values: Vec<String>,
}

pub async fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    tracing::debug!("Starting cli");

    let options = Options::from(cli.converter);
    if cli.verbose {
        tracing::info!(?options, "creating converter");
    }

    let converter = IdConverter::new(options).context("create converter")?;

    let total = cli.values.len();
    let (output, failed) = if cli.id {
        DecodeCommand { values: cli.values }.execute(&converter, cli.no_color)
    } else {
        EncodeCommand { values: cli.values }.execute(&converter, cli.no_color)
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    if failed > 0 {
        anyhow::bail!("{failed} of {total} values could not be converted");
    }

    Ok(())
}

/// Tells the user whether fixing the input can help.
fn hint(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ConvError>() {
        Some(e) if !e.is_input_error() => "system error, the conversion will never work",
        _ => "check your input and retry",
    }
}

fn report_failure(value: &str, err: &anyhow::Error, no_color: bool) {
    let hint = hint(err);
    tracing::warn!(value, error = %format!("{err:#}"), "skipping value");

    if no_color {
        eprintln!("{value}: {hint}");
    } else {
        eprintln!("{value}: {}", Color::Red.normal().paint(hint));
    }
}
