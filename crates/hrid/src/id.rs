//! Human friendly IDs on top of [`Conv`]: fixed minimum length, readable groups and case folding.
//!
//! The default alphabet leaves out symbols that are easily mistaken for one another, e.g. there is
//! no `I` (looks like `1`) and no `O` (looks like `0`).

use crate::{conv::Conv, error::Result};

pub const ALPHABET: &str = "0123456789ABCDEFGHKLMNPQRSTUVWXY";
pub const MIN_LEN: usize = 14;
pub const IGNORE_CASE: bool = true;
pub const GROUP_SIZE: usize = 4;
pub const CHECKSUM_LEN: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Symbols to convert with: "01" for binary, "0123456789" for decimal, etc.
    pub alphabet: String,
    /// IDs shorter than this are left-padded with the first symbol.
    pub min_len: usize,
    /// Upper-case both the alphabet and incoming IDs.
    pub ignore_case: bool,
    /// When non-zero, IDs are split into space-delimited groups, e.g. "0123 4567".
    pub group_size: usize,
    pub checksum_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: ALPHABET.to_string(),
            min_len: MIN_LEN,
            ignore_case: IGNORE_CASE,
            group_size: GROUP_SIZE,
            checksum_len: CHECKSUM_LEN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IdConverter {
    options: Options,
    conv: Conv,
}

impl IdConverter {
    pub fn new(mut options: Options) -> Result<Self> {
        if options.ignore_case {
            options.alphabet = options.alphabet.to_uppercase();
        }

        let conv = Conv::new(&options.alphabet, options.checksum_len)?;

        Ok(Self { options, conv })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn to_symbols(&self, nr: u64) -> Vec<char> {
        let symbols = self.conv.to_symbols(nr);

        let padding = self.options.min_len.saturating_sub(symbols.len());
        let mut out = Vec::with_capacity(padding + symbols.len());
        out.extend(std::iter::repeat_n(self.conv.first_symbol(), padding));
        out.extend(symbols);

        if self.options.group_size == 0 {
            return out;
        }

        let mut grouped = Vec::with_capacity(out.len() + out.len() / self.options.group_size);
        for group in out.chunks(self.options.group_size) {
            if !grouped.is_empty() {
                grouped.push(' ');
            }
            grouped.extend_from_slice(group);
        }

        grouped
    }

    pub fn to_id(&self, nr: u64) -> String {
        self.to_symbols(nr).into_iter().collect()
    }

    pub fn to_nr(&self, id: &str) -> Result<u64> {
        let mut id = id.to_string();
        if self.options.ignore_case {
            id = id.to_uppercase();
        }
        if self.options.group_size > 0 {
            id = id.split_whitespace().collect();
        }

        self.conv.to_nr(&id)
    }
}

#[cfg(test)]
mod test {
    use super::{IdConverter, Options};
    use crate::error::ConvError;

    #[test]
    fn default_round_trips() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options::default())?;

        for nr in [0, 1, 2, 3, 4, 5, 42, 1234567890, 987654321, u64::MAX] {
            let id = converter.to_id(nr);
            pretty_assertions::assert_eq!(nr, converter.to_nr(&id)?, "id: {id}");
        }

        Ok(())
    }

    #[test]
    fn default_layout() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options::default())?;

        // 12 is "C", followed by checksums 12 ("C") and 24 ("R"), padded to 14 symbols
        pretty_assertions::assert_eq!("0000 0000 000C CR", converter.to_id(12));
        pretty_assertions::assert_eq!(12, converter.to_nr("0000 0000 000c cr")?);

        Ok(())
    }

    #[test]
    fn hex_with_groups() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options {
            alphabet: "0123456789abcdef".into(),
            min_len: 8,
            ignore_case: true,
            group_size: 4,
            checksum_len: 0,
        })?;

        pretty_assertions::assert_eq!("DEAD BEEF", converter.to_id(3735928559));
        pretty_assertions::assert_eq!(3735928559, converter.to_nr("dead beef")?);
        pretty_assertions::assert_eq!(3735928559, converter.to_nr("  DEADBEEF ")?);
        pretty_assertions::assert_eq!("0000 00FF", converter.to_id(255));

        Ok(())
    }

    #[test]
    fn no_padding_no_groups() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options {
            alphabet: "0123456789".into(),
            min_len: 0,
            ignore_case: false,
            group_size: 0,
            checksum_len: 0,
        })?;

        pretty_assertions::assert_eq!("123456789", converter.to_id(123456789));
        assert!(matches!(
            converter.to_nr("1234 5678"),
            Err(ConvError::UnknownSymbol { symbol: ' ', .. })
        ));

        Ok(())
    }

    #[test]
    fn case_sensitive_alphabet() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options {
            alphabet: "aA".into(),
            min_len: 0,
            ignore_case: false,
            group_size: 0,
            checksum_len: 0,
        })?;
        pretty_assertions::assert_eq!("AaA", converter.to_id(5));

        let folded = IdConverter::new(Options {
            alphabet: "aA".into(),
            ignore_case: true,
            ..Options::default()
        });
        pretty_assertions::assert_eq!(
            ConvError::DuplicateSymbol {
                symbol: 'A',
                alphabet: "AA".into()
            },
            folded.unwrap_err()
        );

        Ok(())
    }

    #[test]
    fn user_input_errors() -> anyhow::Result<()> {
        let converter = IdConverter::new(Options {
            alphabet: "0123456789ABCDEF".into(),
            ignore_case: true,
            checksum_len: 2,
            ..Options::default()
        })?;

        for id in ["012 . 345", "ZAB5A"] {
            let err = converter.to_nr(id).unwrap_err();
            assert!(err.is_input_error(), "{err}");
        }

        let id = converter.to_id(3735928559);
        let tampered = id.replace('D', "E");
        assert_ne!(id, tampered);
        assert!(converter.to_nr(&tampered).unwrap_err().is_input_error());

        Ok(())
    }
}
