use thiserror::Error;

/// Errors raised while building a converter or turning an ID back into a number.
///
/// Construction errors (`InvalidAlphabet`, `DuplicateSymbol`) mean the converter is misconfigured
/// and will never work. The remaining variants are caused by the ID that was handed in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvError {
    #[error("alphabet {alphabet:?} is too short: need at least {min} symbols, got {len}")]
    InvalidAlphabet {
        alphabet: String,
        len: usize,
        min: usize,
    },

    #[error("symbol {symbol:?} repeats in alphabet {alphabet:?}")]
    DuplicateSymbol { symbol: char, alphabet: String },

    #[error("id {input:?} is too short: need more than {checksum_len} symbols")]
    InputTooShort { input: String, checksum_len: usize },

    #[error("checksum mismatch: got {got:?}, want {want:?}")]
    ChecksumMismatch { got: char, want: char },

    #[error("symbol {symbol:?} not in alphabet {alphabet:?}")]
    UnknownSymbol { symbol: char, alphabet: String },

    #[error("id {input:?} does not fit in 64 bits")]
    Overflow { input: String },
}

impl ConvError {
    /// True when retrying with corrected input can succeed, false when the converter itself is
    /// broken.
    pub fn is_input_error(&self) -> bool {
        match self {
            ConvError::InputTooShort { .. }
            | ConvError::ChecksumMismatch { .. }
            | ConvError::UnknownSymbol { .. }
            | ConvError::Overflow { .. } => true,
            ConvError::InvalidAlphabet { .. } | ConvError::DuplicateSymbol { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvError>;

#[cfg(test)]
mod test {
    use super::ConvError;

    #[test]
    fn classifies_input_and_config_errors() {
        assert!(
            ConvError::ChecksumMismatch {
                got: 'A',
                want: 'B'
            }
            .is_input_error()
        );
        assert!(
            ConvError::UnknownSymbol {
                symbol: 'Z',
                alphabet: "0123".into()
            }
            .is_input_error()
        );
        assert!(
            !ConvError::DuplicateSymbol {
                symbol: 'a',
                alphabet: "aba".into()
            }
            .is_input_error()
        );
        assert!(
            !ConvError::InvalidAlphabet {
                alphabet: "a".into(),
                len: 1,
                min: 2
            }
            .is_input_error()
        );
    }

    #[test]
    fn messages_carry_context() {
        let err = ConvError::UnknownSymbol {
            symbol: 'Z',
            alphabet: "0123456789ABCDEF".into(),
        };

        pretty_assertions::assert_eq!(
            r#"symbol 'Z' not in alphabet "0123456789ABCDEF""#,
            err.to_string()
        );
    }
}
