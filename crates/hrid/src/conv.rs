//! Conversions between `u64` numbers and strings over an arbitrary alphabet.
//!
//! The alphabet defines the radix: for `"01"` numbers are written in binary, for `"0123456789"` in
//! decimal, and so on. The first symbol always stands for zero. Optionally a number of checksum
//! symbols is appended to every generated ID and verified when the ID is read back.

use std::collections::HashMap;

use crate::error::{ConvError, Result};

pub const MIN_ALPHABET_LEN: usize = 2;

/// Converts numbers to symbol sequences and back. Immutable once built, so a single instance can be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct Conv {
    alphabet: Vec<char>,
    index: HashMap<char, usize>,
    checksum_len: usize,
}

impl Conv {
    /// Builds a converter from `alphabet`, where the symbol at position `i` is digit `i`. Fails when
    /// the alphabet has fewer than two symbols or when a symbol repeats.
    pub fn new(alphabet: &str, checksum_len: usize) -> Result<Self> {
        let symbols = alphabet.chars().collect::<Vec<_>>();
        if symbols.len() < MIN_ALPHABET_LEN {
            return Err(ConvError::InvalidAlphabet {
                alphabet: alphabet.to_string(),
                len: symbols.len(),
                min: MIN_ALPHABET_LEN,
            });
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, position).is_some() {
                return Err(ConvError::DuplicateSymbol {
                    symbol,
                    alphabet: alphabet.to_string(),
                });
            }
        }

        Ok(Self {
            alphabet: symbols,
            index,
            checksum_len,
        })
    }

    pub fn radix(&self) -> u64 {
        self.alphabet.len() as u64
    }

    /// The symbol for digit zero, used to left-pad IDs.
    pub fn first_symbol(&self) -> char {
        self.alphabet[0]
    }

    pub fn checksum_len(&self) -> usize {
        self.checksum_len
    }

    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }

    /// Most significant symbol first, followed by the checksum symbols.
    pub fn to_symbols(&self, nr: u64) -> Vec<char> {
        let radix = self.radix();
        let mut num = nr;
        let mut digits = Vec::with_capacity(u64::BITS as usize + self.checksum_len);

        while num > 0 {
            digits.push((num % radix) as usize);
            num /= radix;
        }

        if digits.is_empty() {
            digits.push(0);
        }

        digits.reverse();

        // Every checksum symbol also covers the ones appended before it.
        for _ in 0..self.checksum_len {
            digits.push(self.checksum(&digits));
        }

        digits.into_iter().map(|d| self.alphabet[d]).collect()
    }

    pub fn to_id(&self, nr: u64) -> String {
        self.to_symbols(nr).into_iter().collect()
    }

    /// Parses an ID produced by [`Conv::to_id`]. Leading zero symbols are allowed.
    pub fn to_nr(&self, input: &str) -> Result<u64> {
        let len = input.chars().count();
        if len <= self.checksum_len {
            return Err(ConvError::InputTooShort {
                input: input.to_string(),
                checksum_len: self.checksum_len,
            });
        }

        let digits = input
            .chars()
            .map(|symbol| {
                self.index
                    .get(&symbol)
                    .copied()
                    .ok_or_else(|| ConvError::UnknownSymbol {
                        symbol,
                        alphabet: self.alphabet(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        // Peel checksum symbols off in the reverse order they were appended.
        let value_len = len - self.checksum_len;
        for end in (value_len..len).rev() {
            let want = self.checksum(&digits[..end]);
            let got = digits[end];
            if got != want {
                return Err(ConvError::ChecksumMismatch {
                    got: self.alphabet[got],
                    want: self.alphabet[want],
                });
            }
        }

        let radix = self.radix();
        let mut out = 0u64;
        for (exponent, &digit) in digits[..value_len].iter().rev().enumerate() {
            if digit == 0 {
                continue;
            }

            out = int_pow(radix, exponent)
                .and_then(|p| p.checked_mul(digit as u64))
                .and_then(|term| out.checked_add(term))
                .ok_or_else(|| ConvError::Overflow {
                    input: input.to_string(),
                })?;
        }

        Ok(out)
    }

    fn checksum(&self, digits: &[usize]) -> usize {
        let radix = self.alphabet.len();
        digits.iter().fold(0, |sum, d| (sum + d) % radix)
    }
}

/// `mantissa ^ exponent` by repeated multiplication. `None` when the result leaves the u64 range.
pub(crate) fn int_pow(mantissa: u64, exponent: usize) -> Option<u64> {
    if exponent == 0 {
        return Some(1);
    }

    let mut out = mantissa;
    for _ in 1..exponent {
        out = out.checked_mul(mantissa)?;
    }

    Some(out)
}
