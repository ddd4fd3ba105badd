//! Fixed-width binary encoding of non-negative integers.
//!
//! Bit-strings are most-significant bit first and always carry their width
//! explicitly; the width is the qubit count of the register the value is
//! destined for, with qubit `n-1` holding the leftmost bit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodingError;

/// A fixed-width bit sequence, most-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Width in bits.
    pub fn width(&self) -> u32 {
        self.bits.len() as u32
    }

    /// The bits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Decode back to the integer value this bit-string encodes.
    pub fn value(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// The bits with trailing zeros removed.
    ///
    /// Trailing zeros are don't-care lower bits for the comparator scan;
    /// dropping them saves gates without changing the marked set.
    pub fn active_prefix(&self) -> &[bool] {
        let end = self
            .bits
            .iter()
            .rposition(|&b| b)
            .map_or(0, |last_one| last_one + 1);
        &self.bits[..end]
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EncodingError::Empty);
        }
        if s.len() > 64 {
            return Err(EncodingError::TooWide(s.len()));
        }
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(EncodingError::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

/// Minimal number of bits needed to represent `number`.
///
/// Zero takes one bit, matching its one-digit binary form "0".
pub fn min_width(number: u64) -> u32 {
    if number == 0 {
        1
    } else {
        64 - number.leading_zeros()
    }
}

/// Largest value representable in `width` bits.
pub fn max_value(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Encode `number` as a bit-string.
///
/// With no width the minimal-length representation is produced. With a
/// width, the encoding is left-padded with zeros; a width too small for the
/// number is an [`EncodingError::DoesNotFit`], never a truncation.
pub fn encode(number: u64, width: Option<u32>) -> Result<BitString, EncodingError> {
    let needed = min_width(number);
    let width = match width {
        Some(w) if w < needed => return Err(EncodingError::DoesNotFit { number, width: w }),
        Some(w) => w,
        None => needed,
    };
    let bits = (0..width)
        .rev()
        .map(|bit| number >> bit & 1 == 1)
        .collect();
    Ok(BitString { bits })
}

/// A numeric input accepted at the oracle API boundary.
///
/// Callers may hand over either a plain integer or an already-encoded
/// bit-string; both resolve once into a canonical fixed-width [`BitString`]
/// before any circuit construction starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    /// An integer value.
    Integer(u64),
    /// An explicit binary representation.
    Bits(BitString),
}

impl Number {
    /// The integer value regardless of representation.
    pub fn value(&self) -> u64 {
        match self {
            Number::Integer(v) => *v,
            Number::Bits(b) => b.value(),
        }
    }

    /// Resolve into a canonical bit-string of exactly `width` bits.
    pub fn resolve(&self, width: u32) -> Result<BitString, EncodingError> {
        encode(self.value(), Some(width))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as u64)
    }
}

impl From<BitString> for Number {
    fn from(bits: BitString) -> Self {
        Number::Bits(bits)
    }
}
