//! Pin addresses and their compact text encoding
//!
//! A pin address travels in a single path segment: one type letter
//! followed by a base-10 number, e.g. `d8`, `a14`, `v10`. The letter is
//! matched in either case; the number is strict ASCII digits with no
//! sign and no leading zeros.

use std::fmt;
use std::str::FromStr;

use crate::{PinionError, PinionResult};

/// Highest addressable pin number. Pins are byte-sized identifiers on
/// the device side.
pub const MAX_PIN_NUMBER: u16 = 255;

/// Pin type selector - the leading letter of the encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinKind {
    Virtual,
    Digital,
    Analog,
}

impl PinKind {
    /// Map a type letter to a kind. Accepts both cases.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'v' => Some(PinKind::Virtual),
            'd' => Some(PinKind::Digital),
            'a' => Some(PinKind::Analog),
            _ => None,
        }
    }

    /// Canonical (lower-case) type letter
    #[inline]
    pub fn letter(self) -> char {
        match self {
            PinKind::Virtual => 'v',
            PinKind::Digital => 'd',
            PinKind::Analog => 'a',
        }
    }
}

/// A parsed pin address: kind + number
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinAddress {
    pub kind: PinKind,
    pub number: u16,
}

impl PinAddress {
    #[inline]
    pub fn new(kind: PinKind, number: u16) -> Self {
        PinAddress { kind, number }
    }

    /// Parse a path segment into a pin address.
    ///
    /// Pure and total: every input maps to `Ok` or
    /// `PinionError::InvalidAddress`, never a panic.
    pub fn parse(segment: &str) -> PinionResult<Self> {
        let invalid = || PinionError::InvalidAddress(segment.to_string());

        let mut chars = segment.chars();
        let kind = chars
            .next()
            .and_then(PinKind::from_letter)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Strict numeric part: "0" is fine, "08" is not.
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(invalid());
        }

        let number: u16 = digits.parse().map_err(|_| invalid())?;
        if number > MAX_PIN_NUMBER {
            return Err(invalid());
        }

        Ok(PinAddress { kind, number })
    }
}

impl FromStr for PinAddress {
    type Err = PinionError;

    fn from_str(s: &str) -> PinionResult<Self> {
        PinAddress::parse(s)
    }
}

impl fmt::Debug for PinAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin({}{})", self.kind.letter(), self.number)
    }
}

impl fmt::Display for PinAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.number)
    }
}
