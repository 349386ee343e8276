//! Foreign-native string representation.
//!
//! The foreign side stores strings as UTF-16 code units. A `JavaString` keeps
//! that representation as-is so it can be told apart from a native [`Text`],
//! and only becomes a `Text` through an explicit conversion.

use crate::text::Text;
use std::fmt;
use std::string::FromUtf16Error;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JavaString {
    units: Arc<[u16]>,
}

impl JavaString {
    pub fn from_units(units: &[u16]) -> Self {
        Self {
            units: Arc::from(units),
        }
    }

    pub fn encode(s: &str) -> Self {
        let units: Vec<u16> = s.encode_utf16().collect();
        Self {
            units: Arc::from(units),
        }
    }

    pub fn from_text(t: &Text) -> Self {
        Self::encode(t.as_str())
    }

    /// Decode into a native string, failing on unpaired surrogates.
    pub fn to_text(&self) -> Result<Text, FromUtf16Error> {
        String::from_utf16(&self.units).map(Text::from_string)
    }

    /// Decode into a native string, replacing unpaired surrogates with U+FFFD.
    pub fn to_text_lossy(&self) -> Text {
        Text::from_string(String::from_utf16_lossy(&self.units))
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Debug for JavaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JavaString({:?})", self.to_text_lossy().as_str())
    }
}

impl fmt::Display for JavaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl From<&str> for JavaString {
    fn from(value: &str) -> Self {
        JavaString::encode(value)
    }
}
