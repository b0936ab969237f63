//! Text encodings for file-backed sources

use std::string::{FromUtf8Error, FromUtf16Error};

use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encoding used to turn a file's bytes into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-8, replacing invalid sequences with U+FFFD instead of failing
    Utf8Lossy,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1: every byte is the code point of the same value
    Latin1,
}

/// Bytes that are not valid in the configured encoding
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("invalid UTF-16: {0}")]
    Utf16(#[from] FromUtf16Error),

    #[error("UTF-16 input has an odd length of {0} bytes")]
    OddLength(usize),
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Lossy => "utf-8 (lossy)",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Decode `bytes`, dropping a leading byte order mark
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, DecodeError> {
        match self {
            Self::Utf8 => {
                let mut text = String::from_utf8(bytes)?;
                if text.starts_with('\u{FEFF}') {
                    text.replace_range(..'\u{FEFF}'.len_utf8(), "");
                }
                Ok(text)
            }
            Self::Utf8Lossy => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
            Self::Utf16Le => decode_utf16(&bytes, u16::from_le_bytes),
            Self::Utf16Be => decode_utf16(&bytes, u16::from_be_bytes),
            Self::Latin1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength(bytes.len()));
    }
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    if units.first() == Some(&0xFEFF) {
        units.remove(0);
    }
    Ok(String::from_utf16(&units)?)
}
