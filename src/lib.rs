//! Base62 codec backed by arbitrary-precision base conversion.
//!
//! A byte buffer is read as a big-endian base-256 integer and rewritten in
//! base 62 over a 62-symbol alphanumeric alphabet (and back). Leading zero
//! bytes carry no magnitude, so they are preserved explicitly as a prefix of
//! digit-0 symbols; `decode(encode(x)) == x` holds for every byte sequence.
//!
//! Use [`Converter`] with one of the built-in [`Charset`] presets or a custom
//! 62-character alphabet, or the module-level [`encode`] / [`decode`]
//! functions for the default alphabet.

pub mod alphabet;
pub mod converter;

pub use alphabet::{Alphabet, CharsetError};
pub use converter::{Charset, Converter, DecodeError};

const CONVERTER: Converter = Converter::with_charset(Charset::Default);

/// Encodes bytes (or a string's UTF-8 bytes) with the default alphabet.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    CONVERTER.encode(input)
}

/// Decodes a base62 string with the default alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    CONVERTER.decode(input)
}

/// Decodes a base62 string with the default alphabet into a UTF-8 string.
pub fn decode_string(input: &str) -> Result<String, DecodeError> {
    CONVERTER.decode_string(input)
}
