use crate::alphabet::{self, Alphabet, CharsetError};
use std::str::Utf8Error;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
    InvalidUtf8(Utf8Error),
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodeError::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
            DecodeError::InvalidUtf8(error) => write!(f, "Decoded bytes are not valid UTF-8: {}", error),
        }
    }
}

/// Built-in pre-validated alphabets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Charset {
    /// Digits, then uppercase, then lowercase letters.
    Default,
    /// Digits, then lowercase, then uppercase letters.
    Inverted,
}

/// Converts byte sequences to and from their base62 representation using a
/// fixed alphabet. Construction validates the alphabet once; encode and
/// decode never mutate the converter, so a shared instance is safe to use
/// from any number of threads.
#[derive(Debug)]
pub struct Converter {
    alphabet: Alphabet,
}

impl Converter {
    pub fn new(charset: &str) -> Result<Self, CharsetError> {
        Ok(Self { alphabet: charset.parse()? })
    }

    pub const fn with_charset(charset: Charset) -> Self {
        Self {
            alphabet: match charset {
                Charset::Default => alphabet::DEFAULT,
                Charset::Inverted => alphabet::INVERTED,
            },
        }
    }

    /// Encodes a byte sequence as a base62 string. A `&str` argument
    /// contributes its UTF-8 bytes. Leading zero bytes carry no magnitude
    /// and are emitted as a prefix of digit-0 symbols, one per byte.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&byte| byte == 0).count();

        // Base-62 digits of the magnitude, least significant first.
        let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 11 / 8 + 1);
        for &byte in &input[zeros..] {
            let mut carry = byte as usize;
            for digit in digits.iter_mut() {
                carry += (*digit as usize) << 8;
                *digit = (carry % 62) as u8;
                carry /= 62;
            }
            while carry > 0 {
                digits.push((carry % 62) as u8);
                carry /= 62;
            }
        }

        let mut output = Vec::with_capacity(zeros + digits.len());
        output.resize(zeros, self.alphabet.symbol(0));
        output.extend(digits.iter().rev().map(|&digit| self.alphabet.symbol(digit as usize)));
        // Alphabet symbols are ASCII
        unsafe { String::from_utf8_unchecked(output) }
    }

    /// Decodes a base62 string back into the byte sequence it encodes.
    /// Fails on any character absent from the alphabet.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        // Magnitude bytes, least significant first.
        let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
        let mut zeros = 0;
        let mut in_zero_prefix = true;

        for (index, character) in input.chars().enumerate() {
            let digit = self
                .alphabet
                .digit(character)
                .ok_or(DecodeError::InvalidCharacter { character, index })?;

            // A leading run of the digit-0 symbol encodes zero bytes, not
            // magnitude; folding it into the multiply-add below would lose it.
            if in_zero_prefix {
                if digit == 0 {
                    zeros += 1;
                    continue;
                }
                in_zero_prefix = false;
            }

            let mut carry = digit as usize;
            for byte in bytes.iter_mut() {
                carry += (*byte as usize) * 62;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }

        bytes.resize(bytes.len() + zeros, 0);
        bytes.reverse();
        Ok(bytes)
    }

    /// Decodes a base62 string and interprets the resulting bytes as UTF-8.
    pub fn decode_string(&self, input: &str) -> Result<String, DecodeError> {
        let bytes = self.decode(input)?;
        String::from_utf8(bytes).map_err(|error| DecodeError::InvalidUtf8(error.utf8_error()))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_charset(Charset::Default)
    }
}
