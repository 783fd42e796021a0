use std::str::FromStr;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CharsetError {
    Empty,
    WrongLength { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for CharsetError {}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CharsetError::Empty => write!(f, "Charset is empty or whitespace"),
            CharsetError::WrongLength { length } => write!(f, "Charset must contain 62 characters, found {}", length),
            CharsetError::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character {:?} at indexes {} and {}", character, first, second)
            }
            CharsetError::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

/// A validated 62-symbol alphabet: digit values 0..=61 map to ASCII
/// alphanumeric symbols, and the reverse table maps symbols back.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; 62],
    digits: [Option<u8>; 128],
}

impl Alphabet {
    /// Builds an alphabet from 62 ASCII bytes. Duplicates are reported before
    /// out-of-class characters, matching the runtime charset validation.
    pub const fn new(symbols: &[u8; 62]) -> Result<Self, CharsetError> {
        let mut seen: [Option<u8>; 256] = [None; 256];
        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            if let Some(first) = seen[symbol as usize] {
                return Err(CharsetError::DuplicateCharacter {
                    character: symbol as char,
                    first: first as usize,
                    second: index,
                });
            }
            seen[symbol as usize] = Some(index as u8);
            index += 1;
        }

        let mut table = [0u8; 62];
        let mut digits: [Option<u8>; 128] = [None; 128];
        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            if !symbol.is_ascii_alphanumeric() {
                return Err(CharsetError::InvalidCharacter {
                    character: symbol as char,
                    index,
                });
            }
            table[index] = symbol;
            digits[symbol as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols: table, digits })
    }

    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    pub fn digit(&self, character: char) -> Option<u8> {
        if !character.is_ascii() {
            return None;
        }
        self.digits[character as usize]
    }
}

impl FromStr for Alphabet {
    type Err = CharsetError;

    /// Validates a caller-supplied charset. Checks run in a fixed order and
    /// short-circuit: emptiness, length, uniqueness, character class. The
    /// uniqueness check covers the whole string before the class check runs,
    /// so the reported error kind is stable for inputs breaking several rules.
    fn from_str(charset: &str) -> Result<Self, CharsetError> {
        if charset.trim().is_empty() {
            return Err(CharsetError::Empty);
        }

        let characters: Vec<char> = charset.chars().collect();
        if characters.len() != 62 {
            return Err(CharsetError::WrongLength { length: characters.len() });
        }

        for (second, &character) in characters.iter().enumerate() {
            if let Some(first) = characters[..second].iter().position(|&c| c == character) {
                return Err(CharsetError::DuplicateCharacter { character, first, second });
            }
        }

        let mut symbols = [0u8; 62];
        let mut digits: [Option<u8>; 128] = [None; 128];
        for (index, &character) in characters.iter().enumerate() {
            if !character.is_ascii_alphanumeric() {
                return Err(CharsetError::InvalidCharacter { character, index });
            }
            symbols[index] = character as u8;
            digits[character as usize] = Some(index as u8);
        }

        Ok(Self { symbols, digits })
    }
}

pub const DEFAULT: Alphabet = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build default alphabet"),
};

pub const INVERTED: Alphabet = match Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build inverted alphabet"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_charset() {
        for charset in ["", " ", "\t", " \t "] {
            assert_eq!(charset.parse::<Alphabet>().unwrap_err(), CharsetError::Empty);
        }
    }

    #[test]
    fn wrong_length() {
        assert_eq!("ABC".parse::<Alphabet>().unwrap_err(), CharsetError::WrongLength { length: 3 });
        assert_eq!(
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz.".parse::<Alphabet>().unwrap_err(),
            CharsetError::WrongLength { length: 63 }
        );
    }

    #[test]
    fn duplicate_character() {
        assert_eq!(
            "00123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstvwxyz".parse::<Alphabet>().unwrap_err(),
            CharsetError::DuplicateCharacter { character: '0', first: 0, second: 1 }
        );
        assert_eq!(
            "0123456789ABCDEFGHIJKLMNOPQRSTUVVWXYZabcdefghijklmnopqrstvwxyz".parse::<Alphabet>().unwrap_err(),
            CharsetError::DuplicateCharacter { character: 'V', first: 31, second: 32 }
        );
        assert_eq!(
            "013456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyzz".parse::<Alphabet>().unwrap_err(),
            CharsetError::DuplicateCharacter { character: 'z', first: 60, second: 61 }
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            "123456789.ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".parse::<Alphabet>().unwrap_err(),
            CharsetError::InvalidCharacter { character: '.', index: 9 }
        );
    }

    #[test]
    fn duplicate_reported_before_invalid_character() {
        // Both a duplicated '0' and a '.' are present; uniqueness wins.
        assert_eq!(
            "00123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrst.wxyz".parse::<Alphabet>().unwrap_err(),
            CharsetError::DuplicateCharacter { character: '0', first: 0, second: 1 }
        );
    }

    #[test]
    fn presets() {
        assert_eq!(DEFAULT.symbol(0), b'0');
        assert_eq!(DEFAULT.symbol(10), b'A');
        assert_eq!(DEFAULT.symbol(61), b'z');
        assert_eq!(DEFAULT.digit('z'), Some(61));
        assert_eq!(INVERTED.symbol(10), b'a');
        assert_eq!(INVERTED.symbol(61), b'Z');
        assert_eq!(INVERTED.digit('z'), Some(35));
    }

    #[test]
    fn digit_rejects_characters_outside_alphabet() {
        assert_eq!(DEFAULT.digit('.'), None);
        assert_eq!(DEFAULT.digit(' '), None);
        assert_eq!(DEFAULT.digit('爱'), None);
    }

    #[test]
    fn custom_alphabet_lookup() {
        let alphabet: Alphabet = "tewV2EFDk51cLaMphrnJSCyj4YNWzdxgOuTqIolQ6bfmK97XiA30UP8sGRBvHZ".parse().unwrap();
        assert_eq!(alphabet.symbol(0), b't');
        assert_eq!(alphabet.digit('t'), Some(0));
        assert_eq!(alphabet.digit('Z'), Some(61));
    }
}
