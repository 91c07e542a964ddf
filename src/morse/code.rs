// src/morse/code.rs  -  ITU Morse table: character → dot/dash pattern
use std::fmt::{self, Write};

/// Every character with a pattern, in curriculum-independent order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,?/-()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot  => '.',
            Symbol::Dash => '-',
        }
    }
}

/// Non-empty pattern of one character, stored in its printable `.-` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCode(&'static str);

impl CharacterCode {
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.bytes().map(|b| if b == b'-' { Symbol::Dash } else { Symbol::Dot })
    }
}

impl fmt::Display for CharacterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            f.write_char(symbol.as_char())?;
        }
        Ok(())
    }
}

/// Case-insensitive lookup; `None` for anything outside [`ALPHABET`].
pub fn lookup(c: char) -> Option<CharacterCode> {
    let code = match c.to_ascii_uppercase() {
        'A' => ".-",    'B' => "-...",  'C' => "-.-.",
        'D' => "-..",   'E' => ".",     'F' => "..-.",
        'G' => "--.",   'H' => "....",  'I' => "..",
        'J' => ".---",  'K' => "-.-",   'L' => ".-..",
        'M' => "--",    'N' => "-.",    'O' => "---",
        'P' => ".--.",  'Q' => "--.-",  'R' => ".-.",
        'S' => "...",   'T' => "-",     'U' => "..-",
        'V' => "...-",  'W' => ".--",   'X' => "-..-",
        'Y' => "-.--",  'Z' => "--..",
        '0' => "-----", '1' => ".----", '2' => "..---",
        '3' => "...--", '4' => "....-", '5' => ".....",
        '6' => "-....", '7' => "--...", '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-", ',' => "--..--", '?' => "..--..",
        '/' => "-..-.",  '-' => "-....-", '(' => "-.--.",
        ')' => "-.--.-",
        _   => return None,
    };
    Some(CharacterCode(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_alphabet_char_has_a_pattern() {
        for c in ALPHABET.chars() {
            let code = lookup(c).unwrap_or_else(|| panic!("no code for {c:?}"));
            let printed = code.to_string();
            assert!(!printed.is_empty());
            assert!(printed.chars().all(|s| s == '.' || s == '-'));
            assert_eq!(code.symbols().count(), printed.len());
        }
    }

    #[test]
    fn patterns_are_unique() {
        let codes: HashSet<String> = ALPHABET.chars()
            .filter_map(lookup)
            .map(|c| c.to_string())
            .collect();
        assert_eq!(codes.len(), ALPHABET.chars().count());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup('a'), lookup('A'));
        let a: Vec<Symbol> = lookup('a').unwrap().symbols().collect();
        assert_eq!(a, vec![Symbol::Dot, Symbol::Dash]);
    }

    #[test]
    fn unsupported_characters() {
        for c in ['@', ' ', '!', 'é', '\n'] {
            assert!(lookup(c).is_none(), "{c:?} should not be supported");
        }
    }

    #[test]
    fn symbol_chars_render_back_to_pattern() {
        let q = lookup('Q').unwrap();
        let s: String = q.symbols().map(Symbol::as_char).collect();
        assert_eq!(s, "--.-");
        assert_eq!(q.to_string(), "--.-");
    }
}
