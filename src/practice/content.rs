// src/practice/content.rs  -  Curriculum letter sets, word / sentence / call-sign pools
use rand::seq::SliceRandom;
use rand::Rng;

/// Six-week curriculum, most frequent and shortest patterns first.
pub static WEEKS: [&str; 6] = [
    "ETIANM",
    "SURWDK",
    "GOHVFL",
    "PJBXC",
    "YZQ1234567890",
    ".,?/",
];

pub fn week_letters(week: u8) -> Option<&'static str> {
    WEEKS.get(usize::from(week).checked_sub(1)?).copied()
}

pub static WORDS: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "ANY", "CAN",
    "HAD", "HER", "WAS", "ONE", "OUR", "OUT", "DAY", "GET", "HAS", "HIM",
    "HIS", "HOW", "MAN", "NEW", "NOW", "OLD", "SEE", "TWO", "WAY", "WHO",
    "RADIO", "ANTENNA", "SIGNAL", "WEATHER", "NAME", "TEST", "STATION",
    "POWER", "RIG", "KEY", "TONE", "SPEED", "COPY", "GOOD", "NICE", "HELLO",
    "THANKS", "AGAIN", "REPORT", "LOCATION", "CLOUDY", "SUNNY", "RAIN",
    "CQ", "DE", "QTH", "QSL", "RST", "73", "TNX", "FB", "UR", "ES", "HW",
];

pub static SENTENCES: &[&str] = &[
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG.",
    "CQ CQ CQ DE W1AW W1AW K",
    "NAME IS BOB, QTH IS DENVER.",
    "UR RST 599 599 IN NEW YORK.",
    "WX HERE IS SUNNY, TEMP 25 C.",
    "RIG IS A KX3 AT 5 WATTS.",
    "ANT IS A DIPOLE UP 10 METERS.",
    "TNX FOR THE NICE QSO, 73.",
    "HOW DO YOU COPY? OVER.",
    "PSE QRS, SENDING TOO FAST.",
    "MORSE CODE IS FUN TO LEARN.",
    "PRACTICE EVERY DAY FOR BEST RESULTS.",
    "THE SIGNAL IS WEAK BUT READABLE.",
    "QSL VIA THE BUREAU (OR DIRECT).",
    "MY CALL IS K7ABC/P TODAY.",
];

/// Real-world style call signs used as fixed practice items.
pub static CALL_SIGNS: &[&str] = &[
    "DL1ABC", "DL2XYZ", "OE3KAB", "PA3ABC", "G4XYZ", "ON4ABC", "F5NTX",
    "I2ABC", "SM5XY", "SP5ZAP", "UT5UDX", "W1AW", "K5ZD", "VE3XYZ",
    "JA1ABC", "VK2XYZ", "ZL2ABC", "HB9ABC", "OK2XYZ", "LY5T", "ES5TV",
    "OH2BH", "LA5YJ", "OZ5E", "EI5DI", "GM4ZUK", "TF3CW",
];

const PREFIXES: &[&str] = &["K", "W", "N", "AA", "KD", "WB", "VE", "G", "DL", "F", "JA", "VK"];
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn random_word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("CQ")
}

pub fn random_sentence<R: Rng>(rng: &mut R) -> &'static str {
    SENTENCES.choose(rng).copied().unwrap_or("CQ CQ CQ")
}

/// Half of the time a listed call sign, otherwise a synthesised one:
/// prefix + digit + 1-3 suffix letters.
pub fn random_call_sign<R: Rng>(rng: &mut R) -> String {
    if rng.gen_bool(0.5) {
        if let Some(c) = CALL_SIGNS.choose(rng) {
            return (*c).to_string();
        }
    }
    let mut call = PREFIXES.choose(rng).copied().unwrap_or("K").to_string();
    call.push(char::from(b'0' + rng.gen_range(0..10u8)));
    for _ in 0..rng.gen_range(1..=3) {
        if let Some(&b) = LETTERS.choose(rng) {
            call.push(char::from(b));
        }
    }
    call
}
