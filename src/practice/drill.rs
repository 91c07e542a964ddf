// src/practice/drill.rs  -  Endless practice loops feeding the player
use super::content;
use crate::control::ControlSignal;
use crate::engine::Player;
use crate::morse::code::ALPHABET;
use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    /// Random letters from one curriculum week (1-6)
    Week(u8),
    /// Random letters from the whole table
    AllCharacters,
    Words,
    Sentences,
    CallSigns,
}

/// Run `drill` until the player reports `Abort`.
///
/// Letter drills insert a word gap every `group_size` letters (0 = never) so the
/// stream has word rhythm; list drills put one word gap between items.
pub fn run_drill<W: Write, R: Rng>(
    player: &mut Player<'_, W>,
    drill: Drill,
    group_size: usize,
    rng: &mut R,
) -> Result<()> {
    // re-arm: an interrupt from an earlier drill must not stop this one
    player.cancel_token().reset();
    log::debug!("[drill] start {drill:?} group_size={group_size}");

    let pool: Vec<char> = match drill {
        Drill::Week(n) => match content::week_letters(n) {
            Some(letters) => letters.chars().filter(|c| !c.is_whitespace()).collect(),
            None => bail!("No curriculum week {n}"),
        },
        Drill::AllCharacters => ALPHABET.chars().collect(),
        _ => Vec::new(),
    };

    let mut sent = 0usize;
    loop {
        let signal = match drill {
            Drill::Week(_) | Drill::AllCharacters => {
                let Some(&ch) = pool.choose(rng) else { bail!("Empty letter set for {drill:?}") };
                let signal = player.play_character(ch)?;
                sent += 1;
                if !signal.is_abort() && group_size > 0 && sent % group_size == 0 {
                    player.play_space()?
                } else {
                    signal
                }
            }
            Drill::Words     => play_item(player, content::random_word(rng))?,
            Drill::Sentences => play_item(player, content::random_sentence(rng))?,
            Drill::CallSigns => play_item(player, &content::random_call_sign(rng))?,
        };
        if signal.is_abort() {
            log::debug!("[drill] stopped after {sent} letters");
            return Ok(());
        }
    }
}

fn play_item<W: Write>(player: &mut Player<'_, W>, item: &str) -> Result<ControlSignal> {
    if player.play_text(item)?.is_abort() {
        return Ok(ControlSignal::Abort);
    }
    player.play_space()
}
