//! User-facing message tables for the event sink.
//!
//! The core only reports [`crate::game::LevelEvent`]s; presentation
//! dresses them up with a randomly chosen line from these tables. The win
//! taglines are plain text because the default font ships no emoji glyphs.

use rand::seq::SliceRandom;
use rand::Rng;

/// Toast lines for a wall bonk.
const BONK_LINES: [&str; 5] = [
    "BONK!",
    "Try not touching the wall.",
    "Oops!",
    "A glowing wall... brilliant!",
    "Resetting!",
];

/// Congratulations for a cleared level.
const WIN_LINES: [&str; 7] = [
    "You're built different!",
    "Maze status: DESTROYED!",
    "Easy peasy lemon squeezy!",
    "Who needs GPS anyway?",
    "Einstein would be proud.",
    "Absolutely ridiculous gaming skills.",
    "Speedrun strats confirmed!",
];

/// Short taglines paired with a win line on the victory screen.
const WIN_TAGS: [&str; 6] = [
    "LEGENDARY",
    "UNSTOPPABLE",
    "BIG BRAIN",
    "FLAWLESS",
    "TOO SMOOTH",
    "CERTIFIED",
];

/// Picks a random bonk toast line.
pub fn bonk_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BONK_LINES.choose(rng).copied().unwrap_or(BONK_LINES[0])
}

/// Picks a random congratulation for the win screen.
pub fn win_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WIN_LINES.choose(rng).copied().unwrap_or(WIN_LINES[0])
}

/// Picks a random win-screen tagline.
pub fn win_tag<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WIN_TAGS.choose(rng).copied().unwrap_or(WIN_TAGS[0])
}
