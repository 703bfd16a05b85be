use crate::error::Result;
use std::io::{BufRead, Write};

/// Synchronous yes/no decision source for the conflict guard. Injected so
/// tests can script the answer instead of reading a terminal.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt: writes `prompt` to stdout and blocks on one line of
/// stdin. There is no timeout. EOF reads as an empty answer, i.e. refusal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Only the literal `y` / `yes` (case-insensitive) authorize destruction.
/// Anything else, empty input included, is refusal.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
