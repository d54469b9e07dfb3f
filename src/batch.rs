use crate::error::Result;
use crate::tables::{Gender, Language};
use crate::words::spell;
use rayon::prelude::*;

/// Spell many numbers concurrently using Rayon
///
/// Results keep the order of `numbers`. The first number that cannot be
/// spelled aborts the batch with its error.
///
/// # Example
/// ```rust
/// use numerals::batch;
/// use numerals::tables::{Gender, Language};
///
/// let words = batch::spell_all(&[1, 2, 3], Language::English, Gender::Neuter).unwrap();
/// assert_eq!(words, ["one", "two", "three"]);
/// ```
pub fn spell_all(numbers: &[u64], language: Language, gender: Gender) -> Result<Vec<String>> {
    numbers
        .par_iter()
        .map(|&number| spell(&language, number, gender))
        .collect()
}
