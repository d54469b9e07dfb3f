//! Cardinal number to words conversion
//!
//! Numbers are decomposed into tiers: the hundreds tier renders `0..=999`
//! directly, and each scale tier (billions, millions, thousands) splits off a
//! multiplier, names the scale, then hands the remainder to the next tier.
//! The tier chain is plain data in [`TIERS`]; adding a larger scale means
//! adding a descriptor and the table words, not another function.

use crate::error::{Error, Result};
use crate::tables::{Gender, Language, Lexicon, Scale};
use log::{debug, warn};

/// Largest number the tier chain can spell.
pub const MAX_NUMBER: u64 = 999_999_999_999;

/// One magnitude level above the hundreds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub divisor: u64,
    pub scale: Scale,
    /// Agreement used for the multiplier in front of the scale noun. Greek
    /// "χιλιάδες" is feminine ("τρεις χιλιάδες") while "εκατομμύρια" is
    /// neuter ("τρία εκατομμύρια"), independent of what is being counted.
    pub multiplier_gender: Gender,
}

/// Scale tiers, largest first.
pub const TIERS: [Tier; 3] = [
    Tier {
        divisor: 1_000_000_000,
        scale: Scale::Billion,
        multiplier_gender: Gender::Neuter,
    },
    Tier {
        divisor: 1_000_000,
        scale: Scale::Million,
        multiplier_gender: Gender::Neuter,
    },
    Tier {
        divisor: 1_000,
        scale: Scale::Thousand,
        multiplier_gender: Gender::Feminine,
    },
];

/// Spell out `number` in Greek (default) or English, neuter agreement.
///
/// # Example
/// ```rust
/// use numerals::words::number_to_words;
///
/// assert_eq!(number_to_words(2000, false).unwrap(), "δύο χιλιάδες");
/// assert_eq!(number_to_words(21, true).unwrap(), "twenty-one");
/// ```
pub fn number_to_words(number: u64, english: bool) -> Result<String> {
    let language = if english {
        Language::English
    } else {
        Language::Greek
    };
    spell(&language, number, Gender::Neuter)
}

/// Spell out `number` with the given lexicon.
///
/// `gender` is the agreement of the counted subject; it applies to the
/// hundreds of every remainder, while multipliers follow their tier.
/// Zero yields an empty string.
pub fn spell<L: Lexicon + ?Sized>(lexicon: &L, number: u64, gender: Gender) -> Result<String> {
    if number > MAX_NUMBER {
        warn!("refusing to spell {}: above {}", number, MAX_NUMBER);
        return Err(Error::OutOfRange {
            number,
            max: MAX_NUMBER,
        });
    }

    let mut words = Vec::new();
    push_tiers(lexicon, number, &TIERS, gender, &mut words);
    Ok(words.join(" "))
}

/// Spell a number below one thousand.
pub fn spell_hundreds<L: Lexicon + ?Sized>(
    lexicon: &L,
    number: u64,
    gender: Gender,
) -> Result<String> {
    if number > 999 {
        return Err(Error::OutOfRange { number, max: 999 });
    }

    let mut words = Vec::new();
    push_hundreds(lexicon, number, gender, &mut words);
    Ok(words.join(" "))
}

fn push_tiers<L: Lexicon + ?Sized>(
    lexicon: &L,
    number: u64,
    tiers: &[Tier],
    gender: Gender,
    words: &mut Vec<String>,
) {
    let Some((tier, lower)) = tiers.split_first() else {
        push_hundreds(lexicon, number, gender, words);
        return;
    };

    let count = number / tier.divisor;
    let remainder = number % tier.divisor;
    let multiplier_table = lexicon.table(tier.multiplier_gender);
    let scale = multiplier_table.scale(tier.scale);

    match count {
        0 => push_tiers(lexicon, number, lower, gender, words),
        1 => {
            debug!("{:?} tier: single", tier.scale);
            if !scale.singular_implies_one {
                words.push(multiplier_table.units[0].to_string());
            }
            words.push(scale.singular.to_string());
            push_tiers(lexicon, remainder, lower, gender, words);
        }
        _ => {
            debug!("{:?} tier: multiplier {}", tier.scale, count);
            push_hundreds(lexicon, count, tier.multiplier_gender, words);
            words.push(scale.plural.to_string());
            push_tiers(lexicon, remainder, lower, gender, words);
        }
    }
}

// Caller guarantees number < 1000.
fn push_hundreds<L: Lexicon + ?Sized>(
    lexicon: &L,
    number: u64,
    gender: Gender,
    words: &mut Vec<String>,
) {
    let table = lexicon.table(gender);
    let hundreds = (number / 100) as usize;
    let tens = (number % 100 / 10) as usize;
    let units = (number % 10) as usize;

    if hundreds > 0 {
        words.push(table.hundreds[hundreds - 1].to_string());
    }

    if tens > 1 {
        let tens_word = table.tens[tens - 1];
        if units == 0 {
            words.push(tens_word.to_string());
        } else if lexicon.hyphenates_tens() {
            words.push(format!("{}-{}", tens_word, table.units[units - 1]));
        } else {
            words.push(tens_word.to_string());
            words.push(table.units[units - 1].to_string());
        }
    } else if tens == 1 {
        // Teens are atomic words and always take the neuter form.
        let neuter = lexicon.table(Gender::Neuter);
        words.push(neuter.units[10 + units - 1].to_string());
    } else if units > 0 {
        words.push(table.units[units - 1].to_string());
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_is_normalised(n in 0..=MAX_NUMBER, english in any::<bool>()) {
            let words = number_to_words(n, english).unwrap();
            prop_assert!(!words.contains("  "));
            prop_assert_eq!(words.trim(), words.as_str());
            prop_assert_eq!(words.is_empty(), n == 0);
        }

        #[test]
        fn english_is_plain_ascii(n in 0..=MAX_NUMBER) {
            let words = number_to_words(n, true).unwrap();
            prop_assert!(words.chars().all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-'));
        }

        #[test]
        fn conversion_is_deterministic(n in 0..=MAX_NUMBER) {
            prop_assert_eq!(number_to_words(n, false).unwrap(), number_to_words(n, false).unwrap());
        }

        #[test]
        fn rejects_anything_above_max(n in (MAX_NUMBER + 1)..=u64::MAX) {
            prop_assert!(number_to_words(n, false).is_err());
        }
    }
}
