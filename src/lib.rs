//! # Numerals Library
//!
//! Spell out cardinal numbers in Greek or English, with Greek grammatical
//! agreement. This library provides functionality for:
//!
//! - **Number Words**: Convert `0..=999_999_999_999` to words through the
//!   hundreds, thousands, millions and billions tiers
//! - **Birth Dates**: Write a `DD/MM/YYYY` birth date out in full, as registry
//!   documents require
//! - **Payload Sealing**: Stamp a JSON document payload with a random identifier
//!   and a SHA-256 digest, and verify it later
//! - **Batch Conversion**: Spell many numbers in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use numerals::words::number_to_words;
//!
//! assert_eq!(number_to_words(1_000_000, false).unwrap(), "ένα εκατομμύριο");
//! assert_eq!(number_to_words(1990, true).unwrap(), "one thousand nine hundred ninety");
//! ```
//!
//! ## Modules
//!
//! - [`tables`]: Word tables per language and gender, and the [`tables::Lexicon`] trait
//! - [`words`]: The tier chain and the `number_to_words` entry point
//! - [`birthdate`]: Birth dates in words
//! - [`payload`]: JSON payload loading and field access
//! - [`digest`]: Payload sealing and verification
//! - [`batch`]: Parallel conversion
//!
//! ## Examples
//!
//! ### Birth date in words
//!
//! ```rust
//! use numerals::birthdate::BirthDate;
//!
//! let date = BirthDate::parse("23/03/1990").unwrap();
//! assert_eq!(
//!     date.to_words().unwrap(),
//!     "Είκοσι τρεις Μαρτίου χίλια εννιακόσια ενενήντα",
//! );
//! ```
//!
//! ### Sealing a payload
//!
//! ```rust,no_run
//! use numerals::{digest, payload};
//!
//! let mut doc = payload::load("birth_data.json").expect("Failed to load");
//! let seal = digest::seal(&mut doc).expect("Failed to seal");
//! payload::save("birth_data.json", &doc).expect("Failed to save");
//! println!("{}", seal.digest);
//! ```

pub mod batch;
pub mod birthdate;
pub mod digest;
pub mod error;
pub mod payload;
pub mod tables;
pub mod words;

pub use error::{Error, Result};
pub use tables::{Gender, Language};
pub use words::number_to_words;

#[cfg(test)]
mod tests {
    use crate::birthdate::BirthDate;
    use crate::{digest, payload};

    #[test]
    fn test_birthdate_from_sealed_payload() {
        let mut doc = payload::from_str(r#"{"name": "Μαρία", "birthdate": "01/02/2003 - 08:15"}"#).unwrap();
        let date = BirthDate::parse(payload::text_field(&doc, "birthdate").unwrap()).unwrap();
        assert_eq!(date.to_words().unwrap(), "Πρώτη Φεβρουαρίου δύο χιλιάδες τρία");

        digest::seal(&mut doc).unwrap();
        assert!(digest::verify(&doc).unwrap());
    }
}
