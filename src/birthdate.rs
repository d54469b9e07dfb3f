//! Birth dates written out in full
//!
//! Registry documents carry the birth date twice: as digits and in words
//! ("ολογράφως"). The day agrees with the feminine "ημέρα", the month is
//! given in the genitive and the year is spelled with neuter agreement.

use crate::error::{Error, Result};
use crate::tables::{Gender, Language};
use crate::words::{spell, spell_hundreds};
use log::debug;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Greek month names in the genitive, January first.
pub const MONTHS: [&str; 12] = [
    "Ιανουαρίου",
    "Φεβρουαρίου",
    "Μαρτίου",
    "Απριλίου",
    "Μαΐου",
    "Ιουνίου",
    "Ιουλίου",
    "Αυγούστου",
    "Σεπτεμβρίου",
    "Οκτωβρίου",
    "Νοεμβρίου",
    "Δεκεμβρίου",
];

/// The first of the month reads as an ordinal.
const FIRST_DAY: &str = "Πρώτη";

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{1,4})$").expect("date pattern is valid")
});

static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4})-(\d{1,2})-(\d{1,2})$").expect("ISO date pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self> {
        if year == 0 {
            return Err(Error::InvalidDate(format!("year {} is not valid", year)));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!("month {} is not valid", month)));
        }
        let last = days_in_month(month, year);
        if !(1..=last).contains(&day) {
            return Err(Error::InvalidDate(format!(
                "day {} is not valid for {}",
                day,
                MONTHS[month as usize - 1]
            )));
        }
        Ok(Self { day, month, year })
    }

    /// Parse `YYYY-MM-DD` or `D/M/YYYY`. For the slash form anything after
    /// the first `-` is ignored, so payload values such as
    /// `"23/03/1990 - 14:30"` are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let field = |value: &str| -> Result<u32> {
            value
                .parse()
                .map_err(|_| Error::InvalidDate(format!("bad number in {:?}", text)))
        };

        if let Some(caps) = ISO_DATE_RE.captures(text.trim()) {
            return Self::new(field(&caps[3])?, field(&caps[2])?, field(&caps[1])?);
        }

        let date = text.split('-').next().unwrap_or_default().trim();
        let caps = DATE_RE.captures(date).ok_or_else(|| {
            Error::InvalidDate(format!("expected DD/MM/YYYY or YYYY-MM-DD, got {:?}", text))
        })?;
        Self::new(field(&caps[1])?, field(&caps[2])?, field(&caps[3])?)
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month as usize - 1]
    }

    /// The date in words, e.g. "Είκοσι τρεις Μαρτίου χίλια εννιακόσια ενενήντα".
    pub fn to_words(&self) -> Result<String> {
        let day = if self.day == 1 {
            FIRST_DAY.to_string()
        } else {
            capitalize(&spell_hundreds(&Language::Greek, self.day as u64, Gender::Feminine)?)
        };
        let year = spell(&Language::Greek, self.year as u64, Gender::Neuter)?;
        debug!("spelled {} as {:?} / {:?}", self, day, year);
        Ok(format!("{} {} {}", day, self.month_name(), year))
    }
}

impl FromStr for BirthDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(date: &str) -> String {
        BirthDate::parse(date).unwrap().to_words().unwrap()
    }

    #[test]
    fn test_parse() {
        let date = BirthDate::parse("23/03/1990").unwrap();
        assert_eq!(date, BirthDate { day: 23, month: 3, year: 1990 });
        assert_eq!(BirthDate::parse("5/7/2001").unwrap().month, 7);
        assert_eq!(BirthDate::parse(" 23/03/1990 - 14:30 ").unwrap().day, 23);
        assert_eq!("01/01/2000".parse::<BirthDate>().unwrap().year, 2000);
    }

    #[test]
    fn test_parse_iso() {
        let date = BirthDate::parse("1990-03-23").unwrap();
        assert_eq!(date, BirthDate { day: 23, month: 3, year: 1990 });
        assert_eq!(BirthDate::parse(" 2001-7-5 ").unwrap(), BirthDate { day: 5, month: 7, year: 2001 });
        assert_eq!(words("1990-03-23"), words("23/03/1990"));
        assert!(BirthDate::parse("1990-13-01").is_err());
        assert!(BirthDate::parse("1990-03-23T10:00").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(BirthDate::parse("23.03.1990").is_err());
        assert!(BirthDate::parse("1990/03/23").is_err());
        assert!(BirthDate::parse("").is_err());
        assert!(BirthDate::parse("23/13/1990").is_err());
        assert!(BirthDate::parse("00/03/1990").is_err());
        assert!(BirthDate::parse("31/04/1990").is_err());
        assert!(BirthDate::parse("29/02/1900").is_err());
        assert!(BirthDate::parse("29/02/2000").is_ok());
    }

    #[test]
    fn test_first_of_month_is_ordinal() {
        assert_eq!(words("01/01/2000"), "Πρώτη Ιανουαρίου δύο χιλιάδες");
    }

    #[test]
    fn test_day_is_feminine() {
        assert_eq!(
            words("23/03/1990"),
            "Είκοσι τρεις Μαρτίου χίλια εννιακόσια ενενήντα"
        );
        assert_eq!(words("03/05/1985"), "Τρεις Μαΐου χίλια εννιακόσια ογδόντα πέντε");
        assert_eq!(words("31/12/2024"), "Τριάντα μία Δεκεμβρίου δύο χιλιάδες είκοσι τέσσερα");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("έξι"), "Έξι");
        assert_eq!(capitalize("δέκα"), "Δέκα");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(BirthDate::new(5, 7, 2001).unwrap().to_string(), "05/07/2001");
    }
}
