//! Word tables for spelling out cardinal numbers
//!
//! Every table stores 1-indexed magnitudes in 0-indexed arrays: `units[0]` is
//! the word for one, `tens[1]` the word for twenty, `hundreds[8]` the word for
//! nine hundred. The converter in [`crate::words`] only ever indexes them with
//! digits obtained by integer division, so indices stay in range.

use serde::{Deserialize, Serialize};

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Greek,
    English,
}

/// Grammatical gender used for agreement.
///
/// Masculine cardinals coincide with the neuter forms for every word in the
/// tables, so only two variants exist. English ignores gender entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Neuter,
    Feminine,
}

/// Magnitudes above the hundreds tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Thousand,
    Million,
    Billion,
}

/// The noun naming one scale, in singular and plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWords {
    pub singular: &'static str,
    pub plural: &'static str,
    /// The singular already means "one of this scale" ("χίλια", "one thousand")
    /// and must not be preceded by the unit word for one.
    pub singular_implies_one: bool,
}

/// All words needed to spell numbers up to the billions in one language and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWordTable {
    /// One to nineteen
    pub units: [&'static str; 19],
    /// Ten to ninety
    pub tens: [&'static str; 9],
    /// One hundred to nine hundred
    pub hundreds: [&'static str; 9],
    pub thousand: ScaleWords,
    pub million: ScaleWords,
    pub billion: ScaleWords,
}

impl NumberWordTable {
    pub fn scale(&self, scale: Scale) -> &ScaleWords {
        match scale {
            Scale::Thousand => &self.thousand,
            Scale::Million => &self.million,
            Scale::Billion => &self.billion,
        }
    }
}

/// Source of word tables, selected by gender at call time.
///
/// [`Language`] is the built-in implementation; anything else implementing the
/// trait can be handed to [`crate::words::spell`] without touching the converter.
pub trait Lexicon {
    fn table(&self, gender: Gender) -> &NumberWordTable;

    /// Whether the tens and units of 21..99 form one hyphenated word.
    fn hyphenates_tens(&self) -> bool {
        false
    }
}

impl Lexicon for Language {
    fn table(&self, gender: Gender) -> &NumberWordTable {
        match (self, gender) {
            (Language::Greek, Gender::Neuter) => &GREEK_NEUTER,
            (Language::Greek, Gender::Feminine) => &GREEK_FEMININE,
            (Language::English, _) => &ENGLISH,
        }
    }

    fn hyphenates_tens(&self) -> bool {
        *self == Language::English
    }
}

const GREEK_TENS: [&str; 9] = [
    "δέκα",
    "είκοσι",
    "τριάντα",
    "σαράντα",
    "πενήντα",
    "εξήντα",
    "εβδομήντα",
    "ογδόντα",
    "ενενήντα",
];

const GREEK_THOUSAND: ScaleWords = ScaleWords {
    singular: "χίλια",
    plural: "χιλιάδες",
    singular_implies_one: true,
};

const GREEK_MILLION: ScaleWords = ScaleWords {
    singular: "εκατομμύριο",
    plural: "εκατομμύρια",
    singular_implies_one: false,
};

const GREEK_BILLION: ScaleWords = ScaleWords {
    singular: "δισεκατομμύριο",
    plural: "δισεκατομμύρια",
    singular_implies_one: false,
};

pub static GREEK_NEUTER: NumberWordTable = NumberWordTable {
    units: [
        "ένα",
        "δύο",
        "τρία",
        "τέσσερα",
        "πέντε",
        "έξι",
        "επτά",
        "οκτώ",
        "εννέα",
        "δέκα",
        "έντεκα",
        "δώδεκα",
        "δεκατρία",
        "δεκατέσσερα",
        "δεκαπέντε",
        "δεκαέξι",
        "δεκαεπτά",
        "δεκαοκτώ",
        "δεκαεννέα",
    ],
    tens: GREEK_TENS,
    hundreds: [
        "εκατό",
        "διακόσια",
        "τριακόσια",
        "τετρακόσια",
        "πεντακόσια",
        "εξακόσια",
        "επτακόσια",
        "οκτακόσια",
        "εννιακόσια",
    ],
    thousand: GREEK_THOUSAND,
    million: GREEK_MILLION,
    billion: GREEK_BILLION,
};

pub static GREEK_FEMININE: NumberWordTable = NumberWordTable {
    units: [
        "μία",
        "δύο",
        "τρεις",
        "τέσσερεις",
        "πέντε",
        "έξι",
        "επτά",
        "οκτώ",
        "εννέα",
        "δέκα",
        "έντεκα",
        "δώδεκα",
        "δεκατρείς",
        "δεκατέσσερεις",
        "δεκαπέντε",
        "δεκαέξι",
        "δεκαεπτά",
        "δεκαοκτώ",
        "δεκαεννέα",
    ],
    tens: GREEK_TENS,
    hundreds: [
        "εκατό",
        "διακόσιες",
        "τριακόσιες",
        "τετρακόσιες",
        "πεντακόσιες",
        "εξακόσιες",
        "επτακόσιες",
        "οκτακόσιες",
        "εννιακόσιες",
    ],
    thousand: GREEK_THOUSAND,
    million: GREEK_MILLION,
    billion: GREEK_BILLION,
};

pub static ENGLISH: NumberWordTable = NumberWordTable {
    units: [
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundreds: [
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    thousand: ScaleWords {
        singular: "one thousand",
        plural: "thousand",
        singular_implies_one: true,
    },
    million: ScaleWords {
        singular: "one million",
        plural: "million",
        singular_implies_one: true,
    },
    billion: ScaleWords {
        singular: "one billion",
        plural: "billion",
        singular_implies_one: true,
    },
};
