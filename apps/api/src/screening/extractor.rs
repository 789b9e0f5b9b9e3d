//! Field Extractor — pulls an `ApplicantRecord` out of raw résumé text.
//!
//! Pure and infallible: a pattern miss always degrades to the field default.
//! Each field is checked independently; within a field the first matching
//! rule wins, in the fixed order documented on each helper.

use regex::Regex;
use serde::Serialize;

use crate::screening::locale::{Lexicon, Locale};
use crate::screening::record::{ApplicantRecord, Degree, Experience, Gender, UNKNOWN};

/// Only this many leading characters are inspected for gender markers.
pub const GENDER_WINDOW_CHARS: usize = 200;
/// Length of the excerpt forwarded to the evaluation prompt.
pub const EXCERPT_CHARS: usize = 2000;

/// Output of one extraction pass.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub record: ApplicantRecord,
    /// First `EXCERPT_CHARS` characters of the raw text.
    pub excerpt: String,
}

/// Holds the locale lexicon and the regexes compiled from it.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    lexicon: &'static Lexicon,
    institution_re: Regex,
    test_score_re: Regex,
}

impl FieldExtractor {
    pub fn new(locale: Locale) -> Result<Self, regex::Error> {
        let lexicon = locale.lexicon();
        let institution_re = Regex::new(&format!("{}.*", regex::escape(lexicon.university)))?;
        let test_score_re = Regex::new(&format!(
            r"{}\s?(\d+)",
            regex::escape(lexicon.test_acronym)
        ))?;
        Ok(Self {
            lexicon,
            institution_re,
            test_score_re,
        })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        let record = ApplicantRecord {
            gender: self.gender(text),
            institution: self.institution(text),
            degree: self.degree(text),
            experience: self.experience(text),
            language_ability: self.language_ability(text),
        };
        Extraction {
            record,
            excerpt: char_prefix(text, EXCERPT_CHARS).to_string(),
        }
    }

    /// Male marker is checked before female.
    fn gender(&self, text: &str) -> Gender {
        let head = char_prefix(text, GENDER_WINDOW_CHARS);
        if contains_any(head, self.lexicon.male) {
            Gender::Male
        } else if contains_any(head, self.lexicon.female) {
            Gender::Female
        } else {
            Gender::Unknown
        }
    }

    fn institution(&self, text: &str) -> String {
        self.institution_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Check order, not position in the text, decides when several degrees
    /// co-occur: bachelor, then master, then doctorate.
    fn degree(&self, text: &str) -> Degree {
        if contains_any(text, self.lexicon.bachelor) {
            Degree::Bachelor
        } else if contains_any(text, self.lexicon.master) {
            Degree::Master
        } else if contains_any(text, self.lexicon.doctorate) {
            Degree::Doctorate
        } else {
            Degree::Unknown
        }
    }

    fn experience(&self, text: &str) -> Experience {
        if contains_any(text, self.lexicon.intern) {
            Experience::InternExperience
        } else if contains_any(text, self.lexicon.currently_employed) {
            Experience::Experienced
        } else {
            Experience::EntryLevel
        }
    }

    fn language_ability(&self, text: &str) -> String {
        let lex = self.lexicon;
        if contains_any(text, lex.test_names) {
            match self.test_score_re.captures(text).and_then(|c| c.get(1)) {
                Some(score) => format!("{} {}", lex.test_acronym, score.as_str()),
                None => lex.score_listed.to_string(),
            }
        } else if text.contains(lex.intermediate) {
            lex.intermediate.to_string()
        } else if text.contains(lex.advanced) {
            lex.advanced.to_string()
        } else {
            UNKNOWN.to_string()
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Slices `text` to at most `max_chars` characters without splitting a code point.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
