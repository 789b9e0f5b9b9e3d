//! Locale data — the marker tokens the extractor looks for and the prompt
//! template sent to the model. Nothing here is logic.

use std::str::FromStr;

use crate::screening::prompts::{EVALUATION_PROMPT_EN, EVALUATION_PROMPT_KO};

/// Résumé language the service is tuned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

/// Marker tokens per field. A field matches when any of its tokens occurs.
/// All matching is case-sensitive substring search.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub male: &'static [&'static str],
    pub female: &'static [&'static str],
    /// Institution match starts at this token and runs to the end of the line.
    pub university: &'static str,
    pub bachelor: &'static [&'static str],
    pub master: &'static [&'static str],
    pub doctorate: &'static [&'static str],
    pub intern: &'static [&'static str],
    pub currently_employed: &'static [&'static str],
    /// Standardized-test names, acronym and localized spellings.
    pub test_names: &'static [&'static str],
    /// Acronym used both to find the numeric score and to label it.
    pub test_acronym: &'static str,
    /// Stored when a test is mentioned but no score follows the acronym.
    pub score_listed: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
}

static KOREAN: Lexicon = Lexicon {
    male: &["남"],
    female: &["여"],
    university: "대학교",
    bachelor: &["학사"],
    master: &["석사"],
    doctorate: &["박사"],
    intern: &["인턴"],
    currently_employed: &["재직"],
    test_names: &["TOEIC", "토익"],
    test_acronym: "TOEIC",
    score_listed: "영어 점수 기재",
    intermediate: "Intermediate",
    advanced: "Advanced",
};

// "Intern" also hits "International"; same substring semantics as the Korean markers.
static ENGLISH: Lexicon = Lexicon {
    male: &["Male"],
    female: &["Female"],
    university: "University",
    bachelor: &["Bachelor", "B.S.", "B.A."],
    master: &["Master", "M.S.", "M.A."],
    doctorate: &["Doctorate", "Ph.D", "PhD"],
    intern: &["Intern"],
    currently_employed: &["Currently employed", "currently employed"],
    test_names: &["TOEIC"],
    test_acronym: "TOEIC",
    score_listed: "English test score listed",
    intermediate: "Intermediate",
    advanced: "Advanced",
};

impl Locale {
    pub fn lexicon(&self) -> &'static Lexicon {
        match self {
            Locale::Korean => &KOREAN,
            Locale::English => &ENGLISH,
        }
    }

    /// Evaluation prompt template with `{quant_score}`, `{reasons}`,
    /// `{applicant}` and `{raw_text}` placeholders.
    pub fn prompt_template(&self) -> &'static str {
        match self {
            Locale::Korean => EVALUATION_PROMPT_KO,
            Locale::English => EVALUATION_PROMPT_EN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Korean => "ko",
            Locale::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Locale::Korean),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale '{other}' (expected 'ko' or 'en')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parses_codes() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Korean);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::English);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_korean() {
        assert_eq!(Locale::default(), Locale::Korean);
        assert_eq!(Locale::default().code(), "ko");
    }

    #[test]
    fn test_every_lexicon_has_tokens_for_each_field() {
        for locale in [Locale::Korean, Locale::English] {
            let lex = locale.lexicon();
            for tokens in [
                lex.male,
                lex.female,
                lex.bachelor,
                lex.master,
                lex.doctorate,
                lex.intern,
                lex.currently_employed,
                lex.test_names,
            ] {
                assert!(!tokens.is_empty());
                assert!(tokens.iter().all(|t| !t.is_empty()));
            }
            assert!(lex.test_names.contains(&lex.test_acronym));
        }
    }

    #[test]
    fn test_templates_carry_all_placeholders() {
        for locale in [Locale::Korean, Locale::English] {
            let template = locale.prompt_template();
            for placeholder in ["{quant_score}", "{reasons}", "{applicant}", "{raw_text}"] {
                assert!(
                    template.contains(placeholder),
                    "{} template is missing {placeholder}",
                    locale.code()
                );
            }
        }
    }
}
