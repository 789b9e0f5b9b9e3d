//! ApplicantRecord — the categorical fields pulled out of one résumé.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value stored in the free-text fields when no pattern matched.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Bachelor,
    Master,
    Doctorate,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    InternExperience,
    Experienced,
    #[default]
    EntryLevel,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => UNKNOWN,
        }
    }
}

impl Degree {
    pub fn as_str(&self) -> &'static str {
        match self {
            Degree::Bachelor => "bachelor",
            Degree::Master => "master",
            Degree::Doctorate => "doctorate",
            Degree::Unknown => UNKNOWN,
        }
    }
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::InternExperience => "intern_experience",
            Experience::Experienced => "experienced",
            Experience::EntryLevel => "entry_level",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured extraction result for one résumé. Every field is always present;
/// misses fall back to `unknown` / `entry_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub gender: Gender,
    /// Text from the university token to the end of its line.
    pub institution: String,
    pub degree: Degree,
    pub experience: Experience,
    /// `"<TEST> <score>"`, a locale "score listed" marker, a tier literal, or `unknown`.
    pub language_ability: String,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            institution: UNKNOWN.to_string(),
            degree: Degree::default(),
            experience: Experience::default(),
            language_ability: UNKNOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_is_all_unknown_and_entry_level() {
        let record = ApplicantRecord::default();
        assert_eq!(record.gender, Gender::Unknown);
        assert_eq!(record.institution, "unknown");
        assert_eq!(record.degree, Degree::Unknown);
        assert_eq!(record.experience, Experience::EntryLevel);
        assert_eq!(record.language_ability, "unknown");
    }

    #[test]
    fn test_record_serializes_with_fixed_keys() {
        let record = ApplicantRecord {
            gender: Gender::Female,
            institution: "University of Seoul, Computer Science".to_string(),
            degree: Degree::Master,
            experience: Experience::InternExperience,
            language_ability: "TOEIC 850".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "gender": "female",
                "institution": "University of Seoul, Computer Science",
                "degree": "master",
                "experience": "intern_experience",
                "language_ability": "TOEIC 850"
            })
        );
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for degree in [
            Degree::Bachelor,
            Degree::Master,
            Degree::Doctorate,
            Degree::Unknown,
        ] {
            let json = serde_json::to_string(&degree).unwrap();
            assert_eq!(json, format!("\"{}\"", degree.as_str()));
        }
        for experience in [
            Experience::InternExperience,
            Experience::Experienced,
            Experience::EntryLevel,
        ] {
            let json = serde_json::to_string(&experience).unwrap();
            assert_eq!(json, format!("\"{experience}\""));
        }
        let gender: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(gender, Gender::Male);
    }
}
