//! Score Calculator — fixed-weight heuristic over an `ApplicantRecord`.
//!
//! final = 0.3 × degree + 0.3 × experience + 0.4 × language, rounded to one
//! decimal place. Every sub-score is ≤ 100 and the weights sum to 1.0, so the
//! result stays in [0, 100].

use serde::Serialize;

use crate::screening::record::{ApplicantRecord, Degree, Experience, UNKNOWN};

pub const DEGREE_WEIGHT: f64 = 0.3;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const LANGUAGE_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Degree,
    Experience,
    Language,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Degree => "degree",
            Factor::Experience => "experience",
            Factor::Language => "language",
        }
    }
}

/// One scored factor, kept so the UI can show the full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub value: String,
    pub points: u32,
    pub weight: f64,
    /// points × weight, unrounded.
    pub contribution: f64,
}

impl FactorScore {
    fn new(factor: Factor, value: String, points: u32, weight: f64) -> Self {
        Self {
            factor,
            value,
            points,
            weight,
            contribution: points as f64 * weight,
        }
    }

    /// `"<factor>: <value> → <points> points"`
    pub fn reason(&self) -> String {
        format!("{}: {} → {} points", self.factor.as_str(), self.value, self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// 0 – 100, one decimal place.
    pub score: f64,
    /// One line per factor in the order degree, experience, language.
    pub reasons: Vec<String>,
    pub factors: Vec<FactorScore>,
}

pub fn calculate_score(record: &ApplicantRecord) -> ScoreResult {
    let factors = vec![
        FactorScore::new(
            Factor::Degree,
            record.degree.to_string(),
            degree_points(record.degree),
            DEGREE_WEIGHT,
        ),
        FactorScore::new(
            Factor::Experience,
            record.experience.to_string(),
            experience_points(record.experience),
            EXPERIENCE_WEIGHT,
        ),
        FactorScore::new(
            Factor::Language,
            record.language_ability.clone(),
            language_points(&record.language_ability),
            LANGUAGE_WEIGHT,
        ),
    ];

    let total: f64 = factors.iter().map(|f| f.contribution).sum();

    ScoreResult {
        score: round_one_decimal(total),
        reasons: factors.iter().map(FactorScore::reason).collect(),
        factors,
    }
}

pub fn degree_points(degree: Degree) -> u32 {
    match degree {
        Degree::Doctorate => 100,
        Degree::Master => 85,
        Degree::Bachelor => 70,
        Degree::Unknown => 50,
    }
}

pub fn experience_points(experience: Experience) -> u32 {
    match experience {
        Experience::Experienced => 90,
        Experience::InternExperience => 70,
        Experience::EntryLevel => 50,
    }
}

/// Substring tiers: "900"/"Advanced" → 90, "800"/"Intermediate" → 70,
/// anything else but `unknown` → 60, `unknown` → 40.
pub fn language_points(language: &str) -> u32 {
    if language.contains("900") || language.contains("Advanced") {
        90
    } else if language.contains("800") || language.contains("Intermediate") {
        70
    } else if language != UNKNOWN {
        60
    } else {
        40
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
