//! External evaluation — prompt assembly and the pluggable `Evaluator`.
//!
//! The evaluator's answer is opaque display text: it is not parsed,
//! validated or retried. `AppState` carries an `Arc<dyn Evaluator>`.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::EVALUATION_SYSTEM;
use crate::screening::record::ApplicantRecord;
use crate::screening::scoring::ScoreResult;

/// prompt in → free-text evaluation out.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Evaluator backed by the chat-completions model.
pub struct LlmEvaluator(pub LlmClient);

#[async_trait]
impl Evaluator for LlmEvaluator {
    async fn evaluate(&self, prompt: &str) -> Result<String, AppError> {
        self.0
            .call_text(prompt, EVALUATION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Applicant evaluation failed: {e}")))
    }
}

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(quant_score|reasons|applicant|raw_text)\}").expect("valid placeholder regex")
});

/// Fills the locale template in a single pass over the template. Substituted
/// values are never rescanned, so placeholder text inside the résumé stays literal.
pub fn build_evaluation_prompt(
    template: &str,
    record: &ApplicantRecord,
    excerpt: &str,
    score: &ScoreResult,
) -> Result<String, AppError> {
    let applicant = serde_json::to_string_pretty(record)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let reasons = score
        .reasons
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    let quant_score = format!("{:.1}", score.score);

    let prompt = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| match &caps[1] {
        "quant_score" => quant_score.clone(),
        "reasons" => reasons.clone(),
        "applicant" => applicant.clone(),
        _ => excerpt.to_string(),
    });
    Ok(prompt.into_owned())
}
