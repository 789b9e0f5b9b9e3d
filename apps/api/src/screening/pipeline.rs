//! Screening pipeline — one uploaded résumé end to end.
//!
//! Flow: read_pages → concat → extract → calculate_score →
//!       build_evaluation_prompt → evaluator.evaluate → ScreeningReport.
//!
//! Either every stage succeeds or the request fails; nothing partial is returned.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::{concat_pages, DocumentReader};
use crate::errors::AppError;
use crate::screening::evaluation::{build_evaluation_prompt, Evaluator};
use crate::screening::extractor::FieldExtractor;
use crate::screening::record::ApplicantRecord;
use crate::screening::scoring::{calculate_score, ScoreResult};

/// A validated upload, fully buffered.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub evaluation_id: Uuid,
    pub file_name: String,
    pub page_count: usize,
    pub evaluated_at: DateTime<Utc>,
    pub applicant: ApplicantRecord,
    pub score: ScoreResult,
    /// Model output, verbatim.
    pub evaluation: String,
}

pub async fn screen_resume(
    reader: Arc<dyn DocumentReader>,
    extractor: &FieldExtractor,
    evaluator: &dyn Evaluator,
    prompt_template: &str,
    upload: ResumeUpload,
) -> Result<ScreeningReport, AppError> {
    let evaluation_id = Uuid::new_v4();
    info!(
        "Screening {evaluation_id}: '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );

    let bytes = upload.bytes.clone();
    let pages = tokio::task::spawn_blocking(move || reader.read_pages(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("The PDF could not be read".to_string())
            } else {
                AppError::Internal(anyhow::Error::new(e))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let page_count = pages.len();
    let text = concat_pages(&pages);
    info!("Screening {evaluation_id}: read {page_count} page(s), {} chars", text.chars().count());

    let extraction = extractor.extract(&text);
    debug!("Screening {evaluation_id}: extracted {:?}", extraction.record);

    let score = calculate_score(&extraction.record);
    info!("Screening {evaluation_id}: quantitative score {:.1}", score.score);

    let prompt = build_evaluation_prompt(
        prompt_template,
        &extraction.record,
        &extraction.excerpt,
        &score,
    )?;
    let evaluation = evaluator.evaluate(&prompt).await?;
    info!("Screening {evaluation_id}: evaluation received");

    Ok(ScreeningReport {
        evaluation_id,
        file_name: upload.file_name,
        page_count,
        evaluated_at: Utc::now(),
        applicant: extraction.record,
        score,
        evaluation,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::screening::locale::Locale;
    use crate::screening::record::{Degree, Experience};

    fn upload() -> ResumeUpload {
        ResumeUpload {
            file_name: "resume.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.7 stub"),
        }
    }

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(Locale::English).unwrap()
    }

    #[tokio::test]
    async fn test_full_pipeline_produces_report() {
        let reader = Arc::new(FixedPages(vec![
            "John Roe, Male\nUniversity of Oslo, Physics\n".to_string(),
            "PhD in Physics\nCurrently employed at CERN\nTOEIC 900\n".to_string(),
        ]));
        let evaluator = RecordingEvaluator::default();

        let report = screen_resume(
            reader,
            &extractor(),
            &evaluator,
            Locale::English.prompt_template(),
            upload(),
        )
        .await
        .unwrap();

        assert_eq!(report.page_count, 2);
        assert_eq!(report.file_name, "resume.pdf");
        assert_eq!(report.applicant.degree, Degree::Doctorate);
        assert_eq!(report.applicant.experience, Experience::Experienced);
        assert_eq!(report.applicant.institution, "University of Oslo, Physics");
        assert_eq!(report.score.score, 93.0);
        assert_eq!(report.evaluation, "Applicant summary: solid profile.");

        let prompts = evaluator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("93.0"));
        assert!(prompts[0].contains("Currently employed at CERN"));
    }

    #[tokio::test]
    async fn test_pages_are_concatenated_without_separator() {
        // "TOE" + "IC 800" only forms the acronym when pages join directly.
        let reader = Arc::new(FixedPages(vec!["TOE".to_string(), "IC 800".to_string()]));
        let report = screen_resume(
            reader,
            &extractor(),
            &RecordingEvaluator::default(),
            Locale::English.prompt_template(),
            upload(),
        )
        .await
        .unwrap();
        assert_eq!(report.applicant.language_ability, "TOEIC 800");
    }

    #[tokio::test]
    async fn test_unreadable_document_is_unprocessable() {
        let evaluator = RecordingEvaluator::default();
        let err = screen_resume(
            Arc::new(UnreadableDocument),
            &extractor(),
            &evaluator,
            Locale::English.prompt_template(),
            upload(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert!(evaluator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reader_panic_is_unprocessable() {
        let err = screen_resume(
            Arc::new(PanickingReader),
            &extractor(),
            &RecordingEvaluator::default(),
            Locale::English.prompt_template(),
            upload(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_evaluator_failure_aborts_request() {
        let err = screen_resume(
            Arc::new(FixedPages(vec!["Bachelor".to_string()])),
            &extractor(),
            &FailingEvaluator,
            Locale::English.prompt_template(),
            upload(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
