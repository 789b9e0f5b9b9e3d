// Résumé screening: field extraction, heuristic scoring, model evaluation.
// All model calls go through llm_client via the Evaluator trait.

pub mod evaluation;
pub mod extractor;
pub mod handlers;
pub mod locale;
pub mod pipeline;
pub mod prompts;
pub mod record;
pub mod scoring;
