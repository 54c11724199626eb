//! Job scan — tokenizes posting text and compares it with the saved resume tokens.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::keywords::highlight::HighlightPlan;
use crate::keywords::matcher::match_tokens;
use crate::keywords::tokenizer::{tokenize, Variant};
use crate::models::settings::Settings;
use crate::store::SettingsStore;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub job_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub coverage: f32,
    pub highlight: HighlightPlan,
}

pub async fn scan_job(
    store: &dyn SettingsStore,
    default_color: &str,
    request: ScanRequest,
) -> Result<ScanReport, AppError> {
    let settings = Settings::load(store, default_color).await?;
    let job_text = request.job_text.unwrap_or_default();

    Ok(build_report(&settings, &job_text))
}

/// Pure part of the scan, given already loaded settings.
pub fn build_report(settings: &Settings, job_text: &str) -> ScanReport {
    if settings.resume_tokens.is_empty() {
        warn!("Scanning without saved resume tokens; every keyword will be missing");
    }

    let job_tokens = tokenize(
        job_text,
        &settings.custom_stopwords,
        settings.min_token_length,
        Variant::JobPosting,
    );
    let resume_tokens: HashSet<String> = settings.resume_tokens.iter().cloned().collect();

    let result = match_tokens(&job_tokens, &resume_tokens);
    let coverage = result.coverage();
    let highlight = HighlightPlan::build(&result.missing, &settings.highlight_color).with_spans(job_text);

    info!(
        job_tokens = job_tokens.len(),
        matched = result.matched.len(),
        missing = result.missing.len(),
        spans = highlight.spans.len(),
        "Job scanned"
    );

    ScanReport {
        matched: result.matched,
        missing: result.missing,
        coverage,
        highlight,
    }
}
