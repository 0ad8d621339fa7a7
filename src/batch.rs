// Sequential batch driver with per-document failure isolation
use serde::Serialize;

use crate::matcher;
use crate::taxonomy::Taxonomy;
use crate::types::{ExtractError, Hit};

/// A document the batch can code: a display name plus a text extraction
/// that either yields the full plain text or fails for this document
/// alone. Extraction failure is data, not a panic path.
pub trait DocumentSource {
    fn name(&self) -> &str;
    fn extract_text(&self) -> Result<String, ExtractError>;
}

/// Progress notification emitted after each document, failed or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    pub document: String,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub document: String,
    pub reason: String,
}

/// Everything one run produced. Hits are in document submission order,
/// then taxonomy order within a document.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub hits: Vec<Hit>,
    pub failures: Vec<DocumentFailure>,
    pub documents_processed: usize,
}

/// Terminal state of a run. NothingFound is informational, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    Found(&'a [Hit]),
    NothingFound,
}

impl BatchReport {
    pub fn outcome(&self) -> Outcome<'_> {
        if self.hits.is_empty() {
            Outcome::NothingFound
        } else {
            Outcome::Found(&self.hits)
        }
    }
}

/// Process documents one at a time, in order. A document whose extraction
/// fails is recorded and skipped; the rest of the batch still runs. The
/// progress callback fires after every document, including failed ones.
pub fn run<S, P>(sources: &[S], taxonomy: &Taxonomy, mut progress: P) -> BatchReport
where
    S: DocumentSource,
    P: FnMut(&Progress),
{
    let total = sources.len();
    let mut report = BatchReport::default();

    for (i, source) in sources.iter().enumerate() {
        match source.extract_text() {
            Ok(text) => {
                report
                    .hits
                    .extend(matcher::match_text(&text, source.name(), taxonomy));
                report.documents_processed += 1;
            }
            Err(err) => {
                report.failures.push(DocumentFailure {
                    document: source.name().to_string(),
                    reason: err.to_string(),
                });
            }
        }

        progress(&Progress {
            done: i + 1,
            total,
            document: source.name().to_string(),
        });
    }

    report
}
