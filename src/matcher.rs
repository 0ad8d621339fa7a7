// Literal term matching against extracted document text
use crate::taxonomy::{capitalize, Taxonomy};
use crate::types::Hit;

/// Scan one document's text for every taxonomy term and return the hits.
///
/// Matching is case-insensitive, non-overlapping substring counting. There
/// is no word-boundary check: a term inside a longer word still counts.
/// That is a known precision limitation of the coding scheme, kept on
/// purpose. Pure function; hits come out in taxonomy order, then term
/// order within an entry.
pub fn match_text(text: &str, source_document: &str, taxonomy: &Taxonomy) -> Vec<Hit> {
    // Lowercase once per document, not once per term
    let text = text.to_lowercase();
    let mut hits = Vec::new();

    for entry in taxonomy.entries() {
        for term in &entry.terms {
            let count = count_occurrences(&text, &term.to_lowercase());
            if count > 0 {
                hits.push(Hit {
                    document: source_document.to_string(),
                    condition: capitalize(&entry.condition),
                    category: capitalize(&entry.category),
                    term: term.clone(),
                    count,
                });
            }
        }
    }

    hits
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    // str::matches is non-overlapping, same as Python's str.count
    haystack.matches(needle).count()
}
