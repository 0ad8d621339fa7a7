// End-to-end runs through the library with in-memory document sources
use codificador::aggregate;
use codificador::batch::{self, DocumentSource, Outcome};
use codificador::export;
use codificador::taxonomy::Taxonomy;
use codificador::types::ExtractError;

struct MemoryDoc {
    name: &'static str,
    text: Result<&'static str, &'static str>,
}

impl DocumentSource for MemoryDoc {
    fn name(&self) -> &str {
        self.name
    }

    fn extract_text(&self) -> Result<String, ExtractError> {
        match self.text {
            Ok(text) => Ok(text.to_string()),
            Err(reason) => Err(ExtractError(reason.to_string())),
        }
    }
}

fn ok(name: &'static str, text: &'static str) -> MemoryDoc {
    MemoryDoc { name, text: Ok(text) }
}

fn broken(name: &'static str, reason: &'static str) -> MemoryDoc {
    MemoryDoc { name, text: Err(reason) }
}

#[test]
fn test_single_document_coding() {
    let docs = vec![ok(
        "a.pdf",
        "Transparência e acesso à informação. TRANSPARÊNCIA.",
    )];

    let report = batch::run(&docs, Taxonomy::standard(), |_| {});

    assert_eq!(report.hits.len(), 2);

    let first = &report.hits[0];
    assert_eq!(first.document, "a.pdf");
    assert_eq!(first.condition, "Substantivo");
    assert_eq!(first.category, "Nodalidade");
    assert_eq!(first.term, "transparência");
    assert_eq!(first.count, 2);

    let second = &report.hits[1];
    assert_eq!(second.term, "acesso à informação");
    assert_eq!(second.count, 1);
}

#[test]
fn test_zero_documents_is_nothing_found() {
    let docs: Vec<MemoryDoc> = Vec::new();
    let mut progress_calls = 0;

    let report = batch::run(&docs, Taxonomy::standard(), |_| progress_calls += 1);

    assert_eq!(progress_calls, 0);
    assert_eq!(report.outcome(), Outcome::NothingFound);
    assert!(report.failures.is_empty());
}

#[test]
fn test_partial_failure_keeps_surviving_document() {
    let docs = vec![
        ok("plano.pdf", "A lei prevê multa e dotação orçamentária."),
        broken("corrompido.pdf", "página sem fluxo de texto"),
    ];

    let report = batch::run(&docs, Taxonomy::standard(), |_| {});

    assert_eq!(report.documents_processed, 1);
    assert!(report.hits.iter().all(|h| h.document == "plano.pdf"));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].document, "corrompido.pdf");

    match report.outcome() {
        Outcome::Found(hits) => assert!(!hits.is_empty()),
        Outcome::NothingFound => panic!("expected hits from the surviving document"),
    }
}

#[test]
fn test_summary_totals_are_consistent_across_axes() {
    let docs = vec![
        ok("um.pdf", "lei, lei, transparência e hierarquia"),
        ok("dois.pdf", "Inventário e dotação orçamentária; multa"),
    ];

    let report = batch::run(&docs, Taxonomy::standard(), |_| {});
    let hits = &report.hits;

    let grand: usize = hits.iter().map(|h| h.count).sum();
    let by_condition: usize = aggregate::by_condition(hits).iter().map(|g| g.total).sum();
    let by_category: usize = aggregate::by_category(hits).iter().map(|g| g.total).sum();
    assert_eq!(by_condition, grand);
    assert_eq!(by_category, grand);

    let cross_rows: usize = aggregate::cross_tab(hits).iter().map(|c| c.rows).sum();
    assert_eq!(cross_rows, hits.len());
}

#[test]
fn test_export_round_through_filesystem() {
    let docs = vec![ok("a.pdf", "transparência e sigilo")];
    let report = batch::run(&docs, Taxonomy::standard(), |_| {});

    let sheets = export::build_workbook(&report.hits);
    let dir = tempfile::tempdir().unwrap();
    export::write_workbook(&sheets, dir.path()).unwrap();

    let detail = std::fs::read_to_string(
        dir.path().join(format!("{}.csv", export::DETAIL_SHEET)),
    )
    .unwrap();
    assert!(detail.lines().count() >= 3); // header + two hits
    assert!(detail.contains("a.pdf,Substantivo,Nodalidade,transparência,1"));
    assert!(detail.contains("sigilo"));
}

#[test]
fn test_report_serializes_to_json() {
    let docs = vec![
        ok("a.pdf", "transparência"),
        broken("b.pdf", "ilegível"),
    ];
    let report = batch::run(&docs, Taxonomy::standard(), |_| {});

    let json = serde_json::to_string_pretty(&report).unwrap();
    assert!(json.contains("\"document\": \"a.pdf\""));
    assert!(json.contains("\"ilegível\""));
    assert!(json.contains("\"documents_processed\": 1"));
}
