// Fixed classification scheme: (Condition x Category) -> search terms
use once_cell::sync::Lazy;

use crate::types::{CoderError, Result};

// Composite labels split on the first " e " into condition and category
pub const LABEL_SEPARATOR: &str = " e ";
// Labels without a separator fall back to this category
pub const FALLBACK_CATEGORY: &str = "geral";

// QualiGov coding criteria. Defined once; immutable for the whole run.
static CRITERIA: &[(&str, &[&str])] = &[
    (
        "Substantivo e nodalidade",
        &[
            "transparência",
            "acesso à informação",
            "dados abertos",
            "princípio da publicidade",
            "sigilo",
        ],
    ),
    (
        "Substantivo e autoridade",
        &[
            "poder de polícia",
            "competência legal",
            "hierarquia",
            "ordem pública",
            "soberania",
            "lei",
        ],
    ),
    (
        "Substantivo e tesouro",
        &[
            "transferência",
            "taxas",
            "multa",
            "receita pública",
            "crédito suplementar",
        ],
    ),
    (
        "Substantivo e organização",
        &[
            "estrutura administrativa",
            "personalidade jurídica",
            "organograma",
            "cargos e funções",
        ],
    ),
    (
        "Procedimental e nodalidade",
        &[
            "Auditorias externas independentes",
            "Avaliação de impacto ambiental",
            "Etnomapeamento",
            "Monitoramento das emissões",
        ],
    ),
    (
        "Procedimental e autoridade",
        &[
            "Cadastro de empreendimentos",
            "Inventário",
            "Licitação sustentavel",
            "Sistema de registro",
            "Avaliação Ambiental Estratégica",
        ],
    ),
    ("Procedimental e tesouro", &["dotação orçamentária"]),
    (
        "Procedimental e organização",
        &[
            "Comissão Estadual de Validação",
            "Comitê Científico",
            "Coletivo de conselhos",
            "Comitê Técnico-Científico",
            "Conselho Estadual de Meio Ambiente",
            "Fórum Amapaense de Mudanças Climáticas",
            "Núcleo de Adaptação",
            "Fórum Amazonense de Mudanças Climáticas",
            "Comitê Gestor",
            "Conselho Estadual de Recursos Hídricos",
            "Criação de centros de inovação",
            "Fórum Paraense",
            "Fóruns Municipais",
            "Painel científico",
        ],
    ),
];

/// One taxonomy entry. Condition and category are stored as split from
/// the label; capitalization happens at hit emission, not here.
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    pub condition: String,
    pub category: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Build a taxonomy from (composite label, terms) pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Vec<String>)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(label, terms)| {
                let (condition, category) = split_label(label);
                TaxonomyEntry {
                    condition: condition.to_string(),
                    category: category.to_string(),
                    terms,
                }
            })
            .collect();
        Self { entries }
    }

    /// The fixed QualiGov taxonomy, built once per process.
    pub fn standard() -> &'static Taxonomy {
        static STANDARD: Lazy<Taxonomy> = Lazy::new(|| {
            Taxonomy::from_pairs(CRITERIA.iter().map(|(label, terms)| {
                (*label, terms.iter().map(|t| t.to_string()).collect())
            }))
        });
        &STANDARD
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Startup check. A malformed entry means silently incomplete coding,
    /// so this is fatal rather than skippable.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.terms.is_empty() {
                return Err(CoderError::Taxonomy(format!(
                    "entry '{} {} {}' has no terms",
                    entry.condition, LABEL_SEPARATOR.trim(), entry.category
                )));
            }
            if entry.terms.iter().any(|t| t.trim().is_empty()) {
                return Err(CoderError::Taxonomy(format!(
                    "entry '{} {} {}' contains a blank term",
                    entry.condition, LABEL_SEPARATOR.trim(), entry.category
                )));
            }
        }
        Ok(())
    }
}

fn split_label(label: &str) -> (&str, &str) {
    match label.split_once(LABEL_SEPARATOR) {
        Some((condition, category)) => (condition, category),
        None => (label, FALLBACK_CATEGORY),
    }
}

/// First character uppercased, the rest lowercased (Unicode-aware).
/// Used for display at hit emission time.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
