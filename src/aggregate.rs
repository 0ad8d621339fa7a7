// Summary projections over the hit list
use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Hit;

/// One row of a one-axis summary. `total` sums Hit.count (occurrences);
/// `rows` is the number of hit rows in the group, kept because the
/// display layer reports both readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub label: String,
    pub total: usize,
    pub rows: usize,
}

/// One cell of the condition x category cross-tabulation. Row count,
/// not occurrence sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCell {
    pub condition: String,
    pub category: String,
    pub rows: usize,
}

/// Hits grouped by condition. Sorted descending by total, ties by label.
pub fn by_condition(hits: &[Hit]) -> Vec<GroupTotal> {
    group_by(hits, |h| h.condition.as_str())
}

/// Hits grouped by category. Same ordering as by_condition.
pub fn by_category(hits: &[Hit]) -> Vec<GroupTotal> {
    group_by(hits, |h| h.category.as_str())
}

fn group_by<'a, F>(hits: &'a [Hit], key: F) -> Vec<GroupTotal>
where
    F: Fn(&'a Hit) -> &'a str,
{
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for hit in hits {
        let slot = groups.entry(key(hit)).or_insert((0, 0));
        slot.0 += hit.count;
        slot.1 += 1;
    }

    let mut out: Vec<GroupTotal> = groups
        .into_iter()
        .map(|(label, (total, rows))| GroupTotal {
            label: label.to_string(),
            total,
            rows,
        })
        .collect();
    // Largest group first; label order breaks ties so exports reproduce
    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Cross-tabulation, sorted ascending by (condition, category).
pub fn cross_tab(hits: &[Hit]) -> Vec<CrossCell> {
    let mut cells: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for hit in hits {
        *cells
            .entry((hit.condition.as_str(), hit.category.as_str()))
            .or_insert(0) += 1;
    }

    cells
        .into_iter()
        .map(|((condition, category), rows)| CrossCell {
            condition: condition.to_string(),
            category: category.to_string(),
            rows,
        })
        .collect()
}
