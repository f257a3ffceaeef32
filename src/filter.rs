//! Generic record filter for the admin data screens.
//!
//! Evaluates the portal's small filter language against a fetched entity
//! list: clauses separated by `;` are AND-combined, and each clause is
//! either a free-text term (matched against every field) or an
//! `attribute,value` pair resolved through a per-category alias table.
//! The source UI re-branched this logic inside each table variant; here it
//! is one parametrized pass over a comparator table.
//!
//! The filter never fails. A clause that cannot be interpreted simply
//! matches nothing, which empties the AND result; that is a valid (if
//! unhelpful) outcome, not an error.

use tracing::debug;

use crate::models::record::value_text;
use crate::models::{Category, Record};

// ─── Query parsing ────────────────────────────────────────────────────────────

/// One AND-combined unit of a filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Clause {
    /// Bare term, matched against all fields (OR across fields).
    Term(String),
    /// `attribute,value` pair. The attribute is already lower-cased; the
    /// value keeps any commas past the first one verbatim.
    Attr { name: String, value: String },
}

fn parse_query(query: &str) -> Vec<Clause> {
    query
        .split(';')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(|clause| match clause.split_once(',') {
            Some((name, value)) => Clause::Attr {
                name: name.trim().to_lowercase(),
                value: value.trim().to_string(),
            },
            None => Clause::Term(clause.to_string()),
        })
        .collect()
}

// ─── Category alias tables ────────────────────────────────────────────────────

/// How a recognized attribute compares against a record.
#[derive(Debug, Clone, Copy)]
enum Comparator {
    /// Case-insensitive substring on one named field.
    Substring { field: &'static str },
    /// Exact string equality on an ID field, so `1` never matches `10`.
    NumericEq { field: &'static str },
    /// Substring against a display-name field, or against the synthetic
    /// `"name (id)"` combined form the report tables render.
    NameWithId {
        name_field: &'static str,
        id_field: &'static str,
    },
}

/// Resolves an attribute name (already lower-cased) for a category.
/// Unrecognized names get no comparator and fall back to free text.
fn resolve_attribute(category: Category, attr: &str) -> Option<Comparator> {
    use Comparator::*;
    match (category, attr) {
        (Category::Patient, "name") => Some(Substring { field: "name" }),
        (Category::Patient, "email") => Some(Substring { field: "email" }),

        (Category::Physician, "name") => Some(Substring { field: "name" }),
        (Category::Physician, "email") => Some(Substring { field: "email" }),
        (Category::Physician, "department") => Some(Substring { field: "department" }),

        (Category::HealthReport, "patientid" | "patient id") => {
            Some(NumericEq { field: "patientId" })
        }
        (Category::HealthReport, "physicianid" | "physician id") => {
            Some(NumericEq { field: "physicianId" })
        }
        (Category::HealthReport, "patient") => Some(NameWithId {
            name_field: "patient",
            id_field: "patientId",
        }),
        (Category::HealthReport, "physician") => Some(NameWithId {
            name_field: "physician",
            id_field: "physicianId",
        }),

        (Category::Clinic, "name") => Some(Substring { field: "name" }),
        (Category::Clinic, "address") => Some(Substring { field: "address" }),

        (Category::WorkAssignment, "clinicid" | "clinic id") => {
            Some(NumericEq { field: "clinicId" })
        }
        (Category::WorkAssignment, "physicianid" | "physician id") => {
            Some(NumericEq { field: "physicianId" })
        }

        (Category::Prescription, "dosage") => Some(Substring { field: "dosage" }),
        (Category::Prescription, "frequency") => Some(Substring { field: "frequency" }),
        (Category::Prescription, "instructions") => Some(Substring { field: "instructions" }),
        (Category::Prescription, "physicianid" | "physician id") => {
            Some(NumericEq { field: "physicianId" })
        }

        _ => None,
    }
}

// ─── Evaluation ───────────────────────────────────────────────────────────────

/// Filters `records` down to those satisfying every clause of `query`,
/// preserving original order. A missing or empty query is the identity.
pub fn filter_records(records: &[Record], category: Category, query: Option<&str>) -> Vec<Record> {
    let clauses = match query {
        Some(q) => parse_query(q),
        None => Vec::new(),
    };
    if clauses.is_empty() {
        return records.to_vec();
    }

    debug!(
        category = %category,
        clauses = clauses.len(),
        total = records.len(),
        "applying record filter"
    );

    records
        .iter()
        .filter(|record| {
            clauses
                .iter()
                .all(|clause| matches_clause(record, category, clause))
        })
        .cloned()
        .collect()
}

fn matches_clause(record: &Record, category: Category, clause: &Clause) -> bool {
    match clause {
        Clause::Term(term) => matches_free_text(record, term),
        Clause::Attr { name, value } => match resolve_attribute(category, name) {
            Some(comparator) => matches_comparator(record, comparator, value),
            // Attribute unknown for this category: the value alone is
            // treated as a free-text term, the attribute name is dropped.
            None => matches_free_text(record, value),
        },
    }
}

/// True if any field's string representation contains the term,
/// case-insensitively. Missing and null fields never match.
fn matches_free_text(record: &Record, term: &str) -> bool {
    let needle = term.to_lowercase();
    record
        .fields()
        .filter_map(|(_, value)| value_text(value))
        .any(|text| text.to_lowercase().contains(&needle))
}

fn matches_comparator(record: &Record, comparator: Comparator, value: &str) -> bool {
    match comparator {
        Comparator::Substring { field } => record
            .field_text(field)
            .map(|text| text.to_lowercase().contains(&value.to_lowercase()))
            .unwrap_or(false),
        Comparator::NumericEq { field } => record
            .field_text(field)
            .map(|text| text == value)
            .unwrap_or(false),
        Comparator::NameWithId {
            name_field,
            id_field,
        } => {
            let Some(name) = record.field_text(name_field) else {
                return false;
            };
            let needle = value.to_lowercase();
            if name.to_lowercase().contains(&needle) {
                return true;
            }
            match record.field_text(id_field) {
                Some(id) => format!("{name} ({id})").to_lowercase().contains(&needle),
                None => false,
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn patients() -> Vec<Record> {
        records(json!([
            {"id": 1, "name": "Tom Hanks", "email": "tom@example.com", "bloodtype": "O+"},
            {"id": 2, "name": "Alice Johnson", "email": "alice@clinic.org", "bloodtype": "A-"},
            {"id": 3, "name": "Tommy Lee", "email": "lee@example.com", "bloodtype": "B+"}
        ]))
    }

    fn reports() -> Vec<Record> {
        records(json!([
            {"id": 1, "reportDate": "2024-11-05", "physician": "Dr. Amy Carter",
             "patient": "Tom Hanks", "physicianId": 1, "patientId": 1},
            {"id": 2, "reportDate": "2024-12-10", "physician": "Dr. Daniel Moore",
             "patient": "Alice Johnson", "physicianId": 2, "patientId": 10}
        ]))
    }

    #[test]
    fn missing_query_is_identity() {
        let data = patients();
        assert_eq!(filter_records(&data, Category::Patient, None), data);
        assert_eq!(filter_records(&data, Category::Patient, Some("")), data);
        assert_eq!(filter_records(&data, Category::Patient, Some("  ; ;  ")), data);
    }

    #[test]
    fn free_text_matches_any_field() {
        let data = patients();
        let hit = filter_records(&data, Category::Patient, Some("clinic.org"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].field_text("name").unwrap(), "Alice Johnson");
    }

    #[test]
    fn free_text_is_case_insensitive() {
        let data = patients();
        assert_eq!(filter_records(&data, Category::Patient, Some("TOM")).len(), 2);
        assert_eq!(filter_records(&data, Category::Patient, Some("tom")).len(), 2);
    }

    #[test]
    fn attribute_clause_targets_one_field() {
        let data = patients();
        // "lee" appears in record 3's name and email, but only record 3's
        // email contains "lee@".
        let hit = filter_records(&data, Category::Patient, Some("email, lee@"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].field_text("id").unwrap(), "3");
    }

    #[test]
    fn attribute_value_case_insensitive() {
        let data = patients();
        let upper = filter_records(&data, Category::Patient, Some("name,TOM HANKS"));
        let lower = filter_records(&data, Category::Patient, Some("name,tom hanks"));
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn clauses_and_compose() {
        let data = patients();
        let both = filter_records(&data, Category::Patient, Some("name,tom;email,example.com"));
        let q1 = filter_records(&data, Category::Patient, Some("name,tom"));
        let q2 = filter_records(&data, Category::Patient, Some("email,example.com"));
        let intersection: Vec<Record> = data
            .iter()
            .filter(|r| q1.contains(r) && q2.contains(r))
            .cloned()
            .collect();
        assert_eq!(both, intersection);
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn conflicting_clauses_yield_empty() {
        let data = patients();
        let none = filter_records(&data, Category::Patient, Some("name,tom;name,alice"));
        assert!(none.is_empty());
    }

    #[test]
    fn numeric_equality_is_exact() {
        let data = reports();
        let hit = filter_records(&data, Category::HealthReport, Some("patientId,1"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].field_text("patientId").unwrap(), "1");
        // patientId 10 must not match the query "1".
        let ten = filter_records(&data, Category::HealthReport, Some("patientId,10"));
        assert_eq!(ten.len(), 1);
        assert_eq!(ten[0].field_text("patientId").unwrap(), "10");
    }

    #[test]
    fn spaced_alias_resolves_like_compact_form() {
        let data = reports();
        let spaced = filter_records(&data, Category::HealthReport, Some("patient id, 1"));
        let compact = filter_records(&data, Category::HealthReport, Some("patientid,1"));
        assert_eq!(spaced, compact);
        assert_eq!(spaced.len(), 1);
    }

    #[test]
    fn name_alias_matches_display_name_and_combined_form() {
        let data = reports();
        let by_name = filter_records(&data, Category::HealthReport, Some("physician,amy"));
        assert_eq!(by_name.len(), 1);
        // The synthetic "name (id)" form the tables render is searchable too.
        let by_combined =
            filter_records(&data, Category::HealthReport, Some("patient,Tom Hanks (1)"));
        assert_eq!(by_combined.len(), 1);
    }

    #[test]
    fn unknown_attribute_falls_back_to_value_as_free_text() {
        let data = patients();
        // "bloodtype" is not a recognized patient attribute; the value is
        // searched across all fields and the attribute name is ignored.
        let hit = filter_records(&data, Category::Patient, Some("bloodtype,O+"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].field_text("name").unwrap(), "Tom Hanks");
    }

    #[test]
    fn value_keeps_commas_past_the_first() {
        let data = records(json!([
            {"id": 1, "dosage": "500mg", "instructions": "Take 1, then rest"},
            {"id": 2, "dosage": "20mg", "instructions": "Take with food"}
        ]));
        let hit = filter_records(&data, Category::Prescription, Some("instructions,take 1, then"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].field_text("id").unwrap(), "1");
    }

    #[test]
    fn missing_fields_never_match() {
        let data = records(json!([
            {"id": 1, "name": "Tom"},
            {"id": 2, "email": null}
        ]));
        let by_attr = filter_records(&data, Category::Patient, Some("email,tom"));
        assert!(by_attr.is_empty());
        let free = filter_records(&data, Category::Patient, Some("null"));
        assert!(free.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let data = patients();
        let hit = filter_records(&data, Category::Patient, Some("example.com"));
        let ids: Vec<String> = hit.iter().map(|r| r.field_text("id").unwrap()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn overspecific_clause_empties_result_without_error() {
        let data = patients();
        let none = filter_records(&data, Category::Patient, Some("name,zzz-no-such-patient"));
        assert!(none.is_empty());
    }
}
