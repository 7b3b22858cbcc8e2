//! Knowledge-base YAML wire model and translation helpers.
//!
//! Responsibilities:
//! - Define domain-level carriers for the symptom catalog, condition profiles and red flags
//! - Define a strict wire model for serialisation/deserialisation
//! - Translate string identifiers into typed values, reporting where a bad value sits
//!
//! Notes:
//! - Catalog order and condition order are preserved exactly as written in the file
//! - Weights are kept as a list, not a mapping, so a repeated symptom survives parsing and
//!   can be reported by the validator instead of silently overwriting an earlier entry

use crate::{KbError, KbResult};
use rogo_types::{NonEmptyText, Severity, SymptomId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// One catalog entry: a symptom and the question used to ask about it.
#[derive(Clone, Debug, PartialEq)]
pub struct SymptomEntry {
    pub id: SymptomId,
    pub question: NonEmptyText,
}

/// A condition profile as read from the file.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionData {
    pub name: NonEmptyText,
    pub severity: Severity,
    pub advice: NonEmptyText,
    /// Symptom weights in file order.
    pub weights: Vec<(SymptomId, f64)>,
}

/// A red-flag combination as read from the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedFlagData {
    pub symptoms: Vec<SymptomId>,
}

/// Domain-level carrier for a whole knowledge-base file.
#[derive(Clone, Debug, PartialEq)]
pub struct KnowledgeBaseData {
    pub symptoms: Vec<SymptomEntry>,
    pub conditions: Vec<ConditionData>,
    pub red_flags: Vec<RedFlagData>,
}

// ============================================================================
// Public KnowledgeBaseFile operations
// ============================================================================

/// Knowledge-base file operations.
///
/// This is a zero-sized type used for namespacing; all methods are associated functions.
pub struct KnowledgeBaseFile;

impl KnowledgeBaseFile {
    /// Parse a knowledge base from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort path (e.g.
    /// `conditions[3].weights[0].weight`) to the failing field when the YAML does not match
    /// the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`KbError`] if:
    /// - the YAML does not match the wire schema or contains unknown keys,
    /// - a symptom identifier is not part of the symptom enumeration,
    /// - a name, question or advice text is empty.
    pub fn parse(yaml_text: &str) -> KbResult<KnowledgeBaseData> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, KnowledgeBaseWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(KbError::Translation(format!(
                    "Knowledge base schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Render a knowledge base as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`KbError`] if serialisation fails.
    pub fn render(data: &KnowledgeBaseData) -> KbResult<String> {
        let wire = domain_to_wire(data);
        serde_yaml::to_string(&wire)
            .map_err(|e| KbError::Translation(format!("Failed to serialize knowledge base: {e}")))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct KnowledgeBaseWire {
    symptoms: Vec<SymptomWire>,
    conditions: Vec<ConditionWire>,
    #[serde(default)]
    red_flags: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct SymptomWire {
    id: String,
    question: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConditionWire {
    name: String,
    severity: Severity,
    advice: String,
    weights: Vec<WeightWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct WeightWire {
    symptom: String,
    weight: f64,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn parse_symptom(raw: &str, location: impl FnOnce() -> String) -> KbResult<SymptomId> {
    raw.parse().map_err(|_| KbError::UnknownSymptom {
        location: location(),
        id: raw.to_owned(),
    })
}

fn non_empty(raw: &str, location: impl FnOnce() -> String) -> KbResult<NonEmptyText> {
    NonEmptyText::new(raw).map_err(|e| KbError::Translation(format!("{}: {e}", location())))
}

fn wire_to_domain(wire: KnowledgeBaseWire) -> KbResult<KnowledgeBaseData> {
    let symptoms = wire
        .symptoms
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Ok(SymptomEntry {
                id: parse_symptom(&s.id, || format!("symptoms[{i}].id"))?,
                question: non_empty(&s.question, || format!("symptoms[{i}].question"))?,
            })
        })
        .collect::<KbResult<Vec<_>>>()?;

    let conditions = wire
        .conditions
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let weights = c
                .weights
                .iter()
                .enumerate()
                .map(|(j, w)| {
                    let id =
                        parse_symptom(&w.symptom, || format!("conditions[{i}].weights[{j}]"))?;
                    Ok((id, w.weight))
                })
                .collect::<KbResult<Vec<_>>>()?;

            Ok(ConditionData {
                name: non_empty(&c.name, || format!("conditions[{i}].name"))?,
                severity: c.severity,
                advice: non_empty(&c.advice, || format!("conditions[{i}].advice"))?,
                weights,
            })
        })
        .collect::<KbResult<Vec<_>>>()?;

    let red_flags = wire
        .red_flags
        .iter()
        .enumerate()
        .map(|(i, combo)| {
            let symptoms = combo
                .iter()
                .enumerate()
                .map(|(j, raw)| parse_symptom(raw, || format!("red_flags[{i}][{j}]")))
                .collect::<KbResult<Vec<_>>>()?;
            Ok(RedFlagData { symptoms })
        })
        .collect::<KbResult<Vec<_>>>()?;

    Ok(KnowledgeBaseData {
        symptoms,
        conditions,
        red_flags,
    })
}

fn domain_to_wire(data: &KnowledgeBaseData) -> KnowledgeBaseWire {
    KnowledgeBaseWire {
        symptoms: data
            .symptoms
            .iter()
            .map(|s| SymptomWire {
                id: s.id.as_str().to_owned(),
                question: s.question.as_str().to_owned(),
            })
            .collect(),
        conditions: data
            .conditions
            .iter()
            .map(|c| ConditionWire {
                name: c.name.as_str().to_owned(),
                severity: c.severity,
                advice: c.advice.as_str().to_owned(),
                weights: c
                    .weights
                    .iter()
                    .map(|(id, weight)| WeightWire {
                        symptom: id.as_str().to_owned(),
                        weight: *weight,
                    })
                    .collect(),
            })
            .collect(),
        red_flags: data
            .red_flags
            .iter()
            .map(|r| r.symptoms.iter().map(|id| id.as_str().to_owned()).collect())
            .collect(),
    }
}
