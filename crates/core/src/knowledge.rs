//! The validated, immutable knowledge base.
//!
//! A [`KnowledgeBase`] is built once at startup, either from the YAML compiled into the binary
//! ([`builtin`]) or from a file named in [`CoreConfig`]. Construction runs every
//! cross-reference check; after that the tables are read-only and shared freely between
//! sessions.
//!
//! Validation rules:
//! - the catalog lists every [`SymptomId`] exactly once
//! - every symptom a condition or red flag mentions is in the catalog
//! - condition names are unique, profiles are non-empty, no symptom is weighted twice
//! - weights are finite and non-zero, and each profile's positive weights sum to a finite total
//! - red flags combine at least two distinct symptoms

use crate::answers::SymptomAnswers;
use crate::config::CoreConfig;
use crate::{CoreError, CoreResult};
use rogo_kb::{KnowledgeBaseData, KnowledgeBaseFile, BUILTIN_KNOWLEDGE_BASE_YAML};
use rogo_types::{NonEmptyText, Severity, SymptomId};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub use rogo_kb::SymptomEntry;

static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();

/// A named, weighted combination of symptoms.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionProfile {
    name: NonEmptyText,
    severity: Severity,
    advice: NonEmptyText,
    weights: Vec<(SymptomId, f64)>,
    possible_weight: f64,
}

impl ConditionProfile {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn advice(&self) -> &str {
        self.advice.as_str()
    }

    pub fn weights(&self) -> &[(SymptomId, f64)] {
        &self.weights
    }

    pub fn weight(&self, id: SymptomId) -> Option<f64> {
        self.weights.iter().find(|(s, _)| *s == id).map(|(_, w)| *w)
    }

    /// Sum of the positive weights. Negative weights can only lower a score.
    pub fn possible_weight(&self) -> f64 {
        self.possible_weight
    }

    /// True when no answer can ever raise this profile above 0%.
    pub fn is_degenerate(&self) -> bool {
        self.possible_weight <= 0.0
    }
}

/// A combination of symptoms that must all be present to raise an urgent alert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedFlagRule {
    symptoms: Vec<SymptomId>,
}

impl RedFlagRule {
    pub fn symptoms(&self) -> &[SymptomId] {
        &self.symptoms
    }

    pub fn contains(&self, id: SymptomId) -> bool {
        self.symptoms.contains(&id)
    }

    pub fn is_triggered(&self, answers: &SymptomAnswers) -> bool {
        answers.all_present(&self.symptoms)
    }
}

impl fmt::Display for RedFlagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.symptoms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(id.as_str())?;
        }
        Ok(())
    }
}

/// Symptom catalog, condition profiles and red-flag rules, validated and immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct KnowledgeBase {
    catalog: Vec<SymptomEntry>,
    catalog_position: [usize; SymptomId::COUNT],
    conditions: Vec<ConditionProfile>,
    red_flags: Vec<RedFlagRule>,
}

impl KnowledgeBase {
    /// Parse and validate a knowledge base from YAML text.
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        let data = KnowledgeBaseFile::parse(yaml)?;
        Self::from_data(data)
    }

    /// Read, parse and validate a knowledge-base file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let yaml =
            std::fs::read_to_string(path).map_err(|source| CoreError::KnowledgeBaseRead {
                path: path.to_path_buf(),
                source,
            })?;
        let kb = Self::from_yaml(&yaml)?;
        tracing::info!(
            path = %path.display(),
            conditions = kb.conditions.len(),
            red_flags = kb.red_flags.len(),
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// Validate parsed knowledge-base data.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found, as a [`CoreError`] configuration fault.
    pub fn from_data(data: KnowledgeBaseData) -> CoreResult<Self> {
        let KnowledgeBaseData {
            symptoms,
            conditions,
            red_flags,
        } = data;

        let mut catalog_position = [usize::MAX; SymptomId::COUNT];
        for (position, entry) in symptoms.iter().enumerate() {
            let slot = &mut catalog_position[entry.id.index()];
            if *slot != usize::MAX {
                return Err(CoreError::DuplicateCatalogEntry(entry.id));
            }
            *slot = position;
        }
        let catalogued = |id: SymptomId| catalog_position[id.index()] != usize::MAX;

        if conditions.is_empty() {
            return Err(CoreError::InvalidInput("knowledge base defines no conditions".into()));
        }

        let mut names = HashSet::new();
        let mut profiles = Vec::with_capacity(conditions.len());
        for condition in conditions {
            let name = condition.name.as_str().to_owned();
            if !names.insert(name.clone()) {
                return Err(CoreError::DuplicateCondition(name));
            }
            if condition.weights.is_empty() {
                return Err(CoreError::EmptyProfile(name));
            }

            let mut seen = [false; SymptomId::COUNT];
            for &(symptom, weight) in &condition.weights {
                if !catalogued(symptom) {
                    return Err(CoreError::UncataloguedSymptom {
                        context: format!("condition {name:?}"),
                        symptom,
                    });
                }
                if std::mem::replace(&mut seen[symptom.index()], true) {
                    return Err(CoreError::DuplicateWeight {
                        condition: name,
                        symptom,
                    });
                }
                if !weight.is_finite() || weight == 0.0 {
                    return Err(CoreError::InvalidWeight {
                        condition: name,
                        symptom,
                        weight,
                    });
                }
            }

            let possible_weight: f64 = condition.weights.iter().map(|(_, w)| w.max(0.0)).sum();
            if !possible_weight.is_finite() {
                return Err(CoreError::WeightOverflow(name));
            }
            let profile = ConditionProfile {
                name: condition.name,
                severity: condition.severity,
                advice: condition.advice,
                weights: condition.weights,
                possible_weight,
            };
            if profile.is_degenerate() {
                tracing::warn!(
                    condition = profile.name(),
                    "condition has no positive weights and will always score 0%"
                );
            }
            profiles.push(profile);
        }

        let mut rules = Vec::with_capacity(red_flags.len());
        for (index, flag) in red_flags.into_iter().enumerate() {
            if flag.symptoms.len() < 2 {
                return Err(CoreError::RedFlagTooSmall {
                    index,
                    len: flag.symptoms.len(),
                });
            }
            let mut seen = [false; SymptomId::COUNT];
            for &symptom in &flag.symptoms {
                if !catalogued(symptom) {
                    return Err(CoreError::UncataloguedSymptom {
                        context: format!("red flag #{index}"),
                        symptom,
                    });
                }
                if std::mem::replace(&mut seen[symptom.index()], true) {
                    return Err(CoreError::RedFlagDuplicate { index, symptom });
                }
            }
            rules.push(RedFlagRule {
                symptoms: flag.symptoms,
            });
        }

        if let Some(missing) = SymptomId::ALL.into_iter().find(|id| !catalogued(*id)) {
            return Err(CoreError::MissingQuestion(missing));
        }

        Ok(Self {
            catalog: symptoms,
            catalog_position,
            conditions: profiles,
            red_flags: rules,
        })
    }

    /// Symptom catalog in question order.
    pub fn catalog(&self) -> &[SymptomEntry] {
        &self.catalog
    }

    /// The question used to ask about `id`.
    pub fn question(&self, id: SymptomId) -> &str {
        self.catalog[self.catalog_position[id.index()]].question.as_str()
    }

    pub fn conditions(&self) -> &[ConditionProfile] {
        &self.conditions
    }

    pub fn condition(&self, name: &str) -> Option<&ConditionProfile> {
        self.conditions.iter().find(|c| c.name() == name)
    }

    pub fn red_flags(&self) -> &[RedFlagRule] {
        &self.red_flags
    }
}

/// The built-in knowledge base, parsed and validated on first use.
///
/// # Errors
///
/// Fails only if the compiled-in YAML is broken, which the test suite guards against.
pub fn builtin() -> CoreResult<&'static KnowledgeBase> {
    if let Some(kb) = BUILTIN.get() {
        return Ok(kb);
    }

    let kb = KnowledgeBase::from_yaml(BUILTIN_KNOWLEDGE_BASE_YAML)?;
    tracing::info!(
        conditions = kb.conditions.len(),
        red_flags = kb.red_flags.len(),
        "loaded built-in knowledge base"
    );
    // A concurrent first call may win the race; both values are identical.
    Ok(BUILTIN.get_or_init(|| kb))
}

/// Load the knowledge base selected by `config`.
pub fn load(config: &CoreConfig) -> CoreResult<Cow<'static, KnowledgeBase>> {
    match config.knowledge_base_path() {
        Some(path) => KnowledgeBase::from_path(path).map(Cow::Owned),
        None => builtin().map(Cow::Borrowed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A full catalog followed by the given conditions/red-flags YAML.
    fn kb_yaml(rest: &str) -> String {
        let mut yaml = String::from("symptoms:\n");
        for id in SymptomId::ALL {
            yaml.push_str(&format!("  - {{ id: {id}, question: \"Ask about {id}?\" }}\n"));
        }
        yaml.push_str(rest);
        yaml
    }

    const ONE_CONDITION: &str = r#"conditions:
  - name: Cold
    severity: low
    advice: "Rest."
    weights:
      - { symptom: cough, weight: 2 }
      - { symptom: fever, weight: 1 }
red_flags:
  - [fever, cough]
"#;

    #[test]
    fn builtin_knowledge_base_validates() {
        let kb = builtin().expect("builtin kb");
        assert_eq!(kb.catalog().len(), SymptomId::COUNT);
        assert_eq!(kb.conditions().len(), 15);
        assert_eq!(kb.red_flags().len(), 4);
        assert!(kb.conditions().iter().all(|c| !c.is_degenerate()));
    }

    #[test]
    fn builtin_is_initialised_once() {
        let first = builtin().expect("builtin kb");
        let second = builtin().expect("builtin kb");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn builtin_profile_details() {
        let kb = builtin().expect("builtin kb");
        let covid = kb.condition("COVID-19-like").expect("covid profile");
        assert_eq!(covid.severity(), Severity::High);
        assert_eq!(covid.weight(SymptomId::LossSmell), Some(2.0));
        assert_eq!(covid.weight(SymptomId::Rash), None);
        assert!((covid.possible_weight() - 10.5).abs() < 1e-9);

        assert_eq!(kb.question(SymptomId::NeckStiff), "Is your neck stiff?");
        assert_eq!(kb.red_flags()[0].to_string(), "high_fever, short_breath");
    }

    #[test]
    fn accepts_minimal_valid_file() {
        let kb = KnowledgeBase::from_yaml(&kb_yaml(ONE_CONDITION)).expect("valid");
        assert_eq!(kb.conditions().len(), 1);
        assert_eq!(kb.question(SymptomId::Cough), "Ask about cough?");
    }

    #[test]
    fn rejects_symptom_missing_from_catalog() {
        let yaml = kb_yaml(ONE_CONDITION)
            .replace("  - { id: cough, question: \"Ask about cough?\" }\n", "");
        match KnowledgeBase::from_yaml(&yaml).expect_err("cough not catalogued") {
            CoreError::UncataloguedSymptom { context, symptom } => {
                assert_eq!(context, "condition \"Cold\"");
                assert_eq!(symptom, SymptomId::Cough);
            }
            other => panic!("expected UncataloguedSymptom, got {other:?}"),
        }
    }

    #[test]
    fn rejects_red_flag_symptom_missing_from_catalog() {
        let rest = ONE_CONDITION.replace("[fever, cough]", "[fever, rash]");
        let yaml = kb_yaml(&rest).replace("  - { id: rash, question: \"Ask about rash?\" }\n", "");
        let err = KnowledgeBase::from_yaml(&yaml).expect_err("rash not catalogued");
        match err {
            CoreError::UncataloguedSymptom { context, symptom } => {
                assert_eq!(context, "red flag #0");
                assert_eq!(symptom, SymptomId::Rash);
            }
            other => panic!("expected UncataloguedSymptom, got {other:?}"),
        }
    }

    #[test]
    fn rejects_incomplete_catalog() {
        let yaml = kb_yaml(ONE_CONDITION)
            .replace("  - { id: wheezing, question: \"Ask about wheezing?\" }\n", "");
        let err = KnowledgeBase::from_yaml(&yaml).expect_err("wheezing missing");
        assert!(matches!(err, CoreError::MissingQuestion(SymptomId::Wheezing)));
    }

    #[test]
    fn rejects_duplicate_catalog_entry() {
        let yaml = kb_yaml(ONE_CONDITION).replacen(
            "symptoms:\n",
            "symptoms:\n  - { id: rash, question: \"Again?\" }\n",
            1,
        );
        let err = KnowledgeBase::from_yaml(&yaml).expect_err("duplicate");
        assert!(matches!(err, CoreError::DuplicateCatalogEntry(SymptomId::Rash)));
    }

    #[test]
    fn rejects_duplicate_condition_names() {
        let rest = format!(
            "{}{}",
            ONE_CONDITION.replace("red_flags:\n  - [fever, cough]\n", ""),
            ONE_CONDITION.replace("conditions:\n", "")
        );
        let err = KnowledgeBase::from_yaml(&kb_yaml(&rest)).expect_err("duplicate name");
        assert!(matches!(err, CoreError::DuplicateCondition(name) if name == "Cold"));
    }

    #[test]
    fn rejects_repeated_symptom_in_profile() {
        let rest = ONE_CONDITION.replace("symptom: fever, weight: 1", "symptom: cough, weight: 1");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&rest)).expect_err("duplicate weight");
        assert!(matches!(
            err,
            CoreError::DuplicateWeight { symptom: SymptomId::Cough, .. }
        ));
    }

    #[test]
    fn rejects_zero_and_non_finite_weights() {
        let zero = ONE_CONDITION.replace("weight: 1 }", "weight: 0 }");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&zero)).expect_err("zero weight");
        assert!(matches!(err, CoreError::InvalidWeight { symptom: SymptomId::Fever, .. }));

        let nan = ONE_CONDITION.replace("weight: 1 }", "weight: .nan }");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&nan)).expect_err("nan weight");
        assert!(matches!(err, CoreError::InvalidWeight { .. }));
    }

    #[test]
    fn rejects_overflowing_weights() {
        let rest = ONE_CONDITION
            .replace("weight: 2 }", "weight: 1.0e308 }")
            .replace("weight: 1 }", "weight: 1.0e308 }");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&rest)).expect_err("total overflows");
        assert!(matches!(err, CoreError::WeightOverflow(name) if name == "Cold"));
    }

    #[test]
    fn rejects_empty_profile() {
        let rest = r#"conditions:
  - name: Nothing
    severity: low
    advice: "None."
    weights: []
"#;
        let err = KnowledgeBase::from_yaml(&kb_yaml(rest)).expect_err("empty profile");
        assert!(matches!(err, CoreError::EmptyProfile(name) if name == "Nothing"));
    }

    #[test]
    fn rejects_knowledge_base_without_conditions() {
        let err =
            KnowledgeBase::from_yaml(&kb_yaml("conditions: []\n")).expect_err("no conditions");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_single_symptom_red_flag() {
        let rest = ONE_CONDITION.replace("[fever, cough]", "[fever]");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&rest)).expect_err("too small");
        assert!(matches!(err, CoreError::RedFlagTooSmall { index: 0, len: 1 }));
    }

    #[test]
    fn rejects_repeated_symptom_in_red_flag() {
        let rest = ONE_CONDITION.replace("[fever, cough]", "[fever, fever]");
        let err = KnowledgeBase::from_yaml(&kb_yaml(&rest)).expect_err("repeated");
        assert!(matches!(
            err,
            CoreError::RedFlagDuplicate { index: 0, symptom: SymptomId::Fever }
        ));
    }

    #[test]
    fn accepts_all_negative_profile_as_degenerate() {
        let rest = r#"conditions:
  - name: Corrective
    severity: low
    advice: "None."
    weights:
      - { symptom: cough, weight: -1 }
"#;
        let kb = KnowledgeBase::from_yaml(&kb_yaml(rest)).expect("degenerate is allowed");
        let profile = kb.condition("Corrective").expect("profile");
        assert!(profile.is_degenerate());
        assert_eq!(profile.possible_weight(), 0.0);
    }

    #[test]
    fn load_reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(kb_yaml(ONE_CONDITION).as_bytes()).expect("write kb");

        let config = CoreConfig::new(3, Some(file.path().to_path_buf())).expect("config");
        let kb = load(&config).expect("override loads");
        assert!(matches!(kb, Cow::Owned(_)));
        assert_eq!(kb.conditions().len(), 1);

        let kb = load(&CoreConfig::default()).expect("builtin loads");
        assert!(matches!(kb, Cow::Borrowed(_)));
    }

    #[test]
    fn load_reports_unreadable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = CoreConfig::new(3, Some(dir.path().join("absent.yaml"))).expect("config");
        let err = load(&config).expect_err("missing file");
        assert!(matches!(err, CoreError::KnowledgeBaseRead { .. }));
    }
}
