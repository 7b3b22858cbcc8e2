//! Red-flag combination matching.
//!
//! A rule triggers when every symptom in it is present. Detection never looks at scores: a
//! condition can score 100% without a red flag, and a red flag can fire while every score is
//! low.

use crate::answers::SymptomAnswers;
use crate::knowledge::{KnowledgeBase, RedFlagRule};

/// Every triggered rule, in knowledge-base order.
///
/// Rules are reported individually even when they overlap.
pub fn detect<'kb>(kb: &'kb KnowledgeBase, answers: &SymptomAnswers) -> Vec<&'kb RedFlagRule> {
    kb.red_flags()
        .iter()
        .filter(|rule| rule.is_triggered(answers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::builtin;
    use crate::scorer::score;
    use rogo_types::SymptomId;

    fn kb() -> &'static KnowledgeBase {
        builtin().expect("builtin kb")
    }

    #[test]
    fn nothing_triggers_without_symptoms() {
        assert!(detect(kb(), &SymptomAnswers::new()).is_empty());
    }

    #[test]
    fn high_fever_with_short_breath_triggers_only_that_rule() {
        let answers = SymptomAnswers::with_present([SymptomId::HighFever, SymptomId::ShortBreath]);
        let triggered = detect(kb(), &answers);

        assert_eq!(triggered.len(), 1);
        assert_eq!(
            triggered[0].symptoms(),
            &[SymptomId::HighFever, SymptomId::ShortBreath]
        );
        assert!(!triggered.iter().any(|r| r.contains(SymptomId::NeckStiff)));
    }

    #[test]
    fn partial_combination_does_not_trigger() {
        let answers =
            SymptomAnswers::with_present([SymptomId::DehydrationSigns, SymptomId::Vomiting]);
        assert!(detect(kb(), &answers).is_empty());

        let answers = SymptomAnswers::with_present([
            SymptomId::DehydrationSigns,
            SymptomId::Vomiting,
            SymptomId::Diarrhea,
        ]);
        let triggered = detect(kb(), &answers);
        assert_eq!(triggered.len(), 1);
        assert_eq!(triggered[0].symptoms().len(), 3);
    }

    #[test]
    fn overlapping_rules_are_reported_separately_in_order() {
        let answers = SymptomAnswers::with_present([
            SymptomId::HighFever,
            SymptomId::ShortBreath,
            SymptomId::ChestPain,
            SymptomId::NeckStiff,
        ]);
        let triggered: Vec<String> = detect(kb(), &answers)
            .iter()
            .map(|r| r.to_string())
            .collect();
        assert_eq!(
            triggered,
            vec![
                "high_fever, short_breath",
                "chest_pain, short_breath",
                "neck_stiff, high_fever",
            ]
        );
    }

    #[test]
    fn detection_is_independent_of_scores() {
        // Full Migraine profile: top score, no red flag.
        let answers = SymptomAnswers::with_present([
            SymptomId::Headache,
            SymptomId::MigraineAura,
            SymptomId::Photophobia,
            SymptomId::Nausea,
        ]);
        assert_eq!(score(kb(), &answers).percentage("Migraine"), Some(100.0));
        assert!(detect(kb(), &answers).is_empty());
    }

    #[test]
    fn detection_is_idempotent() {
        let answers = SymptomAnswers::with_present([SymptomId::ChestPain, SymptomId::ShortBreath]);
        assert_eq!(detect(kb(), &answers), detect(kb(), &answers));
    }
}
