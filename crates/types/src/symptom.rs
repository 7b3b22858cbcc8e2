//! The closed symptom enumeration.
//!
//! Every symptom the checker can ask about has exactly one variant here. The string form
//! (`fever`, `high_fever`, ...) is the stable identifier used in knowledge-base files, on the
//! command line and in JSON output.

use crate::ParseError;
use std::fmt;
use std::str::FromStr;

/// A stable symptom identifier.
///
/// The discriminant doubles as an index into fixed-size answer tables, so variants are
/// numbered densely from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymptomId {
    Fever,
    HighFever,
    Chills,
    Cough,
    DryCough,
    SoreThroat,
    RunnyNose,
    Sneezing,
    Headache,
    MigraineAura,
    BodyAche,
    Fatigue,
    ShortBreath,
    ChestPain,
    Wheezing,
    Diarrhea,
    Vomiting,
    Nausea,
    AbdominalPain,
    LossSmell,
    Rash,
    EyePain,
    JointPain,
    DehydrationSigns,
    UrinateOften,
    ExcessThirst,
    WeightLoss,
    BloodInStool,
    RecentTravel,
    MosquitoBite,
    NeckStiff,
    Photophobia,
    AgeOver60,
    ChronicCondition,
}

impl SymptomId {
    /// Number of symptoms in the enumeration.
    pub const COUNT: usize = 34;

    /// Every symptom, in declaration order.
    pub const ALL: [SymptomId; Self::COUNT] = [
        SymptomId::Fever,
        SymptomId::HighFever,
        SymptomId::Chills,
        SymptomId::Cough,
        SymptomId::DryCough,
        SymptomId::SoreThroat,
        SymptomId::RunnyNose,
        SymptomId::Sneezing,
        SymptomId::Headache,
        SymptomId::MigraineAura,
        SymptomId::BodyAche,
        SymptomId::Fatigue,
        SymptomId::ShortBreath,
        SymptomId::ChestPain,
        SymptomId::Wheezing,
        SymptomId::Diarrhea,
        SymptomId::Vomiting,
        SymptomId::Nausea,
        SymptomId::AbdominalPain,
        SymptomId::LossSmell,
        SymptomId::Rash,
        SymptomId::EyePain,
        SymptomId::JointPain,
        SymptomId::DehydrationSigns,
        SymptomId::UrinateOften,
        SymptomId::ExcessThirst,
        SymptomId::WeightLoss,
        SymptomId::BloodInStool,
        SymptomId::RecentTravel,
        SymptomId::MosquitoBite,
        SymptomId::NeckStiff,
        SymptomId::Photophobia,
        SymptomId::AgeOver60,
        SymptomId::ChronicCondition,
    ];

    /// Dense index of this symptom, in `0..SymptomId::COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The stable string identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            SymptomId::Fever => "fever",
            SymptomId::HighFever => "high_fever",
            SymptomId::Chills => "chills",
            SymptomId::Cough => "cough",
            SymptomId::DryCough => "dry_cough",
            SymptomId::SoreThroat => "sore_throat",
            SymptomId::RunnyNose => "runny_nose",
            SymptomId::Sneezing => "sneezing",
            SymptomId::Headache => "headache",
            SymptomId::MigraineAura => "migraine_aura",
            SymptomId::BodyAche => "body_ache",
            SymptomId::Fatigue => "fatigue",
            SymptomId::ShortBreath => "short_breath",
            SymptomId::ChestPain => "chest_pain",
            SymptomId::Wheezing => "wheezing",
            SymptomId::Diarrhea => "diarrhea",
            SymptomId::Vomiting => "vomiting",
            SymptomId::Nausea => "nausea",
            SymptomId::AbdominalPain => "abdominal_pain",
            SymptomId::LossSmell => "loss_smell",
            SymptomId::Rash => "rash",
            SymptomId::EyePain => "eye_pain",
            SymptomId::JointPain => "joint_pain",
            SymptomId::DehydrationSigns => "dehydration_signs",
            SymptomId::UrinateOften => "urinate_often",
            SymptomId::ExcessThirst => "excess_thirst",
            SymptomId::WeightLoss => "weight_loss",
            SymptomId::BloodInStool => "blood_in_stool",
            SymptomId::RecentTravel => "recent_travel",
            SymptomId::MosquitoBite => "mosquito_bite",
            SymptomId::NeckStiff => "neck_stiff",
            SymptomId::Photophobia => "photophobia",
            SymptomId::AgeOver60 => "age_over_60",
            SymptomId::ChronicCondition => "chronic_condition",
        }
    }
}

impl FromStr for SymptomId {
    type Err = ParseError;

    /// Parses the exact string identifier. Surrounding whitespace is ignored; case is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SymptomId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownSymptom(wanted.to_owned()))
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for SymptomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for SymptomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_match_all() {
        for (position, id) in SymptomId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position, "{id} out of place");
        }
    }

    #[test]
    fn string_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in SymptomId::ALL {
            assert!(seen.insert(id.as_str()), "duplicate id {id}");
        }
    }

    #[test]
    fn parses_every_identifier_back() {
        for id in SymptomId::ALL {
            assert_eq!(id.as_str().parse::<SymptomId>(), Ok(id));
        }
        assert_eq!(" age_over_60 ".parse::<SymptomId>(), Ok(SymptomId::AgeOver60));
    }

    #[test]
    fn rejects_unknown_and_miscased_ids() {
        assert_eq!(
            "sore_feet".parse::<SymptomId>(),
            Err(ParseError::UnknownSymptom("sore_feet".into()))
        );
        assert!("Fever".parse::<SymptomId>().is_err());
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&SymptomId::LossSmell).expect("serialize");
        assert_eq!(json, "\"loss_smell\"");
        let err = serde_json::from_str::<SymptomId>("\"nope\"").expect_err("unknown id");
        assert!(err.to_string().contains("unknown symptom id"));
    }
}
