//! The five fixed competency categories and their guidance text.

use serde::{Deserialize, Serialize};

use crate::error::{EvalFormError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    BuildTrust,
    ResilientUnderStress,
    MovesFast,
    TechMastery,
    TeamPlayer,
}

impl CategoryKey {
    /// Display order.
    pub fn all() -> &'static [CategoryKey] {
        &[
            CategoryKey::BuildTrust,
            CategoryKey::ResilientUnderStress,
            CategoryKey::MovesFast,
            CategoryKey::TechMastery,
            CategoryKey::TeamPlayer,
        ]
    }

    fn index(&self) -> usize {
        match self {
            CategoryKey::BuildTrust => 0,
            CategoryKey::ResilientUnderStress => 1,
            CategoryKey::MovesFast => 2,
            CategoryKey::TechMastery => 3,
            CategoryKey::TeamPlayer => 4,
        }
    }

    /// Key used for the form control names and the submitted JSON.
    pub fn field_name(&self) -> &'static str {
        match self {
            CategoryKey::BuildTrust => "buildTrust",
            CategoryKey::ResilientUnderStress => "resilientUnderStress",
            CategoryKey::MovesFast => "movesFast",
            CategoryKey::TechMastery => "techMastery",
            CategoryKey::TeamPlayer => "teamPlayer",
        }
    }

    pub fn from_field_name(name: &str) -> Result<Self> {
        CategoryKey::all()
            .iter()
            .copied()
            .find(|k| k.field_name() == name)
            .ok_or_else(|| EvalFormError::UnknownField(name.to_string()))
    }

    pub fn definition(&self) -> &'static CategoryDefinition {
        &CATEGORIES[self.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: CategoryKey,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [&'static str],
}

pub static CATEGORIES: [CategoryDefinition; 5] = [
    CategoryDefinition {
        key: CategoryKey::BuildTrust,
        title: "Build Trust",
        description: "Demonstrates reliability, honesty, and integrity. Builds confidence through consistent actions and transparent communication.",
        questions: &[
            "Does the individual follow through on commitments and promises?",
            "Are they transparent and honest in their communication?",
            "Do they maintain confidentiality when appropriate?",
            "Do others feel comfortable sharing concerns or feedback with them?",
        ],
    },
    CategoryDefinition {
        key: CategoryKey::ResilientUnderStress,
        title: "Resilient Under Stress",
        description: "Maintains composure and effectiveness during challenging situations. Adapts quickly to changing circumstances and recovers from setbacks.",
        questions: &[
            "How does the individual handle pressure and tight deadlines?",
            "Do they remain calm and solution-focused during crises?",
            "How quickly do they recover from setbacks or failures?",
            "Can they maintain quality standards under stress?",
        ],
    },
    CategoryDefinition {
        key: CategoryKey::MovesFast,
        title: "Moves Fast",
        description: "Executes with speed and efficiency. Balances urgency with quality, making timely decisions and delivering results quickly.",
        questions: &[
            "Does the individual deliver work in a timely manner?",
            "Are they able to make quick, informed decisions?",
            "Do they prioritize effectively to maximize impact?",
            "How well do they balance speed with quality?",
        ],
    },
    CategoryDefinition {
        key: CategoryKey::TechMastery,
        title: "Tech Mastery",
        description: "Demonstrates deep technical expertise and continuous learning. Solves complex problems and contributes to technical excellence.",
        questions: &[
            "What is the depth of their technical knowledge in relevant areas?",
            "Do they stay current with industry best practices and technologies?",
            "Can they solve complex technical problems independently?",
            "How do they contribute to technical discussions and decisions?",
        ],
    },
    CategoryDefinition {
        key: CategoryKey::TeamPlayer,
        title: "Team Player",
        description: "Collaborates effectively, supports teammates, and contributes to team success. Puts team goals ahead of individual interests.",
        questions: &[
            "How well do they collaborate with others?",
            "Do they actively support and help teammates?",
            "Are they receptive to feedback and different perspectives?",
            "Do they contribute to a positive team culture?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_key() {
        for key in CategoryKey::all() {
            assert_eq!(key.definition().key, *key);
            assert_eq!(key.definition().questions.len(), 4);
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for key in CategoryKey::all() {
            assert_eq!(CategoryKey::from_field_name(key.field_name()).unwrap(), *key);
        }
        assert!(matches!(
            CategoryKey::from_field_name("kindness"),
            Err(EvalFormError::UnknownField(name)) if name == "kindness"
        ));
    }

    #[test]
    fn test_serde_uses_field_names() {
        let json = serde_json::to_string(&CategoryKey::ResilientUnderStress).unwrap();
        assert_eq!(json, "\"resilientUnderStress\"");
    }

    #[test]
    fn test_titles_in_display_order() {
        let titles: Vec<_> = CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Build Trust",
                "Resilient Under Stress",
                "Moves Fast",
                "Tech Mastery",
                "Team Player"
            ]
        );
    }
}
