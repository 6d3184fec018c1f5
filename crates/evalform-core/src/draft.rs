use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;
use crate::error::{EvalFormError, Result};
use crate::rating::{self, Rating};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(with = "rating::optional")]
    pub rating: Option<Rating>,
    pub comments: String,
}

/// The in-progress evaluation. Field order matches display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDraft {
    pub coach_name: String,
    pub evaluatee_name: String,
    pub build_trust: CategoryResponse,
    pub resilient_under_stress: CategoryResponse,
    pub moves_fast: CategoryResponse,
    pub tech_mastery: CategoryResponse,
    pub team_player: CategoryResponse,
    pub overall_comments: String,
}

/// A single-leaf edit of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    CoachName(String),
    EvaluateeName(String),
    OverallComments(String),
    Rating(CategoryKey, Rating),
    Comments(CategoryKey, String),
}

impl FieldUpdate {
    /// Builds an update from a form control name such as `coachName` or
    /// `techMastery.rating`.
    pub fn parse(path: &str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();

        let Some((section, leaf)) = path.split_once('.') else {
            return match path {
                "coachName" => Ok(FieldUpdate::CoachName(value)),
                "evaluateeName" => Ok(FieldUpdate::EvaluateeName(value)),
                "overallComments" => Ok(FieldUpdate::OverallComments(value)),
                _ => Err(EvalFormError::UnknownField(path.to_string())),
            };
        };

        let key = CategoryKey::from_field_name(section)
            .map_err(|_| EvalFormError::UnknownField(path.to_string()))?;

        match leaf {
            "rating" => Ok(FieldUpdate::Rating(key, Rating::from_value(&value)?)),
            "comments" => Ok(FieldUpdate::Comments(key, value)),
            _ => Err(EvalFormError::UnknownField(path.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    CoachName,
    EvaluateeName,
    Rating(CategoryKey),
}

impl RequiredField {
    pub fn label(&self) -> String {
        match self {
            RequiredField::CoachName => "Your Name".to_string(),
            RequiredField::EvaluateeName => "Who are you evaluating?".to_string(),
            RequiredField::Rating(key) => format!("{} rating", key.definition().title),
        }
    }
}

impl EvaluationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, key: CategoryKey) -> &CategoryResponse {
        match key {
            CategoryKey::BuildTrust => &self.build_trust,
            CategoryKey::ResilientUnderStress => &self.resilient_under_stress,
            CategoryKey::MovesFast => &self.moves_fast,
            CategoryKey::TechMastery => &self.tech_mastery,
            CategoryKey::TeamPlayer => &self.team_player,
        }
    }

    pub fn category_mut(&mut self, key: CategoryKey) -> &mut CategoryResponse {
        match key {
            CategoryKey::BuildTrust => &mut self.build_trust,
            CategoryKey::ResilientUnderStress => &mut self.resilient_under_stress,
            CategoryKey::MovesFast => &mut self.moves_fast,
            CategoryKey::TechMastery => &mut self.tech_mastery,
            CategoryKey::TeamPlayer => &mut self.team_player,
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::CoachName(v) => self.coach_name = v,
            FieldUpdate::EvaluateeName(v) => self.evaluatee_name = v,
            FieldUpdate::OverallComments(v) => self.overall_comments = v,
            FieldUpdate::Rating(key, r) => self.category_mut(key).rating = Some(r),
            FieldUpdate::Comments(key, v) => self.category_mut(key).comments = v,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.coach_name.is_empty() {
            missing.push(RequiredField::CoachName);
        }
        if self.evaluatee_name.is_empty() {
            missing.push(RequiredField::EvaluateeName);
        }
        missing.extend(
            CategoryKey::all()
                .iter()
                .filter(|k| self.category(**k).rating.is_none())
                .map(|k| RequiredField::Rating(*k)),
        );
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EvaluationDraft {
        let mut draft = EvaluationDraft::new();
        draft.apply(FieldUpdate::CoachName("Ana".into()));
        draft.apply(FieldUpdate::EvaluateeName("Sam".into()));
        for key in CategoryKey::all() {
            draft.apply(FieldUpdate::Rating(*key, Rating::Four));
        }
        draft
    }

    #[test]
    fn test_update_touches_only_target_leaf() {
        let before = filled();

        let mut after = before.clone();
        after.apply(FieldUpdate::Comments(CategoryKey::MovesFast, "ships daily".into()));

        assert_eq!(after.moves_fast.comments, "ships daily");
        assert_eq!(after.moves_fast.rating, Some(Rating::Four));
        for key in CategoryKey::all().iter().filter(|k| **k != CategoryKey::MovesFast) {
            assert_eq!(after.category(*key), before.category(*key));
        }
        assert_eq!(after.coach_name, before.coach_name);
        assert_eq!(after.evaluatee_name, before.evaluatee_name);
        assert_eq!(after.overall_comments, before.overall_comments);
    }

    #[test]
    fn test_every_top_level_field_reads_back() {
        let mut draft = filled();
        draft.apply(FieldUpdate::OverallComments("great quarter".into()));
        draft.apply(FieldUpdate::CoachName(String::new()));

        assert_eq!(draft.overall_comments, "great quarter");
        assert_eq!(draft.coach_name, "");
        assert_eq!(draft.evaluatee_name, "Sam");
    }

    #[test]
    fn test_last_rating_wins() {
        let mut draft = EvaluationDraft::new();
        draft.apply(FieldUpdate::Rating(CategoryKey::TechMastery, Rating::Three));
        draft.apply(FieldUpdate::Rating(CategoryKey::TechMastery, Rating::Five));
        assert_eq!(draft.tech_mastery.rating, Some(Rating::Five));
    }

    #[test]
    fn test_missing_fields_in_display_order() {
        let mut draft = EvaluationDraft::new();
        draft.apply(FieldUpdate::CoachName("Ana".into()));
        draft.apply(FieldUpdate::Rating(CategoryKey::BuildTrust, Rating::Two));

        assert_eq!(
            draft.missing_fields(),
            vec![
                RequiredField::EvaluateeName,
                RequiredField::Rating(CategoryKey::ResilientUnderStress),
                RequiredField::Rating(CategoryKey::MovesFast),
                RequiredField::Rating(CategoryKey::TechMastery),
                RequiredField::Rating(CategoryKey::TeamPlayer),
            ]
        );
        assert!(filled().is_complete());
    }

    #[test]
    fn test_comments_never_required() {
        let draft = filled();
        assert!(draft.overall_comments.is_empty());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_parse_dotted_paths() {
        assert_eq!(
            FieldUpdate::parse("techMastery.rating", "3").unwrap(),
            FieldUpdate::Rating(CategoryKey::TechMastery, Rating::Three)
        );
        assert_eq!(
            FieldUpdate::parse("teamPlayer.comments", "kind").unwrap(),
            FieldUpdate::Comments(CategoryKey::TeamPlayer, "kind".into())
        );
        assert_eq!(
            FieldUpdate::parse("evaluateeName", "Sam").unwrap(),
            FieldUpdate::EvaluateeName("Sam".into())
        );
        assert!(matches!(
            FieldUpdate::parse("techMastery.score", "3"),
            Err(EvalFormError::UnknownField(p)) if p == "techMastery.score"
        ));
        assert!(matches!(
            FieldUpdate::parse("kindness.rating", "3"),
            Err(EvalFormError::UnknownField(_))
        ));
        assert!(matches!(
            FieldUpdate::parse("movesFast.rating", "7"),
            Err(EvalFormError::InvalidRating(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let mut draft = EvaluationDraft::new();
        draft.apply(FieldUpdate::CoachName("Ana".into()));
        draft.apply(FieldUpdate::Rating(CategoryKey::BuildTrust, Rating::Five));

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["coachName"], "Ana");
        assert_eq!(value["buildTrust"]["rating"], "5");
        assert_eq!(value["teamPlayer"]["rating"], "");
        assert_eq!(value["overallComments"], "");

        let back: EvaluationDraft = serde_json::from_value(value).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_missing_fields_error_lists_labels() {
        let err = EvalFormError::MissingFields(vec![
            RequiredField::EvaluateeName,
            RequiredField::Rating(CategoryKey::MovesFast),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: Who are you evaluating?, Moves Fast rating"
        );
    }
}
