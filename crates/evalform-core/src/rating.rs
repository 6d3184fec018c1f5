use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EvalFormError, Result};

/// CSS class tokens for one point on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStyle {
    pub unselected: &'static str,
    pub selected: &'static str,
}

impl RatingStyle {
    pub fn class_for(&self, is_selected: bool) -> &'static str {
        if is_selected {
            self.selected
        } else {
            self.unselected
        }
    }
}

static STYLES: [RatingStyle; 5] = [
    RatingStyle {
        unselected: "rating-option tone-rose",
        selected: "rating-option tone-rose selected",
    },
    RatingStyle {
        unselected: "rating-option tone-amber",
        selected: "rating-option tone-amber selected",
    },
    RatingStyle {
        unselected: "rating-option tone-blue",
        selected: "rating-option tone-blue selected",
    },
    RatingStyle {
        unselected: "rating-option tone-indigo",
        selected: "rating-option tone-indigo selected",
    },
    RatingStyle {
        unselected: "rating-option tone-emerald",
        selected: "rating-option tone-emerald selected",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub fn all() -> &'static [Rating] {
        &[
            Rating::One,
            Rating::Two,
            Rating::Three,
            Rating::Four,
            Rating::Five,
        ]
    }

    fn index(&self) -> usize {
        match self {
            Rating::One => 0,
            Rating::Two => 1,
            Rating::Three => 2,
            Rating::Four => 3,
            Rating::Five => 4,
        }
    }

    /// Form value as submitted by the radio input.
    pub fn value(&self) -> &'static str {
        match self {
            Rating::One => "1",
            Rating::Two => "2",
            Rating::Three => "3",
            Rating::Four => "4",
            Rating::Five => "5",
        }
    }

    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::One => "Getting Started",
            Rating::Two => "On the Way",
            Rating::Three => "Doing Great",
            Rating::Four => "Really Strong",
            Rating::Five => "Absolutely Amazing",
        }
    }

    pub fn style(&self) -> &'static RatingStyle {
        &STYLES[self.index()]
    }

    pub fn from_value(value: &str) -> Result<Self> {
        match value {
            "1" => Ok(Rating::One),
            "2" => Ok(Rating::Two),
            "3" => Ok(Rating::Three),
            "4" => Ok(Rating::Four),
            "5" => Ok(Rating::Five),
            other => Err(EvalFormError::InvalidRating(other.to_string())),
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rating::from_value(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serializes an unset rating as `""`, the value an unchecked radio group submits.
pub(crate) mod optional {
    use super::Rating;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        rating: &Option<Rating>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(rating.map(|r| r.value()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Rating>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Rating::from_value(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
