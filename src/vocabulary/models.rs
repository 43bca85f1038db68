//! Data models for vocabulary sets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Highest HSK level accepted
pub const MAX_HSK_LEVEL: u8 = 6;

/// A single vocabulary flashcard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabCard {
    pub id: Uuid,
    pub character: String,
    pub pinyin: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl VocabCard {
    pub fn new(character: String, pinyin: String, translation: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            character,
            pinyin,
            translation,
            example: None,
        }
    }

    /// Builder method to add an example sentence
    pub fn with_example(mut self, example: String) -> Self {
        self.example = Some(example);
        self
    }
}

/// Genre-based vocabulary collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Genre {
    Academic,
    Press,
    Fiction,
}

impl Genre {
    pub fn name(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Press => "Press",
            Self::Fiction => "Fiction",
        }
    }
}

/// Which vocabulary set a ledger or session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SetKind {
    Hsk { level: u8 },
    Genre { genre: Genre },
}

impl SetKind {
    /// Stable identifier used in storage keys ("hsk1", "academic", ...)
    pub fn storage_key(&self) -> String {
        match self {
            Self::Hsk { level } => format!("hsk{}", level),
            Self::Genre { genre } => genre.name().to_lowercase(),
        }
    }

    /// Default difficulty rating for sets of this kind
    pub fn default_difficulty(&self) -> u8 {
        match self {
            Self::Hsk { level } => *level,
            Self::Genre { genre: Genre::Academic } => 3,
            Self::Genre { genre: Genre::Press } => 4,
            Self::Genre { genre: Genre::Fiction } => 5,
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hsk { level } => write!(f, "HSK {}", level),
            Self::Genre { genre } => f.write_str(genre.name()),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseSetKindError {
    #[error("Unknown vocabulary set: {0}")]
    Unknown(String),

    #[error("HSK level must be between 1 and 6, got {0}")]
    LevelOutOfRange(u8),
}

impl FromStr for SetKind {
    type Err = ParseSetKindError;

    /// Accepts "hsk3", "HSK 3", "academic", "Press", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if let Some(level) = normalized.strip_prefix("hsk") {
            let level: u8 = level
                .parse()
                .map_err(|_| ParseSetKindError::Unknown(s.to_string()))?;
            if level == 0 || level > MAX_HSK_LEVEL {
                return Err(ParseSetKindError::LevelOutOfRange(level));
            }
            return Ok(Self::Hsk { level });
        }

        let genre = match normalized.as_str() {
            "academic" => Genre::Academic,
            "press" => Genre::Press,
            "fiction" => Genre::Fiction,
            _ => return Err(ParseSetKindError::Unknown(s.to_string())),
        };
        Ok(Self::Genre { genre })
    }
}

/// An ordered collection of cards studied together
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularySet {
    pub id: Uuid,
    pub kind: SetKind,
    pub name: String,
    pub difficulty: u8,
    #[serde(default)]
    pub cards: Vec<VocabCard>,
}

impl VocabularySet {
    pub fn new(kind: SetKind, cards: Vec<VocabCard>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: kind.to_string(),
            difficulty: kind.default_difficulty(),
            cards,
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card(&self, id: Uuid) -> Option<&VocabCard> {
        self.cards.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_kind() {
        assert_eq!("hsk1".parse::<SetKind>(), Ok(SetKind::Hsk { level: 1 }));
        assert_eq!("HSK 4".parse::<SetKind>(), Ok(SetKind::Hsk { level: 4 }));
        assert_eq!(
            "Fiction".parse::<SetKind>(),
            Ok(SetKind::Genre { genre: Genre::Fiction })
        );
        assert_eq!(
            "hsk7".parse::<SetKind>(),
            Err(ParseSetKindError::LevelOutOfRange(7))
        );
        assert_eq!(
            "hsk0".parse::<SetKind>(),
            Err(ParseSetKindError::LevelOutOfRange(0))
        );
        assert!(matches!(
            "poetry".parse::<SetKind>(),
            Err(ParseSetKindError::Unknown(_))
        ));
    }

    #[test]
    fn test_storage_key_round_trips_through_parse() {
        let kinds = [
            SetKind::Hsk { level: 2 },
            SetKind::Genre { genre: Genre::Academic },
            SetKind::Genre { genre: Genre::Press },
        ];
        for kind in kinds {
            assert_eq!(kind.storage_key().parse::<SetKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_set_defaults_from_kind() {
        let set = VocabularySet::new(
            SetKind::Genre { genre: Genre::Press },
            vec![VocabCard::new(
                "新闻".to_string(),
                "xīnwén".to_string(),
                "news".to_string(),
            )],
        );
        assert_eq!(set.name, "Press");
        assert_eq!(set.difficulty, 4);
        assert_eq!(set.card_count(), 1);

        let hsk = VocabularySet::new(SetKind::Hsk { level: 3 }, Vec::new());
        assert_eq!(hsk.name, "HSK 3");
        assert_eq!(hsk.difficulty, 3);
    }

    #[test]
    fn test_card_lookup() {
        let card = VocabCard::new("学习".to_string(), "xuéxí".to_string(), "study".to_string())
            .with_example("我喜欢学习中文。".to_string());
        let id = card.id;
        let set = VocabularySet::new(SetKind::Hsk { level: 1 }, vec![card]);
        assert_eq!(set.card(id).map(|c| c.translation.as_str()), Some("study"));
        assert!(set.card(Uuid::new_v4()).is_none());
    }
}
