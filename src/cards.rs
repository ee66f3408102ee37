//! Flip cards built from search records.
//!
//! Records are never read by position. Each result set is bound to a
//! [`CardSchema`] that names the field shown in every display role, and cards
//! are then filled by field name.

use crate::constants::{
    CARD_DEFAULT_SLOTS, CARD_LABEL_BACK_1, CARD_LABEL_BACK_2, CARD_LABEL_BACK_3, CARD_TITLE_FALLBACK,
};
use crate::models::{is_falsy, Record, SearchResult};
use serde::{Deserialize, Serialize};

/// Display roles a field can fill on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    Title,
    Subtitle1,
    Subtitle2,
    Back1,
    Back2,
    /// Rendered highlighted.
    Back3,
}

impl CardRole {
    pub const ALL: [CardRole; 6] = [
        CardRole::Title,
        CardRole::Subtitle1,
        CardRole::Subtitle2,
        CardRole::Back1,
        CardRole::Back2,
        CardRole::Back3,
    ];

    pub fn back_label(&self) -> Option<&'static str> {
        match self {
            CardRole::Back1 => Some(CARD_LABEL_BACK_1),
            CardRole::Back2 => Some(CARD_LABEL_BACK_2),
            CardRole::Back3 => Some(CARD_LABEL_BACK_3),
            _ => None,
        }
    }
}

/// Declared field-to-role mapping for one data source or result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSchema {
    pub title: Option<String>,
    pub subtitle_1: Option<String>,
    pub subtitle_2: Option<String>,
    pub back_1: Option<String>,
    pub back_2: Option<String>,
    pub back_3: Option<String>,
}

impl CardSchema {
    /// Bind the default layout slots to the names of a record's fields.
    pub fn from_field_order<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = names.into_iter().collect();
        let slot = |i: usize| names.get(CARD_DEFAULT_SLOTS[i]).map(|n| (*n).to_string());

        Self {
            title: slot(0),
            subtitle_1: slot(1),
            subtitle_2: slot(2),
            back_1: slot(3),
            back_2: slot(4),
            back_3: slot(5),
        }
    }

    /// Pick the schema for a result set: the one sent with it, then the
    /// configured one, then one derived from the first record's field order.
    pub fn resolve(supplied: Option<&CardSchema>, configured: Option<&CardSchema>, records: &[Record]) -> Self {
        if let Some(schema) = supplied.filter(|s| !s.is_empty()) {
            return schema.clone();
        }
        if let Some(schema) = configured.filter(|s| !s.is_empty()) {
            return schema.clone();
        }
        records
            .first()
            .map(|record| Self::from_field_order(record.field_names()))
            .unwrap_or_default()
    }

    pub fn field_for(&self, role: CardRole) -> Option<&str> {
        let field = match role {
            CardRole::Title => &self.title,
            CardRole::Subtitle1 => &self.subtitle_1,
            CardRole::Subtitle2 => &self.subtitle_2,
            CardRole::Back1 => &self.back_1,
            CardRole::Back2 => &self.back_2,
            CardRole::Back3 => &self.back_3,
        };
        field.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        CardRole::ALL.iter().all(|role| self.field_for(*role).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackField {
    pub label: &'static str,
    pub value: String,
    pub highlighted: bool,
}

/// A two-faced result card. Flip state is local to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle_1: Option<String>,
    pub subtitle_2: Option<String>,
    pub back: Vec<BackField>,
    pub flipped: bool,
}

impl Card {
    pub fn from_record(record: &Record, schema: &CardSchema) -> Self {
        let text = |role: CardRole| schema.field_for(role).and_then(|name| record.text(name));

        let title_field = schema.field_for(CardRole::Title).and_then(|name| record.get(name));
        let title = if is_falsy(title_field) {
            CARD_TITLE_FALLBACK.to_string()
        } else {
            text(CardRole::Title).unwrap_or_else(|| CARD_TITLE_FALLBACK.to_string())
        };

        let back = [CardRole::Back1, CardRole::Back2, CardRole::Back3]
            .into_iter()
            .filter_map(|role| {
                let value = text(role)?;
                Some(BackField {
                    label: role.back_label().unwrap_or_default(),
                    value,
                    highlighted: role == CardRole::Back3,
                })
            })
            .collect();

        Self {
            title,
            subtitle_1: text(CardRole::Subtitle1),
            subtitle_2: text(CardRole::Subtitle2),
            back,
            flipped: false,
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }
}

/// Build one card per record, in order.
pub fn build_cards(result: &SearchResult, configured: Option<&CardSchema>) -> Vec<Card> {
    let schema = CardSchema::resolve(result.schema.as_ref(), configured, &result.records);
    result
        .records
        .iter()
        .map(|record| Card::from_record(record, &schema))
        .collect()
}
