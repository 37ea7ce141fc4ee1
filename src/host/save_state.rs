//! Tabletop Simulator saved-object format.
//!
//! The host addresses a card face with its own integer:
//!
//! ```text
//! host_card_id = (sheet_index + 1) * 100 + slot_index
//! ```
//!
//! where `sheet_index + 1` is the key into the object's `CustomDeck` table.
//! Face images for each sheet are rendered elsewhere; the caller supplies
//! their URLs through `HostExport`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::HostError;
use super::shape::CardShape;
use crate::cards::CardInstance;
use crate::core::{SheetSlot, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS};
use crate::deck::DeckObject;

/// Slots addressable per `CustomDeck` entry.
pub const HOST_SLOTS_PER_SHEET: u32 = 100;

/// Encode a slot as the host's card ID.
#[must_use]
pub const fn host_card_id(slot: SheetSlot) -> u64 {
    (slot.sheet_index as u64 + 1) * HOST_SLOTS_PER_SHEET as u64 + slot.slot_index as u64
}

/// Export options that only matter to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostExport {
    /// Face image URL per sheet, indexed by `sheet_index`.
    pub sheet_faces: Vec<String>,

    /// Back image URL. Defaults to the deck's back face asset.
    pub back_url: Option<String>,

    /// Grid width of each face image.
    pub columns: u32,

    /// Grid height of each face image.
    pub rows: u32,

    pub shape: CardShape,

    /// Show the back image for hidden cards.
    pub back_is_hidden: bool,

    /// Name shown on the deck object.
    pub nickname: String,
}

impl Default for HostExport {
    fn default() -> Self {
        Self {
            sheet_faces: Vec::new(),
            back_url: None,
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
            shape: CardShape::default(),
            back_is_hidden: true,
            nickname: String::new(),
        }
    }
}

impl HostExport {
    /// Create export options from sheet face URLs.
    #[must_use]
    pub fn new(sheet_faces: Vec<String>) -> Self {
        Self {
            sheet_faces,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_back_url(mut self, url: impl Into<String>) -> Self {
        self.back_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: CardShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }
}

/// Object position, rotation and scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transform {
    pub pos_x: f32,
    pub pos_y: f32,
    pub pos_z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
}

impl Default for Transform {
    fn default() -> Self {
        // Face down
        Self {
            pos_x: 0.0,
            pos_y: 0.0,
            pos_z: 0.0,
            rot_x: 0.0,
            rot_y: 180.0,
            rot_z: 180.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
        }
    }
}

/// One sheet as the host sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDeck {
    #[serde(rename = "FaceURL")]
    pub face_url: String,
    #[serde(rename = "BackURL")]
    pub back_url: String,
    #[serde(rename = "NumWidth")]
    pub num_width: u32,
    #[serde(rename = "NumHeight")]
    pub num_height: u32,
    #[serde(rename = "BackIsHidden")]
    pub back_is_hidden: bool,
    #[serde(rename = "UniqueBack")]
    pub unique_back: bool,
    #[serde(rename = "Type")]
    pub shape: u8,
}

/// A `Deck` or `Card` object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostObject {
    pub name: String,
    pub transform: Transform,
    pub nickname: String,
    #[serde(rename = "CardID", default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<u64>,
    #[serde(rename = "DeckIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub deck_ids: Vec<u64>,
    pub custom_deck: BTreeMap<u32, CustomDeck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained_objects: Vec<HostObject>,
}

/// Root of a saved-object file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveState {
    pub object_states: Vec<HostObject>,
}

impl SaveState {
    /// Convert a deck into the host format.
    ///
    /// A deck with exactly one card becomes a lone `Card` object; anything
    /// else becomes a `Deck` holding its cards in deck order.
    pub fn from_deck(deck: &DeckObject, export: &HostExport) -> Result<Self, HostError> {
        let grid_slots = export.columns.saturating_mul(export.rows);
        if deck.capacity > grid_slots {
            return Err(HostError::GridTooSmall {
                capacity: deck.capacity,
                columns: export.columns,
                rows: export.rows,
            });
        }
        if deck.capacity > HOST_SLOTS_PER_SHEET {
            return Err(HostError::SlotOutOfRange {
                slot_index: deck.capacity - 1,
            });
        }

        let back_url = export
            .back_url
            .clone()
            .unwrap_or_else(|| deck.back_face.asset().to_string());

        let mut sheets = BTreeMap::new();
        for sheet in &deck.sheets {
            let face_url = export
                .sheet_faces
                .get(sheet.sheet_index as usize)
                .ok_or(HostError::MissingSheetFace {
                    sheet_index: sheet.sheet_index,
                })?;
            sheets.insert(
                sheet.sheet_index + 1,
                CustomDeck {
                    face_url: face_url.clone(),
                    back_url: back_url.clone(),
                    num_width: export.columns,
                    num_height: export.rows,
                    back_is_hidden: export.back_is_hidden,
                    unique_back: false,
                    shape: export.shape.host_type(),
                },
            );
        }

        let cards: Vec<HostObject> = deck
            .cards
            .iter()
            .map(|card| card_object(card, &sheets))
            .collect();

        let root = match <[HostObject; 1]>::try_from(cards) {
            Ok([mut card]) => {
                // Keep the card's own name unless the export names it
                if !export.nickname.is_empty() {
                    card.nickname = export.nickname.clone();
                }
                card
            }
            Err(cards) => HostObject {
                name: "Deck".to_string(),
                transform: Transform::default(),
                nickname: export.nickname.clone(),
                card_id: None,
                deck_ids: cards.iter().filter_map(|c| c.card_id).collect(),
                custom_deck: sheets,
                contained_objects: cards,
            },
        };

        log::debug!(
            "exported {} card(s) across {} custom deck sheet(s)",
            deck.cards.len(),
            deck.sheets.len()
        );

        Ok(Self {
            object_states: vec![root],
        })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, HostError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn card_object(card: &CardInstance, sheets: &BTreeMap<u32, CustomDeck>) -> HostObject {
    let key = card.sheet_slot.sheet_index + 1;
    HostObject {
        name: "Card".to_string(),
        transform: Transform::default(),
        nickname: card.asset_id.to_string(),
        card_id: Some(host_card_id(card.sheet_slot)),
        deck_ids: Vec::new(),
        custom_deck: sheets
            .get(&key)
            .map(|sheet| BTreeMap::from([(key, sheet.clone())]))
            .unwrap_or_default(),
        contained_objects: Vec::new(),
    }
}
