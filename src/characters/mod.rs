// src/characters/mod.rs
// Roster of historical figures available for calls.

mod builtin;

use serde::Serialize;
use std::collections::HashMap;

/// A historical figure that can take a call.
///
/// All fields are fixed at process start; the roster never changes at
/// runtime.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub short_bio: String,
    /// Behavioral instructions used to steer generation.
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_description: Option<String>,
}

/// Immutable lookup table of available characters.
///
/// `builtin` is the hard-coded table; `from_characters` is the seam for a
/// file- or database-backed source, so callers never change when the
/// backing moves.
pub struct CharacterRoster {
    by_id: HashMap<String, usize>,
    ordered: Vec<Character>,
}

impl CharacterRoster {
    /// The built-in roster. This is the main extension point for future
    /// historical figures.
    pub fn builtin() -> Self {
        Self::from_characters(builtin::builtin_characters())
    }

    /// Build a roster from an explicit character list.
    ///
    /// Duplicate ids are a programming error in the source data, not a
    /// runtime condition, so they panic here at construction.
    pub fn from_characters(characters: Vec<Character>) -> Self {
        let mut by_id = HashMap::with_capacity(characters.len());
        for (idx, character) in characters.iter().enumerate() {
            let previous = by_id.insert(character.id.clone(), idx);
            assert!(
                previous.is_none(),
                "duplicate character id '{}'",
                character.id
            );
        }
        Self {
            by_id,
            ordered: characters,
        }
    }

    /// Exact-match lookup by id. Case-sensitive, no fuzzy matching.
    /// An unknown id is a normal not-present result.
    pub fn lookup(&self, id: &str) -> Option<&Character> {
        self.by_id.get(id).map(|&idx| &self.ordered[idx])
    }

    /// All characters in definition order. Presentation only.
    pub fn list_all(&self) -> &[Character] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
