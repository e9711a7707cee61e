//! Validated character roster.
//!
//! [`CharacterRegistry`] is the content side of the sprite contract: it turns a
//! parsed [`RosterFile`] into per-character [`SpriteSheet`]s plus the glyph art
//! the terminal frontend draws, and serves them through [`AssetProvider`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use game_core::{
    AssetError, AssetProvider, CellSize, CharacterId, CombatState, FrameTable, SpriteSheet,
};

use crate::loaders::roster::GlyphFrame;
use crate::loaders::{LoadResult, RosterFile, RosterLoader, Tint};

type ArtSet = HashMap<CombatState, Vec<GlyphFrame>>;

/// One fighter as the frontend sees it.
#[derive(Clone, Debug)]
pub struct RegisteredCharacter {
    pub name: String,
    pub tint: Tint,
    sheet: SpriteSheet,
    art: Arc<ArtSet>,
}

impl RegisteredCharacter {
    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    /// Glyph rows for `frame` of `state`'s strip, or `None` when out of range.
    pub fn frame_art(&self, state: CombatState, frame: u32) -> Option<&[String]> {
        self.art
            .get(&state)
            .and_then(|frames| frames.get(frame as usize))
            .map(Vec::as_slice)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    order: Vec<CharacterId>,
    characters: HashMap<CharacterId, RegisteredCharacter>,
}

impl CharacterRegistry {
    /// Registry over the roster compiled into the binary.
    pub fn builtin() -> LoadResult<Self> {
        let roster = RosterLoader::parse(RosterLoader::BUILTIN)?;
        Ok(Self::from_roster(roster)?)
    }

    /// Registry over a roster file on disk.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let roster = RosterLoader::load(path)?;
        let registry = Self::from_roster(roster)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), fighters = registry.len(), "roster loaded");
        Ok(registry)
    }

    /// Validates a parsed roster.
    ///
    /// Every strip must be declared with at least one frame, every character's
    /// art set must exist, and each art set must hold exactly the declared
    /// number of frames per strip.
    pub fn from_roster(roster: RosterFile) -> Result<Self, AssetError> {
        let frames = FrameTable::try_from_entries(roster.strips.iter().map(|(s, n)| (*s, *n)))?;
        let cell = roster.cell;

        let mut art_sets: HashMap<String, Arc<ArtSet>> = HashMap::new();
        for (name, set) in roster.art {
            art_sets.insert(name, Arc::new(set));
        }

        let mut registry = Self::default();
        for entry in roster.characters {
            let art = art_sets
                .get(&entry.art)
                .cloned()
                .ok_or_else(|| AssetError::Decode {
                    id: entry.id.clone(),
                    reason: format!("no art set named '{}'", entry.art),
                })?;

            check_art(&entry.id, &frames, &art)?;

            let sheet = SpriteSheet::new(entry.id.clone(), frames, cell);
            registry.insert(RegisteredCharacter {
                name: entry.name,
                tint: entry.tint,
                sheet,
                art,
            });
        }

        Ok(registry)
    }

    fn insert(&mut self, character: RegisteredCharacter) {
        let id = character.sheet.id.clone();
        if self.characters.insert(id.clone(), character).is_none() {
            self.order.push(id);
        } else {
            tracing::warn!(%id, "duplicate roster entry, later one wins");
        }
    }

    pub fn get(&self, id: &CharacterId) -> Option<&RegisteredCharacter> {
        self.characters.get(id)
    }

    /// Roster identifiers in file order.
    pub fn ids(&self) -> impl Iterator<Item = &CharacterId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cell size shared by the roster, if any fighter is registered.
    pub fn cell(&self) -> Option<CellSize> {
        self.order
            .first()
            .and_then(|id| self.characters.get(id))
            .map(|character| character.sheet.cell)
    }
}

fn check_art(id: &CharacterId, frames: &FrameTable, art: &ArtSet) -> Result<(), AssetError> {
    for (state, declared) in frames.iter() {
        let decoded = art.get(&state).map_or(0, |strip| strip.len() as u32);
        if decoded != declared {
            return Err(AssetError::FrameMismatch {
                id: id.clone(),
                state,
                declared,
                decoded,
            });
        }
    }
    Ok(())
}

impl AssetProvider for CharacterRegistry {
    fn sprite_sheet(&self, id: &CharacterId) -> Result<SpriteSheet, AssetError> {
        self.get(id)
            .map(|character| character.sheet.clone())
            .ok_or_else(|| AssetError::UnknownCharacter { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_roster_has_four_standard_fighters() {
        let registry = CharacterRegistry::builtin().unwrap();
        let ids: Vec<&str> = registry.ids().map(CharacterId::as_str).collect();
        assert_eq!(ids, ["cat1", "cat2", "dog1", "dog2"]);

        for id in registry.ids() {
            let sheet = registry.sprite_sheet(id).unwrap();
            assert_eq!(sheet.frames, FrameTable::standard());
            assert_eq!(sheet.cell, CellSize::STANDARD);
        }
    }

    #[test]
    fn frame_art_follows_strip_lengths() {
        let registry = CharacterRegistry::builtin().unwrap();
        let cat = registry.get(&CharacterId::new("cat1")).unwrap();

        assert_eq!(cat.name, "Tabby");
        assert!(cat.frame_art(CombatState::Walk, 5).is_some());
        assert!(cat.frame_art(CombatState::Hurt, 1).is_some());
        assert!(cat.frame_art(CombatState::Hurt, 2).is_none());
    }

    #[test]
    fn unknown_character_is_rejected() {
        let registry = CharacterRegistry::builtin().unwrap();
        let err = registry
            .sprite_sheet(&CharacterId::new("hamster"))
            .unwrap_err();
        assert!(matches!(err, AssetError::UnknownCharacter { .. }));
    }

    const SHORT_HURT: &str = r#"(
        cell: (width: 48, height: 48),
        strips: { Attack: 1, Death: 1, Hurt: 2, Idle: 1, Walk: 1 },
        characters: [ (id: "cat1", name: "Tabby", art: "cat", tint: (1, 2, 3)) ],
        art: {
            "cat": {
                Attack: [["a"]],
                Death: [["d"]],
                Hurt: [["h"]],
                Idle: [["i"]],
                Walk: [["w"]],
            },
        },
    )"#;

    #[test]
    fn declared_frames_must_match_art() {
        let roster = RosterLoader::parse(SHORT_HURT).unwrap();
        let err = CharacterRegistry::from_roster(roster).unwrap_err();
        assert_eq!(
            err,
            AssetError::FrameMismatch {
                id: CharacterId::new("cat1"),
                state: CombatState::Hurt,
                declared: 2,
                decoded: 1,
            }
        );
    }

    #[test]
    fn missing_art_set_is_a_decode_error() {
        let text = SHORT_HURT.replace("art: \"cat\"", "art: \"ferret\"");
        let roster = RosterLoader::parse(&text).unwrap();
        let err = CharacterRegistry::from_roster(roster).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn zero_frame_strip_is_rejected() {
        let text = SHORT_HURT.replace("Idle: 1", "Idle: 0");
        let roster = RosterLoader::parse(&text).unwrap();
        let err = CharacterRegistry::from_roster(roster).unwrap_err();
        assert_eq!(
            err,
            AssetError::EmptyStrip {
                state: CombatState::Idle
            }
        );
    }

    #[test]
    fn roster_loads_from_disk() {
        let text = SHORT_HURT.replace("Hurt: 2", "Hurt: 1");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let registry = CharacterRegistry::load(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&CharacterId::new("cat1")).unwrap().tint, Tint(1, 2, 3));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CharacterRegistry::load(&dir.path().join("nope.ron")).is_err());
    }
}
