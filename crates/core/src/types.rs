use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Novice,
    #[default]
    Adventurer,
    Hero,
    Legend,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Novice, Self::Adventurer, Self::Hero, Self::Legend];

    /// Lenient boundary parse: unknown names fall back to `Adventurer`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "novice" => Self::Novice,
            "adventurer" => Self::Adventurer,
            "hero" => Self::Hero,
            "legend" => Self::Legend,
            other => {
                warn!(difficulty = other, "unknown difficulty, using adventurer");
                Self::Adventurer
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Adventurer => "adventurer",
            Self::Hero => "hero",
            Self::Legend => "legend",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DungeonSize {
    Small,
    #[default]
    Medium,
    Large,
    Epic,
}

impl DungeonSize {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Epic];

    /// Lenient boundary parse: unknown names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "epic" => Self::Epic,
            other => {
                warn!(size = other, "unknown dungeon size, using medium");
                Self::Medium
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Epic => "epic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Entrance,
    Corridor,
    Chamber,
    TreasureRoom,
    PuzzleRoom,
    TrapRoom,
    RestArea,
    SecretRoom,
    BossRoom,
}

impl RoomType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Entrance => "entrance",
            Self::Corridor => "corridor",
            Self::Chamber => "chamber",
            Self::TreasureRoom => "treasure_room",
            Self::PuzzleRoom => "puzzle_room",
            Self::TrapRoom => "trap_room",
            Self::RestArea => "rest_area",
            Self::SecretRoom => "secret_room",
            Self::BossRoom => "boss_room",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleType {
    LeverSequence,
    PressurePlates,
    Riddle,
    PatternMatch,
    LightBridge,
    CrystalAlign,
}

impl PuzzleType {
    pub const ALL: [Self; 6] = [
        Self::LeverSequence,
        Self::PressurePlates,
        Self::Riddle,
        Self::PatternMatch,
        Self::LightBridge,
        Self::CrystalAlign,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name.trim())
    }

    /// Unknown names degrade to a riddle rather than failing.
    pub fn from_name_or_fallback(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(puzzle_type = name, "unknown puzzle type, using riddle");
            Self::Riddle
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LeverSequence => "lever_sequence",
            Self::PressurePlates => "pressure_plates",
            Self::Riddle => "riddle",
            Self::PatternMatch => "pattern_match",
            Self::LightBridge => "light_bridge",
            Self::CrystalAlign => "crystal_align",
        }
    }
}

/// Loot rarity band. Ordered from least to most rare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootTier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl LootTier {
    pub const ALL: [Self; 5] =
        [Self::Common, Self::Uncommon, Self::Rare, Self::Epic, Self::Legendary];

    pub fn name(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Scroll,
    Gem,
    Trinket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapKind {
    SpikePit,
    PoisonDart,
    FireJet,
    CollapsingCeiling,
    ArcaneGlyph,
    SwingingBlade,
}

/// Stat block supplied by the player-facing collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self { hp: 100, attack: 15, defense: 5, speed: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_boundary_strings_fall_back_to_safe_defaults() {
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Adventurer);
        assert_eq!(Difficulty::from_name(""), Difficulty::Adventurer);
        assert_eq!(DungeonSize::from_name("colossal"), DungeonSize::Medium);
        assert_eq!(PuzzleType::from_name_or_fallback("sokoban"), PuzzleType::Riddle);
    }

    #[test]
    fn known_names_parse_case_insensitively() {
        assert_eq!(Difficulty::from_name(" Legend "), Difficulty::Legend);
        assert_eq!(DungeonSize::from_name("EPIC"), DungeonSize::Epic);
        for kind in PuzzleType::ALL {
            assert_eq!(PuzzleType::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn serde_names_match_boundary_names() {
        let json = serde_json::to_string(&RoomType::TreasureRoom).expect("serialize");
        assert_eq!(json, "\"treasure_room\"");
        let tier: LootTier = serde_json::from_str("\"legendary\"").expect("deserialize");
        assert_eq!(tier, LootTier::Legendary);
    }
}
