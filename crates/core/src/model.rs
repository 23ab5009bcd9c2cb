//! Public data models for rooms and their contents.
//! Rooms refer to each other by id only; the owning arena is `Dungeon::rooms`.

use serde::{Deserialize, Serialize};

use crate::combat::EnemyStats;
use crate::puzzle::Puzzle;
use crate::types::{ItemKind, LootTier, RoomType, TrapKind};

/// A spawned, difficulty-scaled copy of an enemy template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub instance_id: String,
    pub template_id: String,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub xp: u32,
    pub tier: u8,
    pub is_boss: bool,
}

impl Enemy {
    pub fn stat_block(&self) -> EnemyStats {
        EnemyStats {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            xp: self.xp,
        }
    }
}

/// A loot drop. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub instance_id: String,
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
    pub effect: String,
    pub tier: LootTier,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub id: String,
    pub kind: TrapKind,
    pub damage: i32,
    pub triggered: bool,
    pub detection_difficulty: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub width: u32,
    pub height: u32,
    pub description: String,
    pub enemies: Vec<Enemy>,
    pub puzzle: Option<Puzzle>,
    pub loot: Vec<Item>,
    pub traps: Vec<Trap>,
    pub connection_ids: Vec<u32>,
    pub explored: bool,
    pub cleared: bool,
    pub is_secret: bool,
}

impl Room {
    pub fn is_connected_to(&self, other: u32) -> bool {
        self.connection_ids.contains(&other)
    }
}
