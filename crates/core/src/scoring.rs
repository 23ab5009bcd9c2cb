//! Run scoring and descriptive dungeon statistics. Purely derived; owns no state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::difficulty_settings;
use crate::dungeon::Dungeon;
use crate::types::{Difficulty, RoomType};

const ROOM_CLEARED_POINTS: i64 = 100;
const PUZZLE_SOLVED_POINTS: i64 = 200;
const LOOT_FOUND_POINTS: i64 = 50;
const BOSS_DEFEATED_POINTS: i64 = 1_000;
const DEATH_PENALTY: i64 = 150;
const SECRET_FOUND_POINTS: i64 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub rooms_cleared: u32,
    pub puzzles_solved: u32,
    pub loot_found: u32,
    pub boss_defeated: bool,
    pub deaths: u32,
    pub time_bonus: i64,
    pub secrets_found: u32,
}

impl RunStats {
    /// Loot counts only in cleared rooms; secrets count once explored.
    pub fn from_dungeon(dungeon: &Dungeon, deaths: u32, time_bonus: i64) -> Self {
        let rooms = &dungeon.rooms;
        Self {
            rooms_cleared: dungeon.cleared_room_ids.len() as u32,
            puzzles_solved: rooms
                .iter()
                .filter(|room| room.puzzle.as_ref().is_some_and(|puzzle| puzzle.solved))
                .count() as u32,
            loot_found: rooms
                .iter()
                .filter(|room| room.cleared)
                .map(|room| room.loot.len() as u32)
                .sum(),
            boss_defeated: dungeon.cleared_room_ids.contains(&dungeon.boss_room_id),
            deaths,
            time_bonus,
            secrets_found: rooms.iter().filter(|room| room.is_secret && room.explored).count()
                as u32,
        }
    }
}

pub fn get_dungeon_score(difficulty: Difficulty, stats: &RunStats) -> u64 {
    let raw = ROOM_CLEARED_POINTS * i64::from(stats.rooms_cleared)
        + PUZZLE_SOLVED_POINTS * i64::from(stats.puzzles_solved)
        + LOOT_FOUND_POINTS * i64::from(stats.loot_found)
        + BOSS_DEFEATED_POINTS * i64::from(stats.boss_defeated)
        - DEATH_PENALTY * i64::from(stats.deaths)
        + stats.time_bonus
        + SECRET_FOUND_POINTS * i64::from(stats.secrets_found);
    let scaled = (difficulty_settings(difficulty).score_mult * raw as f64).floor();
    if scaled <= 0.0 { 0 } else { scaled as u64 }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonSummary {
    pub room_count: usize,
    pub rooms_by_type: BTreeMap<RoomType, usize>,
    pub enemy_count: usize,
    pub loot_count: usize,
    pub puzzle_count: usize,
    pub trap_count: usize,
    pub secret_count: usize,
    pub estimated_minutes: usize,
}

pub fn get_dungeon_summary(dungeon: &Dungeon) -> DungeonSummary {
    let mut rooms_by_type = BTreeMap::new();
    let mut summary = DungeonSummary {
        room_count: dungeon.rooms.len(),
        rooms_by_type: BTreeMap::new(),
        enemy_count: 0,
        loot_count: 0,
        puzzle_count: 0,
        trap_count: 0,
        secret_count: 0,
        estimated_minutes: 0,
    };
    for room in &dungeon.rooms {
        *rooms_by_type.entry(room.room_type).or_insert(0) += 1;
        summary.enemy_count += room.enemies.len();
        summary.loot_count += room.loot.len();
        summary.puzzle_count += usize::from(room.puzzle.is_some());
        summary.trap_count += room.traps.len();
        summary.secret_count += usize::from(room.is_secret);
    }
    summary.rooms_by_type = rooms_by_type;
    summary.estimated_minutes =
        3 * summary.room_count + 2 * summary.puzzle_count + summary.enemy_count;
    summary
}
