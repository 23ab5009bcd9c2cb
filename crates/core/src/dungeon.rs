//! The generated dungeon and its single-writer gameplay transitions.
//! This module exists so rooms are owned by one arena and mutated through one entry point.
//! It does not own generation; see `mapgen`.

use std::collections::BTreeSet;
use std::mem;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::combat::{CombatOutcome, EnemyStats, calculate_combat_outcome};
use crate::error::DungeonError;
use crate::model::{Enemy, Room};
use crate::puzzle::{Solution, SolveResult, solve_puzzle};
use crate::seed::DungeonSeed;
use crate::types::{Difficulty, DungeonSize, PlayerStats};
use crate::visibility::reveal_map;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub seed: DungeonSeed,
    pub difficulty: Difficulty,
    pub size: DungeonSize,
    pub rooms: Vec<Room>,
    pub entrance_id: u32,
    pub boss_room_id: u32,
    pub completed: bool,
    pub explored_room_ids: BTreeSet<u32>,
    pub cleared_room_ids: BTreeSet<u32>,
}

impl Dungeon {
    /// Entrance is always id 0 and the boss room always the last id.
    pub(crate) fn from_rooms(
        seed: DungeonSeed,
        difficulty: Difficulty,
        size: DungeonSize,
        rooms: Vec<Room>,
    ) -> Self {
        let boss_room_id = rooms.len().saturating_sub(1) as u32;
        Self {
            seed,
            difficulty,
            size,
            rooms,
            entrance_id: 0,
            boss_room_id,
            completed: false,
            explored_room_ids: BTreeSet::new(),
            cleared_room_ids: BTreeSet::new(),
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.get(id as usize)
    }

    fn checked_room_mut(&mut self, id: u32) -> Result<&mut Room, DungeonError> {
        self.rooms.get_mut(id as usize).ok_or(DungeonError::UnknownRoom(id))
    }

    pub fn explore_room(&mut self, id: u32) -> Result<&Room, DungeonError> {
        let room = self.checked_room_mut(id)?;
        room.explored = true;
        self.explored_room_ids.insert(id);
        Ok(&self.rooms[id as usize])
    }

    /// Removes the room's enemies and marks it cleared. Returns the defeated enemies.
    pub fn clear_room(&mut self, id: u32) -> Result<Vec<Enemy>, DungeonError> {
        let room = self.checked_room_mut(id)?;
        let defeated = mem::take(&mut room.enemies);
        room.cleared = true;
        self.cleared_room_ids.insert(id);
        if id == self.boss_room_id {
            self.completed = true;
        }
        Ok(defeated)
    }

    /// Fights the room's current enemies. The room is cleared only on victory.
    pub fn resolve_encounter(
        &mut self,
        id: u32,
        player: &PlayerStats,
    ) -> Result<CombatOutcome, DungeonError> {
        let room = self.room(id).ok_or(DungeonError::UnknownRoom(id))?;
        let party: Vec<EnemyStats> = room.enemies.iter().map(Enemy::stat_block).collect();
        let outcome = calculate_combat_outcome(player, &party);
        if outcome.victory && outcome.survived {
            self.clear_room(id)?;
        }
        Ok(outcome)
    }

    /// Springs a trap and returns its damage. A trap fires at most once.
    pub fn trigger_trap(&mut self, room_id: u32, index: usize) -> Result<i32, DungeonError> {
        let room = self.checked_room_mut(room_id)?;
        let trap = room
            .traps
            .get_mut(index)
            .ok_or(DungeonError::UnknownTrap { room: room_id, index })?;
        if trap.triggered {
            return Err(DungeonError::TrapAlreadyTriggered { room: room_id, index });
        }
        trap.triggered = true;
        Ok(trap.damage)
    }

    pub fn attempt_puzzle(
        &mut self,
        room_id: u32,
        attempt: &Solution,
    ) -> Result<SolveResult, DungeonError> {
        let room = self.checked_room_mut(room_id)?;
        let puzzle = room.puzzle.as_mut().ok_or(DungeonError::NoPuzzle(room_id))?;
        Ok(solve_puzzle(puzzle, attempt))
    }

    pub fn visible_rooms(&self) -> BTreeSet<u32> {
        let explored: Vec<u32> = self.explored_room_ids.iter().copied().collect();
        reveal_map(self, &explored)
    }

    /// Stable little-endian encoding of every gameplay-relevant field.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        match &self.seed {
            DungeonSeed::Number(value) => {
                bytes.push(0);
                bytes.extend(value.to_le_bytes());
            }
            DungeonSeed::Text(text) => {
                bytes.push(1);
                push_str(&mut bytes, text);
            }
        }
        bytes.push(self.difficulty as u8);
        bytes.push(self.size as u8);
        bytes.extend(self.entrance_id.to_le_bytes());
        bytes.extend(self.boss_room_id.to_le_bytes());
        bytes.push(u8::from(self.completed));
        push_ids(&mut bytes, self.explored_room_ids.iter().copied());
        push_ids(&mut bytes, self.cleared_room_ids.iter().copied());

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            push_room(&mut bytes, room);
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_str(bytes: &mut Vec<u8>, text: &str) {
    bytes.extend((text.len() as u32).to_le_bytes());
    bytes.extend(text.as_bytes());
}

fn push_ids(bytes: &mut Vec<u8>, ids: impl ExactSizeIterator<Item = u32>) {
    bytes.extend((ids.len() as u32).to_le_bytes());
    for id in ids {
        bytes.extend(id.to_le_bytes());
    }
}

fn push_room(bytes: &mut Vec<u8>, room: &Room) {
    bytes.extend(room.id.to_le_bytes());
    bytes.push(room.room_type as u8);
    bytes.extend(room.width.to_le_bytes());
    bytes.extend(room.height.to_le_bytes());
    push_str(bytes, &room.description);
    push_ids(bytes, room.connection_ids.iter().copied());
    bytes.push(u8::from(room.explored));
    bytes.push(u8::from(room.cleared));
    bytes.push(u8::from(room.is_secret));

    bytes.extend((room.enemies.len() as u32).to_le_bytes());
    for enemy in &room.enemies {
        push_str(bytes, &enemy.template_id);
        bytes.extend(enemy.hp.to_le_bytes());
        bytes.extend(enemy.max_hp.to_le_bytes());
        bytes.extend(enemy.attack.to_le_bytes());
        bytes.extend(enemy.defense.to_le_bytes());
        bytes.extend(enemy.speed.to_le_bytes());
        bytes.extend(enemy.xp.to_le_bytes());
        bytes.push(enemy.tier);
        bytes.push(u8::from(enemy.is_boss));
    }

    match &room.puzzle {
        None => bytes.push(0),
        Some(puzzle) => {
            bytes.push(1);
            bytes.push(puzzle.kind as u8);
            bytes.push(u8::from(puzzle.solved));
            bytes.extend(puzzle.attempts.to_le_bytes());
            match &puzzle.solution {
                None => bytes.push(0),
                Some(Solution::IntSequence(values)) => {
                    bytes.push(1);
                    push_ids(bytes, values.iter().copied());
                }
                Some(Solution::IndexSet(values)) => {
                    bytes.push(2);
                    push_ids(bytes, values.iter().copied());
                }
                Some(Solution::RiddleAnswer(answer)) => {
                    bytes.push(3);
                    push_str(bytes, answer);
                }
                Some(Solution::AngleSequence(angles)) => {
                    bytes.push(4);
                    push_ids(bytes, angles.iter().map(|&angle| u32::from(angle)));
                }
            }
        }
    }

    bytes.extend((room.loot.len() as u32).to_le_bytes());
    for item in &room.loot {
        push_str(bytes, &item.id);
        bytes.push(item.tier as u8);
        bytes.extend(item.value.to_le_bytes());
    }

    bytes.extend((room.traps.len() as u32).to_le_bytes());
    for trap in &room.traps {
        bytes.push(trap.kind as u8);
        bytes.extend(trap.damage.to_le_bytes());
        bytes.push(u8::from(trap.triggered));
        bytes.extend(trap.detection_difficulty.to_le_bytes());
    }
}
