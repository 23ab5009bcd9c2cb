//! Per-room content: dimensions, description, puzzle, loot and traps.
//! Every room derives its streams from the `room_<id>` sub-seed the generator hands in.

use crate::content::{TRAP_KINDS, difficulty_settings, room_descriptions, room_dimension_range};
use crate::loot::{determine_loot_tier, floor_tier, get_loot_drop};
use crate::model::{Item, Room, Trap};
use crate::puzzle::{Puzzle, generate_puzzle};
use crate::seed::{Mulberry32, seed_from};
use crate::types::{Difficulty, LootTier, PuzzleType, RoomType};

use super::encounters::generate_encounter;

const MIN_GUARANTEED_LOOT: usize = 2;
const MAX_GUARANTEED_LOOT: usize = 5;
const STRAY_LOOT_CHANCE: f64 = 0.3;
const CORRIDOR_TRAP_CHANCE: f64 = 0.25;
const MIN_DETECTION_DIFFICULTY: usize = 10;
const MAX_DETECTION_DIFFICULTY: usize = 20;

pub(super) fn build_room(
    room_id: u32,
    room_type: RoomType,
    connection_ids: Vec<u32>,
    seed: u32,
    difficulty: Difficulty,
) -> Room {
    let mut layout_rng = Mulberry32::new(seed_from(seed, "dims"));

    let dimensions = room_dimension_range(room_type);
    let width =
        layout_rng.range_inclusive(dimensions.width.0 as usize, dimensions.width.1 as usize);
    let height = if dimensions.square {
        width
    } else {
        layout_rng.range_inclusive(dimensions.height.0 as usize, dimensions.height.1 as usize)
    };
    let description = layout_rng.pick(room_descriptions(room_type)).to_string();

    Room {
        id: room_id,
        room_type,
        width: width as u32,
        height: height as u32,
        description,
        enemies: generate_encounter(seed, difficulty, room_type),
        puzzle: generate_room_puzzle(seed, room_type),
        loot: generate_room_loot(seed, difficulty, room_type),
        traps: generate_room_traps(seed, difficulty, room_type, room_id),
        connection_ids,
        explored: false,
        cleared: false,
        is_secret: room_type == RoomType::SecretRoom,
    }
}

fn generate_room_puzzle(room_seed: u32, room_type: RoomType) -> Option<Puzzle> {
    if room_type != RoomType::PuzzleRoom {
        return None;
    }
    let puzzle_seed = seed_from(room_seed, "puzzle");
    let kind = *Mulberry32::new(puzzle_seed).pick(&PuzzleType::ALL);
    Some(generate_puzzle(puzzle_seed, kind))
}

pub(super) fn generate_room_loot(
    room_seed: u32,
    difficulty: Difficulty,
    room_type: RoomType,
) -> Vec<Item> {
    let loot_seed = seed_from(room_seed, "loot");
    let mut rng = Mulberry32::new(loot_seed);

    let slots = match room_type {
        RoomType::Entrance => 0,
        RoomType::TreasureRoom | RoomType::BossRoom | RoomType::SecretRoom => {
            rng.range_inclusive(MIN_GUARANTEED_LOOT, MAX_GUARANTEED_LOOT)
        }
        _ => usize::from(rng.chance(STRAY_LOOT_CHANCE)),
    };

    (0..slots)
        .map(|slot| {
            let slot_seed = seed_from(loot_seed, format!("loot_{slot}"));
            let rolled = determine_loot_tier(&mut Mulberry32::new(slot_seed), difficulty);
            let tier = match room_type {
                RoomType::BossRoom => floor_tier(rolled, LootTier::Rare),
                RoomType::SecretRoom => floor_tier(rolled, LootTier::Uncommon),
                _ => rolled,
            };
            get_loot_drop(slot_seed, difficulty, tier)
        })
        .collect()
}

pub(super) fn generate_room_traps(
    room_seed: u32,
    difficulty: Difficulty,
    room_type: RoomType,
    room_id: u32,
) -> Vec<Trap> {
    let mut rng = Mulberry32::new(seed_from(room_seed, "traps"));
    let full_damage = difficulty_settings(difficulty).trap_damage;

    let (count, damage) = match room_type {
        RoomType::TrapRoom => (rng.range_inclusive(2, 4), full_damage),
        RoomType::Corridor => {
            if rng.chance(CORRIDOR_TRAP_CHANCE) {
                (1, full_damage / 2)
            } else {
                (0, 0)
            }
        }
        _ => (0, 0),
    };

    (0..count)
        .map(|index| Trap {
            id: format!("trap_{room_id}_{index}"),
            kind: *rng.pick(&TRAP_KINDS),
            damage,
            triggered: false,
            detection_difficulty: rng
                .range_inclusive(MIN_DETECTION_DIFFICULTY, MAX_DETECTION_DIFFICULTY)
                as u32,
        })
        .collect()
}
