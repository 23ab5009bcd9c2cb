pub mod combat;
pub mod content;
pub mod dungeon;
pub mod error;
pub mod loot;
pub mod mapgen;
pub mod model;
pub mod pathfinding;
pub mod puzzle;
pub mod scoring;
pub mod seed;
pub mod types;
pub mod visibility;

pub use combat::{CombatOutcome, EnemyStats, calculate_combat_outcome};
pub use dungeon::Dungeon;
pub use error::DungeonError;
pub use loot::{determine_loot_tier, get_loot_drop};
pub use mapgen::{DungeonGenerator, generate_dungeon, generate_dungeon_named, generate_encounter};
pub use model::{Enemy, Item, Room, Trap};
pub use pathfinding::{get_shortest_path, reachable_rooms};
pub use puzzle::{
    Puzzle, Solution, SolveResult, generate_puzzle, generate_puzzle_named, solve_puzzle,
};
pub use scoring::{DungeonSummary, RunStats, get_dungeon_score, get_dungeon_summary};
pub use seed::{DungeonSeed, Mulberry32, fnv1a_32, seed_from};
pub use types::*;
pub use visibility::reveal_map;
