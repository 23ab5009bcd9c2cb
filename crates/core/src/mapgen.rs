//! Procedural dungeon generation split into coherent submodules.

mod distribution;
mod encounters;
mod generator;
mod graph;
mod rooms;

pub use encounters::generate_encounter;
pub use generator::DungeonGenerator;

use crate::dungeon::Dungeon;
use crate::seed::DungeonSeed;
use crate::types::{Difficulty, DungeonSize};

pub fn generate_dungeon(
    seed: impl Into<DungeonSeed>,
    difficulty: Difficulty,
    size: DungeonSize,
) -> Dungeon {
    DungeonGenerator::new(seed, difficulty, size).generate()
}

/// Boundary variant taking raw names; unknown names fall back to `adventurer` and `medium`.
pub fn generate_dungeon_named(
    seed: impl Into<DungeonSeed>,
    difficulty: &str,
    size: &str,
) -> Dungeon {
    generate_dungeon(seed, Difficulty::from_name(difficulty), DungeonSize::from_name(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_dungeon_matches_generator_output() {
        let from_helper = generate_dungeon(123, Difficulty::Hero, DungeonSize::Medium);
        let from_generator =
            DungeonGenerator::new(123, Difficulty::Hero, DungeonSize::Medium).generate();
        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn unknown_names_generate_the_default_dungeon() {
        let fallback = generate_dungeon_named(9, "impossible", "gargantuan");
        assert_eq!(fallback.difficulty, Difficulty::Adventurer);
        assert_eq!(fallback.size, DungeonSize::Medium);
        assert_eq!(fallback, generate_dungeon(9, Difficulty::Adventurer, DungeonSize::Medium));
    }
}
