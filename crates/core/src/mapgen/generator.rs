//! High-level dungeon generation: room count, type distribution, graph, then per-room content.
//! The room count comes from the root stream; every later step uses `seed_from(seed, label)`
//! with the seed as written, so text seeds hash their own text.

use tracing::debug;

use crate::content::room_count_range;
use crate::dungeon::Dungeon;
use crate::seed::{DungeonSeed, Mulberry32, seed_from};
use crate::types::{Difficulty, DungeonSize};

use super::distribution::distribute_room_types;
use super::graph::build_room_graph;
use super::rooms::build_room;

pub struct DungeonGenerator {
    seed: DungeonSeed,
    difficulty: Difficulty,
    size: DungeonSize,
}

impl DungeonGenerator {
    pub fn new(seed: impl Into<DungeonSeed>, difficulty: Difficulty, size: DungeonSize) -> Self {
        Self { seed: seed.into(), difficulty, size }
    }

    pub fn generate(&self) -> Dungeon {
        let seed = &self.seed;
        let range = room_count_range(self.size);
        let room_count =
            Mulberry32::new(seed.root()).range_inclusive(range.min_rooms, range.max_rooms);

        let room_types =
            distribute_room_types(room_count, &mut Mulberry32::new(seed_from(seed, "shuffle")));
        let adjacency =
            build_room_graph(room_count, &mut Mulberry32::new(seed_from(seed, "graph")));

        let rooms = room_types
            .into_iter()
            .zip(adjacency)
            .enumerate()
            .map(|(room_id, (room_type, connection_ids))| {
                let room_seed = seed_from(seed, format!("room_{room_id}"));
                build_room(room_id as u32, room_type, connection_ids, room_seed, self.difficulty)
            })
            .collect::<Vec<_>>();

        debug!(
            seed = %self.seed,
            difficulty = self.difficulty.name(),
            size = self.size.name(),
            room_count,
            "generated dungeon"
        );

        Dungeon::from_rooms(self.seed.clone(), self.difficulty, self.size, rooms)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::seed::fnv1a_32;
    use crate::types::RoomType;

    fn reachable_from_entrance(dungeon: &Dungeon) -> BTreeSet<u32> {
        let mut seen = BTreeSet::from([dungeon.entrance_id]);
        let mut open = VecDeque::from([dungeon.entrance_id]);
        while let Some(id) = open.pop_front() {
            for &next in &dungeon.rooms[id as usize].connection_ids {
                if seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn same_inputs_produce_byte_identical_dungeons() {
        let a = DungeonGenerator::new(123_456, Difficulty::Hero, DungeonSize::Large).generate();
        let b = DungeonGenerator::new(123_456, Difficulty::Hero, DungeonSize::Large).generate();
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a, b);
    }

    #[test]
    fn changing_the_seed_changes_the_dungeon() {
        let a = DungeonGenerator::new(1, Difficulty::Hero, DungeonSize::Medium).generate();
        let b = DungeonGenerator::new(2, Difficulty::Hero, DungeonSize::Medium).generate();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn difficulty_does_not_change_layout() {
        let novice = DungeonGenerator::new(77, Difficulty::Novice, DungeonSize::Large).generate();
        let legend = DungeonGenerator::new(77, Difficulty::Legend, DungeonSize::Large).generate();
        assert_eq!(novice.rooms.len(), legend.rooms.len());
        for (a, b) in novice.rooms.iter().zip(&legend.rooms) {
            assert_eq!(a.room_type, b.room_type);
            assert_eq!(a.connection_ids, b.connection_ids);
            assert_eq!((a.width, a.height), (b.width, b.height));
        }
    }

    #[test]
    fn text_seeds_generate_valid_dungeons() {
        let dungeon = DungeonGenerator::new("crypt of ash", Difficulty::Novice, DungeonSize::Small)
            .generate();
        assert_eq!(dungeon.rooms[0].room_type, RoomType::Entrance);
        assert_eq!(dungeon.seed, DungeonSeed::Text("crypt of ash".to_string()));
    }

    #[test]
    fn text_seed_is_not_its_own_hash() {
        let text = DungeonGenerator::new("crypt", Difficulty::Hero, DungeonSize::Large).generate();
        let hashed = DungeonGenerator::new(fnv1a_32("crypt"), Difficulty::Hero, DungeonSize::Large)
            .generate();
        assert_ne!(text.rooms, hashed.rooms);
    }

    #[test]
    fn sub_streams_hash_the_seed_text_directly() {
        assert_eq!(seed_from(DungeonSeed::from("crypt"), "graph"), 1_754_176_987);

        let dungeon =
            DungeonGenerator::new("crypt", Difficulty::Hero, DungeonSize::Large).generate();
        let room_count = dungeon.rooms.len();
        let range = room_count_range(DungeonSize::Large);
        let expected_count = Mulberry32::new(fnv1a_32("crypt"))
            .range_inclusive(range.min_rooms, range.max_rooms);
        assert_eq!(room_count, expected_count);

        let graph = build_room_graph(room_count, &mut Mulberry32::new(seed_from("crypt", "graph")));
        let connections: Vec<Vec<u32>> =
            dungeon.rooms.iter().map(|room| room.connection_ids.clone()).collect();
        assert_eq!(connections, graph);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_dungeons_hold_structural_invariants(
            seed in any::<u32>(),
            difficulty_index in 0_usize..4,
            size_index in 0_usize..4,
        ) {
            let difficulty = Difficulty::ALL[difficulty_index];
            let size = DungeonSize::ALL[size_index];
            let dungeon = DungeonGenerator::new(seed, difficulty, size).generate();
            let range = room_count_range(size);
            let room_count = dungeon.rooms.len();

            prop_assert!((range.min_rooms..=range.max_rooms).contains(&room_count));
            prop_assert_eq!(dungeon.entrance_id, 0);
            prop_assert_eq!(dungeon.boss_room_id as usize, room_count - 1);
            prop_assert_eq!(dungeon.rooms[0].room_type, RoomType::Entrance);
            prop_assert_eq!(dungeon.rooms[room_count - 1].room_type, RoomType::BossRoom);
            prop_assert_eq!(
                dungeon.rooms.iter().filter(|room| room.room_type == RoomType::Entrance).count(),
                1
            );
            prop_assert_eq!(
                dungeon.rooms.iter().filter(|room| room.room_type == RoomType::BossRoom).count(),
                1
            );
            prop_assert_eq!(reachable_from_entrance(&dungeon).len(), room_count);
            for (index, room) in dungeon.rooms.iter().enumerate() {
                prop_assert_eq!(room.id as usize, index);
                prop_assert_eq!(room.is_secret, room.room_type == RoomType::SecretRoom);
            }
        }
    }
}
