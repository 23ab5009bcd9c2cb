//! Room type multiset for N slots: fixed entrance and boss, guaranteed specials, cyclic filler.

use crate::seed::Mulberry32;
use crate::types::RoomType;

const FILLER_CYCLE: [RoomType; 4] =
    [RoomType::Corridor, RoomType::Chamber, RoomType::TrapRoom, RoomType::RestArea];

/// Types for the N - 2 interior slots, before shuffling.
pub(super) fn interior_room_types(room_count: usize) -> Vec<RoomType> {
    let mut types = vec![RoomType::TreasureRoom, RoomType::PuzzleRoom];
    if room_count >= 10 {
        types.push(RoomType::SecretRoom);
    }
    if room_count >= 18 {
        types.extend([RoomType::SecretRoom, RoomType::PuzzleRoom]);
    }
    if room_count >= 30 {
        types.extend([RoomType::TreasureRoom, RoomType::TrapRoom]);
    }

    let filler_slots = room_count.saturating_sub(2).saturating_sub(types.len());
    types.extend(FILLER_CYCLE.iter().cycle().take(filler_slots));
    types
}

/// `[entrance, ...shuffled interior, boss_room]`.
pub(super) fn distribute_room_types(
    room_count: usize,
    shuffle_rng: &mut Mulberry32,
) -> Vec<RoomType> {
    let mut interior = interior_room_types(room_count);
    shuffle_rng.shuffle(&mut interior);

    let mut types = Vec::with_capacity(room_count);
    types.push(RoomType::Entrance);
    types.extend(interior);
    types.push(RoomType::BossRoom);
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(types: &[RoomType], kind: RoomType) -> usize {
        types.iter().filter(|&&candidate| candidate == kind).count()
    }

    #[test]
    fn entrance_and_boss_are_pinned_to_the_ends() {
        for room_count in 5..=40 {
            let types = distribute_room_types(room_count, &mut Mulberry32::new(room_count as u32));
            assert_eq!(types.len(), room_count);
            assert_eq!(types[0], RoomType::Entrance);
            assert_eq!(types[room_count - 1], RoomType::BossRoom);
            assert_eq!(count(&types, RoomType::Entrance), 1);
            assert_eq!(count(&types, RoomType::BossRoom), 1);
            assert!(count(&types, RoomType::TreasureRoom) >= 1);
            assert!(count(&types, RoomType::PuzzleRoom) >= 1);
        }
    }

    #[test]
    fn specials_scale_with_room_count() {
        let small = interior_room_types(8);
        assert_eq!(count(&small, RoomType::SecretRoom), 0);

        let medium = interior_room_types(10);
        assert_eq!(count(&medium, RoomType::SecretRoom), 1);

        let large = interior_room_types(18);
        assert_eq!(count(&large, RoomType::SecretRoom), 2);
        assert_eq!(count(&large, RoomType::PuzzleRoom), 2);

        let epic = interior_room_types(30);
        assert_eq!(count(&epic, RoomType::TreasureRoom), 2);
        assert_eq!(count(&epic, RoomType::SecretRoom), 2);
    }

    #[test]
    fn filler_cycles_in_fixed_order() {
        let types = interior_room_types(9);
        assert_eq!(
            &types[2..],
            &[
                RoomType::Corridor,
                RoomType::Chamber,
                RoomType::TrapRoom,
                RoomType::RestArea,
                RoomType::Corridor,
            ]
        );
    }
}
