use std::collections::BTreeSet;

use delve_core::{
    Difficulty, Dungeon, DungeonError, DungeonSize, PlayerStats, RoomType, RunStats, Solution,
    generate_dungeon, get_dungeon_score, get_shortest_path,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Clone, Copy, Debug)]
enum Action {
    Walk,
    Fight,
    Trap,
    Solve,
}

const ACTIONS: [Action; 5] =
    [Action::Walk, Action::Walk, Action::Fight, Action::Trap, Action::Solve];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn guess(rng: &mut ChaCha8Rng) -> Solution {
    choose(
        rng,
        &[
            Solution::IntSequence(vec![1, 2, 3]),
            Solution::IndexSet(vec![0, 2]),
            Solution::RiddleAnswer("echo".to_string()),
            Solution::AngleSequence(vec![0, 90, 180]),
        ],
    )
}

fn check_invariants(dungeon: &Dungeon, seed: u32) -> Result<(), String> {
    let last = dungeon.rooms.len() as u32 - 1;
    if dungeon.rooms[0].room_type != RoomType::Entrance || dungeon.boss_room_id != last {
        return Err(format!("Invariant failed: entrance/boss moved on seed {seed}"));
    }
    let visible = dungeon.visible_rooms();
    for room in dungeon.rooms.iter().filter(|room| room.is_secret) {
        if visible.contains(&room.id) && !room.explored {
            return Err(format!("Invariant failed: secret room {} leaked on seed {seed}", room.id));
        }
    }
    for room in &dungeon.rooms {
        if room.cleared && !room.enemies.is_empty() {
            return Err(format!("Invariant failed: cleared room {} has enemies", room.id));
        }
        if room.explored != dungeon.explored_room_ids.contains(&room.id) {
            return Err(format!("Invariant failed: explored flag drift in room {}", room.id));
        }
    }
    Ok(())
}

fn run_fuzz_walk(seed: u32, choice_seed: u64, max_steps: u32) -> Result<(), String> {
    let difficulty = Difficulty::ALL[(choice_seed % 4) as usize];
    let mut dungeon = generate_dungeon(seed, difficulty, DungeonSize::Medium);
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
    let player = PlayerStats { hp: 250, attack: 30, defense: 10, speed: 8 };

    let mut current = dungeon.entrance_id;
    let mut explored_before = BTreeSet::new();
    let mut triggered_before = BTreeSet::new();
    let mut last_score = 0;
    dungeon.explore_room(current).map_err(|err| err.to_string())?;

    for _ in 0..max_steps {
        match choose(&mut rng, &ACTIONS) {
            Action::Walk => {
                let target = (rng.next_u64() % dungeon.rooms.len() as u64) as u32;
                let Some(path) = get_shortest_path(&dungeon, current, target) else {
                    return Err(format!("Invariant failed: no path {current}->{target}"));
                };
                for &step in &path[1..] {
                    dungeon.explore_room(step).map_err(|err| err.to_string())?;
                }
                current = target;
            }
            Action::Fight => {
                dungeon.resolve_encounter(current, &player).map_err(|err| err.to_string())?;
            }
            Action::Trap => {
                let count = dungeon.rooms[current as usize].traps.len();
                if count > 0 {
                    let index = (rng.next_u64() % count as u64) as usize;
                    match dungeon.trigger_trap(current, index) {
                        Ok(_) => {
                            if !triggered_before.insert((current, index)) {
                                return Err("Invariant failed: trap fired twice".to_string());
                            }
                        }
                        Err(DungeonError::TrapAlreadyTriggered { .. }) => {}
                        Err(err) => return Err(err.to_string()),
                    }
                }
            }
            Action::Solve => match dungeon.attempt_puzzle(current, &guess(&mut rng)) {
                Ok(_) | Err(DungeonError::NoPuzzle(_)) => {}
                Err(err) => return Err(err.to_string()),
            },
        }

        if !explored_before.is_subset(&dungeon.explored_room_ids) {
            return Err(format!("Invariant failed: explored set shrank on seed {seed}"));
        }
        explored_before = dungeon.explored_room_ids.clone();

        let score = get_dungeon_score(difficulty, &RunStats::from_dungeon(&dungeon, 0, 0));
        if score < last_score {
            return Err(format!("Invariant failed: score dropped on seed {seed}"));
        }
        last_score = score;

        check_invariants(&dungeon, seed)?;
    }

    Ok(())
}

#[test]
fn test_fuzz_dungeon_walk() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(32));
    let seeds = (any::<u32>(), any::<u64>());

    runner
        .run(&seeds, |(seed, choice_seed)| {
            run_fuzz_walk(seed, choice_seed, 200).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz walk should preserve invariants");
}
