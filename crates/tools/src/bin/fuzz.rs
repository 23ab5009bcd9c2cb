use anyhow::{Result, bail};
use clap::Parser;
use delve_core::{
    Difficulty, DungeonError, DungeonSize, PlayerStats, Solution, generate_dungeon,
    get_shortest_path,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dungeon seed; also seeds the walk
    #[arg(short, long, default_value_t = 42)]
    seed: u32,
    #[arg(long, default_value_t = 1000)]
    steps: u32,
    #[arg(short, long, default_value = "adventurer")]
    difficulty: String,
    #[arg(long, default_value = "medium")]
    size: String,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz walk on seed {} for {} steps...", args.seed, args.steps);
    let mut dungeon = generate_dungeon(
        args.seed,
        Difficulty::from_name(&args.difficulty),
        DungeonSize::from_name(&args.size),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(args.seed));
    let player = PlayerStats { hp: 250, attack: 30, defense: 10, speed: 8 };
    let room_count = dungeon.room_count() as u64;
    let mut current = dungeon.entrance_id;
    dungeon.explore_room(current)?;

    for step in 0..args.steps {
        match rng.next_u64() % 4 {
            0 => {
                let target = (rng.next_u64() % room_count) as u32;
                let Some(path) = get_shortest_path(&dungeon, current, target) else {
                    bail!("Invariant failed: no path {current}->{target} at step {step}");
                };
                for &room in &path[1..] {
                    dungeon.explore_room(room)?;
                }
                current = target;
            }
            1 => {
                let outcome = dungeon.resolve_encounter(current, &player)?;
                if outcome.victory && !dungeon.rooms[current as usize].enemies.is_empty() {
                    bail!("Invariant failed: room {current} won but still holds enemies");
                }
            }
            2 => {
                let traps = dungeon.rooms[current as usize].traps.len();
                if traps > 0 {
                    let index = (rng.next_u64() % traps as u64) as usize;
                    match dungeon.trigger_trap(current, index) {
                        Ok(_) | Err(DungeonError::TrapAlreadyTriggered { .. }) => {}
                        Err(err) => return Err(err.into()),
                    }
                }
            }
            _ => {
                let attempt = choose(
                    &mut rng,
                    &[
                        Solution::IntSequence(vec![1, 2, 3]),
                        Solution::RiddleAnswer("map".to_string()),
                    ],
                );
                match dungeon.attempt_puzzle(current, &attempt) {
                    Ok(_) | Err(DungeonError::NoPuzzle(_)) => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let visible = dungeon.visible_rooms();
        for room in &dungeon.rooms {
            if room.is_secret && !room.explored && visible.contains(&room.id) {
                bail!("Invariant failed: secret room {} visible unexplored", room.id);
            }
            if room.cleared && !dungeon.cleared_room_ids.contains(&room.id) {
                bail!("Invariant failed: cleared flag drift in room {}", room.id);
            }
        }
        if dungeon.completed {
            println!("Boss room cleared after {} steps", step + 1);
            break;
        }
    }

    println!("Fingerprint: {:016x}", dungeon.fingerprint());
    println!("Fuzzing completed successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn seeds_outside_u32_are_rejected() {
        let args = Args::try_parse_from(["fuzz", "--seed", "4294967295"]).expect("parse");
        assert_eq!(args.seed, u32::MAX);
        assert!(Args::try_parse_from(["fuzz", "--seed", "4294967296"]).is_err());
        assert!(Args::try_parse_from(["fuzz", "--seed", "-1"]).is_err());
    }
}
