mod config;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use delve_core::{
    Difficulty, Dungeon, DungeonSeed, DungeonSize, generate_dungeon, get_dungeon_summary,
    get_shortest_path, reveal_map,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DelveConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional TOML file with generation and player defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a dungeon and print its summary or full JSON
    Generate {
        #[command(flatten)]
        dungeon: DungeonArgs,
        #[arg(long)]
        json: bool,
    },
    /// Shortest room route between two rooms
    Path {
        #[command(flatten)]
        dungeon: DungeonArgs,
        #[arg(long)]
        from: u32,
        #[arg(long)]
        to: u32,
    },
    /// Rooms visible after exploring the given ids
    Reveal {
        #[command(flatten)]
        dungeon: DungeonArgs,
        #[arg(long, value_delimiter = ',')]
        explored: Vec<u32>,
    },
    /// Fight the enemies of one room with the configured player
    Fight {
        #[command(flatten)]
        dungeon: DungeonArgs,
        #[arg(long)]
        room: u32,
    },
}

#[derive(Args)]
struct DungeonArgs {
    /// Numeric or text seed
    #[arg(short, long)]
    seed: String,
    #[arg(short, long)]
    difficulty: Option<String>,
    #[arg(long)]
    size: Option<String>,
}

impl DungeonArgs {
    fn build(&self, config: &DelveConfig) -> Dungeon {
        let difficulty = self.difficulty.as_deref().unwrap_or(&config.generation.difficulty);
        let size = self.size.as_deref().unwrap_or(&config.generation.size);
        generate_dungeon(
            DungeonSeed::parse(&self.seed),
            Difficulty::from_name(difficulty),
            DungeonSize::from_name(size),
        )
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = DelveConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Generate { dungeon, json } => {
            let dungeon = dungeon.build(&config);
            if json {
                let text = serde_json::to_string_pretty(&dungeon)
                    .context("Failed to serialize dungeon")?;
                println!("{text}");
            } else {
                print_summary(&dungeon);
            }
        }
        Command::Path { dungeon, from, to } => {
            let dungeon = dungeon.build(&config);
            let Some(path) = get_shortest_path(&dungeon, from, to) else {
                bail!("No path from room {from} to room {to} ({} rooms)", dungeon.room_count());
            };
            println!("{}", join_ids(path.iter().copied()));
        }
        Command::Reveal { dungeon, explored } => {
            let dungeon = dungeon.build(&config);
            println!("{}", join_ids(reveal_map(&dungeon, &explored).into_iter()));
        }
        Command::Fight { dungeon, room } => {
            let mut dungeon = dungeon.build(&config);
            let player = config.player.stats();
            let outcome = dungeon
                .resolve_encounter(room, &player)
                .with_context(|| format!("Failed to fight in room {room}"))?;
            info!(room, victory = outcome.victory, rounds = outcome.rounds, "combat resolved");
            let text =
                serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
            println!("{text}");
        }
    }

    Ok(())
}

fn print_summary(dungeon: &Dungeon) {
    let summary = get_dungeon_summary(dungeon);
    println!("Seed: {}", dungeon.seed);
    println!("Difficulty: {}", dungeon.difficulty.name());
    println!("Size: {}", dungeon.size.name());
    println!("Rooms: {}", summary.room_count);
    for (room_type, count) in &summary.rooms_by_type {
        println!("  {}: {count}", room_type.name());
    }
    println!("Enemies: {}", summary.enemy_count);
    println!("Loot: {}", summary.loot_count);
    println!("Puzzles: {}", summary.puzzle_count);
    println!("Traps: {}", summary.trap_count);
    println!("Secrets: {}", summary.secret_count);
    println!("Estimated Minutes: {}", summary.estimated_minutes);
    println!("Fingerprint: {:016x}", dungeon.fingerprint());
}

fn join_ids(ids: impl Iterator<Item = u32>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_values() {
        let config = DelveConfig::default();
        let args = DungeonArgs {
            seed: "7".to_string(),
            difficulty: Some("legend".to_string()),
            size: None,
        };
        let dungeon = args.build(&config);
        assert_eq!(dungeon.difficulty, Difficulty::Legend);
        assert_eq!(dungeon.size, DungeonSize::Medium);
        assert_eq!(dungeon.seed, DungeonSeed::Number(7));
    }

    #[test]
    fn reveal_parses_comma_separated_ids() {
        let cli = Cli::try_parse_from(["delve", "reveal", "--seed", "9", "--explored", "0,3,5"])
            .expect("parse");
        let Command::Reveal { explored, .. } = cli.command else {
            panic!("expected reveal");
        };
        assert_eq!(explored, vec![0, 3, 5]);
    }

    #[test]
    fn join_ids_formats_lists() {
        assert_eq!(join_ids([0_u32, 4, 9].into_iter()), "0,4,9");
        assert_eq!(join_ids(Vec::new().into_iter()), "");
    }
}
