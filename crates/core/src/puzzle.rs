//! Puzzle generation and attempt validation.
//! Each puzzle kind derives its own stream from `seed_from(seed, kind)`, so the solution depends
//! only on the seed and the kind.

use serde::{Deserialize, Serialize};

use crate::content::RIDDLES;
use crate::seed::{Mulberry32, seed_from};
use crate::types::PuzzleType;

const BASE_SOLVE_XP: u32 = 50;
const XP_PER_ATTEMPT: u32 = 5;
const HINT_AFTER_ATTEMPTS: u32 = 3;
const CRYSTAL_STEP_DEGREES: u16 = 45;

/// Shape of a puzzle's answer. Attempts use the same type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Solution {
    IntSequence(Vec<u32>),
    IndexSet(Vec<u32>),
    RiddleAnswer(String),
    AngleSequence(Vec<u16>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PuzzleType,
    pub description: String,
    #[serde(default)]
    pub solution: Option<Solution>,
    pub hint: String,
    pub solved: bool,
    pub attempts: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    pub success: bool,
    pub message: String,
    pub xp_reward: Option<u32>,
    pub hint: Option<String>,
}

impl SolveResult {
    fn failure(message: impl Into<String>, hint: Option<String>) -> Self {
        Self { success: false, message: message.into(), xp_reward: None, hint }
    }
}

pub fn generate_puzzle(seed: u32, kind: PuzzleType) -> Puzzle {
    let mut rng = Mulberry32::new(seed_from(seed, kind.name()));
    let (description, solution) = match kind {
        PuzzleType::LeverSequence => {
            let lever_count = rng.range_inclusive(3, 6);
            let mut order: Vec<u32> = (1..=lever_count as u32).collect();
            rng.shuffle(&mut order);
            (
                format!("{lever_count} rusted levers line the wall, to be pulled in order."),
                Solution::IntSequence(order),
            )
        }
        PuzzleType::PressurePlates => {
            let plate_count = rng.range_inclusive(4, 8);
            let mut plates: Vec<u32> = (0..plate_count as u32).collect();
            rng.shuffle(&mut plates);
            plates.truncate(plate_count / 2);
            plates.sort_unstable();
            (
                format!("{plate_count} pressure plates cover the floor. Only some bear weight."),
                Solution::IndexSet(plates),
            )
        }
        PuzzleType::Riddle => {
            let riddle = rng.pick(&RIDDLES);
            (
                format!("A stone face speaks: \"{}\"", riddle.question),
                Solution::RiddleAnswer(riddle.answer.to_string()),
            )
        }
        PuzzleType::PatternMatch => {
            let cell_count = rng.range_inclusive(3, 5);
            let pattern = (0..cell_count).map(|_| 1 + rng.below(4) as u32).collect();
            (
                format!("A panel of {cell_count} tiles, each showing one of four sigils."),
                Solution::IntSequence(pattern),
            )
        }
        PuzzleType::LightBridge => {
            let segment_count = rng.range_inclusive(4, 7);
            let colors = (0..segment_count).map(|_| rng.below(3) as u32).collect();
            (
                format!("A bridge of {segment_count} light segments glows in three colors."),
                Solution::IntSequence(colors),
            )
        }
        PuzzleType::CrystalAlign => {
            let crystal_count = rng.range_inclusive(3, 6);
            let angles =
                (0..crystal_count).map(|_| rng.below(8) as u16 * CRYSTAL_STEP_DEGREES).collect();
            (
                format!("{crystal_count} crystals rest on pedestals, turning in 45 degree steps."),
                Solution::AngleSequence(angles),
            )
        }
    };

    Puzzle {
        id: format!("puzzle_{seed}_{}", kind.name()),
        kind,
        description,
        solution: Some(solution),
        hint: hint_for(kind).to_string(),
        solved: false,
        attempts: 0,
    }
}

/// Lenient entry point for callers holding a type name.
pub fn generate_puzzle_named(seed: u32, kind: &str) -> Puzzle {
    generate_puzzle(seed, PuzzleType::from_name_or_fallback(kind))
}

pub fn solve_puzzle(puzzle: &mut Puzzle, attempt: &Solution) -> SolveResult {
    if puzzle.solved {
        return SolveResult::failure("The mechanism is already open.", None);
    }
    puzzle.attempts += 1;

    let Some(solution) = &puzzle.solution else {
        return SolveResult::failure("The mechanism is broken and cannot be solved.", None);
    };

    if answers_match(solution, attempt) {
        puzzle.solved = true;
        let xp = BASE_SOLVE_XP + puzzle.attempts * XP_PER_ATTEMPT;
        return SolveResult {
            success: true,
            message: format!("The puzzle yields! You gain {xp} XP."),
            xp_reward: Some(xp),
            hint: None,
        };
    }

    let hint = (puzzle.attempts >= HINT_AFTER_ATTEMPTS).then(|| puzzle.hint.clone());
    SolveResult::failure("Nothing happens.", hint)
}

fn answers_match(solution: &Solution, attempt: &Solution) -> bool {
    match (solution, attempt) {
        (Solution::IntSequence(expected), Solution::IntSequence(given))
        | (Solution::IndexSet(expected), Solution::IndexSet(given)) => expected == given,
        (Solution::RiddleAnswer(expected), Solution::RiddleAnswer(given)) => {
            expected.trim().to_lowercase() == given.trim().to_lowercase()
        }
        (Solution::AngleSequence(expected), Solution::AngleSequence(given)) => expected == given,
        _ => false,
    }
}

fn hint_for(kind: PuzzleType) -> &'static str {
    match kind {
        PuzzleType::LeverSequence => "Count the scratches worn beneath each lever.",
        PuzzleType::PressurePlates => "Half of the plates are polished by old footsteps.",
        PuzzleType::Riddle => "The answer is a single word.",
        PuzzleType::PatternMatch => "The sigils repeat the mosaic on the ceiling.",
        PuzzleType::LightBridge => "Watch which color the torches flicker.",
        PuzzleType::CrystalAlign => "Follow the faint beams toward the sealed door.",
    }
}
