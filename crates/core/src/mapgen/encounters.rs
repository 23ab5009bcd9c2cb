//! Enemy encounter selection and difficulty scaling.

use crate::content::{
    BOSS_TEMPLATES, DifficultySettings, ENEMY_TEMPLATES, EnemyTemplate, difficulty_settings,
};
use crate::model::Enemy;
use crate::seed::{Mulberry32, seed_from};
use crate::types::{Difficulty, RoomType};

const MAX_REGULAR_ENEMIES: usize = 4;
const MIN_BOSS_MINIONS: usize = 1;
const MAX_BOSS_MINIONS: usize = 3;

/// Enemies for one room, drawn from the `enemies` stream under `room_seed`.
pub fn generate_encounter(
    room_seed: u32,
    difficulty: Difficulty,
    room_type: RoomType,
) -> Vec<Enemy> {
    let settings = difficulty_settings(difficulty);
    let mut rng = Mulberry32::new(seed_from(room_seed, "enemies"));
    let eligible = eligible_templates(ENEMY_TEMPLATES, settings.max_enemy_tier);

    match room_type {
        RoomType::Entrance | RoomType::RestArea => Vec::new(),
        RoomType::BossRoom => {
            let bosses = eligible_templates(BOSS_TEMPLATES, settings.max_enemy_tier);
            let boss = *rng.pick(&bosses);
            let minion_count = rng.range_inclusive(MIN_BOSS_MINIONS, MAX_BOSS_MINIONS);

            let mut enemies = Vec::with_capacity(minion_count + 1);
            let boss_id = format!("{}_{room_seed}_boss", boss.id);
            enemies.push(scale_enemy(boss, settings, true, boss_id));
            for slot in 0..minion_count {
                let template = *rng.pick(&eligible);
                let instance_id = format!("{}_{room_seed}_{slot}", template.id);
                enemies.push(scale_enemy(template, settings, false, instance_id));
            }
            enemies
        }
        _ => {
            let count = rng.below(MAX_REGULAR_ENEMIES + 1);
            (0..count)
                .map(|slot| {
                    let template = *rng.pick(&eligible);
                    let instance_id = format!("{}_{room_seed}_{slot}", template.id);
                    scale_enemy(template, settings, false, instance_id)
                })
                .collect()
        }
    }
}

fn eligible_templates(
    templates: &'static [EnemyTemplate],
    max_tier: u8,
) -> Vec<&'static EnemyTemplate> {
    templates.iter().filter(|template| template.tier <= max_tier).collect()
}

/// HP uses the boss multiplier for bosses; attack and defense use the general attack multiplier.
fn scale_enemy(
    template: &EnemyTemplate,
    settings: &DifficultySettings,
    is_boss: bool,
    instance_id: String,
) -> Enemy {
    let hp_mult = if is_boss { settings.boss_hp_mult } else { settings.enemy_hp_mult };
    let hp = scale_stat(template.hp, hp_mult).max(1);

    Enemy {
        instance_id,
        template_id: template.id.to_string(),
        name: template.name.to_string(),
        hp,
        max_hp: hp,
        attack: scale_stat(template.attack, settings.enemy_atk_mult),
        defense: scale_stat(template.defense, settings.enemy_atk_mult),
        speed: template.speed,
        xp: template.xp,
        tier: template.tier,
        is_boss,
    }
}

fn scale_stat(value: i32, multiplier: f64) -> i32 {
    (f64::from(value) * multiplier).round() as i32
}
