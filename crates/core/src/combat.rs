//! Turn-based combat resolution between one player and a queue of enemies.
//! Resolution is RNG-free: the outcome is a function of the stat blocks alone.
//! All stat arithmetic saturates, so extreme stat blocks clamp instead of wrapping.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::PlayerStats;

/// Safety valve for stat combinations where neither side can finish the fight.
pub const MAX_COMBAT_ROUNDS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub xp: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub victory: bool,
    pub survived: bool,
    pub rounds: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub xp_gained: u32,
}

pub fn player_hit_damage(player: &PlayerStats, enemy: &EnemyStats) -> i32 {
    player.attack.saturating_sub(enemy.defense).max(1)
}

/// Base hit plus half the speed advantage, rounded half up.
pub fn enemy_hit_damage(enemy: &EnemyStats, player: &PlayerStats) -> i32 {
    let base = enemy.attack.saturating_sub(player.defense).max(1);
    let speed_gap = enemy.speed.saturating_sub(player.speed).max(0);
    base.saturating_add(speed_gap / 2 + speed_gap % 2)
}

pub fn calculate_combat_outcome(player: &PlayerStats, enemies: &[EnemyStats]) -> CombatOutcome {
    let mut queue: VecDeque<EnemyStats> = enemies.iter().copied().collect();
    let mut player_hp = player.hp;
    let mut rounds = 0;
    let mut damage_dealt = 0;
    let mut damage_taken = 0;
    let mut pending_xp = 0;

    while player_hp > 0 && rounds < MAX_COMBAT_ROUNDS {
        let Some(target) = queue.front_mut() else {
            break;
        };
        rounds += 1;

        let hit = player_hit_damage(player, target);
        target.hp = target.hp.saturating_sub(hit);
        damage_dealt = hit.saturating_add(damage_dealt);
        if target.hp <= 0 {
            pending_xp = target.xp.saturating_add(pending_xp);
            queue.pop_front();
        }

        for enemy in &queue {
            let hit = enemy_hit_damage(enemy, player);
            player_hp = player_hp.saturating_sub(hit);
            damage_taken = hit.saturating_add(damage_taken);
        }
    }

    let victory = queue.is_empty();
    CombatOutcome {
        victory,
        survived: player_hp > 0,
        rounds,
        damage_dealt,
        damage_taken,
        xp_gained: if victory { pending_xp } else { 0 },
    }
}
