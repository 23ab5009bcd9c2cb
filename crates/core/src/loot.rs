//! Loot tier rolls and item drops.
//! Item identity depends only on `(seed, tier)`; difficulty scales the value and nothing else.

use crate::content::{difficulty_settings, loot_table};
use crate::model::Item;
use crate::seed::{Mulberry32, seed_from};
use crate::types::{Difficulty, LootTier};

/// Weighted tier roll. Harder difficulties shift weight toward rarer tiers.
pub fn determine_loot_tier(rng: &mut Mulberry32, difficulty: Difficulty) -> LootTier {
    let roll = rng.next_f64() * 100.0;
    let thresholds = difficulty_settings(difficulty).tier_thresholds;
    LootTier::ALL
        .into_iter()
        .zip(thresholds)
        .find_map(|(tier, threshold)| (roll < threshold).then_some(tier))
        .unwrap_or(LootTier::Legendary)
}

pub fn get_loot_drop(seed: u32, difficulty: Difficulty, tier: LootTier) -> Item {
    let mut rng = Mulberry32::folded(seed_from(seed, tier.name()));
    let template = rng.pick(loot_table(tier));
    let value = (f64::from(template.value) * difficulty_settings(difficulty).loot_mult).round();

    Item {
        instance_id: format!("{}_{seed}", template.id),
        id: template.id.to_string(),
        name: template.name.to_string(),
        kind: template.kind,
        value: value as u32,
        effect: template.effect.to_string(),
        tier,
    }
}

/// Raises `tier` to at least `floor`.
pub fn floor_tier(tier: LootTier, floor: LootTier) -> LootTier {
    tier.max(floor)
}
