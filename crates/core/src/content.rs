//! Static catalogs: difficulty bundles, size classes, room shapes, enemies, loot, riddles, traps.
//! These are content parameters; nothing here is mutated at runtime.

use crate::types::{Difficulty, DungeonSize, ItemKind, LootTier, RoomType, TrapKind};

pub struct DifficultySettings {
    pub enemy_hp_mult: f64,
    pub enemy_atk_mult: f64,
    pub boss_hp_mult: f64,
    pub loot_mult: f64,
    pub trap_damage: i32,
    pub score_mult: f64,
    /// Highest enemy template tier that may spawn.
    pub max_enemy_tier: u8,
    /// Cumulative percent thresholds for common, uncommon, rare and epic.
    /// Rolls at or above the last threshold are legendary.
    pub tier_thresholds: [f64; 4],
}

const NOVICE: DifficultySettings = DifficultySettings {
    enemy_hp_mult: 0.7,
    enemy_atk_mult: 0.7,
    boss_hp_mult: 0.8,
    loot_mult: 0.8,
    trap_damage: 5,
    score_mult: 1.0,
    max_enemy_tier: 1,
    tier_thresholds: [60.0, 85.0, 95.0, 99.0],
};

const ADVENTURER: DifficultySettings = DifficultySettings {
    enemy_hp_mult: 1.0,
    enemy_atk_mult: 1.0,
    boss_hp_mult: 1.0,
    loot_mult: 1.0,
    trap_damage: 10,
    score_mult: 1.5,
    max_enemy_tier: 2,
    tier_thresholds: [50.0, 78.0, 92.0, 98.5],
};

const HERO: DifficultySettings = DifficultySettings {
    enemy_hp_mult: 1.4,
    enemy_atk_mult: 1.3,
    boss_hp_mult: 1.5,
    loot_mult: 1.3,
    trap_damage: 15,
    score_mult: 2.0,
    max_enemy_tier: 3,
    tier_thresholds: [38.0, 68.0, 88.0, 97.0],
};

const LEGEND: DifficultySettings = DifficultySettings {
    enemy_hp_mult: 2.0,
    enemy_atk_mult: 1.6,
    boss_hp_mult: 2.2,
    loot_mult: 1.7,
    trap_damage: 25,
    score_mult: 3.0,
    max_enemy_tier: 4,
    tier_thresholds: [25.0, 55.0, 80.0, 94.0],
};

pub fn difficulty_settings(difficulty: Difficulty) -> &'static DifficultySettings {
    match difficulty {
        Difficulty::Novice => &NOVICE,
        Difficulty::Adventurer => &ADVENTURER,
        Difficulty::Hero => &HERO,
        Difficulty::Legend => &LEGEND,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomCountRange {
    pub min_rooms: usize,
    pub max_rooms: usize,
}

pub fn room_count_range(size: DungeonSize) -> RoomCountRange {
    match size {
        DungeonSize::Small => RoomCountRange { min_rooms: 5, max_rooms: 8 },
        DungeonSize::Medium => RoomCountRange { min_rooms: 10, max_rooms: 15 },
        DungeonSize::Large => RoomCountRange { min_rooms: 18, max_rooms: 25 },
        DungeonSize::Epic => RoomCountRange { min_rooms: 30, max_rooms: 40 },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionRange {
    pub width: (u32, u32),
    pub height: (u32, u32),
    /// Height mirrors the rolled width.
    pub square: bool,
}

pub fn room_dimension_range(room_type: RoomType) -> DimensionRange {
    let rect = |width, height| DimensionRange { width, height, square: false };
    match room_type {
        RoomType::Entrance => rect((6, 8), (6, 8)),
        RoomType::Corridor => rect((3, 4), (8, 14)),
        RoomType::Chamber => rect((8, 14), (8, 14)),
        RoomType::TreasureRoom => rect((6, 10), (6, 10)),
        RoomType::PuzzleRoom => rect((8, 12), (8, 12)),
        RoomType::TrapRoom => rect((6, 12), (6, 12)),
        RoomType::RestArea => rect((6, 9), (6, 9)),
        RoomType::SecretRoom => rect((4, 7), (4, 7)),
        RoomType::BossRoom => DimensionRange { width: (14, 20), height: (14, 20), square: true },
    }
}

pub fn room_descriptions(room_type: RoomType) -> &'static [&'static str] {
    match room_type {
        RoomType::Entrance => &[
            "Worn steps descend into the dark. Daylight fades behind you.",
            "A collapsed gatehouse opens onto a damp stone hall.",
        ],
        RoomType::Corridor => &[
            "A narrow passage. Water drips somewhere ahead.",
            "A long corridor lined with empty torch sconces.",
            "The ceiling presses low along this cramped tunnel.",
        ],
        RoomType::Chamber => &[
            "A vaulted chamber littered with broken furniture.",
            "Pillars carved with faded reliefs hold up the roof.",
            "Bones crunch underfoot in this wide, echoing hall.",
        ],
        RoomType::TreasureRoom => &[
            "Coins glint from overturned chests.",
            "A looted vault. Something valuable was missed.",
        ],
        RoomType::PuzzleRoom => &[
            "Strange mechanisms cover the walls of this sealed room.",
            "Runes glow faintly around a locked stone door.",
        ],
        RoomType::TrapRoom => &[
            "Scorch marks and old bloodstains cover the floor.",
            "The flagstones here sit at suspiciously uneven heights.",
        ],
        RoomType::RestArea => &[
            "A quiet alcove with a cold fire pit.",
            "Fresh water trickles from a crack into a stone basin.",
        ],
        RoomType::SecretRoom => &[
            "A hidden room, untouched for centuries.",
            "Dust lies thick on the shelves of this forgotten study.",
        ],
        RoomType::BossRoom => &[
            "A vast throne hall. Something stirs on the dais.",
            "The air is heavy. Claw marks score the walls of this arena.",
        ],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub xp: u32,
    pub tier: u8,
}

const fn enemy(
    id: &'static str,
    name: &'static str,
    stats: [i32; 4],
    xp: u32,
    tier: u8,
) -> EnemyTemplate {
    EnemyTemplate {
        id,
        name,
        hp: stats[0],
        attack: stats[1],
        defense: stats[2],
        speed: stats[3],
        xp,
        tier,
    }
}

pub const ENEMY_TEMPLATES: &[EnemyTemplate] = &[
    enemy("giant_rat", "Giant Rat", [12, 3, 0, 9], 8, 1),
    enemy("cave_bat", "Cave Bat", [8, 2, 0, 12], 6, 1),
    enemy("goblin_scout", "Goblin Scout", [15, 4, 1, 8], 12, 1),
    enemy("skeleton", "Skeleton", [18, 4, 2, 6], 15, 1),
    enemy("orc_grunt", "Orc Grunt", [28, 6, 3, 6], 25, 2),
    enemy("dire_wolf", "Dire Wolf", [22, 7, 1, 11], 22, 2),
    enemy("cultist", "Cultist", [20, 8, 1, 8], 24, 2),
    enemy("troll", "Troll", [45, 9, 4, 5], 45, 3),
    enemy("wraith", "Wraith", [30, 11, 2, 10], 50, 3),
    enemy("ogre_brute", "Ogre Brute", [55, 10, 5, 4], 55, 3),
    enemy("shadow_knight", "Shadow Knight", [60, 13, 7, 8], 80, 4),
    enemy("lich_adept", "Lich Adept", [45, 16, 4, 9], 90, 4),
    enemy("stone_golem", "Stone Golem", [80, 11, 10, 3], 85, 4),
];

pub const BOSS_TEMPLATES: &[EnemyTemplate] = &[
    enemy("goblin_warlord", "Goblin Warlord", [90, 10, 4, 7], 150, 1),
    enemy("necromancer", "Necromancer", [120, 13, 5, 8], 220, 2),
    enemy("bone_dragon", "Bone Dragon", [180, 16, 8, 7], 320, 3),
    enemy("abyssal_tyrant", "Abyssal Tyrant", [260, 20, 10, 9], 500, 4),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub value: u32,
    pub effect: &'static str,
}

const fn loot(
    id: &'static str,
    name: &'static str,
    kind: ItemKind,
    value: u32,
    effect: &'static str,
) -> LootTemplate {
    LootTemplate { id, name, kind, value, effect }
}

const COMMON_LOOT: &[LootTemplate] = &[
    loot("rusty_dagger", "Rusty Dagger", ItemKind::Weapon, 10, "+1 attack"),
    loot("leather_cap", "Leather Cap", ItemKind::Armor, 8, "+1 defense"),
    loot("minor_health_potion", "Minor Health Potion", ItemKind::Potion, 12, "restore 15 hp"),
    loot("copper_ring", "Copper Ring", ItemKind::Trinket, 15, "+1 speed"),
    loot("tattered_map", "Tattered Map", ItemKind::Scroll, 5, "reveal one adjacent room"),
];

const UNCOMMON_LOOT: &[LootTemplate] = &[
    loot("iron_sword", "Iron Sword", ItemKind::Weapon, 40, "+3 attack"),
    loot("chainmail_vest", "Chainmail Vest", ItemKind::Armor, 45, "+3 defense"),
    loot("health_potion", "Health Potion", ItemKind::Potion, 30, "restore 35 hp"),
    loot("scroll_of_warding", "Scroll of Warding", ItemKind::Scroll, 35, "negate one trap"),
    loot("amethyst", "Amethyst", ItemKind::Gem, 50, "none"),
];

const RARE_LOOT: &[LootTemplate] = &[
    loot("elven_longbow", "Elven Longbow", ItemKind::Weapon, 120, "+6 attack"),
    loot("mithril_coif", "Mithril Coif", ItemKind::Armor, 140, "+5 defense"),
    loot("greater_health_potion", "Greater Health Potion", ItemKind::Potion, 90, "restore 80 hp"),
    loot("scroll_of_fireball", "Scroll of Fireball", ItemKind::Scroll, 110, "40 damage to all"),
    loot("sapphire", "Sapphire", ItemKind::Gem, 150, "none"),
];

const EPIC_LOOT: &[LootTemplate] = &[
    loot("runeblade", "Runeblade", ItemKind::Weapon, 400, "+10 attack"),
    loot("dragonscale_mail", "Dragonscale Mail", ItemKind::Armor, 450, "+9 defense"),
    loot("elixir_of_vigor", "Elixir of Vigor", ItemKind::Potion, 300, "+20 max hp"),
    loot("amulet_of_the_deep", "Amulet of the Deep", ItemKind::Trinket, 500, "+3 speed"),
];

const LEGENDARY_LOOT: &[LootTemplate] = &[
    loot("sunforged_greatsword", "Sunforged Greatsword", ItemKind::Weapon, 1_500, "+18 attack"),
    loot("crown_of_the_lich_king", "Crown of the Lich King", ItemKind::Armor, 1_800, "+12 defense"),
    loot("phoenix_feather", "Phoenix Feather", ItemKind::Trinket, 1_200, "revive once"),
    loot("heart_of_the_mountain", "Heart of the Mountain", ItemKind::Gem, 2_000, "none"),
];

pub fn loot_table(tier: LootTier) -> &'static [LootTemplate] {
    match tier {
        LootTier::Common => COMMON_LOOT,
        LootTier::Uncommon => UNCOMMON_LOOT,
        LootTier::Rare => RARE_LOOT,
        LootTier::Epic => EPIC_LOOT,
        LootTier::Legendary => LEGENDARY_LOOT,
    }
}

pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const RIDDLES: [Riddle; 5] = [
    Riddle {
        question: "I speak without a mouth and hear without ears. What am I?",
        answer: "echo",
    },
    Riddle {
        question: "The more of me you take, the more you leave behind. What am I?",
        answer: "footsteps",
    },
    Riddle { question: "What has keys but opens no locks?", answer: "piano" },
    Riddle {
        question: "I have cities but no houses, forests but no trees, water but no fish. What am I?",
        answer: "map",
    },
    Riddle {
        question: "What can run but never walks, has a bed but never sleeps?",
        answer: "river",
    },
];

pub const TRAP_KINDS: [TrapKind; 6] = [
    TrapKind::SpikePit,
    TrapKind::PoisonDart,
    TrapKind::FireJet,
    TrapKind::CollapsingCeiling,
    TrapKind::ArcaneGlyph,
    TrapKind::SwingingBlade,
];
