use serde::{Deserialize, Serialize};

use crate::constants::{ITEM_CAP, TICK_MS};
use crate::error::{ArenaError, Result};
use crate::init::arena;
use crate::types::{ArenaMap, GameMode, ItemKind, WeaponKind};

/// Match-level settings. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub seed: u32,
    pub mode: GameMode,
    pub map: ArenaMap,
    pub tick_ms: u64,
    pub item_cap: usize,
    pub ai: AiTuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            mode: GameMode::PlayerVsPlayer,
            map: arena(),
            tick_ms: TICK_MS,
            item_cap: ITEM_CAP,
            ai: AiTuning::default(),
        }
    }
}

impl ArenaConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(ArenaError::InvalidTickLength);
        }
        if self.item_cap == 0 {
            return Err(ArenaError::ZeroItemCap);
        }
        let (width, height) = (self.map.width, self.map.height);
        if !(width > 0.0 && height > 0.0) {
            return Err(ArenaError::InvalidWorldSize { width, height });
        }
        for (index, p) in self.map.platforms.iter().enumerate() {
            if !(p.rect.width > 0.0 && p.rect.height > 0.0) {
                return Err(ArenaError::InvalidPlatform { index });
            }
        }
        for (slot, s) in self.map.spawn_points.iter().enumerate() {
            if !(0.0..=width).contains(&s.x) || !(0.0..=height).contains(&s.y) {
                return Err(ArenaError::SpawnOutOfBounds { slot });
            }
        }
        self.ai.validate()
    }
}

/// Knobs of the AI state machine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    pub dwell: DwellTicks,
    pub chances: TransitionChances,
    pub scores: ItemScores,
    pub ranges: AttackRanges,
    pub steering: Steering,
    pub combat: CombatTuning,
}

impl AiTuning {
    fn validate(&self) -> Result<()> {
        let c = &self.chances;
        for (name, value) in [
            ("find_armor", c.find_armor),
            ("low_health_find_weapon", c.low_health_find_weapon),
            ("hurt_find_armor", c.hurt_find_armor),
            ("attack_retreat", c.attack_retreat),
            ("attack_seek", c.attack_seek),
            ("retreat_find_weapon", c.retreat_find_weapon),
            ("idle_find_weapon", c.idle_find_weapon),
            ("idle_find_armor", c.idle_find_armor),
        ] {
            if value > 100 {
                return Err(ArenaError::ChanceOutOfRange { name, value });
            }
        }
        // Cumulative bands must fit in one roll.
        if c.attack_retreat + c.attack_seek > 100 {
            return Err(ArenaError::ChanceOutOfRange {
                name: "attack_retreat + attack_seek",
                value: c.attack_retreat + c.attack_seek,
            });
        }
        if c.idle_find_weapon + c.idle_find_armor > 100 {
            return Err(ArenaError::ChanceOutOfRange {
                name: "idle_find_weapon + idle_find_armor",
                value: c.idle_find_weapon + c.idle_find_armor,
            });
        }
        if self.scores.distance_divisor <= 0.0 {
            return Err(ArenaError::ZeroDistanceDivisor);
        }
        if self.combat.jitter_interval <= 0 {
            return Err(ArenaError::InvalidJitterInterval(self.combat.jitter_interval));
        }
        Ok(())
    }
}

/// Countdown assigned on entering a state, in ticks. Named `<from>_<to>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwellTicks {
    pub find_weapon_armor: i32,
    pub find_weapon_seek: i32,
    pub find_weapon_timeout: i32,
    pub find_armor_seek: i32,
    pub find_armor_timeout: i32,
    pub seek_find_weapon: i32,
    pub seek_retreat: i32,
    pub seek_find_armor: i32,
    pub seek_attack: i32,
    pub attack_retreat: i32,
    pub attack_seek: i32,
    pub attack_stay: i32,
    pub retreat_find_weapon: i32,
    pub retreat_seek: i32,
    pub idle_find_weapon: i32,
    pub idle_find_armor: i32,
    pub idle_seek: i32,
}

impl Default for DwellTicks {
    fn default() -> Self {
        Self {
            find_weapon_armor: 100,
            find_weapon_seek: 100,
            find_weapon_timeout: 80,
            find_armor_seek: 100,
            find_armor_timeout: 80,
            seek_find_weapon: 150,
            seek_retreat: 100,
            seek_find_armor: 120,
            seek_attack: 50,
            attack_retreat: 60,
            attack_seek: 80,
            attack_stay: 50,
            retreat_find_weapon: 100,
            retreat_seek: 80,
            idle_find_weapon: 80,
            idle_find_armor: 70,
            idle_seek: 100,
        }
    }
}

/// Percent chances, compared against a roll in `0..100`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionChances {
    /// FindWeapon → FindArmor once armed (only without armor).
    pub find_armor: u32,
    /// SeekPlayer → FindWeapon when badly hurt and unarmed; else Retreat.
    pub low_health_find_weapon: u32,
    /// SeekPlayer → FindArmor when hurt without armor.
    pub hurt_find_armor: u32,
    pub attack_retreat: u32,
    /// Band after `attack_retreat`; the remainder keeps attacking.
    pub attack_seek: u32,
    pub retreat_find_weapon: u32,
    pub idle_find_weapon: u32,
    /// Band after `idle_find_weapon`; the remainder seeks.
    pub idle_find_armor: u32,
    pub low_health: i32,
    pub hurt_health: i32,
}

impl Default for TransitionChances {
    fn default() -> Self {
        Self {
            find_armor: 40,
            low_health_find_weapon: 70,
            hurt_find_armor: 50,
            attack_retreat: 30,
            attack_seek: 30,
            retreat_find_weapon: 40,
            idle_find_weapon: 30,
            idle_find_armor: 20,
            low_health: 30,
            hurt_health: 50,
        }
    }
}

/// Base desirability of each item kind for target selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemScores {
    pub knife: i32,
    pub ball: i32,
    pub rifle: i32,
    pub sniper: i32,
    pub light_armor: i32,
    pub ballistic_vest: i32,
    pub adrenaline: i32,
    pub bandage: i32,
    pub bandage_hurt: i32,
    pub bandage_below: i32,
    pub medkit: i32,
    pub medkit_critical: i32,
    pub medkit_below: i32,
    /// One point is subtracted per this many units of distance.
    pub distance_divisor: f64,
}

impl Default for ItemScores {
    fn default() -> Self {
        Self {
            knife: 30,
            ball: 60,
            rifle: 80,
            sniper: 90,
            light_armor: 50,
            ballistic_vest: 70,
            adrenaline: 65,
            bandage: 20,
            bandage_hurt: 40,
            bandage_below: 50,
            medkit: 40,
            medkit_critical: 85,
            medkit_below: 30,
            distance_divisor: 10.0,
        }
    }
}

impl ItemScores {
    pub fn base(&self, kind: ItemKind, health: i32) -> i32 {
        match kind {
            ItemKind::Knife => self.knife,
            ItemKind::Ball => self.ball,
            ItemKind::Rifle => self.rifle,
            ItemKind::Sniper => self.sniper,
            ItemKind::LightArmor => self.light_armor,
            ItemKind::BallisticVest => self.ballistic_vest,
            ItemKind::Adrenaline => self.adrenaline,
            ItemKind::Bandage if health < self.bandage_below => self.bandage_hurt,
            ItemKind::Bandage => self.bandage,
            ItemKind::Medkit if health < self.medkit_below => self.medkit_critical,
            ItemKind::Medkit => self.medkit,
        }
    }
}

/// Engagement distance per weapon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackRanges {
    pub fist: f64,
    pub knife: f64,
    pub ball: f64,
    pub rifle: f64,
    pub sniper: f64,
}

impl Default for AttackRanges {
    fn default() -> Self {
        Self {
            fist: 50.0,
            knife: 70.0,
            ball: 200.0,
            rifle: 300.0,
            sniper: 500.0,
        }
    }
}

impl AttackRanges {
    pub fn for_weapon(&self, kind: WeaponKind) -> f64 {
        match kind {
            WeaponKind::Fist => self.fist,
            WeaponKind::Knife => self.knife,
            WeaponKind::Ball => self.ball,
            WeaponKind::Rifle => self.rifle,
            WeaponKind::Sniper => self.sniper,
        }
    }
}

/// Target-point to intent translation and path heuristics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Steering {
    pub dead_band: f64,
    pub jump_above: f64,
    pub crouch_below: f64,
    /// Height above a platform top the pathing aims for.
    pub stand_offset: f64,
    pub support_tolerance: f64,
}

impl Default for Steering {
    fn default() -> Self {
        Self {
            dead_band: 5.0,
            jump_above: 50.0,
            crouch_below: 30.0,
            stand_offset: 30.0,
            support_tolerance: 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Ticks between AI shots.
    pub shoot_cooldown: i32,
    pub jitter_interval: i32,
    pub jitter_step: f64,
    pub retreat_distance: f64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            shoot_cooldown: 30,
            jitter_interval: 30,
            jitter_step: 50.0,
            retreat_distance: 200.0,
        }
    }
}
