use crate::types::{ProjectileKind, WeaponKind, WeaponStats};

// Per-tick values unless noted. One tick is `TICK_MS` of wall time.

// World
pub const WORLD_WIDTH: f64 = 1200.0;
pub const WORLD_HEIGHT: f64 = 800.0;
pub const TICK_MS: u64 = 16;

// Physics
pub const GRAVITY: f64 = 0.5;
pub const ITEM_GRAVITY: f64 = 0.2;
pub const BALL_GRAVITY: f64 = 0.1;
/// Per-axis velocity cap, applied before integration so fast bodies cannot
/// skip through thin platforms.
pub const MAX_VELOCITY: f64 = 20.0;
/// How far below a platform top a falling body's feet may sink and still land.
pub const LANDING_TOLERANCE: f64 = 10.0;

// Character
pub const CHARACTER_WIDTH: f64 = 40.0;
pub const CHARACTER_HEIGHT: f64 = 80.0;
pub const CROUCH_HEIGHT: f64 = 40.0;
pub const WALK_SPEED: f64 = 5.0;
pub const JUMP_VELOCITY: f64 = -15.0;
pub const ICE_SPEED_MULTIPLIER: f64 = 1.8;
pub const ADRENALINE_SPEED_MULTIPLIER: f64 = 1.5;
pub const MAX_HEALTH: i32 = 100;

// Status effects
pub const BANDAGE_HEAL: i32 = 25;
pub const ADRENALINE_DURATION_MS: i64 = 10_000;
pub const ADRENALINE_HEAL_INTERVAL_MS: i64 = 1_000;
pub const ADRENALINE_HEAL: i32 = 1;

// Armor
pub const ARMOR_DURABILITY: i32 = 100;
/// Light armor blocks melee hits up to this much outright.
pub const LIGHT_ARMOR_BLOCK: i32 = 5;
/// Ballistic armor absorbs `damage * num / den` of bullet damage (truncated).
pub const BALLISTIC_ABSORB_NUM: i32 = 7;
pub const BALLISTIC_ABSORB_DEN: i32 = 10;

// Items
pub const ITEM_SIZE: f64 = 30.0;
pub const ITEM_CAP: usize = 15;

// Projectiles
pub const BALL_LAUNCH_RATIO: f64 = 0.8;

pub fn projectile_size(kind: ProjectileKind) -> (f64, f64) {
    match kind {
        ProjectileKind::Melee => (30.0, 10.0),
        ProjectileKind::Ball => (20.0, 20.0),
        ProjectileKind::Bullet => (15.0, 7.0),
    }
}

pub fn weapon_stats(weapon: WeaponKind) -> WeaponStats {
    match weapon {
        WeaponKind::Fist => WeaponStats {
            ammo: -1,
            damage: 5,
            cooldown_ms: 500,
            projectile: ProjectileKind::Melee,
            speed: 10.0,
            lifespan: 20,
        },
        WeaponKind::Knife => WeaponStats {
            ammo: -1,
            damage: 10,
            cooldown_ms: 300,
            projectile: ProjectileKind::Melee,
            speed: 12.0,
            lifespan: 20,
        },
        WeaponKind::Ball => WeaponStats {
            ammo: 5,
            damage: 15,
            cooldown_ms: 1000,
            projectile: ProjectileKind::Ball,
            speed: 8.0,
            lifespan: 100,
        },
        WeaponKind::Rifle => WeaponStats {
            ammo: 20,
            damage: 18,
            cooldown_ms: 200,
            projectile: ProjectileKind::Bullet,
            speed: 15.0,
            lifespan: 80,
        },
        WeaponKind::Sniper => WeaponStats {
            ammo: 5,
            damage: 30,
            cooldown_ms: 1500,
            projectile: ProjectileKind::Bullet,
            speed: 20.0,
            lifespan: 80,
        },
    }
}
