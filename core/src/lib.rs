pub mod ai;
pub mod character;
pub mod combat;
pub mod config;
pub mod constants;
pub mod error;
pub mod hash;
pub mod init;
pub mod items;
pub mod physics;
pub mod prng;
pub mod projectiles;
pub mod snapshot;
pub mod step;
pub mod types;
pub mod weapons;

pub use ai::{best_item, find_path, steer};
pub use character::{DamageReport, EffectTick, Sweep};
pub use combat::{apply_pickup, resolve_pickups, resolve_projectile_hits};
pub use config::{AiTuning, ArenaConfig};
pub use constants::*;
pub use error::{ArenaError, Result};
pub use hash::*;
pub use init::*;
pub use items::{advance_items, random_item_kind, random_spawn_x, spawn_item};
pub use physics::{clamp_to_world, integrate, land_item, move_character, resolve_platform, Contact};
pub use prng::*;
pub use projectiles::{advance_projectile, advance_projectiles, is_out_of_bounds, spawn_projectile};
pub use snapshot::{snapshot, ArenaSnapshot, CharacterSnapshot};
pub use step::{end_match, step, step_mut, TickReport};
pub use types::*;
pub use weapons::{fire_weapon, FireResult};
