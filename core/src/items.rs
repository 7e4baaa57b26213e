use tracing::debug;

use crate::constants::*;
use crate::physics::{integrate, land_item};
use crate::prng::RandomSource;
use crate::types::*;

/// Spawn weights in percent, summing to 100.
const SPAWN_TABLE: [(ItemKind, u32); 9] = [
    (ItemKind::Knife, 10),
    (ItemKind::Ball, 10),
    (ItemKind::Rifle, 10),
    (ItemKind::Sniper, 10),
    (ItemKind::Bandage, 15),
    (ItemKind::Medkit, 10),
    (ItemKind::Adrenaline, 10),
    (ItemKind::LightArmor, 12),
    (ItemKind::BallisticVest, 13),
];

/// Draw an item kind from the spawn table.
pub fn random_item_kind(rng: &mut impl RandomSource) -> ItemKind {
    let mut roll = rng.below(100);
    for (kind, weight) in SPAWN_TABLE {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    ItemKind::BallisticVest
}

/// Horizontal drop position, keeping 100 units clear of either wall.
pub fn random_spawn_x(rng: &mut impl RandomSource, world_width: f64) -> f64 {
    let span = (world_width - 200.0).max(1.0) as u32;
    100.0 + rng.below(span) as f64
}

/// Drop a new item at the top of the world. When the population exceeds
/// `cap` the oldest items are evicted.
pub fn spawn_item(state: &mut ArenaState, kind: ItemKind, x: f64, cap: usize) -> u32 {
    let id = state.next_item_id;
    state.next_item_id += 1;
    state.items.push(Item {
        id,
        kind,
        body: Body::new(x, 0.0, ITEM_SIZE, ITEM_SIZE),
    });

    while state.items.len() > cap {
        let evicted = state.items.remove(0);
        debug!(id = evicted.id, kind = ?evicted.kind, "item evicted");
    }
    id
}

/// Fall under item gravity and settle onto platforms.
pub fn advance_items(items: &mut [Item], platforms: &[Platform]) {
    for item in items.iter_mut() {
        integrate(&mut item.body, ITEM_GRAVITY);
        for platform in platforms {
            land_item(&mut item.body, platform);
        }
    }
}
