use tracing::debug;

use crate::constants::*;
use crate::types::*;

/// Apply an item's effect to the character who picked it up.
pub fn apply_pickup(ch: &mut Character, kind: ItemKind) {
    match kind {
        ItemKind::Knife => ch.equip_weapon(WeaponKind::Knife),
        ItemKind::Ball => ch.equip_weapon(WeaponKind::Ball),
        ItemKind::Rifle => ch.equip_weapon(WeaponKind::Rifle),
        ItemKind::Sniper => ch.equip_weapon(WeaponKind::Sniper),
        ItemKind::Bandage => ch.heal(BANDAGE_HEAL),
        ItemKind::Medkit => ch.health = MAX_HEALTH,
        ItemKind::Adrenaline => ch.start_adrenaline(),
        ItemKind::LightArmor => ch.equip_armor(ArmorKind::Light),
        ItemKind::BallisticVest => ch.equip_armor(ArmorKind::Ballistic),
    }
}

/// Crouching characters pick up items they overlap. Items are visited in
/// insertion order and P1 gets first claim on each.
pub fn resolve_pickups(state: &mut ArenaState, events: &mut Vec<ArenaEvent>) {
    let mut i = 0;
    while i < state.items.len() {
        let item_rect = state.items[i].body.rect();
        let taker = CharacterId::ALL.into_iter().find(|&id| {
            let ch = state.character(id);
            ch.crouching && ch.body.rect().overlaps(&item_rect)
        });

        match taker {
            Some(id) => {
                let item = state.items.remove(i);
                apply_pickup(state.character_mut(id), item.kind);
                debug!(who = ?id, kind = ?item.kind, "item picked up");
                events.push(ArenaEvent::ItemPicked {
                    who: id,
                    kind: item.kind,
                });
            }
            None => i += 1,
        }
    }
}

/// Projectile hits against characters, then against terrain.
///
/// Returns the winner as soon as a hit drops a character to zero health.
/// Processing stops there; untouched projectiles stay in the world.
pub fn resolve_projectile_hits(
    state: &mut ArenaState,
    events: &mut Vec<ArenaEvent>,
) -> Option<CharacterId> {
    let mut i = 0;
    'projectiles: while i < state.projectiles.len() {
        let proj = state.projectiles[i];
        let rect = proj.body.rect();

        for id in CharacterId::ALL {
            if proj.owner == id || !state.character(id).body.rect().overlaps(&rect) {
                continue;
            }
            state.projectiles.remove(i);
            let victim = state.character_mut(id);
            let report = victim.take_damage(proj.damage, proj.kind);
            let health = victim.health;
            events.push(ArenaEvent::Hit {
                victim: id,
                kind: proj.kind,
                raw: proj.damage,
                dealt: report.dealt,
            });
            if report.armor_broken {
                debug!(who = ?id, "armor broken");
                events.push(ArenaEvent::ArmorBroken { who: id });
            }
            if health <= 0 {
                return Some(id.other());
            }
            continue 'projectiles;
        }

        if proj.kind != ProjectileKind::Melee
            && state.platforms.iter().any(|p| p.rect.overlaps(&rect))
        {
            state.projectiles.remove(i);
            continue;
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};
    use crate::projectiles::spawn_projectile;

    fn open_field() -> ArenaState {
        let mut state = create_initial_state(&default_config(1));
        state.platforms.clear();
        state
    }

    fn item_at(id: u32, kind: ItemKind, x: f64, y: f64) -> Item {
        Item {
            id,
            kind,
            body: Body::new(x, y, ITEM_SIZE, ITEM_SIZE),
        }
    }

    fn bullet_into(state: &ArenaState, owner: CharacterId, target: CharacterId, damage: i32) -> Projectile {
        let mut p = spawn_projectile(99, owner, WeaponKind::Rifle, state.character(target).center(), Facing::Right);
        p.damage = damage;
        p
    }

    #[test]
    fn pickup_requires_crouch() {
        let mut state = open_field();
        let pos = state.characters[0].pos();
        state.items.push(item_at(0, ItemKind::Sniper, pos.x, pos.y + 50.0));
        let mut events = Vec::new();

        resolve_pickups(&mut state, &mut events);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.characters[0].weapon.kind, WeaponKind::Fist);

        state.characters[0].crouch(true);
        resolve_pickups(&mut state, &mut events);
        assert!(state.items.is_empty());
        assert_eq!(state.characters[0].weapon.kind, WeaponKind::Sniper);
        assert_eq!(state.characters[0].weapon.ammo, 5);
        assert_eq!(
            events,
            vec![ArenaEvent::ItemPicked { who: CharacterId::P1, kind: ItemKind::Sniper }]
        );
    }

    #[test]
    fn p1_claims_contested_item() {
        let mut state = open_field();
        state.characters[1].body.x = state.characters[0].body.x;
        for ch in state.characters.iter_mut() {
            ch.crouch(true);
        }
        let pos = state.characters[0].pos();
        state.items.push(item_at(0, ItemKind::Medkit, pos.x, pos.y));
        state.items.push(item_at(1, ItemKind::Bandage, pos.x, pos.y));
        state.characters[0].health = 40;
        state.characters[1].health = 40;

        resolve_pickups(&mut state, &mut Vec::new());
        // P1 takes both: the medkit first, then the bandage on top of it.
        assert!(state.items.is_empty());
        assert_eq!(state.characters[0].health, 100);
        assert_eq!(state.characters[1].health, 40);
    }

    #[test]
    fn pickup_effects() {
        let mut ch = Character::new(CharacterId::P1, Vec2::new(0.0, 0.0));
        ch.health = 90;
        apply_pickup(&mut ch, ItemKind::Bandage);
        assert_eq!(ch.health, 100);

        ch.health = 20;
        apply_pickup(&mut ch, ItemKind::Bandage);
        assert_eq!(ch.health, 45);

        apply_pickup(&mut ch, ItemKind::Medkit);
        assert_eq!(ch.health, 100);

        apply_pickup(&mut ch, ItemKind::LightArmor);
        apply_pickup(&mut ch, ItemKind::BallisticVest);
        assert_eq!(ch.armor, Some(Armor::new(ArmorKind::Ballistic)));

        apply_pickup(&mut ch, ItemKind::Adrenaline);
        assert!(ch.has_adrenaline());

        apply_pickup(&mut ch, ItemKind::Ball);
        assert_eq!(ch.weapon.kind, WeaponKind::Ball);
    }

    #[test]
    fn owner_is_never_hit() {
        let mut state = open_field();
        let p = bullet_into(&state, CharacterId::P1, CharacterId::P1, 18);
        state.projectiles.push(p);
        assert_eq!(resolve_projectile_hits(&mut state, &mut Vec::new()), None);
        assert_eq!(state.characters[0].health, 100);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn hit_applies_armor_and_consumes_projectile() {
        let mut state = open_field();
        state.characters[1].equip_armor(ArmorKind::Ballistic);
        let p = bullet_into(&state, CharacterId::P1, CharacterId::P2, 10);
        state.projectiles.push(p);
        let mut events = Vec::new();

        assert_eq!(resolve_projectile_hits(&mut state, &mut events), None);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.characters[1].health, 97);
        assert_eq!(state.characters[1].armor.map(|a| a.durability), Some(93));
        assert_eq!(
            events,
            vec![ArenaEvent::Hit { victim: CharacterId::P2, kind: ProjectileKind::Bullet, raw: 10, dealt: 3 }]
        );
    }

    #[test]
    fn spent_vest_gone_before_next_hit() {
        let mut state = open_field();
        state.characters[1].equip_armor(ArmorKind::Ballistic);
        state.characters[1].armor.as_mut().unwrap().durability = 7;
        let p = bullet_into(&state, CharacterId::P1, CharacterId::P2, 10);
        state.projectiles.push(p);
        state.projectiles.push(p);
        let mut events = Vec::new();

        resolve_projectile_hits(&mut state, &mut events);
        assert!(state.characters[1].armor.is_none());
        // 3 through the vest, then 10 unmitigated.
        assert_eq!(state.characters[1].health, 87);
        assert!(events.contains(&ArenaEvent::ArmorBroken { who: CharacterId::P2 }));
    }

    #[test]
    fn lethal_hit_halts_resolution() {
        let mut state = open_field();
        state.characters[1].health = 10;
        let lethal = bullet_into(&state, CharacterId::P1, CharacterId::P2, 18);
        let follow_up = bullet_into(&state, CharacterId::P1, CharacterId::P2, 18);
        let stray = bullet_into(&state, CharacterId::P2, CharacterId::P1, 18);
        state.projectiles = vec![lethal, follow_up, stray];

        let winner = resolve_projectile_hits(&mut state, &mut Vec::new());
        assert_eq!(winner, Some(CharacterId::P1));
        assert_eq!(state.characters[1].health, 0);
        assert_eq!(state.characters[0].health, 100);
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn terrain_stops_bullets_and_balls_not_melee() {
        let mut state = open_field();
        state.platforms.push(Platform::new(600.0, 100.0, 100.0, 30.0, SurfaceKind::Ground));
        let bullet = spawn_projectile(1, CharacterId::P1, WeaponKind::Rifle, Vec2::new(650.0, 115.0), Facing::Right);
        let fist = spawn_projectile(2, CharacterId::P1, WeaponKind::Fist, Vec2::new(650.0, 115.0), Facing::Right);
        let ball = spawn_projectile(3, CharacterId::P1, WeaponKind::Ball, Vec2::new(650.0, 115.0), Facing::Right);
        state.projectiles = vec![bullet, fist, ball];

        resolve_projectile_hits(&mut state, &mut Vec::new());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].kind, ProjectileKind::Melee);
    }
}
