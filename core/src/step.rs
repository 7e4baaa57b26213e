use tracing::{debug, info, trace};

use crate::combat::{resolve_pickups, resolve_projectile_hits};
use crate::config::ArenaConfig;
use crate::items::advance_items;
use crate::physics::move_character;
use crate::prng::RandomSource;
use crate::projectiles::advance_projectiles;
use crate::types::*;

/// What a tick produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<ArenaEvent>,
    /// Set exactly on the tick a character dies.
    pub outcome: Option<MatchOutcome>,
}

/// Advance the arena by one tick in place.
///
/// Sub-step order:
///  0. No-op once the match is over
///  1. Resolve intents (AI-driven slots use their pending intent)
///  2. Apply movement intents, then fire
///  3. Integrate characters + platform collision
///  4. Integrate items + landing
///  5. Move projectiles, drop expired/out-of-bounds
///  6. Pickups, then projectile hits (a kill halts the tick), then terrain
///  7. Adrenaline countdowns + expired armor/weapon sweep
///  8. AI evaluation for next tick
///  9. Advance tick and clock
pub fn step_mut(
    state: &mut ArenaState,
    intents: &[Intent; 2],
    config: &ArenaConfig,
    rng: &mut impl RandomSource,
) -> TickReport {
    let mut report = TickReport::default();

    // 0. Match already decided
    if state.match_over {
        return report;
    }
    trace!(tick = state.tick, "step");

    // 1. Resolve intents
    let resolved: [Intent; 2] = CharacterId::ALL.map(|id| match &state.controllers[id.index()] {
        Some(ai) => ai.pending,
        None => intents[id.index()],
    });

    // 2. Apply intents
    for id in CharacterId::ALL {
        let intent = resolved[id.index()];
        state.character_mut(id).apply_intent(&intent);
        if intent.held(button::FIRE) {
            fire(state, id, &mut report.events);
        }
    }

    // 3. Characters
    let (width, height) = (config.map.width, config.map.height);
    for ch in state.characters.iter_mut() {
        move_character(ch, &state.platforms, width, height);
    }

    // 4. Items
    advance_items(&mut state.items, &state.platforms);

    // 5. Projectiles
    advance_projectiles(&mut state.projectiles, width, height);

    // 6. Collisions
    resolve_pickups(state, &mut report.events);
    if let Some(winner) = resolve_projectile_hits(state, &mut report.events) {
        state.match_over = true;
        state.winner = Some(winner);
        info!(winner = ?winner, tick = state.tick, "match over");
        report.events.push(ArenaEvent::MatchOver { winner });
        report.outcome = Some(MatchOutcome { winner });
        advance_clock(state, config);
        return report;
    }

    // 7. Effects + expiry sweep
    for ch in state.characters.iter_mut() {
        let who = ch.id;
        let fx = ch.tick_effects(config.tick_ms);
        for _ in 0..fx.heals {
            report.events.push(ArenaEvent::AdrenalineHeal { who });
        }
        if fx.ended {
            debug!(who = ?who, "adrenaline ended");
            report.events.push(ArenaEvent::AdrenalineEnded { who });
        }

        let sweep = ch.sweep_expired();
        if sweep.armor_broken {
            debug!(who = ?who, "armor broken");
            report.events.push(ArenaEvent::ArmorBroken { who });
        }
        if let Some(weapon) = sweep.weapon_depleted {
            debug!(who = ?who, weapon = weapon.name(), "weapon depleted");
            report.events.push(ArenaEvent::WeaponDepleted { who, weapon });
        }
    }

    // 8. AI
    for id in CharacterId::ALL {
        let Some(mut ai) = state.controllers[id.index()] else {
            continue;
        };
        let from = ai.state;
        ai.update(id, state, &config.ai, rng);
        if ai.state != from {
            debug!(who = ?id, from = ?from, to = ?ai.state, "ai state change");
            report.events.push(ArenaEvent::AiStateChanged {
                who: id,
                from,
                to: ai.state,
            });
        }
        state.controllers[id.index()] = Some(ai);
    }

    // 9. Advance
    advance_clock(state, config);
    report
}

fn advance_clock(state: &mut ArenaState, config: &ArenaConfig) {
    state.tick += 1;
    state.clock_ms += config.tick_ms;
}

fn fire(state: &mut ArenaState, id: CharacterId, events: &mut Vec<ArenaEvent>) {
    let now = state.clock_ms;
    let proj_id = state.next_projectile_id;
    let ch = state.character_mut(id);
    let weapon = ch.weapon.kind;
    let result = ch.fire(now, proj_id);

    if let Some(proj) = result.projectile {
        state.next_projectile_id += 1;
        state.projectiles.push(proj);
        events.push(ArenaEvent::Fired {
            owner: id,
            weapon,
            projectile: proj.id,
        });
    }
    if result.empty {
        debug!(who = ?id, weapon = weapon.name(), "weapon depleted");
        events.push(ArenaEvent::WeaponDepleted { who: id, weapon });
    }
}

/// Pure wrapper over `step_mut`.
pub fn step(
    prev: &ArenaState,
    intents: &[Intent; 2],
    config: &ArenaConfig,
    rng: &mut impl RandomSource,
) -> (ArenaState, TickReport) {
    let mut next = prev.clone();
    let report = step_mut(&mut next, intents, config, rng);
    (next, report)
}

/// Tear down a match: stop both adrenaline countdowns, discard projectiles,
/// items and AI controllers. Safe to call more than once.
pub fn end_match(state: &mut ArenaState) {
    for ch in state.characters.iter_mut() {
        ch.cancel_adrenaline();
    }
    state.projectiles.clear();
    state.items.clear();
    state.controllers = [None, None];
    state.match_over = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::init::{create_initial_state, default_config, enable_ai};
    use crate::items::spawn_item;
    use crate::prng::Mulberry32;

    const IDLE: [Intent; 2] = [NULL_INTENT; 2];

    fn fire_p1() -> [Intent; 2] {
        [Intent::from_buttons(button::FIRE), NULL_INTENT]
    }

    #[test]
    fn step_advances_tick_and_clock() {
        let config = default_config(42);
        let state = create_initial_state(&config);
        let (next, report) = step(&state, &IDLE, &config, &mut Mulberry32::new(42));
        assert_eq!(next.tick, 1);
        assert_eq!(next.clock_ms, TICK_MS);
        assert_eq!(report.outcome, None);
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn step_noop_when_match_over() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        state.match_over = true;
        state.winner = Some(CharacterId::P2);
        let (next, report) = step(&state, &fire_p1(), &config, &mut Mulberry32::new(42));
        assert_eq!(next, state);
        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn idle_characters_settle_on_spawn_ledges() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        let mut rng = Mulberry32::new(42);
        for _ in 0..60 {
            step_mut(&mut state, &IDLE, &config, &mut rng);
        }
        for ch in &state.characters {
            assert!(ch.body.grounded);
            assert_eq!(ch.body.y, 520.0);
            assert_eq!(ch.body.vy, 0.0);
        }
        assert_eq!(state.characters[0].surface, SurfaceKind::Grass);
        assert_eq!(state.characters[1].surface, SurfaceKind::Ice);
    }

    #[test]
    fn holding_fire_respects_cooldown() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        state.characters[0].equip_weapon(WeaponKind::Rifle);
        let mut rng = Mulberry32::new(42);

        // 200 ms cooldown at 16 ms per tick: shots on ticks 0 and 13.
        let mut fired = 0;
        for _ in 0..13 {
            let report = step_mut(&mut state, &fire_p1(), &config, &mut rng);
            fired += report.events.iter().filter(|e| matches!(e, ArenaEvent::Fired { .. })).count();
        }
        assert_eq!(fired, 1);
        assert_eq!(state.characters[0].weapon.ammo, 19);

        let report = step_mut(&mut state, &fire_p1(), &config, &mut rng);
        assert!(matches!(report.events[0], ArenaEvent::Fired { owner: CharacterId::P1, weapon: WeaponKind::Rifle, projectile: 1 }));
        assert_eq!(state.characters[0].weapon.ammo, 18);
    }

    #[test]
    fn last_round_reverts_to_fist() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        state.characters[0].equip_weapon(WeaponKind::Ball);
        state.characters[0].weapon.ammo = 1;
        let report = step_mut(&mut state, &fire_p1(), &config, &mut Mulberry32::new(1));
        assert_eq!(state.characters[0].weapon.kind, WeaponKind::Fist);
        assert!(report.events.contains(&ArenaEvent::WeaponDepleted { who: CharacterId::P1, weapon: WeaponKind::Ball }));
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn ai_slot_ignores_external_intent() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        enable_ai(&mut state, CharacterId::P2);
        let mut rng = Mulberry32::new(42);

        // External input says walk left; the fresh controller's pending intent is idle.
        let intents = [NULL_INTENT, Intent::from_buttons(button::LEFT)];
        step_mut(&mut state, &intents, &config, &mut rng);
        assert_eq!(state.characters[1].body.x, 850.0);
        assert!(state.controllers[1].is_some());
    }

    #[test]
    fn ai_intent_applies_next_tick() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        enable_ai(&mut state, CharacterId::P2);
        let mut rng = Mulberry32::new(42);

        // Tick 0: nothing to pick up, so FindWeapon times out into SeekPlayer.
        let report = step_mut(&mut state, &IDLE, &config, &mut rng);
        assert!(report.events.contains(&ArenaEvent::AiStateChanged {
            who: CharacterId::P2,
            from: AiState::FindWeapon,
            to: AiState::SeekPlayer,
        }));

        // Tick 1: the seek evaluation heads for P1, to the left.
        step_mut(&mut state, &IDLE, &config, &mut rng);
        let pending = state.controllers[1].map(|c| c.pending).unwrap_or_default();
        assert!(pending.held(button::LEFT));

        // Tick 2 applies it.
        let x = state.characters[1].body.x;
        step_mut(&mut state, &IDLE, &config, &mut rng);
        assert!(state.characters[1].body.x < x);
    }

    #[test]
    fn pickup_during_step() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        let mut rng = Mulberry32::new(42);
        // Between the low ledge and the top platform, so it drops onto the grass.
        state.characters[0].body.x = 355.0;
        spawn_item(&mut state, ItemKind::Rifle, 360.0, config.item_cap);
        for _ in 0..120 {
            step_mut(&mut state, &IDLE, &config, &mut rng);
        }
        assert_eq!(state.items[0].body.bottom(), 600.0);

        let crouch = [Intent::from_buttons(button::CROUCH), NULL_INTENT];
        let report = step_mut(&mut state, &crouch, &config, &mut rng);
        assert!(state.items.is_empty());
        assert_eq!(state.characters[0].weapon.kind, WeaponKind::Rifle);
        assert!(report.events.contains(&ArenaEvent::ItemPicked { who: CharacterId::P1, kind: ItemKind::Rifle }));
    }

    #[test]
    fn adrenaline_runs_out_over_ticks() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        state.characters[0].health = 50;
        state.characters[0].start_adrenaline();
        let mut rng = Mulberry32::new(42);
        let mut heals = 0;
        let mut ended = 0;
        for _ in 0..700 {
            let report = step_mut(&mut state, &IDLE, &config, &mut rng);
            for e in &report.events {
                match e {
                    ArenaEvent::AdrenalineHeal { .. } => heals += 1,
                    ArenaEvent::AdrenalineEnded { .. } => ended += 1,
                    _ => {}
                }
            }
        }
        assert_eq!(heals, 10);
        assert_eq!(ended, 1);
        assert_eq!(state.characters[0].health, 60);
    }

    #[test]
    fn end_match_discards_everything() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        enable_ai(&mut state, CharacterId::P2);
        spawn_item(&mut state, ItemKind::Medkit, 500.0, config.item_cap);
        state.characters[0].start_adrenaline();
        step_mut(&mut state, &fire_p1(), &config, &mut Mulberry32::new(1));
        assert!(!state.projectiles.is_empty());

        end_match(&mut state);
        end_match(&mut state);
        assert!(state.match_over);
        assert!(state.projectiles.is_empty());
        assert!(state.items.is_empty());
        assert_eq!(state.controllers, [None, None]);
        assert!(state.characters.iter().all(|c| !c.has_adrenaline()));
    }

    #[test]
    fn replay_determinism() {
        let config = default_config(42);
        let run = || {
            let mut state = create_initial_state(&config);
            enable_ai(&mut state, CharacterId::P1);
            enable_ai(&mut state, CharacterId::P2);
            let mut rng = Mulberry32::new(config.seed);
            for i in 0..600 {
                if i % 90 == 0 {
                    let kind = crate::items::random_item_kind(&mut rng);
                    let x = crate::items::random_spawn_x(&mut rng, config.map.width);
                    spawn_item(&mut state, kind, x, config.item_cap);
                }
                step_mut(&mut state, &IDLE, &config, &mut rng);
                if state.match_over {
                    break;
                }
            }
            state
        };
        assert_eq!(run(), run());
    }
}
