//! Rule-based opponent.
//!
//! The controller never touches velocities. Each evaluation picks a target
//! point, and `steer` turns that point into the same button intent a human
//! would produce. The intent is applied on the following tick.

use crate::config::{AiTuning, ItemScores, Steering};
use crate::prng::RandomSource;
use crate::types::*;

impl AiController {
    pub fn new(pos: Vec2) -> Self {
        Self {
            state: AiState::FindWeapon,
            state_timer: 0,
            target: pos,
            shoot_cooldown: 0,
            pending: NULL_INTENT,
        }
    }

    fn enter(&mut self, state: AiState, dwell: i32) {
        self.state = state;
        self.state_timer = dwell;
    }

    /// Run one evaluation for character `me` and store the resulting intent
    /// in `pending`.
    pub fn update(
        &mut self,
        me: CharacterId,
        world: &ArenaState,
        tuning: &AiTuning,
        rng: &mut impl RandomSource,
    ) -> Intent {
        self.state_timer = self.state_timer.saturating_sub(1);
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);

        let this = world.character(me);
        let foe = world.character(me.other());
        let dwell = &tuning.dwell;
        let odds = &tuning.chances;
        let mut fire = false;
        let mut face = None;

        match self.state {
            AiState::FindWeapon => {
                if this.weapon.kind == WeaponKind::Fist {
                    match best_item(this, &world.items, &tuning.scores) {
                        Some(item) => self.target = item.body.pos(),
                        None if self.state_timer <= 0 => {
                            self.enter(AiState::SeekPlayer, dwell.find_weapon_timeout)
                        }
                        None => {}
                    }
                } else if this.armor.is_none() && rng.below(100) < odds.find_armor {
                    self.enter(AiState::FindArmor, dwell.find_weapon_armor);
                } else {
                    self.enter(AiState::SeekPlayer, dwell.find_weapon_seek);
                }
            }

            AiState::FindArmor => {
                if this.armor.is_some() {
                    self.enter(AiState::SeekPlayer, dwell.find_armor_seek);
                } else {
                    if let Some(item) = nearest_armor(this.pos(), &world.items) {
                        self.target = item.body.pos();
                    }
                    if self.state_timer <= 0 {
                        self.enter(AiState::SeekPlayer, dwell.find_armor_timeout);
                    }
                }
            }

            AiState::SeekPlayer => {
                if this.health < odds.low_health && this.weapon.kind == WeaponKind::Fist {
                    if rng.below(100) < odds.low_health_find_weapon {
                        self.enter(AiState::FindWeapon, dwell.seek_find_weapon);
                    } else {
                        self.enter(AiState::Retreat, dwell.seek_retreat);
                    }
                } else if this.health < odds.hurt_health && this.armor.is_none() {
                    if rng.below(100) < odds.hurt_find_armor {
                        self.enter(AiState::FindArmor, dwell.seek_find_armor);
                    }
                } else {
                    self.target = find_path(foe.pos(), &world.platforms, &tuning.steering);
                    let range = tuning.ranges.for_weapon(this.weapon.kind);
                    if this.pos().distance(foe.pos()) <= range {
                        self.enter(AiState::Attack, dwell.seek_attack);
                    }
                }
            }

            AiState::Attack => {
                face = Some(if foe.body.x < this.body.x {
                    Facing::Left
                } else {
                    Facing::Right
                });
                if self.shoot_cooldown <= 0 {
                    fire = true;
                    self.shoot_cooldown = tuning.combat.shoot_cooldown;
                }
                if self.state_timer % tuning.combat.jitter_interval == 0 {
                    let step = rng.below(3) as f64 - 1.0;
                    let pos = this.pos();
                    self.target = Vec2::new(pos.x + step * tuning.combat.jitter_step, pos.y);
                }

                if self.state_timer <= 0 {
                    let roll = rng.below(100);
                    if roll < odds.attack_retreat {
                        self.enter(AiState::Retreat, dwell.attack_retreat);
                    } else if roll < odds.attack_retreat + odds.attack_seek {
                        self.enter(AiState::SeekPlayer, dwell.attack_seek);
                    } else {
                        self.state_timer = dwell.attack_stay;
                    }
                }
            }

            AiState::Retreat => {
                let away = if this.body.x < foe.body.x {
                    -tuning.combat.retreat_distance
                } else {
                    tuning.combat.retreat_distance
                };
                let pos = this.pos();
                self.target = find_path(
                    Vec2::new(pos.x + away, pos.y),
                    &world.platforms,
                    &tuning.steering,
                );

                if self.state_timer <= 0 {
                    if rng.below(100) < odds.retreat_find_weapon {
                        self.enter(AiState::FindWeapon, dwell.retreat_find_weapon);
                    } else {
                        self.enter(AiState::SeekPlayer, dwell.retreat_seek);
                    }
                }
            }

            AiState::Idle => {
                if self.state_timer <= 0 {
                    let roll = rng.below(100);
                    if roll < odds.idle_find_weapon {
                        self.enter(AiState::FindWeapon, dwell.idle_find_weapon);
                    } else if roll < odds.idle_find_weapon + odds.idle_find_armor {
                        self.enter(AiState::FindArmor, dwell.idle_find_armor);
                    } else {
                        self.enter(AiState::SeekPlayer, dwell.idle_seek);
                    }
                }
            }
        }

        let mut intent = steer(this, self.target, &tuning.steering);
        if fire {
            intent.buttons |= button::FIRE;
        }
        intent.face = face;
        self.pending = intent;
        intent
    }
}

/// Net desirability of an item: base score minus one point per
/// `distance_divisor` units, truncated toward zero.
pub fn item_score(me: &Character, item: &Item, scores: &ItemScores) -> i32 {
    let base = scores.base(item.kind, me.health);
    let dist = me.pos().distance(item.body.pos());
    (base as f64 - dist / scores.distance_divisor) as i32
}

/// Highest-scoring item, if any scores above -1. Ties keep the earlier item.
pub fn best_item<'a>(me: &Character, items: &'a [Item], scores: &ItemScores) -> Option<&'a Item> {
    let mut best = None;
    let mut best_score = -1;
    for item in items {
        let score = item_score(me, item, scores);
        if score > best_score {
            best_score = score;
            best = Some(item);
        }
    }
    best
}

pub fn nearest_armor(from: Vec2, items: &[Item]) -> Option<&Item> {
    items
        .iter()
        .filter(|i| i.kind.is_armor())
        .min_by(|a, b| {
            from.distance(a.body.pos())
                .total_cmp(&from.distance(b.body.pos()))
        })
}

/// Whether a character standing with its top-left at `point` would be
/// resting on some platform.
pub fn is_supported(point: Vec2, platforms: &[Platform], steering: &Steering) -> bool {
    platforms.iter().any(|p| {
        point.x >= p.rect.left()
            && point.x <= p.rect.right()
            && (point.y + steering.stand_offset - p.rect.top()).abs() < steering.support_tolerance
    })
}

/// Keep a supported destination; otherwise aim just above the platform whose
/// centre is nearest. No platforms at all leaves the point unchanged.
pub fn find_path(end: Vec2, platforms: &[Platform], steering: &Steering) -> Vec2 {
    if is_supported(end, platforms, steering) {
        return end;
    }
    let nearest = platforms.iter().min_by(|a, b| {
        end.distance(a.rect.center())
            .total_cmp(&end.distance(b.rect.center()))
    });
    match nearest {
        Some(p) => Vec2::new(end.x, p.rect.top() - steering.stand_offset),
        None => end,
    }
}

/// Translate a target point into movement buttons for `me`.
pub fn steer(me: &Character, target: Vec2, steering: &Steering) -> Intent {
    let pos = me.pos();
    let mut buttons = 0;
    if target.x < pos.x - steering.dead_band {
        buttons |= button::LEFT;
    } else if target.x > pos.x + steering.dead_band {
        buttons |= button::RIGHT;
    }
    if target.y < pos.y - steering.jump_above && me.body.grounded {
        buttons |= button::JUMP;
    }
    if target.y > pos.y + steering.crouch_below {
        buttons |= button::CROUCH;
    }
    Intent::from_buttons(buttons)
}
