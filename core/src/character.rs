use crate::constants::*;
use crate::types::*;
use crate::weapons::{fire_weapon, FireResult};

/// What a single hit did to a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub dealt: i32,
    pub armor_broken: bool,
}

/// Adrenaline progress over one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectTick {
    pub heals: u32,
    pub ended: bool,
}

/// Per-tick safety net results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sweep {
    pub armor_broken: bool,
    pub weapon_depleted: Option<WeaponKind>,
}

impl Character {
    /// Fresh character standing at `spawn` (top-left). P1 faces right.
    pub fn new(id: CharacterId, spawn: Vec2) -> Self {
        Self {
            id,
            body: Body::new(spawn.x, spawn.y, CHARACTER_WIDTH, CHARACTER_HEIGHT),
            health: MAX_HEALTH,
            facing: match id {
                CharacterId::P1 => Facing::Right,
                CharacterId::P2 => Facing::Left,
            },
            crouching: false,
            hidden: false,
            surface: SurfaceKind::Ground,
            weapon: Weapon::fist(),
            armor: None,
            adrenaline: None,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos()
    }

    pub fn center(&self) -> Vec2 {
        self.body.rect().center()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_adrenaline(&self) -> bool {
        self.adrenaline.is_some()
    }

    /// Ice beats adrenaline; the bonuses do not stack.
    pub fn walk_speed(&self) -> f64 {
        if self.surface == SurfaceKind::Ice {
            WALK_SPEED * ICE_SPEED_MULTIPLIER
        } else if self.has_adrenaline() {
            WALK_SPEED * ADRENALINE_SPEED_MULTIPLIER
        } else {
            WALK_SPEED
        }
    }

    pub fn move_left(&mut self) {
        if self.crouching {
            return;
        }
        self.facing = Facing::Left;
        self.body.vx = -self.walk_speed();
    }

    pub fn move_right(&mut self) {
        if self.crouching {
            return;
        }
        self.facing = Facing::Right;
        self.body.vx = self.walk_speed();
    }

    pub fn stop_moving(&mut self) {
        self.body.vx = 0.0;
    }

    pub fn jump(&mut self) {
        if self.crouching || !self.body.grounded {
            return;
        }
        self.body.vy = JUMP_VELOCITY;
        self.body.grounded = false;
    }

    /// Enter or leave the crouch posture. The hitbox shrinks or grows with the
    /// feet held in place.
    pub fn crouch(&mut self, held: bool) {
        if held == self.crouching {
            return;
        }
        let feet = self.body.bottom();
        self.crouching = held;
        self.body.height = if held { CROUCH_HEIGHT } else { CHARACTER_HEIGHT };
        self.body.y = feet - self.body.height;
        self.hidden = held && self.surface == SurfaceKind::Grass;
    }

    /// Movement half of an intent. Fire is handled by the tick, which owns
    /// projectile ids and the clock.
    pub fn apply_intent(&mut self, intent: &Intent) {
        let left = intent.held(button::LEFT);
        let right = intent.held(button::RIGHT);
        if left {
            self.move_left();
        }
        if right {
            self.move_right();
        }
        if !left && !right {
            self.stop_moving();
        }
        if intent.held(button::JUMP) {
            self.jump();
        }
        self.crouch(intent.held(button::CROUCH));
        if let Some(face) = intent.face {
            self.facing = face;
        }
    }

    /// Fire from the body centre. An emptied weapon is swapped for the fist
    /// right away.
    pub fn fire(&mut self, now_ms: u64, projectile_id: u32) -> FireResult {
        let origin = self.center();
        let result = fire_weapon(
            &mut self.weapon,
            self.id,
            origin,
            self.facing,
            now_ms,
            projectile_id,
        );
        if result.empty {
            self.weapon = Weapon::fist();
        }
        result
    }

    pub fn take_damage(&mut self, damage: i32, kind: ProjectileKind) -> DamageReport {
        let mut dealt = damage;
        let mut armor_broken = false;
        if let Some(armor) = self.armor.as_mut() {
            dealt = armor.absorb(damage, kind);
            if armor.is_expired() {
                self.armor = None;
                armor_broken = true;
            }
        }
        self.health = (self.health - dealt).max(0);
        DamageReport {
            dealt,
            armor_broken,
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    pub fn equip_weapon(&mut self, kind: WeaponKind) {
        self.weapon = Weapon::new(kind);
    }

    pub fn equip_armor(&mut self, kind: ArmorKind) {
        self.armor = Some(Armor::new(kind));
    }

    /// Starts (or restarts) both adrenaline countdowns.
    pub fn start_adrenaline(&mut self) {
        self.adrenaline = Some(Adrenaline {
            remaining_ms: ADRENALINE_DURATION_MS,
            next_heal_ms: ADRENALINE_HEAL_INTERVAL_MS,
        });
    }

    /// Stops both countdowns. Safe to call when inactive.
    pub fn cancel_adrenaline(&mut self) {
        self.adrenaline = None;
    }

    /// Advance the adrenaline countdowns by `dt_ms`. Heals due in this
    /// window land before the effect can expire.
    pub fn tick_effects(&mut self, dt_ms: u64) -> EffectTick {
        let Some(mut fx) = self.adrenaline else {
            return EffectTick::default();
        };
        let dt = dt_ms as i64;
        let mut out = EffectTick::default();

        fx.next_heal_ms -= dt;
        while fx.next_heal_ms <= 0 {
            self.heal(ADRENALINE_HEAL);
            fx.next_heal_ms += ADRENALINE_HEAL_INTERVAL_MS;
            out.heals += 1;
        }

        fx.remaining_ms -= dt;
        if fx.remaining_ms <= 0 {
            self.cancel_adrenaline();
            out.ended = true;
        } else {
            self.adrenaline = Some(fx);
        }
        out
    }

    /// Drop spent armor and replace an emptied weapon with the fist.
    pub fn sweep_expired(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        if self.armor.map_or(false, |a| a.is_expired()) {
            self.armor = None;
            sweep.armor_broken = true;
        }
        if self.weapon.is_empty() {
            sweep.weapon_depleted = Some(self.weapon.kind);
            self.weapon = Weapon::fist();
        }
        sweep
    }

    pub fn weapon_name(&self) -> &'static str {
        self.weapon.name()
    }

    pub fn armor_name(&self) -> String {
        match &self.armor {
            Some(a) => a.name(),
            None => "None".to_string(),
        }
    }
}
