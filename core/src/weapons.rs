use crate::constants::*;
use crate::projectiles::spawn_projectile;
use crate::types::*;

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        let stats = weapon_stats(kind);
        Self {
            kind,
            ammo: stats.ammo,
            damage: stats.damage,
            cooldown_ms: stats.cooldown_ms,
            last_fire_ms: None,
        }
    }

    /// Default melee weapon.
    pub fn fist() -> Self {
        Self::new(WeaponKind::Fist)
    }

    /// Finite ammo fully spent. Unlimited weapons are never empty.
    pub fn is_empty(&self) -> bool {
        self.ammo == 0
    }

    pub fn is_cooling_down(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            Some(last) => now_ms.saturating_sub(last) < self.cooldown_ms,
            None => false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Result of a fire attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireResult {
    /// `None` when the attempt was denied.
    pub projectile: Option<Projectile>,
    /// Ammo is now zero; the owner should fall back to the fist.
    pub empty: bool,
}

/// Try to fire `weapon`. Denied during cooldown or with zero ammo, in which
/// case nothing about the weapon changes.
pub fn fire_weapon(
    weapon: &mut Weapon,
    owner: CharacterId,
    origin: Vec2,
    facing: Facing,
    now_ms: u64,
    projectile_id: u32,
) -> FireResult {
    if weapon.is_cooling_down(now_ms) {
        return FireResult {
            projectile: None,
            empty: false,
        };
    }
    if weapon.is_empty() {
        return FireResult {
            projectile: None,
            empty: true,
        };
    }

    if weapon.ammo > 0 {
        weapon.ammo -= 1;
    }
    weapon.last_fire_ms = Some(now_ms);

    let mut proj = spawn_projectile(projectile_id, owner, weapon.kind, origin, facing);
    proj.damage = weapon.damage;
    FireResult {
        projectile: Some(proj),
        empty: weapon.is_empty(),
    }
}

impl Armor {
    pub fn new(kind: ArmorKind) -> Self {
        Self {
            kind,
            durability: ARMOR_DURABILITY,
        }
    }

    /// Mitigate an incoming hit and return the damage that gets through.
    /// Ballistic armor loses durability equal to what it absorbed.
    pub fn absorb(&mut self, damage: i32, kind: ProjectileKind) -> i32 {
        match (self.kind, kind) {
            (ArmorKind::Light, ProjectileKind::Melee) => {
                if damage <= LIGHT_ARMOR_BLOCK {
                    0
                } else {
                    damage / 2
                }
            }
            (ArmorKind::Ballistic, ProjectileKind::Bullet) => {
                let absorbed = damage * BALLISTIC_ABSORB_NUM / BALLISTIC_ABSORB_DEN;
                self.durability = (self.durability - absorbed).max(0);
                damage - absorbed
            }
            _ => damage,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.durability <= 0
    }

    pub fn name(&self) -> String {
        match self.kind {
            ArmorKind::Light => "Light Armor".to_string(),
            ArmorKind::Ballistic => format!("Ballistic Vest ({})", self.durability),
        }
    }
}
