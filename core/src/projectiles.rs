use crate::constants::*;
use crate::types::*;

/// Build a projectile centred on `origin` (the shooter's centre), moving
/// horizontally in the facing direction. Balls are thrown upward as well.
pub fn spawn_projectile(
    id: u32,
    owner: CharacterId,
    weapon: WeaponKind,
    origin: Vec2,
    facing: Facing,
) -> Projectile {
    let stats = weapon_stats(weapon);
    let (w, h) = projectile_size(stats.projectile);
    let mut body = Body::new(origin.x - w / 2.0, origin.y - h / 2.0, w, h);
    body.vx = facing.sign() * stats.speed;
    if stats.projectile == ProjectileKind::Ball {
        body.vy = -stats.speed * BALL_LAUNCH_RATIO;
    }

    Projectile {
        id,
        owner,
        kind: stats.projectile,
        damage: stats.damage,
        body,
        age: 0,
        lifespan: stats.lifespan,
    }
}

/// Age a projectile and move it. Returns `false` once its lifespan is used
/// up, in which case it has not moved.
pub fn advance_projectile(proj: &mut Projectile) -> bool {
    proj.age += 1;
    if proj.lifespan >= 0 && proj.age >= proj.lifespan {
        return false;
    }

    let b = &mut proj.body;
    if proj.kind == ProjectileKind::Ball {
        b.vy += BALL_GRAVITY;
    }
    b.vx = b.vx.clamp(-MAX_VELOCITY, MAX_VELOCITY);
    b.vy = b.vy.clamp(-MAX_VELOCITY, MAX_VELOCITY);
    b.x += b.vx;
    b.y += b.vy;
    true
}

/// Out of bounds once the top-left corner leaves the world rectangle.
pub fn is_out_of_bounds(proj: &Projectile, width: f64, height: f64) -> bool {
    let (x, y) = (proj.body.x, proj.body.y);
    x < 0.0 || x > width || y < 0.0 || y > height
}

/// Move every projectile, dropping expired and out-of-bounds ones.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, width: f64, height: f64) {
    projectiles.retain_mut(|p| advance_projectile(p) && !is_out_of_bounds(p, width, height));
}
