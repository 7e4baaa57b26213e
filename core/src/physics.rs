use crate::constants::*;
use crate::types::*;

/// Outcome of resolving one body against one platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    None,
    Landed(SurfaceKind),
    HeadBump,
    /// Pushed back out of the platform's left face.
    BlockedRight,
    /// Pushed back out of the platform's right face.
    BlockedLeft,
}

fn clamp_velocity(v: f64) -> f64 {
    v.clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

/// Gravity (unless resting), velocity clamp, then `pos += vel`.
/// Clears `grounded`; collision resolution re-establishes it.
pub fn integrate(body: &mut Body, gravity: f64) {
    if !body.grounded {
        body.vy += gravity;
    }
    body.grounded = false;
    body.vx = clamp_velocity(body.vx);
    body.vy = clamp_velocity(body.vy);
    body.x += body.vx;
    body.y += body.vy;
}

/// Keep a character inside the world. The floor acts as ground.
pub fn clamp_to_world(body: &mut Body, width: f64, height: f64) {
    if body.x < 0.0 {
        body.x = 0.0;
    } else if body.x + body.width > width {
        body.x = width - body.width;
    }

    if body.y < 0.0 {
        body.y = 0.0;
        body.vy = 0.0;
    } else if body.y + body.height > height {
        body.y = height - body.height;
        body.vy = 0.0;
        body.grounded = true;
    }
}

/// Resolve a character-like body against a platform. First matching rule wins:
/// landing, head bump, then the two side pushes.
pub fn resolve_platform(body: &mut Body, platform: &Platform) -> Contact {
    let plat = platform.rect;
    let cur = body.rect();
    if !cur.contacts(&plat) {
        return Contact::None;
    }
    let prev = body.prev_rect();

    let from_above = prev.bottom() <= plat.top()
        || (cur.bottom() >= plat.top() && cur.bottom() <= plat.top() + LANDING_TOLERANCE);
    if from_above && body.vy >= 0.0 {
        body.y = plat.top() - body.height;
        body.vy = 0.0;
        body.grounded = true;
        return Contact::Landed(platform.surface);
    }

    if prev.top() >= plat.bottom() && cur.top() <= plat.bottom() {
        body.y = plat.bottom();
        body.vy = 0.0;
        return Contact::HeadBump;
    }

    if prev.right() <= plat.left() && cur.right() >= plat.left() {
        body.x = plat.left() - body.width;
        body.vx = 0.0;
        return Contact::BlockedRight;
    }

    if prev.left() >= plat.right() && cur.left() <= plat.right() {
        body.x = plat.right();
        body.vx = 0.0;
        return Contact::BlockedLeft;
    }

    Contact::None
}

/// Items only ever land; they never bump or get pushed.
pub fn land_item(body: &mut Body, platform: &Platform) -> bool {
    let plat = platform.rect;
    if !body.rect().contacts(&plat) {
        return false;
    }
    if body.bottom() >= plat.top() && body.bottom() - body.vy <= plat.top() {
        body.y = plat.top() - body.height;
        body.vy = 0.0;
        body.grounded = true;
        return true;
    }
    false
}

/// Full per-tick movement of a character: integrate, world clamp, then
/// resolve against every platform. Records the surface of the last landing.
pub fn move_character(ch: &mut Character, platforms: &[Platform], width: f64, height: f64) {
    integrate(&mut ch.body, GRAVITY);
    clamp_to_world(&mut ch.body, width, height);
    for platform in platforms {
        if let Contact::Landed(surface) = resolve_platform(&mut ch.body, platform) {
            ch.surface = surface;
        }
    }
}
