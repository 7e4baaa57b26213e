use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle. Origin is the top-left corner; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlap used for body-vs-platform contact. Horizontal is strict,
    /// vertical is inclusive so a body resting exactly on a top edge still
    /// counts as touching it.
    pub fn contacts(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

pub type Tick = u64;

// ── Identity ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharacterId {
    P1 = 1,
    P2 = 2,
}

impl CharacterId {
    pub const ALL: [CharacterId; 2] = [CharacterId::P1, CharacterId::P2];

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::P1),
            2 => Some(Self::P2),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }

    /// Slot in the two-element arrays of `ArenaState`.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

// ── Input ───────────────────────────────────────────────────

/// Intent bitmask constants.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const JUMP: u8 = 4;
    pub const CROUCH: u8 = 8;
    pub const FIRE: u8 = 16;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Decoded per-character input for one tick.
///
/// `face` is only set by the AI, which turns toward its target before
/// firing; human input leaves facing to the movement buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub buttons: u8,
    pub face: Option<Facing>,
}

pub const NULL_INTENT: Intent = Intent {
    buttons: 0,
    face: None,
};

impl Intent {
    pub const fn from_buttons(buttons: u8) -> Self {
        Self {
            buttons,
            face: None,
        }
    }

    pub fn held(&self, b: u8) -> bool {
        self.buttons & b != 0
    }
}

// ── Bodies ──────────────────────────────────────────────────

/// Position, velocity and hitbox shared by characters, items and projectiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub grounded: bool,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
            grounded: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Rectangle one step back along the current velocity.
    pub fn prev_rect(&self) -> Rect {
        Rect::new(self.x - self.vx, self.y - self.vy, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ── Map ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    #[default]
    Ground,
    /// Crouching here conceals the character.
    Grass,
    /// Walking here is faster.
    Ice,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub surface: SurfaceKind,
}

impl Platform {
    pub const fn new(x: f64, y: f64, width: f64, height: f64, surface: SurfaceKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            surface,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaMap {
    pub width: f64,
    pub height: f64,
    pub platforms: Vec<Platform>,
    /// Top-left spawn position per character slot.
    pub spawn_points: [Vec2; 2],
}

// ── Weapons & armor ────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Fist,
    Knife,
    Ball,
    Rifle,
    Sniper,
}

impl WeaponKind {
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Fist => "Fist",
            WeaponKind::Knife => "Knife",
            WeaponKind::Ball => "Ball",
            WeaponKind::Rifle => "Rifle",
            WeaponKind::Sniper => "Sniper",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WeaponStats {
    /// Starting ammo; -1 means unlimited.
    pub ammo: i32,
    pub damage: i32,
    pub cooldown_ms: u64,
    pub projectile: ProjectileKind,
    pub speed: f64,
    /// Projectile lifespan in ticks; -1 means unbounded.
    pub lifespan: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// -1 = unlimited.
    pub ammo: i32,
    pub damage: i32,
    pub cooldown_ms: u64,
    pub last_fire_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmorKind {
    Light,
    Ballistic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub kind: ArmorKind,
    pub durability: i32,
}

// ── Items ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Knife,
    Ball,
    Rifle,
    Sniper,
    Bandage,
    Medkit,
    Adrenaline,
    LightArmor,
    BallisticVest,
}

impl ItemKind {
    pub fn is_armor(self) -> bool {
        matches!(self, ItemKind::LightArmor | ItemKind::BallisticVest)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub body: Body,
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Reach hitbox of a fist or knife; passes through terrain.
    Melee,
    /// Thrown, arcs under gravity.
    Ball,
    Bullet,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: CharacterId,
    pub kind: ProjectileKind,
    pub damage: i32,
    pub body: Body,
    pub age: i32,
    /// -1 = unbounded.
    pub lifespan: i32,
}

// ── Character ───────────────────────────────────────────────

/// Active adrenaline buff: two countdowns that are always cancelled together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adrenaline {
    pub remaining_ms: i64,
    pub next_heal_ms: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub body: Body,
    pub health: i32,
    pub facing: Facing,
    pub crouching: bool,
    /// Crouching on grass.
    pub hidden: bool,
    /// Surface of the last platform landed on.
    pub surface: SurfaceKind,
    pub weapon: Weapon,
    pub armor: Option<Armor>,
    pub adrenaline: Option<Adrenaline>,
}

// ── AI ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    FindWeapon,
    FindArmor,
    SeekPlayer,
    Attack,
    Retreat,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiController {
    pub state: AiState,
    /// Dwell countdown; a state's timeout branch only fires once it is <= 0.
    pub state_timer: i32,
    pub target: Vec2,
    pub shoot_cooldown: i32,
    /// Intent produced by the last evaluation, applied on the next tick.
    pub pending: Intent,
}

// ── Game state ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    /// The AI drives P2.
    PlayerVsAi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: CharacterId,
}

/// Something that happened during a tick, for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    Fired {
        owner: CharacterId,
        weapon: WeaponKind,
        projectile: u32,
    },
    WeaponDepleted {
        who: CharacterId,
        weapon: WeaponKind,
    },
    Hit {
        victim: CharacterId,
        kind: ProjectileKind,
        raw: i32,
        dealt: i32,
    },
    ArmorBroken {
        who: CharacterId,
    },
    ItemPicked {
        who: CharacterId,
        kind: ItemKind,
    },
    AdrenalineHeal {
        who: CharacterId,
    },
    AdrenalineEnded {
        who: CharacterId,
    },
    AiStateChanged {
        who: CharacterId,
        from: AiState,
        to: AiState,
    },
    MatchOver {
        winner: CharacterId,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaState {
    pub tick: Tick,
    /// Simulation clock in ms, advanced by `tick_ms` per step.
    pub clock_ms: u64,
    /// Indexed by `CharacterId::index`.
    pub characters: [Character; 2],
    pub platforms: Vec<Platform>,
    /// Insertion order; the oldest item is first.
    pub items: Vec<Item>,
    pub projectiles: Vec<Projectile>,
    /// `Some` for slots driven by the AI.
    pub controllers: [Option<AiController>; 2],
    pub next_item_id: u32,
    pub next_projectile_id: u32,
    pub match_over: bool,
    pub winner: Option<CharacterId>,
}

impl ArenaState {
    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    pub fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }
}
