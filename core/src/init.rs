use crate::config::ArenaConfig;
use crate::constants::*;
use crate::types::*;

/// 1200x800 arena: full-width ground, grass and ice ledges, two side ledges
/// and a top platform. Spawns stand on the grass and ice ledges.
pub fn arena() -> ArenaMap {
    ArenaMap {
        width: WORLD_WIDTH,
        height: WORLD_HEIGHT,
        platforms: vec![
            Platform::new(0.0, 750.0, 1200.0, 50.0, SurfaceKind::Ground),
            Platform::new(200.0, 600.0, 300.0, 30.0, SurfaceKind::Grass),
            Platform::new(700.0, 600.0, 300.0, 30.0, SurfaceKind::Ice),
            Platform::new(150.0, 450.0, 200.0, 30.0, SurfaceKind::Ground),
            Platform::new(850.0, 450.0, 200.0, 30.0, SurfaceKind::Ground),
            Platform::new(450.0, 300.0, 300.0, 30.0, SurfaceKind::Ground),
        ],
        spawn_points: [
            Vec2::new(250.0, 600.0 - CHARACTER_HEIGHT),
            Vec2::new(850.0, 600.0 - CHARACTER_HEIGHT),
        ],
    }
}

/// Create the initial arena state from a config.
pub fn create_initial_state(config: &ArenaConfig) -> ArenaState {
    let map = &config.map;
    let characters = CharacterId::ALL.map(|id| Character::new(id, map.spawn_points[id.index()]));

    let mut state = ArenaState {
        tick: 0,
        clock_ms: 0,
        characters,
        platforms: map.platforms.clone(),
        items: Vec::new(),
        projectiles: Vec::new(),
        controllers: [None, None],
        next_item_id: 0,
        next_projectile_id: 0,
        match_over: false,
        winner: None,
    };
    if config.mode == GameMode::PlayerVsAi {
        enable_ai(&mut state, CharacterId::P2);
    }
    state
}

/// Default config on the standard arena.
pub fn default_config(seed: u32) -> ArenaConfig {
    ArenaConfig {
        seed,
        ..ArenaConfig::default()
    }
}

/// Hand a slot to the AI. A controller already driving it is kept.
pub fn enable_ai(state: &mut ArenaState, id: CharacterId) {
    let pos = state.character(id).pos();
    state.controllers[id.index()].get_or_insert_with(|| AiController::new(pos));
}

/// Return a slot to external input, discarding its controller.
pub fn disable_ai(state: &mut ArenaState, id: CharacterId) {
    state.controllers[id.index()] = None;
}
