use serde::{Deserialize, Serialize};

use crate::types::*;

/// Display view of one character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: CharacterId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub health: i32,
    pub weapon: String,
    /// -1 = unlimited.
    pub ammo: i32,
    pub armor: String,
    pub armor_durability: Option<i32>,
    pub crouching: bool,
    pub hidden: bool,
    pub adrenaline: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub tick: Tick,
    pub characters: [CharacterSnapshot; 2],
    pub items: usize,
    pub projectiles: usize,
    pub winner: Option<CharacterId>,
}

impl From<&Character> for CharacterSnapshot {
    fn from(ch: &Character) -> Self {
        Self {
            id: ch.id,
            x: ch.body.x,
            y: ch.body.y,
            vx: ch.body.vx,
            vy: ch.body.vy,
            health: ch.health,
            weapon: ch.weapon_name().to_string(),
            ammo: ch.weapon.ammo,
            armor: ch.armor_name(),
            armor_durability: ch.armor.map(|a| a.durability),
            crouching: ch.crouching,
            hidden: ch.hidden,
            adrenaline: ch.has_adrenaline(),
        }
    }
}

pub fn snapshot(state: &ArenaState) -> ArenaSnapshot {
    ArenaSnapshot {
        tick: state.tick,
        characters: state.characters.each_ref().map(CharacterSnapshot::from),
        items: state.items.len(),
        projectiles: state.projectiles.len(),
        winner: state.winner,
    }
}
