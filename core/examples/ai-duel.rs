//! Runs an AI-vs-AI match headlessly and prints the final snapshot as JSON.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p duel-core --example ai-duel -- [seed] [max_ticks]

use duel_core::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One item drop every 5 s of simulated time.
const ITEM_INTERVAL_MS: u64 = 5_000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(20_000);

    let config = default_config(seed);
    let mut state = create_initial_state(&config);
    enable_ai(&mut state, CharacterId::P1);
    enable_ai(&mut state, CharacterId::P2);
    let mut rng = Mulberry32::new(seed);

    let mut next_drop_ms = ITEM_INTERVAL_MS;
    while state.tick < max_ticks {
        if state.clock_ms >= next_drop_ms {
            let kind = random_item_kind(&mut rng);
            let x = random_spawn_x(&mut rng, config.map.width);
            spawn_item(&mut state, kind, x, config.item_cap);
            next_drop_ms += ITEM_INTERVAL_MS;
        }

        let report = step_mut(&mut state, &[NULL_INTENT; 2], &config, &mut rng);
        if let Some(outcome) = report.outcome {
            tracing::info!(winner = ?outcome.winner, tick = state.tick, "duel decided");
            end_match(&mut state);
            break;
        }
    }

    let snap = snapshot(&state);
    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to encode snapshot: {}", e);
            std::process::exit(1);
        }
    }
    match hash_snapshot(&snap) {
        Ok(digest) => eprintln!("snapshot sha256: {}", hex::encode(digest)),
        Err(e) => {
            eprintln!("failed to hash snapshot: {}", e);
            std::process::exit(1);
        }
    }
}
