//! Flappy Bonk entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary runs a headless autopilot demo:
//!
//! ```text
//! flappy-bonk [seed] [ticks]
//! ```
//!
//! `FLAPPY_BONK_STORE` sets the JSON store file (default
//! `flappy_bonk_store.json`), `FLAPPY_BONK_TUNING` an optional tuning JSON file.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_bonk::persistence::FileStore;
    use flappy_bonk::sim::{GameEvent, GameOverCause};
    use flappy_bonk::{Session, Tuning};

    env_logger::init();
    log::info!("Flappy Bonk (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random::<u64>);
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60 * 60);

    let tuning = match std::env::var("FLAPPY_BONK_TUNING") {
        Ok(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("Bad tuning file {}: {}", path, e);
                    std::process::exit(2);
                }
            }
        }
        Err(_) => Tuning::default(),
    };

    let store_path =
        std::env::var("FLAPPY_BONK_STORE").unwrap_or_else(|_| "flappy_bonk_store.json".into());
    let mut session = match Session::new(seed, tuning, Box::new(FileStore::new(store_path))) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let mut runs = 0u32;
    let mut total_score = 0u64;
    let mut floor_deaths = 0u32;
    for _ in 0..ticks {
        session.tick(true);
        for event in session.events() {
            if let GameEvent::GameOver { cause, score, .. } = *event {
                runs += 1;
                total_score += u64::from(score);
                if cause == GameOverCause::Floor {
                    floor_deaths += 1;
                }
            }
        }
    }

    println!("seed:        {}", seed);
    println!("ticks:       {}", ticks);
    println!("runs ended:  {} ({} on the floor)", runs, floor_deaths);
    println!("total score: {}", total_score);
    println!("in progress: {} ({:?})", session.score(), session.phase());
    println!("best score:  {}", session.best_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebGame, this is just to satisfy the compiler
}
