//! Simulation controller
//!
//! A [`Session`] owns one [`GameState`] and the store it reports to. The host
//! calls [`Session::activate`] for every activation input and
//! [`Session::tick`] once per frame; the returned [`Snapshot`] is all the
//! renderer gets to see.

use crate::highscores::{load_best, save_best};
use crate::persistence::ScoreStore;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, Skin, Snapshot, TickInput};
use crate::tuning::{ConfigError, Tuning};

pub struct Session {
    state: GameState,
    store: Box<dyn ScoreStore>,
    /// Activations received since the last tick
    pending_activations: u32,
    /// Events from the most recent tick
    last_events: Vec<GameEvent>,
}

impl Session {
    /// Build a session; the store is read once here for best score and skin
    pub fn new(
        seed: u64,
        tuning: Tuning,
        store: Box<dyn ScoreStore>,
    ) -> Result<Self, ConfigError> {
        let best = load_best(store.as_ref());
        let settings = Settings::load(store.as_ref());
        let mut state = GameState::new(seed, tuning)?.with_best_score(best);
        state.skin = settings.skin;
        log::info!("Session created with seed {}", seed);
        Ok(Self {
            state,
            store,
            pending_activations: 0,
            last_events: Vec::new(),
        })
    }

    /// Queue an activation (key press, click or touch)
    pub fn activate(&mut self) {
        self.pending_activations += 1;
    }

    /// Change the drawn character; has no effect on gameplay
    pub fn set_skin(&mut self, skin: Skin) {
        if self.state.skin == skin {
            return;
        }
        self.state.skin = skin;
        Settings { skin }.save(self.store.as_mut());
    }

    /// Run one frame and return what to draw
    pub fn tick(&mut self, autopilot: bool) -> Snapshot {
        // Activations are applied in arrival order before the frame's update
        let extra = self.pending_activations.saturating_sub(1);
        for _ in 0..extra {
            sim::activate(&mut self.state);
        }
        let input = TickInput {
            activate: self.pending_activations > 0,
            autopilot,
        };
        self.pending_activations = 0;

        sim::tick(&mut self.state, &input);

        self.last_events = self.state.drain_events();
        for event in &self.last_events {
            if let GameEvent::GameOver {
                new_best: true,
                best,
                ..
            } = *event
            {
                save_best(self.store.as_mut(), best);
            }
        }

        Snapshot::capture(&self.state)
    }

    /// Current view without advancing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.last_events
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage specific situations
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
