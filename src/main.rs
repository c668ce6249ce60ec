//! Dash Runner entry point
//!
//! Native: runs a headless session with a simple autopilot and reports the
//! score. Web: exposes the session control surface to the page.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use dash_runner::audio::AudioManager;
    use dash_runner::persistence::{LocalStorage, Persistence};
    use dash_runner::sim::{GamePhase, Session, TickInput};

    /// Session handle owned by the page script
    #[wasm_bindgen]
    pub struct WebRunner {
        session: Session,
        audio: AudioManager,
        prefs: Persistence<LocalStorage>,
        input: TickInput,
    }

    #[wasm_bindgen]
    impl WebRunner {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebRunner {
            let seed = js_sys::Date::now() as u64;
            let prefs = Persistence::new(LocalStorage);
            let mut audio = AudioManager::new();
            audio.set_muted(prefs.muted());
            log::info!("Dash Runner ready (seed {})", seed);
            WebRunner {
                session: Session::new(seed, Box::new(Persistence::new(LocalStorage))),
                audio,
                prefs,
                input: TickInput::default(),
            }
        }

        pub fn start(&mut self) {
            self.audio.init();
            self.session.start();
        }

        pub fn restart(&mut self) {
            self.audio.init();
            self.session.restart();
        }

        pub fn pause(&mut self) {
            self.session.pause();
        }

        pub fn resume(&mut self) {
            self.session.resume();
        }

        pub fn show_menu(&mut self) {
            self.session.show_menu();
        }

        /// Queue a jump for the next update
        pub fn jump(&mut self) {
            self.input.jump = true;
        }

        /// Queue a slide for the next update
        pub fn slide(&mut self) {
            self.input.slide = true;
        }

        /// Advance one frame (dt in seconds) and play any cues it produced
        pub fn update(&mut self, dt: f32) {
            let input = std::mem::take(&mut self.input);
            self.session.update(&input, dt);
            for event in self.session.drain_events() {
                self.audio.play(&event);
            }
        }

        pub fn score(&self) -> f64 {
            self.session.score as f64
        }

        pub fn high_score(&self) -> f64 {
            self.session.high_score() as f64
        }

        pub fn is_game_over(&self) -> bool {
            self.session.phase == GamePhase::GameOver
        }

        pub fn new_record(&self) -> bool {
            self.session.new_record()
        }

        /// Flip and persist the mute flag; returns the new value
        pub fn toggle_mute(&mut self) -> bool {
            let muted = !self.audio.is_muted();
            self.audio.set_muted(muted);
            self.prefs.set_muted(muted);
            muted
        }
    }

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use dash_runner::audio::AudioManager;
    use dash_runner::persistence::{FileStorage, Persistence};
    use dash_runner::sim::{Bounds, GamePhase, Session, TickInput};
    use dash_runner::Settings;
    use dash_runner::consts::{GROUND_Y, PLAYER_HEIGHT, PLAYER_SLIDE_HEIGHT};

    const SAVE_PATH: &str = "dash_runner_save.json";
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Ten minutes of play
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    /// Horizontal window in which the autopilot reacts to an obstacle
    const REACT_MIN: f32 = 40.0;
    const REACT_MAX: f32 = 110.0;

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Slide under low-hanging obstacles, jump over everything else in the way
    fn autopilot(session: &Session) -> TickInput {
        let player = session.player.bounds();
        let slide_top = GROUND_Y + (PLAYER_HEIGHT - PLAYER_SLIDE_HEIGHT);
        let mut input = TickInput::default();
        for obstacle in &session.obstacles {
            let b = obstacle.bounds();
            let gap = b.pos.x - player.right();
            if obstacle.absorbed
                || !(REACT_MIN..REACT_MAX).contains(&gap)
                || b.bottom() <= player.pos.y
            {
                continue;
            }
            if b.bottom() <= slide_top {
                input.slide = true;
            } else {
                input.jump = true;
            }
        }
        input
    }

    pub fn run() {
        let settings = std::env::args()
            .nth(1)
            .map(|path| Settings::load(Path::new(&path)))
            .unwrap_or_default();
        let seed = settings.seed.unwrap_or_else(clock_seed);

        let persistence = Persistence::new(FileStorage::new(SAVE_PATH));
        let mut audio = AudioManager::new();
        audio.set_muted(persistence.muted());
        audio.set_master_volume(settings.master_volume);

        log::info!("Dash Runner (headless) seed {}", seed);
        let mut session = Session::with_settings(settings, seed, Box::new(persistence));
        session.start();

        let mut frames = 0;
        while frames < MAX_FRAMES && session.phase == GamePhase::Playing {
            let input = autopilot(&session);
            session.update(&input, FRAME_DT);
            for event in session.drain_events() {
                audio.play(&event);
            }
            frames += 1;
        }

        log::info!(
            "Stopped after {:.1}s at difficulty {:.1}",
            frames as f32 * FRAME_DT,
            session.difficulty()
        );
        println!(
            "Score: {} (high score {}{})",
            session.score,
            session.high_score(),
            if session.new_record() { ", new record!" } else { "" }
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
