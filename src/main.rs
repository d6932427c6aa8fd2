//! Boat Stacker headless demo
//!
//! Runs a scripted session against the headless collaborators: waits for
//! the boat, throws a few rounds of items, then demolishes the tower.
//! Pass a JSON config path as the first argument to override defaults.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use boat_stacker::consts::*;
    use boat_stacker::headless::{
        AnimationSpec, Deck, HeadlessAnimator, HeadlessCamera, HeadlessWorld, PhysicsConfig,
    };
    use boat_stacker::sim::{GameEvent, RoundSession, ShapeTable};
    use boat_stacker::{GameConfig, SessionError};
    use glam::Vec2;

    type Session = RoundSession<HeadlessWorld, HeadlessCamera, HeadlessAnimator>;

    const SCREEN_W: f32 = 1280.0;
    const SCREEN_H: f32 = 720.0;
    const DECK_HALF_WIDTH: f32 = 200.0;
    const DECK_HEIGHT: f32 = 20.0;
    /// How long the scripted player holds each press (ms)
    const PRESS_MS: f64 = 740.0;
    const ROUNDS_BEFORE_DEMOLISH: u32 = 4;
    /// Safety cap on simulated time (ms)
    const MAX_TIME_MS: f64 = 180_000.0;

    /// Host-side loop state (scripted input + fixed-step accumulator)
    struct Demo {
        session: Session,
        time: f64,
        accumulator: f32,
        press_started: Option<f64>,
        rounds: u32,
        demolish_done: bool,
        demolish_finished_at: Option<f64>,
    }

    impl Demo {
        fn new(config: GameConfig) -> Result<Self, SessionError> {
            let world = HeadlessWorld::new(PhysicsConfig::default())?;
            let camera = HeadlessCamera::new(
                Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0),
                SCREEN_W,
                SCREEN_H,
            );
            let animator = HeadlessAnimator::default().with_animation(
                PICKUP_ANIMATION,
                AnimationSpec {
                    frames: 4,
                    frame_rate: 10.0,
                },
            );
            let mut session =
                RoundSession::new(config, world, camera, animator, ShapeTable::default())?;
            session.on_game_over(|| log::warn!("Out of health!"));
            // Face the boat: horizontal throws
            session.on_pointer_move(SCREEN_W / 2.0, 200.0);

            Ok(Self {
                session,
                time: 0.0,
                accumulator: 0.0,
                press_started: None,
                rounds: 0,
                demolish_done: false,
                demolish_finished_at: None,
            })
        }

        /// Advance by one rendered frame of `dt` ms
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(100.0);
            let mut substeps = 0;
            while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
                self.step(SIM_DT_MS);
                self.accumulator -= SIM_DT_MS;
                substeps += 1;
            }
        }

        fn step(&mut self, dt: f32) {
            self.time += dt as f64;
            let boat = self.session.boat().boat.pos;
            self.session.physics_mut().set_deck(
                Deck {
                    center_x: boat.x,
                    half_width: DECK_HALF_WIDTH,
                    top_y: boat.y - DECK_HEIGHT,
                },
                dt,
            );
            self.session.physics_mut().step(dt);
            self.session.camera_mut().tick(dt);
            self.session.on_update(self.time, dt);

            if let Some(done) = self.session.animator_mut().tick(dt) {
                self.session.on_animation_complete(&done);
            }
            self.script_input();

            for event in self.session.drain_events() {
                match event {
                    GameEvent::RoundEnded { score, tower_height } => {
                        self.rounds += 1;
                        println!(
                            "Round {}: tower {:.0}px, score {}",
                            self.rounds, tower_height, score
                        );
                    }
                    GameEvent::ItemLost { health, .. } => println!("Item lost! health {}", health),
                    GameEvent::DemolishFinished => self.demolish_finished_at = Some(self.time),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        fn script_input(&mut self) {
            if self.rounds >= ROUNDS_BEFORE_DEMOLISH {
                if !self.demolish_done {
                    println!("Demolishing!");
                    self.session.on_demolish(self.time);
                    self.demolish_done = true;
                }
                return;
            }
            match self.press_started {
                None if self.session.snapshot().can_spawn_item => {
                    self.session.on_press_start(self.time);
                    if self.session.charge().is_charging() {
                        self.press_started = Some(self.time);
                    }
                }
                Some(start) if self.time - start >= PRESS_MS => {
                    self.session.on_press_end(self.time);
                    self.press_started = None;
                }
                _ => {}
            }
        }

        fn finished(&self) -> bool {
            let settled = self
                .demolish_finished_at
                .is_some_and(|at| self.time - at > 5_000.0);
            settled || self.time > MAX_TIME_MS
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let config = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading config from {}", path);
                GameConfig::from_json(&std::fs::read_to_string(path)?)?
            }
            None => GameConfig::default(),
        };

        let mut demo = Demo::new(config)?;
        while !demo.finished() {
            demo.update(16.0);
        }
        demo.session.teardown();

        let snapshot = demo.session.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Boat Stacker (headless) starting...");

    if let Err(e) = demo::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a host; there is no standalone wasm entry
}
