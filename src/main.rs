//! Flappy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use flappy::consts::*;
    use flappy::renderer::{RenderState, scene};
    use flappy::sim::{GameState, TickInput, tick};
    use flappy::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        rng: Pcg32,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64) -> Self {
            let mut rng = Pcg32::seed_from_u64(seed);
            let state = GameState::new(&tuning, &mut rng);
            Self {
                state,
                tuning,
                rng,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let was_playing = self.state.is_playing();

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, &self.tuning, &mut self.rng);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }

            // The sim returns to the attract screen in the same tick it
            // detects a crash; surface that edge for the player.
            if was_playing && !self.state.is_playing() {
                log::info!("Crashed - best score {}", self.state.best_score);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.state, &self.tuning);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("currentScore") {
                el.set_text_content(Some(&format!("Current : {}", self.state.score)));
            }
            if let Some(el) = document.get_element_by_id("bestScore") {
                el.set_text_content(Some(&format!("Best : {}", self.state.best_score)));
            }
        }
    }

    /// Read an optional tuning override from a `#tuning` JSON element
    ///
    /// A bad override is rejected loudly and the defaults stay in force.
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        if json.trim().is_empty() {
            return Tuning::default();
        }
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Applied tuning override");
                tuning
            }
            Err(err) => {
                log::error!("Ignoring tuning override: {err}");
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = load_tuning(&document);
        tuning.validate().expect("tuning must describe a playable game");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(tuning, seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let field_size = {
            let g = game.borrow();
            (g.tuning.field_width, g.tuning.field_height)
        };
        let render_state = RenderState::new(surface, &adapter, width, height, field_size).await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Any click both starts a run and flaps
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.input.start = true;
                g.input.flap = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch behaves like a click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.input.start = true;
                g.input.flap = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Enter" | "ArrowUp" => {
                        let mut g = game.borrow_mut();
                        g.input.start = true;
                        g.input.flap = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use flappy::sim::{GameState, TickInput, tick};
    use flappy::tuning::Tuning;

    env_logger::init();
    log::info!("Flappy (native) starting...");
    log::info!("Run with `trunk serve` for the web version; native mode plays itself headless.");

    let tuning = Tuning::default();
    tuning
        .validate()
        .expect("default tuning must describe a playable game");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Autopilot seed: {}", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(&tuning, &mut rng);
    let mut last_score = 0;
    let mut runs = 0u32;

    // A naive keeper: flap whenever the bird sags into the lower quarter of
    // the next gap it has to thread.
    for _ in 0..1800 {
        let next_gap_bottom = state
            .pipes
            .iter()
            .find(|pipe| pipe.x + tuning.pipe_width >= tuning.bird_lane_x)
            .map(|pipe| pipe.gap_bottom(&tuning));
        let flap = state.is_playing()
            && next_gap_bottom.is_some_and(|bottom| {
                state.bird.bottom(&tuning) > bottom - tuning.gap_height * 0.25
            });

        let was_playing = state.is_playing();
        let input = TickInput {
            start: !was_playing,
            flap,
        };
        tick(&mut state, &input, &tuning, &mut rng);

        if state.score > last_score {
            log::info!("Cleared pipe - score {}", state.score);
        }
        last_score = state.score;
        if was_playing && !state.is_playing() {
            runs += 1;
            log::info!("Crashed - best score so far {}", state.best_score);
        }
    }

    log::info!(
        "Autopilot finished: {} crash(es), best score {}",
        runs,
        state.best_score
    );
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Snapshot failed: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
