//! Hen Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use hen_dash::renderer::CanvasRenderer;
    use hen_dash::sim::{EndScreen, Phase, SimulationClock};
    use hen_dash::{FrameDriver, InputEvent, Tuning};

    type Game = FrameDriver<CanvasRenderer>;

    /// Match the canvas to its container and tell the simulation
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let (w, h) = canvas
            .parent_element()
            .map(|p| (p.client_width(), p.client_height()))
            .unwrap_or((canvas.client_width(), canvas.client_height()));
        canvas.set_width(w.max(0) as u32);
        canvas.set_height(h.max(0) as u32);
        (w as f32, h as f32)
    }

    fn set_hidden(id: &str, hidden: bool) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }

    /// Show/hide DOM overlays to match the phase
    fn update_overlays(game: &Game, last_phase: &mut Phase) {
        let snapshot = game.snapshot();
        if snapshot.phase == *last_phase {
            return;
        }
        *last_phase = snapshot.phase;

        set_hidden("start-screen", snapshot.phase != Phase::NotStarted);
        match snapshot.end_screen() {
            Some(screen) => {
                if let Some(el) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("final-score"))
                {
                    el.set_text_content(Some(&hen_dash::renderer::hud_score(snapshot.score)));
                }
                set_hidden("scroll-dialog", screen != EndScreen::Scroll);
                set_hidden("scroll-hint", screen != EndScreen::Hint);
                set_hidden("game-over-screen", false);
            }
            None => {
                set_hidden("scroll-dialog", true);
                set_hidden("scroll-hint", true);
                set_hidden("game-over-screen", true);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Hen Dash starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };
        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #game-canvas element");
                return;
            }
        };
        let renderer = match CanvasRenderer::new(&canvas) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Canvas 2D unavailable: {:?}", e);
                return;
            }
        };

        let (width, height) = fit_canvas(&canvas);
        let seed = js_sys::Date::now() as u64;
        let clock = SimulationClock::with_tuning(width, height, Tuning::default(), seed);
        let game = Rc::new(RefCell::new(FrameDriver::new(clock, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_resize(canvas, game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game, Phase::Over);

        log::info!("Hen Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Keyboard: space jumps (or starts), I toggles idle mode
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => g.handle_input(InputEvent::Press),
                    "KeyI" => g.handle_input(InputEvent::ToggleAutopilot),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: buttons and scroll links keep their default behaviour
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let on_button = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .map(|el| {
                        el.id() == "restart-btn" || el.closest(".scroll-btn").ok().flatten().is_some()
                    })
                    .unwrap_or(false);
                if on_button {
                    return;
                }
                let mut g = game.borrow_mut();
                if g.clock().phase() != Phase::NotStarted {
                    if event.cancelable() {
                        event.prevent_default();
                    }
                    g.handle_input(InputEvent::Press);
                }
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Mouse
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.clock().phase() != Phase::NotStarted {
                    g.handle_input(InputEvent::Press);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = fit_canvas(&canvas);
            game.borrow_mut().resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().handle_input(InputEvent::Restart);
                log::info!("Restart requested");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(screen) = document.get_element_by_id("start-screen") {
            for kind in ["mousedown", "touchstart"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.stop_propagation();
                    event.prevent_default();
                    game.borrow_mut().handle_input(InputEvent::StartScreen);
                });
                let _ = screen.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, last_phase: Phase) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, last_phase);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, mut last_phase: Phase) {
        {
            let mut g = game.borrow_mut();
            g.frame();
            update_overlays(&g, &mut last_phase);
        }

        request_animation_frame(game, last_phase);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hen_dash::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use hen_dash::renderer::LogRenderer;
    use hen_dash::{FrameDriver, InputEvent, Phase, SimulationClock, Tuning};

    env_logger::init();
    log::info!("Hen Dash (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let seed: u64 = rand::random();
    let clock = SimulationClock::with_tuning(DEFAULT_WIDTH, DEFAULT_HEIGHT, tuning, seed);
    let mut driver = FrameDriver::new(clock, LogRenderer::default());
    driver.autopilot = true;
    driver.handle_input(InputEvent::Press);

    log::info!("Headless autopilot run, seed {}, up to {} frames", seed, max_frames);

    let mut frames = 0;
    while frames < max_frames {
        frames += 1;
        if driver.frame() == Phase::Over {
            break;
        }
    }

    let snapshot = driver.snapshot();
    log::info!(
        "Finished after {} frames: phase {:?}, score {}, speed {:.1}, scroll {}",
        frames,
        snapshot.phase,
        snapshot.score,
        snapshot.speed,
        snapshot.has_collectible
    );
}
