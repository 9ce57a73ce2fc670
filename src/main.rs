//! Brickfall entry point
//!
//! Web: wires the canvas, a fixed-rate timer and pointer moves to the
//! simulation. Native: runs a headless session with a scripted pointer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use brickfall::Settings;
    use brickfall::sim::{
        Ball, BrickGrid, Canvas, CanvasRect, GameState, Paddle, ScrollOffset, tick,
        update_paddle_position,
    };

    fn css_color(color: u32) -> String {
        format!("#{:06x}", color & 0xffffff)
    }

    fn draw_background(ctx: &CanvasRenderingContext2d, canvas: Canvas) {
        ctx.set_fill_style_str("black");
        ctx.fill_rect(0.0, 0.0, canvas.width as f64, canvas.height as f64);
    }

    fn draw_ball(ctx: &CanvasRenderingContext2d, ball: &Ball) -> Result<(), JsValue> {
        ctx.set_fill_style_str(&css_color(ball.color));
        ctx.begin_path();
        ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
        Ok(())
    }

    fn draw_paddle(ctx: &CanvasRenderingContext2d, paddle: &Paddle) {
        ctx.set_fill_style_str(&css_color(paddle.color));
        ctx.fill_rect(
            paddle.pos.x as f64,
            paddle.pos.y as f64,
            paddle.width as f64,
            paddle.thickness as f64,
        );
    }

    fn draw_bricks(ctx: &CanvasRenderingContext2d, grid: &BrickGrid) {
        for brick in grid.bricks.iter().filter(|b| b.visible) {
            ctx.set_fill_style_str(&css_color(brick.color));
            ctx.fill_rect(
                brick.pos.x as f64,
                brick.pos.y as f64,
                grid.layout.width as f64,
                grid.layout.height as f64,
            );
        }
    }

    fn draw_all(ctx: &CanvasRenderingContext2d, state: &GameState) -> Result<(), JsValue> {
        draw_background(ctx, state.canvas);
        draw_bricks(ctx, &state.bricks);
        draw_paddle(ctx, &state.paddle);
        draw_ball(ctx, &state.ball)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Brickfall starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("playGround")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load();
        let fps = settings.fps;
        let seed = js_sys::Date::now() as u64;
        let size = Canvas::new(canvas.width() as f32, canvas.height() as f32);
        let game = Rc::new(RefCell::new(GameState::new(settings, size, seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Pointer moves: last write wins until the next tick
        {
            let game = game.clone();
            let canvas_el = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_el.get_bounding_client_rect();
                let root = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element());
                let scroll = root
                    .map(|r| ScrollOffset {
                        x: r.scroll_left() as f32,
                        y: r.scroll_top() as f32,
                    })
                    .unwrap_or_default();
                let rect = CanvasRect {
                    left: rect.left() as f32,
                    top: rect.top() as f32,
                };
                update_paddle_position(
                    &mut game.borrow_mut(),
                    event.client_x() as f32,
                    event.client_y() as f32,
                    rect,
                    scroll,
                );
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Fixed-rate timer: update, then draw
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut state = game.borrow_mut();
                tick(&mut state);
                if let Err(e) = draw_all(&ctx, &state) {
                    log::warn!("Draw error: {:?}", e);
                }
            });
            let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                (1000 / fps.max(1)) as i32,
            )?;
            closure.forget();
            log::info!("Timer running (interval id {})", interval_id);
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use brickfall::sim::{
        Canvas, CanvasRect, Collision, GameState, ScrollOffset, tick, update_paddle_position,
    };
    use brickfall::{BrickfallError, Settings};

    pub const DEFAULT_TICKS: u64 = 30 * 60;
    const CANVAS: Canvas = Canvas {
        width: 800.0,
        height: 600.0,
    };

    /// Session totals
    #[derive(Debug, Default)]
    pub struct Summary {
        pub ticks: u64,
        pub bricks_destroyed: u32,
        pub paddle_bounces: u32,
        pub misses: u32,
        pub bricks_left: usize,
    }

    /// Parse `[settings.json] [ticks]`
    pub fn parse_args(args: &[String]) -> Result<(Settings, u64), BrickfallError> {
        let settings = match args.first() {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };
        let ticks = match args.get(1) {
            Some(n) => n
                .parse()
                .map_err(|_| BrickfallError::InvalidSettings(format!("bad tick count: {}", n)))?,
            None => DEFAULT_TICKS,
        };
        Ok((settings, ticks))
    }

    /// Run a session where the pointer lags the ball by one tick
    pub fn run(settings: Settings, ticks: u64, seed: u64) -> Summary {
        let mut state = GameState::new(settings, CANVAS, seed);
        let mut summary = Summary::default();

        for _ in 0..ticks {
            let target_x = state.ball.pos.x;
            update_paddle_position(
                &mut state,
                target_x,
                CANVAS.height,
                CanvasRect::default(),
                ScrollOffset::default(),
            );

            let report = tick(&mut state);
            summary.ticks += 1;
            if report.missed {
                summary.misses += 1;
                log::info!("Tick {}: ball lost, respawned at {}", state.time_ticks, state.ball.pos);
            }
            match report.collision {
                Some(Collision::Brick { .. }) => summary.bricks_destroyed += 1,
                Some(Collision::Paddle) => summary.paddle_bounces += 1,
                None => {}
            }
            if state.bricks.visible_count() == 0 {
                log::info!("Tick {}: grid cleared", state.time_ticks);
                break;
            }
        }

        summary.bricks_left = state.bricks.visible_count();
        summary
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (settings, ticks) = match headless::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: brickfall [settings.json] [ticks]\n{}", e);
            std::process::exit(1);
        }
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let summary = headless::run(settings, ticks, seed);

    println!(
        "{} ticks: {} bricks destroyed, {} left, {} paddle bounces, {} misses",
        summary.ticks,
        summary.bricks_destroyed,
        summary.bricks_left,
        summary.paddle_bounces,
        summary.misses
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
