//! Rect Arcade entry point
//!
//! Headless native driver: runs one game under a simple autopilot at 60 Hz,
//! feeding synthesized input events and logging notifications.
//!
//! Usage: `rect-arcade [reflex|stack] [config.json]`

use std::process::ExitCode;

use glam::Vec2;
use rect_arcade::consts::MAX_FRAME_DT;
use rect_arcade::sim::{
    FrameInput, Game, InputEvent, Key, Phase, ReflexGame, StackGame, Viewport,
};
use rect_arcade::{Config, ConfigError, clamp_frame_dt};

/// Frames to simulate (one minute at 60 Hz)
const FRAMES: u32 = 60 * 60;
/// Nominal frame time of the fake display
const FRAME_TIME: f32 = 1.0 / 60.0;
/// Every this many frames the fake display stalls
const HICCUP_EVERY: u32 = 600;
const HICCUP_TIME: f32 = 0.25;

const SEED: u64 = 0x5EED;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "reflex".to_string());
    let config = match args.next() {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    log::info!("Rect Arcade ({}) starting...", mode);
    let result = match mode.as_str() {
        "reflex" => run_reflex(config),
        "stack" => run_stack(config),
        other => {
            eprintln!("unknown game '{}', expected 'reflex' or 'stack'", other);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_reflex(config: Config) -> Result<(), ConfigError> {
    let game = ReflexGame::new(config.reflex, SEED)?;
    let game = run(game, |game: &ReflexGame, viewport: &Viewport| {
        let mut events = Vec::new();
        match game.phase {
            Phase::Idle => events.push(InputEvent::PointerDown { button: 1 }),
            Phase::Active => {
                // Chase the target closest to the center line
                let chase = game
                    .targets
                    .iter()
                    .min_by(|a, b| a.rect.center.y.abs().total_cmp(&b.rect.center.y.abs()));
                if let Some(target) = chase {
                    let (x, y) = viewport.to_pixels(Vec2::new(target.rect.center.x, 0.0));
                    events.push(InputEvent::PointerMove { x, y });
                }
            }
            Phase::Terminal(_) => events.push(InputEvent::KeyDown(Key::R)),
        }
        events
    });
    println!("Reflex: final score {}, phase {:?}", game.score, game.phase);
    Ok(())
}

fn run_stack(config: Config) -> Result<(), ConfigError> {
    let game = StackGame::new(config.stack)?;
    let game = run(game, |game: &StackGame, _viewport: &Viewport| {
        let mut events = Vec::new();
        match game.phase {
            Phase::Idle => events.push(InputEvent::PointerDown { button: 1 }),
            Phase::Active => {
                let aligned = game
                    .tower
                    .last()
                    .is_none_or(|below| (below.center.x - game.level.center.x).abs() < 0.01);
                if aligned {
                    events.push(InputEvent::PointerDown { button: 1 });
                }
            }
            Phase::Terminal(_) => events.push(InputEvent::KeyDown(Key::R)),
        }
        events
    });
    println!(
        "Stack: round {}, height {}, phase {:?}",
        game.round,
        game.height(),
        game.phase
    );
    Ok(())
}

/// Drive `game` until the frame budget runs out or quit is requested
fn run<G, P>(mut game: G, mut pilot: P) -> G
where
    G: Game,
    P: FnMut(&G, &Viewport) -> Vec<InputEvent>,
{
    let viewport = Viewport::default();
    let mut input = FrameInput::default();

    for frame in 0..FRAMES {
        let mut events = pilot(&game, &viewport);
        if frame + 1 == FRAMES {
            events.push(InputEvent::QuitRequested);
        }
        input.apply_all(&events, &viewport);
        if input.quit {
            break;
        }

        let measured = if frame > 0 && frame % HICCUP_EVERY == 0 {
            HICCUP_TIME
        } else {
            FRAME_TIME
        };
        game.tick(&input, clamp_frame_dt(measured, MAX_FRAME_DT));
        input.clear_one_shots();

        for event in game.drain_events() {
            if let Some(text) = event.notification() {
                log::info!("{}", text);
            }
        }
    }

    let draw = game.draw_list();
    log::info!(
        "Final draw list: {} rects, {} vertex bytes",
        draw.len(),
        draw.vertex_bytes().len()
    );
    game
}
