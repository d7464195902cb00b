//! Gesture Runner entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless session with a scripted hand that steers away from the
//! nearest obstacle, which is handy for checking balance changes.
//!
//! Usage: `gesture-runner [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use gesture_runner::platform::{HandInput, LogHud, dispatch_events};
    use gesture_runner::sim::{World, tick};
    use gesture_runner::{Settings, Tuning};

    env_logger::init();
    log::info!("Gesture Runner (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };

    let settings = Settings::default();
    let mut world = World::new(0x5eed, tuning)?;
    let mut hand = HandInput::new(&settings);
    let mut hud = LogHud::default();

    const MAX_TICKS: u32 = 20_000;
    for _ in 0..MAX_TICKS {
        let x = autopilot::choose_hand_x(&world);
        // Feed the tracker-side coordinate so mirroring is exercised
        let raw = if settings.mirror_input { 1.0 - x } else { x };
        hand.on_palm_positions(&[raw]);

        let events = tick(&mut world, &hand.sample());
        dispatch_events(events, &mut hud);
        if world.state.is_game_over() {
            break;
        }
    }

    println!(
        "Finished after {} ticks: score {}, speed {:.3}, {}",
        world.state.time_ticks,
        world.state.score,
        world.state.speed,
        if world.state.is_game_over() {
            "crashed"
        } else {
            "survived"
        }
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use gesture_runner::sim::{Lane, World};

    /// How far ahead (in depth units) the autopilot looks for threats
    const LOOKAHEAD: f32 = 40.0;

    /// Pick a hand position that puts the player in a lane clear of nearby
    /// obstacles, preferring to stay put.
    pub fn choose_hand_x(world: &World) -> f32 {
        let tuning = world.tuning();
        let current = lane_nearest(world.player.current_x, tuning.lane_width);

        let blocked = |lane: Lane| {
            world
                .pool
                .iter()
                .any(|o| o.lane == lane && o.depth < 2.0 * tuning.half_extent && o.depth > -LOOKAHEAD)
        };

        let lane = if !blocked(current) {
            current
        } else {
            Lane::ALL
                .into_iter()
                .filter(|&lane| !blocked(lane))
                .min_by_key(|lane| (lane.index() - current.index()).abs())
                .unwrap_or(current)
        };
        hand_x_for(lane)
    }

    fn lane_nearest(x: f32, lane_width: f32) -> Lane {
        match (x / lane_width).round() as i32 {
            i32::MIN..=-1 => Lane::Left,
            0 => Lane::Center,
            _ => Lane::Right,
        }
    }

    fn hand_x_for(lane: Lane) -> f32 {
        match lane {
            Lane::Left => 0.2,
            Lane::Center => 0.5,
            Lane::Right => 0.8,
        }
    }
}
