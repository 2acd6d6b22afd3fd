//! Room Walkthrough — scripted camera tour of the room scene.
//!
//! Feeds a fixed key sequence through the default key map, prints the camera
//! readout after each step, then holds W for half a second through the fly
//! controller. The last frame is written as JSON.
//!
//! Run with: `cargo run -p atrium --example room_walkthrough [-- room.json [out.json]]`

use std::time::{Duration, Instant};

use atrium::prelude::*;
use atrium::overlay::camera_readout;
use atrium::scene::TextureSlot;

const STEP_KEYS: [KeyCode; 8] = [
    KeyCode::KeyW,
    KeyCode::KeyW,
    KeyCode::KeyW,
    KeyCode::ArrowLeft,
    KeyCode::KeyD,
    KeyCode::KeyC,
    KeyCode::KeyQ,
    KeyCode::KeyR,
];

fn main() -> Result<(), SceneError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RoomConfig::load(path)?,
        None => RoomConfig::default(),
    };
    let out_path = args.next().unwrap_or_else(|| "room_frame.json".to_string());

    let textures = TextureSet::load(&config.window_texture);
    for slot in [TextureSlot::Window, TextureSlot::Carpet] {
        let state = if textures.get(slot).is_loaded() { "loaded" } else { "missing (drawn white)" };
        println!("texture {slot:?}: {state}");
    }

    let scene = RoomScene::new(config)?;
    let viewport = Viewport::default();
    let keys = KeyMap::default();
    let mut input = Input::new();
    let mut camera = scene.camera();
    let mut overlay_on = true;

    println!("start  {}", camera_readout(camera.position()));

    // ── Discrete steps ──
    for key in STEP_KEYS {
        input.clear_just();
        input.press(key);
        for action in keys.just_pressed(&input) {
            match action {
                Action::Camera(a) => camera.apply(a),
                Action::ToggleOverlay => overlay_on = !overlay_on,
                Action::Exit => return Ok(()),
            }
        }
        input.release(key);

        let frame = scene.assemble(&camera, &viewport, overlay_on);
        println!("{key:?}  {}  ({} commands)", camera_readout(camera.position()), frame.commands.len());
    }

    // ── Held key ──
    let fly = FlyController::default();
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    input.clear_just();
    input.press(KeyCode::KeyW);
    for i in 1..=30u64 {
        clock.advance_to(start + Duration::from_micros(16_667 * i));
        fly.update(&mut camera, keys.intent(&input), clock.delta_secs());
    }
    input.release(KeyCode::KeyW);
    println!(
        "held W for {:.2}s  {}",
        clock.elapsed_secs(),
        camera_readout(camera.position())
    );

    let frame = scene.assemble(&camera, &viewport, overlay_on);
    for pass in frame.commands.passes() {
        println!("  {:<10} {:>4}", pass.name, pass.len());
    }
    std::fs::write(&out_path, frame.to_json_pretty()?)?;
    println!("wrote {out_path}");
    Ok(())
}
