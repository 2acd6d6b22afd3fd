//! Specular Query — the shininess comparison grid with a console prompt.
//!
//! Eight cubes with fixed shininess; type a value at the prompt to add a
//! ninth "query" cube. The render side polls the latest value once per tick
//! and reports when the frame changes. Enter 0 (or end input) to stop.
//!
//! Run with: `cargo run -p atrium --example specular_query`

use std::time::Duration;

use atrium::lighting::specular_grid::HOME;
use atrium::prelude::*;
use atrium::prompt::{channel, spawn_stdin_prompt};

fn main() -> Result<(), SceneError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (sender, receiver) = channel::<f32>();
    let prompt = spawn_stdin_prompt(sender)?;

    let camera = CameraState::new(HOME);
    let viewport = Viewport::new(1200, 700);
    let mut shown: Option<f32> = None;

    loop {
        let query = receiver.latest();
        if query != shown {
            shown = query;
            let frame = SpecularGrid::new().with_query(query).frame(&camera, &viewport);
            let cubes = frame.commands.pass("cubes").map_or(0, |p| p.len() / 2);
            log::info!("frame rebuilt: {cubes} cubes");
        }
        if receiver.is_disconnected() {
            break;
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    if prompt.join().is_err() {
        log::warn!("prompt thread panicked");
    }
    match shown {
        Some(s) => println!("final query shininess: {s:.1}"),
        None => println!("no query cube was set"),
    }
    Ok(())
}
