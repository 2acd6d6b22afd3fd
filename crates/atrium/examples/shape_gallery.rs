//! Shape Gallery — nine animated primitives under an orbiting camera.
//!
//! Steps the demo animation at 60 fps for three seconds and prints where
//! the animated objects are once per second. The final frame is written
//! as JSON.
//!
//! Run with: `cargo run -p atrium --example shape_gallery [-- out.json]`

use std::time::{Duration, Instant};

use atrium::prelude::*;
use atrium::modeller::orbit_eye;

fn main() -> Result<(), SceneError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_path = std::env::args().nth(1).unwrap_or_else(|| "gallery_frame.json".to_string());
    let viewport = Viewport::new(1280, 720);
    let mut shapes = ShapeList::demo();
    println!("{} objects using {:?}", shapes.len(), shapes.primitives());

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    for i in 1..=180u32 {
        clock.advance_to(start + Duration::from_micros(16_667 * u64::from(i)));
        let t = clock.elapsed_secs();
        shapes.animate(t);
        let frame = shapes.frame(t, &viewport);
        log::debug!("frame {}: {} commands", clock.frame_count(), frame.commands.len());

        if clock.frame_count() % 60 == 0 {
            let eye = orbit_eye(t);
            println!(
                "t = {t:.2}s  eye ({:.2}, {:.2}, {:.2})  cube yaw {:.1}°  sphere y {:+.2}  small cube {:?}",
                eye.x,
                eye.y,
                eye.z,
                shapes.objects[1].rotation.y,
                shapes.objects[2].position.y,
                shapes.objects[4].rotation
            );
        }
    }

    let frame = shapes.frame(clock.elapsed_secs(), &viewport);
    std::fs::write(&out_path, frame.to_json_pretty()?)?;
    println!("wrote {out_path} ({} commands)", frame.commands.len());
    Ok(())
}
