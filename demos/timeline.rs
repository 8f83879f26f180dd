//! Prints the bounce timeline of a marker, frame by frame.
//!
//! Run with `RUST_LOG=debug cargo run --example timeline` to see the cache at work.

use marker_bounce::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let options = BouncingOptions::from_json_str(r#"{ "bounceHeight": 10, "contractHeight": 6 }"#)?;
    let marker = BouncingMarker::new("demo".to_string(), Point::new(100, 100))
        .with_shadow(Point::new(100, 100))
        .with_options(options)?;

    let motion = marker.motion();
    println!("move: {} frames over {} ms", motion.frame_count(), motion.duration());
    for frame in motion.frames() {
        println!(
            "{:>5} ms  step {:>2}  icon{}  shadow {:?}",
            frame.delay,
            frame.step,
            frame.icon_transform,
            frame.shadow_point
        );
    }

    if let Some(resize) = &motion.resize {
        println!("resize: {} frames", resize.steps.len());
        for (step, delay) in resize.steps.iter().zip(resize.delays.iter()) {
            let transform = &resize.transforms[*step as usize];
            println!("{:>5} ms  step {:>2}  icon{}", delay, step, transform);
        }
    }

    Ok(())
}
