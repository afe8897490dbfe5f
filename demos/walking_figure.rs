//! Walks the figure under an orbiting camera and logs frame summaries.
//!
//! Run with `RUST_LOG=info cargo run --example walking_figure`.

use std::time::Duration;

use anyhow::Result;
use marionette::{DrawList, Figure, GaitDriver, OrbitCamera, Pose, Proportions};

fn main() -> Result<()> {
    env_logger::init();

    let mut pose = Pose::rest();
    let mut figure = Figure::new(Proportions::default(), &pose);
    figure.validate_topology()?;

    let mut camera = OrbitCamera::default();
    camera.orbit_by(30.0, -15.0);

    let driver = GaitDriver::default();
    let mut list = DrawList::new();

    // Four seconds of walking at a fixed 16 ms step.
    let step = Duration::from_millis(16);
    let mut elapsed = Duration::ZERO;
    let frames = 240;
    for frame in 0..frames {
        if frame == frames / 2 {
            camera.zoom_by(6.0);
        }

        list.clear();
        driver.advance_frame(&mut figure, &mut pose, elapsed, camera.view(), &mut list);

        if frame % 30 == 0 {
            log::info!(
                "t={:>5} ms swing={:+7.2} deg draws={}",
                elapsed.as_millis(),
                driver.swing(elapsed),
                list.len()
            );
        }
        elapsed += step;
    }

    println!(
        "walked {frames} frames, {} boxes per frame, final eye distance {}",
        list.len(),
        camera.distance
    );
    Ok(())
}
