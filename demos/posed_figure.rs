//! Builds a figure from a JSON pose, adjusts one joint, and dumps the
//! resulting draw list.
//!
//! Run with `cargo run --example posed_figure`.

use anyhow::Result;
use glam::Affine3A;
use marionette::{DrawList, Figure, Joint, PartId, Pose, Proportions};

/// A waving variant of the rest pose, as a pose editor would save it.
const POSE_JSON: &str = r#"
{
    "angles": [60.0, -20.0, 25.0, 150.0, 35.0, 210.0, 90.0, 10.0, -55.0, -10.0, -30.0]
}
"#;

fn main() -> Result<()> {
    env_logger::init();

    let mut pose: Pose = serde_json::from_str(POSE_JSON)?;
    let mut figure = Figure::new(Proportions::default(), &pose);
    figure.validate_topology()?;

    // Tilt the head a little further and rebuild just that part.
    pose.set_angle(Joint::HeadPitch, -35.0);
    figure.rebuild_part(PartId::Head, &pose);

    let mut list = DrawList::new();
    figure.render(Affine3A::IDENTITY, &mut list);

    println!("posed figure, {} boxes:", list.len());
    for (i, instance) in list.instances().iter().enumerate() {
        let center = instance.translation;
        println!(
            "  box {i}: center ({:+6.2}, {:+6.2}, {:+6.2})",
            center.x, center.y, center.z
        );
    }
    Ok(())
}
