//! Prints the cross-section of a sample weld joint.
//!
//! Usage:
//! ```text
//! cargo run --example joint                 # V groove, outer
//! cargo run --example joint -- U inner      # groove type and position
//! RUST_LOG=weld_joint=trace cargo run --example joint
//! ```

use weld_joint::joint::{GrooveType, PlateOutline, PlateParams, Position, Segment};
use weld_joint::{JointParameters, MakeJoint, WeldError};

fn main() -> Result<(), WeldError> {
    // Default: WARN for everything, INFO for weld_joint.
    // Override with RUST_LOG env var (e.g. RUST_LOG=weld_joint=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("weld_joint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let groove_type: GrooveType = match args.next() {
        Some(s) => s.parse()?,
        None => GrooveType::V,
    };
    let position: Position = match args.next() {
        Some(s) => s.parse()?,
        None => Position::Outer,
    };

    let params = JointParameters::new(
        groove_type,
        position,
        PlateParams::new(8.0, 60.0),
        PlateParams::new(8.0, 60.0),
    )
    .with_blunt_edge(2.0)
    .with_root_gap(2.0);

    let joint = MakeJoint::new(params).execute()?;
    print_outline(joint.left());
    print_outline(joint.right());

    let bbox = joint.bounding_box();
    let (width, height) = bbox.extent();
    println!(
        "bounds: ({:.3}, {:.3}) - ({:.3}, {:.3}), {width:.3} x {height:.3}",
        bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y
    );
    Ok(())
}

fn print_outline(outline: &PlateOutline) {
    println!("{} plate", outline.side());
    for (point, edge) in outline.points().iter().zip(outline.edges()) {
        let segment = match edge.segment {
            Segment::Straight => "line".to_owned(),
            Segment::Arc { center, radius, sweep } => format!(
                "arc r={radius:.3} c=({:.3}, {:.3}) sweep={:.1}°",
                center.x,
                center.y,
                sweep.to_degrees()
            ),
        };
        println!(
            "  {} ({:8.3}, {:8.3})  {}->{} {segment}",
            point.label, point.position.x, point.position.y, edge.from, edge.to
        );
    }
}
