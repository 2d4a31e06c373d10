//! Build a few crates and print their sprites as ASCII.
//!
//! Run with: RUST_LOG=debug cargo run --example l_shape --features tracing

use glam::ivec2;
use polycrate::{
    Direction, Edge, MergeRequest, RasterConfig, Shape, ShapeData, Temperature, rasterize,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RasterConfig::try_new(6, 1)?;

    let data = ShapeData {
        offsets: vec![ivec2(0, 0), ivec2(1, 0), ivec2(0, 1), ivec2(-1, 0)],
        overrides: vec![Edge::sticky(ivec2(1, 0), Direction::Right)],
        temperature: Temperature(1),
    };
    let base = Shape::from_data(&data)?;
    print_shape("base", &base, &config);

    let other = Shape::new(
        [ivec2(0, 0), ivec2(0, -1)],
        [Edge::sticky(ivec2(0, 0), Direction::Left)],
    )?;
    print_shape("other", &other, &config);

    let merged = MergeRequest::new(&base, ivec2(4, 4), &other, ivec2(6, 4)).merge()?;
    print_shape("merged", &merged, &config);

    // overlapping cells are reported, not merged
    if let Err(e) = MergeRequest::new(&base, ivec2(0, 0), &other, ivec2(1, 0)).merge() {
        eprintln!("{:?}", miette::Report::new(e));
    }
    Ok(())
}

fn print_shape(name: &str, shape: &Shape, config: &RasterConfig) {
    let raster = rasterize(shape, config);
    let pivot = raster.pivot();
    println!(
        "{name}: {} cells, {} boundary edges, pivot ({:.3}, {:.3})",
        shape.len(),
        shape.boundary_ids().len(),
        pivot.x,
        pivot.y
    );
    for edge in shape.boundary_edges() {
        println!(
            "  ({:>2}, {:>2}) {:<5} {:?}",
            edge.position.x, edge.position.y, edge.direction, edge.class
        );
    }
    println!("{}\n", raster.outline.to_ascii());
}
