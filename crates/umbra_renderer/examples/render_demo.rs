//! Render the outdoor demo scene at a small resolution.
//!
//! Run with: cargo run --release --example render_demo -- [output.txt]

use std::env;

use umbra_core::demo::{camera_with_resolution, outdoor_scene};
use umbra_renderer::{render_to_files, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out = env::args().nth(1).unwrap_or_else(|| "demo.txt".to_string());

    let mut builder = outdoor_scene()?;
    builder.add_camera(camera_with_resolution(320, 180)?);
    let scene = builder.build();

    let config = RenderConfig::default().with_shadows(true);
    let start = std::time::Instant::now();
    let written = render_to_files(&scene, &config, &out)?;

    println!("Rendered in {:?}", start.elapsed());
    for path in written {
        println!("Saved to {}", path.display());
    }
    Ok(())
}
