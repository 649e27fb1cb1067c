//! Example: Load and inspect a Cornell-box `.shp` file.
//!
//! Run with: cargo run --example inspect_scene -- data/cornel_box0.shp

use std::env;

use umbra_core::loader::cornell_box;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-shp-file>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- data/cornel_box0.shp");
        return;
    }

    let path = &args[1];
    println!("Loading shp file: {}", path);

    match cornell_box(path) {
        Ok(builder) => {
            let scene = builder.build();
            println!("\n=== Scene ===");
            println!("Materials: {}", scene.material_count());
            println!("Triangles: {}", scene.triangle_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Materials ---");
            for (i, material) in scene.materials().iter().enumerate() {
                let c = material.base_color;
                println!(
                    "  [{}] color ({:.3}, {:.3}, {:.3}), mirror {:.2}",
                    i,
                    c.x,
                    c.y,
                    c.z,
                    material.mirror()
                );
            }

            let mut min = umbra_core::Vec3::splat(f64::INFINITY);
            let mut max = umbra_core::Vec3::splat(f64::NEG_INFINITY);
            for triangle in scene.triangles() {
                for v in [triangle.v0, triangle.v1, triangle.v2] {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            println!("\n--- Bounds ---");
            println!("  Min: ({:.2}, {:.2}, {:.2})", min.x, min.y, min.z);
            println!("  Max: ({:.2}, {:.2}, {:.2})", max.x, max.y, max.z);
        }
        Err(e) => {
            eprintln!("Error loading shp file: {}", e);
        }
    }
}
