use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use umbra_core::demo::{self, camera_with_resolution};
use umbra_core::loader::{cornell_box, load_obj, ObjPlacement};
use umbra_core::{Material, SceneBuilder};
use umbra_math::Vec3;
use umbra_renderer::{render_to_files, RenderConfig};

const USAGE: &str = "\
Usage: umbra [--demo | --cornell <file.shp> | --obj <file.obj>] [options]

Options:
  --config <render.json>   Load render settings from a JSON file
  --aa                     Supersample and box-filter each pixel
  --shadows                Attenuate occluded and back-facing lights
  --serial                 Render on a single thread
  --out <path>             Output path (default: radiance.txt)
  --width <W>              Image width (default: 1280)
  --height <H>             Image height (default: 720)";

/// Where the scene geometry comes from
#[derive(Debug, Clone, PartialEq)]
enum SceneSource {
    Demo,
    Cornell(PathBuf),
    Obj(PathBuf),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct Args {
    source: SceneSource,
    config: Option<PathBuf>,
    antialiasing: bool,
    shadows: bool,
    serial: bool,
    out: PathBuf,
    width: u32,
    height: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            source: SceneSource::Demo,
            config: None,
            antialiasing: false,
            shadows: false,
            serial: false,
            out: PathBuf::from("radiance.txt"),
            width: demo::DEFAULT_WIDTH,
            height: demo::DEFAULT_HEIGHT,
        }
    }
}

/// Parse arguments (without the program name). Returns `None` for `--help`.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match arg.as_str() {
            "--demo" => parsed.source = SceneSource::Demo,
            "--cornell" => parsed.source = SceneSource::Cornell(value("--cornell")?.into()),
            "--obj" => parsed.source = SceneSource::Obj(value("--obj")?.into()),
            "--config" => parsed.config = Some(value("--config")?.into()),
            "--out" => parsed.out = value("--out")?.into(),
            "--width" => {
                parsed.width = value("--width")?
                    .parse()
                    .context("--width expects a positive integer")?
            }
            "--height" => {
                parsed.height = value("--height")?
                    .parse()
                    .context("--height expects a positive integer")?
            }
            "--aa" => parsed.antialiasing = true,
            "--shadows" => parsed.shadows = true,
            "--serial" => parsed.serial = true,
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(Some(parsed))
}

/// Render settings from the optional config file, overridden by flags.
fn render_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load render config {:?}", path))?,
        None => RenderConfig::default(),
    };
    if args.antialiasing {
        config.antialiasing = true;
    }
    if args.shadows {
        config.light_in_shadows = true;
    }
    if args.serial {
        config.parallel = false;
    }
    Ok(config)
}

fn build_scene(args: &Args) -> Result<SceneBuilder> {
    let builder = match &args.source {
        SceneSource::Demo => demo::outdoor_scene()?,
        SceneSource::Cornell(path) => {
            cornell_box(path).with_context(|| format!("Failed to load {:?}", path))?
        }
        SceneSource::Obj(path) => {
            let mut builder = demo::outdoor_scene()?;
            let material = builder.add_material(Material::new(Vec3::new(0.8, 0.8, 0.8), Vec3::ONE));
            load_obj(path, &mut builder, material, ObjPlacement::TEAPOT)
                .with_context(|| format!("Failed to load {:?}", path))?;
            builder
        }
    };
    Ok(builder)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = render_config(&args)?;
    let mut builder = build_scene(&args)?;
    builder.add_camera(camera_with_resolution(args.width, args.height)?);
    let scene = builder.build();

    log::info!(
        "Scene: {} triangles, {} materials, {} lights",
        scene.triangle_count(),
        scene.material_count(),
        scene.light_count()
    );

    let start = Instant::now();
    let written = render_to_files(&scene, &config, &args.out)
        .with_context(|| format!("Failed to render to {:?}", args.out))?;
    log::info!("Total time: {:?}", start.elapsed());

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
