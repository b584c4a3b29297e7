// Copyright 2020 TwoCookingMice

use lumen::config::RenderSettings;
use lumen::core::default_scene::{default_camera, default_scene};
use lumen::integrators::path::PathIntegrator;
use lumen::io::{write_image, OutputFormat};
use lumen::renderers::simple::{Renderer, SimpleRenderer};

use std::env;

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (settings, positional) = RenderSettings::from_args(args)?;
    let output_path = match positional.first() {
        Some(path) => path.clone(),
        None => {
            eprintln!("Usage: lumen <output.exr|output.png> [--spp N] [--max-depth N] [--seed N] \
                       [--width N] [--height N] [--block-size N] [--threads N]");
            std::process::exit(1);
        }
    };

    let format = OutputFormat::from_path(&output_path)?;
    log::info!("Output {} as {:?}.", output_path, format);

    log::info!("Building default scene.");
    let scene = default_scene();
    let mut camera = default_camera(settings.width, settings.height);
    let integrator = Box::new(PathIntegrator::new(settings.max_depth, settings.samples_per_pixel));

    let renderer = SimpleRenderer::new(integrator, settings);
    let image = renderer.render(&scene, &mut camera)?;

    write_image(&image, &output_path)?;
    Ok(())
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
