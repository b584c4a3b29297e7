use lumen::config::RenderSettings;
use lumen::core::default_scene::{default_camera, default_scene};
use lumen::integrators::path::PathIntegrator;
use lumen::renderers::simple::SimpleRenderer;
use std::env;

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (settings, positional) = match RenderSettings::from_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    if positional.len() < 2 {
        eprintln!("Usage: render_pixel <x> <y> [--spp N] [--max-depth N] [--seed N] [--width N] [--height N]");
        std::process::exit(1);
    }

    let x: usize = positional[0].parse().unwrap_or(0);
    let y: usize = positional[1].parse().unwrap_or(0);
    if x >= settings.width || y >= settings.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, settings.width, settings.height);
        std::process::exit(2);
    }

    let scene = default_scene();
    let camera = default_camera(settings.width, settings.height);
    let (spp, max_depth) = (settings.samples_per_pixel, settings.max_depth);
    let renderer = SimpleRenderer::new(Box::new(PathIntegrator::new(max_depth, spp)), settings);

    let avg = renderer.render_pixel(&scene, &camera, x, y);
    println!(
        "pixel ({}, {}) spp={} depth={} -> R {:.6}, G {:.6}, B {:.6}",
        x, y, spp, max_depth, avg.x, avg.y, avg.z
    );
}
