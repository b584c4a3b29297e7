use lumen::config::RenderSettings;
use lumen::core::default_scene::{default_camera, default_scene};
use lumen::core::rng::LcgRng;
use lumen::core::sensor::Sensor;
use lumen::integrators::path::{PathIntegrator, PathState, PathStep, Termination};
use lumen::materials::reflectance::calculate_brdf;
use lumen::math::constants::{Float, Vector2f};
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
        eprintln!("Usage: trace_pixel_path <x> <y> [--seed N] [--max-depth N] [--width N] [--height N]");
        std::process::exit(1);
    }

    let x: usize = positional[0].parse().unwrap_or(0);
    let y: usize = positional[1].parse().unwrap_or(0);
    let (width, height) = (settings.width, settings.height);
    if x >= width || y >= height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, width, height);
        std::process::exit(2);
    }

    let scene = default_scene();
    let camera = default_camera(width, height);
    let integrator = PathIntegrator::new(settings.max_depth, 1);

    let mut rng = LcgRng::for_invocation(settings.seed, (x + width * y) as u64, 0);
    let jitter = rng.next_2d();
    let u = (x as Float + jitter.x) / (width as Float);
    let v = (y as Float + jitter.y) / (height as Float);
    let mut state = PathState::from_ray(&camera.sample_ray(&Vector2f::new(u, v)));

    log::info!("trace_pixel_path: pixel=({}, {}) u={:.6} v={:.6}", x, y, u, v);

    let result = loop {
        if state.depth >= integrator.max_depth {
            log::info!("bounce {}: max depth reached", state.depth);
            break None;
        }

        let ray = state.ray();
        match scene.ray_intersection(&ray) {
            Some(hit) => {
                let object = hit.object;
                log::info!(
                    "bounce {}: object={} kind={:?} light={} t={:.5} p=({:.5}, {:.5}, {:.5}) n=({:.5}, {:.5}, {:.5}) brdf={:.6}",
                    state.depth,
                    object.name().unwrap_or("<unnamed>"),
                    object.material().kind(),
                    object.is_light(),
                    hit.distance,
                    hit.position.x, hit.position.y, hit.position.z,
                    hit.normal.x, hit.normal.y, hit.normal.z,
                    calculate_brdf(object.material().kind(), &hit, &ray)
                );
            }
            None => log::info!("bounce {}: miss", state.depth),
        }

        match integrator.step(&scene, &state, &mut rng) {
            PathStep::Continue(next) => {
                log::info!(
                    "bounce {}: throughput=({:.6}, {:.6}, {:.6}) value=({:.6}, {:.6}, {:.6}) primary={}",
                    state.depth,
                    next.throughput[0], next.throughput[1], next.throughput[2],
                    next.value[0], next.value[1], next.value[2],
                    next.primary
                );
                state = next;
            }
            PathStep::Finished(result) => break Some(result),
        }
    };

    let (radiance, termination) = match result {
        Some(result) => (result.radiance, result.termination),
        None => (state.value, Termination::MaxDepth),
    };
    log::info!(
        "result: {:?} after {} bounces -> R {:.6}, G {:.6}, B {:.6}",
        termination, state.depth, radiance[0], radiance[1], radiance[2]
    );
}
