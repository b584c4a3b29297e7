// Copyright @yucwang 2021

use crate::config::RenderSettings;
use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

pub use super::renderer::{RenderError, Renderer};

/// Block-parallel renderer. Every (pixel, sample) pair is an independent
/// invocation with its own random stream.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    settings: RenderSettings,
}

struct Block {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    pixels: Vec<Vector3f>,
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, settings: RenderSettings) -> Self {
        Self { integrator, settings }
    }

    /// Bounce limit of the integrator doing the work.
    pub fn max_depth(&self) -> u32 {
        self.integrator.max_depth()
    }

    fn thread_count(&self) -> usize {
        match self.settings.threads {
            0 => thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            n => n,
        }
    }

    /// Average of all samples of one pixel.
    pub fn render_pixel(&self, scene: &Scene, sensor: &dyn Sensor, x: usize, y: usize) -> Vector3f {
        let width = sensor.bitmap().width();
        let spp = self.integrator.samples_per_pixel().max(1);
        let pixel = Vector2f::new(x as Float, y as Float);
        let pixel_index = (x + width * y) as u64;

        let mut color = Vector3f::zeros();
        for sample in 0..spp {
            let mut rng = LcgRng::for_invocation(self.settings.seed, pixel_index, sample as u64);
            let rgb = self.integrator.trace_ray_forward(scene, sensor, pixel, &mut rng);
            color += rgb.to_vector();
        }
        color / (spp as Float)
    }

    fn render_block(&self, scene: &Scene, sensor: &dyn Sensor,
                    x0: usize, y0: usize, x1: usize, y1: usize) -> Block {
        let mut pixels = Vec::with_capacity((x1 - x0) * (y1 - y0));
        for y in y0..y1 {
            for x in x0..x1 {
                pixels.push(self.render_pixel(scene, sensor, x, y));
            }
        }
        Block { x0, y0, x1, y1, pixels }
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene, sensor: &mut dyn Sensor) -> Result<Bitmap, RenderError> {
        if scene.is_empty() {
            return Err(RenderError::NoObjects);
        }
        if scene.light_count() == 0 {
            return Err(RenderError::NoLights);
        }

        let (width, height) = {
            let bmp = sensor.bitmap();
            (bmp.width(), bmp.height())
        };
        if width == 0 || height == 0 {
            return Err(RenderError::MissingSensor);
        }

        let block_size = self.settings.block_size.max(1);
        let blocks_x = (width + block_size - 1) / block_size;
        let blocks_y = (height + block_size - 1) / block_size;
        let total_blocks = blocks_x * blocks_y;
        let thread_count = self.thread_count();

        log::info!("Rendering {} with {} objects ({} lights), {} spp, max depth {}.",
                   sensor.describe(), scene.object_count(), scene.light_count(),
                   self.integrator.samples_per_pixel(), self.max_depth());
        log::info!("{} blocks of {}px on {} threads.", total_blocks, block_size, thread_count);

        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let start = Instant::now();
        let next_block = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<Block>();
        let mut output = vec![Vector3f::zeros(); width * height];
        let sensor_ref: &dyn Sensor = &*sensor;

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let tx = tx.clone();
                let next_block = &next_block;
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let x0 = (block_index % blocks_x) * block_size;
                        let y0 = (block_index / blocks_x) * block_size;
                        let x1 = (x0 + block_size).min(width);
                        let y1 = (y0 + block_size).min(height);

                        let block = self.render_block(scene, sensor_ref, x0, y0, x1, y1);
                        if tx.send(block).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for block in rx.iter() {
                let block_width = block.x1 - block.x0;
                for y in block.y0..block.y1 {
                    for x in block.x0..block.x1 {
                        output[x + width * y] = block.pixels[(x - block.x0) + block_width * (y - block.y0)];
                    }
                }
                log::debug!("Block ({}, {})-({}, {}) done.", block.x0, block.y0, block.x1, block.y1);
                progress.inc(1);
            }
        });
        progress.finish_and_clear();
        log::info!("Rendered {}x{} in {:.2?}.", width, height, start.elapsed());

        let bitmap = sensor.bitmap_mut();
        for y in 0..height {
            for x in 0..width {
                bitmap[(x, y)] = output[x + width * y];
            }
        }
        Ok(bitmap.clone())
    }
}
