// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    NoObjects,
    NoLights,
    /// The sensor has an empty film.
    MissingSensor,
    /// Output path whose extension is neither `.exr` nor `.png`.
    UnsupportedFormat(String),
    Io(std::io::Error),
    Exr(exr::error::Error),
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NoObjects => write!(f, "scene has no objects"),
            RenderError::NoLights => write!(f, "scene has no lights"),
            RenderError::MissingSensor => write!(f, "sensor has an empty film"),
            RenderError::UnsupportedFormat(path) => write!(f, "unsupported output format: {} (expected .exr or .png)", path),
            RenderError::Io(err) => write!(f, "io error: {}", err),
            RenderError::Exr(err) => write!(f, "exr error: {}", err),
            RenderError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<exr::error::Error> for RenderError {
    fn from(err: exr::error::Error) -> Self {
        RenderError::Exr(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

pub trait Renderer {
    /// Renders the scene into the sensor's film and returns a copy of it.
    fn render(&self, scene: &Scene, sensor: &mut dyn Sensor) -> Result<Bitmap, RenderError>;
}
