// Copyright @yucwang 2021

pub mod bsdf;
pub mod default_scene;
pub mod environment;
pub mod integrator;
pub mod interaction;
pub mod material;
pub mod object;
pub mod rng;
pub mod sensor;
pub mod scene;
pub mod shape;
pub mod tangent_frame;
