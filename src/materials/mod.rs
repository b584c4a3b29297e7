// Copyright @yucwang 2026

pub mod lambertian_diffuse;
pub mod mirror;
pub mod reflectance;
