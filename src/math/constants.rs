/* Copyright 2020 @Yuchen Wong */

use nalgebra::{ Vector2, Vector3 };

pub type Float = f32;
pub type Int = i32;
pub type UInt = u32;

pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;

pub const EPSILON: Float = 1e-4;
pub const PI: Float = 3.14159265359;
pub const INV_PI: Float = 0.31830988618;
pub const INV_2PI: Float = 0.15915494309;

// Offset applied along surface normals when spawning rays, and the
// throughput level below which a path stops contributing.
pub const BIAS: Float = 1e-3;
