// Copyright @yucwang 2026

pub mod plane;
pub mod sphere;
pub mod triangle;
