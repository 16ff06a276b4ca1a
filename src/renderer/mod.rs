//! Rendering infrastructure.
//!
//! The wgpu device, surface and frame encoding live in [`wgpu_lib`]; the
//! other modules are one pipeline each.

/// Flat colored quads for the buttons.
pub mod rectangle;
/// The textured, rotating sprite.
pub mod sprite;
/// Text rendering system.
pub mod text;
/// The full-screen wave shader.
pub mod wave;
/// Core WGPU setup and per-frame encoding.
pub mod wgpu_lib;
