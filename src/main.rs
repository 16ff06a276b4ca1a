//! Wabbit - a windowed "hello world" demo
//!
//! Opens a window, finds the `resources` folder, loads a texture and a
//! music stream, and runs a frame loop drawing text and a bouncing,
//! rotating sprite. A button opens a second screen with a full-screen
//! animated wave shader.
//!
//! # Architecture
//! - `app/`: winit application, session state and the per-frame step
//! - `demo/`: the two-screen state machine, sprite physics, music
//! - `renderer/`: wgpu setup and one pipeline per drawn thing
//! - `resource_dir`: locates the `resources` folder before anything loads
//!
//! # Usage
//! Run with `cargo run`. Assets are looked up in a `resources` folder next
//! to the working directory or the executable; the demo still runs (silent,
//! spriteless) when they are missing. Close the window or press Escape to
//! quit.

pub mod app;
pub mod demo;
pub mod renderer;
pub mod resource_dir;

use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    env_logger::init();

    // Enter the resources folder before any asset path is resolved.
    if !resource_dir::search_and_set_resource_dir("resources") {
        log::warn!("no resources directory found; running without bundled assets");
    }

    pollster::block_on(run());
}

/// Creates the event loop and runs the application until the window closes.
async fn run() {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("error creating event loop: {err}");
            return;
        }
    };

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new();

    event_loop.run_app(&mut app).expect("Failed to run app");
}
