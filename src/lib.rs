//=========================================================================
// DotDot
//=========================================================================
//
// A small catch-the-dots arcade game on a two-threaded engine.
//
// Architecture:
// - `core`      — logic-thread subsystems: scene director, input state,
//                 round timer, display-list rendering
// - `platform`  — main-thread Winit layer: window, raw input, frames
// - `engine`    — assembly: builder, channels, thread lifecycle
// - `game`      — the DotDot scenes built on top of the engine
//
// The two threads communicate only over crossbeam channels: input
// events flow platform→core, display lists flow core→platform.
//
//=========================================================================

pub mod core;
pub mod game;
pub mod prelude;

mod engine;
mod platform;

pub use engine::{Engine, EngineBuilder};
