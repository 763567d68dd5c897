//=========================================================================
// Engine
//=========================================================================
//
// Top-level engine assembly and entry point.
//
// Architecture:
//   EngineBuilder → Engine → [CoreLoop thread] + [Platform main thread]
//
// The builder collects configuration (tick rate, channel capacity,
// window parameters), `init()` registers the game's scenes, and `run()`
// wires the two threads together with crossbeam channels and blocks
// until the window closes.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Imports ====================================================

use crate::core::globals::GlobalSystems;
use crate::core::scene::{Handoff, SceneKey};
use crate::core::CoreLoop;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Fluent configuration for [`Engine`].
///
/// ```no_run
/// use dotdot::EngineBuilder;
/// use dotdot::game::{RoundHandoff, SceneId};
///
/// let engine = EngineBuilder::<SceneId, RoundHandoff>::new()
///     .with_tps(60.0)
///     .with_window("DotDot", 800, 600)
///     .build();
/// ```
pub struct EngineBuilder<S: SceneKey, H: Handoff> {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    _marker: std::marker::PhantomData<(S, H)>,
}

impl<S: SceneKey, H: Handoff> EngineBuilder<S, H> {
    /// Creates a builder with default settings (60 TPS, 128-event
    /// channel, 800x600 window).
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig {
                title: "DotDot".to_string(),
                width: 800,
                height: 600,
            },
            _marker: std::marker::PhantomData,
        }
    }

    /// Sets the logic tick rate in ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not strictly positive.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the platform→core event channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be non-zero");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title and logical size.
    pub fn with_window(mut self, title: impl Into<String>, width: u32, height: u32) -> Self {
        self.window = WindowConfig {
            title: title.into(),
            width,
            height,
        };
        self
    }

    /// Finalizes the configuration into an [`Engine`].
    pub fn build(self) -> Engine<S, H> {
        Engine {
            core: CoreLoop::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey, H: Handoff> Default for EngineBuilder<S, H> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The assembled engine: a core loop plus the platform layer.
///
/// Call [`Engine::init`] to register scenes, then [`Engine::run`] to
/// start. `run()` consumes the engine and blocks the calling thread
/// until the window closes.
pub struct Engine<S: SceneKey, H: Handoff> {
    core: CoreLoop<S, H>,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<S: SceneKey, H: Handoff> Engine<S, H> {
    /// Runs an initialization closure against the systems container.
    ///
    /// This is where scenes are registered and the initial scene is
    /// selected.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, H>),
    {
        self.core.init_systems(init_fn);
        self
    }

    /// Starts the engine and blocks until shutdown.
    ///
    /// Spawns the logic thread, then runs the Winit event loop on the
    /// calling thread (must be the main thread on macOS/iOS). When the
    /// window closes, waits for the logic thread to exit.
    pub fn run(self) {
        info!(
            "Starting engine: {} TPS, {}x{} window",
            self.tps, self.window.width, self.window.height
        );

        let (event_tx, event_rx) = bounded(self.channel_capacity);
        // Capacity 1: the platform only ever wants the newest frame
        let (frame_tx, frame_rx) = bounded(1);

        let core_handle = self.core.spawn(
            event_rx,
            frame_tx,
            self.tps,
            self.window.width as f32,
            self.window.height as f32,
        );

        let platform = Platform::new(event_tx, frame_rx, self.window);
        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        match core_handle.join() {
            Ok(()) => info!("Engine shut down cleanly"),
            Err(_) => error!("Core thread panicked"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
