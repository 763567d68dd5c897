//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread via MPSC.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Loop       │
//  │   ↓                      │    │                  │
//  │  map_* (input_processor) │    │  StateTracker    │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  SceneDirector   │
//  │   ├─ discrete: Vec<>     │    │  ↓               │
//  │   └─ continuous: Set<>   │    │  Canvas → Frame  │
//  │   ↓                      │    └──────────────────┘
//  │  RedrawRequested         │       ↑           │
//  │   ↓ (flush)              │       │           ↓
//  │  MPSC ───────────────────┼───────┘    Frame channel
//  │  latest Frame ◄──────────┼────────────────┘
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Latest display list pulled for presentation
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: batches all input atomically,
//   keeping event order deterministic even at high event rates
// - **Graceful channel disconnect**: if the core thread dies, the
//   platform logs a warning but keeps running so the user can close
//   the window normally
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::Frame;
use input_buffer::InputBuffer;

//=== WindowConfig ========================================================

/// Window parameters chosen by the engine builder.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal - if the event loop can't be created, the engine
/// cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager, input event aggregator, and frame sink.
///
/// Runs on the main thread (Winit requirement on macOS/iOS), sends
/// batched input to the core thread, and holds the latest display list
/// the core produced for whatever presentation backend is attached.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` — initializes subsystems
/// 2. **Execution**: `platform.run()` — starts the event loop (blocks)
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: user closes window → sends `WindowClosed` → exits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` is called).
    window: Option<Window>,

    /// Buffers discrete/continuous input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to the core thread.
    event_sender: Sender<PlatformEvent>,

    /// Channel receiving display lists from the core thread.
    frame_receiver: Receiver<Frame>,

    /// Latest display list, refreshed at each frame boundary. This is
    /// the hook point for a presentation backend.
    latest_frame: Frame,

    /// Window parameters.
    config: WindowConfig,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<Frame>,
        config: WindowConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            frame_receiver,
            latest_frame: Frame::default(),
            config,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while executing.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// Drains both discrete and continuous event buffers, sending them
    /// as a single [`PlatformEvent::Inputs`] message. Called on every
    /// `RedrawRequested` event. Empty buffers are not sent.
    ///
    /// If the channel is disconnected (core thread exited early), logs
    /// a warning and drops the events so the user can still close the
    /// window.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let total = discrete.len() + continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete.len(),
                continuous.len()
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    total
                );
            }
        }
    }

    /// Pulls the most recent display list produced by the core thread.
    ///
    /// The core may have produced several frames since the last pull;
    /// only the newest is kept.
    fn pull_latest_frame(&mut self) {
        let mut pulled = false;
        while let Ok(frame) = self.frame_receiver.try_recv() {
            self.latest_frame = frame;
            pulled = true;
        }
        if pulled {
            trace!(
                target: "platform::render",
                "Frame ready with {} draw commands",
                self.latest_frame.len()
            );
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn latest_frame(&self) -> &Frame {
        &self.latest_frame
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may
    /// be called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event =
                    input_processor::map_cursor_moved(position.x as f32, position.y as f32);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = input_processor::map_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = input_processor::map_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::Touch(touch) => {
                if let Some(event) = input_processor::map_touch(touch) {
                    self.buffer.push_discrete(event);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input, pull the
                // newest display list
                self.flush_input_buffer();
                self.pull_latest_frame();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc. (not needed)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::render::{Color, DrawCommand};
    use crossbeam_channel::unbounded;

    fn test_platform() -> (
        Platform,
        Receiver<PlatformEvent>,
        Sender<Frame>,
    ) {
        let (event_tx, event_rx) = unbounded();
        let (frame_tx, frame_rx) = unbounded();
        let platform = Platform::new(
            event_tx,
            frame_rx,
            WindowConfig {
                title: "DotDot".into(),
                width: 800,
                height: 600,
            },
        );
        (platform, event_rx, frame_tx)
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _event_rx, _frame_tx) = test_platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert!(platform.latest_frame().is_empty());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, event_rx, _frame_tx) = test_platform();

        platform.flush_input_buffer();

        assert!(event_rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, event_rx, _frame_tx) = test_platform();

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        platform.flush_input_buffer();

        match event_rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete.len(), 1, "Should have 1 discrete event");
                assert!(continuous.is_empty(), "Should have no continuous events");
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, event_rx, _frame_tx) = test_platform();

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        drop(event_rx);

        // Should not panic, just log a warning
        platform.flush_input_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, event_rx, _frame_tx) = test_platform();

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyA));

        platform.flush_input_buffer();
        platform.flush_input_buffer(); // Second flush should be no-op

        assert!(event_rx.try_recv().is_ok(), "First flush should send");
        assert!(event_rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn pull_keeps_only_newest_frame() {
        let (mut platform, _event_rx, frame_tx) = test_platform();

        frame_tx.send(Frame::default()).unwrap();
        frame_tx
            .send(Frame {
                commands: vec![DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 8.0,
                    height: 8.0,
                    color: Color::WHITE,
                }],
            })
            .unwrap();

        platform.pull_latest_frame();

        assert_eq!(platform.latest_frame().len(), 1, "Only the newest frame survives");
    }

    #[test]
    fn pull_with_no_frames_keeps_previous() {
        let (mut platform, _event_rx, frame_tx) = test_platform();

        frame_tx
            .send(Frame {
                commands: vec![DrawCommand::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 1.0,
                    y2: 1.0,
                    color: Color::WHITE,
                }],
            })
            .unwrap();
        platform.pull_latest_frame();

        platform.pull_latest_frame();

        assert_eq!(platform.latest_frame().len(), 1, "Stale pull keeps the last frame");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
