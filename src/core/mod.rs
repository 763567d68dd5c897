//=========================================================================
// Core Loop
//=========================================================================
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the global systems (scene director) and context (input, queue)
// - Receive and process platform events via MPSC channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Ship each tick's draw commands to the platform thread
//
// The loop runs independently from the platform layer; communication
// happens only through message passing, keeping the threads isolated.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::{info, trace};

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod render;
pub mod scene;
pub mod timer;

//=== Internal Imports ====================================================

use globals::{GlobalContext, GlobalSystems};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::{Canvas, Frame};
use scene::{Handoff, SceneKey};

//=== CoreLoop ============================================================

/// Owns the engine systems and runs them at a fixed tick rate on a
/// dedicated thread.
///
/// Each tick:
///  1. Collects platform events (exits on window close / disconnect)
///  2. Digests input and updates the active scene
///  3. Applies scene transitions
///  4. Draws the active scene and ships the frame to the platform
///  5. Sleeps to hold the configured tick rate
pub(crate) struct CoreLoop<S: SceneKey, H: Handoff> {
    systems: GlobalSystems<S, H>,
    context: GlobalContext<S, H>,
}

impl<S: SceneKey, H: Handoff> CoreLoop<S, H> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
        }
    }

    /// Runs an initialization closure against the systems container
    /// (scene registration, initial scene selection).
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, H>),
    {
        init_fn(&mut self.systems);
    }

    //--- Execution --------------------------------------------------------

    /// Spawns the logic thread ticking at `tps`.
    ///
    /// `frames` carries one display list per tick; when the platform has
    /// not consumed the previous frame yet, the new one is dropped
    /// rather than blocking the tick.
    pub(crate) fn spawn(
        self,
        receiver: Receiver<PlatformEvent>,
        frames: Sender<Frame>,
        tps: f64,
        canvas_width: f32,
        canvas_height: f32,
    ) -> thread::JoinHandle<()> {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = self.context;
            let mut collector = EventCollector::new(receiver);
            let mut canvas = Canvas::new(canvas_width, canvas_height);

            systems.start(&mut context);

            loop {
                let tick_start = Instant::now();

                //--- 1. Gather platform events ----------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }
                context.frame_events = collector.take_batches();

                //--- 2+3. Input digest, scene update, transitions ---------
                systems.update(&mut context);

                //--- 4. Draw and ship the frame ---------------------------
                systems.draw(&context, &mut canvas);
                let frame = Frame {
                    commands: canvas.take(),
                };
                if frames.try_send(frame).is_err() {
                    trace!("Frame channel busy or closed, dropping frame");
                }

                //--- 5. Maintain deterministic pacing ---------------------
                let elapsed = tick_start.elapsed();
                if elapsed < tick_duration {
                    thread::sleep(tick_duration - elapsed);
                }
            }
        })
    }
}
