//=========================================================================
// Dot Field
//=========================================================================
//
// Simulation of the wandering dots the player has to catch.
//
// Each dot drifts across the playfield with a random velocity, bouncing
// off the edges. When the cursor gets within capture range of a dot,
// the dot is captured: it stops moving and stays captured for the rest
// of the round (capture is sticky).
//
//=========================================================================

//=== External Crates =====================================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Imports ====================================================

use crate::core::render::Color;

//=== Palette =============================================================

const DOT_COLORS: [Color; 5] = [
    Color::rgb(0xe7, 0x6f, 0x51),
    Color::rgb(0xf4, 0xa2, 0x61),
    Color::rgb(0xe9, 0xc4, 0x6a),
    Color::rgb(0x2a, 0x9d, 0x8f),
    Color::rgb(0x8a, 0xb1, 0x7c),
];

//=== DotConfig ===========================================================

/// Tunable parameters for the dot simulation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Number of dots in the field.
    pub count: usize,

    /// Cursor-to-dot distance (pixels) at which a dot is captured.
    pub capture_distance: f32,

    /// Rendered dot size (pixels, square).
    pub dot_size: f32,

    /// Maximum per-axis velocity (pixels per tick).
    pub max_speed: f32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            count: 10,
            capture_distance: 100.0,
            dot_size: 8.0,
            max_speed: 2.0,
        }
    }
}

//=== Dot =================================================================

/// One wandering dot.
#[derive(Debug, Clone)]
pub struct Dot {
    pos: (f32, f32),
    velocity: (f32, f32),
    size: f32,
    color: Color,
    captured: bool,
    /// Distance to the cursor, refreshed every update.
    distance: f32,
}

impl Dot {
    pub fn pos(&self) -> (f32, f32) {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    /// Cursor distance as of the last update.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

//=== DotField ============================================================

/// The full dot simulation for one round.
///
/// `start()` scatters the dots; `update()` advances them one tick and
/// applies captures against the given cursor position.
pub struct DotField {
    width: f32,
    height: f32,
    config: DotConfig,
    dots: Vec<Dot>,
    rng: StdRng,
}

impl DotField {
    //--- Construction -----------------------------------------------------

    pub fn new(width: f32, height: f32, config: DotConfig) -> Self {
        Self {
            width,
            height,
            config,
            dots: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic construction for tests.
    #[cfg(test)]
    pub(crate) fn with_seed(width: f32, height: f32, config: DotConfig, seed: u64) -> Self {
        Self {
            width,
            height,
            config,
            dots: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    //--- Round Lifecycle --------------------------------------------------

    /// Scatters a fresh set of dots and clears all captures.
    pub fn start(&mut self) {
        let count = self.config.count;
        self.dots.clear();
        self.dots.reserve(count);

        for i in 0..count {
            let pos = (
                self.rng.gen_range(0.0..self.width),
                self.rng.gen_range(0.0..self.height),
            );
            let velocity = (
                self.rng.gen_range(-self.config.max_speed..self.config.max_speed),
                self.rng.gen_range(-self.config.max_speed..self.config.max_speed),
            );
            self.dots.push(Dot {
                pos,
                velocity,
                size: self.config.dot_size,
                color: DOT_COLORS[i % DOT_COLORS.len()],
                captured: false,
                distance: f32::MAX,
            });
        }
    }

    /// Advances the simulation one tick.
    ///
    /// Uncaptured dots drift and bounce off the playfield edges. Every
    /// dot's cursor distance is refreshed; any uncaptured dot within
    /// capture range becomes captured and stays captured.
    pub fn update(&mut self, cursor: (f32, f32)) {
        for dot in &mut self.dots {
            if !dot.captured {
                dot.pos.0 += dot.velocity.0;
                dot.pos.1 += dot.velocity.1;

                if dot.pos.0 < 0.0 || dot.pos.0 > self.width {
                    dot.velocity.0 = -dot.velocity.0;
                    dot.pos.0 = dot.pos.0.clamp(0.0, self.width);
                }
                if dot.pos.1 < 0.0 || dot.pos.1 > self.height {
                    dot.velocity.1 = -dot.velocity.1;
                    dot.pos.1 = dot.pos.1.clamp(0.0, self.height);
                }
            }

            let dx = dot.pos.0 - cursor.0;
            let dy = dot.pos.1 - cursor.1;
            dot.distance = (dx * dx + dy * dy).sqrt();

            if !dot.captured && dot.distance <= self.config.capture_distance {
                dot.captured = true;
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Total dot count for this field (fixed by configuration).
    pub fn count(&self) -> usize {
        self.config.count
    }

    pub fn captured_count(&self) -> usize {
        self.dots.iter().filter(|d| d.captured).count()
    }

    pub fn capture_distance(&self) -> f32 {
        self.config.capture_distance
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
