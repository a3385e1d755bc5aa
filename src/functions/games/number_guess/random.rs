use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the single draw a round consumes.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn draw(&mut self) -> f64 {
        self.gen()
    }
}

/// Always yields the same draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => {
            let seed: [u8; 32] = rand::random();
            StdRng::from_seed(seed)
        }
    }
}

/// Maps a draw onto `[1, range]` as `floor(draw * range) + 1`.
///
/// Draws outside `[0, 1)` are clamped so the result stays in range.
pub fn scale(draw: f64, range: u32) -> u32 {
    let scaled = (draw * f64::from(range)).floor();

    if scaled.is_nan() || scaled < 0.0 {
        1
    } else {
        (scaled as u32).saturating_add(1).min(range)
    }
}
