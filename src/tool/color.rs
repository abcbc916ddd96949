use egui::Color32;
use egui::ecolor::Hsva;

use crate::util::time;

const SATURATION: f32 = 0.85;
const VALUE: f32 = 0.8;

/// Picks random marker colors of varying hue at a fixed saturation and value
/// using xorshift64*.
#[derive(Debug, Clone)]
pub struct ColorRoller {
    state: u64,
}

impl Default for ColorRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorRoller {
    /// Seeded from the clock
    pub fn new() -> Self {
        Self::with_seed(time::clock_seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        // A zero state would stay zero forever
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Hue in `[0, 1)`
    pub fn next_hue(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn next_color(&mut self) -> Color32 {
        Hsva::new(self.next_hue(), SATURATION, VALUE, 1.0).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_colors() {
        let mut a = ColorRoller::with_seed(42);
        let mut b = ColorRoller::with_seed(42);
        for _ in 0..8 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_hue_in_unit_range_and_opaque() {
        let mut roller = ColorRoller::with_seed(0);
        for _ in 0..64 {
            let hue = roller.next_hue();
            assert!((0.0..1.0).contains(&hue));
            assert_eq!(roller.next_color().a(), 255);
        }
    }
}
