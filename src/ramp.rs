// Precomputed intensity -> color table for the fire.
// Black at 0, through red and yellow, to white at 1.

use crate::color::opaque;

pub const DEFAULT_RAMP_LEN: usize = 768;

pub struct ColorRamp {
    // index = floor(intensity * (len - 1))
    colors: Vec<u32>,
}

impl ColorRamp {
    /// Build the table once at startup. `len` must be at least 2.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 2);
        let last = (len - 1) as f32;
        let colors = (0..len)
            .map(|i| {
                let v = (i as f32 / last) as f64;
                let r = (v.min(1.0 / 3.0) * 3.0 * 255.0) as i32;
                let g = ((v.min(1.65 / 3.0) - 0.65 / 3.0) * 3.0 * 255.0) as i32;
                let b = ((v.min(1.0) - 2.0 / 3.0) * 3.0 * 255.0) as i32;
                opaque(r, g, b)
            })
            .collect();
        Self { colors }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[cfg(test)]
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.colors[index.min(self.colors.len() - 1)]
    }

    /// Map an intensity in [0,1] to its color; anything outside is clamped.
    #[inline]
    pub fn lookup(&self, intensity: f32) -> u32 {
        let last = self.colors.len() - 1;
        let idx = (intensity * last as f32).floor();
        let idx = if idx.is_nan() { 0 } else { (idx.max(0.0) as usize).min(last) };
        self.colors[idx]
    }
}
