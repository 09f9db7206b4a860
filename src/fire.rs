// "Fire": a persistent intensity field that smears upward and fades,
// fed by a soft disc of heat under the mouse, shown through a color ramp.
//
// Per frame:
// 1) diffuse: fixed 5-tap kernel, in place, x-major (see `diffuse`)
// 2) inject:  add up to 0.1 per frame inside radius R of the pointer, capped at 1
// 3) render:  ramp[floor(F * (len-1))]

use crate::effect::Effect;
use crate::ramp::ColorRamp;
use crate::types::{FrameContext, PixelView};
use log::trace;

pub const DEFAULT_FIELD_SIZE: (usize, usize) = (560, 420);
pub const DEFAULT_DISPLAY_SIZE: (usize, usize) = (1024, 768);
pub const DEFAULT_RADIUS: i32 = 80;

// (dx, dy, weight) taps added to 5 * F[x][y]; the sum is divided by DECAY.
// Sums are rounded back to f32 after every tap.
const TAPS: [(i64, i64, f64); 4] = [(1, 1, 0.5), (-1, 1, 0.75), (-2, 2, 0.5), (-3, 3, 0.25)];
const CENTER_WEIGHT: f32 = 5.0;
const DECAY: f64 = 7.1;

/// Fixed-size grid of intensities in [0,1], zero at start.
pub struct ScalarField {
    pub width: usize,
    pub height: usize,
    values: Vec<f32>, // row-major: y * width + x
}

impl ScalarField {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, values: vec![0.0; width * height] }
    }

    /// Neighbor read: anything off the grid is 0.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> f32 {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.values[y as usize * self.width + x as usize]
        } else {
            0.0
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.values[y * self.width + x] = v;
    }

    #[cfg(test)]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Blur/decay pass. Runs in place with x as the outer loop, so columns to
/// the left already hold this frame's values when they are read.
pub fn diffuse(field: &mut ScalarField) {
    for x in 0..field.width {
        for y in 0..field.height {
            let (xi, yi) = (x as i64, y as i64);
            let mut v = field.get(xi, yi) * CENTER_WEIGHT;
            for &(dx, dy, w) in &TAPS {
                v = (v as f64 + field.get(xi + dx, yi + dy) as f64 * w) as f32;
            }
            field.set(x, y, (v as f64 / DECAY) as f32);
        }
    }
}

/// Map a display-pixel pointer into field coordinates.
#[inline]
pub fn to_field_coords(pointer: (i32, i32), display: (usize, usize), field: (usize, usize)) -> (f32, f32) {
    (
        pointer.0 as f32 * field.0 as f32 / display.0 as f32,
        pointer.1 as f32 * field.1 as f32 / display.1 as f32,
    )
}

/// Add heat in a disc of `radius` around `center` (field coordinates).
/// Each cell gains (1 - dist/R) / 10, never going above 1.
pub fn inject(field: &mut ScalarField, center: (f32, f32), radius: i32) {
    let (cx, cy) = center;
    let r = radius as i64;
    let max_x = field.width as i64 - 1;
    let max_y = field.height as i64 - 1;

    // bounding square, clamped to the grid; may end up empty if the pointer is far off
    let left = (cx as i64 - r).max(0);
    let right = (cx as i64 + r).min(max_x);
    let top = (cy as i64 - r).max(0);
    let bottom = (cy as i64 + r).min(max_y);

    for x in left..=right {
        for y in top..=bottom {
            let dx = x as f64 - cx as f64;
            let dy = y as f64 - cy as f64;
            let dist = (1.0 - (dx * dx + dy * dy).sqrt() / radius as f64) as f32;
            if dist >= 0.0 {
                let (ux, uy) = (x as usize, y as usize);
                let v = field.get(x, y) + dist / 10.0;
                field.set(ux, uy, v.min(1.0));
            }
        }
    }
}

pub struct FireSim {
    field: ScalarField,
    ramp: ColorRamp,
    radius: i32,
}

impl FireSim {
    pub fn new(width: usize, height: usize, radius: i32, ramp_len: usize) -> Self {
        Self {
            field: ScalarField::new(width, height),
            ramp: ColorRamp::new(ramp_len),
            radius,
        }
    }

    #[cfg(test)]
    pub fn field(&self) -> &ScalarField {
        &self.field
    }
}

impl Effect for FireSim {
    fn name(&self) -> &'static str {
        "Fire"
    }

    fn image_size(&self) -> (usize, usize) {
        (self.field.width, self.field.height)
    }

    fn update(&mut self, ctx: &FrameContext) {
        diffuse(&mut self.field);
        let center = to_field_coords(ctx.pointer, ctx.display, self.image_size());
        trace!("inject at field ({:.1}, {:.1})", center.0, center.1);
        inject(&mut self.field, center, self.radius);
    }

    fn render(&self, view: &mut PixelView<'_>) {
        for x in 0..self.field.width {
            for y in 0..self.field.height {
                let v = self.field.get(x as i64, y as i64);
                view.write(x, y, self.ramp.lookup(v));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::DEFAULT_RAMP_LEN;
    use crate::types::Image;

    fn fresh() -> ScalarField {
        ScalarField::new(DEFAULT_FIELD_SIZE.0, DEFAULT_FIELD_SIZE.1)
    }

    #[test]
    fn off_grid_reads_are_zero() {
        let mut f = ScalarField::new(4, 3);
        for x in 0..4 {
            for y in 0..3 {
                f.set(x, y, 0.5);
            }
        }
        assert_eq!(f.get(-1, 0), 0.0);
        assert_eq!(f.get(0, -1), 0.0);
        assert_eq!(f.get(4, 0), 0.0);
        assert_eq!(f.get(0, 3), 0.0);
        assert_eq!(f.get(-3, 7), 0.0);
        assert_eq!(f.get(3, 2), 0.5);
    }

    #[test]
    fn diffusing_nothing_stays_nothing() {
        let mut f = ScalarField::new(40, 30);
        for _ in 0..10 {
            diffuse(&mut f);
        }
        assert!(f.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_cell_decays_and_spreads_upward() {
        let mut f = ScalarField::new(10, 10);
        f.set(5, 5, 1.0);
        diffuse(&mut f);

        // the hot cell itself: 5 / 7.1
        assert!((f.get(5, 5) - 5.0 / 7.1).abs() < 1e-6);
        // (4,4) reads (5,5) through the (+1,+1) tap
        assert!(f.get(4, 4) > 0.0);
        // (6,4) reads (5,5) through the (-1,+1) tap
        assert!(f.get(6, 4) > 0.0);
        // nothing reads downward
        assert_eq!(f.get(5, 6), 0.0);
        assert_eq!(f.get(5, 9), 0.0);
    }

    #[test]
    fn left_columns_are_read_after_their_update() {
        // (1,0) reads (0,1) via the (-1,+1) tap; (0,1) is already diffused by then
        let mut f = ScalarField::new(3, 3);
        f.set(0, 1, 1.0);
        diffuse(&mut f);
        let updated = 5.0 / 7.1;
        assert!((f.get(0, 1) - updated).abs() < 1e-6);
        assert!((f.get(1, 0) - updated * 0.75 / 7.1).abs() < 1e-6);
    }

    #[test]
    fn every_tap_weight_is_exact() {
        // same rounding as `diffuse`: f64 accumulate, back to f32 per tap
        let tap = |acc: f32, v: f32, w: f64| (acc as f64 + v as f64 * w) as f32;
        let done = |v: f32| (v as f64 / 7.1) as f32;

        let mut f = ScalarField::new(10, 10);
        f.set(5, 5, 1.0);
        diffuse(&mut f);

        let hot = done(5.0);
        assert_eq!(f.get(5, 5), hot);

        // (4,4) sees (5,5) through (+1,+1) before (5,5) is updated
        assert_eq!(f.get(4, 4), done(tap(0.0, 1.0, 0.5)));

        // (6,4) sees updated (5,5) through (-1,+1)
        let c64 = done(tap(0.0, hot, 0.75));
        assert_eq!(f.get(6, 4), c64);

        // (7,3): (-1,+1) -> (6,4), (-2,+2) -> (5,5)
        let c73 = done(tap(tap(0.0, c64, 0.75), hot, 0.5));
        assert_eq!(f.get(7, 3), c73);

        // (8,2): (-1,+1) -> (7,3), (-2,+2) -> (6,4), (-3,+3) -> (5,5)
        let c82 = done(tap(tap(tap(0.0, c73, 0.75), c64, 0.5), hot, 0.25));
        assert_eq!(f.get(8, 2), c82);
    }

    #[test]
    fn pointer_maps_from_display_to_field() {
        let c = to_field_coords((512, 384), DEFAULT_DISPLAY_SIZE, DEFAULT_FIELD_SIZE);
        assert_eq!(c, (280.0, 210.0));
        let c = to_field_coords((0, 0), DEFAULT_DISPLAY_SIZE, DEFAULT_FIELD_SIZE);
        assert_eq!(c, (0.0, 0.0));
    }

    #[test]
    fn one_injection_at_center_heats_only_the_disc() {
        let mut f = fresh();
        inject(&mut f, (280.0, 210.0), DEFAULT_RADIUS);

        assert!((f.get(280, 210) - 0.1).abs() < 1e-6);
        assert!(f.get(280 + 79, 210) > 0.0);
        assert!(f.get(280, 210 - 79) > 0.0);
        assert_eq!(f.get(280 + 80, 210), 0.0); // exactly on the rim adds 0
        assert_eq!(f.get(280 + 60, 210 + 60), 0.0); // inside the square, outside the disc
        assert_eq!(f.get(280 + 81, 210), 0.0);
        assert_eq!(f.get(0, 0), 0.0);

        for y in 0..f.height {
            for x in 0..f.width {
                let v = f.get(x as i64, y as i64);
                assert!((0.0..=0.1 + 1e-6).contains(&v));
                let (dx, dy) = (x as i64 - 280, y as i64 - 210);
                let d2 = dx * dx + dy * dy;
                if d2 > 80 * 80 {
                    assert_eq!(v, 0.0, "({x},{y}) is outside the disc");
                } else if (d2 as f32).sqrt() < 79.5 {
                    assert!(v > 0.0, "({x},{y}) should be heated");
                }
            }
        }
    }

    #[test]
    fn injection_near_the_corner_stays_on_the_grid() {
        let mut f = ScalarField::new(50, 40);
        inject(&mut f, (2.0, 1.0), DEFAULT_RADIUS);
        assert!(f.get(2, 1) > 0.0);

        let mut far = ScalarField::new(50, 40);
        inject(&mut far, (5000.0, -900.0), DEFAULT_RADIUS);
        assert!(far.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn field_stays_in_unit_range_under_heavy_feeding() {
        let mut sim = FireSim::new(120, 90, 30, DEFAULT_RAMP_LEN);
        let ctx = FrameContext { elapsed_ms: 0, pointer: (64, 48), display: (128, 96) };
        for _ in 0..300 {
            sim.update(&ctx);
            assert!(sim.field().values().iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
        // the center has been saturated at some point and is hot
        assert!(sim.field().get(60, 45) > 0.5);
    }

    #[test]
    fn render_maps_field_through_the_ramp() {
        let mut sim = FireSim::new(20, 15, 4, DEFAULT_RAMP_LEN);
        sim.update(&FrameContext { elapsed_ms: 0, pointer: (10, 7), display: (20, 15) });

        let mut img = Image::new(20, 15);
        sim.render(&mut img.lock());

        let ramp = ColorRamp::new(DEFAULT_RAMP_LEN);
        for y in 0..15 {
            for x in 0..20 {
                let v = sim.field().get(x as i64, y as i64);
                assert_eq!(img.pixel(x, y), ramp.lookup(v));
            }
        }
        assert_eq!(img.pixel(0, 0), 0xFF00_0000);
        assert_ne!(img.pixel(10, 7), 0xFF00_0000);
    }
}
