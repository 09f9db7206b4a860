// "Circles": concentric color waves rolling out of the image center.
// Every pixel is a pure function of (x, y, size, time); nothing carries over
// between frames except the clock the host hands us.

use crate::color::opaque;
use crate::effect::Effect;
use crate::types::{FrameContext, PixelView};

pub const DEFAULT_IMAGE_SIZE: (usize, usize) = (320, 240);
pub const DEFAULT_DISPLAY_SIZE: (usize, usize) = (1024, 720);

#[inline]
fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (x, y) = (x2 - x1, y2 - y1);
    (x * x + y * y).sqrt()
}

/// Color of pixel (x, y) in a `width`×`height` image at `t` seconds.
pub fn wave_color(x: usize, y: usize, width: usize, height: usize, t: f64) -> u32 {
    let rel_x = x as f64 / width as f64;
    let rel_y = y as f64 / height as f64;
    let value = distance(rel_x, rel_y, 0.5, 0.5) * 3.0 - t;

    // `as i32` truncates toward zero; the extra light is added after truncation.
    let light = (rel_y * 100.0 * (value / 1.5).sin().abs()) as i32;
    let red = (rel_x * 255.0 * value.cos().abs()) as i32 + light;
    let green = ((1.0 - rel_y) * 255.0 * value.sin().abs()) as i32 + light;
    let blue = (rel_y * 255.0 * (value / 3.0).cos().abs()) as i32 + light;

    opaque(red, green, blue)
}

pub struct RadialWaves {
    width: usize,
    height: usize,
    time: f64, // seconds, from the last update
}

impl RadialWaves {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, time: 0.0 }
    }
}

impl Effect for RadialWaves {
    fn name(&self) -> &'static str {
        "Circles"
    }

    fn image_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time = ctx.seconds();
    }

    fn render(&self, view: &mut PixelView<'_>) {
        let (w, h) = (view.width(), view.height());
        for x in 0..w {
            for y in 0..h {
                view.write(x, y, wave_color(x, y, w, h, self.time));
            }
        }
    }
}
