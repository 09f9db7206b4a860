// Window + software drawing utilities.
// Provided here:
// 1) `Drawer`: the minifb window acting as the frame loop's host.
// 2) `blit_scaled`: stretch the effect image over the screen (nearest neighbor).
// 3) A tiny 5x7 bitmap font + FPS counter for the stats overlay.

use crate::error::Error;
use crate::host::Host;
use crate::types::{FrameBuffer, Image, Rect};
use log::debug;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use std::time::Instant;

pub struct Drawer {
    window: Window,      // the on-screen window you see
    screen: FrameBuffer, // what `flip` pushes to the window
    started: Instant,
    pointer: (i32, i32), // last known mouse position (stays put when it leaves the window)
    stats: FrameStats,
}

impl Drawer {
    /// Create a window of the display size.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            screen: FrameBuffer::new(width, height),
            started: Instant::now(),
            pointer: (0, 0),
            stats: FrameStats::default(),
        })
    }
}

impl Host for Drawer {
    fn elapsed_millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    /// True once the user closes the window.
    fn termination_requested(&self) -> bool {
        !self.window.is_open()
    }

    /// ESC, counted once per press.
    fn quit_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
    }

    fn clear(&mut self) {
        self.screen.clear();
    }

    fn draw_image_scaled(&mut self, image: &Image, dest: Rect) {
        blit_scaled(image, &mut self.screen, dest);
    }

    fn draw_frame_stats(&mut self) {
        let now = self.elapsed_millis();
        self.stats.tick(now);
        let text = self.stats.label();
        draw_text_5x7(&mut self.screen, 8, 8, &text, 0x00_FF_FF_FF);
    }

    /// Push the pixels for this frame to the screen; input is polled here too.
    fn flip(&mut self) -> Result<(), Error> {
        self.window
            .update_with_buffer(&self.screen.pixels, self.screen.width, self.screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            self.pointer = (x as i32, y as i32);
        }
        Ok(())
    }
}

/// Stretch `image` over `dest` on `fb`, nearest neighbor, clipped to `fb`.
pub fn blit_scaled(image: &Image, fb: &mut FrameBuffer, dest: Rect) {
    if dest.width == 0 || dest.height == 0 || image.width() == 0 || image.height() == 0 {
        return;
    }
    for dy in 0..dest.height {
        let sy = dest.y as i64 + dy as i64;
        if sy < 0 || sy >= fb.height as i64 {
            continue;
        }
        let src_y = dy * image.height() / dest.height;
        for dx in 0..dest.width {
            let sx = dest.x as i64 + dx as i64;
            if sx < 0 || sx >= fb.width as i64 {
                continue;
            }
            let src_x = dx * image.width() / dest.width;
            fb.pixels[sy as usize * fb.width + sx as usize] = image.pixel(src_x, src_y);
        }
    }
}

/// FPS, recomputed once per second of host time.
#[derive(Default)]
pub struct FrameStats {
    frames: u64,             // total frames seen
    window_start_ms: u64,    // start of the current one-second window
    frames_in_window: u32,
    fps: f32,
}

impl FrameStats {
    pub fn tick(&mut self, now_ms: u64) {
        self.frames += 1;
        self.frames_in_window += 1;
        let span = now_ms.saturating_sub(self.window_start_ms);
        if span >= 1000 {
            self.fps = self.frames_in_window as f32 * 1000.0 / span as f32;
            debug!("FPS: {:.1} ({} frames)", self.fps, self.frames);
            self.frames_in_window = 0;
            self.window_start_ms = now_ms;
        }
    }

    #[cfg(test)]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn label(&self) -> String {
        format!("FPS: {:.1} | FRAME {}", self.fps, self.frames)
    }
}

/* ---------- 5x7 bitmap font (ASCII subset we need for "FPS: 00.0 | FRAME 0") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // letters for FPS / FRAME
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // shadow first, then the glyph on top
        for (offset, c) in [(1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        fb.put(x + rx as i32 + offset, y + ry as i32 + offset, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}
