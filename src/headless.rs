// Window-less host: a fake clock that advances one frame per flip, a pointer
// that never moves, and a stop request after a fixed number of frames.
// Used for `--headless` runs and for grabbing PNG snapshots.

use crate::draw::{FrameStats, blit_scaled, draw_text_5x7};
use crate::error::Error;
use crate::host::Host;
use crate::types::{FrameBuffer, Image, Rect};

pub struct HeadlessHost {
    screen: FrameBuffer,
    frame_ms: u64,
    clock_ms: u64,
    pointer: (i32, i32),
    frames_left: u64,
    stats: FrameStats,
}

impl HeadlessHost {
    pub fn new(display: (usize, usize), frames: u64, frame_ms: u64, pointer: (i32, i32)) -> Self {
        Self {
            screen: FrameBuffer::new(display.0, display.1),
            frame_ms,
            clock_ms: 0,
            pointer,
            frames_left: frames,
            stats: FrameStats::default(),
        }
    }

    /// The last flipped frame.
    pub fn screen(&self) -> &FrameBuffer {
        &self.screen
    }
}

impl Host for HeadlessHost {
    fn elapsed_millis(&self) -> u64 {
        self.clock_ms
    }

    fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    fn termination_requested(&self) -> bool {
        self.frames_left == 0
    }

    fn quit_pressed(&self) -> bool {
        false
    }

    fn clear(&mut self) {
        self.screen.clear();
    }

    fn draw_image_scaled(&mut self, image: &Image, dest: Rect) {
        blit_scaled(image, &mut self.screen, dest);
    }

    fn draw_frame_stats(&mut self) {
        self.stats.tick(self.clock_ms);
        let text = self.stats.label();
        draw_text_5x7(&mut self.screen, 8, 8, &text, 0x00_FF_FF_FF);
    }

    fn flip(&mut self) -> Result<(), Error> {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.clock_ms += self.frame_ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::FireSim;
    use crate::frame_loop::{FrameLoop, LoopState};
    use crate::ramp::DEFAULT_RAMP_LEN;
    use crate::waves::{RadialWaves, wave_color};
    use test_log::test;

    #[test]
    fn runs_exactly_the_requested_frames() {
        let mut host = HeadlessHost::new((64, 48), 5, 16, (32, 24));
        let mut fl = FrameLoop::new(RadialWaves::new(16, 12), (64, 48), false);
        fl.run(&mut host).unwrap();

        assert_eq!(fl.state(), LoopState::Terminated);
        assert_eq!(fl.frames(), 5);
        assert_eq!(host.elapsed_millis(), 80);
    }

    #[test]
    fn zero_frames_never_draws() {
        let mut host = HeadlessHost::new((8, 8), 0, 16, (0, 0));
        let mut fl = FrameLoop::new(RadialWaves::new(4, 4), (8, 8), true);
        fl.run(&mut host).unwrap();
        assert_eq!(fl.frames(), 0);
        assert!(host.screen().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn screen_holds_the_scaled_last_frame() {
        // one frame at t = 0: every 4x4 screen block is one image pixel
        let mut host = HeadlessHost::new((64, 48), 1, 16, (0, 0));
        let mut fl = FrameLoop::new(RadialWaves::new(16, 12), (64, 48), false);
        fl.run(&mut host).unwrap();

        let screen = host.screen();
        assert_eq!(screen.pixels[(4 * 5) * 64 + 4 * 7 + 3], wave_color(7, 5, 16, 12, 0.0));
    }

    #[test]
    fn fire_grows_around_a_fixed_pointer() {
        let mut host = HeadlessHost::new((200, 150), 20, 16, (100, 75));
        let mut fl = FrameLoop::new(FireSim::new(100, 75, 10, DEFAULT_RAMP_LEN), (200, 150), true);
        fl.run(&mut host).unwrap();

        let field = fl.effect().field();
        assert!(field.get(50, 37) > 0.3);
        assert_eq!(field.get(0, 74), 0.0);
    }
}
