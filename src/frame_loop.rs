// One frame at a time: poll for quit, compute, lock/write/unlock, present.
// The host calls `step` once per tick (or `run` to loop until quit).

use crate::effect::Effect;
use crate::error::Error;
use crate::host::Host;
use crate::types::{FrameContext, Image, Rect};
use log::{info, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct FrameLoop<E: Effect> {
    effect: E,
    image: Image,
    display: (usize, usize),
    show_stats: bool,
    state: LoopState,
    frames: u64,
}

impl<E: Effect> FrameLoop<E> {
    /// CreateImage() sized by the effect; presented over the whole display.
    pub fn new(effect: E, display: (usize, usize), show_stats: bool) -> Self {
        let (w, h) = effect.image_size();
        Self {
            effect,
            image: Image::new(w, h),
            display,
            show_stats,
            state: LoopState::Running,
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames fully drawn and flipped so far.
    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn image(&self) -> &Image {
        &self.image
    }

    #[cfg(test)]
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Run one tick. Termination is only checked here, before a frame
    /// starts; a frame that has started always gets flipped.
    pub fn step(&mut self, host: &mut dyn Host) -> Result<LoopState, Error> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }
        if host.quit_pressed() || host.termination_requested() {
            info!("{}: terminated after {} frames", self.effect.name(), self.frames);
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        host.clear();

        let ctx = FrameContext {
            elapsed_ms: host.elapsed_millis(),
            pointer: host.pointer(),
            display: self.display,
        };
        self.effect.update(&ctx);

        {
            let mut view = self.image.lock();
            self.effect.render(&mut view);
            view.unlock();
        }

        let dest = Rect { x: 0, y: 0, width: self.display.0, height: self.display.1 };
        host.draw_image_scaled(&self.image, dest);
        if self.show_stats {
            host.draw_frame_stats();
        }
        host.flip()?;

        self.frames += 1;
        trace!("frame {} done at {} ms", self.frames, ctx.elapsed_ms);
        Ok(self.state)
    }

    /// Loop until the host asks us to stop.
    pub fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        info!(
            "{}: image {}x{} -> display {}x{}",
            self.effect.name(),
            self.image.width(),
            self.image.height(),
            self.display.0,
            self.display.1
        );
        while self.step(host)? == LoopState::Running {}
        Ok(())
    }
}
