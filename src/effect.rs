// The shape both demos share: advance with the frame's inputs, then paint.

use crate::types::{FrameContext, PixelView};

pub trait Effect {
    /// Window title / log name.
    fn name(&self) -> &'static str;

    /// Size of the off-screen image this effect paints, in pixels.
    fn image_size(&self) -> (usize, usize);

    /// Advance internal state for this frame.
    fn update(&mut self, ctx: &FrameContext);

    /// Write every pixel of the locked image.
    fn render(&self, view: &mut PixelView<'_>);
}
