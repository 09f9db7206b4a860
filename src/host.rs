// What the frame loop needs from whatever owns the window, clock and mouse.
// `draw::Drawer` is the real one; `headless::HeadlessHost` runs without a window.

use crate::error::Error;
use crate::types::{Image, Rect};

pub trait Host {
    /// Milliseconds since the host started.
    fn elapsed_millis(&self) -> u64;

    /// Pointer position in display pixels.
    fn pointer(&self) -> (i32, i32);

    /// The window was closed / the app was asked to stop.
    fn termination_requested(&self) -> bool;

    /// The quit key was hit this frame.
    fn quit_pressed(&self) -> bool;

    /// Cls(): clear the presentation target.
    fn clear(&mut self);

    /// Stretch `image` onto `dest` of the presentation target.
    fn draw_image_scaled(&mut self, image: &Image, dest: Rect);

    /// Optional frame statistics overlay.
    fn draw_frame_stats(&mut self);

    /// Flip(): show the finished frame. Blocks until it is on screen.
    fn flip(&mut self) -> Result<(), Error>;
}
