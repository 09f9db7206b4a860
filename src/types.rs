// Core types shared by both demos.

/// The whole window's worth of pixels; what `flip` pushes to the screen.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0xAARRGGBB; minifb ignores the alpha byte
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Cls(): paint every pixel black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Plot one pixel; anything off screen is dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}

/// Destination rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}

/// Off-screen image the effects draw into, later stretched onto the screen.
/// Pixels can only be written through a `PixelView` obtained from `lock`.
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    revision: u64, // bumped on every unlock; presentation sees writes after that
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height], revision: 0 }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed lock/unlock cycles.
    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Read one pixel (row-major). Only callable while no view is alive.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Acquire exclusive write access. The view releases the image when it
    /// is unlocked or dropped, so every exit path releases exactly once.
    pub fn lock(&mut self) -> PixelView<'_> {
        PixelView { image: self }
    }
}

/// Writable window onto a locked `Image`.
pub struct PixelView<'a> {
    image: &'a mut Image,
}

impl PixelView<'_> {
    pub fn width(&self) -> usize {
        self.image.width
    }

    pub fn height(&self) -> usize {
        self.image.height
    }

    /// WritePixel(): store a packed color. Callers stay inside the image.
    #[inline]
    pub fn write(&mut self, x: usize, y: usize, color: u32) {
        debug_assert!(x < self.image.width && y < self.image.height, "write outside image: ({x},{y})");
        let idx = y * self.image.width + x;
        self.image.pixels[idx] = color;
    }

    /// Explicit release; same as letting the view go out of scope.
    pub fn unlock(self) {}
}

impl Drop for PixelView<'_> {
    fn drop(&mut self) {
        self.image.revision += 1;
    }
}

/// Per-frame inputs handed to the effects. Read-only, rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub elapsed_ms: u64,            // MilliSecs() since the host started
    pub pointer: (i32, i32),        // mouse position in display pixels
    pub display: (usize, usize),    // display (window) size in pixels
}

impl FrameContext {
    pub fn seconds(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}
