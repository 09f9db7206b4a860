// Packed 0xAARRGGBB helpers used by both demos.

/// Pack four bytes as alpha, red, green, blue (most significant first).
#[inline]
pub fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Clamp an integer channel into 0..=255.
#[inline]
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Split a packed color back into (a, r, g, b).
#[cfg(test)]
#[inline]
pub fn channels(color: u32) -> (u8, u8, u8, u8) {
    ((color >> 24) as u8, (color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Fully opaque color from unclamped integer channels.
#[inline]
pub fn opaque(r: i32, g: i32, b: i32) -> u32 {
    argb(255, clamp_channel(r), clamp_channel(g), clamp_channel(b))
}
