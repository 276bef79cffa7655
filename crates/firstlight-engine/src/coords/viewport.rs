/// Drawable region of the surface, in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole framebuffer of `width` x `height`.
    #[inline]
    pub const fn from_framebuffer(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// `false` while the window is minimized (zero-sized framebuffer).
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Applies this region to a render pass.
    pub fn apply(self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_viewport(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
            0.0,
            1.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_viewport_starts_at_origin() {
        for (w, h) in [(800, 600), (1, 1), (1920, 1080), (3, 4096)] {
            assert_eq!(Viewport::from_framebuffer(w, h), Viewport::new(0, 0, w, h));
        }
    }

    #[test]
    fn zero_area_is_not_drawable() {
        assert!(!Viewport::from_framebuffer(0, 600).is_drawable());
        assert!(!Viewport::from_framebuffer(800, 0).is_drawable());
        assert!(Viewport::from_framebuffer(800, 600).is_drawable());
    }
}
