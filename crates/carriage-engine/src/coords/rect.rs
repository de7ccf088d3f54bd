use super::Viewport;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Largest `content_w x content_h`-proportioned rectangle that fits inside
    /// `outer`, centred (letterbox / pillarbox).
    ///
    /// Degenerate inputs yield an empty rectangle at the centre of `outer`.
    pub fn fit_centered(content_w: f32, content_h: f32, outer: Viewport) -> Rect {
        let cx = outer.width * 0.5;
        let cy = outer.height * 0.5;
        if !(content_w > 0.0 && content_h > 0.0) || !outer.is_valid() {
            return Rect::new(cx, cy, 0.0, 0.0);
        }

        let scale = (outer.width / content_w).min(outer.height / content_h);
        let w = content_w * scale;
        let h = content_h * scale;
        Rect::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }
}
