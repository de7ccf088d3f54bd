//! CPU raster canvas.
//!
//! Thin layer over `tiny_skia` (re-exported by `resvg`) exposing the handful
//! of anti-aliased primitives the scene needs. Coordinates are canvas pixels,
//! top-left origin, +Y down. Degenerate shapes (zero or negative extent) are
//! skipped silently.

use resvg::tiny_skia::{
    FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, PixmapRef, Rect, Stroke, Transform,
};

/// Opaque sRGB colour as straight 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    fn paint(self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.0, self.1, self.2, 255);
        paint.anti_alias = true;
        paint
    }
}

// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_75;

/// Reusable drawing surface of fixed size.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Returns `None` for a zero-sized or unrepresentably large canvas.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Floods the whole canvas with an opaque colour.
    pub fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(resvg::tiny_skia::Color::from_rgba8(color.0, color.1, color.2, 255));
    }

    /// Filled axis-aligned rectangle given by its left/top/right/bottom edges.
    pub fn fill_rect(&mut self, l: f32, t: f32, r: f32, b: f32, color: Rgb) {
        let Some(rect) = Rect::from_ltrb(l, t, r, b) else { return };
        self.pixmap
            .fill_rect(rect, &color.paint(), Transform::identity(), None);
    }

    /// Filled ellipse inscribed in the given bounding box.
    pub fn fill_ellipse(&mut self, l: f32, t: f32, r: f32, b: f32, color: Rgb) {
        let Some(path) = Rect::from_ltrb(l, t, r, b).and_then(PathBuilder::from_oval) else {
            return;
        };
        self.fill(&path, color);
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else { return };
        self.fill(&path, color);
    }

    /// Circle outline; the stroke is centred on `radius`.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, width: f32, color: Rgb) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else { return };
        self.stroke(&path, width, color);
    }

    /// Straight segment with butt caps.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        let Some(path) = pb.finish() else { return };
        self.stroke(&path, width, color);
    }

    /// Filled rectangle with circular corners. The radius is clamped to half
    /// the shorter side.
    pub fn fill_rounded_rect(&mut self, l: f32, t: f32, r: f32, b: f32, radius: f32, color: Rgb) {
        if r <= l || b <= t {
            return;
        }
        let rad = radius.max(0.0).min((r - l) * 0.5).min((b - t) * 0.5);
        if rad == 0.0 {
            self.fill_rect(l, t, r, b, color);
            return;
        }
        let k = rad * KAPPA;

        let mut pb = PathBuilder::new();
        pb.move_to(l + rad, t);
        pb.line_to(r - rad, t);
        pb.cubic_to(r - rad + k, t, r, t + rad - k, r, t + rad);
        pb.line_to(r, b - rad);
        pb.cubic_to(r, b - rad + k, r - rad + k, b, r - rad, b);
        pb.line_to(l + rad, b);
        pb.cubic_to(l + rad - k, b, l, b - rad + k, l, b - rad);
        pb.line_to(l, t + rad);
        pb.cubic_to(l, t + rad - k, l + rad - k, t, l + rad, t);
        pb.close();

        let Some(path) = pb.finish() else { return };
        self.fill(&path, color);
    }

    /// Source-over composites a premultiplied image with its top-left at `(x, y)`.
    /// Parts falling outside the canvas are clipped.
    pub fn composite(&mut self, image: PixmapRef<'_>, x: i32, y: i32) {
        self.pixmap.draw_pixmap(
            x,
            y,
            image,
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Returns the pixel at `(x, y)` as RGBA (premultiplied; equal to straight
    /// RGBA wherever the canvas is opaque).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Raw RGBA bytes, row-major, `width * 4` bytes per row.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    fn fill(&mut self, path: &Path, color: Rgb) {
        self.pixmap.fill_path(
            path,
            &color.paint(),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &Path, width: f32, color: Rgb) {
        let stroke = Stroke { width, ..Stroke::default() };
        self.pixmap
            .stroke_path(path, &color.paint(), &stroke, Transform::identity(), None);
    }
}
