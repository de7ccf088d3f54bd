use image::RgbaImage;
use resvg::tiny_skia::{ColorU8, IntSize, Pixmap, PixmapRef};

/// Decoded, size-capped image stored premultiplied, ready for compositing.
#[derive(Clone)]
pub struct Sprite {
    pixmap: Pixmap,
}

impl Sprite {
    /// Converts straight-alpha RGBA into a premultiplied sprite.
    ///
    /// Returns `None` for zero-sized images.
    pub fn from_rgba(image: RgbaImage) -> Option<Self> {
        let (w, h) = image.dimensions();
        let size = IntSize::from_wh(w, h)?;

        let mut pixmap = Pixmap::new(size.width(), size.height())?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        Some(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub(crate) fn pixmap(&self) -> PixmapRef<'_> {
        self.pixmap.as_ref()
    }
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn premultiplies_translucent_pixels() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 128]));
        let sprite = Sprite::from_rgba(img).expect("sprite");
        let px = sprite.pixmap().pixel(0, 0).expect("pixel");
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (100, 50, 25, 128));
    }

    #[test]
    fn opaque_and_clear_pixels_keep_their_extremes() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 0]));
        let sprite = Sprite::from_rgba(img).expect("sprite");

        let opaque = sprite.pixmap().pixel(0, 0).expect("pixel");
        assert_eq!((opaque.red(), opaque.green(), opaque.blue(), opaque.alpha()), (10, 20, 30, 255));
        let clear = sprite.pixmap().pixel(1, 0).expect("pixel");
        assert_eq!((clear.red(), clear.green(), clear.blue(), clear.alpha()), (0, 0, 0, 0));
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        assert!(Sprite::from_rgba(RgbaImage::new(0, 4)).is_none());
    }
}
