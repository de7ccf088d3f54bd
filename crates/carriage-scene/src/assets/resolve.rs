use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::{AssetSource, Sprite};

/// Horse frames wider than this are scaled down to it.
pub const HORSE_MAX_WIDTH: u32 = 260;
/// A carriage image wider than this is scaled down to it.
pub const CARRIAGE_MAX_WIDTH: u32 = 320;

/// Sprite set for one session. Rebuilt only when new inputs arrive.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAssets {
    horse_frames: Vec<Sprite>,
    carriage: Option<Sprite>,
}

impl ResolvedAssets {
    /// Assets that select vector fallback drawing for everything.
    pub fn fallback() -> Self {
        Self::default()
    }

    #[inline]
    pub fn horse_frames(&self) -> &[Sprite] {
        &self.horse_frames
    }

    #[inline]
    pub fn carriage(&self) -> Option<&Sprite> {
        self.carriage.as_ref()
    }

    #[inline]
    pub fn use_fallback_horse(&self) -> bool {
        self.horse_frames.is_empty()
    }

    #[inline]
    pub fn use_fallback_carriage(&self) -> bool {
        self.carriage.is_none()
    }

    /// Frame for a free-running animation index, or `None` without sprites.
    pub fn horse_frame(&self, anim_index: u64) -> Option<&Sprite> {
        let n = self.horse_frames.len() as u64;
        if n == 0 {
            return None;
        }
        self.horse_frames.get((anim_index % n) as usize)
    }
}

/// Decodes and size-caps every supplied image.
///
/// Horse frames keep their input order. Undecodable inputs are skipped with a
/// warning; nothing here fails.
pub fn resolve(horse: &[AssetSource], carriage: Option<&AssetSource>) -> ResolvedAssets {
    let horse_frames: Vec<Sprite> = horse
        .iter()
        .filter_map(|src| load_sprite(src, HORSE_MAX_WIDTH))
        .collect();

    let carriage = carriage.and_then(|src| load_sprite(src, CARRIAGE_MAX_WIDTH));

    log::info!(
        "assets resolved: {}/{} horse frame(s), carriage {}",
        horse_frames.len(),
        horse.len(),
        if carriage.is_some() { "sprite" } else { "fallback" },
    );

    ResolvedAssets { horse_frames, carriage }
}

/// Downscales `image` to `max_width` keeping its aspect ratio.
///
/// Target size is `floor(w * ratio) x floor(h * ratio)` with each side at
/// least one pixel. Images already within the cap are returned untouched.
pub fn fit_width(image: RgbaImage, max_width: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w <= max_width || max_width == 0 {
        return image;
    }

    let ratio = max_width as f64 / w as f64;
    let nw = ((w as f64 * ratio) as u32).max(1);
    let nh = ((h as f64 * ratio) as u32).max(1);

    log::debug!("downscaling {w}x{h} -> {nw}x{nh}");
    imageops::resize(&image, nw, nh, FilterType::Lanczos3)
}

fn load_sprite(src: &AssetSource, max_width: u32) -> Option<Sprite> {
    let image = match src.decode() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("{e}; skipping");
            return None;
        }
    };

    let sprite = Sprite::from_rgba(fit_width(image, max_width));
    if sprite.is_none() {
        log::warn!("asset {} decoded to an empty image; skipping", src.name());
    }
    sprite
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba};

    use super::*;

    fn png(name: &str, w: u32, h: u32) -> AssetSource {
        let img = RgbaImage::from_pixel(w, h, Rgba([120, 80, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).expect("png encode");
        AssetSource::new(name, out.into_inner())
    }

    fn junk(name: &str) -> AssetSource {
        AssetSource::new(name, vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3])
    }

    // ── fallback selection ────────────────────────────────────────────────

    #[test]
    fn no_inputs_select_both_fallbacks() {
        let a = resolve(&[], None);
        assert!(a.use_fallback_horse());
        assert!(a.use_fallback_carriage());
        assert!(a.horse_frame(3).is_none());
    }

    #[test]
    fn only_invalid_horse_files_select_fallback() {
        let a = resolve(&[junk("a.png"), junk("b.webp")], Some(&junk("c.png")));
        assert!(a.use_fallback_horse());
        assert!(a.use_fallback_carriage());
    }

    #[test]
    fn bad_file_does_not_abort_the_batch() {
        let a = resolve(&[png("1.png", 40, 30), junk("2.png"), png("3.png", 50, 30)], None);
        assert_eq!(a.horse_frames().len(), 2);
        assert_eq!(a.horse_frames()[0].width(), 40);
        assert_eq!(a.horse_frames()[1].width(), 50);
        assert!(!a.use_fallback_horse());
    }

    #[test]
    fn horse_frame_index_wraps_by_frame_count() {
        let a = resolve(&[png("1.png", 10, 10), png("2.png", 20, 10), png("3.png", 30, 10)], None);
        assert_eq!(a.horse_frame(0).map(Sprite::width), Some(10));
        assert_eq!(a.horse_frame(4).map(Sprite::width), Some(20));
        assert_eq!(a.horse_frame(8).map(Sprite::width), Some(30));
    }

    // ── width cap ─────────────────────────────────────────────────────────

    #[test]
    fn wide_horse_frame_is_capped_with_aspect_ratio() {
        let a = resolve(&[png("wide.png", 500, 300)], None);
        let f = &a.horse_frames()[0];
        assert!(f.width() <= HORSE_MAX_WIDTH);
        assert_eq!((f.width(), f.height()), (260, 156));
        let src_ratio = 500.0 / 300.0;
        let out_ratio = f.width() as f64 / f.height() as f64;
        assert!((src_ratio - out_ratio).abs() < 0.02);
    }

    #[test]
    fn wide_carriage_is_capped_to_its_own_limit() {
        let a = resolve(&[], Some(&png("cart.png", 640, 200)));
        let c = a.carriage().expect("carriage");
        assert_eq!((c.width(), c.height()), (320, 100));
        assert!(!a.use_fallback_carriage());
    }

    #[test]
    fn images_within_cap_pass_through() {
        let a = resolve(&[png("exact.png", 260, 90)], Some(&png("small.png", 100, 70)));
        assert_eq!((a.horse_frames()[0].width(), a.horse_frames()[0].height()), (260, 90));
        let c = a.carriage().expect("carriage");
        assert_eq!((c.width(), c.height()), (100, 70));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel_height() {
        let img = RgbaImage::new(2000, 1);
        let out = fit_width(img, 260);
        assert_eq!(out.dimensions(), (260, 1));
    }
}
