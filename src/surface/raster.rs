use egui::epaint::text::{FontDefinitions, Fonts};
use egui::{Color32, FontId, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

use super::{PathBuilder, Surface};

const MAX_FONT_TEXTURE_SIDE: usize = 8 * 1024;

/// Software rasterizer backed by an [`RgbaImage`].
///
/// Segments are drawn with round caps and a one pixel anti-aliased edge.
/// Text is rasterized from egui's bundled fonts, which include the emoji
/// fonts stickers rely on. Fonts are only loaded once text is drawn.
pub struct RasterSurface {
    image: RgbaImage,
    path: PathBuilder,
    fonts: Option<Fonts>,
}

impl RasterSurface {
    /// A fully transparent surface of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            path: PathBuilder::default(),
            fonts: None,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn draw_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let half = width / 2.0;
        let reach = half + 1.0;
        let min_x = (from.x.min(to.x) - reach).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0) as u32;
        let max_x = ((from.x.max(to.x) + reach).ceil().max(0.0) as u32).min(self.image.width());
        let max_y = ((from.y.max(to.y) + reach).ceil().max(0.0) as u32).min(self.image.height());

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_segment(center, from, to);
                let coverage = (half + 0.5 - distance).clamp(0.0, 1.0);
                blend_pixel(&mut self.image, x as i64, y as i64, color, coverage);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn clear(&mut self, region: Rect) {
        let region = region.intersect(self.full_rect());
        if !region.is_positive() {
            return;
        }
        for y in region.min.y.floor() as u32..region.max.y.ceil() as u32 {
            for x in region.min.x.floor() as u32..region.max.x.ceil() as u32 {
                if x < self.image.width() && y < self.image.height() {
                    self.image.put_pixel(x, y, Rgba([0, 0, 0, 0]));
                }
            }
        }
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        for subpath in self.path.take() {
            for pair in subpath.windows(2) {
                if pair[0] == pair[1] {
                    continue;
                }
                self.draw_segment(pair[0], pair[1], width, color);
            }
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        if text.is_empty() || font_size <= 0.0 {
            return;
        }
        let fonts = self.fonts.get_or_insert_with(|| {
            Fonts::new(1.0, MAX_FONT_TEXTURE_SIDE, FontDefinitions::default())
        });
        let galley = fonts.layout_no_wrap(text.to_owned(), FontId::monospace(font_size), color);
        // The atlas only holds the glyphs once layout has allocated them
        let atlas = fonts.image();
        let origin = anchor - Vec2::new(0.0, galley.size().y);

        for row in &galley.rows {
            for glyph in &row.glyphs {
                let uv = glyph.uv_rect;
                if uv.is_nothing() {
                    continue;
                }
                let left_top = origin + glyph.pos.to_vec2() + uv.offset;
                let left = left_top.x.round() as i64;
                let top = left_top.y.round() as i64;
                for ty in uv.min[1]..uv.max[1] {
                    for tx in uv.min[0]..uv.max[0] {
                        let index = ty as usize * atlas.size[0] + tx as usize;
                        let coverage = atlas.pixels.get(index).copied().unwrap_or(0.0);
                        let x = left + (tx - uv.min[0]) as i64;
                        let y = top + (ty - uv.min[1]) as i64;
                        blend_pixel(&mut self.image, x, y, color, coverage);
                    }
                }
            }
        }
    }
}

fn distance_to_segment(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    let segment = to - from;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return point.distance(from);
    }
    let t = ((point - from).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(from + segment * t)
}

/// Source-over blend of `color` scaled by `coverage` onto one pixel
fn blend_pixel(image: &mut RgbaImage, x: i64, y: i64, color: Color32, coverage: f32) {
    if coverage <= 0.0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= image.width() || y >= image.height() {
        return;
    }
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let src_a = a as f32 / 255.0 * coverage.min(1.0);
    let dst = image.get_pixel(x, y).0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    let channel = |src: u8, dst: u8| {
        let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    image.put_pixel(
        x,
        y,
        Rgba([
            channel(r, dst[0]),
            channel(g, dst[1]),
            channel(b, dst[2]),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_segment_paints_its_width() {
        let mut surface = RasterSurface::new(32, 32);
        surface.move_to(Pos2::new(4.0, 16.0));
        surface.line_to(Pos2::new(28.0, 16.0));
        surface.stroke(4.0, Color32::RED);

        let image = surface.image();
        assert_eq!(image.get_pixel(16, 15).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(16, 16).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(16, 10).0[3], 0);
        assert_eq!(image.get_pixel(16, 22).0[3], 0);
    }

    #[test]
    fn test_single_point_path_paints_nothing() {
        let mut surface = RasterSurface::new(16, 16);
        surface.move_to(Pos2::new(8.0, 8.0));
        surface.stroke(6.0, Color32::BLACK);

        assert!(surface.image().pixels().all(|pixel| pixel.0[3] == 0));
    }

    #[test]
    fn test_clear_region_resets_pixels() {
        let mut surface = RasterSurface::new(16, 16);
        surface.move_to(Pos2::new(0.0, 8.0));
        surface.line_to(Pos2::new(16.0, 8.0));
        surface.stroke(16.0, Color32::BLUE);
        assert_eq!(surface.image().get_pixel(4, 4).0[3], 255);

        surface.clear(Rect::from_min_size(Pos2::ZERO, Vec2::new(8.0, 16.0)));
        assert_eq!(surface.image().get_pixel(4, 4).0[3], 0);
        assert_eq!(surface.image().get_pixel(12, 4).0[3], 255);
    }

    #[test]
    fn test_distance_to_segment() {
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(10.0, 0.0);
        assert!((distance_to_segment(Pos2::new(5.0, 3.0), from, to) - 3.0).abs() < 1e-5);
        assert!((distance_to_segment(Pos2::new(13.0, 4.0), from, to) - 5.0).abs() < 1e-5);
        assert!((distance_to_segment(Pos2::new(1.0, 1.0), from, from) - 2.0_f32.sqrt()).abs() < 1e-5);
    }
}
