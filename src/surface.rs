use egui::{Color32, Pos2, Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

/// Pixels within this distance of a path are always painted, so a one pixel
/// brush still covers the pixel containing every point it passes through.
const MIN_HALF_WIDTH: f32 = 0.75;

/// Saved copy of the full pixel buffer
#[derive(Clone)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

/// RGBA raster the controller draws into.
///
/// Coordinates are surface-local: pixel `(x, y)` covers the square from
/// `(x, y)` to `(x + 1, y + 1)` and is painted when its center lies inside the
/// primitive. Everything outside the buffer is clipped.
pub struct PixelCanvas {
    image: RgbaImage,
    /// Bumped on every mutation so the renderer knows when to re-upload
    version: u64,
}

impl std::fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::empty()
    }
}

impl PixelCanvas {
    /// A 0x0 canvas, the state before the first layout pass
    pub fn empty() -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            version: 0,
        }
    }

    /// Create a canvas of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
            version: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.image.width(), self.image.height()]
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The underlying buffer, for encoding and texture upload
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color of a single pixel, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
    }

    /// Count pixels of exactly the given color
    pub fn count_pixels(&self, color: Color32) -> usize {
        let target = to_rgba(color);
        self.image.pixels().filter(|p| **p == target).count()
    }

    /// Discard the current pixels and reallocate at the new size
    pub fn resize(&mut self, width: u32, height: u32, background: Color32) {
        self.image = RgbaImage::from_pixel(width, height, to_rgba(background));
        self.touch();
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
        self.touch();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.image.clone(),
        }
    }

    /// Write a snapshot back over the buffer.
    ///
    /// A snapshot taken at a different size is ignored.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.dimensions() != self.image.dimensions() {
            log::warn!(
                "Ignoring {}x{} snapshot for {}x{} canvas",
                snapshot.width(),
                snapshot.height(),
                self.width(),
                self.height()
            );
            return;
        }
        self.image.clone_from(&snapshot.pixels);
        self.touch();
    }

    /// Stroke a straight segment with round caps
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let half = half_width(width);
        let bounds = Rect::from_two_pos(from, to).expand(half);
        self.paint_where(bounds, color, |p| distance_to_segment(p, from, to) <= half);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.paint_where(rect, color, |p| rect.contains(p));
    }

    /// Outline a rectangle with the line centered on its edges and square corners
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32) {
        let half = half_width(width);
        let outer = rect.expand(half);
        let inner = rect.shrink(half);
        self.paint_where(outer, color, |p| {
            outer.contains(p) && !(inner.is_positive() && inner.contains(p))
        });
    }

    pub fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let bounds = Rect::from_center_size(center, vec2(radius * 2.0, radius * 2.0));
        self.paint_where(bounds, color, |p| p.distance(center) <= radius);
    }

    pub fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let half = half_width(width);
        let extent = (radius + half) * 2.0;
        let bounds = Rect::from_center_size(center, vec2(extent, extent));
        self.paint_where(bounds, color, |p| (p.distance(center) - radius).abs() <= half);
    }

    /// Fill a closed polygon using the even-odd rule
    pub fn fill_polygon(&mut self, vertices: &[Pos2], color: Color32) {
        if vertices.len() < 3 {
            return;
        }
        let bounds = bounding_rect(vertices);
        self.paint_where(bounds, color, |p| polygon_contains(vertices, p));
    }

    /// Outline a closed polygon, joining the last vertex back to the first
    pub fn stroke_polygon(&mut self, vertices: &[Pos2], width: f32, color: Color32) {
        if vertices.is_empty() {
            return;
        }
        let half = half_width(width);
        let bounds = bounding_rect(vertices).expand(half);
        self.paint_where(bounds, color, |p| {
            closed_edges(vertices).any(|(a, b)| distance_to_segment(p, a, b) <= half)
        });
    }

    /// Paint every pixel in `bounds` whose center satisfies `covers`
    fn paint_where(&mut self, bounds: Rect, color: Color32, covers: impl Fn(Pos2) -> bool) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(bounds) else {
            return;
        };
        let rgba = to_rgba(color);
        for y in y0..y1 {
            for x in x0..x1 {
                if covers(pos2(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
        self.touch();
    }

    /// Pixel index range `[x0, x1) x [y0, y1)` overlapping `bounds`, clipped to the buffer
    fn pixel_span(&self, bounds: Rect) -> Option<(u32, u32, u32, u32)> {
        if self.is_empty() || !bounds.is_finite() || bounds.min.x > bounds.max.x || bounds.min.y > bounds.max.y {
            return None;
        }
        let clip = |v: f32, max: u32| v.clamp(0.0, max as f32) as u32;
        let x0 = clip(bounds.min.x.floor(), self.width());
        let y0 = clip(bounds.min.y.floor(), self.height());
        let x1 = clip(bounds.max.x.ceil() + 1.0, self.width());
        let y1 = clip(bounds.max.y.ceil() + 1.0, self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba([r, g, b, a])
}

fn half_width(width: f32) -> f32 {
    (width / 2.0).max(MIN_HALF_WIDTH)
}

fn bounding_rect(points: &[Pos2]) -> Rect {
    points
        .iter()
        .fold(Rect::NOTHING, |rect, point| rect.union(Rect::from_min_max(*point, *point)))
}

fn closed_edges(vertices: &[Pos2]) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
}

/// Shortest distance from `point` to the segment `a`-`b`
pub fn distance_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Even-odd point-in-polygon test
fn polygon_contains(vertices: &[Pos2], point: Pos2) -> bool {
    let mut inside = false;
    for (a, b) in closed_edges(vertices) {
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < cross_x {
                inside = !inside;
            }
        }
    }
    inside
}
