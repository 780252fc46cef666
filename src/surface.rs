//! Rasterized picker surfaces and the pixel sampler that reads them.
//!
//! Gradients are rasterized to RGBA8 buffers on the CPU. The renderer
//! scales and draws those buffers, and sampling reads the exact same pixels
//! the user sees, so the reported color always matches the marker.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::color::Rgb;
use crate::constants;
use crate::geometry::{PickerPosition, SurfaceId, WheelRing};
use crate::layout::SurfaceSize;
use crate::math;
use crate::options::PickerKind;

/// Reads the color at a position on one of the picker surfaces.
///
/// Implemented by whatever paints the surfaces. Sampling a surface that has
/// not been painted yet returns whatever the buffer currently holds.
pub trait PixelSampler {
    fn sample(&self, surface: SurfaceId, position: PickerPosition) -> Rgb;
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// An RGBA8 pixel buffer, cheap to clone.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
    /// Unique per painted buffer; lets renderers cache uploaded images.
    generation: u64,
}

impl Raster {
    fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels: Arc::new(pixels),
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Fully transparent black.
    pub fn blank(size: SurfaceSize) -> Self {
        Self::from_pixels(
            size.width,
            size.height,
            vec![0u8; buffer_len(size.width, size.height)],
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn shared_pixels(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.pixels)
    }

    /// The pixel under `position`, clamped into the buffer. Alpha is dropped.
    pub fn sample(&self, position: PickerPosition) -> Rgb {
        if self.width == 0 || self.height == 0 {
            return Rgb::BLACK;
        }
        let px = pixel_index(position.x, self.width);
        let py = pixel_index(position.y, self.height);
        let offset = pixel_offset(px, py, self.width);
        Rgb::new(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }
}

/// Byte length of an RGBA8 buffer.
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// Byte offset of pixel `(x, y)` in a buffer `width` pixels wide.
fn pixel_offset(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

fn pixel_index(v: f64, extent: u32) -> u32 {
    if v.is_nan() {
        return 0;
    }
    v.floor().clamp(0.0, (extent - 1) as f64) as u32
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t + 0.5) as u8
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

/// Color of a multi-stop gradient at `t`; flat before the first and after
/// the last stop.
fn gradient_at(stops: &[(f64, Rgb)], t: f64) -> Rgb {
    let Some(&(first_offset, first)) = stops.first() else {
        return Rgb::BLACK;
    };
    if t <= first_offset {
        return first;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = o1 - o0;
            let local = if span > 0.0 { (t - o0) / span } else { 1.0 };
            return lerp_rgb(c0, c1, local);
        }
    }
    stops.last().map(|&(_, c)| c).unwrap_or(first)
}

/// 0 before `SHADE_RAMP_START`, 1 after `SHADE_RAMP_END`, linear between.
fn shade_ramp(t: f64) -> f64 {
    ((t - constants::SHADE_RAMP_START) / (constants::SHADE_RAMP_END - constants::SHADE_RAMP_START))
        .clamp(0.0, 1.0)
}

fn put(buf: &mut [u8], offset: usize, c: Rgb, alpha: u8) {
    buf[offset] = c.r;
    buf[offset + 1] = c.g;
    buf[offset + 2] = c.b;
    buf[offset + 3] = alpha;
}

/// Rasterize the horizontal hue bar.
pub fn rasterize_spectrum_bar(size: SurfaceSize) -> Raster {
    let SurfaceSize { width, height } = size;
    let mut buf = vec![0u8; buffer_len(width, height)];
    for px in 0..width {
        let t = (px as f64 + 0.5) / width as f64;
        let c = gradient_at(&constants::SPECTRUM_STOPS, t);
        for py in 0..height {
            put(&mut buf, pixel_offset(px, py, width), c, 255);
        }
    }
    Raster::from_pixels(width, height, buf)
}

/// Rasterize the hue ring at full saturation and 50% lightness. Pixels off
/// the ring stay transparent.
pub fn rasterize_wheel(size: SurfaceSize) -> Raster {
    let SurfaceSize { width, height } = size;
    let ring = WheelRing::for_side(width.min(height));
    let mut buf = vec![0u8; buffer_len(width, height)];

    for py in 0..height {
        let y = py as f64 + 0.5;

        for px in 0..width {
            let x = px as f64 + 0.5;
            if !ring.contains(x, y) {
                continue;
            }

            let mut hue = (y - ring.center).atan2(x - ring.center) / TAU;
            if hue < 0.0 {
                hue += 1.0;
            }

            let (r, g, b) = math::hsb_to_rgb(hue, 1.0, 1.0);
            let c = Rgb::new(
                (r * 255.0 + 0.5) as u8,
                (g * 255.0 + 0.5) as u8,
                (b * 255.0 + 0.5) as u8,
            );
            put(&mut buf, pixel_offset(px, py, width), c, 255);
        }
    }

    Raster::from_pixels(width, height, buf)
}

/// Rasterize the shade pad for `hue`: white → hue left to right, darkened
/// towards black top to bottom.
pub fn rasterize_shade(size: SurfaceSize, hue: Rgb) -> Raster {
    let SurfaceSize { width, height } = size;
    let mut buf = vec![0u8; buffer_len(width, height)];

    let columns: Vec<Rgb> = (0..width)
        .map(|px| {
            let t = shade_ramp((px as f64 + 0.5) / width as f64);
            lerp_rgb(Rgb::WHITE, hue, t)
        })
        .collect();

    for py in 0..height {
        let shade = shade_ramp((py as f64 + 0.5) / height as f64);
        for (px, &column) in columns.iter().enumerate() {
            let c = lerp_rgb(column, Rgb::BLACK, shade);
            put(&mut buf, pixel_offset(px as u32, py, width), c, 255);
        }
    }

    Raster::from_pixels(width, height, buf)
}

fn rasterize_spectrum(kind: PickerKind, size: SurfaceSize) -> Raster {
    match kind {
        PickerKind::Linear => rasterize_spectrum_bar(size),
        PickerKind::Radial => rasterize_wheel(size),
    }
}

/// The spectrum and shade rasters of one picker.
#[derive(Debug, Clone)]
pub struct SurfaceSet {
    kind: PickerKind,
    spectrum: Raster,
    shade: Raster,
    /// Hue the shade raster was last painted with.
    shade_hue: Option<Rgb>,
}

impl SurfaceSet {
    /// Paints the spectrum; the shade stays blank until [`Self::paint_shade`].
    pub fn new(kind: PickerKind, spectrum: SurfaceSize, shade: SurfaceSize) -> Self {
        Self {
            kind,
            spectrum: rasterize_spectrum(kind, spectrum),
            shade: Raster::blank(shade),
            shade_hue: None,
        }
    }

    /// Repaint the shade surface for `hue`. No-op when already painted with it.
    pub fn paint_shade(&mut self, hue: Rgb) {
        if self.shade_hue == Some(hue) {
            return;
        }
        self.shade = rasterize_shade(self.shade.size(), hue);
        self.shade_hue = Some(hue);
    }

    pub fn resize(&mut self, spectrum: SurfaceSize, shade: SurfaceSize) {
        if self.spectrum.size() != spectrum {
            self.spectrum = rasterize_spectrum(self.kind, spectrum);
        }
        if self.shade.size() != shade {
            self.shade = Raster::blank(shade);
            self.shade_hue = None;
        }
    }

    pub fn spectrum(&self) -> &Raster {
        &self.spectrum
    }

    pub fn shade(&self) -> &Raster {
        &self.shade
    }
}

impl PixelSampler for SurfaceSet {
    fn sample(&self, surface: SurfaceId, position: PickerPosition) -> Rgb {
        match surface {
            SurfaceId::Spectrum => self.spectrum.sample(position),
            SurfaceId::Shade => self.shade.sample(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PickerPosition {
        PickerPosition::new(x, y)
    }

    #[test]
    fn gradient_is_flat_outside_its_stops() {
        let stops = [(0.25, Rgb::new(0, 0, 0)), (0.75, Rgb::new(200, 100, 0))];
        assert_eq!(gradient_at(&stops, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(gradient_at(&stops, 0.5), Rgb::new(100, 50, 0));
        assert_eq!(gradient_at(&stops, 1.0), Rgb::new(200, 100, 0));
    }

    #[test]
    fn spectrum_bar_runs_red_to_red() {
        let bar = rasterize_spectrum_bar(SurfaceSize::new(200, 20));
        assert_eq!(bar.sample(at(1.0, 10.0)), Rgb::new(255, 0, 0));
        assert_eq!(bar.sample(at(198.0, 10.0)), Rgb::new(255, 0, 0));
        // 0.33 is pure green: pixel 65 has its center at t = 0.3275.
        assert_eq!(bar.sample(at(65.0, 10.0)), Rgb::new(4, 255, 0));
    }

    #[test]
    fn wheel_has_red_at_three_o_clock_and_a_transparent_hole() {
        let size = SurfaceSize::new(200, 200);
        let wheel = rasterize_wheel(size);
        let ring = WheelRing::for_side(200);
        let red = wheel.sample(ring.point_at(0.0));
        assert!(red.r == 255 && red.g <= 2 && red.b == 0);
        let cyan = wheel.sample(ring.point_at(180.0));
        assert!(cyan.r < 10 && cyan.g > 245 && cyan.b > 245);
        // Center pixel is off the ring.
        let offset = ((100 * 200 + 100) * 4) as usize;
        assert_eq!(&wheel.pixels()[offset..offset + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn shade_corners() {
        let hue = Rgb::new(0, 128, 255);
        let shade = rasterize_shade(SurfaceSize::new(240, 220), hue);
        // Top-right: the hue itself. Top-left: white. Bottom: black.
        assert_eq!(shade.sample(at(239.0, 1.0)), hue);
        assert_eq!(shade.sample(at(1.0, 1.0)), Rgb::WHITE);
        assert_eq!(shade.sample(at(120.0, 219.0)), Rgb::BLACK);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_math_does_not_wrap_on_huge_targets() {
        assert_eq!(buffer_len(40_000, 40_000), 6_400_000_000);
        assert_eq!(pixel_offset(39_999, 39_999, 40_000), 6_399_999_996);
        assert_eq!(pixel_offset(3, 2, 10), 92);
    }

    #[test]
    fn sample_clamps_into_the_buffer() {
        let shade = rasterize_shade(SurfaceSize::new(10, 10), Rgb::new(255, 0, 0));
        assert_eq!(shade.sample(at(-5.0, -5.0)), shade.sample(at(0.0, 0.0)));
        assert_eq!(shade.sample(at(50.0, 50.0)), shade.sample(at(9.0, 9.0)));
        assert_eq!(shade.sample(at(f64::NAN, 0.0)), shade.sample(at(0.0, 0.0)));
    }

    #[test]
    fn paint_shade_only_repaints_on_hue_change() {
        let mut set = SurfaceSet::new(
            PickerKind::Linear,
            SurfaceSize::new(100, 20),
            SurfaceSize::new(100, 100),
        );
        assert_eq!(set.sample(SurfaceId::Shade, at(50.0, 50.0)), Rgb::BLACK);
        set.paint_shade(Rgb::new(255, 0, 0));
        let first = set.shade().generation();
        set.paint_shade(Rgb::new(255, 0, 0));
        assert_eq!(set.shade().generation(), first);
        set.paint_shade(Rgb::new(0, 0, 255));
        assert_ne!(set.shade().generation(), first);
    }

    #[test]
    fn resize_reallocates_changed_surfaces_only() {
        let mut set = SurfaceSet::new(
            PickerKind::Radial,
            SurfaceSize::new(100, 100),
            SurfaceSize::new(100, 60),
        );
        let spectrum_gen = set.spectrum().generation();
        set.paint_shade(Rgb::new(255, 0, 0));
        set.resize(SurfaceSize::new(100, 100), SurfaceSize::new(120, 60));
        assert_eq!(set.spectrum().generation(), spectrum_gen);
        assert_eq!(set.shade().size(), SurfaceSize::new(120, 60));
        assert_eq!(set.sample(SurfaceId::Shade, at(119.0, 1.0)), Rgb::BLACK);
    }
}
