//! Pointer → marker-position model for the two picker surfaces.
//!
//! Each picker owns two markers: one on the spectrum surface (hue) and one
//! on the shade surface (lightness/saturation on top of that hue). The
//! variants differ only in how the spectrum marker follows the pointer;
//! the shade pad is shared through [`ShadePad`].

mod linear;
mod radial;

pub use linear::LinearGeometry;
pub use radial::{RadialGeometry, WheelRing};

use floem::kurbo::Point;

use crate::color::ColorSample;
use crate::constants::EDGE_MARGIN;
use crate::layout::SurfaceSize;
use crate::math::build_color_sample;
use crate::options::PickerKind;
use crate::surface::PixelSampler;

/// The two surfaces of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Spectrum,
    Shade,
}

/// Marker position in surface-local pixels.
///
/// `angle` is set on the radial spectrum marker only: degrees in `[0, 360)`,
/// clockwise from the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerPosition {
    pub x: f64,
    pub y: f64,
    pub angle: Option<f64>,
}

impl PickerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, angle: None }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Per-surface pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Saturate `v` into `[1, extent - 1]`.
pub(crate) fn clamp_axis(v: f64, extent: u32) -> f64 {
    let upper = (extent as f64 - EDGE_MARGIN).max(EDGE_MARGIN);
    if v.is_nan() {
        return EDGE_MARGIN;
    }
    v.clamp(EDGE_MARGIN, upper)
}

/// Rescale one coordinate from an old extent to a new one.
pub(crate) fn rescale_axis(v: f64, from: u32, to: u32) -> f64 {
    if from == 0 {
        return clamp_axis(v, to);
    }
    clamp_axis(v * to as f64 / from as f64, to)
}

/// The shade surface marker. Identical for every picker kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadePad {
    size: SurfaceSize,
    position: PickerPosition,
    drag: DragState,
}

impl ShadePad {
    /// Starts at the top-right corner: full color, no shade.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            position: Self::default_position(size),
            drag: DragState::Idle,
        }
    }

    fn default_position(size: SurfaceSize) -> PickerPosition {
        PickerPosition::new(
            clamp_axis(size.width as f64 - EDGE_MARGIN, size.width),
            clamp_axis(EDGE_MARGIN, size.height),
        )
    }

    fn place(&mut self, point: Point) {
        self.position = PickerPosition::new(
            clamp_axis(point.x, self.size.width),
            clamp_axis(point.y, self.size.height),
        );
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.drag = DragState::Dragging;
        self.place(point);
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        if self.drag == DragState::Idle {
            return false;
        }
        self.place(point);
        true
    }

    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.position = PickerPosition::new(
            rescale_axis(self.position.x, self.size.width, size.width),
            rescale_axis(self.position.y, self.size.height, size.height),
        );
        self.size = size;
    }

    pub fn position(&self) -> PickerPosition {
        self.position
    }

    pub fn state(&self) -> DragState {
        self.drag
    }
}

/// Shared contract of the linear and radial pickers.
///
/// Pointer points are surface-local. Positions are clamped, never rejected.
/// Move handlers return `true` when the event was taken (the surface is
/// being dragged) and the position may have changed.
pub trait PickerGeometry {
    fn kind(&self) -> PickerKind;

    /// Reset both markers to their defaults for the given surface sizes.
    fn init(&mut self, spectrum: SurfaceSize, shade: SurfaceSize);

    fn spectrum_pointer_down(&mut self, point: Point);
    fn spectrum_pointer_move(&mut self, point: Point) -> bool;

    fn shade_pointer_down(&mut self, point: Point);
    fn shade_pointer_move(&mut self, point: Point) -> bool;

    /// Ends any drag on either surface.
    fn pointer_up(&mut self);

    fn spectrum_position(&self) -> PickerPosition;
    fn shade_position(&self) -> PickerPosition;

    fn spectrum_state(&self) -> DragState;
    fn shade_state(&self) -> DragState;

    /// Keep the markers at the same relative spot on resized surfaces.
    fn resize(&mut self, spectrum: SurfaceSize, shade: SurfaceSize);

    /// The color under the shade marker. The spectrum marker only feeds the
    /// shade surface's gradient and is never reported.
    fn current_sample(&self, sampler: &dyn PixelSampler) -> ColorSample {
        build_color_sample(sampler.sample(SurfaceId::Shade, self.shade_position()))
    }

    /// Idempotent; clears the drag flags.
    fn destroy(&mut self) {
        self.pointer_up();
    }
}

/// Build the geometry for `kind`, initialized for the given surfaces.
pub fn new_geometry(
    kind: PickerKind,
    spectrum: SurfaceSize,
    shade: SurfaceSize,
) -> Box<dyn PickerGeometry> {
    match kind {
        PickerKind::Linear => Box::new(LinearGeometry::new(spectrum, shade)),
        PickerKind::Radial => Box::new(RadialGeometry::new(spectrum, shade)),
    }
}
