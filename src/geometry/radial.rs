//! Hue ring: the spectrum marker is projected onto the ring by angle.

use floem::kurbo::Point;

use super::{DragState, PickerGeometry, PickerPosition, ShadePad};
use crate::constants::{EDGE_MARGIN, RING_WIDTH_RATIO};
use crate::layout::SurfaceSize;
use crate::options::PickerKind;

/// Annulus drawn on a square wheel surface. Shared with the rasterizer so
/// the marker and the painted ring agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelRing {
    /// Center on both axes.
    pub center: f64,
    /// Working radius: the outer edge of the ring.
    pub outer: f64,
    pub inner: f64,
}

impl WheelRing {
    pub fn for_side(side: u32) -> Self {
        let center = side as f64 / 2.0;
        let outer = (center - EDGE_MARGIN).max(0.0);
        Self {
            center,
            outer,
            inner: outer * (1.0 - RING_WIDTH_RATIO),
        }
    }

    /// Radius of the ring's center line.
    pub fn centerline(&self) -> f64 {
        (self.outer + self.inner) / 2.0
    }

    pub fn distance(&self, x: f64, y: f64) -> f64 {
        (x - self.center).hypot(y - self.center)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        let d = self.distance(x, y);
        d >= self.inner && d <= self.outer
    }

    /// Pointer angle in degrees, `[0, 360)`, clockwise from +x. `None` at the
    /// exact center where there is no direction.
    pub fn angle_of(&self, point: Point) -> Option<f64> {
        let dx = point.x - self.center;
        let dy = point.y - self.center;
        if (dx == 0.0 && dy == 0.0) || dx.is_nan() || dy.is_nan() {
            return None;
        }
        Some(dy.atan2(dx).to_degrees().rem_euclid(360.0))
    }

    /// Marker position on the ring for `degrees`.
    ///
    /// The point at the working radius is pulled back along the radius by
    /// half the ring width, so it sits on the center line.
    pub fn point_at(&self, degrees: f64) -> PickerPosition {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let inset = (self.outer - self.inner) / 2.0;
        PickerPosition {
            x: self.outer * cos + self.center - inset * cos,
            y: self.outer * sin + self.center - inset * sin,
            angle: Some(degrees),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGeometry {
    ring: WheelRing,
    angle: f64,
    spectrum_drag: DragState,
    shade: ShadePad,
}

impl RadialGeometry {
    /// Angle of pure red on the wheel.
    pub const DEFAULT_ANGLE: f64 = 0.0;

    pub fn new(wheel: SurfaceSize, shade: SurfaceSize) -> Self {
        let mut geometry = Self {
            ring: WheelRing::for_side(0),
            angle: Self::DEFAULT_ANGLE,
            spectrum_drag: DragState::Idle,
            shade: ShadePad::new(shade),
        };
        geometry.init(wheel, shade);
        geometry
    }

    pub fn ring(&self) -> WheelRing {
        self.ring
    }

    fn aim(&mut self, point: Point) {
        if let Some(angle) = self.ring.angle_of(point) {
            self.angle = angle;
        }
    }
}

/// Wheels are square; a non-square surface uses its shorter side.
fn wheel_side(size: SurfaceSize) -> u32 {
    size.width.min(size.height)
}

impl PickerGeometry for RadialGeometry {
    fn kind(&self) -> PickerKind {
        PickerKind::Radial
    }

    fn init(&mut self, spectrum: SurfaceSize, shade: SurfaceSize) {
        self.ring = WheelRing::for_side(wheel_side(spectrum));
        self.angle = Self::DEFAULT_ANGLE;
        self.spectrum_drag = DragState::Idle;
        self.shade = ShadePad::new(shade);
    }

    fn spectrum_pointer_down(&mut self, point: Point) {
        self.spectrum_drag = DragState::Dragging;
        self.aim(point);
    }

    fn spectrum_pointer_move(&mut self, point: Point) -> bool {
        if self.spectrum_drag == DragState::Idle {
            return false;
        }
        self.aim(point);
        true
    }

    fn shade_pointer_down(&mut self, point: Point) {
        self.shade.pointer_down(point);
    }

    fn shade_pointer_move(&mut self, point: Point) -> bool {
        self.shade.pointer_move(point)
    }

    fn pointer_up(&mut self) {
        self.spectrum_drag = DragState::Idle;
        self.shade.release();
    }

    fn spectrum_position(&self) -> PickerPosition {
        self.ring.point_at(self.angle)
    }

    fn shade_position(&self) -> PickerPosition {
        self.shade.position()
    }

    fn spectrum_state(&self) -> DragState {
        self.spectrum_drag
    }

    fn shade_state(&self) -> DragState {
        self.shade.state()
    }

    fn resize(&mut self, spectrum: SurfaceSize, shade: SurfaceSize) {
        // The angle is size independent; only the ring changes.
        self.ring = WheelRing::for_side(wheel_side(spectrum));
        self.shade.resize(shade);
    }
}
