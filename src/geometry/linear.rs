//! Horizontal hue bar: the spectrum marker slides along x only.

use floem::kurbo::Point;

use super::{clamp_axis, rescale_axis, DragState, PickerGeometry, PickerPosition, ShadePad};
use crate::layout::SurfaceSize;
use crate::options::PickerKind;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGeometry {
    bar: SurfaceSize,
    spectrum: PickerPosition,
    spectrum_drag: DragState,
    shade: ShadePad,
}

impl LinearGeometry {
    pub fn new(bar: SurfaceSize, shade: SurfaceSize) -> Self {
        let mut geometry = Self {
            bar,
            spectrum: PickerPosition::new(0.0, 0.0),
            spectrum_drag: DragState::Idle,
            shade: ShadePad::new(shade),
        };
        geometry.init(bar, shade);
        geometry
    }

    fn track_y(&self) -> f64 {
        self.bar.height as f64 / 2.0
    }

    fn place(&mut self, x: f64) {
        self.spectrum = PickerPosition::new(clamp_axis(x, self.bar.width), self.track_y());
    }
}

impl PickerGeometry for LinearGeometry {
    fn kind(&self) -> PickerKind {
        PickerKind::Linear
    }

    fn init(&mut self, spectrum: SurfaceSize, shade: SurfaceSize) {
        self.bar = spectrum;
        self.spectrum_drag = DragState::Idle;
        self.place(spectrum.width as f64 / 2.0);
        self.shade = ShadePad::new(shade);
    }

    fn spectrum_pointer_down(&mut self, point: Point) {
        self.spectrum_drag = DragState::Dragging;
        self.place(point.x);
    }

    fn spectrum_pointer_move(&mut self, point: Point) -> bool {
        if self.spectrum_drag == DragState::Idle {
            return false;
        }
        self.place(point.x);
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
        self.spectrum
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
        let x = rescale_axis(self.spectrum.x, self.bar.width, spectrum.width);
        self.bar = spectrum;
        self.place(x);
        self.shade.resize(shade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> LinearGeometry {
        LinearGeometry::new(SurfaceSize::new(200, 20), SurfaceSize::new(240, 220))
    }

    #[test]
    fn starts_centered_with_shade_top_right() {
        let g = geometry();
        assert_eq!(g.spectrum_position(), PickerPosition::new(100.0, 10.0));
        assert_eq!(g.shade_position(), PickerPosition::new(239.0, 1.0));
    }

    #[test]
    fn spectrum_only_tracks_x() {
        let mut g = geometry();
        g.spectrum_pointer_down(Point::new(42.0, -300.0));
        assert_eq!(g.spectrum_position(), PickerPosition::new(42.0, 10.0));
        assert_eq!(g.spectrum_state(), DragState::Dragging);
    }

    #[test]
    fn spectrum_clamps_on_down_and_move() {
        let mut g = geometry();
        g.spectrum_pointer_down(Point::new(-5.0, 0.0));
        assert_eq!(g.spectrum_position().x, 1.0);
        assert!(g.spectrum_pointer_move(Point::new(500.0, 0.0)));
        assert_eq!(g.spectrum_position().x, 199.0);
    }

    #[test]
    fn move_after_up_is_a_no_op() {
        let mut g = geometry();
        g.spectrum_pointer_down(Point::new(30.0, 0.0));
        g.pointer_up();
        assert!(!g.spectrum_pointer_move(Point::new(150.0, 0.0)));
        assert_eq!(g.spectrum_position().x, 30.0);
        assert_eq!(g.spectrum_state(), DragState::Idle);
    }

    #[test]
    fn surfaces_drag_independently() {
        let mut g = geometry();
        g.shade_pointer_down(Point::new(10.0, 10.0));
        assert!(!g.spectrum_pointer_move(Point::new(150.0, 0.0)));
        assert!(g.shade_pointer_move(Point::new(20.0, 30.0)));
        assert_eq!(g.spectrum_position().x, 100.0);
        assert_eq!(g.shade_position(), PickerPosition::new(20.0, 30.0));
    }

    #[test]
    fn resize_rescales_the_bar_marker() {
        let mut g = geometry();
        g.spectrum_pointer_down(Point::new(50.0, 0.0));
        g.resize(SurfaceSize::new(400, 30), SurfaceSize::new(240, 220));
        assert_eq!(g.spectrum_position(), PickerPosition::new(100.0, 15.0));
    }

    #[test]
    fn destroy_clears_drags_and_is_idempotent() {
        let mut g = geometry();
        g.spectrum_pointer_down(Point::new(50.0, 0.0));
        g.shade_pointer_down(Point::new(50.0, 50.0));
        g.destroy();
        g.destroy();
        assert_eq!(g.spectrum_state(), DragState::Idle);
        assert_eq!(g.shade_state(), DragState::Idle);
    }

    quickcheck::quickcheck! {
        fn spectrum_x_stays_within_margins(moves: Vec<(i16, i16)>) -> bool {
            let mut g = geometry();
            g.spectrum_pointer_down(Point::new(0.0, 0.0));
            moves.into_iter().all(|(x, y)| {
                g.spectrum_pointer_move(Point::new(x as f64, y as f64));
                let p = g.spectrum_position();
                (1.0..=199.0).contains(&p.x)
            })
        }
    }
}
