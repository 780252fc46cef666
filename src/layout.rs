//! Placement of the spectrum and shade surfaces inside a render target.

use floem::kurbo::{Point, Rect};

use crate::constants;
use crate::error::{ConfigurationError, Result};
use crate::options::{PickerKind, RenderTarget};

/// Pixel extent of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A surface positioned in render-target coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub origin: Point,
    pub size: SurfaceSize,
}

impl SurfaceRect {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (self.size.width as f64, self.size.height as f64),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        let r = self.rect();
        point.x >= r.x0 && point.x < r.x1 && point.y >= r.y0 && point.y < r.y1
    }

    /// Render-target point to surface-local coordinates.
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.origin.x, point.y - self.origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    pub target: RenderTarget,
    /// Row showing the picked color.
    pub swatch: Rect,
    pub spectrum: SurfaceRect,
    pub shade: SurfaceRect,
}

fn extent(value: f64, target: RenderTarget, surface: &'static str) -> Result<u32> {
    let px = value.floor();
    if px.is_nan() || px < constants::MIN_SURFACE_EXTENT as f64 {
        return Err(ConfigurationError::TargetTooSmall {
            width: target.width,
            height: target.height,
            surface,
        }
        .into());
    }
    Ok(px as u32)
}

impl PickerLayout {
    pub fn compute(kind: PickerKind, target: RenderTarget, padding: f64) -> Result<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigurationError::InvalidPadding(padding).into());
        }
        let w = target.width as f64;
        let h = target.height as f64;
        let swatch = Rect::new(0.0, 0.0, w, constants::SWATCH_ROW.min(h));

        match kind {
            PickerKind::Linear => {
                let shade_height = extent(
                    h - constants::SWATCH_ROW - constants::SPECTRUM_ROW,
                    target,
                    "shade",
                )?;
                let shade_width = extent(w, target, "shade")?;
                let bar_width = extent(w - 2.0 * padding, target, "spectrum")?;
                let bar_height = constants::SPECTRUM_BAR_HEIGHT;
                let bar_y = h - constants::SPECTRUM_ROW
                    + (constants::SPECTRUM_ROW - bar_height as f64) / 2.0;

                Ok(Self {
                    target,
                    swatch,
                    spectrum: SurfaceRect {
                        origin: Point::new(padding, bar_y),
                        size: SurfaceSize::new(bar_width, bar_height),
                    },
                    shade: SurfaceRect {
                        origin: Point::new(0.0, constants::SWATCH_ROW),
                        size: SurfaceSize::new(shade_width, shade_height),
                    },
                })
            }
            PickerKind::Radial => {
                let remaining = h - constants::SWATCH_ROW;
                let side = extent(
                    (w - 2.0 * padding).min(remaining * constants::WHEEL_HEIGHT_RATIO),
                    target,
                    "spectrum",
                )?;
                let shade_height = extent(remaining - side as f64, target, "shade")?;
                let shade_width = extent(w, target, "shade")?;

                Ok(Self {
                    target,
                    swatch,
                    spectrum: SurfaceRect {
                        origin: Point::new(((w - side as f64) / 2.0).floor(), constants::SWATCH_ROW),
                        size: SurfaceSize::new(side, side),
                    },
                    shade: SurfaceRect {
                        origin: Point::new(0.0, constants::SWATCH_ROW + side as f64),
                        size: SurfaceSize::new(shade_width, shade_height),
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KolorError;

    #[test]
    fn linear_layout_stacks_swatch_shade_and_bar() {
        let layout =
            PickerLayout::compute(PickerKind::Linear, RenderTarget::new(240, 320), 20.0).unwrap();
        assert_eq!(layout.shade.origin, Point::new(0.0, 50.0));
        assert_eq!(layout.shade.size, SurfaceSize::new(240, 220));
        assert_eq!(layout.spectrum.origin, Point::new(20.0, 285.0));
        assert_eq!(layout.spectrum.size, SurfaceSize::new(200, 20));
    }

    #[test]
    fn radial_layout_centers_a_square_wheel() {
        let layout =
            PickerLayout::compute(PickerKind::Radial, RenderTarget::new(240, 400), 20.0).unwrap();
        assert_eq!(layout.spectrum.size, SurfaceSize::new(200, 200));
        assert_eq!(layout.spectrum.origin, Point::new(20.0, 50.0));
        assert_eq!(layout.shade.origin, Point::new(0.0, 250.0));
        assert_eq!(layout.shade.size, SurfaceSize::new(240, 150));
    }

    #[test]
    fn tiny_target_is_rejected() {
        let err =
            PickerLayout::compute(PickerKind::Linear, RenderTarget::new(30, 90), 20.0).unwrap_err();
        assert!(matches!(
            err,
            KolorError::Configuration(ConfigurationError::TargetTooSmall { .. })
        ));
    }

    #[test]
    fn non_finite_or_negative_padding_is_rejected() {
        for kind in [PickerKind::Linear, PickerKind::Radial] {
            for padding in [f64::NAN, f64::INFINITY, -1.0] {
                let err = PickerLayout::compute(kind, RenderTarget::new(240, 320), padding)
                    .unwrap_err();
                assert!(matches!(
                    err,
                    KolorError::Configuration(ConfigurationError::InvalidPadding(_))
                ));
            }
        }
    }

    #[test]
    fn extent_rejects_nan() {
        let target = RenderTarget::new(240, 320);
        assert!(extent(f64::NAN, target, "shade").is_err());
        assert_eq!(extent(3.9, target, "shade"), Ok(3));
    }

    #[test]
    fn hit_testing_and_local_coordinates() {
        let rect = SurfaceRect {
            origin: Point::new(10.0, 20.0),
            size: SurfaceSize::new(100, 50),
        };
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(109.5, 69.5)));
        assert!(!rect.contains(Point::new(110.0, 30.0)));
        assert!(!rect.contains(Point::new(5.0, 30.0)));
        assert_eq!(rect.to_local(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
    }
}
