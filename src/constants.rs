//! Sizing, color, and styling constants for the picker.

use crate::color::Rgb;

/// Markers never sit closer than this to a surface edge.
pub const EDGE_MARGIN: f64 = 1.0;

/// Height of the picked-color swatch row above the surfaces
pub const SWATCH_ROW: f64 = 50.0;

/// Height of the row holding the linear spectrum bar
pub const SPECTRUM_ROW: f64 = 50.0;

/// Linear spectrum bar height
pub const SPECTRUM_BAR_HEIGHT: u32 = 20;

/// Share of the remaining height given to the radial wheel
pub const WHEEL_HEIGHT_RATIO: f64 = 0.6;

/// Ring thickness as a share of the wheel's working radius
pub const RING_WIDTH_RATIO: f64 = 0.25;

/// Smallest legal surface extent on either axis, in pixels
pub const MIN_SURFACE_EXTENT: u32 = 3;

/// Marker radius on the spectrum surface
pub const SPECTRUM_MARKER_RADIUS: f64 = 8.0;

/// Marker radius on the shade surface
pub const SHADE_MARKER_RADIUS: f64 = 10.0;

/// Marker outline width
pub const MARKER_STROKE: f64 = 3.0;

/// Hue stops of the linear spectrum bar, as (offset, color).
pub const SPECTRUM_STOPS: [(f64, Rgb); 7] = [
    (0.02, Rgb::new(255, 0, 0)),
    (0.15, Rgb::new(255, 255, 0)),
    (0.33, Rgb::new(0, 255, 0)),
    (0.49, Rgb::new(0, 255, 255)),
    (0.67, Rgb::new(0, 0, 255)),
    (0.84, Rgb::new(255, 0, 255)),
    (0.98, Rgb::new(255, 0, 0)),
];

/// Where the shade surface's white → hue and clear → black ramps start and end.
pub const SHADE_RAMP_START: f64 = 0.05;
pub const SHADE_RAMP_END: f64 = 0.98;

/// Style defaults
pub const DEFAULT_BG: Rgb = Rgb::WHITE;
pub const DEFAULT_BORDER: Rgb = Rgb::BLACK;
pub const DEFAULT_PICKER: Rgb = Rgb::WHITE;
pub const DEFAULT_PADDING: f64 = 20.0;

/// Render target used by the Floem view before its first layout pass
pub const DEFAULT_TARGET_WIDTH: u32 = 240;
pub const DEFAULT_TARGET_HEIGHT: u32 = 320;

/// Readout font sizes
pub const READOUT_FONT: f32 = 11.0;
pub const LABEL_FONT: f32 = 10.0;

/// Gap between readout rows
pub const GAP: f32 = 6.0;

/// Label column width in the readout
pub const LABEL_WIDTH: f32 = 40.0;
