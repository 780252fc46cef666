//! # floem-kolor
//!
//! A hue/shade color picker for [Floem](https://github.com/lapce/floem).
//!
//! The picker draws a spectrum surface (a horizontal hue bar or a hue ring)
//! and a shade pad tinted with the hue under the spectrum marker. The color
//! under the shade marker is reported as RGB, HSL, HSV, CMYK and hex, all
//! derived from the same sampled pixel.
//!
//! The widget logic is usable without a window: build [`PickerOptions`],
//! create a [`KolorPick`] on an [`InputHub`], and feed it pointer events.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_kolor::{kolor_pick, ColorSample, PickerKind};
//!
//! let sample = RwSignal::new(None::<ColorSample>);
//! // Use `kolor_pick(PickerKind::Linear, sample)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod error;
mod geometry;
mod input;
mod layout;
mod math;
mod options;
mod picker;
mod picker_view;
mod readout;
mod surface;

pub use color::{Cmyk, ColorSample, Hsl, Hsv, Rgb};
pub use error::{ConfigurationError, KolorError, Result};
pub use geometry::{
    new_geometry, DragState, LinearGeometry, PickerGeometry, PickerPosition, RadialGeometry,
    ShadePad, SurfaceId, WheelRing,
};
pub use input::{InputHub, ListenerId, PointerEvent};
pub use layout::{PickerLayout, SurfaceRect, SurfaceSize};
pub use math::{
    build_color_sample, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, round_to,
};
pub use options::{
    ColorChangeFn, PickerKind, PickerOptions, PickerOptionsBuilder, PickerStyle, RenderTarget,
};
pub use picker::{KolorPick, PickerFrame};
pub use picker_view::{kolor_picker_view, KolorPickView};
pub use surface::{
    rasterize_shade, rasterize_spectrum_bar, rasterize_wheel, PixelSampler, Raster, SurfaceSet,
};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker surfaces stacked above a readout of the picked color.
///
/// Every pick is written to `sample`.
pub fn kolor_pick(kind: PickerKind, sample: RwSignal<Option<ColorSample>>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    v_stack((
        kolor_picker_view(kind, sample),
        readout::color_readout(sample),
    ))
    .style(|st| st.size_full())
}
