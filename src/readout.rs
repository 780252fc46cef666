//! Read-only rows listing the picked color in every representation.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::ColorSample;
use crate::constants;

/// Hex, RGB, HSL, HSV and CMYK rows for `sample`, each with a copy button.
pub(crate) fn color_readout(sample: RwSignal<Option<ColorSample>>) -> impl IntoView {
    v_stack((
        readout_row("Hex", move || sample.get().map(|s| s.hex_display())),
        readout_row("RGB", move || sample.get().map(|s| s.rgb.to_string())),
        readout_row("HSL", move || sample.get().map(|s| s.hsl.to_string())),
        readout_row("HSV", move || sample.get().map(|s| s.hsv.to_string())),
        readout_row("CMYK", move || sample.get().map(|s| s.cmyk.to_string())),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::GAP)
            .width_full()
            .background(Color::rgb8(242, 242, 242))
    })
}

fn readout_row(
    lbl: &'static str,
    value: impl Fn() -> Option<String> + Copy + 'static,
) -> impl IntoView {
    h_stack((
        label(move || lbl).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        label(move || value().unwrap_or_else(|| "-".to_string())).style(|s| {
            s.font_size(constants::READOUT_FONT)
                .font_family("monospace".to_string())
        }),
        // Spacer pushes the copy button to the right
        empty().style(|s| s.flex_grow(1.0)),
        #[cfg(feature = "clipboard")]
        copy_button(move || value().unwrap_or_default()),
    ))
    .style(|st| st.items_center().gap(constants::GAP))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        if !text.is_empty() {
            copy_to_clipboard(&text);
        }
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(%err, "failed to write to the clipboard");
            }
        }
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}
