//! Floem view hosting a [`KolorPick`].
//!
//! The view is the picker's input surface: it forwards Floem pointer events
//! to an [`InputHub`] and becomes the active view on pointer-down, so moves
//! and the final pointer-up still arrive when the drag leaves its bounds.
//! Surfaces are painted from the picker's rasters, scaled to the layout.

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{ColorSample, Rgb};
use crate::constants;
use crate::input::{InputHub, PointerEvent};
use crate::options::{PickerKind, PickerOptions, RenderTarget};
use crate::picker::KolorPick;
use crate::surface::Raster;

/// Margin around the picked-color swatch inside its row.
const SWATCH_INSET: f64 = 15.0;

fn to_color(rgb: Rgb) -> Color {
    Color::rgb8(rgb.r, rgb.g, rgb.b)
}

/// A raster uploaded as an image, keyed by the raster's generation.
struct CachedImage {
    generation: u64,
    img: peniko::Image,
    hash: Vec<u8>,
}

fn cached_image<'a>(slot: &'a mut Option<CachedImage>, raster: &Raster) -> Option<&'a CachedImage> {
    if raster.width() == 0 || raster.height() == 0 {
        return None;
    }
    let stale = slot
        .as_ref()
        .is_none_or(|c| c.generation != raster.generation());
    if stale {
        let blob = Blob::new(raster.shared_pixels());
        let img = peniko::Image::new(
            blob.clone(),
            peniko::Format::Rgba8,
            raster.width(),
            raster.height(),
        );
        *slot = Some(CachedImage {
            generation: raster.generation(),
            img,
            hash: blob.id().to_le_bytes().to_vec(),
        });
    }
    slot.as_ref()
}

pub struct KolorPickView {
    id: ViewId,
    held: bool,
    hub: InputHub,
    picker: Option<KolorPick>,
    size: floem::taffy::prelude::Size<f32>,
    spectrum_img: Option<CachedImage>,
    shade_img: Option<CachedImage>,
}

/// Creates the picker surfaces. Every picked color is written to `sample`.
pub fn kolor_picker_view(kind: PickerKind, sample: RwSignal<Option<ColorSample>>) -> KolorPickView {
    let id = ViewId::new();
    let hub = InputHub::new();

    let picker = PickerOptions::builder()
        .kind(kind)
        .render_to(RenderTarget::new(
            constants::DEFAULT_TARGET_WIDTH,
            constants::DEFAULT_TARGET_HEIGHT,
        ))
        .on_color_change(move |s| sample.set(Some(s.clone())))
        .build()
        .and_then(|options| KolorPick::new(options, &hub));

    let picker = match picker {
        Ok(picker) => Some(picker),
        Err(err) => {
            tracing::warn!(%err, "could not create the color picker");
            None
        }
    };

    KolorPickView {
        id,
        held: false,
        hub,
        picker,
        size: Default::default(),
        spectrum_img: None,
        shade_img: None,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .min_height(constants::DEFAULT_TARGET_HEIGHT as f32)
            .min_width(constants::DEFAULT_TARGET_WIDTH as f32)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl KolorPickView {
    fn forward(&mut self, event: PointerEvent) {
        self.hub.dispatch(&event);
        self.id.request_paint();
    }
}

fn paint_marker(cx: &mut PaintCx, center: Point, radius: f64, fill: Rgb, outline: Rgb) {
    let circle = Circle::new(center, radius);
    cx.fill(&circle, to_color(fill), 0.0);
    cx.stroke(
        &circle,
        to_color(outline),
        &floem::kurbo::Stroke::new(constants::MARKER_STROKE),
    );
}

impl View for KolorPickView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.forward(PointerEvent::Down(e.pos));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.forward(PointerEvent::Move(e.pos));
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                self.forward(PointerEvent::Up);
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        let target = RenderTarget::new(
            self.size.width.floor() as u32,
            self.size.height.floor() as u32,
        );
        if let Some(picker) = &self.picker {
            if target.width > 0 && target.height > 0 {
                if let Err(err) = picker.resize(target) {
                    tracing::debug!(%err, "keeping previous picker layout");
                }
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let Some(frame) = self.picker.as_ref().and_then(KolorPick::frame) else {
            return;
        };
        let style = frame.style;
        let bounds = Rect::new(0.0, 0.0, w, h);
        cx.fill(&bounds, to_color(style.bg), 0.0);

        // Picked color swatch
        if let Some(sample) = &frame.sample {
            let row = frame.layout.swatch;
            let swatch = Rect::new(
                row.x0 + SWATCH_INSET,
                row.y0 + SWATCH_INSET,
                (row.x1 - SWATCH_INSET).max(row.x0 + SWATCH_INSET),
                (row.y1 - SWATCH_INSET).max(row.y0 + SWATCH_INSET),
            );
            cx.fill(&swatch, to_color(sample.rgb), 0.0);
        }

        let spectrum_rect = frame.layout.spectrum.rect();
        if let Some(cached) = cached_image(&mut self.spectrum_img, &frame.spectrum) {
            cx.draw_img(
                floem_renderer::Img {
                    img: cached.img.clone(),
                    hash: &cached.hash,
                },
                spectrum_rect,
            );
        }

        let shade_rect = frame.layout.shade.rect();
        if let Some(cached) = cached_image(&mut self.shade_img, &frame.shade) {
            cx.draw_img(
                floem_renderer::Img {
                    img: cached.img.clone(),
                    hash: &cached.hash,
                },
                shade_rect,
            );
        }

        // Markers, filled with the color under them
        paint_marker(
            cx,
            frame.layout.spectrum.origin + frame.spectrum_marker.to_point().to_vec2(),
            constants::SPECTRUM_MARKER_RADIUS,
            frame.spectrum.sample(frame.spectrum_marker),
            style.picker,
        );
        paint_marker(
            cx,
            frame.layout.shade.origin + frame.shade_marker.to_point().to_vec2(),
            constants::SHADE_MARKER_RADIUS,
            frame.shade.sample(frame.shade_marker),
            style.picker,
        );

        cx.stroke(
            &bounds,
            to_color(style.border),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
