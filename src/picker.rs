//! The picker widget controller.
//!
//! Owns one geometry, the rasterized surfaces it samples from, and the
//! consumer callback. Every accepted pointer event runs one draw cycle:
//! sample the spectrum marker, repaint the shade surface with that hue,
//! sample the shade marker, report the result.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::color::ColorSample;
use crate::error::Result;
use crate::geometry::{new_geometry, PickerGeometry, PickerPosition, SurfaceId};
use crate::input::{InputHub, ListenerId, PointerEvent};
use crate::layout::PickerLayout;
use crate::options::{ColorChangeFn, PickerKind, PickerOptions, PickerStyle, RenderTarget};
use crate::surface::{PixelSampler, Raster, SurfaceSet};

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone)]
pub struct PickerFrame {
    pub kind: PickerKind,
    pub layout: PickerLayout,
    pub style: PickerStyle,
    pub spectrum: Raster,
    pub shade: Raster,
    pub spectrum_marker: PickerPosition,
    pub shade_marker: PickerPosition,
    pub sample: Option<ColorSample>,
}

struct PickerState {
    kind: PickerKind,
    layout: PickerLayout,
    style: PickerStyle,
    geometry: Box<dyn PickerGeometry>,
    surfaces: SurfaceSet,
    last_sample: Option<ColorSample>,
    destroyed: bool,
}

impl PickerState {
    /// Apply `event`; returns the new sample when a draw cycle ran.
    fn on_pointer(&mut self, event: &PointerEvent) -> Option<ColorSample> {
        if self.destroyed {
            return None;
        }
        let spectrum = self.layout.spectrum;
        let shade = self.layout.shade;
        let accepted = match *event {
            PointerEvent::Down(p) if spectrum.contains(p) => {
                self.geometry.spectrum_pointer_down(spectrum.to_local(p));
                true
            }
            PointerEvent::Down(p) if shade.contains(p) => {
                self.geometry.shade_pointer_down(shade.to_local(p));
                true
            }
            PointerEvent::Down(_) => false,
            PointerEvent::Move(p) => {
                let on_spectrum = self.geometry.spectrum_pointer_move(spectrum.to_local(p));
                let on_shade = self.geometry.shade_pointer_move(shade.to_local(p));
                on_spectrum || on_shade
            }
            PointerEvent::Up => {
                self.geometry.pointer_up();
                false
            }
        };
        accepted.then(|| self.draw())
    }

    fn draw(&mut self) -> ColorSample {
        let hue = self
            .surfaces
            .sample(SurfaceId::Spectrum, self.geometry.spectrum_position());
        self.surfaces.paint_shade(hue);
        let sample = self.geometry.current_sample(&self.surfaces);
        tracing::trace!(hue = ?hue, hex = %sample.hex, "draw cycle");
        self.last_sample = Some(sample.clone());
        sample
    }
}

struct Shared {
    state: RefCell<PickerState>,
    on_color_change: RefCell<ColorChangeFn>,
}

impl Shared {
    fn handle(&self, event: &PointerEvent) {
        let sample = match self.state.try_borrow_mut() {
            Ok(mut state) => state.on_pointer(event),
            Err(_) => {
                tracing::warn!(?event, "pointer event re-entered the picker; dropped");
                return;
            }
        };
        if let Some(sample) = sample {
            self.emit(&sample);
        }
    }

    /// Runs with the state released so the callback may query the picker.
    fn emit(&self, sample: &ColorSample) {
        match self.on_color_change.try_borrow_mut() {
            Ok(mut callback) => callback(sample),
            Err(_) => tracing::trace!("on_color_change is already running; skipped"),
        }
    }
}

/// A color picker instance.
///
/// Created from [`PickerOptions`] and attached to an [`InputHub`]. Dropping
/// the picker destroys it.
pub struct KolorPick {
    shared: Rc<Shared>,
    hub: InputHub,
    listener: Option<ListenerId>,
}

impl KolorPick {
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Lay out and paint the surfaces, subscribe to `input`, and report the
    /// default color once.
    pub fn new(options: PickerOptions, input: &InputHub) -> Result<Self> {
        let PickerOptions {
            kind,
            render_to,
            style,
            on_color_change,
        } = options;

        let layout = PickerLayout::compute(kind, render_to, style.padding)?;
        let geometry = new_geometry(kind, layout.spectrum.size, layout.shade.size);
        let surfaces = SurfaceSet::new(kind, layout.spectrum.size, layout.shade.size);

        let shared = Rc::new(Shared {
            state: RefCell::new(PickerState {
                kind,
                layout,
                style,
                geometry,
                surfaces,
                last_sample: None,
                destroyed: false,
            }),
            on_color_change: RefCell::new(on_color_change),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let listener = input.subscribe(move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.handle(event);
            }
        });

        tracing::debug!(
            %kind,
            width = render_to.width,
            height = render_to.height,
            "color picker created"
        );

        let picker = Self {
            shared,
            hub: input.clone(),
            listener: Some(listener),
        };
        picker.redraw();
        Ok(picker)
    }

    fn redraw(&self) {
        let sample = {
            let mut state = self.shared.state.borrow_mut();
            if state.destroyed {
                return;
            }
            state.draw()
        };
        self.shared.emit(&sample);
    }

    pub fn kind(&self) -> PickerKind {
        self.shared.state.borrow().kind
    }

    pub fn layout(&self) -> PickerLayout {
        self.shared.state.borrow().layout
    }

    pub fn is_destroyed(&self) -> bool {
        self.shared.state.borrow().destroyed
    }

    /// The color under the shade marker, or `None` once destroyed.
    pub fn current_sample(&self) -> Option<ColorSample> {
        let state = self.shared.state.borrow();
        if state.destroyed {
            return None;
        }
        Some(state.geometry.current_sample(&state.surfaces))
    }

    /// Snapshot for painting, or `None` once destroyed.
    pub fn frame(&self) -> Option<PickerFrame> {
        let state = self.shared.state.borrow();
        if state.destroyed {
            return None;
        }
        Some(PickerFrame {
            kind: state.kind,
            layout: state.layout,
            style: state.style,
            spectrum: state.surfaces.spectrum().clone(),
            shade: state.surfaces.shade().clone(),
            spectrum_marker: state.geometry.spectrum_position(),
            shade_marker: state.geometry.shade_position(),
            sample: state.last_sample.clone(),
        })
    }

    /// Re-layout for a new render target, keeping both markers at the same
    /// relative spot, then redraw. No-op once destroyed.
    pub fn resize(&self, target: RenderTarget) -> Result<()> {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.destroyed || state.layout.target == target {
                return Ok(());
            }
            let layout = PickerLayout::compute(state.kind, target, state.style.padding)?;
            state
                .geometry
                .resize(layout.spectrum.size, layout.shade.size);
            state
                .surfaces
                .resize(layout.spectrum.size, layout.shade.size);
            state.layout = layout;
            tracing::debug!(width = target.width, height = target.height, "color picker resized");
        }
        self.redraw();
        Ok(())
    }

    /// Detach from the input hub and go inert. Safe to call repeatedly,
    /// including mid-drag.
    pub fn destroy(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.hub.unsubscribe(listener);
        }
        let mut state = self.shared.state.borrow_mut();
        if !state.destroyed {
            state.geometry.destroy();
            state.destroyed = true;
            tracing::debug!(kind = %state.kind, "color picker destroyed");
        }
    }
}

impl Drop for KolorPick {
    fn drop(&mut self) {
        self.destroy();
    }
}
