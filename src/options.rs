//! Construction options: picker type, render target, style and the
//! color-change callback. Validation happens once, in
//! [`PickerOptionsBuilder::build`].

use std::fmt;
use std::str::FromStr;

use crate::color::{ColorSample, Rgb};
use crate::constants;
use crate::error::{ConfigurationError, KolorError, Result};

/// Which spectrum surface the picker draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKind {
    /// Horizontal hue bar.
    Linear,
    /// Hue ring.
    Radial,
}

impl FromStr for PickerKind {
    type Err = KolorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            _ => Err(ConfigurationError::UnknownKind(s.to_string()).into()),
        }
    }
}

impl fmt::Display for PickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
        })
    }
}

/// Pixel box the picker lays its surfaces out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget {
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Colors and spacing used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerStyle {
    pub bg: Rgb,
    pub border: Rgb,
    pub picker: Rgb,
    pub padding: f64,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            bg: constants::DEFAULT_BG,
            border: constants::DEFAULT_BORDER,
            picker: constants::DEFAULT_PICKER,
            padding: constants::DEFAULT_PADDING,
        }
    }
}

impl PickerStyle {
    /// Build a style from loosely-typed values; `None` keeps the default.
    ///
    /// Colors are hex (`#RGB`, `#RRGGBB`) or `white`/`black`.
    pub fn parse(
        bg: Option<&str>,
        border: Option<&str>,
        picker: Option<&str>,
        padding: Option<f64>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let color = |field: &'static str, value: Option<&str>, default: Rgb| match value {
            None => Ok(default),
            Some(v) => Rgb::parse(v).ok_or_else(|| ConfigurationError::InvalidColor {
                field,
                value: v.to_string(),
            }),
        };
        let padding = match padding {
            None => defaults.padding,
            Some(p) if p.is_finite() && p >= 0.0 => p,
            Some(p) => return Err(ConfigurationError::InvalidPadding(p).into()),
        };
        Ok(Self {
            bg: color("bg", bg, defaults.bg)?,
            border: color("border", border, defaults.border)?,
            picker: color("picker", picker, defaults.picker)?,
            padding,
        })
    }
}

pub type ColorChangeFn = Box<dyn FnMut(&ColorSample)>;

/// Validated construction options.
pub struct PickerOptions {
    pub kind: PickerKind,
    pub render_to: RenderTarget,
    pub style: PickerStyle,
    pub on_color_change: ColorChangeFn,
}

impl PickerOptions {
    /// Start an empty builder.
    pub fn builder() -> PickerOptionsBuilder {
        PickerOptionsBuilder::default()
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("kind", &self.kind)
            .field("render_to", &self.render_to)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct PickerOptionsBuilder {
    kind: Option<std::result::Result<PickerKind, String>>,
    render_to: Option<RenderTarget>,
    style: Option<PickerStyle>,
    on_color_change: Option<ColorChangeFn>,
}

impl PickerOptionsBuilder {
    /// Picker type.
    pub fn kind(mut self, kind: PickerKind) -> Self {
        self.kind = Some(Ok(kind));
        self
    }

    /// Picker type by name (`"linear"` or `"radial"`); checked in `build`.
    pub fn kind_name(mut self, name: &str) -> Self {
        self.kind = Some(name.parse::<PickerKind>().map_err(|_| name.to_string()));
        self
    }

    /// Pixel box the surfaces are laid out in. Required.
    pub fn render_to(mut self, target: RenderTarget) -> Self {
        self.render_to = Some(target);
        self
    }

    /// Colors and padding; [`PickerStyle::default`] when unset.
    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Called with every new sample. Required.
    pub fn on_color_change(mut self, f: impl FnMut(&ColorSample) + 'static) -> Self {
        self.on_color_change = Some(Box::new(f));
        self
    }

    /// Validate and assemble the options.
    pub fn build(self) -> Result<PickerOptions> {
        let kind = match self.kind {
            None => return Err(ConfigurationError::MissingKind.into()),
            Some(Err(name)) => return Err(ConfigurationError::UnknownKind(name).into()),
            Some(Ok(kind)) => kind,
        };
        let render_to = self.render_to.ok_or(ConfigurationError::MissingRenderTarget)?;
        let on_color_change = self.on_color_change.ok_or(ConfigurationError::MissingCallback)?;
        Ok(PickerOptions {
            kind,
            render_to,
            style: self.style.unwrap_or_default(),
            on_color_change,
        })
    }
}
