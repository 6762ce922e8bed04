//! Plaque parameters.
//!
//! [`PlaqueParams`] is the single input of a generation request. Every length is
//! in millimeters. Missing fields in a JSON document fall back to the defaults
//! documented on each field.

use serde::{Deserialize, Serialize};

use crate::error::{PlaqueError, Result};

/// Default font for the title line.
pub const DEFAULT_TITLE_FONT: &str = "Liberation Mono:style=Bold";
/// Default font for the subtitle line.
pub const DEFAULT_SUBTITLE_FONT: &str = "Liberation Mono:style=Italic";

/// Full parameter set of a plaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaqueParams {
    /// Payload encoded into the QR code.
    pub data: String,

    /// Title embossed below the QR code. Empty strings count as absent.
    pub title: Option<String>,
    /// Title font (default `Liberation Mono:style=Bold`).
    pub title_font: String,
    /// Title text height (default 10).
    pub title_size_mm: f64,

    /// Subtitle under the title. Ignored for layout when there is no title.
    pub subtitle: Option<String>,
    /// Subtitle font (default `Liberation Mono:style=Italic`).
    pub subtitle_font: String,
    /// Subtitle text height (default 8).
    pub subtitle_size_mm: f64,

    /// Gap between title and subtitle (default 3).
    pub titles_spacing_mm: f64,
    /// Text extrusion height (default 0.6).
    pub titles_thickness_mm: f64,

    /// Side length of the QR module block (default 50).
    pub qr_size_mm: f64,
    /// Quiet zone around the QR module block (default 2.5).
    pub qr_border_mm: f64,
    /// Module extrusion height (default 0.6).
    pub qr_thickness_mm: f64,

    /// Plate depth below z=0 (default 2).
    pub frame_thickness_mm: f64,
    /// Width of the raised outline band, 0 disables it (default 0).
    pub frame_outline_mm: f64,
    /// Height of the outline band (default 0.6).
    pub frame_outline_thickness_mm: f64,
    /// Corner radius of the plate (default 5).
    pub frame_fillet_radius_mm: f64,

    /// NFC tag recess.
    pub nfc: NfcCavity,
    /// Four corner magnet wells.
    pub magnets: MagnetCavities,
}

impl Default for PlaqueParams {
    fn default() -> Self {
        Self {
            data: String::new(),
            title: None,
            title_font: DEFAULT_TITLE_FONT.to_string(),
            title_size_mm: 10.0,
            subtitle: None,
            subtitle_font: DEFAULT_SUBTITLE_FONT.to_string(),
            subtitle_size_mm: 8.0,
            titles_spacing_mm: 3.0,
            titles_thickness_mm: 0.6,
            qr_size_mm: 50.0,
            qr_border_mm: 2.5,
            qr_thickness_mm: 0.6,
            frame_thickness_mm: 2.0,
            frame_outline_mm: 0.0,
            frame_outline_thickness_mm: 0.6,
            frame_fillet_radius_mm: 5.0,
            nfc: NfcCavity::default(),
            magnets: MagnetCavities::default(),
        }
    }
}

/// Cylindrical recess for an NFC sticker, centered in the plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NfcCavity {
    pub enabled: bool,
    /// Default 30.
    pub diameter_mm: f64,
    /// Default 0.6.
    pub thickness_mm: f64,
    /// Material left between the back face and the recess (default 0.6).
    pub base_offset_mm: f64,
}

impl Default for NfcCavity {
    fn default() -> Self {
        Self {
            enabled: true,
            diameter_mm: 30.0,
            thickness_mm: 0.6,
            base_offset_mm: 0.6,
        }
    }
}

/// Magnet wells drilled from the back face, one per plate corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetCavities {
    pub enabled: bool,
    /// Default 5.5.
    pub diameter_mm: f64,
    /// Default 1.2.
    pub thickness_mm: f64,
    /// Distance between the plate edge and the well (default 2).
    pub inset_mm: f64,
}

impl Default for MagnetCavities {
    fn default() -> Self {
        Self {
            enabled: true,
            diameter_mm: 5.5,
            thickness_mm: 1.2,
            inset_mm: 2.0,
        }
    }
}

impl PlaqueParams {
    /// Creates a parameter set with default dimensions for the given payload.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    /// Lighter profile: thinner plate and layers, outline band on, smaller text.
    pub fn compact(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            title_size_mm: 8.0,
            subtitle_size_mm: 6.0,
            titles_thickness_mm: 0.4,
            qr_border_mm: 5.0,
            frame_thickness_mm: 1.0,
            frame_outline_mm: 1.0,
            frame_outline_thickness_mm: 0.2,
            nfc: NfcCavity {
                thickness_mm: 0.2,
                base_offset_mm: 0.2,
                ..NfcCavity::default()
            },
            ..Default::default()
        }
    }

    /// Parses a (possibly partial) JSON parameter document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the parameters to JSON, fields in declaration order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_qr_size(mut self, size_mm: f64) -> Self {
        self.qr_size_mm = size_mm;
        self
    }

    #[must_use]
    pub fn with_frame_outline(mut self, width_mm: f64) -> Self {
        self.frame_outline_mm = width_mm;
        self
    }

    #[must_use]
    pub fn with_nfc(mut self, enabled: bool) -> Self {
        self.nfc.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_magnets(mut self, enabled: bool) -> Self {
        self.magnets.enabled = enabled;
        self
    }

    /// Title text, `None` when absent or empty.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Subtitle text, `None` when absent or empty.
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|t| !t.is_empty())
    }

    /// All numeric fields with their serialized names.
    pub(crate) fn dimensions(&self) -> [(&'static str, f64); 17] {
        [
            ("title_size_mm", self.title_size_mm),
            ("subtitle_size_mm", self.subtitle_size_mm),
            ("titles_spacing_mm", self.titles_spacing_mm),
            ("titles_thickness_mm", self.titles_thickness_mm),
            ("qr_size_mm", self.qr_size_mm),
            ("qr_border_mm", self.qr_border_mm),
            ("qr_thickness_mm", self.qr_thickness_mm),
            ("frame_thickness_mm", self.frame_thickness_mm),
            ("frame_outline_mm", self.frame_outline_mm),
            ("frame_outline_thickness_mm", self.frame_outline_thickness_mm),
            ("frame_fillet_radius_mm", self.frame_fillet_radius_mm),
            ("nfc.diameter_mm", self.nfc.diameter_mm),
            ("nfc.thickness_mm", self.nfc.thickness_mm),
            ("nfc.base_offset_mm", self.nfc.base_offset_mm),
            ("magnets.diameter_mm", self.magnets.diameter_mm),
            ("magnets.thickness_mm", self.magnets.thickness_mm),
            ("magnets.inset_mm", self.magnets.inset_mm),
        ]
    }

    /// Rejects parameter sets that cannot produce consistent geometry.
    ///
    /// Runs before any geometry is built; the first failing rule is reported
    /// with the offending field name.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() {
                return Err(PlaqueError::config(field, format!("{value} is not finite")));
            }
            if value < 0.0 {
                return Err(PlaqueError::config(field, format!("{value} is negative")));
            }
        }

        if self.qr_size_mm <= 0.0 {
            return Err(PlaqueError::config(
                "qr_size_mm",
                "QR footprint must be greater than zero",
            ));
        }

        let inner_half = self.qr_size_mm / 2.0 + self.qr_border_mm;
        if self.frame_outline_mm >= inner_half {
            return Err(PlaqueError::config(
                "frame_outline_mm",
                format!(
                    "outline {} must be below half the inner frame width ({inner_half})",
                    self.frame_outline_mm
                ),
            ));
        }

        let frame_half = inner_half + self.frame_outline_mm;
        if self.frame_fillet_radius_mm > frame_half {
            return Err(PlaqueError::config(
                "frame_fillet_radius_mm",
                format!(
                    "radius {} exceeds half the frame width ({frame_half})",
                    self.frame_fillet_radius_mm
                ),
            ));
        }

        if self.title_text().is_some() && self.title_size_mm <= 0.0 {
            return Err(PlaqueError::config(
                "title_size_mm",
                "title size must be greater than zero when a title is set",
            ));
        }

        Ok(())
    }
}
