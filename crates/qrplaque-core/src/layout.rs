//! Derived plaque dimensions.
//!
//! The [`Layout`] is computed once per request from a [`PlaqueParams`] and shared
//! by every builder.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::PlaqueParams;

/// Nominal advance of one title character, as a multiple of the text size.
pub const TITLE_KERNING: f64 = 1.0;

/// Secondary dimensions derived from the raw parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Plate width: QR block, border, and outline on both sides.
    pub frame_width: f64,
    /// Plate length: `frame_width` plus the title area.
    pub frame_length: f64,
    /// Vertical room reserved below the QR area for the titles.
    pub bottom_spacing: f64,
    /// Uniform xy scale applied to the titles so they fit the plate, in `(0, 1]`.
    pub title_scale: f64,
}

impl Layout {
    /// Computes the layout, validating the parameters first.
    pub fn compute(params: &PlaqueParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::compute_unchecked(params))
    }

    /// Computes the layout of parameters that already passed [`PlaqueParams::validate`].
    pub fn compute_unchecked(params: &PlaqueParams) -> Self {
        let frame_width =
            params.qr_size_mm + 2.0 * (params.qr_border_mm + params.frame_outline_mm);

        let title = params.title_text();
        let subtitle = params.subtitle_text();

        let mut bottom_spacing = match (title, subtitle) {
            (Some(_), Some(_)) => {
                params.title_size_mm
                    + params.subtitle_size_mm
                    + params.titles_spacing_mm
                    + params.qr_border_mm
            }
            (Some(_), None) => params.title_size_mm + params.qr_border_mm,
            (None, _) => 0.0,
        };

        let mut title_scale = 1.0;
        if title.is_some() {
            let nominal = nominal_titles_width(params);
            let available = frame_width + 2.0 * params.qr_border_mm;
            title_scale = (available / nominal).min(1.0);
            bottom_spacing *= title_scale;

            if title_scale < 1.0 {
                log::warn!(
                    "titles are {nominal:.1}mm wide but only {available:.1}mm fit, scaling by {title_scale:.3}"
                );
            }
        }

        let layout = Self {
            frame_width,
            frame_length: frame_width + bottom_spacing,
            bottom_spacing,
            title_scale,
        };
        log::debug!("computed layout {layout:?}");
        layout
    }

    /// Half of the plate width.
    pub fn half_width(&self) -> f64 {
        self.frame_width / 2.0
    }

    /// Half of the plate length.
    pub fn half_length(&self) -> f64 {
        self.frame_length / 2.0
    }
}

/// Width the titles would take at full size: the wider of title and subtitle.
///
/// Returns `0.0` when there is no title.
pub fn nominal_titles_width(params: &PlaqueParams) -> f64 {
    let Some(title) = params.title_text() else {
        return 0.0;
    };

    let title_width = text_width(title, params.title_size_mm);
    params
        .subtitle_text()
        .map_or(title_width, |sub| title_width.max(text_width(sub, params.subtitle_size_mm)))
}

#[allow(clippy::cast_precision_loss)]
fn text_width(text: &str, size_mm: f64) -> f64 {
    size_mm * TITLE_KERNING * text.chars().count() as f64
}
