//! QR encoder backed by the `qrcode` crate.

use qrcode::{EcLevel, QrCode};
use qrplaque_core::{ModuleMatrix, PlaqueError, Result};

use crate::encoder::ModuleEncoder;

/// Error correction level of the generated symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Recovers about 7% of the symbol.
    Low,
    /// Recovers about 15% of the symbol.
    #[default]
    Medium,
    /// Recovers about 25% of the symbol.
    Quartile,
    /// Recovers about 30% of the symbol.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Encodes payloads into the smallest QR version that fits, without quiet zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder {
    error_correction: ErrorCorrection,
}

impl QrEncoder {
    /// Creates an encoder with medium error correction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error correction level.
    #[must_use]
    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }

    pub fn error_correction(&self) -> ErrorCorrection {
        self.error_correction
    }
}

impl ModuleEncoder for QrEncoder {
    fn encode(&self, data: &str) -> Result<ModuleMatrix> {
        let code = QrCode::with_error_correction_level(data, self.error_correction.into())
            .map_err(|err| {
                PlaqueError::Encoding(format!("cannot encode {} bytes: {err}", data.len()))
            })?;

        let side = code.width();
        log::debug!("encoded payload as QR version {:?}, {side} modules", code.version());

        let rows = code
            .into_colors()
            .chunks(side)
            .map(|row| row.iter().map(|&c| c == qrcode::Color::Dark).collect())
            .collect();
        ModuleMatrix::from_rows(rows)
    }
}
