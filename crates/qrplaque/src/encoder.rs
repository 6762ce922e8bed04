//! Seam to the QR encoder.

use qrplaque_core::{ModuleMatrix, Result};

/// Produces the module matrix for a payload.
///
/// The returned matrix covers the symbol only, without quiet zone. Failures
/// should be reported as [`PlaqueError::Encoding`](qrplaque_core::PlaqueError::Encoding).
/// With the `qrcode` feature, `QrEncoder` is the bundled implementation.
pub trait ModuleEncoder {
    fn encode(&self, data: &str) -> Result<ModuleMatrix>;
}

impl<F> ModuleEncoder for F
where
    F: Fn(&str) -> Result<ModuleMatrix>,
{
    fn encode(&self, data: &str) -> Result<ModuleMatrix> {
        self(data)
    }
}

/// A precomputed matrix, returned for any payload.
impl ModuleEncoder for ModuleMatrix {
    fn encode(&self, _data: &str) -> Result<ModuleMatrix> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrplaque_core::PlaqueError;

    #[test]
    fn test_closure_encoder() {
        let encoder = |data: &str| {
            if data.is_empty() {
                Err(PlaqueError::Encoding("empty payload".into()))
            } else {
                ModuleMatrix::from_ascii("#.\n.#")
            }
        };
        assert_eq!(encoder.encode("x").unwrap().side(), 2);
        assert!(matches!(encoder.encode(""), Err(PlaqueError::Encoding(_))));
    }

    #[test]
    fn test_fixed_matrix_encoder() {
        let matrix = ModuleMatrix::from_ascii("##\n#.").unwrap();
        assert_eq!(matrix.encode("anything").unwrap(), matrix);
    }
}
