//! Content fingerprint of a parameter set.
//!
//! Callers use the fingerprint to name and deduplicate generated artifacts.
//! It is the SHA-256 of the JSON serialization of [`PlaqueParams`], whose
//! field order is fixed by the struct declaration.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::params::PlaqueParams;

/// Lowercase hex SHA-256 digest identifying a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Computes the fingerprint of `params`.
    pub fn of(params: &PlaqueParams) -> Result<Self> {
        let canonical = serde_json::to_vec(params)?;
        let digest = Sha256::digest(&canonical);
        Ok(Self(format!("{digest:x}")))
    }

    /// The hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PlaqueParams {
    /// Content fingerprint of these parameters, see [`Fingerprint`].
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        Fingerprint::of(self)
    }
}
