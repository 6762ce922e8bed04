//! Fingerprint-keyed artifact files.
//!
//! Every parameter set owns three files in an output directory, named after
//! its [`Fingerprint`]: the OpenSCAD source, a PNG preview and an STL mesh.
//! The `ensure_*` functions only produce a file when it does not exist yet, so
//! re-running a job is cheap.

use std::fs;
use std::path::{Path, PathBuf};

use qrplaque_core::{Fingerprint, PlaqueParams, Result};
use qrplaque_scad::{write_scad, OpenScad};

use crate::encoder::ModuleEncoder;

/// Output directory used by the command-line workflow.
pub const DEFAULT_OUTPUT_DIR: &str = "qrout";

/// Locations of the artifacts of one parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    dir: PathBuf,
    fingerprint: Fingerprint,
}

impl ArtifactPaths {
    pub fn new(dir: impl Into<PathBuf>, fingerprint: Fingerprint) -> Self {
        Self {
            dir: dir.into(),
            fingerprint,
        }
    }

    /// Paths for `params` under `dir`.
    pub fn for_params(dir: impl Into<PathBuf>, params: &PlaqueParams) -> Result<Self> {
        Ok(Self::new(dir, params.fingerprint()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// `{dir}/{fingerprint}.scad`
    pub fn scad(&self) -> PathBuf {
        self.artifact("scad")
    }

    /// `{dir}/{fingerprint}.png`
    pub fn png(&self) -> PathBuf {
        self.artifact("png")
    }

    /// `{dir}/{fingerprint}.stl`
    pub fn stl(&self) -> PathBuf {
        self.artifact("stl")
    }

    fn artifact(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{extension}", self.fingerprint))
    }
}

/// Writes the OpenSCAD source for `params` unless it already exists.
///
/// Parameters are validated before anything touches the filesystem. The file
/// is written under a temporary name and renamed into place, so a reader never
/// sees a partial artifact.
pub fn ensure_scad(
    dir: impl AsRef<Path>,
    params: &PlaqueParams,
    encoder: &dyn ModuleEncoder,
) -> Result<PathBuf> {
    params.validate()?;
    let dir: &Path = dir.as_ref();
    let paths = ArtifactPaths::for_params(dir, params)?;
    let path = paths.scad();
    if path.exists() {
        log::debug!("{} already generated", path.display());
        return Ok(path);
    }

    let geometry = crate::generate(params, encoder)?;
    fs::create_dir_all(paths.dir())?;
    let partial = path.with_extension("scad.partial");
    persist(&partial, &path, |tmp| write_scad(&geometry, tmp))?;
    log::info!("generated {}", path.display());
    Ok(path)
}

/// Runs `write` against `partial`, then moves it to `path`. On failure the
/// partial file is removed and `path` is left untouched.
fn persist(partial: &Path, path: &Path, write: impl FnOnce(&Path) -> Result<()>) -> Result<()> {
    let result = write(partial).and_then(|()| Ok(fs::rename(partial, path)?));
    if result.is_err() && partial.exists() {
        if let Err(err) = fs::remove_file(partial) {
            log::warn!("could not remove {}: {err}", partial.display());
        }
    }
    result
}

/// Renders the PNG preview from an existing source unless it already exists.
pub fn ensure_preview(paths: &ArtifactPaths, openscad: &OpenScad) -> Result<PathBuf> {
    let png = paths.png();
    if png.exists() {
        log::debug!("{} already rendered", png.display());
        return Ok(png);
    }
    openscad.preview(&paths.scad(), &png)?;
    Ok(png)
}

/// Exports the STL mesh from an existing source unless it already exists.
pub fn ensure_render(paths: &ArtifactPaths, openscad: &OpenScad) -> Result<PathBuf> {
    let stl = paths.stl();
    if stl.exists() {
        log::debug!("{} already rendered", stl.display());
        return Ok(stl);
    }
    openscad.render(&paths.scad(), &stl)?;
    Ok(stl)
}
