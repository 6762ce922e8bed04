//! Runs the `openscad` executable on serialized sources.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use qrplaque_core::{PlaqueError, Result};

/// Camera for previews: translate, rotate, distance.
pub const PREVIEW_CAMERA: &str = "0,0,5,0,0,0,200";
/// Color scheme for previews.
pub const PREVIEW_COLORSCHEME: &str = "Tomorrow Night";

/// Builder for openscad invocations.
#[derive(Debug, Clone)]
pub struct OpenScad {
    program: PathBuf,
    camera: String,
    colorscheme: String,
    orthographic: bool,
}

impl OpenScad {
    /// Creates a runner using `openscad` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("openscad"),
            camera: PREVIEW_CAMERA.to_string(),
            colorscheme: PREVIEW_COLORSCHEME.to_string(),
            orthographic: true,
        }
    }

    /// Sets the executable to run.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the preview camera (`--camera` value).
    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = camera.into();
        self
    }

    /// Sets the preview color scheme.
    pub fn with_colorscheme(mut self, colorscheme: impl Into<String>) -> Self {
        self.colorscheme = colorscheme.into();
        self
    }

    /// Switches previews between orthographic and perspective projection.
    pub fn with_orthographic(mut self, orthographic: bool) -> Self {
        self.orthographic = orthographic;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments rendering `scad` to a PNG preview at `png`.
    pub fn preview_args(&self, scad: &Path, png: &Path) -> Vec<OsString> {
        let projection = if self.orthographic { "o" } else { "p" };
        vec![
            format!("--camera={}", self.camera).into(),
            format!("--projection={projection}").into(),
            format!("--colorscheme={}", self.colorscheme).into(),
            "-o".into(),
            png.into(),
            scad.into(),
        ]
    }

    /// Arguments exporting `scad` to a mesh at `stl`.
    pub fn render_args(scad: &Path, stl: &Path) -> Vec<OsString> {
        vec!["-o".into(), stl.into(), scad.into()]
    }

    /// Renders a PNG preview. Blocks until openscad exits.
    pub fn preview(&self, scad: &Path, png: &Path) -> Result<()> {
        self.run(&self.preview_args(scad, png))
    }

    /// Exports an STL mesh. Blocks until openscad exits.
    pub fn render(&self, scad: &Path, stl: &Path) -> Result<()> {
        self.run(&Self::render_args(scad, stl))
    }

    fn run(&self, args: &[OsString]) -> Result<()> {
        log::info!("running {} {:?}", self.program.display(), args);
        let output = Command::new(&self.program).args(args).output()?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::warn!("{} failed: {stderr}", self.program.display());
        Err(PlaqueError::Process {
            program: self.program.display().to_string(),
            status: output.status.to_string(),
            stderr,
        })
    }
}

impl Default for OpenScad {
    fn default() -> Self {
        Self::new()
    }
}
