//! Export pipeline: rasterize the displayed surface and package it.
//!
//! Rasterization itself is an external collaborator behind [`Rasterizer`];
//! the pipeline owns capture geometry, the archive layout (one
//! `resume.jpg` entry), and the at-most-one-in-flight rule.

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::render::ThemeVariant;

/// Logical capture width.
pub const CAPTURE_WIDTH: u32 = 850;

/// Logical capture height.
pub const CAPTURE_HEIGHT: u32 = 1100;

/// Pixel density multiplier applied at capture time.
pub const PIXEL_RATIO: f32 = 2.0;

/// Name of the single image entry inside the archive.
pub const IMAGE_ENTRY: &str = "resume.jpg";

/// The painted surface handed to the rasterizer.
///
/// Geometry is fixed at 850x1100 logical units with a solid background;
/// any on-screen scale is reset to identity before capture so the export
/// is independent of the preview zoom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedSurface {
    pub html: String,
    pub scale: f32,
}

impl RenderedSurface {
    /// Wrap a painted HTML fragment as a capturable surface.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            scale: 1.0,
        }
    }

    /// Whether there is anything mounted to capture.
    pub fn is_ready(&self) -> bool {
        !self.html.trim().is_empty()
    }

    /// The surface with its scale transform reset to identity.
    pub fn unscaled(&self) -> Self {
        Self {
            html: self.html.clone(),
            scale: 1.0,
        }
    }
}

/// The rasterize-to-image collaborator.
///
/// Implementations capture the surface at [`CAPTURE_WIDTH`] x
/// [`CAPTURE_HEIGHT`] logical units, [`PIXEL_RATIO`] density, solid white
/// background, and return encoded JPEG bytes. Failures map to
/// `Error::Export`.
pub trait Rasterizer {
    fn rasterize(&self, surface: &RenderedSurface) -> Result<Vec<u8>>;
}

/// A finished export: archive bytes plus the suggested filename.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Captures a surface and packages the image into a zip archive.
#[derive(Debug, Default)]
pub struct ExportPipeline {
    in_flight: AtomicBool,
}

impl ExportPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export the surface under the active theme.
    ///
    /// At most one export per pipeline may be in flight; a concurrent
    /// trigger is rejected with `Error::ExportInFlight` rather than
    /// queued. A surface with nothing mounted fails with
    /// `Error::SurfaceNotReady`. Nothing is written on failure.
    pub fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        surface: &RenderedSurface,
        variant: ThemeVariant,
    ) -> Result<ExportArtifact> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(Error::ExportInFlight);
        }
        let result = self.export_inner(rasterizer, surface, variant);
        self.in_flight.store(false, Ordering::Release);
        result
    }

    fn export_inner(
        &self,
        rasterizer: &dyn Rasterizer,
        surface: &RenderedSurface,
        variant: ThemeVariant,
    ) -> Result<ExportArtifact> {
        if !surface.is_ready() {
            return Err(Error::SurfaceNotReady);
        }

        let jpeg = rasterizer.rasterize(&surface.unscaled())?;
        let bytes = write_archive(&jpeg)?;
        let file_name = variant.archive_name();

        info!("exported {file_name} ({} bytes)", bytes.len());
        Ok(ExportArtifact { file_name, bytes })
    }
}

/// Write the single-image deflate archive.
fn write_archive(jpeg: &[u8]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(IMAGE_ENTRY, options)?;
    writer.write_all(jpeg)?;
    Ok(writer.finish()?.into_inner())
}
