//! Preview and generate operations composing extraction, assembly and export

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};

use crate::cubemap::{assemble_atlas, build_atlas, extract_faces};
use crate::geometry::FaceId;
use crate::io::configuration::{
    ATLAS_STEM, DEFAULT_FACE_SIZE, FACE_FILE_PREFIX, WRITE_PROBE_PREFIX,
};
use crate::io::error::{Result, SkyboxError, output_io_error};
use crate::io::image::{OutputFormat, save_image};
use crate::io::progress::StatusReporter;

/// Settings for a full-resolution generate run
///
/// Built once from user input and passed by reference; nothing reads
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Edge length of each face in pixels
    pub face_size: u32,
    /// Write the combined 3x2 atlas
    pub atlas: bool,
    /// Write six separate face files
    pub separate: bool,
    /// Encoded format of every written file
    pub format: OutputFormat,
    /// Directory receiving the output files
    pub output_dir: PathBuf,
}

impl OutputConfig {
    /// Create a configuration with both outputs enabled, PNG format and the default size
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            face_size: DEFAULT_FACE_SIZE,
            atlas: true,
            separate: true,
            format: OutputFormat::Png,
            output_dir: output_dir.into(),
        }
    }

    /// Check that at least one output mode is selected
    ///
    /// # Errors
    ///
    /// Returns `NoOutputSelected` when both toggles are off
    pub const fn validate(&self) -> Result<()> {
        if !self.atlas && !self.separate {
            return Err(SkyboxError::NoOutputSelected);
        }
        Ok(())
    }

    /// Path of the atlas file
    pub fn atlas_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{ATLAS_STEM}.{}", self.format.extension()))
    }

    /// Path of a separate face file
    pub fn face_path(&self, face: FaceId) -> PathBuf {
        self.output_dir.join(format!(
            "{FACE_FILE_PREFIX}{}.{}",
            face.short_name(),
            self.format.extension()
        ))
    }
}

/// Files produced by a generate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Path of the atlas, when requested
    pub atlas: Option<PathBuf>,
    /// Separate face files in the order they were written
    pub faces: Vec<(FaceId, PathBuf)>,
}

impl GeneratedFiles {
    /// All written paths in write order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.atlas
            .iter()
            .cloned()
            .chain(self.faces.iter().map(|(_, path)| path.clone()))
            .collect()
    }
}

/// Ensure `dir` exists, is a directory and accepts new files
///
/// # Errors
///
/// Returns `OutputWrite` if the directory cannot be created, is a file, or
/// rejects a probe file
pub fn validate_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| output_io_error(dir.to_path_buf(), e, &[]))?;

    if !dir.is_dir() {
        return Err(output_io_error(
            dir.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            &[],
        ));
    }

    tempfile::Builder::new()
        .prefix(WRITE_PROBE_PREFIX)
        .tempfile_in(dir)
        .map(drop)
        .map_err(|e| output_io_error(dir.to_path_buf(), e, &[]))
}

/// Build a low-resolution atlas for a quick visual check
///
/// Nothing is written to disk.
///
/// # Errors
///
/// Propagates geometry and parameter errors from extraction
pub fn preview(
    source: &DynamicImage,
    face_size: u32,
    status: &StatusReporter,
) -> Result<RgbImage> {
    status.begin("Generating preview...");
    match build_atlas(source, face_size) {
        Ok(atlas) => {
            status.finish("Preview generated.");
            Ok(atlas)
        }
        Err(error) => {
            status.finish("Preview failed.");
            Err(error)
        }
    }
}

/// Extract faces at the configured size and write the requested outputs
///
/// The output configuration is checked before any file I/O. Faces are
/// extracted once and shared by both output modes. A failed write stops
/// the run; files written before it stay in place.
///
/// # Errors
///
/// Returns an error if:
/// - Neither output mode is selected (`NoOutputSelected`)
/// - The output directory is not writable (`OutputWrite`)
/// - The source cannot be sliced or the face size is invalid
/// - Any output file fails to encode or write (`OutputWrite`)
pub fn generate(
    source: &DynamicImage,
    config: &OutputConfig,
    status: &StatusReporter,
) -> Result<GeneratedFiles> {
    config.validate()?;
    validate_output_dir(&config.output_dir)?;

    status.begin("Generating full-resolution files...");
    let result = write_outputs(source, config, status);
    match &result {
        Ok(_) => status.finish(&format!(
            "Success! Files saved to {}",
            config.output_dir.display()
        )),
        Err(_) => status.finish("An error occurred."),
    }
    result
}

/// Status line shown while one output file is written
pub fn writing_message(what: &str, path: &Path) -> String {
    format!("Writing {what} to {}", path.display())
}

fn write_outputs(
    source: &DynamicImage,
    config: &OutputConfig,
    status: &StatusReporter,
) -> Result<GeneratedFiles> {
    let faces = extract_faces(source, config.face_size)?;
    let mut generated = GeneratedFiles::default();

    if config.atlas {
        let path = config.atlas_path();
        status.update(&writing_message("atlas", &path));
        let atlas = DynamicImage::ImageRgb8(assemble_atlas(&faces, config.face_size)?);
        save_image(&atlas, &path, config.format, &generated.paths())?;
        generated.atlas = Some(path);
    }

    if config.separate {
        for face in FaceId::WRITE_ORDER {
            let Some(image) = faces.get(&face) else {
                return Err(SkyboxError::IncompleteFaceSet {
                    missing: vec![face],
                });
            };
            let path = config.face_path(face);
            status.update(&writing_message(&format!("{} face", face.label()), &path));
            save_image(image, &path, config.format, &generated.paths())?;
            generated.faces.push((face, path));
        }
    }

    Ok(generated)
}
