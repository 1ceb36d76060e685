//! Command-line interface for previewing and generating skyboxes

use crate::io::configuration::{
    DEFAULT_FACE_SIZE, MAX_FACE_SIZE, PREVIEW_FACE_SIZE, PREVIEW_FILE_PREFIX, RESOLUTION_PRESETS,
};
use crate::io::error::{Result, output_io_error};
use crate::io::generate::{GeneratedFiles, OutputConfig, generate, preview};
use crate::io::image::{OutputFormat, load_source, save_image};
use crate::io::progress::StatusReporter;
use clap::{Args, Parser, Subcommand};
use image::DynamicImage;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyboxgen")]
#[command(
    author,
    version,
    about = "Slice a cube-cross image into a 2x3 skybox atlas or six face images"
)]
/// Command-line arguments for the skybox generator
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Write a low-resolution atlas to check the layout before generating
    Preview(PreviewArgs),
    /// Write full-resolution skybox files
    Generate(GenerateArgs),
}

/// Arguments of the `preview` command
#[derive(Args)]
pub struct PreviewArgs {
    /// Source image in a 4x2 horizontal cross layout
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Where to write the preview atlas (defaults to the system temp directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Face size of the preview in pixels
    #[arg(short, long, default_value_t = PREVIEW_FACE_SIZE, value_parser = parse_face_size)]
    pub size: u32,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments of the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Source image in a 4x2 horizontal cross layout
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory receiving the skybox files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Face size in pixels, as `N` or `NxN` (presets: 256, 512, 1024, 2048)
    #[arg(short, long, default_value_t = DEFAULT_FACE_SIZE, value_parser = parse_face_size)]
    pub size: u32,

    /// Skip the combined 2x3 atlas image
    #[arg(long)]
    pub no_atlas: bool,

    /// Skip the six separate face files
    #[arg(long)]
    pub no_separate: bool,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Check if the combined atlas should be written
    pub const fn generate_atlas(&self) -> bool {
        !self.no_atlas
    }

    /// Check if separate face files should be written
    pub const fn generate_separate(&self) -> bool {
        !self.no_separate
    }

    /// Build the immutable output configuration for a generate run
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            face_size: self.size,
            atlas: self.generate_atlas(),
            separate: self.generate_separate(),
            format: self.format,
            output_dir: self.output_dir.clone(),
        }
    }
}

impl PreviewArgs {
    /// Path the preview atlas is written to
    ///
    /// Without `--output` a new uniquely named file is reserved in the system
    /// temp directory, so concurrent or repeated previews never collide.
    ///
    /// # Errors
    ///
    /// Returns `OutputWrite` if the scratch file cannot be created
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.output {
            return Ok(path.clone());
        }

        tempfile::Builder::new()
            .prefix(PREVIEW_FILE_PREFIX)
            .suffix(".png")
            .tempfile()
            .and_then(|file| file.into_temp_path().keep().map_err(|e| e.error))
            .map_err(|e| output_io_error(std::env::temp_dir(), e, &[]))
    }
}

/// Parse a face size given as `512` or `512x512`
///
/// Sizes outside the presets are accepted as long as they are positive,
/// square and not above the maximum face size.
///
/// # Errors
///
/// Returns a message if the value is not a positive square size
pub fn parse_face_size(value: &str) -> std::result::Result<u32, String> {
    let trimmed = value.trim();
    let (width, height) = match trimmed.split_once(['x', 'X']) {
        Some((w, h)) => (w.trim(), h.trim()),
        None => (trimmed, trimmed),
    };

    let width: u32 = width
        .parse()
        .map_err(|e| format!("invalid face size '{value}': {e}"))?;
    let height: u32 = height
        .parse()
        .map_err(|e| format!("invalid face size '{value}': {e}"))?;

    if width != height {
        return Err(format!("face size '{value}' must be square"));
    }
    if width == 0 {
        return Err("face size must be positive".to_string());
    }
    if width > MAX_FACE_SIZE {
        return Err(format!(
            "face size {width} exceeds maximum {MAX_FACE_SIZE} (presets: {RESOLUTION_PRESETS:?})"
        ));
    }
    Ok(width)
}

/// Runs the selected command against the decoded source image
pub struct SkyboxProcessor {
    cli: Cli,
}

impl SkyboxProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be decoded, the output
    /// configuration is invalid, or writing fails
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Preview(args) => Self::run_preview(args).map(drop),
            Command::Generate(args) => Self::run_generate(args).map(drop),
        }
    }

    /// Decode the source and write a preview atlas, returning its path
    ///
    /// # Errors
    ///
    /// Returns an error if decoding, extraction or writing fails
    // Allow print for user feedback on where the preview landed
    #[allow(clippy::print_stderr)]
    pub fn run_preview(args: &PreviewArgs) -> Result<PathBuf> {
        let status = StatusReporter::with_visibility(!args.quiet);
        let source = load_source(&args.source)?;
        let atlas = preview(&source, args.size, &status)?;

        let path = args.output_path()?;
        save_image(
            &DynamicImage::ImageRgb8(atlas),
            &path,
            OutputFormat::Png,
            &[],
        )?;

        if !args.quiet {
            eprintln!("Preview written to {}", path.display());
        }
        Ok(path)
    }

    /// Decode the source and write the requested skybox files
    ///
    /// # Errors
    ///
    /// Returns an error if no output is selected, decoding fails, or any
    /// file cannot be written
    // Allow print for the list of written files
    #[allow(clippy::print_stderr)]
    pub fn run_generate(args: &GenerateArgs) -> Result<GeneratedFiles> {
        let config = args.output_config();
        // Reject an empty selection before touching the source or the disk
        config.validate()?;

        let status = StatusReporter::with_visibility(!args.quiet);
        let source = load_source(&args.source)?;
        let generated = generate(&source, &config, &status)?;

        if !args.quiet {
            for path in generated.paths() {
                eprintln!("  {}", path.display());
            }
        }
        Ok(generated)
    }
}
