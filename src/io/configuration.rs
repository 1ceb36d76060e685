//! Output naming constants and runtime configuration defaults

// Face sizes offered by the resolution selector
/// Preset face sizes in pixels
pub const RESOLUTION_PRESETS: [u32; 4] = [256, 512, 1024, 2048];

/// Default face size when none is requested
pub const DEFAULT_FACE_SIZE: u32 = 512;

/// Face size used for low-resolution previews
pub const PREVIEW_FACE_SIZE: u32 = 128;

// Twice the largest preset; the RGB atlas at this size is about 300 MB
/// Maximum accepted face size
pub const MAX_FACE_SIZE: u32 = 4096;

// Output settings
/// File stem of the combined atlas image
pub const ATLAS_STEM: &str = "skybox_2x3_template";
/// Prefix of each separate face file, followed by the face short name
pub const FACE_FILE_PREFIX: &str = "skybox_";
/// Prefix of the scratch preview file when no output path is given
pub const PREVIEW_FILE_PREFIX: &str = "skybox_preview_";
/// Prefix for the probe file used to check directory writability
pub const WRITE_PROBE_PREFIX: &str = ".skyboxgen-probe";

// Status display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
