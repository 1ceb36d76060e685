//! Tests for the preview and generate operations

#[cfg(test)]
mod tests {
    use image::{ColorType, DynamicImage, ImageBuffer, Luma, Rgb, RgbImage};
    use skyboxgen::SkyboxError;
    use skyboxgen::geometry::FaceId;
    use skyboxgen::io::generate::{
        GeneratedFiles, OutputConfig, generate, preview, validate_output_dir, writing_message,
    };
    use skyboxgen::io::image::OutputFormat;
    use skyboxgen::io::progress::StatusReporter;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn cross_source() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(400, 200, |x, y| {
            Rgb([(x / 2) as u8, y as u8, 128])
        }))
    }

    fn config(dir: &TempDir, atlas: bool, separate: bool) -> OutputConfig {
        OutputConfig {
            face_size: 100,
            atlas,
            separate,
            format: OutputFormat::Png,
            output_dir: dir.path().join("skybox"),
        }
    }

    // Tests default configuration enables both outputs
    // Verified by defaulting separate output to off
    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::new("out");
        assert!(config.atlas);
        assert!(config.separate);
        assert_eq!(config.face_size, 512);
        assert_eq!(config.format, OutputFormat::Png);
        assert!(config.validate().is_ok());
    }

    // Tests output file naming for both formats
    // Verified by using the label instead of the short name
    #[test]
    fn test_output_paths() {
        let mut config = OutputConfig::new("out");
        assert_eq!(
            config.atlas_path(),
            PathBuf::from("out").join("skybox_2x3_template.png")
        );
        assert_eq!(
            config.face_path(FaceId::NegY),
            PathBuf::from("out").join("skybox_negy.png")
        );

        config.format = OutputFormat::Jpeg;
        assert_eq!(
            config.face_path(FaceId::PosZ),
            PathBuf::from("out").join("skybox_posz.jpg")
        );
    }

    // Tests generated paths list the atlas before the faces
    // Verified by appending the atlas last
    #[test]
    fn test_generated_files_paths() {
        let generated = GeneratedFiles {
            atlas: Some(PathBuf::from("atlas.png")),
            faces: vec![(FaceId::PosZ, PathBuf::from("posz.png"))],
        };
        assert_eq!(
            generated.paths(),
            vec![PathBuf::from("atlas.png"), PathBuf::from("posz.png")]
        );
        assert!(GeneratedFiles::default().paths().is_empty());
    }

    // Tests output directory validation creates missing directories
    // Verified by removing create_dir_all
    #[test]
    fn test_validate_output_dir_creates() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        assert!(validate_output_dir(&nested).is_ok());
        assert!(nested.is_dir());
        assert_eq!(fs::read_dir(&nested).unwrap().count(), 0);
    }

    // Tests a file in place of the output directory is rejected
    // Verified by removing the directory check
    #[test]
    fn test_validate_output_dir_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("taken");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            validate_output_dir(&file),
            Err(SkyboxError::OutputWrite { .. })
        ));
    }

    // Tests preview builds a 3x2 atlas in memory
    // Verified by ignoring the preview face size
    #[test]
    fn test_preview_dimensions() {
        let atlas = preview(&cross_source(), 128, &StatusReporter::hidden()).unwrap();
        assert_eq!(atlas.dimensions(), (384, 256));
    }

    // Tests preview failures are reported in the status line
    // Verified by leaving the status unchanged on failure
    #[test]
    fn test_preview_failure_status() {
        let status = StatusReporter::hidden();
        let result = preview(&DynamicImage::new_rgb8(0, 0), 128, &status);

        assert!(matches!(result, Err(SkyboxError::InvalidGeometry { .. })));
        assert_eq!(status.message(), "Preview failed.");
    }

    // Tests both outputs are written with the expected names and sizes
    // Verified by skipping the separate face loop
    #[test]
    fn test_generate_both_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(&temp_dir, true, true);
        let status = StatusReporter::hidden();

        let generated = generate(&cross_source(), &config, &status).unwrap();

        let atlas_path = generated.atlas.clone().unwrap();
        let atlas = image::open(&atlas_path).unwrap().to_rgb8();
        assert_eq!(atlas.dimensions(), (300, 200));

        let names: Vec<String> = generated
            .faces
            .iter()
            .map(|(_, path)| path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "skybox_posz.png",
                "skybox_negx.png",
                "skybox_negz.png",
                "skybox_posx.png",
                "skybox_posy.png",
                "skybox_negy.png",
            ]
        );
        for (_, path) in &generated.faces {
            let face = image::open(path).unwrap().to_rgb8();
            assert_eq!(face.dimensions(), (100, 100));
        }

        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 7);
        assert!(status.message().starts_with("Success!"));
    }

    // Tests only the atlas is written when separate output is off
    // Verified by ignoring the separate toggle
    #[test]
    fn test_generate_atlas_only() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(&temp_dir, true, false);

        let generated = generate(&cross_source(), &config, &StatusReporter::hidden()).unwrap();

        assert!(generated.atlas.is_some());
        assert!(generated.faces.is_empty());
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 1);
    }

    // Tests disabling both outputs fails before touching the disk
    // Verified by validating the directory before the toggles
    #[test]
    fn test_generate_no_output_selected() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(&temp_dir, false, false);

        let result = generate(&cross_source(), &config, &StatusReporter::hidden());

        assert!(matches!(result, Err(SkyboxError::NoOutputSelected)));
        assert!(!config.output_dir.exists());
    }

    // Tests a write failure keeps earlier files and reports them
    // Verified by deleting written files on failure
    #[test]
    fn test_generate_partial_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(&temp_dir, true, true);
        fs::create_dir_all(config.face_path(FaceId::NegX)).unwrap();

        let status = StatusReporter::hidden();
        let result = generate(&cross_source(), &config, &status);

        match result {
            Err(SkyboxError::OutputWrite { path, written, .. }) => {
                assert_eq!(path, config.face_path(FaceId::NegX));
                assert_eq!(
                    written,
                    vec![config.atlas_path(), config.face_path(FaceId::PosZ)]
                );
            }
            other => unreachable!("Expected OutputWrite, got {other:?}"),
        }
        assert!(config.atlas_path().exists());
        assert!(config.face_path(FaceId::PosZ).exists());
        assert!(!config.face_path(FaceId::NegZ).exists());
        assert_eq!(status.message(), "An error occurred.");
    }

    // Tests JPEG output uses the jpg extension
    // Verified by using the format name as extension
    #[test]
    fn test_generate_jpeg() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config(&temp_dir, false, true);
        config.format = OutputFormat::Jpeg;
        config.face_size = 16;

        let generated = generate(&cross_source(), &config, &StatusReporter::hidden()).unwrap();

        assert_eq!(generated.faces.len(), 6);
        for (_, path) in &generated.faces {
            assert_eq!(path.extension().unwrap(), "jpg");
            assert!(path.exists());
        }
    }

    // Tests separate PNG faces keep a 16-bit grayscale source's colour type
    // Verified by converting every face to 8-bit RGB before encoding
    #[test]
    fn test_generate_keeps_luma16_faces() {
        let temp_dir = TempDir::new().unwrap();
        let source =
            DynamicImage::ImageLuma16(ImageBuffer::from_pixel(400, 200, Luma([40_000u16])));
        let mut config = config(&temp_dir, false, true);
        config.face_size = 20;

        generate(&source, &config, &StatusReporter::hidden()).unwrap();

        let front = image::open(config.face_path(FaceId::PosZ)).unwrap();
        assert_eq!(front.color(), ColorType::L16);
        assert_eq!(front.as_luma16().unwrap().get_pixel(10, 10), &Luma([40_000]));
    }

    // Tests the per-file status line names the face and its path
    // Verified by printing only the path
    #[test]
    fn test_writing_message_names_face() {
        let message = writing_message(
            &format!("{} face", FaceId::PosZ.label()),
            Path::new("sky/skybox_posz.png"),
        );
        assert_eq!(message, "Writing front face to sky/skybox_posz.png");
    }
}
