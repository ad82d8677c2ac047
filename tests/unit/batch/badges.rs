//! Tests for folder listing and the per-file isolated transparency pass

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use pngprep::batch::badges::{collect_png_files, matches_png_glob, process_badge};
    use pngprep::batch::{BadgeConfig, BadgeProcessor};
    use pngprep::io::configuration::{DEFAULT_BADGE_FOLDER, TRANSPARENT_WHITE, WHITE_THRESHOLD};
    use pngprep::AssetError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_badge(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([200, 30, 30, 255])
            }
        });
        img.save(&path).unwrap();
        path
    }

    fn config_for(dir: &TempDir) -> BadgeConfig {
        BadgeConfig {
            folder: dir.path().to_path_buf(),
            ..BadgeConfig::default()
        }
    }

    // Tests default configuration values
    // Verified by changing the default folder
    #[test]
    fn test_default_config() {
        let config = BadgeConfig::default();
        assert_eq!(config.folder, PathBuf::from(DEFAULT_BADGE_FOLDER));
        assert_eq!(config.threshold, WHITE_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    // Tests a threshold nothing can exceed is rejected
    // Verified by removing the validation
    #[test]
    fn test_validate_rejects_max_threshold() {
        let config = BadgeConfig {
            threshold: 255,
            ..BadgeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AssetError::InvalidParameter {
                parameter: "threshold",
                ..
            }
        ));
    }

    // Tests glob matching is case-sensitive and skips hidden names
    // Verified by lowercasing extensions before comparison
    #[test]
    fn test_matches_png_glob() {
        assert!(matches_png_glob(Path::new("a/badge.png")));
        assert!(matches_png_glob(Path::new("badge.old.png")));
        assert!(!matches_png_glob(Path::new("badge.PNG")));
        assert!(!matches_png_glob(Path::new("badge.jpg")));
        assert!(!matches_png_glob(Path::new("badge")));
        assert!(!matches_png_glob(Path::new(".hidden.png")));
        assert!(!matches_png_glob(Path::new(".png")));
    }

    // Tests listing is non-recursive, filtered and sorted
    // Verified by descending into subdirectories
    #[test]
    fn test_collect_png_files() {
        let dir = TempDir::new().unwrap();
        write_badge(dir.path(), "b.png");
        write_badge(dir.path(), "a.png");
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_badge(&dir.path().join("nested"), "c.png");

        let files = collect_png_files(dir.path());

        assert_eq!(
            files,
            vec![dir.path().join("a.png"), dir.path().join("b.png")]
        );
    }

    // Tests names that are not valid UTF-8 are still listed and processed
    // Verified by converting names to str before matching
    #[cfg(unix)]
    #[test]
    fn test_collect_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"badge_\xff.png");
        let path = dir.path().join(name);
        RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        assert!(matches_png_glob(&path));
        assert!(!matches_png_glob(&dir.path().join(OsStr::from_bytes(b".\xff.png"))));
        assert_eq!(collect_png_files(dir.path()), vec![path.clone()]);

        let report = BadgeProcessor::new(config_for(&dir), false).process();
        assert_eq!(report.processed, vec![path.clone()]);
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    }

    // Tests a missing folder yields nothing instead of an error
    // Verified by propagating the read_dir error
    #[test]
    fn test_collect_missing_folder() {
        let dir = TempDir::new().unwrap();
        assert!(collect_png_files(&dir.path().join("absent")).is_empty());
    }

    // Tests a single badge is rewritten in place with dimensions kept
    // Verified by saving to a different path
    #[test]
    fn test_process_badge_in_place() {
        let dir = TempDir::new().unwrap();
        let path = write_badge(dir.path(), "badge.png");

        let rewritten = process_badge(&path, WHITE_THRESHOLD).unwrap();
        let result = image::open(&path).unwrap().to_rgba8();

        assert_eq!(rewritten, 8);
        assert_eq!(result.dimensions(), (4, 4));
        assert_eq!(result.get_pixel(0, 0).0, TRANSPARENT_WHITE);
        assert_eq!(result.get_pixel(3, 3).0, [200, 30, 30, 255]);
    }

    // Tests sources without alpha are expanded to RGBA before filtering
    // Verified by skipping the RGBA conversion
    #[test]
    fn test_process_badge_grayscale_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_fn(2, 1, |x, _| if x == 0 { Luma([250]) } else { Luma([100]) })
            .save(&path)
            .unwrap();

        process_badge(&path, WHITE_THRESHOLD).unwrap();
        let result = image::open(&path).unwrap();

        assert!(result.color().has_alpha());
        let rgba = result.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0).0, TRANSPARENT_WHITE);
        assert_eq!(rgba.get_pixel(1, 0).0, [100, 100, 100, 255]);
    }

    // Tests undecodable files surface a load error
    // Verified by ignoring decode failures
    #[test]
    fn test_process_badge_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, "not a png").unwrap();

        let err = process_badge(&path, WHITE_THRESHOLD).unwrap_err();

        assert!(matches!(err, AssetError::ImageLoad { .. }));
        assert_eq!(fs::read(&path).unwrap(), b"not a png");
    }

    // Tests an empty folder is a no-op
    // Verified by reporting a failure for empty folders
    #[test]
    fn test_process_empty_folder() {
        let dir = TempDir::new().unwrap();
        let report = BadgeProcessor::new(config_for(&dir), false).process();

        assert_eq!(report.attempted(), 0);
        assert!(report.is_clean());
    }

    // Tests one corrupt file does not stop the others
    // Verified by returning early on the first failure
    #[test]
    fn test_process_isolates_failures() {
        let dir = TempDir::new().unwrap();
        let first = write_badge(dir.path(), "a.png");
        let broken = dir.path().join("b.png");
        fs::write(&broken, "garbage").unwrap();
        let last = write_badge(dir.path(), "c.png");

        let report = BadgeProcessor::new(config_for(&dir), false).process();

        assert_eq!(report.processed, vec![first.clone(), last.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, broken);
        assert!(!report.is_clean());
        for path in [first, last] {
            let img = image::open(&path).unwrap().to_rgba8();
            assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
        }
    }

    // Tests processing with the progress bar enabled
    // Verified by skipping completion counting
    #[test]
    fn test_process_with_progress() {
        let dir = TempDir::new().unwrap();
        write_badge(dir.path(), "a.png");
        let report = BadgeProcessor::new(config_for(&dir), true).process();

        assert_eq!(report.processed, vec![dir.path().join("a.png")]);
        assert!(report.is_clean());
    }
}
