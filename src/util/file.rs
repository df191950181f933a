use std::path::Path;

const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Shape check for a comment image: known extension, non-empty, within the
/// size cap. Pure so the panel can report the reason without touching disk.
pub fn acceptable_image(file_name: &str, len: u64) -> bool {
    if len == 0 || len > MAX_IMAGE_BYTES {
        return false;
    }
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

pub fn check_image_file(path: &Path) -> Result<(), String> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| "The selected image file could not be read.".to_string())?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    if !metadata.is_file() || !acceptable_image(name, metadata.len()) {
        return Err("Only jpg, jpeg, png or gif images up to 5 MiB can be attached.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_within_the_cap_pass() {
        assert!(acceptable_image("photo.png", 1024));
        assert!(acceptable_image("photo.JPG", 1024));
        assert!(acceptable_image("a.jpeg", MAX_IMAGE_BYTES));
    }

    #[test]
    fn wrong_type_or_size_fails() {
        assert!(!acceptable_image("notes.txt", 1024));
        assert!(!acceptable_image("archive", 1024));
        assert!(!acceptable_image("photo.png", 0));
        assert!(!acceptable_image("photo.png", MAX_IMAGE_BYTES + 1));
    }
}
