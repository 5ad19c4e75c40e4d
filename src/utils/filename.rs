use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// `dir/photo.png` + `_linear` becomes `dir/photo_linear.png`.
/// Only the last extension is kept after the suffix; without one the suffix is appended.
pub fn insert_suffix_before_extension(path: &Path, suffix: &OsStr) -> PathBuf {
    let Some(file_name) = path.file_name() else {
        // "..", "/" and similar have no file name to attach to
        let mut result = path.as_os_str().to_owned();
        result.push(suffix);
        return PathBuf::from(result);
    };
    let file_name = Path::new(file_name);

    let mut new_name = OsString::new();
    match file_name.extension() {
        Some(extension) => {
            new_name.push(file_name.file_stem().unwrap_or_default());
            new_name.push(suffix);
            new_name.push(".");
            new_name.push(extension);
        }
        None => {
            new_name.push(file_name);
            new_name.push(suffix);
        }
    }
    path.with_file_name(new_name)
}
