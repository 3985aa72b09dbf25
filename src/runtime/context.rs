use std::fs;
use std::path::{Path, PathBuf};

use tar::{Builder, Header};

use crate::runtime::error::RuntimeError;

pub(crate) const DOCKERFILE_NAME: &str = "Dockerfile";

/// Write the one-line Dockerfile for `base_image` into `dir`.
///
/// The content is exactly `FROM <base_image>:latest`, no trailing newline.
/// The base image name is interpolated as-is; callers own any validation.
pub(crate) fn write_dockerfile(dir: &Path, base_image: &str) -> Result<PathBuf, RuntimeError> {
    let path = dir.join(DOCKERFILE_NAME);
    let content = format!("FROM {}:latest", base_image);

    fs::write(&path, content)?;

    Ok(path)
}

/// Read the file at `path` and pack it as the single entry `entry_name` of
/// an in-memory tar archive, suitable as a build context for the engine.
pub(crate) fn tar_build_context(path: &Path, entry_name: &str) -> Result<Vec<u8>, RuntimeError> {
    let contents = fs::read(path)?;

    let mut builder = Builder::new(Vec::new());
    let mut header = Header::new_gnu();
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);

    builder
        .append_data(&mut header, entry_name, contents.as_slice())
        .map_err(|e| RuntimeError::ArchiveFailed(format!("Failed to append {}: {}", entry_name, e)))?;

    builder
        .into_inner()
        .map_err(|e| RuntimeError::ArchiveFailed(format!("Failed to finish archive: {}", e)))
}
