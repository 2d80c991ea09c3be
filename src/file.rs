// src/file.rs

use std::{
    fs,
    path::Path,
};

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create parent dirs as needed, then write the whole file.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    write_bytes(path, contents.as_bytes())
}

pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Sorted list of `*.jpg` file names in a directory. A missing directory is
/// an empty listing, not an error.
pub fn list_jpgs(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    if !dir.exists() {
        return Ok(out);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some("jpg") { continue; }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            out.push(name.to_string());
        }
    }
    out.sort();
    Ok(out)
}
