//! Filesystem transfer primitives.
//!
//! Copies preserve permission bits on every entry. Moves are a bare
//! `fs::rename`: a cross-device rename fails and the caller reports it per
//! item, there is no copy+delete fallback. Partial copies on failure are not
//! rolled back.

use std::fs;
use std::io;
use std::path::Path;

/// Copies `src` to `dst`, recursing if `src` is a directory.
pub fn copy_path(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    if meta.is_dir() {
        copy_dir(src, dst)
    } else {
        copy_file(src, dst)
    }
}

/// Moves `src` to `dst` via atomic rename. Only works within one volume.
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    fs::set_permissions(dst, fs::metadata(src)?.permissions())?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            copy_file(&entry.path(), &target)?;
        }
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;
    fs::set_permissions(dst, fs::metadata(src)?.permissions())?;
    Ok(())
}
