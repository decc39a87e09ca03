//! Windows platform implementations.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Create `link` pointing at `target` (needs symlink privilege).
pub fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Write `contents` to a new file. Windows has no mode bits; `mode` is ignored.
pub fn create_new_with_mode(path: &Path, contents: &[u8], _mode: u32) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents)
}
