//! Hosts file block format and editor helpers.
//!
//! Each managed host owns one block, appended verbatim:
//!
//! ```text
//! \n#host-<hostname>-begin\n127.0.0.1    <hostname>\n#host-<hostname>-end
//! ```

use anyhow::Result;

use crate::platform::HostsEditor;

pub const LOOPBACK: &str = "127.0.0.1";

/// Block text for `hostname`, including the leading newline.
pub fn block(hostname: &str) -> String {
    format!("\n#host-{hostname}-begin\n{LOOPBACK}    {hostname}\n#host-{hostname}-end")
}

/// Byte range of the first complete block for `hostname`.
///
/// The end marker must close its line so `#host-a-end` does not match
/// inside `#host-a-endx`. A block at the very start of the content may lack
/// its leading newline.
pub fn find_block(content: &str, hostname: &str) -> Option<std::ops::Range<usize>> {
    let full = block(hostname);
    let line_ends = |end: usize| {
        matches!(
            content.as_bytes().get(end).copied(),
            None | Some(b'\n' | b'\r')
        )
    };

    if let Some(start) = content
        .match_indices(&full)
        .map(|(i, _)| i)
        .find(|&i| line_ends(i + full.len()))
    {
        return Some(start..start + full.len());
    }
    let bare = &full[1..];
    if content.starts_with(bare) && line_ends(bare.len()) {
        return Some(0..bare.len());
    }
    None
}

/// Content with the first block for `hostname` cut out, or `None` if absent.
pub fn strip_block(content: &str, hostname: &str) -> Option<String> {
    let range = find_block(content, hostname)?;
    let mut out = String::with_capacity(content.len() - range.len());
    out.push_str(&content[..range.start]);
    let rest = &content[range.end..];
    if range.start == 0 {
        // Block was the first thing in the file; don't leave a blank first line.
        out.push_str(rest.strip_prefix('\n').unwrap_or(rest));
    } else {
        out.push_str(rest);
    }
    Some(out)
}

/// Add host block to hosts file.
pub fn add_host_to_hosts(editor: &dyn HostsEditor, hostname: &str) -> Result<()> {
    editor.add_host(hostname)
}

/// Remove host block from hosts file. Returns whether a block was removed.
pub fn remove_host_from_hosts(editor: &dyn HostsEditor, hostname: &str) -> Result<bool> {
    editor.remove_host(hostname)
}

/// Check if hosts file has a block for `hostname`.
pub fn host_in_hosts(editor: &dyn HostsEditor, hostname: &str) -> Result<bool> {
    editor.has_host(hostname)
}
