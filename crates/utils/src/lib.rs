// utils crate

pub mod drafts;
pub mod format;

use models::UploadCandidate;
use std::io;
use std::path::Path;

pub use drafts::DraftStore;
pub use format::{format_amount, format_date};

/// A navigation link is highlighted when it points at the page being shown.
pub fn is_active_link(href: &str, current_path: &str) -> bool {
    href == current_path
}

/// Describe a file on disk the way the upload form sees it: bare file name
/// plus size in bytes.
pub fn upload_candidate(path: &Path) -> io::Result<UploadCandidate> {
    let metadata = path.metadata()?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }

    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(UploadCandidate::new(file_name, metadata.len()))
}
