use models::UploadCandidate;
use thiserror::Error;

/// File extensions accepted for NACHA uploads, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".txt", ".ach"];

/// Largest accepted upload, 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a valid NACHA file (.txt or .ach)")]
    UnsupportedType { file_name: String },

    #[error("File size must be less than 10MB")]
    TooLarge { size_bytes: u64 },
}

/// Check a picked file before it is sent. The type check runs first.
pub fn validate_upload(candidate: &UploadCandidate) -> Result<(), UploadError> {
    let file_name = candidate.file_name.to_lowercase();
    if !ACCEPTED_EXTENSIONS
        .iter()
        .any(|extension| file_name.ends_with(extension))
    {
        return Err(UploadError::UnsupportedType {
            file_name: candidate.file_name.clone(),
        });
    }

    if candidate.size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size_bytes: candidate.size_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_nacha_extensions() {
        assert!(validate_upload(&UploadCandidate::new("payroll.ach", 940)).is_ok());
        assert!(validate_upload(&UploadCandidate::new("PAYROLL.TXT", 940)).is_ok());
        assert!(validate_upload(&UploadCandidate::new("batch.Ach", MAX_UPLOAD_BYTES)).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = validate_upload(&UploadCandidate::new("payroll.csv", 10)).unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedType {
                file_name: "payroll.csv".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Please select a valid NACHA file (.txt or .ach)"
        );

        assert!(validate_upload(&UploadCandidate::new("ach", 10)).is_err());
        assert!(validate_upload(&UploadCandidate::new("payroll.txt.gz", 10)).is_err());
    }

    #[test]
    fn test_rejects_oversized_files() {
        let err = validate_upload(&UploadCandidate::new("big.ach", MAX_UPLOAD_BYTES + 1))
            .unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));
        assert_eq!(err.to_string(), "File size must be less than 10MB");
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let err = validate_upload(&UploadCandidate::new("big.zip", u64::MAX)).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }
}
