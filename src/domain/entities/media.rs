/// A file picked in the upload widget, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Upload progress as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UploadProgress(f64);

impl UploadProgress {
    pub const DONE: UploadProgress = UploadProgress(1.0);

    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// An empty body counts as fully sent.
    pub fn from_bytes(sent: u64, total: u64) -> Self {
        if total == 0 {
            return Self::DONE;
        }
        Self::new(sent as f64 / total as f64)
    }

    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(UploadProgress::from_bytes(1, 3).percent(), 33);
        assert_eq!(UploadProgress::from_bytes(2, 3).percent(), 67);
        assert_eq!(UploadProgress::from_bytes(0, 0).percent(), 100);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(UploadProgress::new(1.7), UploadProgress::DONE);
        assert_eq!(UploadProgress::new(-0.2).percent(), 0);
        assert_eq!(UploadProgress::new(f64::NAN).percent(), 0);
    }
}
