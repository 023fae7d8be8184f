use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use serde::Serialize;

use crate::constants::MAX_RESUME_BYTES;
use crate::errors::UploadError;

#[derive(Debug, MultipartForm)]
pub struct ResumeUploadForm {
    #[multipart(rename = "resume", limit = "5MB")]
    pub resume: TempFile,
}

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Doc,
    Docx,
}

impl ResumeKind {
    fn from_extension(file_name: &str) -> Result<Self, UploadError> {
        let extension = file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != file_name)
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(ResumeKind::Pdf),
            "doc" => Ok(ResumeKind::Doc),
            "docx" => Ok(ResumeKind::Docx),
            other => Err(UploadError::UnsupportedType(other.to_string())),
        }
    }

    /// Sniffed content must belong to the claimed document family; the
    /// extension alone is not trusted.
    fn content_matches(self, data: &[u8]) -> bool {
        let Some(detected) = infer::get(data) else {
            return false;
        };

        match self {
            ResumeKind::Pdf => detected.mime_type() == "application/pdf",
            ResumeKind::Doc => matches!(
                detected.mime_type(),
                "application/msword" | "application/x-ole-storage"
            ),
            ResumeKind::Docx => matches!(detected.mime_type(), m if m == DOCX_MIME || m == "application/zip"),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeKind::Pdf => "pdf",
            ResumeKind::Doc => "doc",
            ResumeKind::Docx => "docx",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ResumeKind::Pdf => "application/pdf",
            ResumeKind::Doc => "application/msword",
            ResumeKind::Docx => DOCX_MIME,
        }
    }
}

/// A resume document received from a form, checked entirely in-process
/// before any storage call is attempted.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl ResumeUpload {
    pub fn validate(&self) -> Result<ResumeKind, UploadError> {
        if self.data.len() > MAX_RESUME_BYTES {
            return Err(UploadError::TooLarge {
                size: self.data.len(),
                limit: MAX_RESUME_BYTES,
            });
        }

        let kind = ResumeKind::from_extension(&self.file_name)?;

        if !kind.content_matches(&self.data) {
            return Err(UploadError::UnsupportedType(format!(
                "content does not look like a {} document",
                kind.extension()
            )));
        }

        Ok(kind)
    }
}

#[derive(Debug, Serialize)]
pub struct StoredResume {
    pub resume_url: String,
}
