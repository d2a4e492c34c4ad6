//! PDF attachment checks run before an order is submitted.
//!
//! Attachments travel base64-encoded, so a batch must fit the total limit
//! both as-is and after the ~33% encoding overhead.

use cdg_core::settings::UploadSettings;
use cdg_core::utilities::data_formatters::format_file_size;
use serde::Serialize;
use thiserror::Error;

const ALLOWED_TYPES: [&str; 1] = ["application/pdf"];
const ALLOWED_EXTENSIONS: [&str; 1] = [".pdf"];

/// What the form knows about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as chosen by the user.
    pub name: String,
    /// MIME type reported by the browser, possibly empty.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl UploadedFile {
    /// Describe a file.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Return `true` if the MIME type or the extension says PDF.
    pub fn is_pdf(&self) -> bool {
        let name = self.name.to_lowercase();
        ALLOWED_TYPES.contains(&self.mime_type.as_str())
            || ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

/// Why a single file was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// Neither the MIME type nor the extension is PDF.
    #[error("Apenas arquivos PDF são permitidos")]
    NotPdf,

    /// The file exceeds the per-file limit.
    #[error("Arquivo muito grande. Tamanho máximo: {}. Tamanho atual: {}", size_label(.max), size_label(.size))]
    TooLarge {
        /// Size of the file.
        size: u64,
        /// Per-file limit.
        max: u64,
    },
}

/// Why a batch was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    /// No file was selected.
    #[error("Pelo menos um arquivo PDF é obrigatório")]
    Empty,

    /// One message per problem, file errors first, joined with `"; "`.
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The batch fits as-is but not once base64-encoded.
    #[error("Após conversão para base64, os arquivos ficarão muito grandes. Tamanho estimado: {}. Máximo: {}", size_label(.estimated), size_label(.max))]
    EncodedTooLarge {
        /// Estimated encoded size.
        estimated: u64,
        /// Total limit.
        max: u64,
    },
}

/// An accepted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadPlan {
    /// Sum of the file sizes.
    pub total_size: u64,
    /// Estimated size once base64-encoded.
    pub estimated_size: u64,
}

/// Limits as shown next to the file picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLimits {
    /// Per-file limit in bytes.
    pub max_file_size: u64,
    /// Batch limit in bytes.
    pub max_total_size: u64,
    /// Accepted MIME types.
    pub allowed_types: Vec<&'static str>,
    /// Accepted extensions.
    pub allowed_extensions: Vec<&'static str>,
    /// `max_file_size` formatted.
    pub max_file_size_formatted: String,
    /// `max_total_size` formatted.
    pub max_total_size_formatted: String,
}

/// `ceil(size * 1.33)`, saturating.
pub fn estimate_base64_size(size: u64) -> u64 {
    let scaled = u128::from(size) * 133;
    u64::try_from(scaled.div_ceil(100)).unwrap_or(u64::MAX)
}

/// Applies [`UploadSettings`] to selected files.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadValidator {
    settings: UploadSettings,
}

impl UploadValidator {
    /// Validator enforcing the given limits.
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    /// The limits in a renderable form.
    pub fn limits(&self) -> FileLimits {
        FileLimits {
            max_file_size: self.settings.max_file_size,
            max_total_size: self.settings.max_total_size,
            allowed_types: ALLOWED_TYPES.to_vec(),
            allowed_extensions: ALLOWED_EXTENSIONS.to_vec(),
            max_file_size_formatted: format_file_size(self.settings.max_file_size),
            max_total_size_formatted: format_file_size(self.settings.max_total_size),
        }
    }

    /// Check one file: type first, then size.
    pub fn validate_single_file(&self, file: &UploadedFile) -> Result<(), FileRejection> {
        if !file.is_pdf() {
            return Err(FileRejection::NotPdf);
        }
        if file.size > self.settings.max_file_size {
            return Err(FileRejection::TooLarge {
                size: file.size,
                max: self.settings.max_file_size,
            });
        }
        Ok(())
    }

    /// Check every file and the total size of the accepted ones.
    ///
    /// Returns the total size on success.
    pub fn validate_batch(&self, files: &[UploadedFile]) -> Result<u64, UploadRejection> {
        if files.is_empty() {
            return Err(UploadRejection::Empty);
        }
        let mut total: u64 = 0;
        let mut errors = Vec::new();
        for (i, file) in files.iter().enumerate() {
            match self.validate_single_file(file) {
                Ok(()) => total = total.saturating_add(file.size),
                Err(e) => errors.push(format!("Arquivo {}: {e}", i + 1)),
            }
        }
        if total > self.settings.max_total_size {
            errors.push(format!(
                "Tamanho total dos arquivos muito grande. Máximo: {}. Total atual: {}",
                format_file_size(self.settings.max_total_size),
                format_file_size(total)
            ));
        }
        if !errors.is_empty() {
            log::debug!("upload batch rejected with {} error(s)", errors.len());
            return Err(UploadRejection::Invalid(errors));
        }
        Ok(total)
    }

    /// [`validate_batch`](Self::validate_batch), then the base64 estimate
    /// against the total limit.
    pub fn validate_for_upload(&self, files: &[UploadedFile]) -> Result<UploadPlan, UploadRejection> {
        let total_size = self.validate_batch(files)?;
        let estimated_size = estimate_base64_size(total_size);
        if estimated_size > self.settings.max_total_size {
            return Err(UploadRejection::EncodedTooLarge {
                estimated: estimated_size,
                max: self.settings.max_total_size,
            });
        }
        Ok(UploadPlan {
            total_size,
            estimated_size,
        })
    }
}
