use super::domain::{SelectedFile, UploadType};
use mime::Mime;
use serde::Serialize;

pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_AUDIO_BYTES: u64 = 100 * 1024 * 1024;
pub const DOCUMENT_EXTENSIONS: [&str; 3] = ["docx", "pdf", "txt"];

/// What the picker accepts and what the user is told about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadHint {
    pub accept: &'static str,
    pub summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
}

pub const fn hint_for(upload_type: UploadType) -> Option<UploadHint> {
    match upload_type {
        UploadType::Text => None,
        UploadType::File => Some(UploadHint {
            accept: ".docx, .pdf, .txt",
            summary: "Supports .docx, .pdf, .txt (max 10MB)",
            max_bytes: Some(MAX_DOCUMENT_BYTES),
        }),
        UploadType::Audio => Some(UploadHint {
            accept: "audio/*",
            summary: "Supports MP3, WAV (max 100MB)",
            max_bytes: Some(MAX_AUDIO_BYTES),
        }),
        UploadType::Video => Some(UploadHint {
            accept: "video/*",
            summary: "Supports MP4, YouTube URLs",
            max_bytes: None,
        }),
    }
}

fn mime_of(file: &SelectedFile) -> Option<Mime> {
    file.mime_type.as_deref()?.trim().parse().ok()
}

/// Picker-level acceptance by extension or MIME type. File contents are never read.
pub fn accepts(upload_type: UploadType, file: &SelectedFile) -> bool {
    match upload_type {
        UploadType::Text => false,
        UploadType::File => file
            .extension()
            .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false),
        UploadType::Audio => mime_of(file)
            .map(|mime| mime.type_() == mime::AUDIO)
            .unwrap_or(false),
        UploadType::Video => mime_of(file)
            .map(|mime| mime.type_() == mime::VIDEO)
            .unwrap_or(false),
    }
}

/// Documents are shown in KB, recordings in MB.
pub fn display_size(upload_type: UploadType, size_bytes: u64) -> String {
    let bytes = size_bytes as f64;
    match upload_type {
        UploadType::Text | UploadType::File => format!("{:.1} KB", bytes / 1024.0),
        UploadType::Audio | UploadType::Video => {
            format!("{:.2} MB", bytes / (1024.0 * 1024.0))
        }
    }
}

/// Advisory only; oversized files are still accepted.
pub fn size_warning(upload_type: UploadType, file: &SelectedFile) -> Option<String> {
    let hint = hint_for(upload_type)?;
    let max = hint.max_bytes?;
    (file.size_bytes > max).then(|| {
        format!(
            "{} is {}, larger than the suggested maximum of {}",
            file.name,
            display_size(upload_type, file.size_bytes),
            display_size(upload_type, max)
        )
    })
}

/// Waveform widget settings, built when an audio file is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveformPreview {
    pub source_name: String,
    pub wave_color: &'static str,
    pub progress_color: &'static str,
    pub cursor_color: &'static str,
    pub bar_width: u8,
    pub bar_radius: u8,
    pub bar_gap: u8,
    pub cursor_width: u8,
    pub height: u16,
}

impl WaveformPreview {
    pub fn for_file(file: &SelectedFile) -> Self {
        Self {
            source_name: file.name.clone(),
            wave_color: "#4F46E5",
            progress_color: "#818CF8",
            cursor_color: "#C7D2FE",
            bar_width: 2,
            bar_radius: 3,
            bar_gap: 3,
            cursor_width: 1,
            height: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: Option<&str>) -> SelectedFile {
        SelectedFile::new(name, 2048, mime.map(str::to_string))
    }

    #[test]
    fn documents_are_matched_by_extension() {
        assert!(accepts(UploadType::File, &file("Sermon.DOCX", None)));
        assert!(accepts(UploadType::File, &file("notes.txt", Some("text/plain"))));
        assert!(!accepts(UploadType::File, &file("sermon.mp3", Some("audio/mpeg"))));
        assert!(!accepts(UploadType::File, &file("README", None)));
    }

    #[test]
    fn recordings_are_matched_by_mime_type() {
        assert!(accepts(UploadType::Audio, &file("a.wav", Some("audio/wav"))));
        assert!(!accepts(UploadType::Audio, &file("a.mp4", Some("video/mp4"))));
        assert!(accepts(UploadType::Video, &file("a.mp4", Some("video/mp4"))));
        assert!(!accepts(UploadType::Video, &file("a.mp4", None)));
        assert!(!accepts(UploadType::Text, &file("a.txt", Some("text/plain"))));
    }

    #[test]
    fn sizes_render_per_upload_type() {
        assert_eq!(display_size(UploadType::File, 2048), "2.0 KB");
        assert_eq!(display_size(UploadType::Audio, 5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn oversized_documents_only_warn() {
        let big = SelectedFile::new("book.pdf", MAX_DOCUMENT_BYTES + 1, None);
        assert!(accepts(UploadType::File, &big));
        assert!(size_warning(UploadType::File, &big).is_some());
        assert!(size_warning(UploadType::Video, &big).is_none());
    }
}
