//! Design-file upload with click-to-browse and drag-and-drop.
//!
//! Files are screened client-side only; nothing is transferred. Size is
//! checked before the extension, so an oversized file with a bad extension
//! reports the size problem.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use thiserror::Error;

use crate::components::toast::{Severity, Toasts};

/// 50 MB, binary.
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: [&str; 7] = ["pdf", "png", "jpg", "jpeg", "ai", "psd", "svg"];

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum FileRejection {
    #[error("File {name} is too large. Maximum size is 50MB.")]
    TooLarge { name: String },
    #[error("File type .{extension} is not allowed.")]
    BadExtension { extension: String },
}

fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Size first, then extension. The extension check is case-insensitive.
pub fn check_file(name: &str, size: u64) -> Result<(), FileRejection> {
    if size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge {
            name: name.to_string(),
        });
    }
    let extension = extension_of(name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FileRejection::BadExtension { extension });
    }
    Ok(())
}

/// Human-readable size with binary units and up to two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

/// A file accepted by the screen, awaiting a real backend.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
}

#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    pub files: Signal<Vec<PendingFile>>,
}

/// Dropzone plus a hidden file input. Accepted files land in the `files`
/// signal; rejected ones raise an error toast and are skipped.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut files = props.files;
    let mut toasts = use_context::<Toasts>();
    let mut drag_active = use_signal(|| false);

    // captures only Copy handles, so each event handler gets its own copy
    let accept_engine = move |engine: std::sync::Arc<dyn dioxus::html::FileEngine>| {
        spawn(async move {
            for name in engine.files() {
                let size = engine.file_size(&name).await.unwrap_or(0);
                match check_file(&name, size) {
                    Ok(()) => files.write().push(PendingFile { name, size }),
                    Err(rejection) => toasts.push(rejection.to_string(), Severity::Error),
                }
            }
        });
    };

    rsx! {
        div {
            class: if drag_active() { "upload-dropzone drag-over" } else { "upload-dropzone" },
            ondragover: move |evt| {
                evt.prevent_default();
                drag_active.set(true);
            },
            ondragleave: move |_| drag_active.set(false),
            ondrop: move |evt| {
                evt.prevent_default();
                drag_active.set(false);
                if let Some(engine) = evt.files() {
                    accept_engine(engine);
                }
            },
            i { class: "fas fa-cloud-upload-alt" }
            p { "Drag & drop your design files here, or" }
            label {
                class: "upload-browse",
                "browse"
                input {
                    r#type: "file",
                    multiple: true,
                    style: "display: none;",
                    accept: ".pdf,.png,.jpg,.jpeg,.ai,.psd,.svg",
                    onchange: move |evt| {
                        if let Some(engine) = evt.files() {
                            accept_engine(engine);
                        }
                    },
                }
            }
            small { "PDF, PNG, JPG, AI, PSD or SVG, up to 50MB each" }
        }
        if !files.read().is_empty() {
            ul {
                class: "upload-list",
                for (index, file) in files.read().iter().cloned().enumerate() {
                    li {
                        key: "{file.name}-{index}",
                        span { "{file.name}" }
                        small { "{format_file_size(file.size)}" }
                        button {
                            class: "upload-remove",
                            onclick: move |_| {
                                files.write().remove(index);
                            },
                            "\u{00D7}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executables_are_rejected_by_extension() {
        assert_eq!(
            check_file("malware.exe", 1024),
            Err(FileRejection::BadExtension {
                extension: "exe".to_string()
            })
        );
        assert_eq!(
            check_file("malware.exe", 1024).unwrap_err().to_string(),
            "File type .exe is not allowed."
        );
    }

    #[test]
    fn oversized_files_report_size_before_extension() {
        let sixty_mb = 60 * 1024 * 1024;
        assert_eq!(
            check_file("huge.exe", sixty_mb),
            Err(FileRejection::TooLarge {
                name: "huge.exe".to_string()
            })
        );
        assert_eq!(
            check_file("big.pdf", sixty_mb).unwrap_err().to_string(),
            "File big.pdf is too large. Maximum size is 50MB."
        );
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(check_file("logo.PNG", 10), Ok(()));
        assert_eq!(check_file("artwork.Ai", 10), Ok(()));
        assert!(check_file("noextension", 10).is_err());
    }

    #[test]
    fn boundary_size_is_accepted() {
        assert_eq!(check_file("exact.pdf", MAX_FILE_BYTES), Ok(()));
        assert!(check_file("over.pdf", MAX_FILE_BYTES + 1).is_err());
    }

    #[test]
    fn sizes_format_with_binary_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50 MB");
    }
}
