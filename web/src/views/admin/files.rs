//! File manager: upload via the browser file picker, list, delete.

use api::StoredFile;
use base64::Engine;
use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;

#[component]
pub fn AdminFiles() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Files",
                FilesBody {}
            }
        }
    }
}

fn format_size(bytes: i64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn guess_mime(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") | Some("md") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[component]
fn FilesBody() -> Element {
    let mut files = use_signal(Vec::<StoredFile>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);
    let mut description = use_signal(String::new);
    let mut uploading = use_signal(|| false);

    let _ = use_resource(move || async move {
        let token = session::load_token().unwrap_or_default();
        match api::uploads::admin_list_files(token).await {
            Ok(list) => files.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    let onchange = move |event: FormEvent| {
        let Some(file_engine) = event.files() else {
            return;
        };
        let Some(name) = file_engine.files().first().cloned() else {
            return;
        };

        spawn(async move {
            uploading.set(true);
            error.set(None);

            let Some(bytes) = file_engine.read_file(&name).await else {
                error.set(Some("Could not read the selected file".to_string()));
                uploading.set(false);
                return;
            };

            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            let token = session::load_token().unwrap_or_default();
            let desc = Some(description()).filter(|d| !d.trim().is_empty());

            match api::uploads::upload_file(
                token,
                name.clone(),
                guess_mime(&name).to_string(),
                encoded,
                desc,
            )
            .await
            {
                Ok(stored) => {
                    files.write().insert(0, stored);
                    description.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    let mut delete = move |id: String| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::uploads::delete_file(id.clone(), token).await {
                Ok(()) => files.write().retain(|f| f.id != id),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "upload-form",
            label { "Description (optional)"
                input {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
            }
            label {
                class: "button primary",
                if uploading() { "Uploading…" } else { "Choose file" }
                input {
                    r#type: "file",
                    style: "display: none;",
                    disabled: uploading(),
                    onchange,
                }
            }
        }

        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        if !loaded() {
            p { class: "muted", "Loading…" }
        } else if files().is_empty() {
            p { class: "muted", "No files uploaded yet." }
        } else {
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "File" }
                        th { "Size" }
                        th { "Type" }
                        th { "Uploaded" }
                        th { "" }
                    }
                }
                tbody {
                    for file in files() {
                        tr {
                            key: "{file.id}",
                            td {
                                a {
                                    href: "/uploads/{file.filename}",
                                    target: "_blank",
                                    "{file.original_filename}"
                                }
                                if let Some(desc) = &file.description {
                                    p { class: "muted", "{desc}" }
                                }
                            }
                            td { {format_size(file.file_size)} }
                            td { class: "muted", "{file.mime_type}" }
                            td { class: "muted", "{file.uploaded_at}" }
                            td {
                                button {
                                    class: "button small danger",
                                    onclick: {
                                        let id = file.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
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
    fn sizes_format_by_magnitude() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn mime_guessing_is_case_insensitive() {
        assert_eq!(guess_mime("photo.PNG"), "image/png");
        assert_eq!(guess_mime("notes.md"), "text/plain");
        assert_eq!(guess_mime("mystery"), "application/octet-stream");
    }
}
