//! 手动上传的房源数据预览
//!
//! 只在本地展示，不会发送到后端。

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Csv,
    Image,
    Other,
}

impl FileKind {
    /// 按 MIME 类型判断；部分浏览器对 CSV/JSON 不给类型，此时看扩展名
    pub fn detect(mime: &str, name: &str) -> Self {
        match mime {
            "application/json" => return FileKind::Json,
            "text/csv" => return FileKind::Csv,
            m if m.starts_with("image/") => return FileKind::Image,
            "" => {}
            _ => return FileKind::Other,
        }

        let ext = name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => FileKind::Json,
            Some("csv") => FileKind::Csv,
            _ => FileKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Unsupported file type")]
    Unsupported,
    #[error("Invalid file format")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPreview {
    /// 格式化后的 JSON
    Json(String),
    Csv(Vec<Vec<String>>),
    /// Object URL
    Image(String),
}

impl UploadPreview {
    /// 解析文本类文件
    pub fn from_text(kind: FileKind, text: &str) -> Result<Self, UploadError> {
        match kind {
            FileKind::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(text).map_err(|_| UploadError::Invalid)?;
                serde_json::to_string_pretty(&value)
                    .map(UploadPreview::Json)
                    .map_err(|_| UploadError::Invalid)
            }
            FileKind::Csv => Ok(UploadPreview::Csv(
                text.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.split(',').map(str::to_string).collect())
                    .collect(),
            )),
            FileKind::Image | FileKind::Other => Err(UploadError::Unsupported),
        }
    }
}

#[component]
pub fn UploadPreviewPanel(preview: UploadPreview) -> impl IntoView {
    let body = match preview {
        UploadPreview::Json(pretty) => view! {
            <pre class="whitespace-pre-wrap text-xs md:text-sm">{pretty}</pre>
        }
        .into_any(),
        UploadPreview::Csv(rows) => view! {
            <div class="overflow-x-auto">
                <table class="table table-xs">
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
        UploadPreview::Image(src) => view! {
            <img class="max-h-64 rounded-lg mx-auto" src=src alt="Uploaded property" />
        }
        .into_any(),
    };

    view! {
        <div class="mt-4 p-4 bg-base-200 rounded-xl text-left text-sm">
            <strong>"Uploaded Data Preview:"</strong>
            <div class="mt-2">{body}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime_then_extension() {
        assert_eq!(FileKind::detect("application/json", "x.bin"), FileKind::Json);
        assert_eq!(FileKind::detect("image/png", "photo"), FileKind::Image);
        assert_eq!(FileKind::detect("", "listing.CSV"), FileKind::Csv);
        assert_eq!(FileKind::detect("", "notes"), FileKind::Other);
        assert_eq!(FileKind::detect("application/pdf", "brochure.json"), FileKind::Other);
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let preview = UploadPreview::from_text(FileKind::Json, r#"{"rooms":4}"#).unwrap();
        assert_eq!(preview, UploadPreview::Json("{\n  \"rooms\": 4\n}".to_string()));
    }

    #[test]
    fn test_invalid_json() {
        let err = UploadPreview::from_text(FileKind::Json, "{rooms").unwrap_err();
        assert_eq!(err, UploadError::Invalid);
        assert_eq!(err.to_string(), "Invalid file format");
    }

    #[test]
    fn test_csv_rows() {
        let preview = UploadPreview::from_text(FileKind::Csv, "title,price\r\nVilla,100\n\n").unwrap();
        assert_eq!(
            preview,
            UploadPreview::Csv(vec![
                vec!["title".to_string(), "price".to_string()],
                vec!["Villa".to_string(), "100".to_string()],
            ])
        );
    }

    #[test]
    fn test_other_is_unsupported() {
        let err = UploadPreview::from_text(FileKind::Other, "").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type");
    }
}
