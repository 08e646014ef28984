//! 送受信データの型定義
//!
//! CLIとデスクトップアプリで共有される型:
//! - SubmissionParts: multipartフォームとして送る内容
//! - ImageAttachment: 添付画像（ファイル名・MIME・バイト列）
//! - BfhlResponse: サーバ応答（欠損フィールド許容）

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};

/// 添付画像
///
/// multipartの `image` パートとして送信される。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// ファイルを読み込んで添付画像を作る
    ///
    /// MIMEタイプは拡張子から推定し、判定できなければ
    /// application/octet-stream として送る。
    ///
    /// # Arguments
    /// * `path` - 画像ファイルのパス
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self {
            file_name,
            mime_type: mime_from_extension(path).to_string(),
            bytes,
        })
    }
}

/// 拡張子からMIMEタイプを推定
fn mime_from_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// 送信ペイロード
///
/// 検証済み入力から組み立てる。`data` は検証済み配列の再シリアライズで、
/// 入力テキストの空白や改行はここで正規化される。`file_b64` は空文字でも
/// 必ず送り、`image` は未選択ならパートごと省略する。
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionParts {
    pub data_json: String,
    pub file_b64: String,
    pub image: Option<ImageAttachment>,
}

impl SubmissionParts {
    /// 検証済みの `data` 配列から送信パートを組み立てる
    ///
    /// # Arguments
    /// * `data` - [`crate::parser::parse_data_array`] が返した配列
    /// * `file_b64` - `file_b64` パートに入れる文字列（未入力なら空文字）
    /// * `image` - 添付画像（なければNone）
    pub fn build(data: &[Value], file_b64: &str, image: Option<ImageAttachment>) -> Result<Self> {
        let data_json =
            serde_json::to_string(data).map_err(|e| Error::InvalidJson(e.to_string()))?;
        Ok(Self {
            data_json,
            file_b64: file_b64.to_string(),
            image,
        })
    }
}

/// サーバ応答
///
/// 外部契約は信頼しない。期待フィールドの欠落は既定値で埋め、
/// 描画側が存在チェックなしで読める形にする。未知フィールドは無視。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BfhlResponse {
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_lowercase_alphabet: Vec<String>,

    /// 画像を送った場合だけ入る保存先パス
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// KB単位のサイズ。丸めずそのまま表示するためNumberのまま保持
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_kb: Option<serde_json::Number>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =============================================
    // ImageAttachment テスト
    // =============================================

    #[test]
    fn test_mime_from_extension_jpeg() {
        assert_eq!(mime_from_extension(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("photo.JPEG")), "image/jpeg");
    }

    #[test]
    fn test_mime_from_extension_png() {
        assert_eq!(mime_from_extension(Path::new("/tmp/shot.png")), "image/png");
    }

    #[test]
    fn test_mime_from_extension_unknown() {
        assert_eq!(
            mime_from_extension(Path::new("data.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_from_extension(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_image_attachment_from_path() {
        let dir = tempfile::tempdir().expect("一時ディレクトリ作成失敗");
        let path = dir.path().join("attachment.png");
        std::fs::write(&path, b"fake png bytes").expect("テスト画像の書き込み失敗");

        let attachment = ImageAttachment::from_path(&path).expect("読み込み失敗");
        assert_eq!(attachment.file_name, "attachment.png");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.bytes, b"fake png bytes");
    }

    #[test]
    fn test_image_attachment_missing_file() {
        let result = ImageAttachment::from_path(Path::new("/nonexistent/zzz.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    // =============================================
    // SubmissionParts テスト
    // =============================================

    #[test]
    fn test_build_reserializes_data() {
        let data = vec![json!(1), json!(2), json!("a"), json!("z")];
        let parts = SubmissionParts::build(&data, "", None).expect("組み立て失敗");
        assert_eq!(parts.data_json, r#"[1,2,"a","z"]"#);
    }

    #[test]
    fn test_build_empty_array() {
        let parts = SubmissionParts::build(&[], "", None).expect("組み立て失敗");
        assert_eq!(parts.data_json, "[]");
    }

    #[test]
    fn test_build_keeps_file_b64_even_when_empty() {
        let parts = SubmissionParts::build(&[json!(1)], "", None).expect("組み立て失敗");
        assert_eq!(parts.file_b64, "");
    }

    #[test]
    fn test_build_with_file_b64() {
        let parts = SubmissionParts::build(&[], "aGVsbG8=", None).expect("組み立て失敗");
        assert_eq!(parts.file_b64, "aGVsbG8=");
    }

    #[test]
    fn test_build_without_image() {
        let parts = SubmissionParts::build(&[json!("x")], "", None).expect("組み立て失敗");
        assert!(parts.image.is_none());
    }

    #[test]
    fn test_build_with_image() {
        let image = ImageAttachment {
            file_name: "a.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let parts = SubmissionParts::build(&[], "", Some(image.clone())).expect("組み立て失敗");
        assert_eq!(parts.image, Some(image));
    }

    // =============================================
    // BfhlResponse テスト
    // =============================================

    #[test]
    fn test_response_deserialize_full() {
        let body = r#"{
            "numbers": ["1", "2"],
            "alphabets": ["a", "z"],
            "highest_lowercase_alphabet": ["z"],
            "file_path": "/uploads/x.png",
            "file_size_kb": 12.5
        }"#;
        let response: BfhlResponse = serde_json::from_str(body).expect("デシリアライズ失敗");
        assert_eq!(response.numbers, vec!["1", "2"]);
        assert_eq!(response.alphabets, vec!["a", "z"]);
        assert_eq!(response.highest_lowercase_alphabet, vec!["z"]);
        assert_eq!(response.file_path.as_deref(), Some("/uploads/x.png"));
        assert_eq!(
            response.file_size_kb.map(|n| n.to_string()),
            Some("12.5".to_string())
        );
    }

    #[test]
    fn test_response_deserialize_missing_fields() {
        let response: BfhlResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(response.numbers.is_empty());
        assert!(response.alphabets.is_empty());
        assert!(response.highest_lowercase_alphabet.is_empty());
        assert!(response.file_path.is_none());
        assert!(response.file_size_kb.is_none());
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"is_success": true, "user_id": "x_01011999", "numbers": ["7"]}"#;
        let response: BfhlResponse = serde_json::from_str(body).expect("デシリアライズ失敗");
        assert_eq!(response.numbers, vec!["7"]);
    }

    #[test]
    fn test_response_file_size_kb_integer_stays_integer() {
        let response: BfhlResponse =
            serde_json::from_str(r#"{"file_size_kb": 34}"#).expect("デシリアライズ失敗");
        assert_eq!(
            response.file_size_kb.map(|n| n.to_string()),
            Some("34".to_string())
        );
    }

    #[test]
    fn test_response_serialize_omits_absent_options() {
        let response = BfhlResponse::default();
        let json = serde_json::to_string(&response).expect("シリアライズ失敗");
        assert!(!json.contains("file_path"));
        assert!(!json.contains("file_size_kb"));
    }
}
