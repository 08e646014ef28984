//! BFHLエンドポイントへの送信
//!
//! multipart/form-data を1回POSTする。リトライなし。
//! トランスポート異常と非2xx応答は区別せず Error::Transfer に畳む

use bfhl_client_common::{decode_response, BfhlResponse, Error, Result, SubmissionParts};
use reqwest::multipart::{Form, Part};

/// BFHL APIクライアント
pub struct BfhlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BfhlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// フォームを送信して応答をデコードする
    ///
    /// # Arguments
    /// * `parts` - 検証済みの送信ペイロード
    ///
    /// # Returns
    /// * `Ok(SubmitResponse)` - 生ボディとデコード済み応答
    /// * `Err(Error::Transfer)` - 送信失敗または非2xx応答
    /// * `Err(Error::DecodeResponse)` - 2xxだがボディが契約と食い違う
    pub async fn submit(&self, parts: SubmissionParts) -> Result<SubmitResponse> {
        let form = build_form(parts)?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transfer(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;
        let decoded = decode_response(&body)?;

        Ok(SubmitResponse { body, decoded })
    }
}

/// 送信結果
#[derive(Debug)]
pub struct SubmitResponse {
    /// サーバが返したボディ（整形前の生テキスト）
    pub body: String,
    /// デコード済み応答
    pub decoded: BfhlResponse,
}

/// 送信ペイロードをmultipartフォームに組み立てる
///
/// パート構成:
/// - `data`: 再シリアライズ済みのJSON配列（常に送る）
/// - `file_b64`: Base64文字列（空でも送る）
/// - `image`: 添付画像（ないときはパートごと省略）
fn build_form(parts: SubmissionParts) -> Result<Form> {
    let mut form = Form::new()
        .text("data", parts.data_json)
        .text("file_b64", parts.file_b64);

    if let Some(image) = parts.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| Error::Transfer(e.to_string()))?;
        form = form.part("image", part);
    }

    Ok(form)
}
