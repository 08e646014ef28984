//! 入力検証と応答デコード
//!
//! 送信前はフォームのJSONテキストから `data` 配列を取り出し、
//! 受信後はサーバ応答ボディを BfhlResponse にデコードする

use crate::error::{Error, Result};
use crate::types::BfhlResponse;
use serde_json::Value;

/// 入力テキストから `data` 配列を取り出す
///
/// 検証は2段階:
/// 1. JSONとしてパースできること
/// 2. トップレベルに `data` があり、値が配列であること
///
/// 配列の要素は検証しない（数値・文字列・ネストも不透明な値として通す）。
///
/// # Arguments
/// * `input` - フォームに入力された生テキスト
///
/// # Returns
/// * `Ok(Vec<Value>)` - 検証済みの `data` 配列
/// * `Err(Error::InvalidJson)` - JSONとして解釈できない
/// * `Err(Error::DataNotArray)` - `data` が欠落・null・配列以外
///
/// # Examples
/// ```
/// use bfhl_client_common::parse_data_array;
///
/// let values = parse_data_array(r#"{"data": [1, 2, "a"]}"#).unwrap();
/// assert_eq!(values.len(), 3);
/// ```
pub fn parse_data_array(input: &str) -> Result<Vec<Value>> {
    let parsed: Value =
        serde_json::from_str(input).map_err(|e| Error::InvalidJson(e.to_string()))?;

    match parsed.get("data") {
        Some(Value::Array(items)) => Ok(items.clone()),
        _ => Err(Error::DataNotArray),
    }
}

/// サーバ応答ボディをデコード
///
/// 2xx応答のボディを強い型に落とす。欠損フィールドは
/// [`BfhlResponse`] 側の既定値で埋まるため、ここで失敗するのは
/// ボディがJSONでないか、フィールドの型が契約と食い違う場合だけ。
///
/// # Arguments
/// * `body` - 応答ボディの生テキスト
///
/// # Returns
/// * `Ok(BfhlResponse)` - デコード成功
/// * `Err(Error::DecodeResponse)` - デコード失敗
pub fn decode_response(body: &str) -> Result<BfhlResponse> {
    serde_json::from_str(body).map_err(|e| Error::DecodeResponse(e.to_string()))
}
