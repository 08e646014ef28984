//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 入力検証・送信・応答デコードの失敗を1つの型で表す。
/// 画面に出す固定文言は [`Error::user_message`] から取得する。
#[derive(Error, Debug)]
pub enum Error {
    /// 入力テキストがJSONとして解釈できない
    #[error("JSON parse error: {0}")]
    InvalidJson(String),

    /// JSONとしては妥当だが `data` が配列ではない（欠落・null含む)
    #[error("`data` field is not an array")]
    DataNotArray,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 送信失敗。トランスポート異常と非2xx応答を区別しない
    #[error("transfer error: {0}")]
    Transfer(String),

    /// 2xx応答のボディが期待した形にデコードできない
    #[error("response decode error: {0}")]
    DecodeResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 画面表示用の固定メッセージ
    ///
    /// 検証エラーは原因別の文言、それ以外はすべて同一の汎用文言に
    /// 畳む（サーバ都合の詳細を利用者に見せない）。
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "Invalid JSON format.",
            Error::DataNotArray => "Input data must be an array.",
            Error::Io(_) | Error::Transfer(_) | Error::DecodeResponse(_) | Error::Config(_) => {
                "Invalid input or server error"
            }
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
