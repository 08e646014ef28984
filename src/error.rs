use thiserror::Error;

#[derive(Error, Debug)]
pub enum BfhlClientError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルが見つかりません: {0}")]
    InputNotFound(String),

    #[error(transparent)]
    Common(#[from] bfhl_client_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BfhlClientError>;
