//! BFHL APIフォーム送信クライアント
//!
//! 入力JSONの検証、multipart/form-data送信、応答のフィルタ表示を行う

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use error::{BfhlClientError, Result};
