//! 応答の表示
//!
//! 生JSON・フィルタ行・画像詳細の順で標準出力へ並べる

use crate::error::Result;
use bfhl_client_common::{filtered_lines, image_details, BfhlResponse, FilterOption};

/// 応答を表示
///
/// 生JSONは常に出す。`raw_only` のときはそこで止め、
/// それ以外はフィルタ行と画像詳細を続ける。
pub fn print_response(
    body: &str,
    decoded: &BfhlResponse,
    filters: &[FilterOption],
    raw_only: bool,
) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    println!("サーバ応答:");
    println!("{}", serde_json::to_string_pretty(&value)?);

    if raw_only {
        return Ok(());
    }

    let lines = filtered_lines(decoded, filters);
    if !lines.is_empty() {
        println!("\nフィルタ結果:");
        for line in &lines {
            println!("  {}", line);
        }
    }

    if let Some(details) = image_details(decoded) {
        println!("\n画像詳細:");
        println!("  Image Path: {}", details.path);
        if let Some(size) = &details.size_kb {
            println!("  File Size: {} KB", size);
        }
    }

    Ok(())
}
