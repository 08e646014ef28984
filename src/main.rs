use base64::{engine::general_purpose::STANDARD, Engine as _};
use bfhl_client_common::{parse_data_array, Config, ImageAttachment, SubmissionParts};
use bfhl_client_rust::{cli, client, error, output};
use clap::Parser;
use cli::{Cli, Commands};
use error::{BfhlClientError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Submit { input, file_b64, file_b64_from, image, filter, raw_only, endpoint } => {
            println!("📤 bfhl-client - フォーム送信\n");

            // 1. 入力検証
            println!("[1/3] 入力を検証中...");
            if !input.exists() {
                return Err(BfhlClientError::InputNotFound(input.display().to_string()));
            }
            let text = std::fs::read_to_string(&input)?;
            let values = parse_data_array(&text)?;
            println!("✔ data配列 {}件\n", values.len());

            // 2. ペイロード組み立て
            let file_b64 = match file_b64_from {
                Some(path) => {
                    if !path.exists() {
                        return Err(BfhlClientError::InputNotFound(path.display().to_string()));
                    }
                    STANDARD.encode(std::fs::read(&path)?)
                }
                None => file_b64,
            };

            let attachment = match image {
                Some(path) => {
                    if !path.exists() {
                        return Err(BfhlClientError::InputNotFound(path.display().to_string()));
                    }
                    Some(ImageAttachment::from_path(&path)?)
                }
                None => None,
            };

            let parts = SubmissionParts::build(&values, &file_b64, attachment)?;

            let endpoint = match endpoint {
                Some(url) => url,
                None => config.resolve_endpoint(),
            };
            if endpoint.trim().is_empty() {
                return Err(BfhlClientError::Config("エンドポイントが空です".into()));
            }

            if cli.verbose {
                println!("  エンドポイント: {}", endpoint);
                println!("  dataパート: {}", parts.data_json);
                println!("  file_b64パート: {}文字", parts.file_b64.len());
                match &parts.image {
                    Some(image) => println!(
                        "  imageパート: {} ({}, {} bytes)",
                        image.file_name, image.mime_type, image.bytes.len()
                    ),
                    None => println!("  imageパート: なし"),
                }
                println!();
            }

            // 3. 送信
            println!("[2/3] 送信中...");
            let client = client::BfhlClient::new(endpoint);
            let result = client.submit(parts).await?;
            println!("✔ 送信完了\n");

            // 4. 表示
            println!("[3/3] 応答を表示\n");
            output::print_response(&result.body, &result.decoded, &filter, raw_only)?;

            println!("\n✅ 完了");
        }

        Commands::Validate { input } => {
            println!("🔎 bfhl-client - 入力検証\n");

            if !input.exists() {
                return Err(BfhlClientError::InputNotFound(input.display().to_string()));
            }
            let text = std::fs::read_to_string(&input)?;
            let values = parse_data_array(&text)?;
            let parts = SubmissionParts::build(&values, "", None)?;

            println!("✔ 検証OK: data配列 {}件", values.len());
            println!("dataパート: {}", parts.data_json);
        }

        Commands::Config { set_endpoint, reset_endpoint, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                if url.trim().is_empty() {
                    return Err(BfhlClientError::Config("エンドポイントが空です".into()));
                }
                config.set_endpoint(url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if reset_endpoint {
                config.reset_endpoint()?;
                println!("✔ エンドポイントを既定値に戻しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.resolve_endpoint());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
