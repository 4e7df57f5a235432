//! Operator tool: run one Bot API call with the configured token and print the result.

use std::path::PathBuf;

use anyhow::{bail, Context};

use tgb_api::{BotClient, Download, UpdatesQuery};
use tgb_core::config::Config;

const USAGE: &str = "usage: tgb <me | webhook-info | set-webhook <url> | delete-webhook | updates [offset] | download <file_id> [dest]>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tgb_core::logging::init("tgb")?;

    let cfg = Config::load()?;
    let client = BotClient::from_config(&cfg)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["me"] => print_json(&client.get_me().await?),
        ["webhook-info"] => print_json(&client.get_webhook_info().await?),
        ["set-webhook", url] => println!("{}", client.set_webhook(url).await?.text()),
        ["delete-webhook"] => println!("{}", client.delete_webhook().await?.text()),
        ["updates", rest @ ..] => {
            let offset = match rest {
                [] => None,
                [o] => Some(o.parse::<i64>().context("offset must be an integer")?),
                _ => bail!(USAGE),
            };
            let updates = client
                .get_updates(&UpdatesQuery {
                    offset,
                    ..Default::default()
                })
                .await?;
            print_json(&updates);
        }
        ["download", file_id, rest @ ..] => {
            let dest = match rest {
                [] => {
                    tokio::fs::create_dir_all(&cfg.download_dir)
                        .await
                        .with_context(|| {
                            format!("creating {}", cfg.download_dir.display())
                        })?;
                    cfg.download_dir.join(sanitize(file_id))
                }
                [d] => PathBuf::from(d),
                _ => bail!(USAGE),
            };
            match client.download(file_id, Some(&dest)).await? {
                Download::Saved { path, bytes } => {
                    println!("saved {bytes} bytes to {}", path.display())
                }
                Download::Bytes(b) => println!("received {} bytes", b.len()),
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("could not render result: {e}"),
    }
}

/// File ids are URL-safe base64, but keep path separators out regardless.
fn sanitize(file_id: &str) -> String {
    file_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
