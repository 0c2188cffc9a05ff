use anyhow::{Context, Result};
use chrono::Utc;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};
use thirtyfour::prelude::*;

static PRICE_LABEL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*sek\s*$"));

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{ts}")
}

/// Screenshot, DOM and the saved session slot of a failed browser run.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let session = driver
        .execute(
            "return window.sessionStorage.getItem('confirmation')",
            vec![],
        )
        .await
        .ok()
        .and_then(|ret| ret.json().as_str().map(str::to_owned))
        .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        session.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    session: Option<&serde_json::Value>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }

    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }

    if let Some(slot) = session {
        let payload = serde_json::to_vec_pretty(slot).unwrap_or_default();
        let _ = fs::write(dir.join("confirmation.json"), payload);
    }

    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Read the number out of a rendered total such as `"340 sek"`.
pub fn parse_price_label(label: &str) -> Result<i64> {
    let pattern = PRICE_LABEL
        .as_ref()
        .map_err(|err| anyhow::anyhow!("price pattern: {err}"))?;
    let captures = pattern
        .captures(label)
        .with_context(|| format!("not a price label: {label:?}"))?;
    captures[1]
        .parse::<i64>()
        .with_context(|| format!("price out of range: {label:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" happy-path, ,outage,  smoke ");
        assert_eq!(parts, vec!["happy-path", "outage", "smoke"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "chrome", "happy-path", 42);
        assert!(dir.contains("target/out/chrome/happy-path/seed-42/"));
    }

    #[test]
    fn price_labels_parse_to_numbers() {
        assert_eq!(parse_price_label("340 sek").expect("price"), 340);
        assert_eq!(parse_price_label(" 1020 sek ").expect("price"), 1020);
        assert!(parse_price_label("sek").is_err());
        assert!(parse_price_label("340 kr").is_err());
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "strike-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let slot = json!({ "id": "12345", "price": "340" });
        write_artifact_files(
            &base,
            Some(&[1, 2, 3]),
            Some("<html />"),
            Some(&slot),
            "boom",
        )
        .expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("confirmation.json").exists());
        assert!(base.join("error.txt").exists());
    }
}
