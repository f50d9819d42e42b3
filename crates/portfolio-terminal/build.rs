//! Version metadata for `portfolio-terminal --version`.
//!
//! `PORTFOLIO_TERMINAL_GIT_HASH` and `SOURCE_DATE_EPOCH` pin the stamped
//! values when packaging outside a checkout.

use std::env;
use std::process::Command;

const HASH_ENV: &str = "PORTFOLIO_TERMINAL_GIT_HASH";
const EPOCH_ENV: &str = "SOURCE_DATE_EPOCH";

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn revision() -> String {
    if let Ok(pinned) = env::var(HASH_ENV) {
        return pinned;
    }
    match git(&["rev-parse", "--short", "HEAD"]).filter(|h| !h.is_empty()) {
        Some(hash) => {
            let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|s| !s.is_empty());
            if dirty {
                format!("{}-dirty", hash)
            } else {
                hash
            }
        }
        None => "unknown".to_string(),
    }
}

fn build_date() -> String {
    let pinned = env::var(EPOCH_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));
    pinned
        .unwrap_or_else(chrono::Utc::now)
        .format("%Y-%m-%d")
        .to_string()
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", revision());
    println!("cargo:rustc-env=BUILD_DATE={}", build_date());

    println!("cargo:rerun-if-env-changed={}", HASH_ENV);
    println!("cargo:rerun-if-env-changed={}", EPOCH_ENV);
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
