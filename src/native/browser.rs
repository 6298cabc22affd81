//! Opens cited sources in the system browser

use std::process::Command;

use reqwest::Url;

/// Only http(s) links are handed to the platform opener
pub fn is_openable(uri: &str) -> bool {
    Url::parse(uri)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn macos_opener(uri: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(uri);
    command
}

/// Goes through the URL protocol handler directly; cmd.exe would split on `&`
fn windows_opener(uri: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(uri);
    command
}

fn xdg_opener(uri: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(uri);
    command
}

fn opener(uri: &str) -> Command {
    if cfg!(target_os = "macos") {
        macos_opener(uri)
    } else if cfg!(target_os = "windows") {
        windows_opener(uri)
    } else {
        xdg_opener(uri)
    }
}

/// Open `uri` with the default browser
pub fn open(uri: &str) -> Result<(), String> {
    if !is_openable(uri) {
        return Err(format!("Refusing to open non-web link: {}", uri));
    }

    opener(uri)
        .spawn()
        .map_err(|e| format!("Failed to open {}: {}", uri, e))?;
    Ok(())
}
