//! Best-effort launch of the user's default browser.

use std::process::{Command, Stdio};

use tokio::process::Child;

/// Platform command that opens `url` in the default browser.
pub fn launcher_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(windows) {
        let mut command = Command::new("cmd");
        // The empty argument is the window title expected by `start`.
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

/// Open `url` in the default browser. Failures are logged and ignored.
///
/// The launcher is reaped by a background task, so this must run inside a
/// Tokio runtime.
pub fn open_url(url: &str) {
    let mut command = tokio::process::Command::from(launcher_command(url));
    let spawned = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let child = match spawned {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Could not open browser");
            return;
        }
    };

    tokio::spawn(reap(child, url.to_string()));
}

/// Wait for the launcher to exit so it does not linger as a zombie.
async fn reap(mut child: Child, url: String) {
    match child.wait().await {
        Ok(status) => tracing::debug!(url = %url, %status, "Browser launcher exited"),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Could not wait for browser launcher")
        }
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
