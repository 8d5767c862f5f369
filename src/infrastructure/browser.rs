// SPDX-License-Identifier: MPL-2.0
//! System browser adapter.
//!
//! Delegates to the platform's URL opener: `xdg-open` on Linux and BSDs,
//! `open` on macOS, the URL protocol handler on Windows.

use crate::application::port::{NavigationError, Navigator};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use url::Url;

/// Opens URLs in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &Url) -> Result<(), NavigationError> {
        let mut command = opener_command(url.as_str());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command
            .spawn()
            .map_err(|err| NavigationError(err.to_string()))?;
        supervise(child).map_err(|err| NavigationError(err.to_string()))?;
        Ok(())
    }
}

/// Waits on the opener in the background so it is reaped once it exits.
///
/// Some openers only return when the browser closes, so the wait never runs
/// on the caller's thread. A failed exit is only logged.
fn supervise(mut child: Child) -> std::io::Result<JoinHandle<Result<(), NavigationError>>> {
    thread::Builder::new()
        .name("browser-opener".into())
        .spawn(move || {
            let outcome = child
                .wait()
                .map_err(|err| NavigationError(err.to_string()))
                .and_then(exit_outcome);
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "browser opener failed");
            }
            outcome
        })
}

fn exit_outcome(status: ExitStatus) -> Result<(), NavigationError> {
    if status.success() {
        Ok(())
    } else {
        Err(NavigationError(format!("opener exited with {status}")))
    }
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(target);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(target);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_receives_url_as_single_argument() {
        let command = opener_command("https://pay.example/x?a=1&b=2");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args.last().and_then(|arg| arg.to_str()),
            Some("https://pay.example/x?a=1&b=2")
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_opener_is_reaped_and_reported() {
        let child = Command::new("false").spawn().expect("spawn false");
        let handle = supervise(child).expect("spawn reaper");
        let outcome = handle.join().expect("reaper thread");
        assert!(outcome.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn successful_opener_is_reaped() {
        let child = Command::new("true").spawn().expect("spawn true");
        let handle = supervise(child).expect("spawn reaper");
        assert_eq!(handle.join().expect("reaper thread"), Ok(()));
    }
}
