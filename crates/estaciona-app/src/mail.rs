//! Parking-request mail composition and dispatch
//!
//! Builds a `mailto:` URL with a fixed recipient and subject and hands it
//! to the platform's default mail client. This only prepares the request;
//! delivery is never observed.

use estaciona_types::{Error, ParkingRequest, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::process::Command;

/// Fixed recipient for every parking request.
pub const RECIPIENT: &str = "fmazzoli89@gmail.com";

/// Fixed subject line.
pub const SUBJECT: &str = "Solicitud de Estacionamiento";

/// Same escape set as JS `encodeURIComponent`: everything but ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The two-line message body for a request.
pub fn body(request: &ParkingRequest) -> String {
    format!(
        "Matrícula: {}\nDuración: {} minutos",
        request.license_plate, request.minutes
    )
}

/// The full mailto URL with percent-encoded subject and body.
pub fn mailto_url(request: &ParkingRequest) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        RECIPIENT,
        utf8_percent_encode(SUBJECT, COMPONENT),
        utf8_percent_encode(&body(request), COMPONENT)
    )
}

/// Compose the mailto URL for `request` and open it in the default mail
/// client. No retry and no delivery confirmation beyond the launch itself.
pub fn send(request: &ParkingRequest) -> Result<()> {
    open_mailto(&mailto_url(request))
}

/// Hand a mailto URL to the platform opener. If the primary opener fails
/// to launch, one fallback attempt is made, then we give up.
pub fn open_mailto(url: &str) -> Result<()> {
    let mut last_err = String::new();
    for candidate in openers() {
        let (program, args) = candidate.split_first().ok_or_else(|| {
            Error::MailIntent("no opener configured for this platform".to_string())
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args.iter());
        cmd.arg(url);

        match cmd.spawn() {
            Ok(_) => return Ok(()),
            Err(e) => {
                log::warn!("{} failed to launch: {}", program, e);
                last_err = format!("{}: {}", program, e);
            }
        }
    }
    Err(Error::MailIntent(last_err))
}

#[cfg(target_os = "linux")]
fn openers() -> Vec<Vec<&'static str>> {
    vec![vec!["xdg-open"], vec!["gio", "open"]]
}

#[cfg(target_os = "macos")]
fn openers() -> Vec<Vec<&'static str>> {
    vec![vec!["open"]]
}

#[cfg(target_os = "windows")]
fn openers() -> Vec<Vec<&'static str>> {
    // start is a cmd builtin; the empty string is the window title slot
    vec![vec!["cmd", "/C", "start", ""]]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn openers() -> Vec<Vec<&'static str>> {
    vec![vec!["xdg-open"]]
}
