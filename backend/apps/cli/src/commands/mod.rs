//! Subcommand implementations

pub mod check_in;
pub mod checkout;
pub mod login;
pub mod logout;
pub mod logs;
pub mod status;

use attendance::domain::entities::CaptureResult;

/// One-line summary of a capture
pub(crate) fn describe(result: &CaptureResult) -> String {
    format!(
        "{} at {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S"),
        result.coordinates
    )
}
