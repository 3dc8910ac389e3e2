//! Failure reporting to the host automation system.
//!
//! The host (a GitHub Actions runner) consumes workflow commands from the
//! launcher's stdout. Marking the step failed means emitting an
//! `::error::<message>` command; the runner annotates the run and the
//! launcher exits non-zero. Nothing else is ever written to stdout.

/// Render the `::error::` workflow command for `message`.
///
/// Command data is a single line, so `%`, CR and LF in the message are
/// percent-escaped. `%` must be escaped first or the other escapes would be
/// double-encoded.
pub fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

/// Report `message` on the host failure channel.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_passes_through() {
        assert_eq!(error_command("pwsh not found"), "::error::pwsh not found");
    }

    #[test]
    fn newlines_and_percent_are_escaped() {
        assert_eq!(
            error_command("50% done\r\nthen failed"),
            "::error::50%25 done%0D%0Athen failed"
        );
    }

    #[test]
    fn escaped_sequences_are_not_double_encoded() {
        assert_eq!(error_command("%0A"), "::error::%250A");
    }
}
