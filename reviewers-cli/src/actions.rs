//! Workflow commands understood by the Actions runner
//!
//! Commands are lines of the form `::name::value` on stdout. Values are
//! escaped so a multi-line message stays a single command.

/// Whether we are running inside an Actions job
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escape a command value
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn command(name: &str, value: &str) -> String {
    format!("::{}::{}", name, escape_data(value))
}

/// Print an informational message
pub fn info(message: &str) {
    println!("{}", message);
}

/// Report the run as failed
///
/// The caller is responsible for the non-zero exit status.
pub fn set_failed(message: &str) {
    println!("{}", command("error", message));
}

/// Ask the runner to mask `secret` in all later log output
pub fn add_mask(secret: &str) {
    println!("{}", command("add-mask", secret));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("plain"), "plain");
        assert_eq!(escape_data("100%"), "100%25");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }

    #[test]
    fn test_escape_percent_first() {
        assert_eq!(escape_data("%0A\n"), "%250A%0A");
    }

    #[test]
    fn test_error_command() {
        assert_eq!(
            command("error", "Valid repo is missing from context"),
            "::error::Valid repo is missing from context"
        );
    }

    #[test]
    fn test_mask_command() {
        assert_eq!(command("add-mask", "ghp_abc"), "::add-mask::ghp_abc");
    }
}
