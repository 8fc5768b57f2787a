//! Assertion macros with the full CLI output in the failure message.

/// Assert that a command exited successfully.
///
/// # Example
/// ```ignore
/// let result = env.run(&["roles", "list"]);
/// assert_success!(result);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}.\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}

/// Assert that a command failed.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.is_success(),
            "Expected failure, but the command succeeded.\n{}",
            $result.combined_output()
        );
    };
}

/// Assert that stdout or stderr contains the text.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\n{}",
            $needle,
            combined
        );
    };
}
