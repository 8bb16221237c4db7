//! Machine-readable error codes
//!
//! The dashboard reports failures as `{ "code": ..., "message": ... }` and
//! clients show the code verbatim. Only the fallback for a failure without
//! a code and the codes the client produces itself are named here.

/// Failure reported without an error object
pub const ERROR_CODE_UNKNOWN_ERROR: &str = "unknown_error";

/// Socket closed before the result arrived
pub const ERROR_CODE_CONNECTION_LOST: &str = "connection_lost";

/// No connection is established
pub const ERROR_CODE_NOT_CONNECTED: &str = "not_connected";

/// Command could not be written to the socket
pub const ERROR_CODE_SEND_FAILED: &str = "send_failed";

/// Result could not be decoded
pub const ERROR_CODE_INVALID_RESPONSE: &str = "invalid_response";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ERROR_CODE_UNKNOWN_ERROR,
            ERROR_CODE_CONNECTION_LOST,
            ERROR_CODE_NOT_CONNECTED,
            ERROR_CODE_SEND_FAILED,
            ERROR_CODE_INVALID_RESPONSE,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_codes_are_snake_case() {
        for code in [
            ERROR_CODE_UNKNOWN_ERROR,
            ERROR_CODE_CONNECTION_LOST,
            ERROR_CODE_NOT_CONNECTED,
            ERROR_CODE_SEND_FAILED,
            ERROR_CODE_INVALID_RESPONSE,
        ] {
            assert!(code.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
