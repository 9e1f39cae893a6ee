//! Exit code constants for progress-sync.
//!
//! - 0: Success (including "nothing to commit")
//! - 1: User error (bad args, bad config, unreadable notes directory or document)
//! - 2: Document parse failure (malformed section header)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or unreadable inputs.
pub const USER_ERROR: i32 = 1;

/// The progress document could not be parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Git operation failure: stage, commit, or push errors.
pub const GIT_FAILURE: i32 = 3;
