//! Crate-wide constants.
//!
//! Centralizes timing values and file names so the controller and the
//! settings layer agree on defaults.

// ============================================================================
// Animation & Timing
// ============================================================================

/// Delay before the navigation arrows hide after the last interaction, in milliseconds
pub const ARROW_HIDE_DELAY_MS: u64 = 3000;

/// Step used by the back control
pub const STEP_BACK: isize = -1;

/// Step used by the forward control
pub const STEP_FORWARD: isize = 1;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "attachment-carousel";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Authenticated URLs
// ============================================================================

/// Query parameter carrying the encrypted auth token
pub const AUTH_TOKEN_QUERY_PARAM: &str = "encryptedAuthToken";
