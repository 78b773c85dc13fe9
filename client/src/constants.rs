//! Application-wide constants

// Backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";
pub const ENDPOINT_AUTH_LOGIN: &str = "api/v1/auth/login";
pub const ENDPOINT_AUTH_REGISTER: &str = "api/v1/auth/register";
pub const ENDPOINT_USERS_ME: &str = "api/v1/users/me";
pub const ENDPOINT_DEVICES: &str = "api/v1/devices";
pub const ENDPOINT_AI_AUDIO: &str = "api/v1/ai/audio/process";
pub const ENDPOINT_AI_IMAGE: &str = "api/v1/ai/image/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Session keys
pub const PREF_AUTH_TOKEN: &str = "auth_token";
pub const PREF_USER_ID: &str = "user_id";
pub const PREF_USERNAME: &str = "username";
pub const PREF_USER_ROLE: &str = "user_role";

// Device control
pub const DEFAULT_TEMPERATURE_CELSIUS: f32 = 22.0;
pub const MAX_BRIGHTNESS_PERCENT: i32 = 100;
pub const MIN_BRIGHTNESS_PERCENT: i32 = 0;

// User-facing messages
pub const ERROR_NETWORK_UNAVAILABLE: &str = "Network unavailable. Please check your connection.";
pub const ERROR_TIMEOUT: &str = "Request timed out. Please try again.";
pub const ERROR_GENERIC: &str = "An unexpected error occurred. Please try again.";
pub const ERROR_UNAUTHORIZED: &str = "Authentication failed. Please log in again.";
pub const ERROR_FORBIDDEN: &str = "You don't have permission to perform this action.";
pub const ERROR_NOT_FOUND: &str = "Resource not found.";
pub const ERROR_SERVER: &str = "Server error. Please try again later.";
pub const ERROR_MISSING_CREDENTIALS: &str = "Please enter username and password.";
