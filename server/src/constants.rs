// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Table region searched for the end of existing data; rows land below it.
pub const DEFAULT_APPEND_RANGE: &str = "A1:F1";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

pub const MSG_REGISTERED: &str = "Registration successful!";
