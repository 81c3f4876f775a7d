/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest SSID the 802.11 spec allows, in bytes
pub const SSID_MAX_LEN: usize = 32;

/// Shortest WPA2 passphrase, in bytes
pub const WPA2_PSK_MIN_LEN: usize = 8;
/// Longest WPA2 passphrase, in bytes
pub const WPA2_PSK_MAX_LEN: usize = 63;

/// Highest GPIO number on the ESP32
pub const GPIO_NUM_MAX: u8 = 39;
/// First input-only GPIO on the ESP32; the one-wire data line must drive low
pub const GPIO_INPUT_ONLY_MIN: u8 = 34;

const _: () = assert!(WPA2_PSK_MIN_LEN < WPA2_PSK_MAX_LEN);
const _: () = assert!(GPIO_INPUT_ONLY_MIN <= GPIO_NUM_MAX);
