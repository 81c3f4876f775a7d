use embassy_time::Duration;
use heapless::String;
use log::info;

use crate::constants::VERSION;
use crate::resolution::Resolution;

pub struct Config {
    // Seconds between full display refreshes
    pub update_interval_secs: u16,

    // Seconds between temperature samples
    pub update_temp_secs: u16,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // GPIO carrying the one-wire data line
    pub one_wire_bus: u8,

    // DS18B20 conversion resolution
    pub temperature_precision: Resolution,

    // Bearer token for the telemetry service
    pub telemetry_token: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

impl Config {
    /// Full display refresh cadence.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs.into())
    }

    /// Temperature sampling cadence.
    pub fn temp_interval(&self) -> Duration {
        Duration::from_secs(self.update_temp_secs.into())
    }

    /// Logs the active settings once at startup. Secrets are masked.
    pub fn log_summary(&self) {
        info!("weather clock configuration {}", VERSION);
        info!(
            "display refresh every {}s, temperature sample every {}s",
            self.update_interval_secs, self.update_temp_secs
        );
        info!(
            "wifi SSID {:?}, psk {}",
            self.wifi_ssid,
            masked(self.wifi_psk)
        );
        info!(
            "one-wire bus on GPIO{}, {}-bit resolution",
            self.one_wire_bus,
            self.temperature_precision.bits()
        );
        info!("telemetry token {}", masked(self.telemetry_token));
    }
}

/// Keeps the first two characters of a secret and hides the rest.
fn masked(secret: &str) -> String<12> {
    let mut out = String::new();
    for c in secret.chars().take(2) {
        if out.push(c).is_err() {
            break;
        }
    }
    let _ = out.push_str("****");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        GPIO_INPUT_ONLY_MIN, SSID_MAX_LEN, WPA2_PSK_MAX_LEN, WPA2_PSK_MIN_LEN,
    };

    #[test]
    fn test_update_cadences() {
        assert_eq!(CONFIG.update_interval_secs, 600);
        assert_eq!(CONFIG.update_temp_secs, 30);
        assert!(CONFIG.update_temp_secs <= CONFIG.update_interval_secs);
        assert_eq!(CONFIG.update_interval(), Duration::from_secs(600));
        assert_eq!(CONFIG.temp_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_sensor_settings() {
        assert_eq!(CONFIG.one_wire_bus, 2);
        assert!(CONFIG.one_wire_bus < GPIO_INPUT_ONLY_MIN);
        assert_eq!(CONFIG.temperature_precision, Resolution::Bits9);
        assert_eq!(CONFIG.temperature_precision.bits(), 9);
    }

    #[test]
    fn test_credentials() {
        assert_eq!(CONFIG.wifi_ssid, "Siersma2");
        assert_eq!(CONFIG.wifi_psk, "Dustin01!");
        assert_eq!(CONFIG.telemetry_token, "0a3b9f9e4c3446508446b726ffb6a66f");

        assert!(!CONFIG.wifi_ssid.is_empty());
        assert!(CONFIG.wifi_ssid.len() <= SSID_MAX_LEN);
        assert!(CONFIG.wifi_psk.len() >= WPA2_PSK_MIN_LEN);
        assert!(CONFIG.wifi_psk.len() <= WPA2_PSK_MAX_LEN);
        assert!(!CONFIG.telemetry_token.is_empty());
    }

    #[test]
    fn test_masking() {
        assert_eq!(masked("Dustin01!").as_str(), "Du****");
        assert_eq!(masked("x").as_str(), "x****");
        assert!(!masked(CONFIG.telemetry_token)
            .as_str()
            .contains(CONFIG.telemetry_token));
    }
}
