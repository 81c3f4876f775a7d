use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

// Credential and pin limits, mirrored in src/constants.rs.
const SSID_MAX_LEN: usize = 32;
const WPA2_PSK_MIN_LEN: usize = 8;
const WPA2_PSK_MAX_LEN: usize = 63;
const GPIO_NUM_MAX: u8 = 39;
const GPIO_INPUT_ONLY_MIN: u8 = 34;

// GPIOs sampled at reset to select the ESP32 boot mode.
const STRAPPING_PINS: [u8; 5] = [0, 2, 5, 12, 15];

#[derive(Deserialize)]
struct RawConfig {
    update_interval_secs: u16,
    update_temp_secs: u16,
    wifi_ssid: String,
    wifi_psk: String,
    one_wire_bus: u8,
    temperature_precision: u8,
    telemetry_token: String,
}

fn validate(raw: &RawConfig) -> Result<(), String> {
    if raw.update_interval_secs == 0 {
        return Err("update_interval_secs must be at least 1".into());
    }
    if raw.update_temp_secs == 0 {
        return Err("update_temp_secs must be at least 1".into());
    }
    if raw.update_temp_secs > raw.update_interval_secs {
        return Err(format!(
            "update_temp_secs ({}) must not exceed update_interval_secs ({})",
            raw.update_temp_secs, raw.update_interval_secs
        ));
    }
    if raw.wifi_ssid.is_empty() {
        return Err("wifi_ssid must not be empty".into());
    }
    if raw.wifi_ssid.len() > SSID_MAX_LEN {
        return Err(format!(
            "wifi_ssid is {} bytes, 802.11 allows at most {}",
            raw.wifi_ssid.len(),
            SSID_MAX_LEN
        ));
    }
    if raw.wifi_psk.len() < WPA2_PSK_MIN_LEN || raw.wifi_psk.len() > WPA2_PSK_MAX_LEN {
        return Err(format!(
            "wifi_psk is {} bytes, a WPA2 passphrase is {}-{} bytes",
            raw.wifi_psk.len(),
            WPA2_PSK_MIN_LEN,
            WPA2_PSK_MAX_LEN
        ));
    }
    if raw.one_wire_bus > GPIO_NUM_MAX {
        return Err(format!(
            "one_wire_bus GPIO {} does not exist on the ESP32 (valid range 0-{})",
            raw.one_wire_bus, GPIO_NUM_MAX
        ));
    }
    if raw.one_wire_bus >= GPIO_INPUT_ONLY_MIN {
        return Err(format!(
            "one_wire_bus GPIO {} is input-only, the one-wire data line must be driven low",
            raw.one_wire_bus
        ));
    }
    if STRAPPING_PINS.contains(&raw.one_wire_bus) {
        println!(
            "cargo:warning=one_wire_bus GPIO {} is an ESP32 strapping pin, \
             check that the bus pull-up does not interfere with boot",
            raw.one_wire_bus
        );
    }
    if !(9..=12).contains(&raw.temperature_precision) {
        return Err(format!(
            "temperature_precision is {} bits, the DS18B20 supports 9-12",
            raw.temperature_precision
        ));
    }
    if raw.telemetry_token.is_empty() {
        return Err("telemetry_token must not be empty".into());
    }
    if !raw.telemetry_token.bytes().all(|b| b.is_ascii_graphic()) {
        return Err("telemetry_token must be printable ASCII".into());
    }
    Ok(())
}

/// Maps a validated bit count to its `Resolution` variant name.
fn resolution_variant(bits: u8) -> &'static str {
    match bits {
        9 => "Bits9",
        10 => "Bits10",
        11 => "Bits11",
        12 => "Bits12",
        _ => unreachable!("rejected by validate"),
    }
}

fn generate(raw: &RawConfig) -> String {
    format!(
        r#"
        pub const CONFIG: Config = Config {{
            update_interval_secs: {interval},
            update_temp_secs: {temp},
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            one_wire_bus: {pin},
            temperature_precision: Resolution::{variant},
            telemetry_token: {token:?},
        }};
    "#,
        interval = raw.update_interval_secs,
        temp = raw.update_temp_secs,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        pin = raw.one_wire_bus,
        variant = resolution_variant(raw.temperature_precision),
        token = raw.telemetry_token
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    validate(&raw)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, generate(&raw))?;

    Ok(())
}
