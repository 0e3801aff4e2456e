//! The phone record data model.
//!
//! Field names serialize in the camelCase form the phone catalog stores
//! them in (`releaseDate`, `screenSizeInches`, ...). A handful of stored
//! names do not follow camelCase and are renamed explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single phone-specification record.
///
/// `id` is the natural key: it is derived from the manufacturer and the
/// sequence index, and every write is an upsert keyed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneRecord {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub release_date: DateTime<Utc>,
    pub price: i32,
    pub images: Images,
    pub specs: Specs,
    pub carrier_compatibility: Vec<CarrierCompatibility>,
    /// Always empty when generated. Kept as raw JSON since nothing here
    /// produces or interprets reviews.
    #[serde(default)]
    pub reviews: Vec<serde_json::Value>,
}

impl PhoneRecord {
    /// Natural key for a manufacturer at a sequence index, e.g. `apple-x1-pro`.
    pub fn id_for(manufacturer: &str, index: u32) -> String {
        format!("{}-x{index}-pro", manufacturer.to_lowercase())
    }

    /// Display name for a manufacturer at a sequence index, e.g. `Apple X1 Pro`.
    pub fn name_for(manufacturer: &str, index: u32) -> String {
        format!("{manufacturer} X{index} Pro")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub main: String,
}

/// Fixed spec sub-groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    pub display: Display,
    pub performance: Performance,
    pub benchmarks: Benchmarks,
    pub camera: Camera,
    pub battery: Battery,
    pub connectivity: Connectivity,
    pub sensors: Sensors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub screen_size_inches: f64,
    /// `<width>x<height>` in pixels.
    pub resolution: String,
    pub technology: String,
    pub refresh_rate_hz: i32,
    pub peak_brightness_nits: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub processor: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: Ram,
    pub storage_options: Vec<i32>,
    pub operating_system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ram {
    pub options: Vec<i32>,
    pub technology: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    pub geekbench_single_core: i32,
    pub geekbench_multi_core: i32,
    pub antutu_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub main_megapixels: i32,
    pub front_megapixels: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    #[serde(rename = "capacitymAh")]
    pub capacity_mah: i32,
    pub charging_speed_w: i32,
    pub battery_type: String,
    pub wireless_charging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    #[serde(rename = "has5G")]
    pub has_5g: bool,
    pub bluetooth_version: String,
    pub has_nfc: bool,
    pub headphone_jack: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensors {
    pub fingerprint: String,
    pub face_recognition: bool,
    pub accelerometer: bool,
    pub gyroscope: bool,
    pub proximity: bool,
    pub compass: bool,
    pub barometer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierCompatibility {
    pub name: String,
    pub compatible: bool,
}
