//! Fixed value domains for generated phone records.
//!
//! Every randomized field of a [`crate::PhoneRecord`] is drawn uniformly from
//! one of these sets or inclusive ranges. Fields that are constant across all
//! records live here too so the generator and the verifier agree on them.

use std::ops::RangeInclusive;

/// Manufacturers a record can be attributed to.
pub const MANUFACTURERS: [&str; 5] = ["Apple", "Samsung", "Google", "OnePlus", "Xiaomi"];

/// Launch prices in whole dollars.
pub const PRICES: [i32; 6] = [699, 799, 899, 999, 1099, 1199];

/// Maximum age of a release date, in days before the reference time.
pub const MAX_RELEASE_AGE_DAYS: i64 = 365 * 2;

pub const SCREEN_SIZE_INCHES: RangeInclusive<f64> = 6.1..=6.9;
pub const RESOLUTION_WIDTHS: [i32; 4] = [1080, 1440, 2160, 3200];
pub const RESOLUTION_HEIGHTS: [i32; 3] = [2400, 3200, 3840];
pub const DISPLAY_TECHNOLOGIES: [&str; 3] = ["OLED", "AMOLED", "LCD"];
pub const REFRESH_RATES_HZ: [i32; 3] = [60, 90, 120];
pub const PEAK_BRIGHTNESS_NITS: RangeInclusive<i32> = 1500..=2600;

/// Version suffix range shared by the mock processor and GPU names.
pub const CHIP_VERSIONS: RangeInclusive<i32> = 1..=5;
pub const CPU_CORES: RangeInclusive<i32> = 2..=8;
pub const RAM_OPTIONS_GB: [i32; 2] = [8, 12];
pub const RAM_TECHNOLOGY: &str = "LPDDR5X";
pub const STORAGE_OPTIONS_GB: [i32; 3] = [128, 256, 512];
pub const ANDROID_VERSIONS: [&str; 3] = ["12", "13", "14"];

pub const GEEKBENCH_SINGLE_CORE: RangeInclusive<i32> = 1500..=2500;
pub const GEEKBENCH_MULTI_CORE: RangeInclusive<i32> = 5000..=7500;
pub const ANTUTU_SCORE: RangeInclusive<i32> = 1_000_000..=1_600_000;

pub const MAIN_MEGAPIXELS: [i32; 4] = [48, 50, 108, 200];
pub const FRONT_MEGAPIXELS: i32 = 12;

pub const BATTERY_CAPACITIES_MAH: [i32; 2] = [4500, 5000];
pub const CHARGING_SPEEDS_W: [i32; 4] = [25, 45, 65, 80];
pub const BATTERY_TYPE: &str = "Li-Ion";

pub const BLUETOOTH_VERSION: &str = "5.3";
pub const FINGERPRINT_SENSOR: &str = "Under-display";

/// Carriers listed on every record, all marked compatible.
pub const CARRIERS: [&str; 2] = ["Verizon", "T-Mobile"];

/// Placeholder image service; `{index}` is the record's sequence index.
pub const IMAGE_URL_PATTERN: &str = "https://picsum.photos/seed/phone{index}/400/600";
