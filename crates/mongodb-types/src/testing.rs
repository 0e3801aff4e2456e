//! Fixtures shared by the conversion tests.

use chrono::{TimeZone, Utc};
use phone_core::{
    Battery, Benchmarks, Camera, CarrierCompatibility, Connectivity, Display, Images, Performance,
    PhoneRecord, Ram, Sensors, Specs,
};

pub fn sample_record() -> PhoneRecord {
    PhoneRecord {
        id: PhoneRecord::id_for("Samsung", 2),
        name: PhoneRecord::name_for("Samsung", 2),
        manufacturer: "Samsung".to_string(),
        release_date: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        price: 1099,
        images: Images {
            main: "https://picsum.photos/seed/phone2/400/600".to_string(),
        },
        specs: Specs {
            display: Display {
                screen_size_inches: 6.7,
                resolution: "1080x2400".to_string(),
                technology: "OLED".to_string(),
                refresh_rate_hz: 90,
                peak_brightness_nits: 1800,
            },
            performance: Performance {
                processor: "MockChip v4".to_string(),
                cpu: "6-core CPU".to_string(),
                gpu: "MockGPU v1".to_string(),
                ram: Ram {
                    options: vec![8, 12],
                    technology: "LPDDR5X".to_string(),
                },
                storage_options: vec![128, 256, 512],
                operating_system: "Android 13".to_string(),
            },
            benchmarks: Benchmarks {
                geekbench_single_core: 1750,
                geekbench_multi_core: 5900,
                antutu_score: 1_250_000,
            },
            camera: Camera {
                main_megapixels: 200,
                front_megapixels: 12,
            },
            battery: Battery {
                capacity_mah: 4500,
                charging_speed_w: 45,
                battery_type: "Li-Ion".to_string(),
                wireless_charging: false,
            },
            connectivity: Connectivity {
                has_5g: true,
                bluetooth_version: "5.3".to_string(),
                has_nfc: true,
                headphone_jack: false,
            },
            sensors: Sensors {
                fingerprint: "Under-display".to_string(),
                face_recognition: true,
                accelerometer: true,
                gyroscope: true,
                proximity: true,
                compass: true,
                barometer: true,
            },
        },
        carrier_compatibility: vec![
            CarrierCompatibility {
                name: "Verizon".to_string(),
                compatible: true,
            },
            CarrierCompatibility {
                name: "T-Mobile".to_string(),
                compatible: true,
            },
        ],
        reviews: Vec::new(),
    }
}
