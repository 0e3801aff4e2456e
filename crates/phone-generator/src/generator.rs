//! Main generator for producing mock phone records.

use crate::generators::{
    generate_date_within, generate_int_range, generate_one_of, generate_pattern,
    generate_rounded_float_range,
};
use chrono::{DateTime, Utc};
use phone_core::domain;
use phone_core::{
    Battery, Benchmarks, Camera, CarrierCompatibility, Connectivity, Display, Images, Performance,
    PhoneRecord, Ram, Sensors, Specs,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of records produced when no count is given.
pub const DEFAULT_PHONE_COUNT: u32 = 12;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 8;

/// Generator that produces deterministic phone records.
///
/// The generator owns its random source. Building two generators from
/// the same seed yields the same sequence of records, except for
/// `release_date`, which is offset from the reference time.
pub struct PhoneGenerator<R = StdRng> {
    /// Locally scoped random source
    rng: R,
    /// Index of the next record (1-based)
    index: u32,
    /// Instant release-date offsets are subtracted from
    reference_time: DateTime<Utc>,
}

impl PhoneGenerator<StdRng> {
    /// Create a new generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PhoneGenerator<R> {
    /// Create a generator that draws from a caller-constructed RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            index: 1,
            reference_time: Utc::now(),
        }
    }

    /// Pin the instant that release dates are computed from.
    ///
    /// Two generators with the same seed and reference time produce
    /// identical records.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Index the next record will get.
    pub fn current_index(&self) -> u32 {
        self.index
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> PhoneRecord {
        let index = self.index;
        let rng = &mut self.rng;

        let manufacturer = generate_one_of(rng, &domain::MANUFACTURERS);
        let release_date =
            generate_date_within(rng, self.reference_time, domain::MAX_RELEASE_AGE_DAYS);
        let price = generate_one_of(rng, &domain::PRICES);

        let display = Display {
            screen_size_inches: generate_rounded_float_range(
                rng,
                domain::SCREEN_SIZE_INCHES,
                1,
            ),
            resolution: format!(
                "{}x{}",
                generate_one_of(rng, &domain::RESOLUTION_WIDTHS),
                generate_one_of(rng, &domain::RESOLUTION_HEIGHTS)
            ),
            technology: generate_one_of(rng, &domain::DISPLAY_TECHNOLOGIES).to_string(),
            refresh_rate_hz: generate_one_of(rng, &domain::REFRESH_RATES_HZ),
            peak_brightness_nits: generate_int_range(rng, domain::PEAK_BRIGHTNESS_NITS),
        };

        let performance = Performance {
            processor: format!(
                "MockChip v{}",
                generate_int_range(rng, domain::CHIP_VERSIONS)
            ),
            cpu: format!("{}-core CPU", generate_int_range(rng, domain::CPU_CORES)),
            gpu: format!("MockGPU v{}", generate_int_range(rng, domain::CHIP_VERSIONS)),
            ram: Ram {
                options: domain::RAM_OPTIONS_GB.to_vec(),
                technology: domain::RAM_TECHNOLOGY.to_string(),
            },
            storage_options: domain::STORAGE_OPTIONS_GB.to_vec(),
            operating_system: format!(
                "Android {}",
                generate_one_of(rng, &domain::ANDROID_VERSIONS)
            ),
        };

        let benchmarks = Benchmarks {
            geekbench_single_core: generate_int_range(rng, domain::GEEKBENCH_SINGLE_CORE),
            geekbench_multi_core: generate_int_range(rng, domain::GEEKBENCH_MULTI_CORE),
            antutu_score: generate_int_range(rng, domain::ANTUTU_SCORE),
        };

        let camera = Camera {
            main_megapixels: generate_one_of(rng, &domain::MAIN_MEGAPIXELS),
            front_megapixels: domain::FRONT_MEGAPIXELS,
        };

        let battery = Battery {
            capacity_mah: generate_one_of(rng, &domain::BATTERY_CAPACITIES_MAH),
            charging_speed_w: generate_one_of(rng, &domain::CHARGING_SPEEDS_W),
            battery_type: domain::BATTERY_TYPE.to_string(),
            wireless_charging: generate_one_of(rng, &[true, false]),
        };

        self.index += 1;

        PhoneRecord {
            id: PhoneRecord::id_for(manufacturer, index),
            name: PhoneRecord::name_for(manufacturer, index),
            manufacturer: manufacturer.to_string(),
            release_date,
            price,
            images: Images {
                main: generate_pattern(domain::IMAGE_URL_PATTERN, index),
            },
            specs: Specs {
                display,
                performance,
                benchmarks,
                camera,
                battery,
                connectivity: Connectivity {
                    has_5g: true,
                    bluetooth_version: domain::BLUETOOTH_VERSION.to_string(),
                    has_nfc: true,
                    headphone_jack: false,
                },
                sensors: Sensors {
                    fingerprint: domain::FINGERPRINT_SENSOR.to_string(),
                    face_recognition: true,
                    accelerometer: true,
                    gyroscope: true,
                    proximity: true,
                    compass: true,
                    barometer: true,
                },
            },
            carrier_compatibility: domain::CARRIERS
                .iter()
                .map(|name| CarrierCompatibility {
                    name: name.to_string(),
                    compatible: true,
                })
                .collect(),
            reviews: Vec::new(),
        }
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u32) -> PhoneRecordIterator<'_, R> {
        PhoneRecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate a batch of `count` records.
    pub fn generate(&mut self, count: u32) -> Vec<PhoneRecord> {
        self.records(count).collect()
    }
}

/// Iterator that lazily generates phone records.
pub struct PhoneRecordIterator<'a, R = StdRng> {
    generator: &'a mut PhoneGenerator<R>,
    remaining: u32,
}

impl<R: Rng> Iterator for PhoneRecordIterator<'_, R> {
    type Item = PhoneRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for PhoneRecordIterator<'_, R> {}
