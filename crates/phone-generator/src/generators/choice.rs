//! Uniform selection from a fixed domain.

use rand::Rng;

/// Pick one value uniformly at random.
///
/// Panics if `values` is empty; every domain in `phone_core::domain` is a
/// non-empty constant.
pub fn generate_one_of<R: Rng, T: Copy>(rng: &mut R, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_one_of_stays_in_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = [48, 50, 108, 200];

        for _ in 0..100 {
            assert!(domain.contains(&generate_one_of(&mut rng, &domain)));
        }
    }

    #[test]
    fn test_one_of_reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = ["OLED", "AMOLED", "LCD"];

        let seen: HashSet<&str> = (0..200).map(|_| generate_one_of(&mut rng, &domain)).collect();
        assert_eq!(seen.len(), domain.len());
    }

    #[test]
    fn test_deterministic_selection() {
        let mut rng1 = StdRng::seed_from_u64(8);
        let mut rng2 = StdRng::seed_from_u64(8);
        let domain = [699, 799, 899, 999, 1099, 1199];

        let picks1: Vec<i32> = (0..20).map(|_| generate_one_of(&mut rng1, &domain)).collect();
        let picks2: Vec<i32> = (0..20).map(|_| generate_one_of(&mut rng2, &domain)).collect();
        assert_eq!(picks1, picks2);
    }
}
