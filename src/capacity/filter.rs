use super::types::CapacitySample;

/// Drop samples from DISKLESS pools, keeping the original order.
pub fn filter_samples(samples: &[CapacitySample]) -> Vec<&CapacitySample> {
    samples.iter().filter(|s| !s.is_diskless()).collect()
}
