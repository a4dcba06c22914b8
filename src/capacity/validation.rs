use super::types::CapacitySample;
use thiserror::Error;

/// Reasons a pushed sample snapshot is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("sample {index} has an empty node name")]
    EmptyNodeName { index: usize },

    #[error("sample {index} on node {node} has an empty pool name")]
    EmptyPoolName { index: usize, node: String },

    #[error("snapshot has {count} samples, limit is {limit}")]
    TooManySamples { count: usize, limit: usize },
}

/// Check the boundary invariants the pipeline relies on: non-empty node and
/// pool names. Capacity values are never rejected, only coerced later.
pub fn validate_samples(samples: &[CapacitySample], limit: usize) -> Result<(), SampleError> {
    if samples.len() > limit {
        return Err(SampleError::TooManySamples { count: samples.len(), limit });
    }

    for (index, sample) in samples.iter().enumerate() {
        if sample.node_name.trim().is_empty() {
            return Err(SampleError::EmptyNodeName { index });
        }
        if sample.pool_name.trim().is_empty() {
            return Err(SampleError::EmptyPoolName { index, node: sample.node_name.clone() });
        }
    }

    Ok(())
}
