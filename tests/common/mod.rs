// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use hull_bound::config::{CountingConfig, EndingDeletionRange};
use hull_bound::context::CountingContext;

/// A context for alphabet size `sigma` whose table covers strings up to `max_n`.
pub fn context(sigma: u32, max_n: u32) -> CountingContext {
    CountingContext::new(CountingConfig::new(sigma), max_n)
        .unwrap_or_else(|e| panic!("Could not build context for sigma={}: {}", sigma, e))
}

/// Same, with ending deletions summed over the inclusive range.
pub fn inclusive_context(sigma: u32, max_n: u32) -> CountingContext {
    let config =
        CountingConfig::new(sigma).with_ending_deletion(EndingDeletionRange::Inclusive);
    CountingContext::new(config, max_n)
        .unwrap_or_else(|e| panic!("Could not build context for sigma={}: {}", sigma, e))
}
