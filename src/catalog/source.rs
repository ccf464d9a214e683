//! CatalogSource - where opportunities come from.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DirectoryConfig;
use crate::opportunity::Opportunity;

use super::CatalogError;

const SAMPLE_CATALOG: &str = include_str!("../../data/opportunities.json");

/// A one-shot asynchronous supplier of opportunity records.
pub trait CatalogSource: Send + Sync {
    /// Fetch the full record list. May fail with a transient error.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Opportunity>, CatalogError>> + Send;
}

impl<T: CatalogSource> CatalogSource for Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Opportunity>, CatalogError>> + Send {
        (**self).fetch()
    }
}

/// Serves a fixed record list after a simulated delay, failing with a
/// configurable probability.
pub struct StaticCatalogSource {
    records: Vec<Opportunity>,
    delay: Duration,
    failure_probability: f64,
    rng: Mutex<StdRng>,
}

impl StaticCatalogSource {
    /// No delay and no injected failures.
    pub fn new(records: Vec<Opportunity>) -> Self {
        Self {
            records,
            delay: Duration::ZERO,
            failure_probability: 0.0,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// The bundled demo catalog.
    pub fn sample() -> Result<Self, CatalogError> {
        let records: Vec<Opportunity> = serde_json::from_str(SAMPLE_CATALOG)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn from_config(records: Vec<Opportunity>, config: &DirectoryConfig) -> Self {
        let source = Self::new(records)
            .with_delay(config.load_delay())
            .with_failure_probability(config.failure_probability);
        match config.seed {
            Some(seed) => source.with_seed(seed),
            None => source,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Probability in `[0, 1]` that a fetch fails. Out-of-range values are
    /// clamped; NaN disables failures.
    pub fn with_failure_probability(mut self, probability: f64) -> Self {
        self.failure_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn records(&self) -> &[Opportunity] {
        &self.records
    }

    fn roll_failure(&self) -> bool {
        if self.failure_probability <= 0.0 {
            return false;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_bool(self.failure_probability)
    }
}

impl CatalogSource for StaticCatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Opportunity>, CatalogError>> + Send {
        let fail = self.roll_failure();
        async move {
            tokio::time::sleep(self.delay).await;
            if fail {
                return Err(CatalogError::Unavailable(
                    "network error occurred while fetching opportunities".into(),
                ));
            }
            Ok(self.records.clone())
        }
    }
}
