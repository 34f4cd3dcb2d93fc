use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Error while building a weighted catalog.
#[derive(Debug)]
pub enum CatalogError {
    EmptyCatalog,
    InvalidWeight { index: usize, weight: f64 },
    WeightedIndex(rand::distributions::WeightedError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyCatalog => write!(f, "catalog has no entries"),
            CatalogError::InvalidWeight { index, weight } => {
                write!(f, "invalid weight for entry {index}: {weight}")
            }
            CatalogError::WeightedIndex(err) => write!(f, "invalid catalog weights: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable (value, weight) table defining a discrete distribution.
///
/// Weights are relative and need not sum to any particular total. Zero
/// weights are allowed for individual entries; at least one entry must
/// carry a strictly positive weight.
#[derive(Debug)]
pub struct WeightedCatalog<T> {
    entries: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T> WeightedCatalog<T> {
    pub fn new(table: Vec<(T, f64)>) -> Result<Self, CatalogError> {
        if table.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for (index, (_, weight)) in table.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(CatalogError::InvalidWeight {
                    index,
                    weight: *weight,
                });
            }
        }

        let weights: Vec<f64> = table.iter().map(|(_, weight)| *weight).collect();
        let index = WeightedIndex::new(&weights).map_err(CatalogError::WeightedIndex)?;
        let entries = table.into_iter().map(|(value, _)| value).collect();

        Ok(Self { entries, index })
    }

    /// Draws one entry with probability proportional to its weight.
    pub fn choose<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        let idx = self.index.sample(rng);
        &self.entries[idx]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_empty_table() {
        let result = WeightedCatalog::<&str>::new(Vec::new());
        assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        let result = WeightedCatalog::new(vec![("a", 1.0), ("b", -2.0)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidWeight { index: 1, .. })
        ));

        let result = WeightedCatalog::new(vec![("a", f64::NAN)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_all_zero_weights() {
        let result = WeightedCatalog::new(vec![("a", 0.0), ("b", 0.0)]);
        assert!(matches!(result, Err(CatalogError::WeightedIndex(_))));
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let catalog =
            WeightedCatalog::new(vec![("live", 1.0), ("dead", 0.0)]).expect("catalog");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            assert_eq!(*catalog.choose(&mut rng), "live");
        }
    }

    #[test]
    fn draws_follow_relative_weights() {
        let catalog =
            WeightedCatalog::new(vec![("heavy", 9.0), ("light", 1.0)]).expect("catalog");
        let mut rng = StdRng::seed_from_u64(11);

        let draws = 10_000;
        let heavy = (0..draws)
            .filter(|_| *catalog.choose(&mut rng) == "heavy")
            .count();

        let fraction = heavy as f64 / draws as f64;
        assert!((fraction - 0.9).abs() < 0.02, "heavy fraction {fraction}");
    }
}
