use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Items paired with relative weights, prepared once and sampled many
/// times. Zero-weight items are never drawn.
#[derive(Clone, Debug)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    index: Option<WeightedIndex<f64>>,
}

impl<T: Clone> WeightedTable<T> {
    pub fn new(options: &[(T, f64)]) -> Self {
        Self {
            items: options.iter().map(|(item, _)| item.clone()).collect(),
            index: WeightedIndex::new(options.iter().map(|(_, weight)| *weight)).ok(),
        }
    }
}

impl<T> WeightedTable<T> {
    /// `None` when the table is empty or every weight is zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let index = self.index.as_ref()?;
        self.items.get(index.sample(rng))
    }
}

/// One-off weighted draw over `options`.
pub fn weighted_choice<'a, T, R>(rng: &mut R, options: &'a [(T, f64)]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let index = WeightedIndex::new(options.iter().map(|(_, weight)| *weight)).ok()?;
    options.get(index.sample(rng)).map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_weight_is_never_drawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = [("never", 0.0), ("a", 1.0), ("b", 3.0)];
        for _ in 0..2000 {
            assert_ne!(weighted_choice(&mut rng, &options), Some(&"never"));
        }
    }

    #[test]
    fn empty_or_all_zero_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [(u8, f64); 0] = [];
        assert_eq!(weighted_choice(&mut rng, &empty), None);
        assert_eq!(weighted_choice(&mut rng, &[(1u8, 0.0), (2, 0.0)]), None);

        let table = WeightedTable::new(&[('x', 0.0)]);
        assert_eq!(table.sample(&mut rng), None);
    }

    #[test]
    fn draws_follow_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let table = WeightedTable::new(&[("common", 0.9), ("rare", 0.1)]);
        let rare = (0..10_000)
            .filter(|_| table.sample(&mut rng) == Some(&"rare"))
            .count();
        assert!((700..1300).contains(&rare), "rare drawn {rare} times");
    }
}
