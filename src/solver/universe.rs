//! The guess universe: every code permitted by the rules
//!
//! Built once per run and shared by reference. The ordering matters: the
//! selector breaks ties in favour of the earliest code, so a shuffled universe
//! gives pseudo-random tie-breaks that are still reproducible from the seed.

use crate::core::{Code, Rules};
use rand::Rng;
use rand::seq::SliceRandom;

/// All `colours^cells` codes in a fixed iteration order
#[derive(Debug, Clone)]
pub struct Universe {
    rules: Rules,
    codes: Vec<Code>,
}

impl Universe {
    /// Enumerate every code in lexicographic order
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Rules;
    /// use mastermind_minimax::solver::Universe;
    ///
    /// let universe = Universe::new(Rules::classic());
    /// assert_eq!(universe.len(), 1296);
    /// ```
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let codes = (0..rules.universe_size())
            .map(|index| Code::from_index(index, rules))
            .collect();
        Self { rules, codes }
    }

    /// Enumerate every code, then shuffle with the caller's random source
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Self {
        let mut universe = Self::new(rules);
        universe.codes.shuffle(rng);
        universe
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false` for valid rules; provided for completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Pick a uniformly random code
    ///
    /// # Panics
    /// Never panics: valid rules always produce at least two codes.
    #[must_use]
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        self.codes[rng.random_range(0..self.codes.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn universe_contains_every_code_once() {
        let rules = Rules::new(3, 4).unwrap();
        let universe = Universe::new(rules);
        assert_eq!(universe.len(), 81);

        let unique: HashSet<_> = universe.codes().iter().collect();
        assert_eq!(unique.len(), 81);
    }

    #[test]
    fn lexicographic_order() {
        let universe = Universe::new(Rules::classic());
        assert!(universe.codes().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(universe.codes()[0].pegs(), &[0, 0, 0, 0]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let rules = Rules::classic();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = Universe::shuffled(rules, &mut rng);

        let mut sorted = shuffled.codes().to_vec();
        sorted.sort();
        assert_eq!(sorted, Universe::new(rules).codes());
    }

    #[test]
    fn shuffle_is_reproducible_from_seed() {
        let rules = Rules::classic();
        let a = Universe::shuffled(rules, &mut StdRng::seed_from_u64(42));
        let b = Universe::shuffled(rules, &mut StdRng::seed_from_u64(42));
        let c = Universe::shuffled(rules, &mut StdRng::seed_from_u64(43));

        assert_eq!(a.codes(), b.codes());
        assert_ne!(a.codes(), c.codes());
    }

    #[test]
    fn random_code_is_member() {
        let universe = Universe::new(Rules::classic());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let code = universe.random_code(&mut rng);
            assert!(universe.codes().contains(&code));
        }
    }
}
