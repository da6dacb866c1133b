//! Decorative phrase pool
//!
//! One phrase is flashed at a random spot every frame. The random source is
//! passed in by the caller so the whole front-end shares a single generator
//! seeded once at startup.

use rand::Rng;

/// The built-in phrase table
pub const DEFAULT_PHRASES: [&str; 5] = [
    "革命万岁",
    "无产阶级统治",
    "星星之火可以燎原",
    "红色如血",
    "共产主义永存",
];

/// A phrase together with where to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPhrase<'a> {
    pub text: &'a str,
    pub x: i32,
    pub y: i32,
}

/// Immutable ordered pool of phrases
#[derive(Debug, Clone)]
pub struct PhraseSource {
    phrases: Vec<String>,
}

impl PhraseSource {
    pub fn new(phrases: Vec<String>) -> Self {
        PhraseSource { phrases }
    }

    /// Picks a phrase uniformly at random and a random point in the window
    ///
    /// Returns `None` only for an empty pool.
    pub fn pick<'a, R: Rng>(
        &'a self,
        rng: &mut R,
        width: u32,
        height: u32,
    ) -> Option<PlacedPhrase<'a>> {
        if self.phrases.is_empty() || width == 0 || height == 0 {
            return None;
        }

        let index = rng.gen_range(0..self.phrases.len());
        let x = rng.gen_range(0..width) as i32;
        let y = rng.gen_range(0..height) as i32;

        Some(PlacedPhrase {
            text: &self.phrases[index],
            x,
            y,
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for PhraseSource {
    fn default() -> Self {
        PhraseSource::new(DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_stays_in_window() {
        let source = PhraseSource::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let placed = source.pick(&mut rng, 500, 720).unwrap();
            assert!((0..500).contains(&placed.x));
            assert!((0..720).contains(&placed.y));
            assert!(source.phrases().iter().any(|p| p == placed.text));
        }
    }

    #[test]
    fn test_pick_covers_whole_pool() {
        let source = PhraseSource::default();
        let mut rng = StdRng::seed_from_u64(2024);

        let seen: HashSet<&str> = (0..500)
            .filter_map(|_| source.pick(&mut rng, 500, 720))
            .map(|placed| placed.text)
            .collect();

        assert_eq!(seen.len(), DEFAULT_PHRASES.len());
    }

    #[test]
    fn test_shared_generator_does_not_repeat_on_every_call() {
        // Reseeding per call would hand back the same phrase and spot each time
        let source = PhraseSource::default();
        let mut rng = StdRng::seed_from_u64(99);

        let first = source.pick(&mut rng, 500, 720).unwrap();
        let differs = (0..20)
            .filter_map(|_| source.pick(&mut rng, 500, 720))
            .any(|placed| placed != first);

        assert!(differs);
    }

    #[test]
    fn test_empty_pool_picks_nothing() {
        let source = PhraseSource::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);

        assert!(source.pick(&mut rng, 500, 720).is_none());
    }
}
