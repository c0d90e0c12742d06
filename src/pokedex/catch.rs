//! Catch roll.

/// Decide a catch attempt from a roll in `[0, 1)`.
///
/// Higher base experience makes a Pokémon harder to catch. A Pokémon without
/// base experience is always caught.
pub fn catch_succeeds(roll: f64, base_experience: Option<u32>) -> bool {
    match base_experience {
        None | Some(0) => true,
        Some(base) => roll * 100.0 / f64::from(base) > 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        // 0.5 * base / 100 is the cut-off roll
        assert!(!catch_succeeds(0.55, Some(112)));
        assert!(catch_succeeds(0.57, Some(112)));
    }

    #[test]
    fn test_weak_pokemon_is_easy() {
        assert!(catch_succeeds(0.2, Some(36)));
        assert!(!catch_succeeds(0.1, Some(36)));
    }

    #[test]
    fn test_strong_pokemon_escapes_every_roll() {
        assert!(!catch_succeeds(0.999, Some(340)));
    }

    #[test]
    fn test_missing_base_experience_always_caught() {
        assert!(catch_succeeds(0.0, None));
        assert!(catch_succeeds(0.0, Some(0)));
    }
}
