use rand::Rng;

use crate::config::GridBounds;
use crate::snake::Position;

/// Returns a uniformly random position, in bounds but not necessarily
/// free.
///
/// Both axes sample the half-open range (`0..max_x`, `0..max_y`), which is
/// narrower than the inclusive board: the outermost row and column are
/// playable but never receive spawned food. Callers re-check candidates
/// for validity and retry.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridBounds) -> Position {
    Position {
        x: rng.gen_range(0..bounds.max_x),
        y: rng.gen_range(0..bounds.max_y),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridBounds;

    use super::random_position;

    #[test]
    fn sampling_stays_in_the_half_open_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridBounds { max_x: 4, max_y: 6 };

        for _ in 0..500 {
            let pos = random_position(&mut rng, bounds);
            assert!((0..4).contains(&pos.x));
            assert!((0..6).contains(&pos.y));
            assert!(!bounds.is_out_of_bounds(pos));
        }
    }

    #[test]
    fn sampling_reaches_every_candidate_cell() {
        let mut rng = StdRng::seed_from_u64(17);
        let bounds = GridBounds { max_x: 2, max_y: 2 };

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(random_position(&mut rng, bounds));
        }

        // 2×2 sampled cells out of the 3×3 board.
        assert_eq!(seen.len(), 4);
    }
}
