//! Random initial placement.
//!
//! Draws a uniformly random permutation of the grid sites by sampling each
//! entry and retrying on collision, the way the sites are handed out one at
//! a time to cells and then to phantoms.

use crate::ids::SiteId;
use crate::random::Randomness;

/// Returns a uniformly random permutation of `[0, len)`.
pub(crate) fn random_permutation(rng: &mut Randomness, len: u32) -> Vec<SiteId> {
    let Some(max) = len.checked_sub(1) else {
        return Vec::new();
    };

    let mut used = vec![false; len as usize];
    let mut order = Vec::with_capacity(len as usize);
    for _ in 0..len {
        let mut site = rng.uniform_int(0, max);
        while used[site as usize] {
            site = rng.uniform_int(0, max);
        }
        used[site as usize] = true;
        order.push(SiteId::from_raw(site));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_every_site_once() {
        let mut rng = Randomness::seeded(8);
        let order = random_permutation(&mut rng, 50);
        assert_eq!(order.len(), 50);
        let distinct: HashSet<_> = order.iter().copied().collect();
        assert_eq!(distinct.len(), 50);
        assert!(order.iter().all(|s| s.as_raw() < 50));
    }

    #[test]
    fn empty_and_single() {
        let mut rng = Randomness::seeded(9);
        assert!(random_permutation(&mut rng, 0).is_empty());
        assert_eq!(random_permutation(&mut rng, 1), vec![SiteId::from_raw(0)]);
    }

    #[test]
    fn reaches_every_arrangement() {
        // All 6 orders of 3 sites should show up.
        let mut rng = Randomness::seeded(10);
        let seen: HashSet<Vec<SiteId>> = (0..600).map(|_| random_permutation(&mut rng, 3)).collect();
        assert_eq!(seen.len(), 6);
    }
}
