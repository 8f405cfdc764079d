use engine::{AdMode, Dice, generate_faces, resolve_total};
use proptest::prelude::*;

proptest! {
    #[test]
    fn faces_always_land_in_range(
        seed in any::<u64>(),
        sides in 2u32..=100,
        count in 1u32..=50,
    ) {
        let mut dice = Dice::from_seed(seed);
        let faces = generate_faces(&mut dice, sides, count);
        prop_assert_eq!(faces.len(), count as usize);
        prop_assert!(faces.iter().all(|&f| (1..=sides).contains(&f)));
    }

    #[test]
    fn normal_total_matches_sum(
        faces in proptest::collection::vec(1u32..=100, 1..20),
        modifier in -100i32..=100,
    ) {
        let sum: u32 = faces.iter().sum();
        prop_assert_eq!(resolve_total(&faces, modifier, AdMode::Normal), sum as i32 + modifier);
    }

    #[test]
    fn advantage_total_matches_extremes(
        a in 1u32..=20,
        b in 1u32..=20,
        modifier in -100i32..=100,
    ) {
        let faces = [a, b];
        prop_assert_eq!(
            resolve_total(&faces, modifier, AdMode::Advantage),
            a.max(b) as i32 + modifier
        );
        prop_assert_eq!(
            resolve_total(&faces, modifier, AdMode::Disadvantage),
            a.min(b) as i32 + modifier
        );
    }
}
