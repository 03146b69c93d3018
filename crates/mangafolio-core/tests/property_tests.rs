//! Property-based tests for the catalog, gallery cursor and detectors
//!
//! Uses proptest to verify the invariants the views rely on.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mangafolio_core::{
    experience_points, GalleryCursor, LoadingGate, LoadingState, PowerMeter, ProjectCatalog,
    ProjectId, SequenceDetector, KONAMI_CODE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Technology tags, mixing real catalog tags with arbitrary ones
fn technology_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(ProjectCatalog::seeded().distinct_technologies()),
        1 => prop::string::string_regex("[A-Za-z.]{1,12}").expect("valid regex"),
    ]
}

/// Cursor moves a reader can make in a gallery
#[derive(Debug, Clone)]
enum CursorOp {
    Next,
    Prev,
    Jump(usize),
}

fn cursor_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CursorOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(CursorOp::Next),
            2 => Just(CursorOp::Prev),
            1 => (0..12usize).prop_map(CursorOp::Jump),
        ],
        0..max_ops,
    )
}

/// Key names, biased towards the arrows and letters in the secret code
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(KONAMI_CODE.to_vec()).prop_map(str::to_string),
        1 => prop::sample::select(vec!["Enter", "Escape", "x", "B", "A"]).prop_map(str::to_string),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every filtered record uses the tag, and every record using it is kept
    #[test]
    fn filter_is_exact_membership(tech in technology_strategy()) {
        let catalog = ProjectCatalog::seeded();
        let filtered = catalog.filter_by_technology(Some(&tech));

        for record in &filtered {
            prop_assert!(record.technologies.contains(&tech));
        }
        let expected = catalog.all().iter().filter(|r| r.technologies.contains(&tech)).count();
        prop_assert_eq!(filtered.len(), expected);

        let positions: Vec<u32> = filtered.iter().map(|r| r.id.get()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }

    /// Lookups never invent records
    #[test]
    fn get_by_id_matches_range(id in 0u32..20) {
        let catalog = ProjectCatalog::seeded();
        let found = catalog.get_by_id(ProjectId(id));
        prop_assert_eq!(found.is_some(), (1..=6).contains(&id));
        if let Some(record) = found {
            prop_assert_eq!(record.id, ProjectId(id));
        }
    }

    /// The cursor index stays in range whatever the reader clicks
    #[test]
    fn cursor_stays_in_bounds(len in 0usize..8, ops in cursor_ops_strategy(60)) {
        let mut cursor = GalleryCursor::new(len);
        for op in ops {
            match op {
                CursorOp::Next => cursor.next(),
                CursorOp::Prev => cursor.prev(),
                CursorOp::Jump(i) => { cursor.jump_to(i); }
            }
            if len <= 1 {
                prop_assert_eq!(cursor.index(), 0);
            } else {
                prop_assert!(cursor.index() < len);
            }
        }
    }

    /// `len` nexts bring the cursor back to where it started
    #[test]
    fn cursor_full_cycle_returns(len in 2usize..10, start in 0usize..10) {
        let mut cursor = GalleryCursor::new(len);
        cursor.jump_to(start % len);
        let before = cursor.index();
        for _ in 0..len {
            cursor.next();
        }
        prop_assert_eq!(cursor.index(), before);
    }

    /// Next then previous is a no-op
    #[test]
    fn cursor_next_prev_inverse(len in 1usize..10, start in 0usize..10) {
        let mut cursor = GalleryCursor::new(len);
        cursor.jump_to(start % len);
        let before = cursor.index();
        cursor.next();
        cursor.prev();
        prop_assert_eq!(cursor.index(), before);
    }

    /// The detector fires only when the last ten keys are the code
    #[test]
    fn detector_fires_only_on_code(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut detector = SequenceDetector::konami();
        let mut since_match: Vec<&str> = Vec::new();

        for key in &keys {
            since_match.push(key);
            let fired = detector.feed(key);
            let tail_is_code = since_match.len() >= KONAMI_CODE.len()
                && since_match[since_match.len() - KONAMI_CODE.len()..] == KONAMI_CODE;
            prop_assert_eq!(fired, tail_is_code);
            if fired {
                since_match.clear();
            }
        }
    }

    /// Appending the code to any prefix always fires on the final key
    #[test]
    fn detector_fires_after_any_prefix(prefix in prop::collection::vec(key_strategy(), 0..20)) {
        let mut detector = SequenceDetector::konami();
        for key in &prefix {
            detector.feed(key);
        }
        let fired: Vec<bool> = KONAMI_CODE.iter().map(|k| detector.feed(k)).collect();
        prop_assert!(fired[KONAMI_CODE.len() - 1]);
    }

    /// Progress is monotonic, bounded and ends at exactly 100
    #[test]
    fn loading_progress_monotonic(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut gate = LoadingGate::new();
        let mut last = 0;
        let mut ticks = 0;

        while gate.is_loading() {
            gate.tick(&mut rng);
            prop_assert!(gate.progress() > last);
            prop_assert!(gate.progress() <= 100);
            last = gate.progress();
            ticks += 1;
        }

        prop_assert_eq!(gate.progress(), 100);
        prop_assert_eq!(gate.state(), LoadingState::Settling);
        prop_assert!((10..=100).contains(&ticks));
    }

    /// EXP is a floored percentage in 0..=100
    #[test]
    fn experience_points_bounded(scroll in -100.0f64..10_000.0, max in 0.0f64..5_000.0) {
        let exp = experience_points(scroll, max);
        prop_assert!(exp <= 100);
    }

    /// The power meter level always lands in 0..=100
    #[test]
    fn power_level_bounded(tops in prop::collection::vec(-2_000.0f64..2_000.0, 1..20)) {
        let mut meter = PowerMeter::new();
        for top in tops {
            meter.update(top, 800.0);
            prop_assert!(meter.level() <= 100);
        }
    }
}
