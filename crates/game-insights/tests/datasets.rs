// File: crates/game-insights/tests/datasets.rs
// Purpose: Shape and internal consistency of the fixed tables.

use game_insights::datasets::{Datasets, GOLDEN_YEARS};

#[test]
fn tables_have_fixed_row_counts() {
    let data = Datasets::load();
    assert_eq!(data.best_selling_games.len(), 10);
    assert_eq!(data.critic_years.len(), 10);
    assert_eq!(data.user_years.len(), 10);
    assert_eq!(data.golden_years.len(), 6);
}

#[test]
fn golden_diff_is_critic_minus_user() {
    for g in GOLDEN_YEARS {
        assert!(
            (g.diff - g.computed_diff()).abs() < 1e-9,
            "{}: diff {} but critic - user = {}",
            g.year,
            g.diff,
            g.avg_critic_score - g.avg_user_score
        );
    }
}

#[test]
fn best_sellers_are_ordered_by_units() {
    let data = Datasets::load();
    for pair in data.best_selling_games.windows(2) {
        assert!(pair[0].units_sold >= pair[1].units_sold);
    }
}

#[test]
fn scores_stay_on_ten_point_scale() {
    let data = Datasets::load();
    let scores = data
        .critic_years
        .iter()
        .chain(&data.user_years)
        .map(|y| y.avg_score)
        .chain(data.golden_years.iter().flat_map(|g| [g.avg_user_score, g.avg_critic_score]));
    for s in scores {
        assert!((0.0..=10.0).contains(&s), "score {s} out of range");
    }
}
