// File: crates/game-insights/tests/analysis.rs
// Purpose: Derivations feeding the panels: name cleanup, ranking, per-year sales, extremes.

use game_insights::analysis::{
    biggest_disagreement, first_max_by, most_productive_year, platform_dominance, ranked_by_score,
    sales_by_year, sales_by_year_ranked, score_range, simplify_name, year_range,
};
use game_insights::Datasets;

#[test]
fn simplified_name_is_prefix_before_first_for() {
    assert_eq!(simplify_name("Wii Sports for Wii"), "Wii Sports");
    assert_eq!(simplify_name("Pokemon Red / Green / Blue Version for GB"), "Pokemon Red / Green / Blue Version");
    assert_eq!(simplify_name("A for B for C"), "A");
    assert_eq!(simplify_name("Minecraft"), "Minecraft");
    // "for" without surrounding spaces is part of the name
    assert_eq!(simplify_name("Fortnite for PC"), "Fortnite");

    let data = Datasets::load();
    for g in &data.best_selling_games {
        let short = simplify_name(g.name);
        let expected = g.name.split(" for ").next().unwrap();
        assert_eq!(short, expected);
        assert!(g.name.starts_with(short));
    }
}

#[test]
fn top_seller_is_wii_sports() {
    let data = Datasets::load();
    let top = &data.best_selling_games[0];
    assert_eq!(simplify_name(top.name), "Wii Sports");
    assert_eq!(top.units_sold, 82.9);
}

#[test]
fn ranked_years_are_non_increasing() {
    let data = Datasets::load();
    for years in [&data.critic_years, &data.user_years] {
        let ranked = ranked_by_score(years);
        assert_eq!(ranked.len(), years.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].avg_score >= pair[1].avg_score);
        }
    }
}

#[test]
fn ranking_keeps_ties_in_input_order() {
    let data = Datasets::load();
    let ranked: Vec<i32> = ranked_by_score(&data.user_years).iter().map(|y| y.year).collect();
    assert_eq!(ranked, vec![1997, 1998, 2010, 2009, 2008, 1996, 2005, 2006, 2000, 2002]);
}

#[test]
fn sales_by_year_sums_each_year() {
    let data = Datasets::load();
    let games = &data.best_selling_games;
    let totals = sales_by_year(games);

    let years: Vec<i32> = totals.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![1985, 1998, 2006, 2008, 2009, 2010, 2012, 2017]);
    for s in &totals {
        let expected: f64 = games.iter().filter(|g| g.year == s.year).map(|g| g.units_sold).sum();
        assert!((s.units_sold - expected).abs() < 1e-9, "year {}", s.year);
    }
    let grand: f64 = totals.iter().map(|s| s.units_sold).sum();
    let direct: f64 = games.iter().map(|g| g.units_sold).sum();
    assert!((grand - direct).abs() < 1e-9);
}

#[test]
fn sales_ranked_descending_with_2006_first() {
    let data = Datasets::load();
    let ranked = sales_by_year_ranked(&data.best_selling_games);
    for pair in ranked.windows(2) {
        assert!(pair[0].units_sold >= pair[1].units_sold);
    }
    assert_eq!(ranked[0].year, 2006);
    assert!((ranked[0].units_sold - (82.9 + 30.8)).abs() < 1e-9);
    assert!((ranked[0].units_sold - 113.7).abs() < 1e-9);
    assert_eq!(ranked[1].year, 2009);
    assert!((ranked[1].units_sold - 63.43).abs() < 1e-9);
}

#[test]
fn biggest_disagreement_is_1997() {
    let data = Datasets::load();
    let g = biggest_disagreement(&data.golden_years).unwrap();
    assert_eq!(g.year, 1997);
    assert_eq!(g.diff, -1.57);
}

#[test]
fn summary_statistics() {
    let data = Datasets::load();
    assert_eq!(platform_dominance(&data.best_selling_games), Some(("Wii", 4)));
    assert_eq!(year_range(&data.best_selling_games), Some((1985, 2017)));
    assert_eq!(most_productive_year(&data.critic_years).map(|y| y.year), Some(2011));
    assert_eq!(score_range(&data.critic_years), Some((8.62, 9.32)));

    let best_user = first_max_by(&data.golden_years, |g| g.avg_user_score).unwrap();
    assert_eq!((best_user.year, best_user.avg_user_score), (1997, 9.5));
    let best_critic = first_max_by(&data.golden_years, |g| g.avg_critic_score).unwrap();
    assert_eq!((best_critic.year, best_critic.avg_critic_score), (1998, 9.32));
}

#[test]
fn extremes_prefer_first_row_on_ties() {
    let rows = [(1, 5.0), (2, 7.0), (3, 7.0), (4, 1.0), (5, 1.0)];
    assert_eq!(first_max_by(&rows, |r| r.1).map(|r| r.0), Some(2));
    assert_eq!(game_insights::analysis::first_min_by(&rows, |r| r.1).map(|r| r.0), Some(4));
    assert_eq!(first_max_by(&[] as &[(i32, f64)], |r| r.1), None);
}

#[test]
fn empty_tables_yield_none() {
    assert_eq!(platform_dominance(&[]), None);
    assert_eq!(year_range(&[]), None);
    assert!(sales_by_year(&[]).is_empty());
    assert_eq!(score_range(&[]), None);
}
