// File: crates/game-insights/src/analysis.rs
// Summary: Derived views over the fixed tables: name cleanup, ranking, per-year sales, extremes.

use std::collections::BTreeMap;

use crate::datasets::{BestSellingGame, GoldenYear, RatedYear};

/// Display name: everything before the first " for " (the platform qualifier).
pub fn simplify_name(name: &str) -> &str {
    name.find(" for ").map_or(name, |i| &name[..i])
}

/// Rows sorted by average score, highest first; equal scores keep input order.
pub fn ranked_by_score(years: &[RatedYear]) -> Vec<RatedYear> {
    let mut ranked = years.to_vec();
    ranked.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
    ranked
}

/// Total units sold per release year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearSales {
    pub year: i32,
    pub units_sold: f64,
}

/// Units sold summed per year, in ascending year order.
pub fn sales_by_year(games: &[BestSellingGame]) -> Vec<YearSales> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for g in games {
        *totals.entry(g.year).or_insert(0.0) += g.units_sold;
    }
    totals.into_iter().map(|(year, units_sold)| YearSales { year, units_sold }).collect()
}

/// `sales_by_year` ordered by total, highest first.
pub fn sales_by_year_ranked(games: &[BestSellingGame]) -> Vec<YearSales> {
    let mut ranked = sales_by_year(games);
    ranked.sort_by(|a, b| b.units_sold.total_cmp(&a.units_sold));
    ranked
}

/// Most frequent platform and its game count; ties go to the platform seen first.
pub fn platform_dominance(games: &[BestSellingGame]) -> Option<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for g in games {
        match counts.iter_mut().find(|(p, _)| *p == g.platform) {
            Some((_, n)) => *n += 1,
            None => counts.push((g.platform, 1)),
        }
    }
    counts.into_iter().fold(None, |best, (p, n)| match best {
        Some((_, m)) if m >= n => best,
        _ => Some((p, n)),
    })
}

/// Earliest and latest release year.
pub fn year_range(games: &[BestSellingGame]) -> Option<(i32, i32)> {
    let min = games.iter().map(|g| g.year).min()?;
    let max = games.iter().map(|g| g.year).max()?;
    Some((min, max))
}

/// First row with the largest key.
pub fn first_max_by<T>(rows: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    rows.iter().fold(None, |best: Option<&T>, row| match best {
        Some(b) if key(b) >= key(row) => Some(b),
        _ => Some(row),
    })
}

/// First row with the smallest key.
pub fn first_min_by<T>(rows: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    first_max_by(rows, |r| -key(r))
}

/// Year with the most rated games.
pub fn most_productive_year(years: &[RatedYear]) -> Option<&RatedYear> {
    first_max_by(years, |y| y.num_games as f64)
}

/// Lowest and highest average score.
pub fn score_range(years: &[RatedYear]) -> Option<(f64, f64)> {
    let lo = first_min_by(years, |y| y.avg_score)?.avg_score;
    let hi = first_max_by(years, |y| y.avg_score)?.avg_score;
    Some((lo, hi))
}

/// Golden year where critics scored furthest below users.
pub fn biggest_disagreement(golden: &[GoldenYear]) -> Option<&GoldenYear> {
    first_min_by(golden, |g| g.diff)
}
