// File: crates/game-insights/tests/summary.rs
// Purpose: Exact digest text and determinism across runs.

use game_insights::{Datasets, EmptyTable, Insights};

const EXPECTED: &str = "\
============================================================
VIDEO GAME ANALYSIS - KEY INSIGHTS
============================================================

[CHART] BEST SELLING GAMES:
• Top game: Wii Sports for Wii (82.9M sales)
• Platform dominance: Wii (4 games)
• Year range: 1985 - 2017

[TROPHY] CRITICS' FAVORITE YEARS:
• Best year: 1998 (Score: 9.32)
• Most productive year: 2011 (26 games)
• Average score range: 8.62 - 9.32

[STAR] GOLDEN YEARS (User/Critic Score > 9.0):
• Golden years identified: 1997, 1998, 2004, 2008, 2009, 2010
• Best user score: 9.5 (Year: 1997)
• Best critic score: 9.32 (Year: 1998)
• Biggest disagreement: -1.57 (Year: 1997)

============================================================
Visualization saved as 'video_game_analysis_visualizations.png'
============================================================
";

fn digest() -> String {
    Insights::from_datasets(&Datasets::load(), "video_game_analysis_visualizations.png")
        .expect("tables are populated")
        .to_string()
}

#[test]
fn digest_matches_fixed_layout() {
    assert_eq!(digest(), EXPECTED);
}

#[test]
fn digest_is_identical_across_runs() {
    assert_eq!(digest(), digest());
}

#[test]
fn footer_echoes_output_path() {
    let text = Insights::from_datasets(&Datasets::load(), "out/report.png").unwrap().to_string();
    assert!(text.contains("Visualization saved as 'out/report.png'\n"));
}

#[test]
fn empty_table_is_reported_by_name() {
    let mut data = Datasets::load();
    data.golden_years.clear();
    let err: EmptyTable = Insights::from_datasets(&data, "x.png").unwrap_err();
    assert_eq!(err.to_string(), "table `golden_years` has no rows");
}
