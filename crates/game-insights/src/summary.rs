// File: crates/game-insights/src/summary.rs
// Summary: Key-insights digest printed after the figure is written.

use std::fmt;

use chart_core::format_shortest;
use thiserror::Error;

use crate::analysis::{
    biggest_disagreement, first_max_by, most_productive_year, platform_dominance, score_range, year_range,
};
use crate::datasets::{BestSellingGame, Datasets, GoldenYear, RatedYear};

const RULE: &str = "============================================================";

/// A statistic was requested over a table with no rows.
#[derive(Debug, Error)]
#[error("table `{0}` has no rows")]
pub struct EmptyTable(pub &'static str);

/// Facts shown in the digest, computed once from the tables.
#[derive(Clone, Debug)]
pub struct Insights {
    pub top_game: BestSellingGame,
    pub dominant_platform: (&'static str, usize),
    pub year_range: (i32, i32),
    pub best_critic_year: RatedYear,
    pub most_productive: RatedYear,
    pub critic_score_range: (f64, f64),
    pub golden_years: Vec<i32>,
    pub best_user_golden: GoldenYear,
    pub best_critic_golden: GoldenYear,
    pub biggest_disagreement: GoldenYear,
    /// Where the figure was written, echoed in the footer.
    pub output: String,
}

impl Insights {
    pub fn from_datasets(data: &Datasets, output: impl Into<String>) -> Result<Self, EmptyTable> {
        let games = &data.best_selling_games;
        let critics = &data.critic_years;
        let golden = &data.golden_years;
        Ok(Self {
            // the table is already ordered by units sold
            top_game: *games.first().ok_or(EmptyTable("best_selling_games"))?,
            dominant_platform: platform_dominance(games).ok_or(EmptyTable("best_selling_games"))?,
            year_range: year_range(games).ok_or(EmptyTable("best_selling_games"))?,
            best_critic_year: *critics.first().ok_or(EmptyTable("critic_years"))?,
            most_productive: *most_productive_year(critics).ok_or(EmptyTable("critic_years"))?,
            critic_score_range: score_range(critics).ok_or(EmptyTable("critic_years"))?,
            golden_years: golden.iter().map(|g| g.year).collect(),
            best_user_golden: *first_max_by(golden, |g| g.avg_user_score).ok_or(EmptyTable("golden_years"))?,
            best_critic_golden: *first_max_by(golden, |g| g.avg_critic_score).ok_or(EmptyTable("golden_years"))?,
            biggest_disagreement: *biggest_disagreement(golden).ok_or(EmptyTable("golden_years"))?,
            output: output.into(),
        })
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "VIDEO GAME ANALYSIS - KEY INSIGHTS")?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\n[CHART] BEST SELLING GAMES:")?;
        writeln!(f, "• Top game: {} ({}M sales)", self.top_game.name, format_shortest(self.top_game.units_sold))?;
        writeln!(f, "• Platform dominance: {} ({} games)", self.dominant_platform.0, self.dominant_platform.1)?;
        writeln!(f, "• Year range: {} - {}", self.year_range.0, self.year_range.1)?;

        writeln!(f, "\n[TROPHY] CRITICS' FAVORITE YEARS:")?;
        writeln!(
            f,
            "• Best year: {} (Score: {})",
            self.best_critic_year.year,
            format_shortest(self.best_critic_year.avg_score)
        )?;
        writeln!(
            f,
            "• Most productive year: {} ({} games)",
            self.most_productive.year, self.most_productive.num_games
        )?;
        writeln!(f, "• Average score range: {:.2} - {:.2}", self.critic_score_range.0, self.critic_score_range.1)?;

        writeln!(f, "\n[STAR] GOLDEN YEARS (User/Critic Score > 9.0):")?;
        let years = self.golden_years.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(f, "• Golden years identified: {years}")?;
        writeln!(
            f,
            "• Best user score: {:.1} (Year: {})",
            self.best_user_golden.avg_user_score, self.best_user_golden.year
        )?;
        writeln!(
            f,
            "• Best critic score: {:.2} (Year: {})",
            self.best_critic_golden.avg_critic_score, self.best_critic_golden.year
        )?;
        writeln!(
            f,
            "• Biggest disagreement: {:.2} (Year: {})",
            self.biggest_disagreement.diff, self.biggest_disagreement.year
        )?;

        writeln!(f, "\n{RULE}")?;
        writeln!(f, "Visualization saved as '{}'", self.output)?;
        writeln!(f, "{RULE}")
    }
}
