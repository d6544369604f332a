// File: crates/game-insights/src/datasets.rs
// Summary: The four fixed tables (best sellers, critic years, user years, golden years).

/// One of the all-time best-selling games.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestSellingGame {
    /// Full listing name, e.g. "Wii Sports for Wii".
    pub name: &'static str,
    /// Units sold, in millions.
    pub units_sold: f64,
    pub year: i32,
    pub platform: &'static str,
}

/// A release year with its number of rated games and their average score (0-10).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatedYear {
    pub year: i32,
    pub num_games: u32,
    pub avg_score: f64,
}

/// A year where users and critics both scored games unusually high.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldenYear {
    pub year: i32,
    pub num_games: u32,
    pub avg_user_score: f64,
    pub avg_critic_score: f64,
    /// Critic minus user score, rounded to two decimals.
    pub diff: f64,
}

impl GoldenYear {
    /// `avg_critic_score - avg_user_score` rounded to two decimals; equals `diff`.
    pub fn computed_diff(&self) -> f64 {
        ((self.avg_critic_score - self.avg_user_score) * 100.0).round() / 100.0
    }
}

const fn game(name: &'static str, units_sold: f64, year: i32, platform: &'static str) -> BestSellingGame {
    BestSellingGame { name, units_sold, year, platform }
}

const fn rated(year: i32, num_games: u32, avg_score: f64) -> RatedYear {
    RatedYear { year, num_games, avg_score }
}

const fn golden(year: i32, num_games: u32, avg_user_score: f64, avg_critic_score: f64, diff: f64) -> GoldenYear {
    GoldenYear { year, num_games, avg_user_score, avg_critic_score, diff }
}

/// Ordered by units sold, highest first.
pub const BEST_SELLING_GAMES: [BestSellingGame; 10] = [
    game("Wii Sports for Wii", 82.9, 2006, "Wii"),
    game("Super Mario Bros. for NES", 40.24, 1985, "NES"),
    game("Counter-Strike: Global Offensive for PC", 40.0, 2012, "PC"),
    game("Mario Kart Wii for Wii", 37.32, 2008, "Wii"),
    game("PLAYERUNKNOWN'S BATTLEGROUNDS for PC", 36.6, 2017, "PC"),
    game("Minecraft for PC", 33.15, 2010, "PC"),
    game("Wii Sports Resort for Wii", 33.13, 2009, "Wii"),
    game("Pokemon Red / Green / Blue Version for GB", 31.38, 1998, "GB"),
    game("New Super Mario Bros. for DS", 30.8, 2006, "DS"),
    game("New Super Mario Bros. Wii for Wii", 30.3, 2009, "Wii"),
];

pub const CRITIC_TOP_YEARS: [RatedYear; 10] = [
    rated(1998, 10, 9.32),
    rated(2004, 11, 9.03),
    rated(2002, 9, 8.99),
    rated(1999, 11, 8.93),
    rated(2001, 13, 8.82),
    rated(2011, 26, 8.76),
    rated(2016, 13, 8.67),
    rated(2013, 18, 8.66),
    rated(2008, 20, 8.63),
    rated(2017, 13, 8.62),
];

pub const USER_TOP_YEARS: [RatedYear; 10] = [
    rated(1997, 8, 9.5),
    rated(1998, 10, 9.4),
    rated(2010, 23, 9.24),
    rated(2009, 20, 9.18),
    rated(2008, 20, 9.03),
    rated(1996, 5, 9.0),
    rated(2005, 13, 8.95),
    rated(2006, 16, 8.95),
    rated(2000, 8, 8.80),
    rated(2002, 9, 8.80),
];

pub const GOLDEN_YEARS: [GoldenYear; 6] = [
    golden(1997, 8, 9.5, 7.93, -1.57),
    golden(1998, 10, 9.4, 9.32, -0.08),
    golden(2004, 11, 8.55, 9.03, 0.48),
    golden(2008, 20, 9.03, 8.63, -0.4),
    golden(2009, 20, 9.18, 8.55, -0.63),
    golden(2010, 23, 9.24, 8.41, -0.83),
];

/// All four tables, read-only for the lifetime of a render pass.
#[derive(Clone, Debug)]
pub struct Datasets {
    pub best_selling_games: Vec<BestSellingGame>,
    pub critic_years: Vec<RatedYear>,
    pub user_years: Vec<RatedYear>,
    pub golden_years: Vec<GoldenYear>,
}

impl Datasets {
    pub fn load() -> Self {
        Self {
            best_selling_games: BEST_SELLING_GAMES.to_vec(),
            critic_years: CRITIC_TOP_YEARS.to_vec(),
            user_years: USER_TOP_YEARS.to_vec(),
            golden_years: GOLDEN_YEARS.to_vec(),
        }
    }
}

impl Default for Datasets {
    fn default() -> Self { Self::load() }
}
