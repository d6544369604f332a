// File: crates/game-insights/src/panels.rs
// Summary: Builders for the seven report panels and their placement on the 4x2 figure grid.

use chart_core::theme::{hex, viridis_ramp};
use chart_core::{
    Axis, Cell, Chart, Color, Figure, GridLines, GridSpec, LegendPosition, Series, SeriesType, Theme, ValueFormat,
    ValueLabels,
};

use crate::analysis::{ranked_by_score, sales_by_year, sales_by_year_ranked, simplify_name};
use crate::datasets::{BestSellingGame, Datasets, GoldenYear, RatedYear};

/// Physical figure size in inches; pixels follow from the render dpi.
pub const FIGURE_WIDTH_IN: f32 = 24.0;
pub const FIGURE_HEIGHT_IN: f32 = 30.0;

// Autoscale padding as a fraction of the data span.
const MARGIN: f64 = 0.05;

const CRITIC_RED: u32 = 0xe74c3c;
const USER_BLUE: u32 = 0x3498db;
const USER_GREEN: u32 = 0x2ecc71;
const CRITIC_ORANGE: u32 = 0xe67e22;
const POSITIVE_GREEN: u32 = 0x27ae60;
const SALES_PURPLE: u32 = 0x9b59b6;
const TIMELINE_GREY: u32 = 0x95a5a6;
const GOLDEN_AMBER: u32 = 0xf39c12;

/// 4 rows x 2 columns with wide gutters so titles and tick labels fit.
pub fn report_grid() -> GridSpec {
    GridSpec::new(4, 2).margins(0.08, 0.08, 0.95, 0.96).spacing(0.3, 0.4)
}

fn panel(title: &str) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.title_pad = 15.0;
    chart
}

fn year_labels<T>(rows: &[T], year: impl Fn(&T) -> i32) -> Vec<String> {
    rows.iter().map(|r| year(r).to_string()).collect()
}

/// Panel 1: horizontal bars of units sold, best seller on top.
pub fn best_sellers_panel(games: &[BestSellingGame]) -> Chart {
    let mut chart = panel("Top 10 Best-Selling Video Games of All Time");
    chart.title_size = 14.0;
    chart.x_axis = Axis::auto("Games Sold (Millions)");
    chart.y_axis = Axis::categorical("", games.iter().map(|g| simplify_name(g.name)))
        .inverted()
        .with_sizes(11.0, 10.0);
    chart.grid = GridLines::X;
    chart.add_series(
        Series::hbars(games.iter().map(|g| g.units_sold))
            .point_colors(viridis_ramp(games.len()))
            .alpha(0.8)
            .edge(0.5)
            .labels(ValueLabels::new(ValueFormat::Shortest).suffix("M").offset(1.0).size(9.0)),
    );
    chart.autoscale_axes(MARGIN);
    chart
}

/// Panels 2 and 3: years ranked by average score with the value axis clipped to `visible`.
pub fn ranked_years_panel(years: &[RatedYear], title: &str, y_label: &str, color: u32, visible: (f64, f64)) -> Chart {
    let ranked = ranked_by_score(years);
    let mut chart = panel(title);
    chart.x_axis = Axis::categorical("Year", year_labels(&ranked, |y| y.year)).with_sizes(9.0, 9.0);
    chart.y_axis = Axis::new(y_label, visible.0, visible.1);
    chart.grid = GridLines::Y;
    chart.add_series(
        Series::bars(ranked.iter().map(|y| y.avg_score))
            .color(hex(color))
            .alpha(0.7)
            .edge(0.5)
            .labels(ValueLabels::new(ValueFormat::Fixed(2)).offset(0.02)),
    );
    chart.autoscale_axes(MARGIN);
    chart
}

pub fn critic_years_panel(years: &[RatedYear]) -> Chart {
    ranked_years_panel(
        years,
        "Top 10 Years with Highest Critic Ratings (Ranked)",
        "Average Critic Score",
        CRITIC_RED,
        (8.4, 9.5),
    )
}

pub fn user_years_panel(years: &[RatedYear]) -> Chart {
    ranked_years_panel(
        years,
        "Top 10 Years with Highest User Ratings (Ranked)",
        "Average User Score",
        USER_BLUE,
        (8.5, 9.7),
    )
}

/// Panel 4: user and critic score side by side for each golden year.
pub fn golden_comparison_panel(golden: &[GoldenYear]) -> Chart {
    const WIDTH: f64 = 0.35;
    let labels = ValueLabels::new(ValueFormat::Fixed(1)).offset(0.05);

    let mut chart = panel("Golden Years: User vs Critic Scores Comparison");
    chart.x_axis = Axis::categorical("Year", year_labels(golden, |g| g.year)).with_sizes(9.0, 9.0);
    chart.y_axis = Axis::new("Average Score", 7.0, 10.0);
    chart.grid = GridLines::Y;
    chart.legend = Some(LegendPosition::UpperRight);
    chart.add_series(
        Series::bars(golden.iter().map(|g| g.avg_user_score))
            .named("User Score")
            .offset(-WIDTH / 2.0)
            .bar_width(WIDTH)
            .color(hex(USER_GREEN))
            .alpha(0.8)
            .edge(0.5)
            .labels(labels.clone()),
    );
    chart.add_series(
        Series::bars(golden.iter().map(|g| g.avg_critic_score))
            .named("Critic Score")
            .offset(WIDTH / 2.0)
            .bar_width(WIDTH)
            .color(hex(CRITIC_ORANGE))
            .alpha(0.8)
            .edge(0.5)
            .labels(labels),
    );
    chart.autoscale_axes(MARGIN);
    chart
}

/// Fill for a critic-minus-user bar: red when critics scored lower.
pub fn difference_color(diff: f64) -> Color {
    if diff < 0.0 { hex(CRITIC_RED) } else { hex(POSITIVE_GREEN) }
}

/// Panel 5: signed critic-minus-user difference with a zero reference line.
pub fn score_difference_panel(golden: &[GoldenYear], theme: &Theme) -> Chart {
    let mut chart = panel("Golden Years: Critic vs User Score Differences");
    chart.x_axis = Axis::categorical("Year", year_labels(golden, |g| g.year)).with_sizes(9.0, 9.0);
    chart.y_axis = Axis::auto("Critic - User Score");
    chart.grid = GridLines::Y;
    chart.add_series(
        Series::bars(golden.iter().map(|g| g.diff))
            .point_colors(golden.iter().map(|g| difference_color(g.diff)).collect())
            .alpha(0.7)
            .edge(0.5)
            .labels(ValueLabels::new(ValueFormat::Fixed(2)).offset(0.05).negative_offset(0.1).size(9.0)),
    );
    chart.add_series(Series::hline(0.0).color(theme.reference_line).stroke(1.0));
    chart.autoscale_axes(MARGIN);
    chart
}

/// Panel 6: units sold summed per year, best year first.
pub fn sales_ranked_panel(games: &[BestSellingGame]) -> Chart {
    let ranked = sales_by_year_ranked(games);
    let mut chart = panel("Sales Performance Ranked by Year (Top 10 Games)");
    chart.x_axis = Axis::categorical("Year", year_labels(&ranked, |s| s.year)).with_sizes(9.0, 9.0);
    chart.y_axis = Axis::auto("Total Sales (Millions)");
    chart.grid = GridLines::Y;
    chart.add_series(
        Series::bars(ranked.iter().map(|s| s.units_sold))
            .color(hex(SALES_PURPLE))
            .alpha(0.7)
            .edge(0.5)
            .labels(ValueLabels::new(ValueFormat::Fixed(1)).suffix("M").offset(1.0)),
    );
    chart.autoscale_axes(MARGIN);
    chart
}

/// Panel 7: per-year sales on a numeric year axis with golden-year markers
/// on a tickless right axis.
pub fn timeline_panel(games: &[BestSellingGame], golden: &[GoldenYear]) -> Chart {
    let sales = sales_by_year(games);
    let mut chart = panel("Timeline: Sales Performance vs Golden Years");
    chart.x_axis = Axis::auto("Year").with_sizes(9.0, 9.0);
    chart.y_axis = Axis::auto("Sales (Millions)").with_color(hex(TIMELINE_GREY));
    chart.y2_axis = Some(Axis::new("Golden Years", 0.0, 1.0).hide_ticks().with_color(hex(GOLDEN_AMBER)));
    chart.legend = Some(LegendPosition::UpperLeft);
    chart.legend_size = 9.0;
    chart.add_series(
        Series::with_data(SeriesType::Bar, sales.iter().map(|s| (s.year as f64, s.units_sold)).collect())
            .named("Total Sales (Top 10)")
            .color(hex(TIMELINE_GREY))
            .alpha(0.6),
    );
    chart.add_series(
        Series::vlines(golden.iter().map(|g| g.year as f64))
            .named("Golden Years")
            .color(hex(GOLDEN_AMBER))
            .alpha(0.8)
            .stroke(3.0)
            .dashed(11.1, 4.8)
            .on_secondary(),
    );
    chart.autoscale_axes(MARGIN);
    chart
}

/// All seven panels on the report grid.
pub fn build_figure(data: &Datasets, theme: &Theme) -> chart_core::Result<Figure> {
    let mut fig = Figure::new(report_grid());
    fig.add_panel(Cell::row(0, 2), best_sellers_panel(&data.best_selling_games))?;
    fig.add_panel(Cell::at(1, 0), critic_years_panel(&data.critic_years))?;
    fig.add_panel(Cell::at(1, 1), user_years_panel(&data.user_years))?;
    fig.add_panel(Cell::at(2, 0), golden_comparison_panel(&data.golden_years))?;
    fig.add_panel(Cell::at(2, 1), score_difference_panel(&data.golden_years, theme))?;
    fig.add_panel(Cell::at(3, 0), sales_ranked_panel(&data.best_selling_games))?;
    fig.add_panel(Cell::at(3, 1), timeline_panel(&data.best_selling_games, &data.golden_years))?;
    Ok(fig)
}
