// File: crates/game-insights/tests/report.rs
// Purpose: End-to-end render of the composite PNG plus digest.

use chart_core::RenderOptions;
use game_insights::config::Args;
use game_insights::{render_report, Datasets};

#[test]
fn default_args_describe_fixed_report() {
    let opts = Args::default().render_options();
    assert_eq!((opts.width, opts.height), (2400, 3000));
    assert_eq!(opts.theme.name, "light");
}

#[test]
fn report_writes_png_of_configured_size() {
    let out = std::path::PathBuf::from("target/test_out/report_small.png");
    let args = Args { output: out.clone(), dpi: 20.0, ..Args::default() };
    let opts: RenderOptions = args.render_options();

    let insights = render_report(&Datasets::load(), &opts, &out).expect("render report");
    assert_eq!(insights.output, out.display().to_string());

    let bytes = std::fs::read(&out).expect("png written");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 600));
    // top-left corner is figure margin
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background() {
    let out = std::path::PathBuf::from("target/test_out/report_dark.png");
    let args = Args { output: out.clone(), dpi: 10.0, theme: "dark".into(), ..Args::default() };
    render_report(&Datasets::load(), &args.render_options(), &out).expect("render report");

    let img = image::load_from_memory(&std::fs::read(&out).unwrap()).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
}
