// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the headless drawing pipeline (plot area, series, axes, legend) on Skia canvases.

use skia_safe as skia;

use crate::axis::{Axis, Ticks};
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::{nice_step, nice_ticks, step_decimals};
use crate::output;
use crate::scale::ValueScale;
use crate::series::{Series, SeriesType};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::{with_alpha, Theme};
use crate::types::{pt_to_px, Insets, DPI, HEIGHT, WIDTH};
use crate::view::ViewState;

// Tick geometry, in points.
const TICK_LEN: f32 = 3.5;
const TICK_PAD: f32 = 3.5;
const LABEL_PAD: f32 = 4.0;
// Minimum spacing between automatic ticks, in points.
const TICK_SPACING: f32 = 50.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped entirely when false (font-independent snapshots).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Surface sized from a physical figure size in inches at `dpi`.
    pub fn for_figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self {
            width: (width_in * dpi).round() as i32,
            height: (height_in * dpi).round() as i32,
            dpi,
            ..Self::default()
        }
    }
}

/// Which axis draws grid lines at its ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLines {
    None,
    X,
    Y,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// Everything a chart needs from its host surface while drawing.
pub(crate) struct DrawContext<'a> {
    pub theme: &'a Theme,
    pub text: &'a TextShaper,
    pub dpi: f32,
    pub draw_labels: bool,
}

impl DrawContext<'_> {
    #[inline]
    fn px(&self, pt: f32) -> f32 {
        pt_to_px(pt, self.dpi)
    }

    fn spec(&self, size_pt: f32, color: skia::Color) -> TextSpec {
        TextSpec::new(self.px(size_pt), color)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    /// Title size in points.
    pub title_size: f32,
    /// Gap between the title and the plot area, in points.
    pub title_pad: f32,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Right-hand axis sharing the x axis; secondary series map onto it.
    pub y2_axis: Option<Axis>,
    pub grid: GridLines,
    pub legend: Option<LegendPosition>,
    /// Legend text size in points.
    pub legend_size: f32,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            title_size: 12.0,
            title_pad: 6.0,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: None,
            grid: GridLines::None,
            legend: None,
            legend_size: 10.0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit every autoscaled axis to the data, padding by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let view = ViewState::from_chart(self, margin);
        view.apply_to_chart(self);
    }

    /// Render the chart alone, plot area inset by `opts.insets`, to PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let plot = RectI32::from_ltwh(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.hsum() as i32,
            opts.height - opts.insets.vsum() as i32,
        );
        if plot.is_empty() {
            return Err(ChartError::DegenerateLayout { width: plot.width(), height: plot.height() });
        }
        let text = TextShaper::new();
        let ctx = DrawContext { theme: &opts.theme, text: &text, dpi: opts.dpi, draw_labels: opts.draw_labels };
        output::render_png(opts.width, opts.height, opts.theme.background, |canvas| {
            self.draw(canvas, plot, &ctx);
            Ok(())
        })
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        output::write_png(output_png_path.as_ref(), &bytes)
    }

    /// Draw into `plot`, the area inside the axes; decorations spill outside it.
    pub(crate) fn draw(&self, canvas: &skia::Canvas, plot: RectI32, ctx: &DrawContext) {
        let sx = horizontal_scale(&self.x_axis, plot);
        let sy = vertical_scale(&self.y_axis, plot);
        let sy2 = self.y2_axis.as_ref().map(|a| vertical_scale(a, plot));

        let mut bg = skia::Paint::default();
        bg.set_color(ctx.theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        draw_grid(canvas, plot, self, &sx, &sy, ctx);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            let vy = if s.secondary { sy2.as_ref().unwrap_or(&sy) } else { &sy };
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, &sx, vy, s, ctx),
                SeriesType::HBar => draw_hbar_series(canvas, &sx, &sy, s, ctx),
                SeriesType::VLine => draw_vlines(canvas, plot, &sx, s, ctx),
                SeriesType::HLine => draw_hlines(canvas, plot, vy, s, ctx),
            }
        }
        canvas.restore();

        if ctx.draw_labels {
            for s in &self.series {
                let vy = if s.secondary { sy2.as_ref().unwrap_or(&sy) } else { &sy };
                draw_value_labels(canvas, &sx, vy, s, ctx);
            }
        }

        draw_frame(canvas, plot, ctx);
        draw_x_axis(canvas, plot, &self.x_axis, &sx, ctx);
        draw_y_axis(canvas, plot, &self.y_axis, &sy, Side::Left, ctx);
        if let (Some(axis), Some(scale)) = (&self.y2_axis, &sy2) {
            draw_y_axis(canvas, plot, axis, scale, Side::Right, ctx);
        }

        if ctx.draw_labels {
            if let Some(title) = &self.title {
                let spec = ctx.spec(self.title_size, ctx.theme.title).bold();
                let y = plot.top as f32 - ctx.px(self.title_pad);
                ctx.text.draw(canvas, title, plot.center_x(), y, &spec, HAlign::Center, VAlign::Bottom);
            }
        }

        if let Some(position) = self.legend {
            draw_legend(canvas, plot, self, position, ctx);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn horizontal_scale(axis: &Axis, plot: RectI32) -> ValueScale {
    let (l, r) = (plot.left as f32, plot.right as f32);
    if axis.inverted {
        ValueScale::new(r, l, axis.min, axis.max)
    } else {
        ValueScale::new(l, r, axis.min, axis.max)
    }
}

fn vertical_scale(axis: &Axis, plot: RectI32) -> ValueScale {
    let (t, b) = (plot.top as f32, plot.bottom as f32);
    if axis.inverted {
        ValueScale::new(t, b, axis.min, axis.max)
    } else {
        ValueScale::new(b, t, axis.min, axis.max)
    }
}

/// Tick positions paired with their label text, limited to the visible range.
fn ticks_for(axis: &Axis, length_px: f32, ctx: &DrawContext) -> Vec<(f64, String)> {
    let (lo, hi) = if axis.min <= axis.max { (axis.min, axis.max) } else { (axis.max, axis.min) };
    match &axis.ticks {
        Ticks::Hidden => Vec::new(),
        Ticks::Categories(names) => names
            .iter()
            .enumerate()
            .map(|(i, n)| (i as f64, n.clone()))
            .filter(|(p, _)| *p >= lo && *p <= hi)
            .collect(),
        Ticks::Auto => {
            let target = ((length_px / ctx.px(TICK_SPACING)) as usize).clamp(3, 10);
            let decimals = step_decimals(nice_step(lo, hi, target));
            nice_ticks(lo, hi, target)
                .into_iter()
                .map(|v| (v, format!("{:.*}", decimals, v)))
                .collect()
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, chart: &Chart, sx: &ValueScale, sy: &ValueScale, ctx: &DrawContext) {
    let paint = stroke_paint(ctx.theme.grid, ctx.px(0.8));
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    if matches!(chart.grid, GridLines::X | GridLines::Both) {
        for (v, _) in ticks_for(&chart.x_axis, plot.width() as f32, ctx) {
            let x = sx.to_px(v);
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
    if matches!(chart.grid, GridLines::Y | GridLines::Both) {
        for (v, _) in ticks_for(&chart.y_axis, plot.height() as f32, ctx) {
            let y = sy.to_px(v);
            canvas.draw_line((l, y), (r, y), &paint);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &ValueScale, sy: &ValueScale, s: &Series, ctx: &DrawContext) {
    let half = s.bar_width * 0.5;
    let edge = (s.edge_width > 0.0).then(|| stroke_paint(ctx.theme.bar_edge, ctx.px(s.edge_width)));
    for (i, &(p, v)) in s.data_xy.iter().enumerate() {
        let (x0, x1) = (sx.to_px(p - half), sx.to_px(p + half));
        let (y0, y1) = (sy.to_px(0.0), sy.to_px(v));
        let rect = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
        canvas.draw_rect(rect, &fill_paint(with_alpha(s.fill_at(i), s.alpha)));
        if let Some(edge) = &edge {
            canvas.draw_rect(rect, edge);
        }
    }
}

fn draw_hbar_series(canvas: &skia::Canvas, sx: &ValueScale, sy: &ValueScale, s: &Series, ctx: &DrawContext) {
    let half = s.bar_width * 0.5;
    let edge = (s.edge_width > 0.0).then(|| stroke_paint(ctx.theme.bar_edge, ctx.px(s.edge_width)));
    for (i, &(p, v)) in s.data_xy.iter().enumerate() {
        let (x0, x1) = (sx.to_px(0.0), sx.to_px(v));
        let (y0, y1) = (sy.to_px(p - half), sy.to_px(p + half));
        let rect = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
        canvas.draw_rect(rect, &fill_paint(with_alpha(s.fill_at(i), s.alpha)));
        if let Some(edge) = &edge {
            canvas.draw_rect(rect, edge);
        }
    }
}

fn line_paint(s: &Series, ctx: &DrawContext) -> skia::Paint {
    let mut paint = stroke_paint(with_alpha(s.color, s.alpha), ctx.px(s.stroke_width));
    if let Some((on, off)) = s.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[ctx.px(on), ctx.px(off)], 0.0));
    }
    paint
}

fn draw_vlines(canvas: &skia::Canvas, plot: RectI32, sx: &ValueScale, s: &Series, ctx: &DrawContext) {
    let paint = line_paint(s, ctx);
    for &(x, _) in &s.data_xy {
        let px = sx.to_px(x);
        canvas.draw_line((px, plot.top as f32), (px, plot.bottom as f32), &paint);
    }
}

fn draw_hlines(canvas: &skia::Canvas, plot: RectI32, sy: &ValueScale, s: &Series, ctx: &DrawContext) {
    let paint = line_paint(s, ctx);
    for &(y, _) in &s.data_xy {
        let py = sy.to_px(y);
        canvas.draw_line((plot.left as f32, py), (plot.right as f32, py), &paint);
    }
}

fn draw_value_labels(canvas: &skia::Canvas, sx: &ValueScale, sy: &ValueScale, s: &Series, ctx: &DrawContext) {
    let Some(labels) = &s.labels else { return };
    let mut spec = ctx.spec(labels.size, ctx.theme.axis_label);
    spec.bold = labels.bold;
    for &(p, v) in &s.data_xy {
        let text = labels.text(v);
        let end = v + labels.signed_offset(v);
        match s.series_type {
            SeriesType::Bar => {
                let valign = if v >= 0.0 { VAlign::Bottom } else { VAlign::Top };
                ctx.text.draw(canvas, &text, sx.to_px(p), sy.to_px(end), &spec, HAlign::Center, valign);
            }
            SeriesType::HBar => {
                let halign = if v >= 0.0 { HAlign::Left } else { HAlign::Right };
                ctx.text.draw(canvas, &text, sx.to_px(end), sy.to_px(p), &spec, halign, VAlign::Center);
            }
            SeriesType::VLine | SeriesType::HLine => {}
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectI32, ctx: &DrawContext) {
    let paint = stroke_paint(ctx.theme.axis_line, ctx.px(0.8));
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_x_axis(canvas: &skia::Canvas, plot: RectI32, axis: &Axis, sx: &ValueScale, ctx: &DrawContext) {
    let color = axis.color.unwrap_or(ctx.theme.tick);
    let tick_paint = stroke_paint(ctx.theme.axis_line, ctx.px(0.8));
    let b = plot.bottom as f32;
    let tick_len = ctx.px(TICK_LEN);
    let label_top = b + tick_len + ctx.px(TICK_PAD);
    let spec = ctx.spec(axis.tick_size, color);

    let mut label_bottom = label_top;
    for (v, text) in ticks_for(axis, plot.width() as f32, ctx) {
        let x = sx.to_px(v);
        canvas.draw_line((x, b), (x, b + tick_len), &tick_paint);
        if ctx.draw_labels {
            ctx.text.draw(canvas, &text, x, label_top, &spec, HAlign::Center, VAlign::Top);
            label_bottom = label_bottom.max(label_top + ctx.text.measure(&text, &spec).1);
        }
    }

    if ctx.draw_labels && !axis.label.is_empty() {
        let spec = ctx.spec(axis.label_size, axis.color.unwrap_or(ctx.theme.axis_label)).bold();
        let y = label_bottom + ctx.px(LABEL_PAD);
        ctx.text.draw(canvas, &axis.label, plot.center_x(), y, &spec, HAlign::Center, VAlign::Top);
    }
}

fn draw_y_axis(canvas: &skia::Canvas, plot: RectI32, axis: &Axis, sy: &ValueScale, side: Side, ctx: &DrawContext) {
    let color = axis.color.unwrap_or(ctx.theme.tick);
    let tick_paint = stroke_paint(ctx.theme.axis_line, ctx.px(0.8));
    let tick_len = ctx.px(TICK_LEN);
    let (edge, dir, halign) = match side {
        Side::Left => (plot.left as f32, -1.0, HAlign::Right),
        Side::Right => (plot.right as f32, 1.0, HAlign::Left),
    };
    let label_x = edge + dir * (tick_len + ctx.px(TICK_PAD));
    let spec = ctx.spec(axis.tick_size, color);

    let mut widest = 0.0f32;
    for (v, text) in ticks_for(axis, plot.height() as f32, ctx) {
        let y = sy.to_px(v);
        canvas.draw_line((edge, y), (edge + dir * tick_len, y), &tick_paint);
        if ctx.draw_labels {
            ctx.text.draw(canvas, &text, label_x, y, &spec, halign, VAlign::Center);
            widest = widest.max(ctx.text.measure_width(&text, &spec));
        }
    }

    if ctx.draw_labels && !axis.label.is_empty() {
        let spec = ctx.spec(axis.label_size, axis.color.unwrap_or(ctx.theme.axis_label)).bold();
        let (_, h) = ctx.text.measure(&axis.label, &spec);
        let x = label_x + dir * (widest + ctx.px(LABEL_PAD) + h * 0.5);
        ctx.text.draw_vertical(canvas, &axis.label, x, plot.center_y(), &spec);
    }
}

fn draw_legend(canvas: &skia::Canvas, plot: RectI32, chart: &Chart, position: LegendPosition, ctx: &DrawContext) {
    let entries: Vec<(&Series, &str)> = chart
        .series
        .iter()
        .filter_map(|s| s.name.as_deref().map(|n| (s, n)))
        .collect();
    if entries.is_empty() || !ctx.draw_labels {
        return;
    }

    let spec = ctx.spec(chart.legend_size, ctx.theme.axis_label);
    let font = spec.size;
    let pad = font * 0.4;
    let swatch_w = font * 2.0;
    let gap = font * 0.8;
    let row_h = font * 1.3;
    let text_w = entries
        .iter()
        .map(|(_, n)| ctx.text.measure_width(n, &spec))
        .fold(0.0f32, f32::max);
    let box_w = pad * 2.0 + swatch_w + gap + text_w;
    let box_h = pad * 2.0 + row_h * entries.len() as f32;

    let inset = font * 0.5;
    let top = plot.top as f32 + inset;
    let left = match position {
        LegendPosition::UpperLeft => plot.left as f32 + inset,
        LegendPosition::UpperRight => plot.right as f32 - inset - box_w,
    };
    let frame = skia::Rect::from_xywh(left, top, box_w, box_h);
    canvas.draw_round_rect(frame, 3.0, 3.0, &fill_paint(ctx.theme.legend_background));
    canvas.draw_round_rect(frame, 3.0, 3.0, &stroke_paint(ctx.theme.legend_border, ctx.px(0.8)));

    for (i, (s, name)) in entries.iter().enumerate() {
        let cy = top + pad + row_h * (i as f32 + 0.5);
        let sx0 = left + pad;
        if s.is_bar() {
            let rect = skia::Rect::from_xywh(sx0, cy - font * 0.35, swatch_w, font * 0.7);
            canvas.draw_rect(rect, &fill_paint(with_alpha(s.fill_at(0), s.alpha)));
            if s.edge_width > 0.0 {
                canvas.draw_rect(rect, &stroke_paint(ctx.theme.bar_edge, ctx.px(s.edge_width)));
            }
        } else {
            canvas.draw_line((sx0, cy), (sx0 + swatch_w, cy), &line_paint(s, ctx));
        }
        ctx.text.draw(canvas, name, sx0 + swatch_w + gap, cy, &spec, HAlign::Left, VAlign::Center);
    }
}
