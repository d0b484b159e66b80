use std::error::Error;

use log::{debug, warn};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::statistics::SeasonRuns;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

/// Look of the career chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub title: &'static str,
    pub title_color: RGBColor,
    pub title_size: f64,
    pub line_color: RGBColor,
    pub fill_alpha: f64,
    pub point_radius: u32,
    pub point_border: u32,
    pub grid_alpha: f64,
    pub show_legend: bool,
}

pub const CAREER_RUNS_STYLE: ChartStyle = ChartStyle {
    title: "CAREER RUNS",
    title_color: RGBColor(30, 58, 138),
    title_size: 20.0,
    line_color: RGBColor(219, 39, 119),
    fill_alpha: 0.1,
    point_radius: 6,
    point_border: 2,
    grid_alpha: 0.1,
    show_legend: false,
};

/// Top of the y axis: the largest value plus 10% headroom, never below 1.
pub fn y_ceiling(series: &[SeasonRuns]) -> u32 {
    let max = series.iter().map(|point| point.runs).max().unwrap_or(0);
    (max + max / 10).max(1)
}

fn draw(canvas: HtmlCanvasElement, series: &[SeasonRuns], style: &ChartStyle) -> Result<(), Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    if series.is_empty() {
        root.present()?;
        return Ok(());
    }

    let title_font = FontDesc::new(FontFamily::SansSerif, style.title_size, FontStyle::Bold)
        .color(&style.title_color);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(style.title, title_font)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..series.len(), 0..y_ceiling(series))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_max_light_lines(0)
        .bold_line_style(BLACK.mix(style.grid_alpha).stroke_width(1))
        .x_labels(series.len())
        .x_label_formatter(&|x| {
            series
                .get(*x)
                .map(|point| point.year.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    let points = || series.iter().enumerate().map(|(i, point)| (i, point.runs));

    chart.draw_series(
        AreaSeries::new(points(), 0, style.line_color.mix(style.fill_alpha).filled())
            .border_style(style.line_color.stroke_width(3)),
    )?;

    chart.draw_series(
        points().map(|coord| Circle::new(coord, style.point_radius, style.line_color.filled())),
    )?;
    chart.draw_series(points().map(|coord| {
        Circle::new(coord, style.point_radius, WHITE.stroke_width(style.point_border))
    }))?;

    if style.show_legend {
        chart.configure_series_labels().border_style(&BLACK).draw()?;
    }

    root.present()?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct CareerChartProps {
    pub series: &'static [SeasonRuns],
    #[prop_or(CAREER_RUNS_STYLE)]
    pub style: ChartStyle,
}

#[function_component(CareerChart)]
pub fn career_chart(props: &CareerChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let series = props.series;
        let style = props.style;
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(CANVAS_WIDTH);
                    canvas.set_height(CANVAS_HEIGHT);

                    match draw(canvas, series, &style) {
                        Ok(()) => debug!("drew career chart with {} points", series.len()),
                        Err(err) => warn!("career chart not drawn: {}", err),
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="career-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="width: 100%; height: auto;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::statistics::CAREER_RUNS;

    #[test]
    fn ceiling_adds_ten_percent_headroom() {
        assert_eq!(y_ceiling(CAREER_RUNS), 1012);
    }

    #[test]
    fn ceiling_of_empty_series_is_one() {
        assert_eq!(y_ceiling(&[]), 1);
    }

    #[test]
    fn career_style_matches_brand() {
        assert_eq!(CAREER_RUNS_STYLE.title, "CAREER RUNS");
        assert_eq!(CAREER_RUNS_STYLE.line_color, RGBColor(219, 39, 119));
        assert!(!CAREER_RUNS_STYLE.show_legend);
    }
}
