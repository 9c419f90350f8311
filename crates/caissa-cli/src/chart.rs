//! SVG scatter charts of opening success, one point per opening at
//! `(white wins, black wins)`, with a least-squares trend line per band.

use std::{fs, path::Path};

use anyhow::Context;
use caissa_analysis::breakdown::OpeningBreakdown;
use caissa_model::RatingBand;
use caissa_stats::linear_fit::LinearFit;
use plotters::prelude::*;

const CHART_SIZE: (u32, u32) = (960, 720);
const X_LABEL: &str = "White Wins with Opening";
const Y_LABEL: &str = "Black Wins with Opening";

const SEAGREEN: RGBColor = RGBColor(46, 139, 87);
const GOLDENROD: RGBColor = RGBColor(218, 165, 32);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);

/// Band colors in [`RatingBand::STANDARD`] order.
const BAND_COLORS: [RGBColor; 3] = [SEAGREEN, GOLDENROD, LIGHT_CORAL];

/// One band's worth of chart content.
pub(crate) struct BandSeries {
    /// Legend label for the scatter points.
    pub label: String,
    /// Color shared by the band's points and trend line.
    pub color: RGBColor,
    /// `(white_wins, black_wins)` per opening.
    pub points: Vec<(f64, f64)>,
}

/// Renders one chart per non-empty band plus the combined overlay into
/// `dir`, creating the directory as needed.
pub(crate) fn render_all(
    dir: &Path,
    bands: &[(RatingBand, OpeningBreakdown)],
) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create chart directory: {}", dir.display()))?;

    let mut overlay = Vec::new();
    for (index, (band, breakdown)) in bands.iter().enumerate() {
        if breakdown.is_empty() {
            log::warn!("no games in the {} band, skipping its chart", band.name);
            continue;
        }
        let series = BandSeries {
            label: band.legend.to_owned(),
            color: BAND_COLORS[index % BAND_COLORS.len()],
            points: breakdown.scatter_points(),
        };
        let path = dir.join(format!("{}.svg", slug(band.name)));
        render(&path, "Chess Openings Success", std::slice::from_ref(&series))?;
        log::info!("wrote {}", path.display());
        overlay.push(series);
    }

    if overlay.is_empty() {
        log::warn!("no charts rendered: every band is empty");
        return Ok(());
    }
    let path = dir.join("all-levels.svg");
    render(&path, "Chess Openings Success at Varying Levels", &overlay)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn slug(name: &str) -> String {
    name.to_ascii_lowercase().replace(' ', "-")
}

fn render(path: &Path, title: &str, series: &[BandSeries]) -> anyhow::Result<()> {
    let (x_max, y_max) = axis_bounds(series);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()?;

    for band in series {
        let color = band.color;
        chart
            .draw_series(
                band.points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.mix(0.5).filled())),
            )?
            .label(&band.label)
            .legend(move |(x, y)| Circle::new((x + 8, y), 4, color.filled()));

        // The trend line needs at least two openings with distinct white-win
        // counts; a band too uniform to fit still gets its scatter.
        if let Some(fit) = LinearFit::from_points(&band.points) {
            chart
                .draw_series(LineSeries::new(
                    [(0.0, fit.predict(0.0)), (x_max, fit.predict(x_max))],
                    color.stroke_width(2),
                ))?
                .label(fit.to_string())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()?;
    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    Ok(())
}

/// Axis extents with a little headroom so edge points are not clipped.
fn axis_bounds(series: &[BandSeries]) -> (f64, f64) {
    let mut x_max = 0.0f64;
    let mut y_max = 0.0f64;
    for band in series {
        for &(x, y) in &band.points {
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    ((x_max * 1.05).max(1.0), (y_max * 1.05).max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<(f64, f64)>) -> BandSeries {
        BandSeries {
            label: "test".to_owned(),
            color: SEAGREEN,
            points,
        }
    }

    #[test]
    fn axis_bounds_cover_every_series() {
        let bounds = axis_bounds(&[
            series(vec![(10.0, 2.0), (3.0, 8.0)]),
            series(vec![(1.0, 20.0)]),
        ]);
        assert!(bounds.0 >= 10.0);
        assert!(bounds.1 >= 20.0);
    }

    #[test]
    fn axis_bounds_never_collapse() {
        let bounds = axis_bounds(&[series(vec![(0.0, 0.0)])]);
        assert!(bounds.0 > 0.0);
        assert!(bounds.1 > 0.0);
    }

    #[test]
    fn slugs_are_filename_safe() {
        assert_eq!(slug("Beginners"), "beginners");
        assert_eq!(slug("All Levels"), "all-levels");
    }
}
