use std::path::Path;

use plotly::common::color::NamedColor;
use plotly::common::{Line, Mode};
use plotly::{Plot, Scatter};

use crate::model::cwr::CwrSeries;

/// Build the three-curve figure: one line trace per stage, legend entries
/// matching the stage names.
pub fn series_figure(series: &CwrSeries) -> Plot {
    let mut plot = Plot::new();
    for (values, name, color) in [
        (&series.children, "children", NamedColor::Blue),
        (&series.workers, "workers", NamedColor::Red),
        (&series.retirees, "retirees", NamedColor::Green),
    ] {
        let trace = Scatter::new(series.t.clone(), values.to_vec())
            .mode(Mode::Lines)
            .line(Line::new().color(color))
            .name(name);
        plot.add_trace(trace);
    }
    plot
}

/// Render the figure to a standalone HTML file at `path`.
/// `Plot::write_html` panics on a filesystem failure, so the output
/// directory is checked here first and surfaced as an error.
pub fn render_series_html(series: &CwrSeries, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    anyhow::ensure!(!series.is_empty(), "cannot plot an empty series");
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        anyhow::ensure!(
            dir.is_dir(),
            "output directory does not exist (path={:?})",
            path
        );
    }
    series_figure(series).write_html(path);
    Ok(())
}
