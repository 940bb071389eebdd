use cohort::math::grid::linspace;
use cohort::model::cwr::{CwrModel, CwrParams};
use cohort::plot::render_series_html;

fn main() -> anyhow::Result<()> {
    let model = CwrModel::new(CwrParams::baseline())?;

    let times = linspace(0.0, 100.0, 100);
    let series = model.sample(&times);

    let out = "cohort.html";
    render_series_html(&series, out)?;
    println!("wrote {}", out);
    Ok(())
}
