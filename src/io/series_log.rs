use anyhow::Context;

use crate::model::cwr::CwrSeries;

/// Write a sampled series as a plain-text table for inspection.
/// Returns the path of the written file.
pub fn write_series_log(
    out_dir: impl AsRef<std::path::Path>,
    run_id: &str,
    series: &CwrSeries,
) -> anyhow::Result<std::path::PathBuf> {
    use std::io::Write;

    std::fs::create_dir_all(out_dir.as_ref()).context("create logs dir failed")?;
    let path = out_dir.as_ref().join(format!("cwr_{}.txt", run_id));
    let mut f = std::fs::File::create(&path)
        .with_context(|| format!("create series log file failed (path={:?})", path))?;

    writeln!(f, "run_id={}", run_id)?;
    writeln!(f, "samples={}", series.len())?;
    writeln!(f)?;
    writeln!(f, "t,children,workers,retirees")?;

    for i in 0..series.len() {
        writeln!(
            f,
            "{:.6},{:.3},{:.3},{:.3}",
            series.t[i], series.children[i], series.workers[i], series.retirees[i]
        )?;
    }

    Ok(path)
}
