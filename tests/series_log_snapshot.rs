use cohort::io::series_log::write_series_log;
use cohort::math::grid::linspace;
use cohort::model::cwr::{CwrModel, CwrParams};

#[test]
fn series_log_snapshot_small() {
    let model = CwrModel::new(CwrParams::baseline()).expect("baseline params invalid");
    let times = linspace(0.0, 10.0, 11);
    let series = model.sample(&times);

    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_series_log(tmp.path(), "TEST-SMALL", &series).expect("write series log");

    let s = std::fs::read_to_string(path).expect("read series log");
    insta::assert_snapshot!(s);
}
