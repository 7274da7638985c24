// File: crates/demo/tests/dataset.rs
// Purpose: label,value CSV parsing and the per-type chart set built from it.

use chart_core::{ChartError, ChartType, Theme};
use chart_demo::{build_configs, read_label_values, Dataset};

fn parse(text: &str) -> Dataset {
    let rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(text.as_bytes());
    read_label_values(rdr).expect("parse csv")
}

#[test]
fn columns_found_by_header_name() {
    let ds = parse("value, label\n3, a\n4.5, b\n");
    assert_eq!(ds.labels, vec!["a", "b"]);
    assert_eq!(ds.values, vec![3.0, 4.5]);
}

#[test]
fn falls_back_to_first_two_columns_and_skips_bad_rows() {
    let ds = parse("month,sales\nJan,10\nFeb,oops\nMar,NaN\nApr,7\n");
    assert_eq!(ds.labels, vec!["Jan", "Apr"]);
    assert_eq!(ds.values, vec![10.0, 7.0]);
}

#[test]
fn sample_set_covers_every_type_and_validates() {
    let configs = build_configs(None, &Theme::classic());
    let types: Vec<ChartType> = configs.iter().map(|c| c.chart_type()).collect();
    assert_eq!(types, ChartType::ALL.to_vec());
    assert!(configs.iter().all(|c| c.validate().is_ok()));
}

#[test]
fn loaded_data_fills_every_chart() {
    let ds = parse("label,value\nq1,120\nq2,340\nq3,90\nq4,410\nq5,260\n");
    let configs = build_configs(Some(&ds), &Theme::dark());
    for cfg in &configs {
        assert_eq!(cfg.data, ds.values);
        assert_eq!(cfg.validate(), Ok::<(), ChartError>(()), "{}", cfg.chart_type().name());
    }
    let bar = &configs[0];
    let labels = bar.kind.axis_labels().unwrap();
    assert_eq!(labels.x, ds.labels);
    assert_eq!(labels.y_max(), 500.0);
}
