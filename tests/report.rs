//! 보고서 행 구성과 출력 형식 테스트.
use roof_water_balance::report::{round_display, steep_roof_report, OutputFormat, Report};
use roof_water_balance::roof::{compute_steep_roof, Roof};

fn reference_report() -> (Roof, Report) {
    let roof = Roof::new(100.0, 505.0, 450.0).expect("valid roof");
    let report = steep_roof_report(&roof);
    (roof, report)
}

#[test]
fn report_has_thirteen_ordered_rows() {
    let (_, report) = reference_report();
    let names: Vec<(&str, &str)> = report.records.iter().map(|r| (r.name, r.unit)).collect();
    assert_eq!(
        names,
        vec![
            ("Area", "m2"),
            ("P", "mm/a"),
            ("ETp", "mm/a"),
            ("a", "-"),
            ("g", "-"),
            ("v", "-"),
            ("RD", "mm/a"),
            ("GWN", "mm/a"),
            ("ETp", "mm/a"),
            ("Inflow", "m3/a"),
            ("RD flow", "m3/a"),
            ("GWN flow", "m3/a"),
            ("ETP flow", "m3/a"),
        ]
    );
    assert_eq!(report.len(), 13);
}

#[test]
fn report_values_match_partition_rounded() {
    let (roof, report) = reference_report();
    let res = compute_steep_roof(&roof);
    let a = res.runoff_fraction;
    let v = res.evapotranspiration_fraction;
    let expected = [
        100.0,
        505.0,
        450.0,
        round_display(a),
        0.0,
        round_display(v),
        round_display(505.0 * a),
        0.0,
        round_display(505.0 * v),
        50.5,
        round_display(100.0 * 505.0 * a / 1000.0),
        0.0,
        round_display(100.0 * 505.0 * v / 1000.0),
    ];
    for (rec, exp) in report.records.iter().zip(expected) {
        assert_eq!(rec.value, exp, "row {}", rec.name);
    }
    assert_eq!(report.get("a").map(|r| r.value), Some(0.763));
    assert_eq!(report.get("RD").map(|r| r.value), Some(385.147));
    assert_eq!(report.get("RD flow").map(|r| r.value), Some(38.515));
    assert_eq!(report.get("ETP flow").map(|r| r.value), Some(11.985));
}

#[test]
fn rounding_does_not_touch_partition() {
    let (roof, report) = reference_report();
    let res = compute_steep_roof(&roof);
    assert_ne!(res.runoff_fraction, report.get("a").map_or(0.0, |r| r.value));
}

#[test]
fn get_returns_first_etp_row() {
    let (_, report) = reference_report();
    assert_eq!(report.get("ETp").map(|r| r.value), Some(450.0));
    assert!(report.get("missing").is_none());
}

#[test]
fn csv_output() {
    let (_, report) = reference_report();
    let csv = report.to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "Name,Unit,Value");
    assert_eq!(lines[1], "Area,m2,100");
    assert_eq!(lines[4], "a,-,0.763");
    assert_eq!(lines[13], "ETP flow,m3/a,11.985");
}

#[test]
fn toml_output_parses_back() {
    let (_, report) = reference_report();
    let text = report.render(OutputFormat::Toml).expect("toml");
    let value: toml::Value = toml::from_str(&text).expect("valid toml");
    let records = value
        .get("records")
        .and_then(|r| r.as_array())
        .expect("records array");
    assert_eq!(records.len(), 13);
    assert_eq!(records[6].get("name").and_then(|n| n.as_str()), Some("RD"));
    assert_eq!(records[6].get("value").and_then(|n| n.as_float()), Some(385.147));
}

#[test]
fn table_output_lists_every_row() {
    let (_, report) = reference_report();
    let table = report.render(OutputFormat::Table).expect("table");
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[11].starts_with("RD flow"));
    assert!(lines[11].trim_end().ends_with("38.515"));
}

#[test]
fn area_tie_rounds_to_even_digit() {
    let roof = Roof::new(2.0625, 800.0, 500.0).expect("valid roof");
    let report = steep_roof_report(&roof);
    assert_eq!(report.get("Area").map(|r| r.value), Some(2.062));
}
