// File: crates/benchplot-core/tests/interchange.rs
// Purpose: JSON interchange form and TOML render options.

use benchplot_core::{
    ChartError, Dataset, LegendPosition, LineForm, Marker, RenderOptions, Rgba, ScaleKind, StylePreset,
};

const DOC: &str = r##"{
  "axis": [100, 1000, 10000, 100000],
  "series": [
    { "label": "fast", "values": [646, 10446, 103250, 1249891],
      "style": { "line": "solid", "marker": "cross", "color": "#000000" } },
    { "label": "slow", "values": [14119, 159966, 2103225, 41113434],
      "style": { "line": "dashed", "marker": "triangle-down", "color": "#348abd" } }
  ],
  "title": "Insertion"
}"##;

#[test]
fn parses_interchange_document() {
    let ds = Dataset::from_json(DOC).expect("valid document");
    assert_eq!(ds.labels().collect::<Vec<_>>(), ["fast", "slow"]);
    assert_eq!(ds.title(), Some("Insertion"));
    assert_eq!(ds.x_label(), None);
    let slow = ds.get("slow").unwrap();
    assert_eq!(slow.style().line, LineForm::Dashed);
    assert_eq!(slow.style().marker, Marker::TriangleDown);
    assert_eq!(slow.style().color, Rgba::rgb(0x34, 0x8a, 0xbd));
}

#[test]
fn json_round_trip_preserves_dataset() {
    let ds = Dataset::from_json(DOC).unwrap();
    let text = ds.to_json().unwrap();
    assert_eq!(Dataset::from_json(&text).unwrap(), ds);
}

#[test]
fn document_runs_dataset_validation() {
    let short = DOC.replace("[646, 10446, 103250, 1249891]", "[646, 10446, 103250]");
    assert!(matches!(Dataset::from_json(&short), Err(ChartError::Shape { .. })));

    let dup = DOC.replace("\"slow\"", "\"fast\"");
    assert!(matches!(Dataset::from_json(&dup), Err(ChartError::DuplicateLabel { .. })));
}

#[test]
fn malformed_document_is_a_json_error() {
    assert!(matches!(Dataset::from_json("{ \"axis\": [1, 2] "), Err(ChartError::Json(_))));
    let bad_color = DOC.replace("#348abd", "blue");
    assert!(matches!(Dataset::from_json(&bad_color), Err(ChartError::Json(_))));
}

#[test]
fn options_from_toml_use_camel_case_and_defaults() {
    let opts: RenderOptions = toml::from_str(
        r#"
        yScale = "linear"
        legendPosition = "lower-right"
        stylePreset = "solarized-light"
        "#,
    )
    .expect("valid options");
    assert_eq!(opts.x_scale, ScaleKind::Log);
    assert_eq!(opts.y_scale, ScaleKind::Linear);
    assert_eq!(opts.legend_position, LegendPosition::LowerRight);
    assert_eq!(opts.style_preset, StylePreset::SolarizedLight);
    assert_eq!(opts.width, RenderOptions::default().width);
    assert!(opts.draw_labels);
}

#[test]
fn options_reject_unknown_keys_and_values() {
    assert!(toml::from_str::<RenderOptions>("zScale = \"log\"").is_err());
    assert!(toml::from_str::<RenderOptions>("xScale = \"cubic\"").is_err());
}

#[test]
fn legend_position_parsing() {
    assert_eq!("upper_right".parse::<LegendPosition>().unwrap(), LegendPosition::UpperRight);
    assert_eq!("2".parse::<LegendPosition>().unwrap(), LegendPosition::UpperLeft);
    assert!("middle".parse::<LegendPosition>().is_err());
}

#[test]
fn legend_codes_accepted_in_toml_like_the_cli() {
    let opts: RenderOptions = toml::from_str("legendPosition = 2").expect("numeric code");
    assert_eq!(opts.legend_position, LegendPosition::UpperLeft);
    let opts: RenderOptions = toml::from_str("legendPosition = \"4\"").expect("quoted code");
    assert_eq!(opts.legend_position, LegendPosition::LowerRight);
    let opts: RenderOptions = toml::from_str("legendPosition = \"upper_right\"").expect("name");
    assert_eq!(opts.legend_position, LegendPosition::UpperRight);

    assert!(toml::from_str::<RenderOptions>("legendPosition = 5").is_err());
    assert!(toml::from_str::<RenderOptions>("legendPosition = -1").is_err());

    let json = serde_json::to_string(&LegendPosition::LowerLeft).unwrap();
    assert_eq!(json, "\"lower-left\"");
    assert_eq!(serde_json::from_str::<LegendPosition>(&json).unwrap(), LegendPosition::LowerLeft);
}
