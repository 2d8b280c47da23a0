use approx::assert_relative_eq;
use expenditure_outlook::PageError;
use expenditure_outlook::api::{PageBuilder, PageConfig};
use expenditure_outlook::core::{
    Color, MAX_YEAR_SPAN, Palette, Scenario, SeriesBuilder, UncertaintyModel, YearAxis, build_series,
    derive_bands,
};
use expenditure_outlook::data;

fn flat(len: usize, value: f64) -> Vec<f64> {
    vec![value; len]
}

#[test]
fn year_axis_spans_inclusive_range() {
    let axis = YearAxis::default();
    assert_eq!(axis.len(), 11);
    assert_eq!(axis.labels().first(), Some(&2025));
    assert_eq!(axis.labels().last(), Some(&2035));

    let single = YearAxis::new(2030, 2030).expect("single year");
    assert_eq!(single.len(), 1);
    assert!(YearAxis::new(2031, 2030).is_err());
}

#[test]
fn year_axis_rejects_spans_beyond_the_limit() {
    let widest = YearAxis::new(2000, 2000 + MAX_YEAR_SPAN as i32 - 1).expect("widest axis");
    assert_eq!(widest.len(), MAX_YEAR_SPAN);

    let err = YearAxis::new(i32::MIN, i32::MAX).expect_err("full i32 range");
    assert!(matches!(err, PageError::InvalidData(_)));
    assert!(YearAxis::new(2000, 2000 + MAX_YEAR_SPAN as i32).is_err());
}

#[test]
fn extreme_year_range_in_config_is_rejected_without_panicking() {
    let json = r#"{"years":{"start_year":-2147483648,"end_year":2147483647}}"#;
    let err = PageConfig::from_json_str(json).expect_err("extreme year range");
    assert!(matches!(err, PageError::InvalidConfig(_)));

    let config = PageConfig::default().with_years(YearAxis::new(1990, 2100).expect("axis"));
    let err = PageBuilder::new(config)
        .expect("builder")
        .render_html()
        .expect_err("bundled scenarios do not span 111 years");
    assert!(matches!(err, PageError::InvalidData(_)));
}

#[test]
fn bands_follow_reference_formula() {
    let points = [62.0, 63.5, 65.2, 66.9, 68.5, 69.8, 70.9, 71.8, 72.5, 73.1, 73.78];
    let bands = derive_bands(&points, 0.01, 0.05, 1.28);
    assert_eq!(bands.upper.len(), points.len());
    assert_eq!(bands.lower.len(), points.len());

    for (i, value) in points.iter().enumerate() {
        let uncertainty = 0.01 + (i as f64 / 10.0) * 0.04;
        assert_relative_eq!(bands.upper[i], value * (1.0 + uncertainty * 1.28), epsilon = 1e-9);
        assert_relative_eq!(bands.lower[i], value * (1.0 - uncertainty * 1.28), epsilon = 1e-9);
    }
}

#[test]
fn build_series_assigns_palette_colors_in_order() {
    let series = build_series(&data::scenarios(), &Palette::default(), None);
    assert_eq!(series.len(), 4);
    assert_eq!(series[0].color.to_css_hex(), "#3b82f6");
    assert_eq!(series[1].color.to_css_hex(), "#8b5cf6");
    assert_eq!(series[2].color.to_css_hex(), "#10b981");
    assert_eq!(series[3].color.to_css_hex(), "#f59e0b");
    assert!(series.iter().all(|s| s.bands.is_none()));
}

#[test]
fn build_series_cycles_a_short_palette() {
    let palette = Palette::new(vec![Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]).expect("palette");
    let scenarios: Vec<Scenario> = (0..5)
        .map(|i| Scenario::new(format!("S{i}"), flat(11, 62.0)))
        .collect();

    let series = build_series(&scenarios, &palette, None);
    let colors: Vec<_> = series.iter().map(|s| s.color).collect();
    assert_eq!(
        colors,
        vec![
            Color::rgb(1, 2, 3),
            Color::rgb(4, 5, 6),
            Color::rgb(1, 2, 3),
            Color::rgb(4, 5, 6),
            Color::rgb(1, 2, 3),
        ]
    );
}

#[test]
fn builder_attaches_bands_that_enclose_points() {
    let series = SeriesBuilder::new(YearAxis::default())
        .with_bands(UncertaintyModel::default())
        .build(&data::scenarios())
        .expect("series");

    for entry in &series {
        let bands = entry.bands.as_ref().expect("bands");
        for (i, value) in entry.points.iter().enumerate() {
            assert!(bands.lower[i] <= *value && *value <= bands.upper[i]);
        }
    }
}

#[test]
fn builder_rejects_length_mismatch() {
    let err = SeriesBuilder::new(YearAxis::default())
        .build(&[Scenario::new("short", flat(10, 62.0))])
        .expect_err("length mismatch");
    assert!(matches!(err, PageError::InvalidData(_)));
}

#[test]
fn builder_rejects_negative_values() {
    let mut points = flat(11, 62.0);
    points[4] = -1.0;
    let err = SeriesBuilder::new(YearAxis::default())
        .build(&[Scenario::new("negative", points)])
        .expect_err("negative value");
    assert!(matches!(err, PageError::InvalidData(_)));
}
