// File: crates/summary-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use summary_chart::{Annotation, Axis, Chart, Color, ErrorPoint, Legend, NdcRect, RenderOptions, Series, Theme};

fn band_chart() -> Chart {
    let data = (0..30)
        .map(|d| {
            let y = 3.0 + (d as f64 * 0.3).sin();
            ErrorPoint::new(d as f64 * 86_400.0, y, 0.2, 0.4)
        })
        .collect();
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Date", 0.0, 1.0).with_time(788_918_400, "%d/%m/%Y");
    chart.y_axis = Axis::new("Energy", 0.0, 1.0);
    chart.add_series(Series::with_data("Proposal", Color::from_rgb(255, 102, 102), data));
    chart.autoscale_axes();

    let mut legend = Legend::new(NdcRect::new(0.751, 0.773, 0.952, 0.940));
    legend.add_entry("Proposal", Color::from_rgb(255, 102, 102));
    chart.legend = Some(legend);
    chart.annotation = Some(Annotation::new(NdcRect::new(0.117, 0.772, 0.582, 0.940), vec!["Simulation".into()]));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = band_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1247, 666));
}

#[test]
fn render_overwrites_existing_file() {
    let out = std::path::PathBuf::from("target/test_out/overwrite/chart.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"stale").unwrap();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    band_chart().render_to_png(&opts, &out).expect("render");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn band_is_filled_with_series_color() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    let data = vec![ErrorPoint::new(0.0, 5.0, 3.0, 3.0), ErrorPoint::new(10.0, 5.0, 3.0, 3.0)];
    chart.add_series(Series::with_data("band", Color::from_rgb(0, 0, 255), data).with_fill_alpha(255));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.width = 200;
    opts.height = 200;
    opts.insets = summary_chart::Insets::new(20, 20, 20, 20);
    let img = image::load_from_memory(&chart.render_to_png_bytes(&opts).unwrap()).unwrap().to_rgba8();

    // Inside the band, off the central line: y value 6.5 -> pixel row 20 + 160 * 0.35 = 76
    let inside = img.get_pixel(100, 76).0;
    assert_eq!(&inside[..3], &[0, 0, 255]);
    // Outside the band: y value 9.5
    let outside = img.get_pixel(100, 28).0;
    assert_ne!(&outside[..3], &[0, 0, 255]);
}

#[test]
fn dark_theme_paints_background() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let img = image::load_from_memory(&band_chart().render_to_png_bytes(&opts).unwrap()).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(1, 1).0, [18, 18, 20, 255]);
}

#[test]
fn insets_leaving_no_plot_area_fail() {
    let mut opts = RenderOptions::default();
    opts.insets = summary_chart::Insets::new(700, 700, 0, 0);
    assert!(band_chart().render_to_png_bytes(&opts).is_err());
}
