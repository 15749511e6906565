//! Integration tests: figure generator writing real files
//!
//! These tests render every figure into temporary directories and check the
//! files that come out: names, formats, pixel sizes, and reproducibility.

use std::fs;

use sensor_figures::figures::{SpectralLinePlot, POWER_VS_WAVELENGTH};
use sensor_figures::prelude::*;

mod common;
use common::test_helpers::POWER_CSV;
use common::{assert_png_size, file_names, write_table, ReportFixture};

// =================================================================================================
// Full Report
// =================================================================================================

#[test]
fn test_generate_all_writes_every_file() {
    let fixture = ReportFixture::with_tables(12);
    let generator = FigureGenerator::new(fixture.paths.clone());

    let rendered = generator.generate_all().unwrap();
    assert_eq!(rendered.len(), 8);

    let expected = [
        "fig1_measurement_bench_schematic.png",
        "fig1_measurement_bench_schematic.svg",
        "fig2_second_order_interference_concept.png",
        "fig2_second_order_interference_concept.svg",
        "fig3_histogram.png",
        "fig3_histogram.svg",
        "fig4_power_vs_wavelength.png",
        "fig4_power_vs_wavelength.svg",
        "fig5_camera_response.png",
        "fig5_camera_response.svg",
        "fig6_temporal_noise.png",
        "fig6_temporal_noise.svg",
        "fig7_spatial_noise.png",
        "fig8_average_3d.png",
    ];
    assert_eq!(file_names(&fixture.paths.out_dir), expected);

    for name in expected {
        let len = fs::metadata(fixture.paths.out_dir.join(name)).unwrap().len();
        assert!(len > 0, "{} is empty", name);
    }
}

#[test]
fn test_generate_all_order_matches_report() {
    let fixture = ReportFixture::with_tables(5);
    let rendered = FigureGenerator::new(fixture.paths.clone()).generate_all().unwrap();

    let stems: Vec<&str> = rendered.iter().map(|r| r.stem.as_str()).collect();
    assert_eq!(
        stems,
        [
            "fig1_measurement_bench_schematic",
            "fig2_second_order_interference_concept",
            "fig3_histogram",
            "fig4_power_vs_wavelength",
            "fig5_camera_response",
            "fig6_temporal_noise",
            "fig7_spatial_noise",
            "fig8_average_3d",
        ]
    );
}

#[test]
fn test_generate_all_is_idempotent() {
    let fixture = ReportFixture::with_tables(8);
    let generator = FigureGenerator::new(fixture.paths.clone());

    generator.generate_all().unwrap();
    let first: Vec<Vec<u8>> = file_names(&fixture.paths.out_dir)
        .iter()
        .map(|n| fs::read(fixture.paths.out_dir.join(n)).unwrap())
        .collect();

    generator.generate_all().unwrap();
    let second: Vec<Vec<u8>> = file_names(&fixture.paths.out_dir)
        .iter()
        .map(|n| fs::read(fixture.paths.out_dir.join(n)).unwrap())
        .collect();

    assert_eq!(first.len(), 14);
    assert_eq!(first, second);
}

// =================================================================================================
// Formats and Sizes
// =================================================================================================

#[test]
fn test_raster_only_figures_have_no_svg() {
    let fixture = ReportFixture::empty();
    let generator = FigureGenerator::new(fixture.paths.clone());

    let spatial = generator.spatial_noise_example(None).unwrap();
    let surface = generator.average_3d_example(None).unwrap();

    assert_eq!(spatial.files.len(), 1);
    assert_eq!(surface.files.len(), 1);
    assert!(!fixture.paths.out_dir.join("fig7_spatial_noise.svg").exists());
    assert!(!fixture.paths.out_dir.join("fig8_average_3d.svg").exists());
}

#[test]
fn test_png_sizes_follow_figure_inches() {
    let fixture = ReportFixture::empty();
    let generator = FigureGenerator::new(fixture.paths.clone());
    let out = &fixture.paths.out_dir;

    generator.measurement_bench_schematic().unwrap();
    generator.second_order_interference_concept().unwrap();
    generator.spatial_noise_example(None).unwrap();
    generator.average_3d_example(None).unwrap();

    // 200 dots per inch
    assert_png_size(&out.join("fig1_measurement_bench_schematic.png"), 1800, 440);
    assert_png_size(&out.join("fig2_second_order_interference_concept.png"), 1400, 720);
    assert_png_size(&out.join("fig7_spatial_noise.png"), 1600, 600);
    assert_png_size(&out.join("fig8_average_3d.png"), 1200, 900);
}

#[test]
fn test_svg_output_is_svg_document() {
    let fixture = ReportFixture::empty();
    let rendered = FigureGenerator::new(fixture.paths.clone())
        .temporal_noise_example(None)
        .unwrap();

    let svg = rendered.files.iter().find(|p| p.extension().unwrap() == "svg").unwrap();
    let content = fs::read_to_string(svg).unwrap();
    assert!(content.contains("<svg"));
    assert!(content.contains("Pixel value (DN)"));
}

// =================================================================================================
// Reproducibility
// =================================================================================================

#[test]
fn test_same_seed_gives_identical_files() {
    let a = ReportFixture::empty();
    let b = ReportFixture::empty();

    let first = FigureGenerator::new(a.paths.clone()).histogram_example(Some(7)).unwrap();
    let second = FigureGenerator::new(b.paths.clone()).histogram_example(Some(7)).unwrap();

    for (x, y) in first.files.iter().zip(second.files.iter()) {
        assert_eq!(fs::read(x).unwrap(), fs::read(y).unwrap());
    }
}

#[test]
fn test_different_seed_changes_histogram() {
    let a = ReportFixture::empty();
    let b = ReportFixture::empty();

    let first = FigureGenerator::new(a.paths.clone()).histogram_example(Some(1)).unwrap();
    let second = FigureGenerator::new(b.paths.clone()).histogram_example(Some(2)).unwrap();

    assert_ne!(fs::read(&first.files[0]).unwrap(), fs::read(&second.files[0]).unwrap());
}

// =================================================================================================
// Tabular Input
// =================================================================================================

#[test]
fn test_table_rows_become_points() {
    let fixture = ReportFixture::with_tables(17);
    let figure = SpectralLinePlot::load(&POWER_VS_WAVELENGTH, &fixture.paths.data_dir).unwrap();

    let points = figure.points();
    assert_eq!(points.len(), 17);
    assert_eq!(points[0].0, 400.0);
    assert_eq!(points[16].0, 800.0);
}

#[test]
fn test_missing_column_fails_without_output() {
    let fixture = ReportFixture::empty();
    write_table(
        &fixture.paths.data_dir,
        POWER_CSV,
        "wavelength_nm,power_mW",
        &["400,1.0".to_string(), "425,1.1".to_string()],
    );

    let err = FigureGenerator::new(fixture.paths.clone())
        .power_vs_wavelength()
        .unwrap_err();

    match err.downcast_ref::<TableError>() {
        Some(TableError::MissingColumn { column, .. }) => assert_eq!(column, "power_W"),
        other => panic!("expected missing column, got {:?}", other),
    }

    // The message the binary logs names the column and the available ones
    let message = err.to_string();
    assert!(message.contains("column `power_W` not found"), "{}", message);
    assert!(message.contains("available: wavelength_nm, power_mW"), "{}", message);
    assert!(file_names(&fixture.paths.out_dir).is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let fixture = ReportFixture::empty();
    let err = FigureGenerator::new(fixture.paths.clone())
        .camera_response()
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<TableError>(), Some(TableError::Io { .. })));
    assert!(file_names(&fixture.paths.out_dir).is_empty());
}

#[test]
fn test_generate_all_stops_at_missing_table() {
    let fixture = ReportFixture::empty();
    let err = FigureGenerator::new(fixture.paths.clone()).generate_all().unwrap_err();
    assert!(err.downcast_ref::<TableError>().is_some());

    // Figures before the first table were written, none after
    let names = file_names(&fixture.paths.out_dir);
    assert!(names.contains(&"fig3_histogram.png".to_string()));
    assert!(!names.iter().any(|n| n.starts_with("fig4") || n.starts_with("fig6")));
}
