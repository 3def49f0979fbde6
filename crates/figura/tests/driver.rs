//! End-to-end driver runs over real files

use std::fs;
use std::path::PathBuf;

use figura::figures::{DiagnosticKind, DrawingDriver, PlotConfig, RunOutcome};
use figura::plot::{AsciiPlot, AsciiPlotOptions, PlotFrame};
use figura::{CharacterSet, Color, Point, RecordingSurface, SurfaceCommand, TextAnchor};
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("fich.txt");
    fs::write(&path, content).unwrap();
    path
}

fn run(content: &str) -> (figura::figures::DriveReport, RecordingSurface, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, content);
    let mut driver = DrawingDriver::new(RecordingSurface::new());
    let mut out = Vec::new();
    let report = driver.run(&path, &mut out).unwrap();
    (report, driver.into_surface(), String::from_utf8(out).unwrap())
}

#[test]
fn test_single_circle() {
    let (report, surface, out) = run("<Circulo-Aa10-(0,0)-5>\n");

    assert_eq!(report.drawn, 1);
    assert_eq!(report.outcome, RunOutcome::Displayed);
    let shapes: Vec<_> = surface.shapes().collect();
    assert_eq!(
        shapes,
        [&SurfaceCommand::Circle {
            center: Point::new(0.0, 0.0),
            radius: 5.0,
            stroke: Color::Blue,
        }]
    );
    let labels: Vec<_> = surface.labels().collect();
    assert_eq!(
        labels,
        [&SurfaceCommand::Text {
            at: Point::new(0.0, 0.0),
            text: "Aa10".to_string(),
            anchor: TextAnchor::CENTER,
            color: Color::Blue,
        }]
    );
    assert!(surface.was_shown());
    assert!(out.contains("Drawing circle: Aa10 @ (0,0), R=5"));
}

#[test]
fn test_single_rectangle() {
    let (report, surface, _) = run("<Retangulo-Ee100-(0,0)-(10,5)>\n");

    assert_eq!(report.drawn, 1);
    let shapes: Vec<_> = surface.shapes().collect();
    assert_eq!(
        shapes,
        [&SurfaceCommand::Rectangle {
            anchor: Point::new(0.0, 5.0),
            width: 10.0,
            height: 5.0,
            stroke: Color::Green,
        }]
    );
    assert!(surface.was_shown());
}

#[test]
fn test_single_triangle() {
    let (report, surface, _) = run("<Triangulo-Ii99-(0,0)-(4,0)-(0,3)>");

    assert_eq!(report.drawn, 1);
    match surface.shapes().next() {
        Some(SurfaceCommand::Polygon { vertices, stroke }) => {
            assert_eq!(
                vertices,
                &vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)]
            );
            assert_eq!(*stroke, Color::Red);
        }
        other => panic!("Expected polygon, got {:?}", other),
    }
    match surface.labels().next() {
        Some(SurfaceCommand::Text { at, anchor, .. }) => {
            assert!((at.x - 4.0 / 3.0).abs() < 1e-12);
            assert!((at.y - 1.0).abs() < 1e-12);
            assert_eq!(*anchor, TextAnchor::CENTER);
        }
        other => panic!("Expected label, got {:?}", other),
    };
}

#[test]
fn test_only_comments_and_blanks() {
    let (report, surface, out) = run("# comment\n\n   \n\t# another\n");

    assert_eq!(report.drawn, 0);
    assert_eq!(report.skipped, 4);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.outcome, RunOutcome::NoFigures);
    assert!(!surface.was_shown());
    assert!(surface.was_discarded());
    assert!(out.contains("No valid figures were found or drawn."));
    assert!(!out.contains("ignored"));
}

#[test]
fn test_missing_file_touches_no_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");
    let mut driver = DrawingDriver::new(RecordingSurface::new());
    let mut out = Vec::new();

    let report = driver.run(&path, &mut out).unwrap();

    assert_eq!(report.outcome, RunOutcome::FileNotFound);
    assert_eq!(report.drawn, 0);
    assert!(driver.surface().commands().is_empty());
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("File not found"));
    assert!(out.contains("does-not-exist.txt"));
}

#[test]
fn test_mixed_file_counts_and_diagnostics() {
    let input = "\
# figures
<Circulo-Aa10-(0,0)-5>
<Quadrado-Aa10-(0,0)-5>

<Retangulo-Ee100-(0,0)-(10,5)>
<Circulo-Ab11-(0,0)--1>
<Triangulo-Ii99-(0,0)-(4,0)-(0,3)>
";
    let (report, surface, out) = run(input);

    assert_eq!(report.drawn, 3);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.diagnostics.len(), 2);

    assert_eq!(report.diagnostics[0].line_number, 3);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::Unrecognized);
    assert_eq!(report.diagnostics[0].content, "<Quadrado-Aa10-(0,0)-5>");

    assert_eq!(report.diagnostics[1].line_number, 6);
    assert!(matches!(report.diagnostics[1].kind, DiagnosticKind::Draw(_)));

    assert_eq!(surface.shapes().count(), 3);
    assert_eq!(surface.labels().count(), 3);
    assert!(out.contains("Line 3 ignored (invalid format): <Quadrado-Aa10-(0,0)-5>"));
    assert!(out.contains("Error processing line 6: <Circulo-Ab11-(0,0)--1>"));
}

#[test]
fn test_custom_config_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "<Circulo-Aa10-(0,0)-5>");
    let config = PlotConfig {
        x_range: (-50.0, 50.0),
        y_range: (-20.0, 20.0),
        title: "Figuras".to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
    };
    let mut driver = DrawingDriver::with_config(RecordingSurface::new(), config);
    driver.run(&path, &mut std::io::sink()).unwrap();

    let commands = driver.surface().commands();
    assert_eq!(
        commands[0],
        SurfaceCommand::SetBounds {
            x_range: (-50.0, 50.0),
            y_range: (-20.0, 20.0)
        }
    );
    assert!(commands.contains(&SurfaceCommand::Title("Figuras".to_string())));
}

#[test]
fn test_ascii_plot_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(
        &dir,
        "<Circulo-Aa10-(0,0)-500>\n<Retangulo-Ee100-(-900,-900)-(-400,-600)>\n",
    );
    let options = AsciiPlotOptions {
        width: 60,
        style: CharacterSet::Ascii,
        ..AsciiPlotOptions::default()
    };
    let plot = AsciiPlot::with_sink(options, Box::new(|_: &PlotFrame| Ok(())));
    let mut driver = DrawingDriver::new(plot);

    let report = driver.run(&path, &mut std::io::sink()).unwrap();
    assert_eq!(report.outcome, RunOutcome::Displayed);

    let frame = driver.surface().last_frame().unwrap().to_string();
    assert!(frame.contains("Geometric Figures"));
    assert!(frame.contains("Aa10"));
    assert!(frame.contains("Ee100"));
    assert!(frame.contains("X axis"));
    assert!(frame.contains("Y axis"));
    assert!(frame.is_ascii());
}

#[test]
fn test_no_figures_on_ascii_plot_never_shows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "garbage\n");
    let plot = AsciiPlot::with_sink(
        AsciiPlotOptions::default(),
        Box::new(|_: &PlotFrame| -> anyhow::Result<()> {
            panic!("plot must not be shown")
        }),
    );
    let mut driver = DrawingDriver::new(plot);

    let report = driver.run(&path, &mut std::io::sink()).unwrap();
    assert_eq!(report.outcome, RunOutcome::NoFigures);
    assert!(driver.surface().last_frame().is_none());
    assert_eq!(driver.surface().mark_count(), 0);
}
