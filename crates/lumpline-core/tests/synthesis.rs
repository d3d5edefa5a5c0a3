//! End-to-end tests: parameters in, rendered netlist out.

use lumpline_core::{
    DiscretizationPlan, Error, LadderTopology, LineGeometry, LineParameters, Netlist, NodeId,
    SectionParameters,
};
use nalgebra::DMatrix;

/// Run the whole pipeline for already-loaded parameters.
fn synthesize(
    params: &LineParameters,
    geometry: &LineGeometry,
    start: NodeId,
) -> (DiscretizationPlan, Netlist) {
    let plan = DiscretizationPlan::estimate(params, geometry).expect("estimate should succeed");
    let section = SectionParameters::derive(params, geometry, plan);
    let topology = LadderTopology::build(params.num_conductors, plan.num_sections, start);
    (plan, Netlist::synthesize(&section, &topology))
}

/// A coupled pair whose section values all land on exact binary
/// fractions, so the rendered cards are stable to the last digit.
#[test]
fn test_coupled_pair_renders_known_cards() {
    let params = LineParameters {
        num_conductors: 2,
        resistance: 8.0,
        conductance: 0.0,
        inductance: DMatrix::from_row_slice(2, 2, &[1.5e-6, 7.5e-7, 7.5e-7, 1.5e-6]),
        capacitance: DMatrix::from_row_slice(2, 2, &[3e-11, 1.5e-11, 1.5e-11, 3e-11]),
    };
    let geometry = LineGeometry::new(0.5, 1e-7).expect("valid geometry");

    let (plan, netlist) = synthesize(&params, &geometry, NodeId::new(1));
    assert_eq!(plan.num_sections, 1);

    let expected = "\
C1 1 0 1.5e-11
R1 1 2 4e0
L1 2 3 7.5e-7
E1 3 4 6 7 5e-1

C2 5 0 1.5e-11
R2 5 6 4e0
L2 6 7 7.5e-7
E2 7 8 2 3 5e-1

C3 1 5 7.5e-12
";
    assert_eq!(netlist.to_string(), expected);
}

/// The smallest interesting case: one conductor, one section, three
/// cards, section values identical to the per-meter parameters.
#[test]
fn test_minimal_single_conductor_case() {
    let params = LineParameters {
        num_conductors: 1,
        resistance: 1.0,
        conductance: 0.0,
        inductance: DMatrix::from_row_slice(1, 1, &[1e-9]),
        capacitance: DMatrix::from_row_slice(1, 1, &[1e-12]),
    };
    let geometry = LineGeometry::new(1.0, 1e-9).expect("valid geometry");

    let (plan, netlist) = synthesize(&params, &geometry, NodeId::new(1));
    assert_eq!(plan.num_sections, 1);
    assert_eq!(netlist.counts().coupling_sources, 0);
    assert_eq!(
        netlist.to_string(),
        "C1 1 0 1e-12\nR1 1 2 1e0\nL1 2 3 1e-9\n\n"
    );
}

/// A single conductor loaded from text: five sections of plain RLC
/// ladder, no coupling sources.
#[test]
fn test_single_conductor_from_text() {
    let source = "\
1
5.0
0.0
inductance (H/m)
1n
250
capacitance (F/m)
1p
100
";
    let params = LineParameters::parse(source).expect("parse should succeed");
    let geometry = LineGeometry::new(2.0, 4e-8).expect("valid geometry");

    let (plan, netlist) = synthesize(&params, &geometry, NodeId::new(1));
    assert_eq!(plan.num_sections, 5);

    let counts = netlist.counts();
    assert_eq!(counts.resistors, 5);
    assert_eq!(counts.capacitors, 5);
    assert_eq!(counts.inductors, 5);
    assert_eq!(counts.coupling_sources, 0);

    let rendered = netlist.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 16, "15 cards and one trailing blank");
    assert!(lines[0].starts_with("C1 1 0 "));
    assert!(lines[1].starts_with("R1 1 2 "));
    assert!(lines[14].starts_with("L5 "));
    assert_eq!(lines[15], "");

    // R per section is 5 ohm/m * 2 m / 5 sections.
    let r_value: f64 = lines[1]
        .split_whitespace()
        .last()
        .and_then(|v| v.parse().ok())
        .expect("resistor card carries a value");
    assert!((r_value - 2.0).abs() < 1e-12, "RPS = {r_value}");
}

/// A lossy pair loaded from text grows shunt resistors to ground and
/// honors the requested start node.
#[test]
fn test_lossy_pair_from_text() {
    let source = "\
2
8.0
0.25
inductance (H/m)
1u
1.5 0.75
0.75 1.5
capacitance (F/m)
1p
30 15
15 30
";
    let params = LineParameters::parse(source).expect("parse should succeed");
    let length = lumpline_core::parse_value("500m").expect("length");
    let rise_time = lumpline_core::parse_value("100n").expect("rise time");
    let geometry = LineGeometry::new(length, rise_time).expect("valid geometry");

    let (plan, netlist) = synthesize(&params, &geometry, NodeId::new(10));
    assert_eq!(plan.num_sections, 1);

    let counts = netlist.counts();
    assert_eq!(counts.resistors, 4, "one series and one shunt per section");
    assert_eq!(counts.capacitors, 3);
    assert_eq!(counts.inductors, 2);
    assert_eq!(counts.coupling_sources, 2);

    let rendered = netlist.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    // 1 / (0.25 S/m * 0.5 m) is exactly 8 ohms.
    assert_eq!(lines[0], "R1 10 0 8e0");
    assert!(lines[1].starts_with("C1 10 0 "));
    assert!(
        rendered.lines().any(|line| line.starts_with("C3 10 14 ")),
        "coupling capacitor joins chain start nodes:\n{rendered}"
    );
}

/// An electrically short line refuses to produce a ladder.
#[test]
fn test_short_line_reports_discretization_error() {
    let params = LineParameters {
        num_conductors: 1,
        resistance: 1.0,
        conductance: 0.0,
        inductance: DMatrix::from_row_slice(1, 1, &[1e-6]),
        capacitance: DMatrix::from_row_slice(1, 1, &[1e-10]),
    };
    let geometry = LineGeometry::new(0.01, 1e-6).expect("valid geometry");

    let err = DiscretizationPlan::estimate(&params, &geometry).unwrap_err();
    assert!(matches!(err, Error::Discretization(_)), "got {err:?}");
}

/// Malformed parameter text fails with the offending line, before any
/// synthesis work happens.
#[test]
fn test_malformed_text_reports_line() {
    let err = LineParameters::parse("2\n8.0\nnot-a-number\n").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}
