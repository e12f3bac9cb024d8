//! End-to-end checks of the service operations.

use pg_app::service::compute_indices_via_graph;
use pg_app::{
    AppError, DisplayGraph, IndexKind, IndexSelection, PgConfig, build_graph_for_display,
    compute_indices, compute_series, parse_selection, validate_request,
};

fn triple(result: &pg_app::IndexResult) -> (u64, u64, u64) {
    (
        result.get(IndexKind::Zagreb).unwrap(),
        result.get(IndexKind::Wiener).unwrap(),
        result.get(IndexKind::Gutman).unwrap(),
    )
}

#[test]
fn scenario_p3_k1() {
    let result = compute_indices(3, 1, &IndexSelection::all(), &PgConfig::default()).unwrap();
    assert_eq!(triple(&result), (2, 1, 1));
}

#[test]
fn scenario_p2_k2() {
    let result = compute_indices(2, 2, &IndexSelection::all(), &PgConfig::default()).unwrap();
    assert_eq!(triple(&result), (2, 1, 1));
}

#[test]
fn degenerate_group_is_zero_for_every_selection() {
    let cfg = PgConfig::default();
    let selections = [
        vec![IndexKind::Zagreb],
        vec![IndexKind::Wiener],
        vec![IndexKind::Gutman],
        vec![IndexKind::Zagreb, IndexKind::Gutman],
        IndexKind::ALL.to_vec(),
    ];
    for kinds in selections {
        let sel = IndexSelection::new(kinds).unwrap();
        let fast = compute_indices(2, 1, &sel, &cfg).unwrap();
        let general = compute_indices_via_graph(2, 1, &sel, &cfg).unwrap();
        assert_eq!(fast, general);
        assert!(fast.iter().all(|(_, v)| v == 0));
        assert_eq!(fast.len(), sel.iter().count());
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let sel = IndexSelection::all();
    for (p, k) in [(2, 5), (3, 3), (5, 2), (7, 2)] {
        let par = compute_indices(p, k, &sel, &PgConfig::default()).unwrap();
        let seq = compute_indices(p, k, &sel, &PgConfig::sequential()).unwrap();
        assert_eq!(par, seq, "p={p} k={k}");
    }
}

#[test]
fn display_graph() {
    let cfg = PgConfig::default();
    assert_eq!(build_graph_for_display(2, 1, &cfg).unwrap(), DisplayGraph::EmptyGroup);
    let DisplayGraph::Graph(g) = build_graph_for_display(2, 3, &cfg).unwrap() else {
        panic!("expected a graph for mod 8");
    };
    assert_eq!(g.nodes(), &[1, 3, 5, 7]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn series_p3_kmax2() {
    let cfg = PgConfig::default();
    let sel = IndexSelection::all();
    let series = compute_series(3, 2, &sel, &cfg).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.points()[0].k, 1);
    assert_eq!(triple(&series.points()[0].indices), (2, 1, 1));

    let k2 = series.get(2).unwrap();
    assert_eq!(k2.modulus, 9);
    assert_eq!(k2.group_order, 6);
    assert!(!k2.empty_group);
    assert_eq!(k2.indices, compute_indices(3, 2, &sel, &cfg).unwrap());
    assert_eq!(triple(&k2.indices), (116, 17, 304));
}

#[test]
fn series_marks_degenerate_point() {
    let sel = parse_selection(&["wiener"]).unwrap();
    let series = compute_series(2, 3, &sel, &PgConfig::default()).unwrap();

    let first = &series.points()[0];
    assert!(first.empty_group);
    assert_eq!(first.group_order, 1);
    assert_eq!(
        series.values(IndexKind::Wiener),
        vec![(1, 0), (2, 1), (3, 9)]
    );
    assert!(series.values(IndexKind::Zagreb).is_empty());
}

#[test]
fn series_serializes_to_json() {
    let sel = parse_selection(&["zagreb"]).unwrap();
    let series = compute_series(3, 1, &sel, &PgConfig::default()).unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["p"], 3);
    assert_eq!(json["points"][0]["indices"]["zagreb"], 2);
    assert_eq!(json["points"][0]["empty_group"], false);
}

#[test]
fn boundary_rejects_before_the_core_runs() {
    let cfg = PgConfig::default();
    assert!(matches!(
        validate_request(3, cfg.k_max + 1, &cfg),
        Err(AppError::InvalidExponent { .. })
    ));
    assert!(matches!(validate_request(6, 1, &cfg), Err(AppError::InvalidPrime(6))));
    assert!(matches!(
        parse_selection::<&str>(&[]),
        Err(AppError::EmptySelection)
    ));
}
