//! Index trends across exponents `k = 1..=k_max`.

use std::time::Instant;

use pg_core::PgConfig;
use pg_group::enumerate;
use pg_indices::{IndexKind, IndexResult, IndexSelection, compute};
use serde::Serialize;

use crate::error::AppResult;
use crate::progress::{SeriesProgressEvent, SeriesStage};
use crate::service::{build_graph, is_degenerate};

/// Indices for one exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub k: u32,
    pub modulus: u64,
    pub group_order: usize,
    /// Set for the one-element group, whose indices are zero by definition.
    pub empty_group: bool,
    pub indices: IndexResult,
}

/// Index results for `k = 1..=k_max`, in order of `k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSeries {
    pub p: u64,
    points: Vec<SeriesPoint>,
}

impl IndexSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for exponent `k`, if computed.
    pub fn get(&self, k: u32) -> Option<&SeriesPoint> {
        self.points.iter().find(|pt| pt.k == k)
    }

    /// `(k, value)` trend of one index; empty if it was not selected.
    pub fn values(&self, kind: IndexKind) -> Vec<(u32, u64)> {
        self.points
            .iter()
            .filter_map(|pt| pt.indices.get(kind).map(|v| (pt.k, v)))
            .collect()
    }
}

/// Compute the selected indices for every `k` in `1..=k_max`.
pub fn compute_series(
    p: u64,
    k_max: u32,
    selection: &IndexSelection,
    config: &PgConfig,
) -> AppResult<IndexSeries> {
    compute_series_with_progress(p, k_max, selection, config, None)
}

/// Same as [`compute_series`], reporting each stage to `progress_cb`.
///
/// The first failing exponent aborts the whole series.
pub fn compute_series_with_progress(
    p: u64,
    k_max: u32,
    selection: &IndexSelection,
    config: &PgConfig,
    mut progress_cb: Option<&mut dyn FnMut(SeriesProgressEvent)>,
) -> AppResult<IndexSeries> {
    let started = Instant::now();

    let mut points = Vec::with_capacity(k_max as usize);
    for k in 1..=k_max {
        let k_start = Instant::now();
        emit_progress(&mut progress_cb, k, k_max, SeriesStage::Enumerating, started, None);

        let point = if is_degenerate(p, k) {
            SeriesPoint {
                k,
                modulus: 2,
                group_order: 1,
                empty_group: true,
                indices: IndexResult::zeros(selection),
            }
        } else {
            let group = enumerate(p, k)?;
            emit_progress(
                &mut progress_cb,
                k,
                k_max,
                SeriesStage::BuildingGraph,
                started,
                Some(format!("order={}", group.order())),
            );
            let graph = build_graph(&group, config)?;

            emit_progress(
                &mut progress_cb,
                k,
                k_max,
                SeriesStage::ComputingIndices,
                started,
                Some(format!("edges={}", graph.edge_count())),
            );
            SeriesPoint {
                k,
                modulus: group.modulus(),
                group_order: group.order(),
                empty_group: false,
                indices: compute(&graph, selection, config.parallel),
            }
        };

        tracing::debug!(
            p,
            k,
            modulus = point.modulus,
            elapsed_s = k_start.elapsed().as_secs_f64(),
            "series point computed"
        );
        emit_progress(&mut progress_cb, k, k_max, SeriesStage::Completed, started, None);
        points.push(point);
    }

    Ok(IndexSeries { p, points })
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(SeriesProgressEvent)>,
    k: u32,
    k_max: u32,
    stage: SeriesStage,
    started: Instant,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(SeriesProgressEvent::stage(
            k,
            k_max,
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}
