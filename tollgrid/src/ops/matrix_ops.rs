use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;

use crate::model::{Cost, DistanceMatrix, LocationId, TollEdge, TollError, UnrolledRow};

/// computes the cumulative distance between every pair of toll locations
/// referenced by the edge list.
///
/// the matrix is indexed by the ascending union of all `id_start` and
/// `id_end` values. each edge sets the distance in both directions; when an
/// edge list holds the same pair more than once, the last edge wins. shortest
/// routes through intermediate locations are then resolved with Floyd-Warshall,
/// so every cell holds the minimum sum of edge distances along any connecting
/// route, or [`Cost::Unreachable`] when no route exists.
///
/// this runs in O(V³) time and O(V²) space for V locations, which limits it
/// to datasets of a few thousand locations.
///
/// # Errors
///
/// [`TollError::InvalidInput`] for an empty edge list or an edge distance that
/// is negative, NaN or infinite.
pub fn calculate_distance_matrix(edges: &[TollEdge]) -> Result<DistanceMatrix, TollError> {
    if edges.is_empty() {
        return Err(TollError::InvalidInput(String::from(
            "cannot build a distance matrix from an empty edge list",
        )));
    }
    validate_edges(edges)?;

    let locations = edges
        .iter()
        .flat_map(|e| [e.id_start, e.id_end])
        .sorted()
        .dedup()
        .collect_vec();
    log::debug!(
        "building distance matrix over {} locations from {} edges",
        locations.len(),
        edges.len()
    );

    let mut matrix = DistanceMatrix::disconnected(locations)?;
    let mut assigned: HashMap<(LocationId, LocationId), f64> = HashMap::new();
    for edge in edges.iter() {
        if edge.id_start == edge.id_end {
            log::debug!("ignoring self-loop edge at location {}", edge.id_start);
            continue;
        }
        let i = matrix_index(&matrix, edge.id_start)?;
        let j = matrix_index(&matrix, edge.id_end)?;
        let pair = (edge.id_start.min(edge.id_end), edge.id_start.max(edge.id_end));
        if let Some(previous) = assigned.insert(pair, edge.distance) {
            if previous != edge.distance {
                log::warn!(
                    "duplicate edge {} <-> {}: distance {} replaces {}",
                    pair.0,
                    pair.1,
                    edge.distance,
                    previous
                );
            }
        }
        let distance = Cost::Finite(edge.distance);
        matrix.set_by_index(i, j, distance);
        matrix.set_by_index(j, i, distance);
    }

    floyd_warshall(&mut matrix);

    let n_unreachable = matrix
        .rows()
        .map(|(_, row)| row.iter().filter(|c| !c.is_finite()).count())
        .sum::<usize>()
        / 2;
    if n_unreachable > 0 {
        log::warn!("{n_unreachable} location pairs have no connecting route");
    }
    Ok(matrix)
}

/// flattens a matrix into one row per ordered pair of distinct locations,
/// row-major: every column of the first location, then of the second, and so
/// on. diagonal cells are skipped, so a matrix over V locations yields
/// V × (V − 1) rows. costs are copied verbatim, unreachable pairs included.
pub fn unroll_distance_matrix(matrix: &DistanceMatrix) -> Vec<UnrolledRow> {
    let locations = matrix.locations();
    let mut rows = Vec::with_capacity(matrix.size() * matrix.size().saturating_sub(1));
    for (i, id_start) in locations.iter().enumerate() {
        for (j, id_end) in locations.iter().enumerate() {
            if i != j {
                rows.push(UnrolledRow::new(
                    *id_start,
                    *id_end,
                    matrix.get_by_index(i, j),
                ));
            }
        }
    }
    rows
}

/// relaxes every cell through each intermediate location `k` in turn.
/// iteration `k` depends on all relaxations of earlier iterations, so `k`
/// advances sequentially, while rows are relaxed in parallel against a
/// snapshot of row `k`. row `k` cannot change during its own iteration since
/// the diagonal is zero.
fn floyd_warshall(matrix: &mut DistanceMatrix) {
    let size = matrix.size();
    if size == 0 {
        return;
    }
    for k in 0..size {
        let row_k = matrix.row(k).to_vec();
        matrix.cells_mut().par_chunks_mut(size).for_each(|row_i| {
            let d_ik = row_i[k];
            if !d_ik.is_finite() {
                return;
            }
            for (d_ij, d_kj) in row_i.iter_mut().zip(row_k.iter()) {
                let through_k = d_ik + *d_kj;
                if through_k < *d_ij {
                    *d_ij = through_k;
                }
            }
        });
    }
}

fn validate_edges(edges: &[TollEdge]) -> Result<(), TollError> {
    for (idx, edge) in edges.iter().enumerate() {
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            return Err(TollError::InvalidInput(format!(
                "edge {idx} ({} -> {}) has distance {}, expected a finite non-negative value",
                edge.id_start, edge.id_end, edge.distance
            )));
        }
    }
    Ok(())
}

fn matrix_index(matrix: &DistanceMatrix, id: LocationId) -> Result<usize, TollError> {
    matrix.index_of(id).ok_or_else(|| {
        TollError::InternalError(format!("location {id} missing from matrix index"))
    })
}
