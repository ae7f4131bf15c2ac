use std::cmp::Ordering;
use std::collections::HashSet;

use itertools::Itertools;

use crate::mot::Object;

/// Outcome of matching one frame's detections against the current tracks.
pub(crate) struct Association {
    /// Per tracked row (in input order): matched detection column, or None
    pub matches: Vec<Option<usize>>,
    /// Detection columns never claimed by any row, in ascending index order
    pub unmatched_detections: Vec<usize>,
}

fn cmp_dist(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Greedy nearest-neighbour assignment over the full m×n distance matrix:
///
/// ```text
///                 __  detections --->   __
///     tracked    | D_1,1 . . . . . D_1,n |
///        |       |   .      .            |
///        |       |   .          .        |
///        V       | D_m,1           D_m,n |
///                |__                   __|
/// ```
///
/// Each row ranks its columns by ascending distance, then the rows
/// themselves are ranked by the distance to their own nearest candidate
/// and resolved in that order. A row claims the first still-unclaimed
/// column strictly closer than `dist_tol`; a claimed column is gone for
/// the rest of the cycle. This is deliberately not an optimal (Hungarian)
/// assignment; the greedy row priority is part of the behavioural
/// contract and cheap enough to run every frame.
pub(crate) fn associate(tracked: &[Object], detections: &[Object], dist_tol: f32) -> Association {
    let m = tracked.len();
    let n = detections.len();

    if m == 0 {
        return Association {
            matches: Vec::new(),
            unmatched_detections: (0..n).collect(),
        };
    }
    if n == 0 {
        return Association {
            matches: vec![None; m],
            unmatched_detections: Vec::new(),
        };
    }

    let dist_matrix: Vec<Vec<f32>> = tracked
        .iter()
        .map(|t| detections.iter().map(|d| t.distance_to(d)).collect())
        .collect();

    // Intra-row ranking: closest detection first in every row
    let ranked_cols: Vec<Vec<usize>> = (0..m)
        .map(|i| {
            (0..n)
                .sorted_by(|&a, &b| cmp_dist(dist_matrix[i][a], dist_matrix[i][b]))
                .collect()
        })
        .collect();

    // Row priority: the track whose nearest candidate is closest goes first
    let row_order: Vec<usize> = (0..m)
        .sorted_by(|&a, &b| {
            cmp_dist(
                dist_matrix[a][ranked_cols[a][0]],
                dist_matrix[b][ranked_cols[b][0]],
            )
        })
        .collect();

    let mut used_cols: HashSet<usize> = HashSet::new();
    let mut matches: Vec<Option<usize>> = vec![None; m];

    for &row in &row_order {
        for &col in &ranked_cols[row] {
            // Strictly less than the tolerance; a distance equal to it is a miss
            if !used_cols.contains(&col) && dist_matrix[row][col] < dist_tol {
                used_cols.insert(col);
                matches[row] = Some(col);
                break;
            }
        }
    }

    let unmatched_detections = (0..n).filter(|c| !used_cols.contains(c)).collect();

    Association {
        matches,
        unmatched_detections,
    }
}
