/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use roaring::RoaringBitmap;

/// Minimum shared context between graph objects used by the clique
/// algorithms. Vertices are the dense range `0..count_nodes()`.
pub trait GraphBase
where
    Self: Sized,
{
    fn count_nodes(&self) -> usize;
    fn get_neighbors(&self, node_id: usize) -> &RoaringBitmap;

    fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v && u < self.count_nodes() && self.get_neighbors(u).contains(v as u32)
    }
    fn get_degree(&self, node_id: usize) -> usize {
        self.get_neighbors(node_id).len() as usize
    }
    fn count_edges(&self) -> usize {
        (0..self.count_nodes())
            .map(|id| self.get_degree(id))
            .sum::<usize>()
            / 2
    }
    /// All edges `(u, v)` with `u < v`, ordered by `u` then `v`.
    fn get_edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(self.count_edges());
        for u in 0..self.count_nodes() {
            for v in self.get_neighbors(u).iter() {
                let v = v as usize;
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}
