/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::algorithms::cliques::Cliques;
use crate::ramsey::algorithms::complement::Complement;
use crate::ramsey::graph_base::GraphBase;
use roaring::RoaringBitmap;

/// A simple undirected graph on the vertex set `0..N`, stored as one
/// neighbour bitmap per vertex. Built by `SimpleUndirectedGraphBuilder`,
/// which keeps the relation symmetric and loop-free.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleUndirectedGraph {
    pub neighbors: Vec<RoaringBitmap>,
}
impl GraphBase for SimpleUndirectedGraph {
    fn count_nodes(&self) -> usize {
        self.neighbors.len()
    }
    fn get_neighbors(&self, node_id: usize) -> &RoaringBitmap {
        &self.neighbors[node_id]
    }
}
impl SimpleUndirectedGraph {
    pub fn create_empty(num_nodes: usize) -> Self {
        Self {
            neighbors: vec![RoaringBitmap::new(); num_nodes],
        }
    }
}

impl Cliques for SimpleUndirectedGraph {}
impl Complement for SimpleUndirectedGraph {}
