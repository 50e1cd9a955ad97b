/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::simple_undirected_graph::SimpleUndirectedGraph;
use rand::Rng;

/// Accumulates edges over a fixed vertex set `0..num_nodes` and produces an
/// immutable `SimpleUndirectedGraph`. Self-loops and out-of-range endpoints
/// are dropped; every accepted edge is stored in both directions.
pub struct SimpleUndirectedGraphBuilder {
    graph: SimpleUndirectedGraph,
}

impl SimpleUndirectedGraphBuilder {
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            graph: SimpleUndirectedGraph::create_empty(num_nodes),
        }
    }

    /// Returns true if the edge was not already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        let num_nodes = self.graph.neighbors.len();
        if u == v || u >= num_nodes || v >= num_nodes {
            return false;
        }
        let inserted = self.graph.neighbors[u].insert(v as u32);
        self.graph.neighbors[v].insert(u as u32);
        inserted
    }

    pub fn build(self) -> SimpleUndirectedGraph {
        self.graph
    }

    // builds a graph from a vector of vertex pairs. Repeated edges are ignored.
    // Edges only need to be provided once (this being an undirected graph)
    pub fn from_vector(num_nodes: usize, data: &[(usize, usize)]) -> SimpleUndirectedGraph {
        let mut builder = Self::with_nodes(num_nodes);
        for &(u, v) in data {
            builder.add_edge(u, v);
        }
        builder.build()
    }

    pub fn get_empty_graph(n: usize) -> SimpleUndirectedGraph {
        SimpleUndirectedGraph::create_empty(n)
    }

    // Build a graph with n vertices with every possible edge.
    pub fn get_complete_graph(n: usize) -> SimpleUndirectedGraph {
        let mut builder = Self::with_nodes(n);
        for u in 0..n {
            for v in u + 1..n {
                builder.add_edge(u, v);
            }
        }
        builder.build()
    }

    // Build a graph with a sequence of n vertices with an edge between
    // each pair of successive vertices.
    pub fn get_path_graph(n: usize) -> SimpleUndirectedGraph {
        let mut builder = Self::with_nodes(n);
        for i in 1..n {
            builder.add_edge(i - 1, i);
        }
        builder.build()
    }

    // Path graph plus an edge between the first and last vertices.
    pub fn get_cycle_graph(n: usize) -> SimpleUndirectedGraph {
        let mut builder = Self::with_nodes(n);
        for i in 0..n {
            builder.add_edge(i, (i + 1) % n);
        }
        builder.build()
    }

    // Builds an Erdos-Renyi graph on n vertices: each possible edge is added
    // independently at random with probability p.
    pub fn get_er_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> SimpleUndirectedGraph {
        let mut builder = Self::with_nodes(n);
        for u in 0..n {
            for v in u + 1..n {
                if rng.gen::<f64>() < p {
                    builder.add_edge(u, v);
                }
            }
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramsey::graph_base::GraphBase;

    #[test]
    fn test_add_edge_is_symmetric_and_loop_free() {
        let mut builder = SimpleUndirectedGraphBuilder::with_nodes(4);
        assert!(builder.add_edge(2, 1));
        assert!(!builder.add_edge(1, 2));
        assert!(!builder.add_edge(3, 3));
        assert!(!builder.add_edge(0, 9));
        let graph = builder.build();
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
        assert!(!graph.has_edge(3, 3));
        assert_eq!(graph.count_edges(), 1);
    }

    #[test]
    fn test_standard_graphs() {
        assert_eq!(SimpleUndirectedGraphBuilder::get_complete_graph(5).count_edges(), 10);
        assert_eq!(SimpleUndirectedGraphBuilder::get_cycle_graph(6).count_edges(), 6);
        assert_eq!(SimpleUndirectedGraphBuilder::get_path_graph(6).count_edges(), 5);
        assert_eq!(SimpleUndirectedGraphBuilder::get_empty_graph(6).count_edges(), 0);
        assert_eq!(
            SimpleUndirectedGraphBuilder::get_cycle_graph(4).get_edges(),
            vec![(0, 1), (0, 3), (1, 2), (2, 3)]
        );
    }
}
