/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::graph_base::GraphBase;
use roaring::RoaringBitmap;
use std::str::FromStr;

/// Outcome of a k-clique census: how many k-vertex subsets are cliques, and
/// the lexicographically first such subset (empty if there is none).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliqueSearchResult {
    pub count: u64,
    pub witness: Vec<usize>,
}
impl CliqueSearchResult {
    fn record(&mut self, clique: &[usize]) {
        if self.count == 0 {
            self.witness = clique.to_vec();
        }
        self.count += 1;
    }
}

/// How the k-subsets are visited. Both strategies walk strictly increasing
/// index sequences in lexicographic order and report identical results;
/// `Pruned` abandons a prefix as soon as it stops being a clique.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    Pruned,
    Exhaustive,
}
impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Pruned
    }
}
impl FromStr for SearchStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pruned" => Ok(SearchStrategy::Pruned),
            "exhaustive" => Ok(SearchStrategy::Exhaustive),
            _ => Err(format!("Unknown search strategy: {}", s)),
        }
    }
}

pub trait Cliques: GraphBase {
    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if !self.has_edge(u, v) {
                    return false;
                }
            }
        }
        true
    }

    fn find_clique_with(&self, k: usize, strategy: SearchStrategy) -> CliqueSearchResult {
        match strategy {
            SearchStrategy::Pruned => self.find_clique(k),
            SearchStrategy::Exhaustive => self.find_clique_exhaustive(k),
        }
    }

    /// Counts all k-cliques, extending a prefix only with vertices adjacent
    /// to every vertex already chosen.
    fn find_clique(&self, k: usize) -> CliqueSearchResult {
        let mut result = CliqueSearchResult::default();
        let num_nodes = self.count_nodes();
        if k > num_nodes {
            return result;
        }
        let mut chosen: Vec<usize> = Vec::with_capacity(k);
        if k == 0 {
            result.record(&chosen);
            return result;
        }
        let mut candidates = RoaringBitmap::new();
        for id in 0..num_nodes {
            candidates.insert(id as u32);
        }
        self.extend_clique(k, &candidates, &mut chosen, &mut result);
        result
    }

    // `candidates` holds the vertices greater than the last chosen one that
    // are adjacent to every chosen vertex.
    fn extend_clique(
        &self,
        k: usize,
        candidates: &RoaringBitmap,
        chosen: &mut Vec<usize>,
        result: &mut CliqueSearchResult,
    ) {
        let num_nodes = self.count_nodes();
        let remaining = k - chosen.len();
        for id in candidates.iter() {
            let id = id as usize;
            if id + remaining > num_nodes {
                break;
            }
            chosen.push(id);
            if remaining == 1 {
                result.record(chosen);
            } else {
                let neighbors = self.get_neighbors(id);
                let next: RoaringBitmap = candidates
                    .iter()
                    .skip_while(|&other| other as usize <= id)
                    .filter(|&other| neighbors.contains(other))
                    .collect();
                if next.len() as usize >= remaining - 1 {
                    self.extend_clique(k, &next, chosen, result);
                }
            }
            chosen.pop();
        }
    }

    /// Reference census: generates every strictly increasing k-sequence over
    /// `0..N` and tests all pairs only once the sequence is complete.
    fn find_clique_exhaustive(&self, k: usize) -> CliqueSearchResult {
        let mut result = CliqueSearchResult::default();
        if k > self.count_nodes() {
            return result;
        }
        let mut combination: Vec<usize> = vec![0; k];
        self.enumerate_combinations(0, 0, &mut combination, &mut result);
        result
    }

    fn enumerate_combinations(
        &self,
        start: usize,
        depth: usize,
        combination: &mut [usize],
        result: &mut CliqueSearchResult,
    ) {
        let k = combination.len();
        if depth == k {
            if self.is_clique(combination) {
                result.record(combination);
            }
            return;
        }
        for id in start..=(self.count_nodes() - (k - depth)) {
            combination[depth] = id;
            self.enumerate_combinations(id + 1, depth + 1, combination, result);
        }
    }
}
