/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::error::RamseyError;
use crate::ramsey::graph_base::GraphBase;
use crate::ramsey::simple_undirected_graph::SimpleUndirectedGraph;
use crate::ramsey::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;

const BITS_PER_CHAR: usize = 6;
const CHAR_OFFSET: u8 = 63;
// Largest vertex count whose graph6 header fits in a single character.
const MAX_SHORT_HEADER: usize = 62;

/// Result of decoding one token. A token that is too short still yields a
/// graph built from the bits it did carry; `read_bits` tells how many.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedGraph {
    pub graph: SimpleUndirectedGraph,
    pub read_bits: usize,
    pub expected_bits: usize,
}
impl DecodedGraph {
    pub fn is_truncated(&self) -> bool {
        self.read_bits < self.expected_bits
    }
    pub fn as_error(&self) -> Option<RamseyError> {
        if self.is_truncated() {
            Some(RamseyError::MalformedInput {
                expected_bits: self.expected_bits,
                read_bits: self.read_bits,
            })
        } else {
            None
        }
    }
}

/// Upper-triangular graph6 codec for a vertex count fixed up front. The
/// first character of a token is the header and is skipped; the vertex
/// count is never derived from it. Each following character carries six
/// adjacency bits (`c - 63`, most significant first) for the pairs
/// (0,1), (0,2), (1,2), (0,3), ... i.e. `v` ascending and, within a
/// column, `u` from 0 to `v - 1`.
#[derive(Copy, Clone, Debug)]
pub struct Graph6Codec {
    num_nodes: usize,
}

impl Graph6Codec {
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn expected_bits(&self) -> usize {
        self.num_nodes * self.num_nodes.saturating_sub(1) / 2
    }

    pub fn decode(&self, token: &str) -> DecodedGraph {
        let expected_bits = self.expected_bits();
        let mut builder = SimpleUndirectedGraphBuilder::with_nodes(self.num_nodes);
        let mut read_bits: usize = 0;
        let (mut u, mut v) = (0usize, 1usize);
        'outer: for byte in token.bytes().skip(1) {
            let value = byte.wrapping_sub(CHAR_OFFSET);
            for shift in (0..BITS_PER_CHAR).rev() {
                if read_bits >= expected_bits {
                    break 'outer;
                }
                if (value >> shift) & 1 == 1 {
                    builder.add_edge(u, v);
                }
                read_bits += 1;
                u += 1;
                if u == v {
                    u = 0;
                    v += 1;
                }
            }
        }
        DecodedGraph {
            graph: builder.build(),
            read_bits,
            expected_bits,
        }
    }

    /// Inverse of `decode`. The header is the usual one-character graph6
    /// size byte when it fits; larger graphs get a bare `~` since the
    /// decoder only ever skips one character.
    pub fn encode<G: GraphBase>(&self, graph: &G) -> String {
        let num_nodes = graph.count_nodes();
        let header = if num_nodes <= MAX_SHORT_HEADER {
            num_nodes as u8 + CHAR_OFFSET
        } else {
            b'~'
        };
        let mut bytes: Vec<u8> = vec![header];
        let mut current: u8 = 0;
        let mut filled: usize = 0;
        for v in 1..num_nodes {
            for u in 0..v {
                current <<= 1;
                if graph.has_edge(u, v) {
                    current |= 1;
                }
                filled += 1;
                if filled == BITS_PER_CHAR {
                    bytes.push(current + CHAR_OFFSET);
                    current = 0;
                    filled = 0;
                }
            }
        }
        if filled > 0 {
            current <<= BITS_PER_CHAR - filled;
            bytes.push(current + CHAR_OFFSET);
        }
        bytes.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_edge() {
        // "A_": header for n = 2, then 0b100000 marks the pair (0, 1).
        let decoded = Graph6Codec::new(2).decode("A_");
        assert!(!decoded.is_truncated());
        assert_eq!(decoded.graph.get_edges(), vec![(0, 1)]);
    }

    #[test]
    fn test_decode_pair_order() {
        // Bits 0,0,1 select the third pair, which is (1, 2).
        let decoded = Graph6Codec::new(3).decode("BG");
        assert_eq!(decoded.graph.get_edges(), vec![(1, 2)]);
    }

    #[test]
    fn test_decode_ignores_extra_bits() {
        // n = 3 needs three bits; the trailing ones and the extra char are ignored.
        let decoded = Graph6Codec::new(3).decode("B~~");
        assert_eq!(decoded.read_bits, 3);
        assert_eq!(decoded.graph.count_edges(), 3);
    }

    #[test]
    fn test_decode_truncated_token() {
        let decoded = Graph6Codec::new(6).decode("E~");
        assert!(decoded.is_truncated());
        assert_eq!(decoded.read_bits, 6);
        assert_eq!(decoded.expected_bits, 15);
        assert_eq!(decoded.graph.count_nodes(), 6);
        assert_eq!(decoded.graph.count_edges(), 6);
        match decoded.as_error() {
            Some(RamseyError::MalformedInput {
                expected_bits: 15,
                read_bits: 6,
            }) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_encode_known_tokens() {
        let codec = Graph6Codec::new(4);
        assert_eq!(codec.encode(&SimpleUndirectedGraphBuilder::get_complete_graph(4)), "C~");
        assert_eq!(codec.encode(&SimpleUndirectedGraphBuilder::get_empty_graph(4)), "C?");
        assert_eq!(codec.encode(&SimpleUndirectedGraphBuilder::get_empty_graph(1)), "@");
    }
}
