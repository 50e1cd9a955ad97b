/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::id_types::GraphId;
use tracing::warn;

/// One unit of pipeline input: a graph6 token and the identity its result
/// will be filed under. `sequence` is the line's position among non-skipped
/// lines and stays unique when explicit identities repeat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkItem {
    pub graph_id: GraphId,
    pub sequence: u64,
    pub token: String,
}

/// Turns raw input lines into work items. Owned by the single producer, so
/// ordinal identities follow input order regardless of how many workers
/// consume the items.
pub struct LineProcessor {
    num_items: i64,
}
impl LineProcessor {
    pub fn new() -> Self {
        Self { num_items: 0 }
    }

    pub fn is_comment(line: &str) -> bool {
        line.is_empty() || line.starts_with('>')
    }

    /// Returns None for blank lines and `>` header lines; those do not count
    /// towards ordinal identities. A line of the form `<id>,<token>` keeps
    /// `<id>`; any other line is identified by its ordinal among the lines
    /// that were not skipped.
    pub fn process_line(&mut self, line: &str) -> Option<WorkItem> {
        let line = line.trim();
        if Self::is_comment(line) {
            return None;
        }
        let sequence = self.num_items as u64;
        let ordinal = GraphId::from(self.num_items);
        self.num_items += 1;
        let (graph_id, token) = match line.find(',') {
            Some(pos) => {
                let (prefix, rest) = (&line[..pos], &line[pos + 1..]);
                match prefix.trim().parse::<i64>() {
                    Ok(id) => (GraphId::from(id), rest),
                    Err(error) => {
                        warn!(
                            ordinal = ordinal.value(),
                            "Ignoring unparseable id prefix {:?}: {}", prefix, error
                        );
                        (ordinal, rest)
                    }
                }
            }
            None => (ordinal, line),
        };
        Some(WorkItem {
            graph_id,
            sequence,
            token: token.trim().to_string(),
        })
    }

    pub fn num_items(&self) -> i64 {
        self.num_items
    }
}
impl Default for LineProcessor {
    fn default() -> Self {
        LineProcessor::new()
    }
}
