/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::fmt;

/// Identity of one input graph. Either taken from an explicit `"<id>,"` line
/// prefix or assigned by the producer as the ordinal of the line among all
/// non-skipped input lines. Evaluation records carry it so that consumers can
/// restore input order after concurrent processing.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct GraphId {
    id: i64,
}
impl GraphId {
    pub fn value(&self) -> i64 {
        self.id
    }
}
impl<T> From<T> for GraphId
where
    T: Into<i64>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
