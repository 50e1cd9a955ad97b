/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, BufRead, Lines};

/// Where graph6 lines come from: stdin, or an in-memory buffer in tests.
pub struct Input<'a> {
    source: Box<dyn BufRead + 'a>,
}

impl<'a> Input<'a> {
    pub fn console(stdin: &'a io::Stdin) -> Self {
        Self::from_reader(stdin.lock())
    }

    pub fn string(text: &'a [u8]) -> Self {
        Self::from_reader(text)
    }

    pub fn from_reader<R: BufRead + 'a>(reader: R) -> Self {
        Self {
            source: Box::new(reader),
        }
    }

    /// Consumes the source line by line; a line that fails to read is
    /// reported as an `Err` item and the iterator moves on.
    pub fn lines(self) -> Lines<Box<dyn BufRead + 'a>> {
        self.source.lines()
    }
}
