/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, Write};

use crate::ramsey::error::RamseyResult;

enum Target<'a> {
    Stdout(io::Stdout),
    Buffer(&'a mut Vec<u8>),
}

/// Destination of text-format records: stdout, or a byte buffer in tests.
pub struct Output<'a> {
    target: Target<'a>,
}

impl<'a> Output<'a> {
    pub fn console() -> Self {
        Self {
            target: Target::Stdout(io::stdout()),
        }
    }

    pub fn string(buffer: &'a mut Vec<u8>) -> Self {
        Self {
            target: Target::Buffer(buffer),
        }
    }

    pub fn write_line(&mut self, line: &str) -> RamseyResult<()> {
        match &mut self.target {
            Target::Stdout(stdout) => writeln!(stdout.lock(), "{}", line)?,
            Target::Buffer(buffer) => writeln!(buffer, "{}", line)?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> RamseyResult<()> {
        if let Target::Stdout(stdout) = &mut self.target {
            stdout.flush()?;
        }
        Ok(())
    }
}
