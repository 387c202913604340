// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

/// Splits one line into item labels: comma-separated, whitespace trimmed,
/// empty tokens dropped. Duplicate labels are left in; the mining entry
/// point treats each transaction as a set.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Iterator over the transactions of a CSV-ish dataset file, one
/// transaction per line. Blank lines are skipped.
pub struct TransactionReader {
    reader: BufReader<File>,
}

impl TransactionReader {
    pub fn new(path: &str) -> io::Result<TransactionReader> {
        let file = File::open(path)?;
        Ok(TransactionReader {
            reader: BufReader::new(file),
        })
    }
}

impl Iterator for TransactionReader {
    type Item = Vec<String>;
    fn next(&mut self) -> Option<Vec<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            let len = self.reader.read_line(&mut line).ok()?;
            if len == 0 {
                return None;
            }
            let tokens = tokenize_line(&line);
            if !tokens.is_empty() {
                return Some(tokens);
            }
        }
    }
}
