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

use std::env;
use std::io;
use std::process;
use std::str::FromStr;

use argparse::{ArgumentParser, Store};
use rulemine::Algorithm;

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub min_support: f64,
    pub min_confidence: f64,
    pub algorithm: Algorithm,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut input_file_path = String::new();
    let mut output_rules_path = String::new();
    let mut min_support: f64 = 0.0;
    let mut min_confidence: f64 = 0.0;
    let mut algorithm = String::from("fpgrowth");

    {
        let mut parser = ArgumentParser::new();
        parser.set_description(
            "Frequent itemset and association rule mining; \
             level-wise Apriori or parallel FPGrowth.",
        );

        parser
            .refer(&mut input_file_path)
            .add_option(&["--input"], Store, "Input dataset in CSV format.")
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: antecedent => consequent, confidence, lift, support.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "Mining algorithm: 'apriori' or 'fpgrowth' (the default).",
            )
            .metavar("name");

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    let algorithm = match Algorithm::from_str(&algorithm) {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    // Threshold ranges are validated by the mining entry point.
    Arguments {
        input_file_path,
        output_rules_path,
        min_support,
        min_confidence,
        algorithm,
    }
}
