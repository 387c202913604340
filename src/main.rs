mod command_line_args;

use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use rulemine::{mine, TransactionReader};

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;

fn mine_dataset(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let transactions: Vec<Vec<String>> = TransactionReader::new(&args.input_file_path)?.collect();
    println!(
        "Read {} transactions in {} seconds.",
        transactions.len(),
        timer.elapsed().as_secs()
    );

    let timer = Instant::now();
    let result = mine(
        &transactions,
        args.min_support,
        args.min_confidence,
        args.algorithm,
    )?;
    println!(
        "Mined {} frequent itemsets and {} rules in {} seconds.",
        result.itemsets().len(),
        result.rules().len(),
        timer.elapsed().as_secs()
    );

    {
        let mut output = File::create(&args.output_rules_path)?;
        writeln!(output, "Antecedent=>Consequent,Confidence,Lift,Support")?;
        for rule in result.rules() {
            writeln!(
                output,
                "{},{},{},{}",
                rule.to_string(result.itemizer()),
                rule.confidence(),
                rule.lift(),
                rule.support()
            )?;
        }
    }

    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_dataset(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
