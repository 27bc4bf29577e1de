use anyhow::{Result, bail};
use bitperm::verify::{VerifyConfig, VerifyMode, classes_up_to, verify_class};
use bitperm::{BinomialTable, BitWord};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::CheckArgs;

const MAX_REPORTED_FAILURES: usize = 10;

pub(crate) fn run_check<W: BitWord>(args: &CheckArgs) -> Result<()> {
    if args.max_width > W::BITS {
        bail!(
            "width {} does not fit a {}-bit word (use a wider --word)",
            args.max_width,
            W::BITS
        );
    }

    let table = BinomialTable::<W>::build(args.max_width)?;
    let config = VerifyConfig {
        exhaustive_limit: args.exhaustive_limit,
        samples: args.samples,
        seed: args.seed,
    };
    let classes = classes_up_to(args.max_width);
    println!(
        "Checking {} classes up to width {} with {}-bit words...",
        classes.len(),
        args.max_width,
        W::BITS
    );

    let progress = ProgressBar::new(classes.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} classes [{elapsed_precise}]",
    )?);
    let results: Vec<_> = classes
        .par_iter()
        .progress_with(progress.clone())
        .map(|&class| verify_class(&table, class, &config))
        .collect();
    progress.finish_and_clear();

    let mut exhaustive = 0usize;
    let mut sampled = 0usize;
    let mut members = 0u128;
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(report) => {
                match report.mode {
                    VerifyMode::Exhaustive => exhaustive += 1,
                    VerifyMode::Sampled => sampled += 1,
                }
                members += report.checked;
            }
            Err(err) => failures.push(err),
        }
    }

    println!("Exhaustive classes: {exhaustive}");
    println!("Sampled classes: {sampled}");
    println!("Members and samples checked: {members}");

    if !failures.is_empty() {
        for err in failures.iter().take(MAX_REPORTED_FAILURES) {
            eprintln!("{err}");
        }
        bail!("{} of {} classes failed verification", failures.len(), classes.len());
    }

    println!("Check complete.");
    Ok(())
}
