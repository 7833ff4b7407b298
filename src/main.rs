use std::env;
use std::time::Instant;

use indicatif::ProgressBar;

use vcfeed::{BatchSampler, HyperparameterStore};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <mode> [args]", args[0]);
        eprintln!("Modes: bench <h5> <partition> | dump-hps <path>");
        return;
    }

    match args[1].as_str() {
        "bench" => {
            let h5 = args
                .get(2)
                .map(String::as_str)
                .unwrap_or("data/libre_equal.h5");
            let partition = args
                .get(3)
                .map(String::as_str)
                .unwrap_or("data/train-clean-100-speaker-sex.txt");
            if let Err(e) = bench(h5, partition) {
                eprintln!("bench failed: {e}");
                std::process::exit(1);
            }
        }
        "dump-hps" => {
            let path = args.get(2).map(String::as_str).unwrap_or("hps/v1.json");
            let store = HyperparameterStore::new();
            if let Err(e) = store.dump(path) {
                eprintln!("dump failed: {e}");
                std::process::exit(1);
            }
            println!("wrote default hyperparameters to {path}");
        }
        mode => eprintln!("Unknown mode {mode}"),
    }
}

/// Pull 100 batches and report the elapsed wall time.
fn bench(h5: &str, partition: &str) -> vcfeed::Result<()> {
    let mut sampler = BatchSampler::new(h5, partition)?;
    let bar = ProgressBar::new(100);
    let start = Instant::now();
    for _ in 0..100 {
        let _batch = sampler.next_batch()?;
        bar.inc(1);
    }
    bar.finish();
    println!(
        "100 batches of {} in {:.2?}",
        sampler.batch_size(),
        start.elapsed()
    );
    Ok(())
}
