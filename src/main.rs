//! HashCheck CLI - digest computation, verification, and timing benchmarks

use clap::Parser;
use hashcheck::algo::ALGORITHMS;
use hashcheck::bench::measure_digest_timing;
use hashcheck::config::{CliArgs, Commands};
use hashcheck::digest::{compare_digest, DigestService};
use hashcheck::error::Result;
use hashcheck::report::{render_bar_chart, render_json};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let mut service = DigestService::new();

    match args.command {
        Commands::Hash {
            file,
            data,
            algorithm,
            all,
        } => {
            let file = file.as_deref();
            let data = data.as_deref();
            if all {
                hash_all(&mut service, data, file, args.json)
            } else {
                let digest = service.compute_digest(&algorithm, data, file)?;
                if args.json {
                    println!(
                        "{}",
                        serde_json::json!({ "algorithm": algorithm, "digest": digest })
                    );
                } else {
                    println!("{digest}");
                }
                Ok(())
            }
        }

        Commands::Verify {
            expected,
            file,
            data,
            algorithm,
        } => {
            let digest = service.compute_digest(&algorithm, data.as_deref(), file.as_deref())?;
            let matches = compare_digest(&digest, &expected);
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "algorithm": algorithm,
                        "digest": digest,
                        "expected": expected,
                        "matches": matches,
                    })
                );
            } else if matches {
                println!("Correct hash");
            } else {
                println!("Wrong hash");
                println!("  computed: {digest}");
                println!("  expected: {expected}");
            }
            if !matches {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Bench { algorithm, sizes } => {
            let results = measure_digest_timing(&mut service, &sizes, &algorithm)?;
            if args.json {
                println!("{}", render_json(&results));
            } else {
                print!("{}", render_bar_chart(&results, &algorithm));
            }
            Ok(())
        }

        Commands::Algorithms => {
            if args.json {
                println!("{}", serde_json::json!(ALGORITHMS));
            } else {
                for name in ALGORITHMS {
                    println!("{name}");
                }
            }
            Ok(())
        }
    }
}

/// Digest the same input under every registry algorithm, timing each call.
///
/// Mirrors the classic "iterate all available algorithms" run: one line per
/// algorithm with its digest and elapsed time.
fn hash_all(
    service: &mut DigestService,
    data: Option<&str>,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut rows = Vec::with_capacity(ALGORITHMS.len());

    for &algorithm in ALGORITHMS {
        let start = Instant::now();
        let digest = service.compute_digest(algorithm, data, file)?;
        let elapsed = start.elapsed();
        rows.push((algorithm, digest, elapsed));
    }

    if json {
        let entries: Vec<_> = rows
            .iter()
            .map(|(algorithm, digest, elapsed)| {
                serde_json::json!({
                    "algorithm": algorithm,
                    "digest": digest,
                    "seconds": elapsed.as_secs_f64(),
                })
            })
            .collect();
        println!("{}", serde_json::json!(entries));
    } else {
        for (algorithm, digest, elapsed) in rows {
            println!(
                "Algorithm: {algorithm}, hashed value: {digest}, time: {:.6}s",
                elapsed.as_secs_f64()
            );
        }
    }

    Ok(())
}
