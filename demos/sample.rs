//! K-means (k=3) on the 20-point height/weight sample.
//!
//! Run with `RUST_LOG=debug` to see the engine's iteration log.

use env_logger::Env;
use lloyd::cluster::{Kmeans, Point};

fn sample() -> Vec<Point> {
    [
        (65.0, 220.0),
        (73.0, 160.0),
        (59.0, 110.0),
        (61.0, 120.0),
        (75.0, 150.0),
        (67.0, 240.0),
        (68.0, 230.0),
        (70.0, 220.0),
        (62.0, 130.0),
        (66.0, 210.0),
        (77.0, 190.0),
        (75.0, 180.0),
        (74.0, 170.0),
        (70.0, 210.0),
        (61.0, 110.0),
        (58.0, 100.0),
        (66.0, 230.0),
        (59.0, 120.0),
        (68.0, 210.0),
        (61.0, 130.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let data = sample();
    println!("Input data:");
    for (i, p) in data.iter().enumerate() {
        println!("  {i:2}: {p}");
    }

    let k = 3;
    println!("\nClustering with k = {k}");
    let fit = Kmeans::new(k).fit(&data)?;
    println!(
        "Finished: {:?} after {} iterations",
        fit.status, fit.iterations
    );

    let labels: Vec<String> = fit.assignment.iter().map(usize::to_string).collect();
    println!("Assignment: {}", labels.join(" "));

    println!("\nRaw data by cluster:");
    for (c, group) in fit.groups(&data)?.iter().enumerate() {
        println!("cluster {c}");
        println!("===========");
        for p in group {
            println!("  {p}");
        }
        println!("===========");
    }
    Ok(())
}
