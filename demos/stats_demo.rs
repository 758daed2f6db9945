use chain_hash::Config;
use chain_hash::HashTable;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 0.9)]
    load_factor: f64,

    /// Number of keys to insert; defaults to the table's initial capacity.
    #[arg(short = 'n', long = "count")]
    count: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity: {}, load factor: {}",
        args.target_capacity, args.load_factor
    );

    let config = Config::default()
        .with_capacity(args.target_capacity)
        .with_load_factor(args.load_factor);
    let mut table: HashTable<u64, u64> = match HashTable::with_config(config) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    println!(
        "Buckets: {}, capacity before growth: {}",
        table.bucket_count(),
        table.capacity()
    );

    let num_values = args.count.unwrap_or(table.capacity());
    println!("Filling table with {} u64 values...", num_values);

    let mut growths = 0;
    for value in 0..num_values as u64 {
        let buckets = table.bucket_count();
        if let Some(previous) = table.insert(value, value) {
            panic!("Value already exists in table: {}", previous);
        }
        if table.bucket_count() != buckets {
            growths += 1;
        }
    }

    println!("Inserted {} values into table", table.len());
    println!(
        "Final load: {:.2}% of {} buckets after {} growths",
        (table.len() as f64 / table.bucket_count() as f64) * 100.0,
        table.bucket_count(),
        growths
    );

    table.chain_histogram().print();
    table.chain_stats().print();
}
