//! Builds a small network, skipping over a friendship with someone who was never registered, and
//! prints the result. Run with `RUST_LOG=debug` to see every mutation.

use socialgraph::Registry;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut network = Registry::new();
    for name in ["Alex", "Jordan", "Morgan", "Taylor", "Casey", "Riley"] {
        // Duplicates are reported through tracing; carry on either way.
        network.add_person(name).ok();
    }

    let friendships = [
        ("Alex", "Jordan"),
        ("Alex", "Morgan"),
        ("Jordan", "Taylor"),
        ("Jordan", "Johnny"), // Johnny doesn't exist
        ("Morgan", "Casey"),
        ("Taylor", "Riley"),
        ("Casey", "Riley"),
        ("Morgan", "Riley"),
        ("Alex", "Taylor"),
    ];
    for (name1, name2) in friendships {
        if let Err(err) = network.add_friendship(name1, name2) {
            eprintln!("{err}");
        }
    }

    println!();
    network.print_network(std::io::stdout().lock())
}
