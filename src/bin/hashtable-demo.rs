//! Walks a table through inserts, lookups, deletes, growth and shrink,
//! printing the table along the way.
//!
//! Set `RUST_LOG=chain_hashtable=debug` to see resize events.

use chain_hashtable::{HashTable, Status};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut table: HashTable = HashTable::new();

    for (k, v) in [("key1", 1), ("key2", 2), ("key3", 3)] {
        report_failure("insert", k, table.insert(k, v).into());
    }
    println!("Hash table after insertions:");
    print!("{}", table);

    match table.search("key2") {
        Some(entry) => println!("\nElement found: Key: {}, Value: {}\n", entry.key(), entry.value()),
        None => println!("\nElement not found\n"),
    }

    let status: Status = table.delete("key2").into();
    if status.is_success() {
        println!("Element with key 'key2' deleted successfully\n");
    } else {
        println!("Failed to delete element with key 'key2', reason: {}\n", status);
    }
    println!("Hash table after deletion:");
    print!("{}", table);

    println!("\nAdding 1000 elements to test performance...");
    for i in 0..1000 {
        let key = format!("perfkey{}", i);
        report_failure("insert", &key, table.insert(&key, i).into());
    }
    print_stats("Current", &table);

    println!("\nRemoving 800 elements to test shrinking...");
    for i in 0..800 {
        let key = format!("perfkey{}", i);
        report_failure("delete", &key, table.delete(&key).into());
    }
    print_stats("After deletion -", &table);

    table.destroy();
}

fn report_failure(op: &str, key: &str, status: Status) {
    if !status.is_success() {
        println!("Failed to {} key '{}', reason: {}", op, key, status);
    }
}

fn print_stats(label: &str, table: &HashTable) {
    println!("{} load factor: {:.2}", label, table.load_factor());
    println!("{} capacity: {}", label, table.capacity());
    println!("{} size: {}", label, table.len());
}
