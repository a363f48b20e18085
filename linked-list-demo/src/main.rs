use std::io;

use anyhow::{Context, Result};
use clap::{crate_version, App};
use linked_list::LinkedList;
use tracing::{debug, Level};
use tracing_subscriber::{filter::Targets, prelude::*};

#[derive(Clone, Copy, Debug)]
enum Insert {
    Front(i32),
    Back(i32),
}

const SCRIPT: [Insert; 4] = [
    Insert::Front(10),
    Insert::Back(40),
    Insert::Front(20),
    Insert::Back(50),
];

fn run(script: &[Insert]) -> LinkedList {
    let mut list = LinkedList::new();
    for op in script {
        debug!(?op, "apply");
        match *op {
            Insert::Front(value) => list.insert_at_front(value),
            Insert::Back(value) => list.insert_at_back(value),
        }
    }
    list
}

/// Diagnostics go to stderr so stdout carries only the list.
fn install_logger() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(
            Targets::new()
                .with_target("linked_list", Level::WARN)
                .with_target("linked_list_demo", Level::WARN),
        );
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> Result<()> {
    App::new("linked-list-demo")
        .version(crate_version!())
        .about("Builds a four element linked list and prints it")
        .get_matches();
    install_logger();

    let list = run(&SCRIPT);
    list.print().context("failed to print the list")?;
    Ok(())
}
