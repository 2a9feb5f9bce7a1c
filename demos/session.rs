//! Calculator Session
//!
//! This example drives a calculator session the way a presentation layer
//! would: one key press at a time, re-rendering after each.
//!
//! Key concepts:
//! - Pure transitions evaluated by the session
//! - Rendering and error reporting through a Presenter
//! - History reuse
//!
//! Run with: RUST_LOG=debug cargo run --example session

use tally::core::{parse_keys, Key};
use tally::effects::observers::LoggingPresenter;
use tally::{CalculatorBuilder, Session};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Calculator Session Example ===\n");

    let calculator = CalculatorBuilder::new()
        .max_input_digits(12)
        .precision(12)
        .build()
        .unwrap();
    let mut session = Session::new(calculator);
    let env = LoggingPresenter::new();

    for input in ["5 + 3 =", "* 2 =", "1 0 / 0 =", "C", "2 / 3 ="] {
        println!("keys: {input}");
        for key in parse_keys(input).unwrap() {
            match session.press(key, &env).await {
                Ok(calc) => println!("  [{}] {}", key.label(), calc.display()),
                Err(err) => println!("  [{}] error: {err}", key.label()),
            }
        }
    }

    println!("\nHistory:");
    for entry in session.calculator().history() {
        println!("  {} = {}", entry.expression(), entry.result());
    }

    if let Some(first) = session.calculator().history().get(0) {
        let result = first.result();
        session.press(Key::Reuse(result), &env).await.unwrap();
        println!("\nReused {result}: display shows {}", session.calculator().display());
    }

    let meta = session.metadata();
    println!(
        "\nSession {}: {} key presses, {} refused",
        session.id(),
        meta.events_handled,
        meta.errors_reported
    );

    println!("\n=== Example Complete ===");
}
