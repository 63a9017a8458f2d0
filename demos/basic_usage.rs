//! Basic Usage
//!
//! This demo walks one flashcard through a short practice session.
//!
//! Key concepts:
//! - Recording pass/fail outcomes after each attempt
//! - Reading back the history and the last-mistake time
//! - Snapshotting the status and restoring it for the same card
//!
//! Run with: RUST_LOG=cardstatus=debug cargo run --example basic_usage

use cardstatus::{CardStatus, SnapshotError, StatusSnapshot, SystemClock};

struct Flashcard {
    term: &'static str,
    definition: &'static str,
}

fn main() -> Result<(), SnapshotError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Card Status Demo ===\n");

    let card = Flashcard {
        term: "dziękuję",
        definition: "thank you",
    };
    let mut status = CardStatus::new(&card);

    for answer in ["thank you", "please", "thank you"] {
        let correct = answer == status.card().definition;
        status.record_result(correct);
        let verdict = if correct { "ok" } else { "miss" };
        println!("{} -> {answer:?}: {verdict}", status.card().term);
    }

    println!("\nHistory: {:?}", status.results());
    match status.last_mistake() {
        Some(when) => println!("Last mistake: {when}"),
        None => println!("No mistakes"),
    }
    if let Some(rate) = status.success_rate() {
        println!("Success rate: {:.0}%", rate * 100.0);
    }

    let json = status.snapshot().to_json()?;
    println!("\nSnapshot: {json}");

    let restored = CardStatus::restore(&card, StatusSnapshot::from_json(&json)?, SystemClock)?;
    println!("Restored history: {:?}", restored.results());

    status.clear_results();
    println!(
        "After clear: {:?}, mistakes: {}",
        status.results(),
        status.has_mistakes()
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}
