//! Prompt rotation vs one-pass word hiding.
//!
//! Both selectors draw without repeats; they differ at exhaustion. The
//! refilling variant suits an endless prompt rotation (a fresh round starts
//! transparently), the shrinking variant suits a drill that hides one more
//! word per step and stops when none remain.

use meguri::{RefillingSelector, ShrinkingSelector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prompts = vec![
        "What did you learn today?",
        "What are you grateful for?",
        "What was the best part of your day?",
        "Who did you help?",
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut rotation = RefillingSelector::new(prompts)?;

    // Ten picks from a pool of four: no repeat within a round, and the
    // rotation keeps going past exhaustion.
    println!("prompt rotation:");
    for day in 1..=10 {
        let prompt = rotation.draw_with_rng(&mut rng);
        println!("  day {day:2}  {prompt}");
        if rotation.is_exhausted() {
            println!("          (round spent, next pick starts a fresh round)");
        }
    }
    println!();

    let verse: Vec<&str> = "I can do all things through him who strengthens me"
        .split_whitespace()
        .collect();
    let mut hider = ShrinkingSelector::new(verse)?;

    println!("word hiding:");
    while let Some(word) = hider.draw_with_rng(&mut rng) {
        println!("  hide {word:12}  ({} left)", hider.remaining());
    }

    Ok(())
}
