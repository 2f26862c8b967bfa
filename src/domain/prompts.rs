//! Reflection prompts offered when starting a new entry

use rand::seq::SliceRandom;
use rand::Rng;

pub const REFLECTION_PROMPTS: [&str; 11] = [
    "What was the best part of your day?",
    "What did you learn today?",
    "What made you smile today?",
    "What are you grateful for today?",
    "What was the most challenging part of your day?",
    "How did you overcome a challenge today?",
    "What would you do differently if you could relive the day?",
    "Who did you interact with today?",
    "What was something new you noticed today?",
    "How did you feel today?",
    "What are you looking forward to tomorrow?",
];

/// Pick `count` prompts at random. Each pick is independent, so the same
/// prompt can come up more than once.
pub fn pick<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<&'static str> {
    (0..count)
        .filter_map(|_| REFLECTION_PROMPTS.choose(&mut *rng).copied())
        .collect()
}
