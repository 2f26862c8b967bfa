//! Reflection prompts use case

use crate::domain::prompts;

/// Number of prompts shown when none is requested
pub const DEFAULT_PROMPT_COUNT: usize = 3;

/// Pick `count` reflection prompts for the user to write about
pub fn reflect(count: usize) -> Vec<&'static str> {
    prompts::pick(count, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_count() {
        assert_eq!(reflect(DEFAULT_PROMPT_COUNT).len(), 3);
        assert!(reflect(0).is_empty());
    }
}
