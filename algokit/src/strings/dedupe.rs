use std::collections::HashSet;

/// Drop every repeat of a char, keeping first occurrences in order.
pub fn remove_duplicates(input: &str) -> String {
    let mut seen = HashSet::new();
    input.chars().filter(|c| seen.insert(*c)).collect()
}
