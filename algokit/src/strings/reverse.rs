/// Reverse `input` char by char.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
