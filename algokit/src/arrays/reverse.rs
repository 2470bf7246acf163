/// Reverse a slice in place by swapping from both ends toward the middle.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    let (mut left, mut right) = (0, items.len() - 1);
    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Reversed copy of `items`.
pub fn reversed<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    reverse_in_place(&mut out);
    out
}
