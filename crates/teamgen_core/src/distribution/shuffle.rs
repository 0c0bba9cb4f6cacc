use rand::Rng;

/// In-place Fisher–Yates shuffle.
///
/// For `i` from the last index down to 1, swap `items[i]` with `items[j]`
/// where `j` is uniform in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
