use crate::models::ClothingItem;

/// Enumerate every (top, bottom) pair
///
/// Row-major: the outer loop runs over tops, the inner loop over bottoms.
/// Truncation later keeps a prefix of this order, so it must not change.
pub fn generate_pairs<'a>(
    tops: &'a [&'a ClothingItem],
    bottoms: &'a [&'a ClothingItem],
) -> impl Iterator<Item = (&'a ClothingItem, &'a ClothingItem)> + 'a {
    tops.iter()
        .flat_map(move |&top| bottoms.iter().map(move |&bottom| (top, bottom)))
}
