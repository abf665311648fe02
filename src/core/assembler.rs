use crate::core::layers::Layers;
use crate::models::{ClothingItem, OutfitCandidate};

pub fn candidate_name(top: &ClothingItem, bottom: &ClothingItem) -> String {
    format!("{} with {}", top.name, bottom.name)
}

/// Summary text; outerwear and shoes are intentionally left out
pub fn candidate_description(top: &ClothingItem, bottom: &ClothingItem) -> String {
    format!(
        "A {} outfit with {} top and {} bottom",
        top.style, top.color, bottom.color
    )
}

/// Build a candidate from an accepted pair and its resolved layers
///
/// This is Stage 5 of the recommendation pipeline. Items are laid out as
/// top, bottom, optional outerwear, shoes.
pub fn assemble_candidate(
    top: &ClothingItem,
    bottom: &ClothingItem,
    layers: Layers<'_>,
) -> OutfitCandidate {
    let mut items = Vec::with_capacity(4);
    items.push(top.clone());
    items.push(bottom.clone());
    if let Some(outerwear) = layers.outerwear {
        items.push(outerwear.clone());
    }
    items.push(layers.shoes.clone());

    OutfitCandidate::new(
        items,
        candidate_name(top, bottom),
        candidate_description(top, bottom),
    )
}

/// Keep the first `limit` candidates in generation order
///
/// This is Stage 6. Purely positional: no ranking happens here.
#[inline]
pub fn limit_candidates(mut candidates: Vec<OutfitCandidate>, limit: usize) -> Vec<OutfitCandidate> {
    candidates.truncate(limit);
    candidates
}
