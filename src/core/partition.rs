use crate::models::{ClothingItem, GarmentSlot, Occasion, Season};
use std::collections::HashMap;

/// Wardrobe snapshot grouped by garment slot
///
/// Each slot keeps the relative order of the input sequence.
#[derive(Debug, Default)]
pub struct SlotInventory<'a> {
    slots: HashMap<GarmentSlot, Vec<&'a ClothingItem>>,
}

impl<'a> SlotInventory<'a> {
    /// Items of a slot in input order; empty when the wardrobe has none
    pub fn slot(&self, slot: GarmentSlot) -> &[&'a ClothingItem] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, slot: GarmentSlot) -> usize {
        self.slot(slot).len()
    }
}

/// Group a flat wardrobe by garment slot
///
/// This is Stage 1 of the recommendation pipeline.
pub fn partition_by_slot(items: &[ClothingItem]) -> SlotInventory<'_> {
    let mut slots: HashMap<GarmentSlot, Vec<&ClothingItem>> = HashMap::new();
    for item in items {
        slots.entry(item.slot).or_default().push(item);
    }
    SlotInventory { slots }
}

pub fn items_in_slot(items: &[ClothingItem], slot: GarmentSlot) -> Vec<&ClothingItem> {
    items.iter().filter(|item| item.slot == slot).collect()
}

pub fn favorite_items(items: &[ClothingItem]) -> Vec<&ClothingItem> {
    items.iter().filter(|item| item.is_favorite).collect()
}

pub fn items_for_season(items: &[ClothingItem], season: Season) -> Vec<&ClothingItem> {
    items.iter().filter(|item| item.is_worn_in(season)).collect()
}

pub fn items_for_occasion(items: &[ClothingItem], occasion: Occasion) -> Vec<&ClothingItem> {
    items.iter().filter(|item| item.suits_occasion(occasion)).collect()
}
