use crate::core::filters::matches_layer_preferences;
use crate::models::{ClothingItem, PreferenceSet};

/// Outer layers chosen for an accepted pair
#[derive(Debug, Clone, Copy)]
pub struct Layers<'a> {
    pub outerwear: Option<&'a ClothingItem>,
    pub shoes: &'a ClothingItem,
}

/// First outerwear item, in slot order, that satisfies the preferences on its own
#[inline]
pub fn select_outerwear<'a>(
    outerwear: &[&'a ClothingItem],
    preferences: &PreferenceSet,
) -> Option<&'a ClothingItem> {
    outerwear
        .iter()
        .copied()
        .find(|item| matches_layer_preferences(item, preferences))
}

/// First shoe item, in slot order, that satisfies the preferences on its own
#[inline]
pub fn select_shoes<'a>(
    shoes: &[&'a ClothingItem],
    preferences: &PreferenceSet,
) -> Option<&'a ClothingItem> {
    shoes
        .iter()
        .copied()
        .find(|item| matches_layer_preferences(item, preferences))
}

/// Resolve the outer layers for a pair
///
/// This is Stage 4 of the recommendation pipeline. Missing outerwear leaves
/// the layer empty; missing shoes rejects the pair (`None`). The choice only
/// depends on the preferences and slot order, never on the pair itself.
pub fn resolve_layers<'a>(
    outerwear: &[&'a ClothingItem],
    shoes: &[&'a ClothingItem],
    preferences: &PreferenceSet,
) -> Option<Layers<'a>> {
    let shoes = select_shoes(shoes, preferences)?;

    Some(Layers {
        outerwear: select_outerwear(outerwear, preferences),
        shoes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GarmentSlot, Style};

    fn layer(id: &str, slot: GarmentSlot, color: &str, style: Style) -> ClothingItem {
        ClothingItem::new(id, "user_1", id, slot, color, style)
    }

    #[test]
    fn test_first_matching_outerwear_wins() {
        let items = [
            layer("o1", GarmentSlot::Outerwear, "green", Style::Casual),
            layer("o2", GarmentSlot::Outerwear, "red", Style::Casual),
            layer("o3", GarmentSlot::Outerwear, "red", Style::Casual),
        ];
        let refs: Vec<&ClothingItem> = items.iter().collect();
        let prefs = PreferenceSet::unconstrained().with_colors(["red"]);

        for _ in 0..3 {
            assert_eq!(select_outerwear(&refs, &prefs).map(|i| i.id.as_str()), Some("o2"));
        }
    }

    #[test]
    fn test_missing_outerwear_is_not_rejection() {
        let shoes = [layer("s1", GarmentSlot::Shoes, "red", Style::Casual)];
        let shoe_refs: Vec<&ClothingItem> = shoes.iter().collect();
        let coats = [layer("o1", GarmentSlot::Outerwear, "blue", Style::Casual)];
        let coat_refs: Vec<&ClothingItem> = coats.iter().collect();
        let prefs = PreferenceSet::unconstrained().with_colors(["red"]);

        let layers = resolve_layers(&coat_refs, &shoe_refs, &prefs).unwrap();

        assert!(layers.outerwear.is_none());
        assert_eq!(layers.shoes.id, "s1");
    }

    #[test]
    fn test_missing_shoes_rejects() {
        let shoes = [layer("s1", GarmentSlot::Shoes, "red", Style::Formal)];
        let shoe_refs: Vec<&ClothingItem> = shoes.iter().collect();
        let prefs = PreferenceSet::unconstrained().with_style(Style::Casual);

        assert!(resolve_layers(&[], &shoe_refs, &prefs).is_none());
        assert!(resolve_layers(&[], &[], &PreferenceSet::unconstrained()).is_none());
    }

    #[test]
    fn test_layer_style_is_not_ored_with_pair() {
        // Shoe color matches but its style does not; pair attributes never help it
        let shoes = [
            layer("s1", GarmentSlot::Shoes, "red", Style::Formal),
            layer("s2", GarmentSlot::Shoes, "red", Style::Casual),
        ];
        let shoe_refs: Vec<&ClothingItem> = shoes.iter().collect();
        let prefs = PreferenceSet::unconstrained()
            .with_colors(["red"])
            .with_style(Style::Casual);

        let layers = resolve_layers(&[], &shoe_refs, &prefs).unwrap();
        assert_eq!(layers.shoes.id, "s2");
    }
}
