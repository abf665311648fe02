use crate::models::{ClothingItem, PreferenceSet};

/// Check a (top, bottom) pair against the user's preferences
///
/// This is Stage 3 of the recommendation pipeline. Each dimension passes when
/// either garment satisfies it.
#[inline]
pub fn matches_pair_preferences(
    top: &ClothingItem,
    bottom: &ClothingItem,
    preferences: &PreferenceSet,
) -> bool {
    // Color allow-list: one preferred color in the pair is enough
    if !preferences.allows_color(&top.color) && !preferences.allows_color(&bottom.color) {
        return false;
    }

    // Preferred style: likewise OR'd across the pair
    if !preferences.allows_style(top.style) && !preferences.allows_style(bottom.style) {
        return false;
    }

    true
}

/// Check an outerwear or shoe item on its own attributes
///
/// Unlike the pair check, both dimensions must hold for this single item.
#[inline]
pub fn matches_layer_preferences(item: &ClothingItem, preferences: &PreferenceSet) -> bool {
    preferences.allows_color(&item.color) && preferences.allows_style(item.style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GarmentSlot, Style};

    fn garment(slot: GarmentSlot, color: &str, style: Style) -> ClothingItem {
        ClothingItem::new("id", "user_1", "Test", slot, color, style)
    }

    #[test]
    fn test_no_preferences_accepts_everything() {
        let top = garment(GarmentSlot::Top, "blue", Style::Formal);
        let bottom = garment(GarmentSlot::Bottom, "green", Style::Evening);

        assert!(matches_pair_preferences(&top, &bottom, &PreferenceSet::unconstrained()));
    }

    #[test]
    fn test_color_filter_is_or() {
        let prefs = PreferenceSet::unconstrained().with_colors(["red"]);

        let red_top = garment(GarmentSlot::Top, "red", Style::Casual);
        let blue_top = garment(GarmentSlot::Top, "blue", Style::Casual);
        let blue_bottom = garment(GarmentSlot::Bottom, "blue", Style::Casual);
        let green_bottom = garment(GarmentSlot::Bottom, "green", Style::Casual);

        assert!(matches_pair_preferences(&red_top, &blue_bottom, &prefs));
        assert!(!matches_pair_preferences(&blue_top, &green_bottom, &prefs));
    }

    #[test]
    fn test_style_filter_is_or() {
        let prefs = PreferenceSet::unconstrained().with_style(Style::Formal);

        let formal_top = garment(GarmentSlot::Top, "white", Style::Formal);
        let casual_top = garment(GarmentSlot::Top, "white", Style::Casual);
        let casual_bottom = garment(GarmentSlot::Bottom, "black", Style::Casual);

        assert!(matches_pair_preferences(&formal_top, &casual_bottom, &prefs));
        assert!(!matches_pair_preferences(&casual_top, &casual_bottom, &prefs));
    }

    #[test]
    fn test_both_dimensions_required_for_pair() {
        let prefs = PreferenceSet::unconstrained()
            .with_colors(["red"])
            .with_style(Style::Formal);

        let top = garment(GarmentSlot::Top, "red", Style::Casual);
        let bottom = garment(GarmentSlot::Bottom, "blue", Style::Casual);

        assert!(!matches_pair_preferences(&top, &bottom, &prefs));
    }

    #[test]
    fn test_unknown_style_rejects_pair() {
        let prefs = PreferenceSet::unconstrained().with_style("grunge");
        let top = garment(GarmentSlot::Top, "red", Style::Casual);
        let bottom = garment(GarmentSlot::Bottom, "blue", Style::Streetwear);

        assert!(!matches_pair_preferences(&top, &bottom, &prefs));
    }

    #[test]
    fn test_layer_requires_both_dimensions() {
        let prefs = PreferenceSet::unconstrained()
            .with_colors(["black"])
            .with_style(Style::Casual);

        assert!(matches_layer_preferences(&garment(GarmentSlot::Shoes, "black", Style::Casual), &prefs));
        assert!(!matches_layer_preferences(&garment(GarmentSlot::Shoes, "black", Style::Formal), &prefs));
        assert!(!matches_layer_preferences(&garment(GarmentSlot::Shoes, "white", Style::Casual), &prefs));
    }
}
