// SPDX-License-Identifier: MPL-2.0
//! Category filter bar state.
//!
//! The controller owns one visibility flag per catalog item and exactly one
//! active filter button. Selecting a button recomputes every flag in catalog
//! order; nothing else mutates them.

use crate::domain::gallery::{Category, FilterValue, GalleryItem, ItemId};

/// A filter bar button: the text shown and the value it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub value: FilterValue,
}

impl FilterButton {
    #[must_use]
    pub fn new(label: impl Into<String>, value: FilterValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The catch-all button.
    #[must_use]
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(label, FilterValue::All)
    }

    #[must_use]
    pub fn category(label: impl Into<String>, category: Category) -> Self {
        Self::new(label, FilterValue::Category(category))
    }
}

/// Maps the selected filter onto per-item visibility flags.
#[derive(Debug, Clone)]
pub struct FilterController {
    buttons: Vec<FilterButton>,
    active: usize,
    categories: Vec<Category>,
    visibility: Vec<bool>,
}

impl FilterController {
    /// Creates a controller with the catch-all button active and every item
    /// visible.
    ///
    /// Duplicate button values keep their first occurrence. A catch-all button
    /// is inserted at the front when none is supplied.
    #[must_use]
    pub fn new(buttons: Vec<FilterButton>, items: &[GalleryItem]) -> Self {
        let mut unique: Vec<FilterButton> = Vec::with_capacity(buttons.len() + 1);
        for button in buttons {
            if unique.iter().any(|b| b.value == button.value) {
                tracing::debug!(value = %button.value, "dropping duplicate filter button");
                continue;
            }
            unique.push(button);
        }
        if !unique.iter().any(|b| b.value == FilterValue::All) {
            unique.insert(0, FilterButton::all(FilterValue::All.as_str()));
        }
        let active = unique
            .iter()
            .position(|b| b.value == FilterValue::All)
            .unwrap_or(0);

        Self {
            buttons: unique,
            active,
            categories: items.iter().map(|item| item.category.clone()).collect(),
            visibility: vec![true; items.len()],
        }
    }

    /// Activates the button carrying `value` and recomputes visibility.
    ///
    /// Returns `false` (and changes nothing) when no button carries `value`.
    /// Selecting the already-active value recomputes to the same flags.
    pub fn select_filter(&mut self, value: &FilterValue) -> bool {
        let Some(index) = self.buttons.iter().position(|b| &b.value == value) else {
            tracing::debug!(%value, "ignoring filter value with no matching button");
            return false;
        };
        self.active = index;
        for (flag, category) in self.visibility.iter_mut().zip(&self.categories) {
            *flag = value.matches(category);
        }
        tracing::debug!(
            %value,
            visible = self.visible_count(),
            total = self.visibility.len(),
            "filter selected"
        );
        true
    }

    #[must_use]
    pub fn active_value(&self) -> &FilterValue {
        &self.buttons[self.active].value
    }

    #[must_use]
    pub fn active_button(&self) -> &FilterButton {
        &self.buttons[self.active]
    }

    #[must_use]
    pub fn is_active(&self, value: &FilterValue) -> bool {
        self.active_value() == value
    }

    /// Out-of-range ids are reported as hidden.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.visibility.get(id.index()).copied().unwrap_or(false)
    }

    /// Visible item ids in catalog order.
    pub fn visible_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(index, _)| ItemId::new(index))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|visible| **visible).count()
    }

    #[must_use]
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new("a.jpg", "Alpine Sunset", "nature"),
            GalleryItem::new("b.jpg", "City Lights", "urban"),
            GalleryItem::new("c.jpg", "Forest Light", "nature"),
            GalleryItem::new("d.jpg", "Paris Dreams", "travel"),
            GalleryItem::new("e.jpg", "Natural Light", "portraits"),
        ]
    }

    fn buttons() -> Vec<FilterButton> {
        vec![
            FilterButton::all("All"),
            FilterButton::category("Nature", Category::new("nature")),
            FilterButton::category("Urban", Category::new("urban")),
            FilterButton::category("Travel", Category::new("travel")),
            FilterButton::category("Portraits", Category::new("portraits")),
        ]
    }

    #[test]
    fn starts_with_catch_all_and_everything_visible() {
        let controller = FilterController::new(buttons(), &catalog());
        assert_eq!(controller.active_value(), &FilterValue::All);
        assert_eq!(controller.active_button().label, "All");
        assert_eq!(controller.visible_count(), 5);
    }

    #[test]
    fn visibility_matches_filter_for_every_item_and_value() {
        let items = catalog();
        let mut controller = FilterController::new(buttons(), &items);
        let values: Vec<FilterValue> = buttons().into_iter().map(|b| b.value).collect();

        for value in &values {
            assert!(controller.select_filter(value));
            for (index, item) in items.iter().enumerate() {
                let expected = *value == FilterValue::All || value.matches(&item.category);
                assert_eq!(
                    controller.is_visible(ItemId::new(index)),
                    expected,
                    "item {index} under filter {value}"
                );
            }
        }
    }

    #[test]
    fn exactly_one_button_is_active() {
        let mut controller = FilterController::new(buttons(), &catalog());
        let urban = FilterValue::Category(Category::new("urban"));
        controller.select_filter(&urban);
        let active: Vec<_> = controller
            .buttons()
            .iter()
            .filter(|b| controller.is_active(&b.value))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Urban");
    }

    #[test]
    fn select_filter_is_idempotent() {
        let mut controller = FilterController::new(buttons(), &catalog());
        let nature = FilterValue::Category(Category::new("nature"));
        controller.select_filter(&nature);
        let once: Vec<ItemId> = controller.visible_ids().collect();
        controller.select_filter(&nature);
        assert_eq!(controller.visible_ids().collect::<Vec<_>>(), once);
        assert_eq!(
            controller.visible_ids().collect::<Vec<_>>(),
            vec![ItemId::new(0), ItemId::new(2)]
        );
    }

    #[test]
    fn unknown_value_is_ignored() {
        let mut controller = FilterController::new(buttons(), &catalog());
        let nature = FilterValue::Category(Category::new("nature"));
        controller.select_filter(&nature);

        let landscapes = FilterValue::Category(Category::new("landscapes"));
        assert!(!controller.select_filter(&landscapes));
        assert_eq!(controller.active_value(), &nature);
        assert_eq!(controller.visible_count(), 2);
    }

    #[test]
    fn button_without_matching_items_hides_everything() {
        let mut items = catalog();
        items.retain(|item| item.category.as_str() != "portraits");
        let mut controller = FilterController::new(buttons(), &items);
        controller.select_filter(&FilterValue::Category(Category::new("portraits")));
        assert_eq!(controller.visible_count(), 0);
        assert_eq!(controller.visible_ids().count(), 0);
    }

    #[test]
    fn category_without_button_is_only_reachable_through_all() {
        let mut items = catalog();
        items.push(GalleryItem::new("f.jpg", "Dew", "macro"));
        let mut controller = FilterController::new(buttons(), &items);
        controller.select_filter(&FilterValue::Category(Category::new("nature")));
        assert!(!controller.is_visible(ItemId::new(5)));
        controller.select_filter(&FilterValue::All);
        assert!(controller.is_visible(ItemId::new(5)));
    }

    #[test]
    fn missing_catch_all_is_inserted_first() {
        let controller = FilterController::new(
            vec![FilterButton::category("Nature", Category::new("nature"))],
            &catalog(),
        );
        assert_eq!(controller.buttons()[0].value, FilterValue::All);
        assert_eq!(controller.buttons().len(), 2);
        assert_eq!(controller.active_value(), &FilterValue::All);
    }

    #[test]
    fn duplicate_buttons_keep_first() {
        let mut with_duplicate = buttons();
        with_duplicate.push(FilterButton::category("Nature again", Category::new("nature")));
        let controller = FilterController::new(with_duplicate, &catalog());
        assert_eq!(controller.buttons().len(), 5);
    }

    #[test]
    fn out_of_range_id_is_hidden() {
        let controller = FilterController::new(buttons(), &catalog());
        assert!(!controller.is_visible(ItemId::new(99)));
    }
}
