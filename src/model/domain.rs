//! Domain state - the menu store, separate from UI concerns
//!
//! `MenuState` is the single writer target for all committed data.
//! Screen components keep only presentation state and go through
//! `add_item` to commit anything.

use super::menu::{CourseFilter, Draft, DraftError, MenuItem};

/// Domain state containing all committed menu data
#[derive(Debug, Default)]
pub struct MenuState {
    /// All menu items, insertion order preserved, append-only
    items: Vec<MenuItem>,

    /// Active course filter for the Menu screen
    pub filter: CourseFilter,

    /// Monotonic id source; ids are unique for the session lifetime
    next_id: u64,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filter: CourseFilter::All,
            next_id: 1,
        }
    }

    /// Validate the draft and append it as a new item
    ///
    /// On success the new item gets a fresh id and a reference to it is
    /// returned. On failure nothing changes.
    pub fn add_item(&mut self, draft: &Draft) -> Result<&MenuItem, DraftError> {
        draft.validate()?;

        let image = draft.image.trim();
        let item = MenuItem {
            id: self.next_id,
            name: draft.name.trim().to_string(),
            price: draft.price.trim().to_string(),
            course: draft.course,
            image: if image.is_empty() {
                None
            } else {
                Some(image.to_string())
            },
        };
        self.next_id += 1;
        let idx = self.items.len();
        self.items.push(item);
        Ok(&self.items[idx])
    }

    pub fn set_filter(&mut self, filter: CourseFilter) {
        self.filter = filter;
    }

    /// All items, unfiltered
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items the Menu screen should display under the active filter,
    /// in insertion order
    pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.course))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::Course;

    fn draft(name: &str, price: &str, course: Course) -> Draft {
        Draft {
            name: name.to_string(),
            price: price.to_string(),
            course,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_item_appends_one() {
        let mut state = MenuState::new();
        let result = state.add_item(&draft("Soup", "45", Course::Starters));
        assert!(result.is_ok());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].name, "Soup");
        assert_eq!(state.items()[0].price, "45");
        assert_eq!(state.items()[0].course, Course::Starters);
        assert_eq!(state.items()[0].image, None);
    }

    #[test]
    fn test_add_item_rejects_incomplete_draft() {
        let mut state = MenuState::new();
        assert_eq!(
            state.add_item(&draft("", "45", Course::Starters)),
            Err(DraftError::MissingName)
        );
        assert_eq!(
            state.add_item(&draft("Soup", "", Course::Starters)),
            Err(DraftError::MissingPrice)
        );
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let mut state = MenuState::new();
        for i in 0..20 {
            state
                .add_item(&draft(&format!("Dish {}", i), "10", Course::Main))
                .unwrap();
        }
        let mut ids: Vec<u64> = state.items().iter().map(|i| i.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_visible_items_all_is_identity() {
        let mut state = MenuState::new();
        state.add_item(&draft("Soup", "45", Course::Starters)).unwrap();
        state.add_item(&draft("Steak", "120", Course::Main)).unwrap();
        state.add_item(&draft("Cake", "60", Course::Dessert)).unwrap();

        state.set_filter(CourseFilter::All);
        let visible: Vec<&MenuItem> = state.visible_items().collect();
        assert_eq!(visible.len(), state.items().len());
        for (visible, item) in visible.iter().zip(state.items()) {
            assert_eq!(*visible, item);
        }
    }

    #[test]
    fn test_visible_items_filters_by_course() {
        let mut state = MenuState::new();
        state.add_item(&draft("Soup", "45", Course::Starters)).unwrap();
        state.add_item(&draft("Steak", "120", Course::Main)).unwrap();
        state.add_item(&draft("Cake", "60", Course::Dessert)).unwrap();

        state.set_filter(CourseFilter::Course(Course::Main));
        let visible: Vec<&MenuItem> = state.visible_items().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Steak");
    }

    #[test]
    fn test_visible_items_preserves_relative_order() {
        let mut state = MenuState::new();
        state.add_item(&draft("Bruschetta", "35", Course::Starters)).unwrap();
        state.add_item(&draft("Steak", "120", Course::Main)).unwrap();
        state.add_item(&draft("Soup", "45", Course::Starters)).unwrap();
        state.add_item(&draft("Olives", "25", Course::Starters)).unwrap();

        state.set_filter(CourseFilter::Course(Course::Starters));
        let names: Vec<&str> = state.visible_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bruschetta", "Soup", "Olives"]);
    }

    #[test]
    fn test_filter_does_not_mutate_items() {
        let mut state = MenuState::new();
        state.add_item(&draft("Soup", "45", Course::Starters)).unwrap();
        state.add_item(&draft("Steak", "120", Course::Main)).unwrap();

        state.set_filter(CourseFilter::Course(Course::Dessert));
        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn test_add_item_trims_and_drops_empty_image() {
        let mut state = MenuState::new();
        let mut d = draft("  Soup  ", " 45 ", Course::Starters);
        d.image = "  ".to_string();
        let item = state.add_item(&d).unwrap();
        assert_eq!(item.name, "Soup");
        assert_eq!(item.price, "45");
        assert_eq!(item.image, None);

        let mut d = draft("Cake", "60", Course::Dessert);
        d.image = "https://example.com/cake.png".to_string();
        let item = state.add_item(&d).unwrap();
        assert_eq!(item.image.as_deref(), Some("https://example.com/cake.png"));
    }
}
