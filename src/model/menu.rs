//! Menu domain types
//!
//! Courses are a closed enum rather than raw strings so the
//! course-to-filter and course-to-chip mappings are checked
//! exhaustively at compile time.

use std::fmt;

/// Fixed course category a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Course {
    #[default]
    Starters,
    Main,
    Dessert,
}

impl Course {
    /// All courses, in chip-row display order
    pub fn all() -> [Course; 3] {
        [Course::Starters, Course::Main, Course::Dessert]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Next course in display order, wrapping
    pub fn next(&self) -> Course {
        match self {
            Course::Starters => Course::Main,
            Course::Main => Course::Dessert,
            Course::Dessert => Course::Starters,
        }
    }

    /// Previous course in display order, wrapping
    pub fn prev(&self) -> Course {
        match self {
            Course::Starters => Course::Dessert,
            Course::Main => Course::Starters,
            Course::Dessert => Course::Main,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Course filter restricting which items the Menu screen displays
///
/// `All` means no restriction. Filtering never mutates the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Course(Course),
}

impl CourseFilter {
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Course(c) => *c == course,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Course(c) => c.name(),
        }
    }
}

/// A committed dish on the menu
///
/// Items are append-only: there is no edit or delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique within the session, assigned by the store
    pub id: u64,
    pub name: String,
    /// Price text as entered; no numeric parsing is performed
    pub price: String,
    pub course: Course,
    /// Optional image URL, carried as opaque text
    pub image: Option<String>,
}

/// In-progress dish fields being composed on the AddItem screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub price: String,
    pub course: Course,
    pub image: String,
}

impl Draft {
    /// Reset all fields to their defaults (course back to Starters)
    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    /// Presence check on the required fields
    ///
    /// The course is always present by construction, so only name and
    /// price can be missing.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.price.trim().is_empty() {
            return Err(DraftError::MissingPrice);
        }
        Ok(())
    }
}

/// The only domain failure mode: saving an incomplete draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    MissingPrice,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingName => write!(f, "Dish name is required"),
            DraftError::MissingPrice => write!(f, "Price is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_cycle_is_total() {
        for course in Course::all() {
            assert_eq!(course.next().prev(), course);
            assert_eq!(course.prev().next(), course);
        }
    }

    #[test]
    fn test_course_names() {
        assert_eq!(Course::Starters.name(), "Starters");
        assert_eq!(Course::Main.name(), "Main");
        assert_eq!(Course::Dessert.name(), "Dessert");
        assert_eq!(CourseFilter::All.name(), "All");
        assert_eq!(CourseFilter::Course(Course::Main).name(), "Main");
    }

    #[test]
    fn test_filter_matches() {
        for course in Course::all() {
            assert!(CourseFilter::All.matches(course));
        }
        assert!(CourseFilter::Course(Course::Dessert).matches(Course::Dessert));
        assert!(!CourseFilter::Course(Course::Dessert).matches(Course::Main));
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = Draft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        draft.name = "Soup".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingPrice));

        draft.price = "45".to_string();
        assert_eq!(draft.validate(), Ok(()));

        // Whitespace-only input does not count as present
        draft.price = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingPrice));
    }

    #[test]
    fn test_draft_reset_restores_defaults() {
        let mut draft = Draft {
            name: "Cake".to_string(),
            price: "80".to_string(),
            course: Course::Dessert,
            image: "https://example.com/cake.png".to_string(),
        };
        draft.reset();
        assert_eq!(draft, Draft::default());
        assert_eq!(draft.course, Course::Starters);
    }
}
