//! The in-memory event catalog.
//!
//! The catalog is an ordered list of [`Event`]s. Records are only ever appended; insertion order is
//! the display order, and filtering returns a subsequence of that order.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::error::ParseCategoryError;

/// The kind of gathering an event is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Religious,
    Social,
    Charity,
}

impl Category {
    /// Every category, in the order the form's select lists them.
    pub const ALL: [Category; 3] = [Category::Religious, Category::Social, Category::Charity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Religious => "Religious",
            Category::Social => "Social",
            Category::Charity => "Charity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Which slice of the catalog the events list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// The filter buttons, left to right.
    pub const OPTIONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Religious),
        Filter::Only(Category::Social),
        Filter::Only(Category::Charity),
    ];

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => event.category == *category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(category) => category.fmt(f),
        }
    }
}

/// A single entry in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// ISO `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub location: String,
    pub category: Category,
    pub description: String,
}

impl Event {
    /// The date as `M/D/YYYY`, or the raw string if it isn't an ISO date.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%-m/%-d/%Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// An event that has not been added to the catalog yet.
///
/// This is the shape the add-event form edits. It becomes an [`Event`] once the catalog assigns it
/// an id in [`Catalog::append`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub date: String,
    pub location: String,
    pub category: Category,
    pub description: String,
}

/// The ordered collection of events shown on the events page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the events page starts with.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (title, date, location, category, description) in [
            (
                "Interfaith Dialogue",
                "2025-04-15",
                "Community Center",
                Category::Religious,
                "A discussion on common values across different faith traditions.",
            ),
            (
                "Community Cleanup",
                "2025-04-22",
                "City Park",
                Category::Charity,
                "Join us to clean our local park and make a difference.",
            ),
            (
                "Monthly Social Mixer",
                "2025-05-01",
                "The Grand Hall",
                Category::Social,
                "Meet new friends and connect with your community.",
            ),
        ] {
            catalog.append(Draft {
                title: title.to_string(),
                date: date.to_string(),
                location: location.to_string(),
                category,
                description: description.to_string(),
            });
        }
        catalog
    }

    /// The id the next appended event will receive: one past the largest id, or 1 when empty.
    pub fn next_id(&self) -> u32 {
        self.events
            .iter()
            .map(|event| event.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Store `draft` at the end of the catalog under a fresh id and return the stored record.
    pub fn append(&mut self, draft: Draft) -> Event {
        let Draft {
            title,
            date,
            location,
            category,
            description,
        } = draft;

        let event = Event {
            id: self.next_id(),
            title,
            date,
            location,
            category,
            description,
        };
        self.events.push(event.clone());
        event
    }

    /// The events that pass `filter`, in insertion order.
    pub fn filter(&self, filter: Filter) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |event| filter.matches(event))
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
