//! The controller behind the "Add New Event" form.

use crate::{
    catalog::{Catalog, Category, Draft, Event},
    error::{Field, FormError},
};

/// Holds the draft being edited and turns it into a catalog entry on submit.
///
/// There is no guard against submitting twice: two submits of the same values add two events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    draft: Draft,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the contents of one text field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.draft.title = value,
            Field::Date => self.draft.date = value,
            Field::Location => self.draft.location = value,
            Field::Description => self.draft.description = value,
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Set the category from the select's string value. Unknown values leave the draft untouched.
    pub fn select_category(&mut self, value: &str) -> Result<Category, FormError> {
        let category = value.parse::<Category>()?;
        self.set_category(category);
        Ok(category)
    }

    /// The first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Append the draft to `catalog` and reset it to the defaults.
    ///
    /// Nothing is appended, and the draft is kept as is, when a required field is empty.
    pub fn submit(&mut self, catalog: &mut Catalog) -> Result<Event, FormError> {
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }

        Ok(catalog.append(std::mem::take(&mut self.draft)))
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.draft.title,
            Field::Date => &self.draft.date,
            Field::Location => &self.draft.location,
            Field::Description => &self.draft.description,
        }
    }
}
