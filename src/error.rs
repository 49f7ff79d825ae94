use std::fmt;

/// A select value that names no [`Category`](crate::catalog::Category).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event category `{0}`")]
pub struct ParseCategoryError(pub String);

/// A text input of the add-event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Date,
    Location,
    Description,
}

impl Field {
    /// The inputs that must be filled in before an event can be added, in form order.
    pub const REQUIRED: [Field; 3] = [Field::Title, Field::Date, Field::Location];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Location => "location",
            Field::Description => "description",
        })
    }
}

/// Why the add-event form refused to submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormError {
    #[error("the {0} field is required")]
    MissingField(Field),

    #[error(transparent)]
    UnknownCategory(#[from] ParseCategoryError),
}
