/// A persisted checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned identifier, never reused.
    pub id: i32,
    pub text: String,
    pub is_done: bool,
}

/// DTO for inserting a new item. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub text: String,
    pub is_done: bool,
}

impl NewItem {
    /// Build an insert request; an unspecified flag defaults to `false`.
    pub fn new(text: impl Into<String>, is_done: Option<bool>) -> Self {
        Self {
            text: text.into(),
            is_done: is_done.unwrap_or(false),
        }
    }
}

/// Changes applied by an update: `text` is always overwritten,
/// `is_done` only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    pub text: String,
    pub is_done: Option<bool>,
}

impl ItemChanges {
    pub fn new(text: impl Into<String>, is_done: Option<bool>) -> Self {
        Self {
            text: text.into(),
            is_done,
        }
    }

    /// Apply these changes to an item in place.
    pub fn apply_to(&self, item: &mut Item) {
        item.text.clone_from(&self.text);
        if let Some(is_done) = self.is_done {
            item.is_done = is_done;
        }
    }
}
