use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

/// Which of the four forms is shown as active. Anything that isn't an exact tag is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveForm {
    Create,
    Delete,
    Update,
    Read,
    #[default]
    None,
}

impl ActiveForm {
    /// Exact, case-sensitive match. No trimming.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "create" => Self::Create,
            "delete" => Self::Delete,
            "update" => Self::Update,
            "read" => Self::Read,
            _ => Self::None,
        }
    }

    pub fn tag(self) -> Option<&'static str> {
        self.slot().map(FormSlot::id)
    }

    pub fn slot(self) -> Option<FormSlot> {
        match self {
            Self::Create => Some(FormSlot::Create),
            Self::Delete => Some(FormSlot::Delete),
            Self::Update => Some(FormSlot::Update),
            Self::Read => Some(FormSlot::Read),
            Self::None => None,
        }
    }
}

impl FromStr for ActiveForm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for ActiveForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("none"))
    }
}

/// One of the four form elements on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    Create,
    Delete,
    Update,
    Read,
}

impl FormSlot {
    pub const ALL: [FormSlot; 4] = [Self::Create, Self::Delete, Self::Update, Self::Read];

    pub fn id(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Read => "read",
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Self::Create => "#create",
            Self::Delete => "#delete",
            Self::Update => "#update",
            Self::Read => "#read",
        }
    }

    pub fn inactive_class(self) -> &'static str {
        match self {
            Self::Create => "create-form",
            Self::Delete => "delete-form",
            Self::Update => "update-form",
            Self::Read => "read-form",
        }
    }

    pub fn active_class(self) -> &'static str {
        match self {
            Self::Create => "create-form-active",
            Self::Delete => "delete-form-active",
            Self::Update => "update-form-active",
            Self::Read => "read-form-active",
        }
    }

    pub fn class_for(self, form: ActiveForm) -> &'static str {
        if form.slot() == Some(self) {
            self.active_class()
        } else {
            self.inactive_class()
        }
    }
}

/// The class name of every form slot for a given [`ActiveForm`].
///
/// Serializes as `{"create": .., "delete": .., "update": .., "read": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormClasses {
    create: &'static str,
    delete: &'static str,
    update: &'static str,
    read: &'static str,
}

impl FormClasses {
    pub fn for_form(form: ActiveForm) -> Self {
        Self {
            create: FormSlot::Create.class_for(form),
            delete: FormSlot::Delete.class_for(form),
            update: FormSlot::Update.class_for(form),
            read: FormSlot::Read.class_for(form),
        }
    }

    pub fn for_tag(tag: &str) -> Self {
        Self::for_form(ActiveForm::from_tag(tag))
    }

    pub fn get(&self, slot: FormSlot) -> &'static str {
        match slot {
            FormSlot::Create => self.create,
            FormSlot::Delete => self.delete,
            FormSlot::Update => self.update,
            FormSlot::Read => self.read,
        }
    }

    /// In slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FormSlot, &'static str)> + '_ {
        FormSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn active_slot(&self) -> Option<FormSlot> {
        self.iter()
            .find(|&(slot, class)| class == slot.active_class())
            .map(|(slot, _)| slot)
    }
}
