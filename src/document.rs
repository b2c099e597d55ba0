use web_sys::{Document, Element};

use crate::{ActiveForm, FormClasses, FormSlot, Result, RouteError};

/// The four form elements, in slot order.
pub struct FormElements([Element; 4]);

impl FormElements {
    /// Looks up every form element. Fails on the first one missing.
    pub fn find(document: &Document) -> Result<Self> {
        let [create, delete, update, read] = FormSlot::ALL;

        Ok(Self([
            find_form_element(document, create)?,
            find_form_element(document, delete)?,
            find_form_element(document, update)?,
            find_form_element(document, read)?,
        ]))
    }

    pub fn get(&self, slot: FormSlot) -> &Element {
        &self.0[slot as usize]
    }

    pub fn apply(&self, classes: &FormClasses) {
        for (slot, class) in classes.iter() {
            self.get(slot).set_class_name(class);
        }
    }
}

pub fn find_form_element(document: &Document, slot: FormSlot) -> Result<Element> {
    document
        .query_selector(slot.selector())?
        .ok_or(RouteError::MissingElement {
            selector: slot.selector(),
        })
}

/// Sets the class of all four forms. Nothing is written unless every element exists.
pub fn apply_route(document: &Document, form: ActiveForm) -> Result<FormClasses> {
    let elements = FormElements::find(document)?;
    let classes = FormClasses::for_form(form);

    elements.apply(&classes);

    log::debug!("Routed forms to {form}");

    Ok(classes)
}
