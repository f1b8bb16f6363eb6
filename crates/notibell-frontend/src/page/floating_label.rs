use super::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLabel {
    pub text: String,
    pub active: bool,
}

/// A form field with a material-style floating label. Either part can be
/// missing from the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialField {
    pub name: String,
    pub input: Option<FieldInput>,
    pub label: Option<FieldLabel>,
}

impl MaterialField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Some(FieldInput::default()),
            label: Some(FieldLabel {
                text: label.into(),
                active: false,
            }),
        }
    }

    /// Floats the label while the input has content or focus. Fields missing
    /// their input or label are left alone.
    pub fn update_label(&mut self) {
        if let (Some(input), Some(label)) = (&self.input, &mut self.label) {
            label.active = input.focused || !input.value.trim().is_empty();
        }
    }
}

/// Input events a field reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    Input(String),
}

/// Initial pass over every field, as done once when the page loads.
pub fn setup(page: &mut Page) {
    for field in &mut page.material_fields {
        field.update_label();
    }
}

/// Applies `event` to the field called `name` and refreshes its label.
/// Returns `false` when no such field has an input.
pub fn handle_field_event(page: &mut Page, name: &str, event: FieldEvent) -> bool {
    let Some(field) = page
        .material_fields
        .iter_mut()
        .find(|field| field.name == name)
    else {
        return false;
    };
    let Some(input) = field.input.as_mut() else {
        return false;
    };

    match event {
        FieldEvent::Focus => input.focused = true,
        FieldEvent::Blur => input.focused = false,
        FieldEvent::Input(value) => input.value = value,
    }
    field.update_label();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_active(page: &Page, name: &str) -> bool {
        page.material_fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.label.as_ref())
            .is_some_and(|label| label.active)
    }

    #[test]
    fn label_follows_focus_and_content() {
        let mut page = Page {
            material_fields: vec![MaterialField::new("dni", "DNI")],
            ..Page::default()
        };
        setup(&mut page);
        assert!(!label_active(&page, "dni"));

        assert!(handle_field_event(&mut page, "dni", FieldEvent::Focus));
        assert!(label_active(&page, "dni"));

        handle_field_event(&mut page, "dni", FieldEvent::Input("   ".to_owned()));
        handle_field_event(&mut page, "dni", FieldEvent::Blur);
        assert!(!label_active(&page, "dni"));

        handle_field_event(&mut page, "dni", FieldEvent::Input("4471".to_owned()));
        assert!(label_active(&page, "dni"));
    }

    #[test]
    fn prefilled_fields_float_on_setup() {
        let mut field = MaterialField::new("email", "Correo");
        field.input.as_mut().unwrap().value = "ana@example.edu".to_owned();
        let mut page = Page {
            material_fields: vec![field],
            ..Page::default()
        };
        setup(&mut page);
        assert!(label_active(&page, "email"));
    }

    #[test]
    fn incomplete_fields_are_skipped() {
        let mut page = Page {
            material_fields: vec![MaterialField {
                name: "bare".to_owned(),
                input: None,
                label: Some(FieldLabel::default()),
            }],
            ..Page::default()
        };
        setup(&mut page);
        assert!(!handle_field_event(&mut page, "bare", FieldEvent::Focus));
        assert!(!handle_field_event(&mut page, "missing", FieldEvent::Focus));
        assert!(!label_active(&page, "bare"));
    }
}
