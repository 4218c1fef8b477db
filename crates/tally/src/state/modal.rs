/// Modal types for forms and alerts.

use tally_core::{Field, TargetChoice};

use super::ModalAction;

#[derive(Debug)]
pub enum ModalState {
    None,
    Form(FormModal),
}

#[derive(Debug, Clone)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
}

impl MessageModal {
    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

// ========== FormModal ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    /// Digits, separators and a sign
    Amount,
    /// `YYYY-MM-DD`
    Date,
    /// Cycles through a fixed list of options
    Select,
}

/// One entry of a select field. `target` is `None` for the
/// "nothing chosen yet" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub target: Option<TargetChoice>,
}

#[derive(Debug, Clone)]
pub struct FormField {
    /// Which draft field the value feeds
    pub key: Field,
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    pub cursor_pos: usize,
    pub options: Vec<SelectOption>,
    pub selected: usize,
    pub visible: bool,
}

impl FormField {
    pub fn new(key: Field, label: &str, field_type: FieldType, value: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
            field_type,
            value: value.to_string(),
            cursor_pos: value.chars().count(),
            options: Vec::new(),
            selected: 0,
            visible: true,
        }
    }

    pub fn text(key: Field, label: &str) -> Self {
        Self::new(key, label, FieldType::Text, "")
    }

    pub fn amount(key: Field, label: &str) -> Self {
        Self::new(key, label, FieldType::Amount, "")
    }

    pub fn date(key: Field, label: &str, value: &str) -> Self {
        Self::new(key, label, FieldType::Date, value)
    }

    pub fn select(key: Field, label: &str, options: Vec<SelectOption>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        let mut field = Self::new(key, label, FieldType::Select, "");
        field.options = options;
        field.selected = selected;
        field.value = field.selected_label().to_string();
        field
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    pub fn selected_label(&self) -> &str {
        self.selected_option().map_or("", |option| option.label.as_str())
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
            self.value = self.selected_label().to_string();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
            self.value = self.selected_label().to_string();
        }
    }

    /// Byte offset of the cursor, which counts characters
    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_pos(self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_pos(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_pos(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Whether a typed character belongs in this field
    pub fn accepts(&self, c: char) -> bool {
        match self.field_type {
            FieldType::Text => true,
            FieldType::Amount => c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+'),
            FieldType::Date => c.is_ascii_digit() || c == '-',
            FieldType::Select => false,
        }
    }
}

#[derive(Debug)]
pub struct FormModal {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused_field: usize,
    pub editing: bool,
    pub action: ModalAction,
}

impl FormModal {
    pub fn new(title: &str, fields: Vec<FormField>, action: ModalAction) -> Self {
        let mut form = Self {
            title: title.to_string(),
            fields,
            focused_field: 0,
            editing: false,
            action,
        };
        form.sync_visibility();
        form
    }

    pub fn field(&self, key: Field) -> Option<&FormField> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Current text of a field; empty for fields the form doesn't have
    pub fn value(&self, key: Field) -> &str {
        self.field(key).map_or("", |field| field.value.as_str())
    }

    /// The option chosen in a select field, if any
    pub fn target(&self, key: Field) -> Option<TargetChoice> {
        self.field(key)
            .and_then(FormField::selected_option)
            .and_then(|option| option.target)
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focused_field)
    }

    pub fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused_field)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = (usize, &FormField)> {
        self.fields.iter().enumerate().filter(|(_, field)| field.visible)
    }

    /// The name field only applies when the target is a new position.
    pub fn sync_visibility(&mut self) {
        let creating = match self.field(Field::Target) {
            Some(_) => self.target(Field::Target) == Some(TargetChoice::New),
            None => true,
        };
        if let Some(name) = self.fields.iter_mut().find(|f| f.key == Field::Name) {
            name.visible = creating;
        }
        if !self.fields.get(self.focused_field).is_some_and(|f| f.visible) {
            self.focus_next();
        }
    }

    /// Move focus to the next visible field, wrapping around
    pub fn focus_next(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focused_field + step) % len;
            if self.fields[idx].visible {
                self.focused_field = idx;
                return;
            }
        }
    }

    /// Move focus to the previous visible field, wrapping around
    pub fn focus_prev(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focused_field + len * 2 - step) % len;
            if self.fields[idx].visible {
                self.focused_field = idx;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::InvestmentId;

    fn target_options() -> Vec<SelectOption> {
        vec![
            SelectOption {
                label: "+ New".to_string(),
                target: Some(TargetChoice::New),
            },
            SelectOption {
                label: "Fund A".to_string(),
                target: Some(TargetChoice::Existing(InvestmentId(7))),
            },
        ]
    }

    fn investment_form() -> FormModal {
        FormModal::new(
            "Add Investment",
            vec![
                FormField::select(Field::Target, "Investment", target_options(), 0),
                FormField::text(Field::Name, "Name"),
                FormField::amount(Field::Amount, "Amount"),
            ],
            ModalAction::AddInvestment,
        )
    }

    #[test]
    fn test_name_hidden_for_existing_target() {
        let mut form = investment_form();
        assert!(form.field(Field::Name).unwrap().visible);

        form.fields[0].select_next();
        form.sync_visibility();

        assert!(!form.field(Field::Name).unwrap().visible);
        assert_eq!(
            form.target(Field::Target),
            Some(TargetChoice::Existing(InvestmentId(7)))
        );
        assert_eq!(form.value(Field::Target), "Fund A");
    }

    #[test]
    fn test_focus_skips_hidden_fields() {
        let mut form = investment_form();
        form.fields[0].select_next();
        form.sync_visibility();

        form.focus_next();
        assert_eq!(form.focused().unwrap().key, Field::Amount);
        form.focus_next();
        assert_eq!(form.focused().unwrap().key, Field::Target);
        form.focus_prev();
        assert_eq!(form.focused().unwrap().key, Field::Amount);
    }

    #[test]
    fn test_focus_leaves_field_that_gets_hidden() {
        let mut form = investment_form();
        form.focused_field = 1;
        form.fields[0].select_next();
        form.sync_visibility();

        assert_eq!(form.focused().unwrap().key, Field::Amount);
    }

    #[test]
    fn test_select_wraps() {
        let mut field = FormField::select(Field::Target, "Investment", target_options(), 0);
        field.select_prev();
        assert_eq!(field.selected, 1);
        field.select_next();
        assert_eq!(field.selected, 0);
        assert_eq!(field.value, "+ New");
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut field = FormField::text(Field::Name, "Name");
        for c in "¥ fund".chars() {
            field.insert_char(c);
        }
        field.move_cursor_home();
        field.delete();
        assert_eq!(field.value, " fund");

        field.move_cursor_end();
        field.backspace();
        assert_eq!(field.value, " fun");
        assert_eq!(field.cursor_pos, 4);
    }

    #[test]
    fn test_amount_field_filters_characters() {
        let field = FormField::amount(Field::Amount, "Amount");
        assert!(field.accepts('7'));
        assert!(field.accepts('-'));
        assert!(!field.accepts('x'));
    }
}
