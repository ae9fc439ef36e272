//! Commit-on-focus-loss numeric entry field.

use egui::{Key, Response, TextEdit, Ui};
use sintonia_params::ParameterEditor;

/// Text field bound to a [`ParameterEditor`].
///
/// The field owns the in-progress edit buffer; the editor owns the
/// committed value. Text is committed when the field loses focus (Enter
/// included — egui surrenders focus on Enter in a single-line edit).
/// A rejected commit reverts the display to the editor's previous valid
/// value and tints the text until the next successful commit. Arrow keys
/// step by the editor's range increment; Escape abandons the edit.
pub struct NumericField {
    buffer: String,
    error: bool,
    width: f32,
}

impl NumericField {
    /// Create a field showing the editor's current display text.
    pub fn new(editor: &ParameterEditor) -> Self {
        Self {
            buffer: editor.display_text(),
            error: false,
            width: 80.0,
        }
    }

    /// Set the field width in points. Editable filter values sit in dense
    /// grids, so the default stays small.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Refresh the buffer after a programmatic value change.
    pub fn sync(&mut self, editor: &ParameterEditor) {
        self.buffer = editor.display_text();
        self.error = false;
    }

    /// Whether the last commit attempt was rejected.
    #[inline]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Render the field and drive the editor.
    pub fn show(&mut self, ui: &mut Ui, editor: &mut ParameterEditor) -> Response {
        let mut edit = TextEdit::singleline(&mut self.buffer).desired_width(self.width);
        if self.error {
            edit = edit.text_color(ui.visuals().error_fg_color);
        }
        let response = ui.add(edit);

        if response.has_focus() {
            if ui.input(|i| i.key_pressed(Key::ArrowUp)) {
                editor.increment();
                self.sync(editor);
            } else if ui.input(|i| i.key_pressed(Key::ArrowDown)) {
                editor.decrement();
                self.sync(editor);
            } else if ui.input(|i| i.key_pressed(Key::Escape)) {
                self.sync(editor);
            }
        }

        if response.lost_focus() {
            self.error = editor.set_text(&self.buffer).is_err();
            // Success or failure, the field shows the editor's valid value.
            self.buffer = editor.display_text();
        }

        response
    }
}
