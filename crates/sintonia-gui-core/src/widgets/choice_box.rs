//! Combo box over a [`SelectorModel`].

use core::hash::Hash;

use egui::{Response, Ui};

use crate::selector::SelectorModel;

/// Render a drop-list for `model` and apply the clicked selection.
///
/// `label_of` produces the display string per choice; `id_salt` must be
/// unique among combo boxes in the same parent `Ui`.
pub fn choice_box<T: PartialEq>(
    ui: &mut Ui,
    id_salt: impl Hash,
    model: &mut SelectorModel<T>,
    label_of: impl Fn(&T) -> String,
) -> Response {
    let mut clicked = None;
    let combo = egui::ComboBox::from_id_salt(id_salt)
        .selected_text(label_of(model.selected()))
        .show_ui(ui, |ui| {
            for (index, choice) in model.choices().iter().enumerate() {
                if ui
                    .selectable_label(index == model.selected_index(), label_of(choice))
                    .clicked()
                {
                    clicked = Some(index);
                }
            }
        });
    if let Some(index) = clicked {
        model.select_index(index);
    }
    combo.response
}
