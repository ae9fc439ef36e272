//! Two-caption toggle button.

use egui::{Align2, FontId, Response, Sense, StrokeKind, Ui, Widget, vec2};

use crate::toggles::ToggleSpec;

/// A toggle button that swaps its caption with its state.
///
/// `selected` follows the legacy convention (selected means
/// bypassed/reversed/muted); control groups convert through
/// [`BypassState`](crate::BypassState) or [`Polarity`](crate::Polarity) so
/// the inversion never leaks past the widget boundary.
pub struct LabeledToggle<'a> {
    selected: &'a mut bool,
    spec: &'a ToggleSpec,
    min_width: f32,
}

impl<'a> LabeledToggle<'a> {
    /// Create a toggle over the given selected flag and caption spec.
    pub fn new(selected: &'a mut bool, spec: &'a ToggleSpec) -> Self {
        Self {
            selected,
            spec,
            min_width: 100.0,
        }
    }

    /// Set the minimum button width. Widths that force insets around the
    /// caption read better in grid layouts.
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

impl Widget for LabeledToggle<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let caption = self.spec.caption(*self.selected);
        let font = FontId::proportional(12.0);
        let caption_width = ui.fonts(|f| {
            caption
                .chars()
                .map(|c| f.glyph_width(&font, c))
                .sum::<f32>()
        });
        let size = vec2((caption_width + 16.0).max(self.min_width), 24.0);

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());
        if response.clicked() {
            *self.selected = !*self.selected;
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let fill = if *self.selected {
                visuals.selection.bg_fill
            } else {
                visuals.widgets.inactive.bg_fill
            };
            let stroke = if response.hovered() {
                visuals.widgets.hovered.bg_stroke
            } else {
                visuals.widgets.inactive.bg_stroke
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, fill);
            painter.rect_stroke(rect, 4.0, stroke, StrokeKind::Inside);
            // Re-read the caption: a click this frame already flipped the state.
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.spec.caption(*self.selected),
                font,
                ui.visuals().text_color(),
            );
        }

        response.on_hover_text(self.spec.tooltip.as_str())
    }
}
