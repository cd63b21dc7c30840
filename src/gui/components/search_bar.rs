use egui::RichText;

pub struct SearchBar;

impl SearchBar {
    /// Heading plus search box. Returns true when the text changed this frame.
    pub fn show(ui: &mut egui::Ui, title: &str, hint: &str, search_query: &mut String) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.heading(RichText::new(title).size(22.0).strong());
            ui.add_space(20.0);

            ui.label(RichText::new("🔍").size(16.0));
            let search_edit = egui::TextEdit::singleline(search_query)
                .hint_text(hint)
                .desired_width(250.0);
            changed = ui.add(search_edit).changed();
        });

        changed
    }
}
