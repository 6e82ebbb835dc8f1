//! Static instructional text and footer.

use egui::{RichText, Ui};

use crate::theme::spacing;

/// Collapsible usage notes plus the page footer
pub struct HelpView;

impl HelpView {
    pub fn show(ui: &mut Ui) {
        ui.add_space(spacing::LG);

        egui::CollapsingHeader::new("Instructions & Notes").show(ui, |ui| {
            ui.label("1. Select the property category, type (rent or sale), city, and region.");
            ui.label("2. Adjust the number of rooms, bathrooms, and size using the sliders and input field.");
            ui.label("3. Click Predict Price to get the estimated price in TND.");
            ui.label(
                "4. Predictions come from a model trained on Tunisian property data. \
                 Keep inputs realistic for accurate results.",
            );
            ui.label(
                "5. For non-residential properties (e.g. Locaux industriels, Offices), \
                 room and bathroom counts can be set to 0.",
            );
        });

        ui.add_space(spacing::LG);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Dar Price Studio · Tunisian property estimates")
                    .weak()
                    .small(),
            );
        });
    }
}
