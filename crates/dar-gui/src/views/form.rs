//! The property details form.
//!
//! Six inputs in two columns plus the submit button. Nothing is processed
//! while fields change; the caller reacts to the returned submit flag.

use egui::{RichText, Ui};

use dar_ingest::CityRegionIndex;
use dar_model::{ListingType, PropertyCategory};

use crate::state::FormState;
use crate::theme::spacing;

const COMBO_WIDTH: f32 = 220.0;

/// The submit-gated input form
pub struct FormView;

impl FormView {
    /// Render the form.
    ///
    /// Returns true when the user pressed "Predict Price" this frame.
    pub fn show(ui: &mut Ui, state: &mut FormState, index: &CityRegionIndex) -> bool {
        let mut submitted = false;

        ui.group(|ui| {
            ui.label(RichText::new("Property Details").strong().size(16.0));
            ui.add_space(spacing::SM);

            ui.columns(2, |columns| {
                Self::show_selectors(&mut columns[0], state, index);
                Self::show_measures(&mut columns[1], state);
            });

            ui.add_space(spacing::MD);
            submitted = ui
                .button(RichText::new("Predict Price").size(16.0))
                .clicked();
        });

        submitted
    }

    /// Left column: category, type, city and the cascading region.
    fn show_selectors(ui: &mut Ui, state: &mut FormState, index: &CityRegionIndex) {
        ui.label("Category");
        egui::ComboBox::from_id_salt("category")
            .width(COMBO_WIDTH)
            .selected_text(state.category.as_str())
            .show_ui(ui, |ui| {
                for category in PropertyCategory::all() {
                    ui.selectable_value(&mut state.category, *category, category.as_str());
                }
            })
            .response
            .on_hover_text("Select the type of property.");
        ui.add_space(spacing::XS);

        ui.label("Type");
        egui::ComboBox::from_id_salt("listing_type")
            .width(COMBO_WIDTH)
            .selected_text(state.listing_type.as_str())
            .show_ui(ui, |ui| {
                for listing_type in ListingType::all() {
                    ui.selectable_value(
                        &mut state.listing_type,
                        *listing_type,
                        listing_type.as_str(),
                    );
                }
            })
            .response
            .on_hover_text("Choose whether the property is for rent or sale.");
        ui.add_space(spacing::XS);

        ui.label("City");
        let mut selected_city = state.city.clone();
        egui::ComboBox::from_id_salt("city")
            .width(COMBO_WIDTH)
            .selected_text(selected_city.clone())
            .show_ui(ui, |ui| {
                for city in index.cities() {
                    ui.selectable_value(&mut selected_city, city.clone(), city);
                }
            })
            .response
            .on_hover_text("Select the city where the property is located.");
        // Cascade: a city change repopulates the region options.
        state.select_city(&selected_city, index);
        ui.add_space(spacing::XS);

        ui.label("Region");
        egui::ComboBox::from_id_salt("region")
            .width(COMBO_WIDTH)
            .selected_text(state.region.clone())
            .show_ui(ui, |ui| {
                if let Some(regions) = index.regions(&state.city) {
                    for region in regions {
                        ui.selectable_value(&mut state.region, region.clone(), region);
                    }
                }
            })
            .response
            .on_hover_text("Select the region within the chosen city.");
    }

    /// Right column: room/bathroom sliders and the size input.
    fn show_measures(ui: &mut Ui, state: &mut FormState) {
        ui.label("Number of Rooms");
        ui.add(egui::Slider::new(&mut state.room_count, 0..=10))
            .on_hover_text("Number of rooms in the property (0 for non-residential).");
        ui.add_space(spacing::XS);

        ui.label("Number of Bathrooms");
        ui.add(egui::Slider::new(&mut state.bathroom_count, 0..=5))
            .on_hover_text("Number of bathrooms in the property (0 for non-residential).");
        ui.add_space(spacing::XS);

        ui.label("Size (m²)");
        ui.add(
            egui::DragValue::new(&mut state.size)
                .range(20.0..=1000.0)
                .speed(5.0)
                .suffix(" m²"),
        )
        .on_hover_text("Enter the property size in square meters.");
    }
}
