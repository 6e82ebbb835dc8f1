//! Main application structs and eframe::App implementations

use eframe::egui;
use egui::RichText;

use dar_ingest::CityRegionIndex;
use dar_predict::LinearModel;

use crate::services::StartupResources;
use crate::state::FormState;
use crate::theme::spacing;
use crate::views::{FormView, HelpView, OutcomeView};

/// The single-page estimator application.
///
/// Index and model are loaded once at startup and never mutated; the form
/// state is the only thing that changes between frames.
pub struct EstimatorApp {
    index: CityRegionIndex,
    model: LinearModel,
    form: FormState,
}

impl EstimatorApp {
    pub fn new(resources: StartupResources) -> Self {
        let form = FormState::new(&resources.index);
        Self {
            index: resources.index,
            model: resources.model,
            form,
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(spacing::MD);
                    ui.heading(RichText::new("Property Price Predictor in Tunisia").size(26.0));
                    ui.add_space(spacing::XS);
                    ui.label(
                        RichText::new(
                            "Enter the property details below to predict its price \
                             in Tunisian Dinar (TND).",
                        )
                        .weak(),
                    );
                });
                ui.add_space(spacing::MD);

                let submitted = FormView::show(ui, &mut self.form, &self.index);
                if submitted {
                    self.form.submit(&self.model);
                }

                OutcomeView::show(ui, self.form.outcome.as_ref());
                HelpView::show(ui);
            });
        });
    }
}

/// Fallback application shown when the dataset or model failed to load.
///
/// Renders only the startup error; no form controls exist in this state.
pub struct StartupErrorApp {
    message: String,
}

impl StartupErrorApp {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl eframe::App for StartupErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::XL);
                ui.heading("Property Price Predictor in Tunisia");
                ui.add_space(spacing::LG);
                ui.label(
                    RichText::new(&self.message)
                        .color(ui.visuals().error_fg_color)
                        .strong(),
                );
            });
        });
    }
}
