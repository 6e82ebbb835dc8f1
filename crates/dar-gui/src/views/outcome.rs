//! Submission outcome panel.

use egui::{RichText, Ui};

use dar_model::PriceEstimate;
use dar_predict::EstimateError;

use crate::theme::{colors, spacing};

/// Shows the result of the last submission, if any
pub struct OutcomeView;

impl OutcomeView {
    pub fn show(ui: &mut Ui, outcome: Option<&Result<PriceEstimate, EstimateError>>) {
        let Some(outcome) = outcome else {
            return;
        };

        ui.add_space(spacing::MD);
        match outcome {
            Ok(estimate) => Self::show_estimate(ui, estimate),
            Err(error) => {
                ui.label(
                    RichText::new(error.to_string())
                        .color(ui.visuals().error_fg_color)
                        .strong(),
                );
            }
        }
    }

    fn show_estimate(ui: &mut Ui, estimate: &PriceEstimate) {
        ui.group(|ui| {
            ui.label(
                RichText::new(format!("Predicted Price: {}", estimate.formatted_price()))
                    .color(colors::SUCCESS)
                    .strong()
                    .size(18.0),
            );
            ui.label(RichText::new(estimate.context.label()).weak());

            // Advisory only: the estimate above is still valid output.
            if let Some(warning) = estimate.warning {
                ui.add_space(spacing::XS);
                ui.label(RichText::new(warning.message()).color(ui.visuals().warn_fg_color));
            }
        });
    }
}
