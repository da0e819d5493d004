//! App state management
//!
//! Loading → Draft on a successful catalog load, Loading → LoadFailed
//! otherwise. LoadFailed only leaves through the user's Retry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub mod draft_ui;

use crate::catalog::CatalogStatus;
use crate::draft::{DraftSession, StatTables};
use crate::settings::AppSettings;
use draft_ui::{draft_ui, poll_prediction, PredictionTask};

/// The screens of the app
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Catalog request in flight
    #[default]
    Loading,
    /// Catalog could not be loaded; only the error message is shown
    LoadFailed,
    /// Roster selection form
    Draft,
}

/// Plugin for the app screens and draft state
pub struct StatesPlugin;

impl Plugin for StatesPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<AppSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(DraftSession::new(
            settings.submission_policy,
            settings.confidence_threshold,
        ))
        .insert_resource(StatTables::load_from_dir(&settings.stats_dir))
        .init_resource::<PredictionTask>()
        .add_systems(Update, loading_ui.run_if(in_state(AppState::Loading)))
        .add_systems(Update, load_failed_ui.run_if(in_state(AppState::LoadFailed)))
        .add_systems(
            Update,
            (poll_prediction, draft_ui)
                .chain()
                .run_if(in_state(AppState::Draft)),
        );
    }
}

/// Background colour shared by every screen
pub(crate) const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(20, 20, 30);
/// Title colour
pub(crate) const GOLD: egui::Color32 = egui::Color32::from_rgb(230, 204, 153);
pub(crate) const MUTED: egui::Color32 = egui::Color32::from_rgb(153, 140, 128);
pub(crate) const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

pub(crate) fn apply_dark_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_fill = BACKGROUND;
    style.visuals.panel_fill = BACKGROUND;
    ctx.set_style(style);
}

// ============================================================================
// Loading (egui)
// ============================================================================

fn loading_ui(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    apply_dark_style(ctx);

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(200.0);
                ui.heading(egui::RichText::new("DRAFTSIGHT").size(64.0).color(GOLD));
                ui.add_space(30.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Loading champions...")
                        .size(18.0)
                        .color(MUTED),
                );
            });
        });
}

// ============================================================================
// Load failed (egui)
// ============================================================================

fn load_failed_ui(
    mut contexts: EguiContexts,
    status: Res<CatalogStatus>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let ctx = contexts.ctx_mut();
    apply_dark_style(ctx);

    let message = match status.as_ref() {
        CatalogStatus::Failed(message) => message.as_str(),
        _ => crate::catalog::CATALOG_LOAD_FAILED,
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(200.0);
                ui.heading(egui::RichText::new("DRAFTSIGHT").size(64.0).color(GOLD));
                ui.add_space(30.0);
                ui.label(egui::RichText::new(message).size(18.0).color(ERROR_RED));
                ui.add_space(20.0);
                if ui
                    .add_sized(
                        egui::vec2(200.0, 40.0),
                        egui::Button::new(egui::RichText::new("RETRY").size(20.0)),
                    )
                    .clicked()
                {
                    info!("Retrying catalog load");
                    next_state.set(AppState::Loading);
                }
            });
        });
}
