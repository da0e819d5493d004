//! Draft screen
//!
//! Two roster columns with a search box and five pick lists each, the detail
//! panel on the right, and the predict button with its result underneath.
//! Everything drawn comes from a [`DraftView`]; clicks become intents that
//! are applied after the frame is laid out.

use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};
use bevy_egui::{egui, EguiContexts};

use super::{apply_dark_style, BACKGROUND, ERROR_RED, GOLD, MUTED};
use crate::catalog::CatalogStatus;
use crate::draft::presenter::StatLine;
use crate::draft::view::{RosterView, SlotView};
use crate::draft::{
    DraftIntent, DraftSession, DraftView, Effect, NoticeKind, PanelView, RosterSide, StatTables,
    Submission,
};
use crate::prediction::{ApiClient, Confidence, PredictionError, PredictionService};
use crate::settings::AppSettings;

/// The in-flight prediction request, if any
#[derive(Resource, Default)]
pub struct PredictionTask(Option<Task<Result<f64, PredictionError>>>);

impl PredictionTask {
    fn spawn(&mut self, settings: &AppSettings, submission: Submission) {
        let base_url = settings.api_base_url.clone();
        let timeout = settings.request_timeout();
        self.0 = Some(IoTaskPool::get().spawn(async move {
            ApiClient::new(base_url, timeout)?.predict(&submission)
        }));
    }
}

/// Feed a finished prediction back into the session
pub fn poll_prediction(
    mut task: ResMut<PredictionTask>,
    status: Res<CatalogStatus>,
    mut session: ResMut<DraftSession>,
) {
    let Some(pending) = task.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(pending)) else {
        return;
    };
    task.0 = None;

    if let Some(catalog) = status.catalog() {
        session.update(DraftIntent::PredictionSettled(result), catalog);
    }
}

fn team_color(side: RosterSide) -> egui::Color32 {
    match side {
        RosterSide::Own => egui::Color32::from_rgb(51, 102, 204),
        RosterSide::Enemy => egui::Color32::from_rgb(204, 51, 51),
    }
}

pub fn draft_ui(
    mut contexts: EguiContexts,
    status: Res<CatalogStatus>,
    tables: Res<StatTables>,
    settings: Res<AppSettings>,
    mut session: ResMut<DraftSession>,
    mut prediction: ResMut<PredictionTask>,
) {
    let view = DraftView::build(&status, &session, &tables);
    let mut intents = Vec::new();

    let ctx = contexts.ctx_mut();
    apply_dark_style(ctx);

    egui::SidePanel::right("detail_panel")
        .resizable(false)
        .exact_width(320.0)
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(28, 28, 40))
                .inner_margin(egui::Margin::same(16.0)),
        )
        .show(ctx, |ui| render_detail_panel(ui, &view.panel));

    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(BACKGROUND)
                .inner_margin(egui::Margin {
                    left: 15.0,
                    right: 15.0,
                    top: 20.0,
                    bottom: 20.0,
                }),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("BUILD YOUR DRAFT").size(42.0).color(GOLD));
            });
            ui.add_space(30.0);

            ui.columns(view.rosters.len().max(1), |columns| {
                for (column, roster) in columns.iter_mut().zip(&view.rosters) {
                    render_roster(column, roster, &mut intents);
                }
            });

            ui.add_space(30.0);
            render_footer(ui, &view, &mut intents);
        });

    let Some(catalog) = status.catalog() else {
        return;
    };
    for intent in intents {
        if let Effect::RequestPrediction(submission) = session.update(intent, catalog) {
            prediction.spawn(&settings, submission);
        }
    }
}

fn render_roster(ui: &mut egui::Ui, roster: &RosterView, intents: &mut Vec<DraftIntent>) {
    let color = team_color(roster.side);
    ui.heading(
        egui::RichText::new(roster.side.name().to_uppercase())
            .size(20.0)
            .color(color),
    );
    ui.add_space(10.0);

    let mut search = roster.search.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut search)
            .hint_text("Search champion...")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        intents.push(DraftIntent::ChangeSearch {
            roster: roster.side,
            text: search,
        });
    }
    ui.add_space(12.0);

    for slot in &roster.slots {
        render_slot(ui, roster.side, slot, color, intents);
        ui.add_space(8.0);
    }
}

fn render_slot(
    ui: &mut egui::Ui,
    side: RosterSide,
    slot: &SlotView,
    color: egui::Color32,
    intents: &mut Vec<DraftIntent>,
) {
    let placeholder = format!("Champion {}", slot.index + 1);
    let selected_text = slot
        .selected
        .as_ref()
        .map(|o| o.name.clone())
        .unwrap_or_else(|| placeholder.clone());
    let selected_id = slot.selected.as_ref().map(|o| o.id);

    ui.horizontal(|ui| {
        let marker = if slot.focused { color } else { MUTED };
        ui.label(
            egui::RichText::new(format!("{}", slot.index + 1))
                .size(16.0)
                .color(marker),
        );

        let combo = egui::ComboBox::from_id_salt((side, slot.index))
            .width(ui.available_width() - 10.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(selected_id.is_none(), placeholder.as_str())
                    .clicked()
                {
                    intents.push(DraftIntent::SelectCharacter {
                        roster: side,
                        index: slot.index,
                        champion_id: None,
                    });
                }
                for option in &slot.options {
                    if ui
                        .selectable_label(selected_id == Some(option.id), option.name.as_str())
                        .clicked()
                    {
                        intents.push(DraftIntent::SelectCharacter {
                            roster: side,
                            index: slot.index,
                            champion_id: Some(option.id),
                        });
                    }
                }
            });

        if combo.response.clicked() {
            intents.push(DraftIntent::FocusSlot {
                roster: side,
                index: slot.index,
            });
        }
    });
}

fn render_footer(ui: &mut egui::Ui, view: &DraftView, intents: &mut Vec<DraftIntent>) {
    ui.vertical_centered(|ui| {
        let button_text = if view.submit_enabled {
            "PREDICT"
        } else {
            "PREDICTING..."
        };
        let button = egui::Button::new(
            egui::RichText::new(button_text)
                .size(24.0)
                .color(if view.submit_enabled {
                    egui::Color32::from_rgb(230, 242, 230)
                } else {
                    egui::Color32::from_rgb(102, 102, 102)
                }),
        )
        .min_size(egui::vec2(250.0, 50.0));

        if ui.add_enabled(view.submit_enabled, button).clicked() {
            intents.push(DraftIntent::Submit);
        }
        ui.add_space(6.0);
        if ui.small_button("Reset").clicked() {
            intents.push(DraftIntent::Reset);
        }

        ui.add_space(20.0);

        if let Some(result) = &view.result {
            let color = match result.confidence {
                Confidence::High => egui::Color32::from_rgb(90, 200, 120),
                Confidence::Even => egui::Color32::from_rgb(220, 190, 90),
                Confidence::Low => ERROR_RED,
            };
            ui.label(
                egui::RichText::new(format!("Win probability: {}", result.text))
                    .size(28.0)
                    .color(color),
            );
            ui.label(
                egui::RichText::new(result.confidence.label())
                    .size(16.0)
                    .color(MUTED),
            );
        }

        if let Some(notice) = &view.notice {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&notice.message)
                        .size(16.0)
                        .color(ERROR_RED),
                );
                if notice.kind == NoticeKind::Request && ui.small_button("✕").clicked() {
                    intents.push(DraftIntent::DismissNotice);
                }
            });
        }
    });
}

fn render_detail_panel(ui: &mut egui::Ui, panel: &PanelView) {
    let record = match panel {
        PanelView::NoData => {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("Pick or focus a slot to see champion details")
                    .size(16.0)
                    .color(MUTED),
            );
            return;
        }
        PanelView::Record(record) => record,
    };

    ui.heading(egui::RichText::new(&record.name).size(28.0).color(GOLD));
    ui.label(egui::RichText::new(&record.role_line).size(14.0).color(MUTED));
    ui.hyperlink_to("Portrait", &record.image_ref);

    ui.add_space(16.0);
    ui.separator();
    ui.label(egui::RichText::new("Strong against").size(18.0));
    render_stat_lines(ui, record.counters_or_placeholder());

    ui.add_space(16.0);
    ui.separator();
    ui.label(egui::RichText::new("Best runes").size(18.0));
    render_stat_lines(ui, record.runes_or_placeholder());
}

fn render_stat_lines(ui: &mut egui::Ui, lines: Result<&[StatLine], &'static str>) {
    match lines {
        Ok(lines) => {
            for line in lines {
                ui.horizontal(|ui| {
                    ui.label(&line.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&line.value).color(GOLD));
                    });
                });
            }
        }
        Err(placeholder) => {
            ui.label(egui::RichText::new(placeholder).italics().color(MUTED));
        }
    }
}
