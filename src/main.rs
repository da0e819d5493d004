//! draftsight - Champion Draft Builder
//!
//! Build your team and the enemy team, compare champions, and ask the
//! prediction service how likely the draft is to win.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use std::process::ExitCode;

use draftsight::catalog::CatalogPlugin;
use draftsight::cli::{parse_args, Args};
use draftsight::draft::SubmissionPolicy;
use draftsight::headless::{run_headless_draft, run_stats_listing, HeadlessDraftConfig};
use draftsight::settings::AppSettings;
use draftsight::states::{AppState, StatesPlugin};

fn main() -> ExitCode {
    let args = parse_args();

    if args.headless.is_some() || args.stats {
        // Console modes still log through bevy's subscriber
        App::new().add_plugins(LogPlugin::default());
        return run_console(args);
    }

    let mut settings = AppSettings::load();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    if args.lenient {
        settings.submission_policy = SubmissionPolicy::LENIENT;
    }
    let (width, height) = settings.resolution.dimensions();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "draftsight".to_string(),
                resolution: (width, height).into(),
                mode: settings.window_mode.to_bevy(),
                present_mode: settings.present_mode(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins(EguiPlugin)
        .init_state::<AppState>()
        .add_plugins((CatalogPlugin, StatesPlugin))
        .run();

    ExitCode::SUCCESS
}

fn run_console(args: Args) -> ExitCode {
    let settings = AppSettings::load();

    let result = match args.headless {
        Some(path) => HeadlessDraftConfig::load_from_file(&path).and_then(|mut config| {
            if args.lenient {
                config.lenient = true;
            }
            if args.api_url.is_some() {
                config.api_base_url = args.api_url;
            }
            if let Some(output) = args.output {
                config.output_path = Some(output.to_string_lossy().into_owned());
            }
            run_headless_draft(config, &settings).map(|_| ())
        }),
        None => run_stats_listing(&settings, args.api_url),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
