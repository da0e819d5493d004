//! Catalog loading inside the app
//!
//! The load runs on the IO task pool and is polled once per frame. Entering
//! `AppState::Loading` again (the Retry button) replaces the pending task,
//! which drops the previous attempt.

use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};
use std::sync::Arc;

use super::{CatalogError, CatalogSource, CatalogStatus, DataDragonClient, StaticCatalog, CATALOG_LOAD_FAILED};
use crate::settings::AppSettings;
use crate::states::AppState;

/// Plugin that loads the static catalog at startup
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogStatus>()
            .init_resource::<CatalogLoadTask>()
            .add_systems(OnEnter(AppState::Loading), start_catalog_load)
            .add_systems(
                Update,
                poll_catalog_load.run_if(in_state(AppState::Loading)),
            );
    }
}

/// The in-flight catalog request, if any
#[derive(Resource, Default)]
pub struct CatalogLoadTask(Option<Task<Result<StaticCatalog, CatalogError>>>);

fn start_catalog_load(
    settings: Res<AppSettings>,
    mut status: ResMut<CatalogStatus>,
    mut task: ResMut<CatalogLoadTask>,
) {
    *status = CatalogStatus::Loading;

    let base_url = settings.ddragon_base_url.clone();
    let locale = settings.locale.clone();
    let timeout = settings.request_timeout();
    info!("Starting catalog load from {}", base_url);

    task.0 = Some(IoTaskPool::get().spawn(async move {
        DataDragonClient::new(base_url, locale, timeout)?.load()
    }));
}

fn poll_catalog_load(
    mut task: ResMut<CatalogLoadTask>,
    mut status: ResMut<CatalogStatus>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(pending) = task.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(pending)) else {
        return;
    };
    task.0 = None;

    match result {
        Ok(catalog) => {
            *status = CatalogStatus::Ready(Arc::new(catalog));
            next_state.set(AppState::Draft);
        }
        Err(e) => {
            error!("Catalog load failed: {}", e);
            *status = CatalogStatus::Failed(CATALOG_LOAD_FAILED.to_string());
            next_state.set(AppState::LoadFailed);
        }
    }
}
