use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::api::NationsApi;
use crate::config::PaginationSettings;
use crate::store::languages::LanguagesIntent;
use crate::store::management::ManagementInfoIntent;
use crate::store::observer::TracingObserver;
use crate::store::selectors::{
    select_countries_list, select_country_languages, select_country_stats,
    select_country_stats_overview, select_management_info,
};
use crate::store::{
    CountriesListIntent, CountryStatsIntent, ErrorCode, NationsIntent, NationsState,
    OverviewIntent, Store,
};
use crate::ui::render;

use super::Command;

/// Text to print and the error the command ended with, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub rendered: String,
    pub error: Option<ErrorCode>,
}

fn output<V: Serialize>(
    view: &V,
    error: Option<ErrorCode>,
    json: bool,
    render: fn(&V) -> String,
) -> Result<CommandOutput> {
    let rendered = if json {
        serde_json::to_string_pretty(view).context("Failed to serialize view model")?
    } else {
        render(view)
    };
    Ok(CommandOutput { rendered, error })
}

/// Run `command` through a fresh store and render the resulting view model.
pub async fn run_command<A: NationsApi>(
    command: &Command,
    settings: &PaginationSettings,
    api: Arc<A>,
    json: bool,
) -> Result<CommandOutput> {
    let mut state = NationsState::with_settings(settings);
    let intent: NationsIntent = match command {
        Command::Countries(args) => {
            state.countries_list = state.countries_list.with_filters(args.filters());
            CountriesListIntent::PaginationInitialized {
                page: args.paging.page_index(),
                size: args.paging.size.unwrap_or(settings.countries_page_size),
            }
            .into()
        }
        Command::Stats(paging) => CountryStatsIntent::PaginationInitialized {
            page: paging.page_index(),
            size: paging.size.unwrap_or(settings.country_stats_page_size),
        }
        .into(),
        Command::Overview(args) => {
            state.country_stats_overview =
                state.country_stats_overview.with_filters(args.filters());
            OverviewIntent::PaginationInitialized {
                page: args.paging.page_index(),
                size: args.paging.size.unwrap_or(settings.overview_page_size),
            }
            .into()
        }
        Command::Languages { country_id } => LanguagesIntent::LoadRequested {
            country_id: *country_id,
        }
        .into(),
        Command::Regions => ManagementInfoIntent::LoadRegions.into(),
        Command::YearRange => ManagementInfoIntent::LoadYearRange.into(),
    };

    let store = Store::builder(api)
        .initial_state(state)
        .observer(TracingObserver)
        .spawn();
    tracing::debug!(intent = %intent.label(), "Running command");
    store.dispatch(intent)?;
    let state = store.settled().await?;

    match command {
        Command::Countries(_) => {
            let view = select_countries_list(&state);
            output(&view, view.error, json, render::render_countries)
        }
        Command::Stats(_) => {
            let view = select_country_stats(&state);
            output(&view, view.error, json, render::render_country_stats)
        }
        Command::Overview(_) => {
            let view = select_country_stats_overview(&state);
            output(&view, view.list.error, json, render::render_overview)
        }
        Command::Languages { .. } => {
            let view = select_country_languages(&state);
            output(&view, view.error, json, render::render_languages)
        }
        Command::Regions => {
            let view = select_management_info(&state);
            output(&view, view.regions_error, json, render::render_regions)
        }
        Command::YearRange => {
            let view = select_management_info(&state);
            output(&view, view.year_range_error, json, render::render_year_range)
        }
    }
}
