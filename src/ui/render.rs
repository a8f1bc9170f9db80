//! Plain-text rendering of view models for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::store::selectors::{
    CountriesListViewModel, CountryLanguagesViewModel, CountryStatsOverviewViewModel,
    CountryStatsViewModel, ManagementInfoViewModel, PaginatedListViewModel,
};
use crate::store::ErrorCode;
use crate::ui::pagination::{with_global_index, PageNav, PaginationConfig};

const TABLE_WIDTH: u16 = 120;

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH)
        .set_header(header.to_vec());
    table
}

pub fn render_error(code: ErrorCode) -> String {
    format!("Error: {} ({})", code.describe(), code.translation_key())
}

/// One-line page widget, e.g. `« ‹ 1 … 4 [5] 6 … 20 › »  items 21-25 of 100`.
pub fn render_pagination(config: &PaginationConfig) -> String {
    if config.total_elements == 0 {
        return "No items".to_string();
    }

    let window = config.window();
    let mut parts: Vec<String> = Vec::new();
    if config.show_first_last {
        parts.push("«".into());
    }
    if config.show_prev_next {
        parts.push("‹".into());
    }
    if window.show_start_ellipsis {
        parts.push("1".into());
        parts.push("…".into());
    }
    for page in &window.pages {
        if *page == config.current_page {
            parts.push(format!("[{}]", page + 1));
        } else {
            parts.push((page + 1).to_string());
        }
    }
    if window.show_end_ellipsis {
        parts.push("…".into());
        parts.push(config.total_pages.to_string());
    }
    if config.show_prev_next {
        parts.push("›".into());
    }
    if config.show_first_last {
        parts.push("»".into());
    }

    format!(
        "{}  items {}-{} of {}",
        parts.join(" "),
        window.start_item,
        window.end_item,
        config.total_elements
    )
}

/// `--page` flags reaching the neighbouring pages, or `None` when there is
/// nowhere to go.
pub fn render_navigation(config: &PaginationConfig) -> Option<String> {
    let hints: Vec<String> = [
        ("first", PageNav::First),
        ("prev", PageNav::Previous),
        ("next", PageNav::Next),
        ("last", PageNav::Last),
    ]
    .into_iter()
    .filter_map(|(label, nav)| {
        config
            .navigate(nav)
            .map(|page| format!("{}: --page {}", label, page + 1))
    })
    .collect();
    (!hints.is_empty()).then(|| hints.join("  "))
}

fn render_list<T>(
    view: &PaginatedListViewModel<T>,
    empty: &str,
    header: &[&str],
    row: impl Fn(&T) -> Vec<String>,
) -> String {
    if let Some(code) = view.error {
        return render_error(code);
    }
    if view.loading {
        return "Loading…".to_string();
    }
    if !view.has_items {
        return empty.to_string();
    }

    let mut columns = vec!["#"];
    columns.extend_from_slice(header);
    let mut table = table(&columns);
    for indexed in with_global_index(&view.items, &view.pagination_config) {
        let mut cells = vec![indexed.global_index.to_string()];
        cells.extend(row(indexed.item));
        table.add_row(cells);
    }
    let mut rendered = format!("{}\n{}", table, render_pagination(&view.pagination_config));
    if let Some(hints) = render_navigation(&view.pagination_config) {
        rendered.push('\n');
        rendered.push_str(&hints);
    }
    rendered
}

pub fn render_countries(view: &CountriesListViewModel) -> String {
    render_list(
        view,
        "No countries found.",
        &["Name", "Code", "Area (km²)"],
        |country| {
            vec![
                country.name.clone(),
                country.country_code2.clone(),
                format!("{:.0}", country.area),
            ]
        },
    )
}

pub fn render_country_stats(view: &CountryStatsViewModel) -> String {
    render_list(
        view,
        "No statistics found.",
        &["Country", "Code", "Year", "Population", "GDP", "GDP per capita"],
        |stats| {
            vec![
                stats.country_name.clone(),
                stats.country_code2.clone(),
                stats.year.to_string(),
                stats.population.to_string(),
                format!("{:.0}", stats.gdp),
                format!("{:.2}", stats.gdp_per_population),
            ]
        },
    )
}

pub fn render_overview(view: &CountryStatsOverviewViewModel) -> String {
    let body = render_list(
        &view.list,
        "No statistics found.",
        &["Continent", "Region", "Country", "Year", "Population", "GDP"],
        |row| {
            vec![
                row.continent_name.clone(),
                row.region_name.clone(),
                row.country_name.clone(),
                row.year.to_string(),
                row.population.to_string(),
                format!("{:.0}", row.gdp),
            ]
        },
    );
    match (&view.sort_by, view.direction) {
        (Some(sort_by), direction) if view.list.has_items => format!(
            "{}\nsorted by {} {}",
            body,
            sort_by,
            direction.map_or("", |d| d.as_str())
        )
        .trim_end()
        .to_string(),
        _ => body,
    }
}

pub fn render_languages(view: &CountryLanguagesViewModel) -> String {
    if let Some(code) = view.error {
        return render_error(code);
    }
    if view.loading {
        return "Loading…".to_string();
    }
    if !view.has_languages {
        return "No languages found.".to_string();
    }

    let mut table = table(&["Language", "Country", "Official"]);
    for language in &view.languages {
        table.add_row(vec![
            language.language_name.clone(),
            format!("{} ({})", language.country_name, language.country_code3),
            if language.official { "yes" } else { "no" }.to_string(),
        ]);
    }
    format!("{}\n{} language(s)", table, view.language_count)
}

pub fn render_regions(view: &ManagementInfoViewModel) -> String {
    if let Some(code) = view.regions_error {
        return render_error(code);
    }
    if view.regions.is_empty() {
        return "No regions found.".to_string();
    }

    let mut table = table(&["Id", "Region"]);
    for region in &view.regions {
        table.add_row(vec![region.id.to_string(), region.name.clone()]);
    }
    table.to_string()
}

pub fn render_year_range(view: &ManagementInfoViewModel) -> String {
    if let Some(code) = view.year_range_error {
        return render_error(code);
    }
    match view.year_range {
        Some(range) => format!("{} - {}", range.min_year, range.max_year),
        None => "No year range available.".to_string(),
    }
}
