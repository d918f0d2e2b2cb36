//! Search, suggest, filter, map, and city commands.

use medpoint_core::Category;
use medpoint_directory::{
    by_city, facility_card, filter_options, map_view, normalize_reveal, reveal, suggestions,
    FacilityFilter, FilterOption, ALL_SENTINEL,
};

use crate::render;
use crate::DirectoryContext;

pub(crate) fn run_search(
    ctx: &DirectoryContext,
    query: &str,
    kind: Option<&str>,
    speciality: Option<&str>,
    city: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let filter = FacilityFilter {
        kind,
        speciality,
        city,
    };
    let selection = ctx.directory.select(ctx.language, query, &filter);
    let revealed = normalize_reveal(limit, ctx.config.page_size);
    let page = reveal(selection, revealed, ctx.config.page_size);

    println!(
        "{}",
        ctx.catalog.translate(
            ctx.language,
            "resultsCount",
            &[("count", &page.total.to_string())],
        )
    );
    if filter.is_active() {
        let dims: Vec<String> = filter
            .active_dimensions()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        println!("filters: {}", dims.join(" "));
    }

    if page.items.is_empty() {
        println!("{}", ctx.catalog.translate(ctx.language, "noResults", &[]));
        return Ok(());
    }

    println!();
    println!(
        "{:<26} {:<24} {:<18} {:<14} {}",
        "ID", "NAME", "SPECIALITY", "CITY", "PHONE"
    );
    println!("{}", "-".repeat(100));
    for facility in &page.items {
        let card = facility_card(facility, &ctx.catalog, ctx.language, &ctx.config.contact_phone);
        println!(
            "{:<26} {:<24} {:<18} {:<14} {}",
            render::truncate(&card.id, 24),
            render::truncate(&card.display_name, 22),
            render::truncate(&card.speciality_label, 16),
            render::truncate(&card.city_label, 12),
            render::or_dash(card.phone.as_deref()),
        );
    }

    if let Some(next) = page.next_limit {
        println!();
        println!(
            "{} (--limit {next})",
            ctx.catalog.translate(ctx.language, "loadMore", &[])
        );
    }

    Ok(())
}

pub(crate) fn run_suggest(ctx: &DirectoryContext, query: &str) -> anyhow::Result<()> {
    let entries = suggestions(
        ctx.directory.facilities(),
        &ctx.catalog,
        ctx.language,
        query,
    );
    if entries.is_empty() {
        println!("{}", ctx.catalog.translate(ctx.language, "noResults", &[]));
        return Ok(());
    }
    for entry in entries {
        println!("{entry}");
    }
    Ok(())
}

pub(crate) fn run_filters(ctx: &DirectoryContext) -> anyhow::Result<()> {
    let options = filter_options(ctx.directory.facilities(), &ctx.catalog, ctx.language);
    let all_label = ctx.catalog.translate(ctx.language, "all", &[]);

    print_dimension(
        &ctx.catalog.translate(ctx.language, "selectType", &[]),
        &all_label,
        &options.types,
    );
    print_dimension(
        &ctx.catalog.translate(ctx.language, "selectSpeciality", &[]),
        &all_label,
        &options.specialities,
    );
    print_dimension(
        &ctx.catalog.translate(ctx.language, "selectCity", &[]),
        &all_label,
        &options.cities,
    );
    Ok(())
}

fn print_dimension(title: &str, all_label: &str, options: &[FilterOption]) {
    println!("{title}");
    println!("  {ALL_SENTINEL:<18} {all_label}");
    for option in options {
        println!("  {:<18} {}", option.value, option.label);
    }
    println!();
}

pub(crate) fn run_map(
    ctx: &DirectoryContext,
    query: &str,
    kind: Option<&str>,
    speciality: Option<&str>,
    city: Option<&str>,
) -> anyhow::Result<()> {
    let filter = FacilityFilter {
        kind,
        speciality,
        city,
    };
    let selection = ctx.directory.select(ctx.language, query, &filter);
    let view = map_view(&selection, ctx.language, ctx.config.map_zoom);

    let Some((lat, lng)) = view.center else {
        println!("{}", ctx.catalog.translate(ctx.language, "noResults", &[]));
        return Ok(());
    };
    println!("center: {lat},{lng}  zoom: {}", view.zoom);

    println!();
    println!(
        "{:<12} {:<12} {:<30} {:<20} {}",
        "LAT", "LNG", "NAME", "SPECIALITY", "PHONE"
    );
    println!("{}", "-".repeat(95));
    for pin in &view.pins {
        let speciality_label =
            ctx.catalog
                .category_label(ctx.language, Category::Speciality, &pin.speciality);
        println!(
            "{:<12} {:<12} {:<30} {:<20} {}",
            pin.latitude,
            pin.longitude,
            render::truncate(&pin.name, 28),
            render::truncate(&speciality_label, 18),
            render::or_dash(pin.phone.as_deref()),
        );
    }

    Ok(())
}

pub(crate) fn run_cities(ctx: &DirectoryContext) -> anyhow::Result<()> {
    let summaries = by_city(ctx.directory.facilities());

    println!("{:<22} {:>10} {:>10}", "CITY", "FACILITIES", "LOCATED");
    println!("{}", "-".repeat(44));
    for summary in &summaries {
        let label = ctx
            .catalog
            .category_label(ctx.language, Category::City, &summary.city);
        println!(
            "{:<22} {:>10} {:>10}",
            render::truncate(&label, 20),
            summary.facility_count,
            summary.located_count,
        );
    }

    Ok(())
}
