//! Data-completeness commands: the gaps table and the Markdown report.

use medpoint_core::Category;
use medpoint_directory::{by_city, contact_url, filter_options, gaps, ContactTopic};

use crate::render;
use crate::DirectoryContext;

pub(crate) fn run_gaps(ctx: &DirectoryContext) -> anyhow::Result<()> {
    let report = gaps(ctx.directory.facilities());

    println!(
        "{} facilities, {} missing a phone, {} missing a location",
        report.total, report.missing_phone, report.missing_location
    );
    if report.incomplete_ids.is_empty() {
        println!("roster is complete");
        return Ok(());
    }

    println!();
    println!(
        "{:<26} {:<30} {:<10} {}",
        "ID", "NAME", "MISSING", "INFORM-US LINK"
    );
    println!("{}", "-".repeat(110));
    for facility in ctx.directory.facilities() {
        let phone_gap = facility.is_phone_missing();
        let location_gap = facility.is_location_missing();
        let (missing, topic) = match (phone_gap, location_gap) {
            (true, true) => ("both", ContactTopic::Phone),
            (true, false) => ("phone", ContactTopic::Phone),
            (false, true) => ("location", ContactTopic::Location),
            (false, false) => continue,
        };
        let url = contact_url(&ctx.config.contact_phone, facility, ctx.language, topic);
        println!(
            "{:<26} {:<30} {:<10} {url}",
            render::truncate(&facility.id, 24),
            render::truncate(facility.display_name(ctx.language), 28),
            missing,
        );
    }

    Ok(())
}

pub(crate) fn run_report(ctx: &DirectoryContext) -> anyhow::Result<()> {
    let facilities = ctx.directory.facilities();
    let report = gaps(facilities);
    let summaries = by_city(facilities);
    let options = filter_options(facilities, &ctx.catalog, ctx.language);

    println!("# {}", ctx.catalog.translate(ctx.language, "title", &[]));
    println!();
    println!(
        "{}",
        ctx.catalog.translate(ctx.language, "description", &[])
    );
    println!();
    println!(
        "Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    println!("## Coverage");
    println!();
    println!("- Facilities: {}", report.total);
    println!("- Types: {}", options.types.len());
    println!("- Specialities: {}", options.specialities.len());
    println!("- Cities: {}", summaries.len());
    println!("- Missing phone: {}", report.missing_phone);
    println!("- Missing location: {}", report.missing_location);
    println!();
    println!("## Facilities by city");
    println!();
    println!("| City | Facilities | Located |");
    println!("|------|-----------:|--------:|");
    for summary in &summaries {
        let label = ctx
            .catalog
            .category_label(ctx.language, Category::City, &summary.city);
        println!(
            "| {label} | {} | {} |",
            summary.facility_count, summary.located_count
        );
    }

    if !report.incomplete_ids.is_empty() {
        println!();
        println!("## Incomplete records");
        println!();
        for id in &report.incomplete_ids {
            println!("- {id}");
        }
    }

    println!();
    println!("{}", ctx.catalog.translate(ctx.language, "footer", &[]));

    Ok(())
}
