//! Market listing command.

use anyhow::Result;

use super::ListArgs;
use crate::context::Context;

const WIDTHS: [usize; 6] = [6, 16, 24, 8, 16, 10];

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.catalog.summaries());
        return Ok(());
    }

    ctx.output.header("Regions");
    ctx.output.table_row(
        &["ID", "NAME", "DOMAIN", "CURRENCY", "CHANNEL", "LANGUAGE"],
        &WIDTHS,
    );

    for region in ctx.catalog.iter() {
        ctx.output.table_row(
            &[
                region.id.as_str(),
                region.name.as_str(),
                region.domain.as_str(),
                region.currency.code(),
                region.channel_id.as_str(),
                region.default_language.id.as_str(),
            ],
            &WIDTHS,
        );

        if args.languages {
            for language in &region.available_languages {
                ctx.output.kv(
                    &format!("    {}", language.id),
                    &format!("{} ({}, {})", language.name, language.locale, language.code),
                );
            }
        }
    }

    ctx.output.info(&format!(
        "Default region: {}",
        ctx.catalog.default_region().id
    ));
    Ok(())
}
