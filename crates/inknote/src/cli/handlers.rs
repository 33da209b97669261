use super::print::{print_brushes, print_info, print_messages, print_pages, print_report};
use inknoteapp::api::DoctorReport;
use inknoteapp::error::{InknoteError, Result};
use inknoteapp::init::InknoteContext;
use std::path::{Path, PathBuf};

pub(super) fn handle_init(ctx: &mut InknoteContext, name: Option<String>, force: bool) -> Result<()> {
    let result = ctx.api.init(name, force)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_info(ctx: &mut InknoteContext) -> Result<()> {
    let result = ctx.api.info()?;
    if let Some(info) = &result.info {
        print_info(info);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_pages(ctx: &mut InknoteContext) -> Result<()> {
    let result = ctx.api.list_pages()?;
    print_pages(&result.pages);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_add_page(ctx: &mut InknoteContext, title: Option<String>) -> Result<()> {
    let result = ctx.api.add_page(title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_rename_page(ctx: &mut InknoteContext, index: usize, title: &str) -> Result<()> {
    let result = ctx.api.rename_page(index, title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_remove_page(ctx: &mut InknoteContext, index: usize) -> Result<()> {
    let result = ctx.api.remove_page(index)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_clear_page(ctx: &mut InknoteContext, index: usize) -> Result<()> {
    let result = ctx.api.clear_page(index)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_draw(
    ctx: &mut InknoteContext,
    page: usize,
    points: &[String],
    brush: &str,
    color: Option<&str>,
) -> Result<()> {
    let result = ctx.api.draw(page, brush, points, color)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_erase(ctx: &mut InknoteContext, page: usize, stroke: usize) -> Result<()> {
    let result = ctx.api.erase(page, stroke)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_export(ctx: &mut InknoteContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(output.as_deref())?;
    if let Some(document) = &result.document {
        println!("{}", document);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_import(ctx: &mut InknoteContext, input: &Path) -> Result<()> {
    let result = ctx.api.import(input)?;
    print_messages(&result.messages);
    Ok(())
}

/// Prints the report; an unreadable notebook also fails the process.
pub(super) fn handle_doctor(ctx: &mut InknoteContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_messages(&result.messages);

    match result.report {
        Some(DoctorReport::Unreadable { kind, .. }) => Err(InknoteError::Store(format!(
            "notebook is unreadable ({})",
            kind
        ))),
        _ => Ok(()),
    }
}

pub(super) fn handle_rekey(
    ctx: &mut InknoteContext,
    new_key: Option<&str>,
    new_strategy: Option<&str>,
) -> Result<()> {
    let result = ctx.api.rekey(new_key, new_strategy)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_brushes(ctx: &mut InknoteContext) -> Result<()> {
    let result = ctx.api.brushes();
    print_brushes(&result.brushes);
    Ok(())
}
