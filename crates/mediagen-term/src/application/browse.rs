use std::io::Write;

use anyhow::Result;
use tokio::io::AsyncBufRead;

use crate::domain::models::Event;
use crate::domain::models::SelectOption;
use crate::domain::services::EventsService;
use crate::domain::services::ModelPicker;

#[cfg(test)]
#[path = "browse_test.rs"]
mod tests;

const HINT: &str = "Type to fuzzy search | /next /prev: browse | /select: choose | /quit";

/// Run the browse session until a model is chosen or input ends. Returns the
/// chosen option, if any.
pub async fn start_loop<R, W>(
    mut picker: ModelPicker,
    mut events: EventsService<R>,
    out: &mut W,
    max_rows: usize,
) -> Result<Option<SelectOption>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render(&picker, out, max_rows)?;

    loop {
        match events.next().await? {
            Event::CatalogLoaded(catalog) => picker.load_catalog(catalog),
            Event::QueryChanged(query) => picker.set_query(&query),
            Event::SelectNext => picker.select_next(),
            Event::SelectPrevious => picker.select_previous(),
            Event::Confirm => {
                if let Some(option) = picker.selected() {
                    tracing::info!(model = option.value.as_str(), "selected model");
                    writeln!(out, "Selected: {} ({})", option.name, option.value)?;
                    return Ok(Some(option.clone()));
                }
                continue;
            }
            Event::Quit => return Ok(None),
        }

        render(&picker, out, max_rows)?;
    }
}

/// Print the visible window of options around the highlighted row.
pub fn render<W: Write>(picker: &ModelPicker, out: &mut W, max_rows: usize) -> Result<()> {
    let rows = max_rows.max(1);
    let selected = picker.selected_index();
    let start = if selected >= rows { selected + 1 - rows } else { 0 };

    writeln!(out)?;
    writeln!(out, "Search: {}", picker.query())?;
    for (index, option) in picker
        .options()
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
    {
        let marker = if index == selected { ">" } else { " " };
        if option.value.is_empty() {
            writeln!(out, "{marker} {}", option.name)?;
        } else {
            writeln!(out, "{marker} {}  {}", option.name, option.value)?;
        }
        writeln!(out, "    {}", option.description)?;
    }
    writeln!(out, "-- {} --", picker.status())?;
    writeln!(out, "{HINT}")?;
    out.flush()?;

    return Ok(());
}
