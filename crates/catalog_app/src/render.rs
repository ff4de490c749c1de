use listing_core::{ListingViewModel, ResultsView};

/// Text rendering of a listing view, one line per widget.
pub fn render(view: &ListingViewModel) -> Vec<String> {
    let mut lines = vec![
        format!("== {} ==", view.title),
        format!("url: {}", view.location),
    ];

    let toolbar = &view.toolbar;
    let filter_label = toolbar
        .filter_options
        .iter()
        .find(|option| option.value == toolbar.filter)
        .map_or(toolbar.filter.as_str(), |option| option.label.as_str());
    lines.push(format!(
        "search: \"{}\" | {}: {}",
        toolbar.search_text, toolbar.filter_label, filter_label
    ));

    if !toolbar.chips.is_empty() {
        let chips: Vec<_> = toolbar
            .chips
            .iter()
            .map(|chip| format!("[{} x]", chip.label))
            .collect();
        let clear_all = if toolbar.show_clear_all {
            " [Clear all]"
        } else {
            ""
        };
        lines.push(format!("{}{}", chips.join(" "), clear_all));
    }

    match &view.results {
        ResultsView::Idle => {}
        ResultsView::Loading { placeholders } => {
            lines.push(format!("loading ({placeholders} placeholders)"));
        }
        ResultsView::Failed { message } => {
            lines.push(format!("error: {message} [Retry]"));
        }
        ResultsView::Empty => lines.push("no results".to_string()),
        ResultsView::Rows(rows) => {
            lines.extend(rows.iter().map(|row| match row.id {
                Some(id) => format!("  {id:>5}  {}", row.label),
                None => format!("         {}", row.label),
            }));
        }
    }

    if let Some(pager) = &view.pager {
        lines.push(format!(
            "{} page {} of {} {} | {} per page (options: {})",
            if pager.can_go_prev() { "<" } else { " " },
            pager.page,
            pager.total_pages,
            if pager.can_go_next() { ">" } else { " " },
            pager.page_size,
            pager
                .page_size_options
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("/")
        ));
    }

    lines
}
