use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use grocerycache_core::{Category, Phase};

use crate::app::{App, AppState};

use super::styles;

/// Width of the name column in the product list
const NAME_COLUMN_WIDTH: usize = 48;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search bar
            Constraint::Length(2), // Categories
            Constraint::Min(5),    // Products
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_search_bar(frame, chunks[1]);
    render_categories(frame, app, chunks[2]);
    render_products(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "  Grocery Store";
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    let paragraph = Paragraph::new(Span::styled(" Search for products", styles::muted_style()))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {} {} ", i + 1, category);
        spans.push(Span::styled(label, styles::category_style(*category == app.category)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_products(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ({}) ", app.category, app.products().len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    match app.retrieval.phase {
        Phase::Loading => {
            let inner = centered_line(area);
            frame.render_widget(block, area);
            let loading = Paragraph::new(Span::styled("Loading...", styles::success_style()))
                .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
        }
        Phase::Failed => {
            let inner = centered_line(area);
            frame.render_widget(block, area);
            let message = app.retrieval.message.as_deref().unwrap_or_default();
            let error = Paragraph::new(Span::styled(message, styles::error_style()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(error, inner);
        }
        Phase::Ready if app.products().is_empty() => {
            let inner = centered_line(area);
            frame.render_widget(block, area);
            let empty = Paragraph::new(Span::styled(
                "No products in this category",
                styles::muted_style(),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
        }
        Phase::Ready => {
            let items: Vec<ListItem> = app
                .products()
                .iter()
                .enumerate()
                .map(|(i, product)| {
                    let stock_style = if product.in_stock {
                        styles::success_style()
                    } else {
                        styles::muted_style()
                    };
                    let line = Line::from(vec![
                        Span::raw(format!(
                            " {:<width$} ",
                            truncate_string(&product.name, NAME_COLUMN_WIDTH),
                            width = NAME_COLUMN_WIDTH
                        )),
                        Span::styled(product.stock_label(), stock_style),
                    ]);

                    let style = if i == app.selection {
                        styles::selected_style()
                    } else {
                        styles::list_item_style()
                    };
                    ListItem::new(line).style(style)
                })
                .collect();

            let list = List::new(items).block(block);
            let mut state = ListState::default();
            state.select(Some(app.selection));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[r]eload | [q]uit";

    let mut left = vec![];
    if let Some(ref msg) = app.status_message {
        left.push(Span::styled(format!(" {} ", msg), styles::muted_style()));
    } else {
        left.push(Span::styled(
            format!(" {} items ", app.products().len()),
            styles::muted_style(),
        ));
    }
    if app.retrieval.phase == Phase::Ready && app.retrieval.from_cache {
        left.push(Span::styled("offline copy ", styles::highlight_style()));
    }

    let left_len: usize = left.iter().map(|s| s.content.len()).sum();
    let right_text = format!(" {} ", shortcuts);
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(right_text.len());

    left.push(Span::raw(" ".repeat(padding_len)));
    left.push(Span::styled(right_text, styles::muted_style()));

    let paragraph = Paragraph::new(Line::from(left)).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(44, 14, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("  grocerycache", styles::title_style())),
        Line::from(Span::styled(format!("  version {}", version), styles::muted_style())),
        Line::from(""),
        key("←/→", "Previous/next category"),
        key("1-6", "Jump to category"),
        key("↑/↓", "Move selection"),
        key("PgUp/PgDn", "Scroll a page"),
        key("r", "Reload category"),
        key("?", "Toggle this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", styles::muted_style())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One-line rect in the vertical middle of `area`, inside its border
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(
        area.x + 1,
        y,
        area.width.saturating_sub(2),
        1.min(area.height),
    )
}

fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Truncate a string to a maximum length, adding ellipsis if needed
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Milk", 10), "Milk");
        assert_eq!(truncate_string("Starbucks Coffee Variety Pack", 12), "Starbucks...");
        assert_eq!(truncate_string("Gum", 2), "Gu");
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_fixed(44, 14, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 10));

        let rect = centered_rect_fixed(10, 4, area);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
