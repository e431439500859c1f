// src/dashboard/terminal.rs

//! Plain-text output for the command-line host.

use crate::dashboard::events::{DashboardEvent, Notice, NoticeLevel};
use crate::dashboard::view::{DashboardView, PropertyCard};

pub fn render_view(view: &DashboardView) -> String {
    match view {
        DashboardView::Empty { message } => format!("{message}\n"),
        DashboardView::Cards(cards) => cards.iter().map(render_card).collect::<Vec<_>>().join("\n"),
    }
}

fn render_card(card: &PropertyCard) -> String {
    let [beds, baths, sqft] = card.details();
    format!(
        "{address}\n  {zpid}\n  {price}  {change} [{style}]\n  {beds} | {baths} | {sqft}\n",
        address = card.address,
        zpid = card.zpid_label(),
        price = card.price,
        change = card.change,
        style = card.change_style.css_class(),
    )
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };

    let mut out = format!("[{tag}] {}\n", notice.title);
    if !notice.lines.is_empty() {
        out.push('\n');
        for line in &notice.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Text for an event, or `None` for events a terminal has nothing to show for.
pub fn render_event(event: &DashboardEvent) -> Option<String> {
    match event {
        DashboardEvent::Rendered(view) => Some(render_view(view)),
        DashboardEvent::Notify(notice) => Some(render_notice(notice)),
        DashboardEvent::Navigate(_)
        | DashboardEvent::ModalOpened(_)
        | DashboardEvent::ModalClosed(_) => None,
    }
}
