//! Ticket View-Model
//!
//! Display data for one ticket plus the events its controls emit.
//! The view-model never changes the ticket; every interaction is handed to
//! the handler supplied at construction.

use std::fmt;

use chrono::{Local, TimeZone};

use crate::models::{Ticket, TicketId};

/// Russian locale layout, e.g. `14.11.2023, 22:13:20`
pub const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";
pub const NO_DESCRIPTION: &str = "Нет описания";
pub const STATUS_DONE: &str = "Выполнено";
pub const STATUS_IN_PROGRESS: &str = "В работе";

/// What the user did to a ticket card
#[derive(Debug, Clone, PartialEq)]
pub enum TicketEvent {
    /// Checkbox flipped; `status` is the requested new value
    StatusToggled { id: TicketId, status: bool },
    DetailsRequested(Ticket),
    EditRequested(Ticket),
    DeleteRequested(Ticket),
}

pub struct TicketView<F> {
    ticket: Ticket,
    on_event: F,
}

impl<F: Fn(TicketEvent)> TicketView<F> {
    pub fn new(ticket: Ticket, on_event: F) -> Self {
        Self { ticket, on_event }
    }

    pub fn name(&self) -> &str {
        &self.ticket.name
    }

    pub fn is_checked(&self) -> bool {
        self.ticket.status
    }

    pub fn css_class(&self) -> &'static str {
        if self.ticket.status {
            "ticket ticket-completed"
        } else {
            "ticket"
        }
    }

    pub fn created_label(&self) -> String {
        format!("Создан: {}", format_date(self.ticket.created))
    }

    pub fn toggle_status(&self) {
        (self.on_event)(TicketEvent::StatusToggled {
            id: self.ticket.id.clone(),
            status: !self.ticket.status,
        });
    }

    pub fn show_details(&self) {
        (self.on_event)(TicketEvent::DetailsRequested(self.ticket.clone()));
    }

    pub fn edit(&self) {
        (self.on_event)(TicketEvent::EditRequested(self.ticket.clone()));
    }

    pub fn delete(&self) {
        (self.on_event)(TicketEvent::DeleteRequested(self.ticket.clone()));
    }
}

/// Labelled rows shown in the details modal
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetails {
    pub rows: Vec<(&'static str, String)>,
}

impl TicketDetails {
    /// Rows with the date in the browser's time zone
    pub fn local(ticket: &Ticket) -> Self {
        Self::of(ticket, &Local)
    }

    pub fn of<Tz: TimeZone>(ticket: &Ticket, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let description = if ticket.description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            ticket.description.clone()
        };
        let status = if ticket.status { STATUS_DONE } else { STATUS_IN_PROGRESS };
        Self {
            rows: vec![
                ("Краткое описание", ticket.name.clone()),
                ("Подробное описание", description),
                ("Статус", status.to_string()),
                ("Дата создания", format_date_in(ticket.created, tz)),
            ],
        }
    }

    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(|(label, value)| format!("<p><strong>{}:</strong> {}</p>", label, escape_html(value)))
            .collect()
    }
}

pub fn format_date(millis: i64) -> String {
    format_date_in(millis, &Local)
}

pub fn format_date_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => "Invalid Date".to_string(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::cell::RefCell;

    fn make_ticket(status: bool, description: &str) -> Ticket {
        Ticket {
            id: TicketId::from(5u64),
            name: "Printer jam".to_string(),
            description: description.to_string(),
            status,
            created: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#039;");
    }

    #[test]
    fn test_details_escape_every_value() {
        let mut ticket = make_ticket(false, "<script>alert('x')</script>");
        ticket.name = r#"<b>"Tom" & 'Jerry'</b>"#.to_string();
        let html = TicketDetails::of(&ticket, &Utc).to_html();
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("'"));
        assert!(html.contains("&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"));
    }

    #[test]
    fn test_details_placeholder_and_status() {
        let details = TicketDetails::of(&make_ticket(false, ""), &Utc);
        assert_eq!(details.rows[0].1, "Printer jam");
        assert_eq!(details.rows[1].1, NO_DESCRIPTION);
        assert_eq!(details.rows[2].1, STATUS_IN_PROGRESS);
        assert_eq!(details.rows[3].1, "14.11.2023, 22:13:20");

        let done = TicketDetails::of(&make_ticket(true, "Tray 2"), &Utc);
        assert_eq!(done.rows[1].1, "Tray 2");
        assert_eq!(done.rows[2].1, STATUS_DONE);
    }

    #[test]
    fn test_format_date_fixed_offset() {
        let moscow = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_date_in(1_700_000_000_000, &moscow), "15.11.2023, 01:13:20");
    }

    #[test]
    fn test_css_class_and_checkbox() {
        let view = TicketView::new(make_ticket(true, ""), |_: TicketEvent| {});
        assert!(view.is_checked());
        assert_eq!(view.css_class(), "ticket ticket-completed");
        assert!(view.created_label().starts_with("Создан: "));

        let view = TicketView::new(make_ticket(false, ""), |_: TicketEvent| {});
        assert_eq!(view.css_class(), "ticket");
    }

    #[test]
    fn test_events_are_delegated() {
        let seen = RefCell::new(Vec::new());
        let ticket = make_ticket(false, "");
        let view = TicketView::new(ticket.clone(), |e: TicketEvent| seen.borrow_mut().push(e));

        view.toggle_status();
        view.show_details();
        view.edit();
        view.delete();

        // The view-model itself never flips the status
        assert!(!view.is_checked());
        drop(view);

        assert_eq!(
            seen.into_inner(),
            vec![
                TicketEvent::StatusToggled { id: ticket.id.clone(), status: true },
                TicketEvent::DetailsRequested(ticket.clone()),
                TicketEvent::EditRequested(ticket.clone()),
                TicketEvent::DeleteRequested(ticket.clone()),
            ]
        );
    }
}
