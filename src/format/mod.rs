use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Rupee amount with Indian digit grouping, e.g. `₹1,23,456.50`.
pub fn format_inr(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let grouped = if whole.len() <= 3 {
        whole
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (front, back) = rest.split_at(rest.len() - 2);
            groups.push(back);
            rest = front;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, grouped, fraction)
}

/// "5 Mar 2025"
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%-d %b %Y").to_string()
}

/// "05 Mar 2025, 03:45 PM"
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d %b %Y, %I:%M %p").to_string()
}

/// Last six characters of an identifier, used as a compact badge.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().rev().nth(5) {
        Some((idx, _)) => &id[idx..],
        None => id,
    }
}
