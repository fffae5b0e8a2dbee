//! View model and HTML rendering.
//!
//! Everything here is a pure function of [`AppState`]; the WASM layer copies
//! the result into the DOM.

use crate::flow::{FlowState, StatusDisplay};
use crate::state::AppState;
use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};
use vtu_types::Transaction;

pub const NOT_CONNECTED: &str = "Not Connected";
pub const EMPTY_HISTORY_HTML: &str =
    r#"<div class="empty-state"><span>No transactions yet</span></div>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub service_name: String,
    pub amount_label: String,
    pub total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub connected: bool,
    pub address_label: String,
    pub balance_label: String,
    pub history_html: String,
    pub confirmation: Option<ConfirmationSummary>,
    pub status: Option<StatusDisplay>,
}

pub fn render(state: &AppState) -> DashboardView {
    let symbol = state.token_symbol();
    let (connected, address_label, balance_label) = match state.session() {
        Some(session) => (
            true,
            shorten_address(&session.address),
            format_balance(state.balance()),
        ),
        None => (false, NOT_CONNECTED.to_owned(), "0".to_owned()),
    };

    DashboardView {
        connected,
        address_label,
        balance_label,
        history_html: render_history(state.history().iter(), symbol),
        confirmation: confirmation_summary(state.flow(), symbol),
        status: state.flow().status_display(),
    }
}

/// `EQD4FP...1234` style: first 6 and last 4 characters. Both slices clamp
/// to the address length, so short inputs overlap rather than panic.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// Thousands-grouped integer, e.g. `12,500`.
pub fn format_balance(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

pub fn format_amount(amount: u64, symbol: &str) -> String {
    format!("{amount} {symbol}")
}

/// `M/D/YYYY`, UTC.
pub fn format_date(epoch_ms: u64) -> String {
    i64::try_from(epoch_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn confirmation_summary(flow: &FlowState, symbol: &str) -> Option<ConfirmationSummary> {
    flow.pending_confirmation().map(|purchase| ConfirmationSummary {
        service_name: purchase.service_name().to_owned(),
        amount_label: format_amount(purchase.amount, symbol),
        total_label: format_amount(purchase.amount, symbol),
    })
}

pub fn render_history<'a>(entries: impl IntoIterator<Item = &'a Transaction>, symbol: &str) -> String {
    let rows: Vec<String> = entries
        .into_iter()
        .map(|tx| render_history_row(tx, symbol))
        .collect();
    if rows.is_empty() {
        EMPTY_HISTORY_HTML.to_owned()
    } else {
        rows.concat()
    }
}

fn render_history_row(tx: &Transaction, symbol: &str) -> String {
    format!(
        r#"
            <div class="transaction-item">
                <div class="transaction-details">
                    <div class="transaction-type">{service}</div>
                    <div>Amount: {amount}</div>
                    <div>{date}</div>
                </div>
                <div class="transaction-status status-{status}">{status}</div>
            </div>
        "#,
        service = escape_html(&tx.service_name),
        amount = escape_html(&format_amount(tx.amount, symbol)),
        date = format_date(tx.timestamp_epoch_ms),
        status = tx.status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use vtu_types::{FormFields, ServiceKind, TransactionStatus, WalletAccount};

    #[test]
    fn address_keeps_first_six_and_last_four() {
        assert_eq!(
            shorten_address("EQD4FPq-pLJxzR1Ht0vTNRbCJyxZr7UuBx0Q4FBtxyz1234"),
            "EQD4FP...1234"
        );
        assert_eq!(shorten_address("EQD4FPqxyz1234"), "EQD4FP...1234");
    }

    #[test]
    fn short_addresses_are_still_shortened() {
        assert_eq!(shorten_address("EQabcd1234"), "EQabcd...1234");
        assert_eq!(shorten_address("0:abc"), "0:abc...:abc");
        assert_eq!(shorten_address("abc"), "abc...abc");
        assert_eq!(shorten_address(""), "...");
    }

    #[test]
    fn balance_groups_thousands() {
        assert_eq!(format_balance(0), "0");
        assert_eq!(format_balance(999), "999");
        assert_eq!(format_balance(1000), "1,000");
        assert_eq!(format_balance(12_500), "12,500");
        assert_eq!(format_balance(1_234_567), "1,234,567");
        assert_eq!(format_balance(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn dates_render_month_day_year() {
        // 2024-03-05T12:00:00Z
        assert_eq!(format_date(1_709_640_000_000), "3/5/2024");
    }

    #[test]
    fn empty_history_renders_placeholder() {
        assert_eq!(render_history(std::iter::empty(), "AQCNX"), EMPTY_HISTORY_HTML);
    }

    #[test]
    fn history_rows_show_service_amount_and_status() {
        let tx = Transaction {
            id: 1_709_640_000_000,
            service: ServiceKind::Data,
            service_name: "Data <Bundle>".to_owned(),
            amount: 300,
            status: TransactionStatus::Success,
            timestamp_epoch_ms: 1_709_640_000_000,
            details: FormFields::new(),
        };
        let html = render_history([&tx], "AQCNX");
        assert!(html.contains("Data &lt;Bundle&gt;"));
        assert!(html.contains("Amount: 300 AQCNX"));
        assert!(html.contains("3/5/2024"));
        assert!(html.contains(r#"class="transaction-status status-success">success<"#));
    }

    #[test]
    fn disconnected_view_shows_defaults() {
        let state = AppState::new(&DashboardConfig::default());
        let view = render(&state);
        assert!(!view.connected);
        assert_eq!(view.address_label, NOT_CONNECTED);
        assert_eq!(view.balance_label, "0");
        assert_eq!(view.confirmation, None);
        assert_eq!(view.status, None);
    }

    #[test]
    fn connected_view_formats_session() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.open_session(WalletAccount {
            address: "UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG".to_owned(),
        });
        state.apply_balance("UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG", 15_000);
        let view = render(&state);
        assert!(view.connected);
        assert_eq!(view.address_label, "UQBvW8...ggGG");
        assert_eq!(view.balance_label, "15,000");
    }
}
