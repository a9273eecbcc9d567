use cashflow_domain::{CashItem, Flow, ItemStatus, LedgerFilter};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn cash_item_round_trips_through_json() {
    let item = CashItem::new(
        date(2024, 3, 1),
        date(2024, 3, 10),
        Flow::Out,
        "Office rent",
        15000.0,
    )
    .with_status(ItemStatus::Confirmed)
    .with_partner("Landlord Co.");

    let json = serde_json::to_string(&item).expect("serialize");
    let loaded: CashItem = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(loaded.id, item.id);
    assert_eq!(loaded.due_date, item.due_date);
    assert_eq!(loaded.flow, Flow::Out);
    assert_eq!(loaded.status, ItemStatus::Confirmed);
    assert_eq!(loaded.partner.as_deref(), Some("Landlord Co."));
    assert_eq!(loaded.amount, 15000.0);
}

#[test]
fn flow_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&Flow::In).unwrap(), "\"in\"");
    assert_eq!(serde_json::to_string(&Flow::Out).unwrap(), "\"out\"");
    assert_eq!(serde_json::from_str::<Flow>("\"in\"").unwrap(), Flow::In);
}

#[test]
fn unknown_flow_value_is_rejected_at_decode() {
    let err = serde_json::from_str::<Flow>("\"transfer\"").unwrap_err();
    assert!(err.to_string().contains("unknown flow value"));

    let raw = r#"{
        "id": "7f9c0b04-6f8b-4a65-9c05-52d8cf90b0aa",
        "entry_date": "2024-03-01",
        "due_date": "2024-03-10",
        "flow": "transfer",
        "amount": 100.0,
        "status": "forecast",
        "item_name": "Broken row",
        "created_at": "2024-03-01T00:00:00Z"
    }"#;
    assert!(serde_json::from_str::<CashItem>(raw).is_err());
}

#[test]
fn unknown_status_value_is_rejected_at_decode() {
    let err = serde_json::from_str::<ItemStatus>("\"pending\"").unwrap_err();
    assert!(err.to_string().contains("unknown status value"));
}

#[test]
fn ledger_filter_controls_visibility_only() {
    assert!(LedgerFilter::All.shows(ItemStatus::Forecast));
    assert!(LedgerFilter::All.shows(ItemStatus::Confirmed));
    assert!(!LedgerFilter::ConfirmedOnly.shows(ItemStatus::Forecast));
    assert!(LedgerFilter::ConfirmedOnly.shows(ItemStatus::Confirmed));
}
