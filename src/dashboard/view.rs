// src/dashboard/view.rs

//! The dashboard as a plain tree of values.
//!
//! `render` is the only way a view is built. It knows nothing about HTML or terminals;
//! `crate::templates` and `crate::dashboard::terminal` turn the tree into output.

use crate::dashboard::format::{format_count, format_currency, format_date, format_number};
use crate::domain::Property;

pub const EMPTY_MESSAGE: &str = "No properties tracked yet. Click \"Add Property\" to get started!";
pub const PRICE_PLACEHOLDER: &str = "N/A";

/// Direction of a property's price movement since it was first tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStyle {
    Positive,
    Negative,
    Neutral,
}

impl ChangeStyle {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            ChangeStyle::Positive
        } else if change < 0.0 {
            ChangeStyle::Negative
        } else {
            ChangeStyle::Neutral
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ChangeStyle::Positive => "positive",
            ChangeStyle::Negative => "negative",
            ChangeStyle::Neutral => "neutral",
        }
    }

    pub fn sign(self) -> &'static str {
        match self {
            ChangeStyle::Positive => "+",
            ChangeStyle::Negative => "-",
            ChangeStyle::Neutral => "",
        }
    }
}

/// Something a user can do from a card. Hosts hand these back to
/// `Dashboard::dispatch_card`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    UpdatePrice { zpid: String, address: String },
    ShowHistory { zpid: String },
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::UpdatePrice { .. } => "Update Price",
            CardAction::ShowHistory { .. } => "View History",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCard {
    pub zpid: String,
    pub address: String,
    pub price: String,
    pub change: String,
    pub change_style: ChangeStyle,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sqft: String,
    pub actions: Vec<CardAction>,
}

impl PropertyCard {
    pub fn zpid_label(&self) -> String {
        format!("ZPID: {}", self.zpid)
    }

    pub fn details(&self) -> [String; 3] {
        [
            format!("{} beds", self.bedrooms),
            format!("{} baths", self.bathrooms),
            format!("{} sqft", self.sqft),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Empty { message: String },
    Cards(Vec<PropertyCard>),
}

impl DashboardView {
    pub fn cards(&self) -> &[PropertyCard] {
        match self {
            DashboardView::Empty { .. } => &[],
            DashboardView::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty { .. })
    }
}

/// Maps the property list to its view. One card per property, in list order.
pub fn render(properties: &[Property]) -> DashboardView {
    if properties.is_empty() {
        return DashboardView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    DashboardView::Cards(properties.iter().map(property_card).collect())
}

pub fn property_card(property: &Property) -> PropertyCard {
    PropertyCard {
        zpid: property.zpid.clone(),
        address: property.address.clone(),
        price: price_text(property),
        change: price_change_text(property),
        change_style: ChangeStyle::of(property.change()),
        bedrooms: format_count(property.bedrooms),
        bathrooms: format_count(property.bathrooms),
        sqft: format_count(property.sqft),
        actions: vec![
            CardAction::UpdatePrice {
                zpid: property.zpid.clone(),
                address: property.address.clone(),
            },
            CardAction::ShowHistory {
                zpid: property.zpid.clone(),
            },
        ],
    }
}

pub fn price_text(property: &Property) -> String {
    property
        .current_price
        .map(format_currency)
        .unwrap_or_else(|| PRICE_PLACEHOLDER.to_string())
}

/// `+$5,000 (+1.00%)`, `-$5,000 (-1.00%)` or `$0 (0.00%)`. A missing percentage
/// prints as `0`.
pub fn price_change_text(property: &Property) -> String {
    let change = property.change();
    let sign = ChangeStyle::of(change).sign();
    let percent = match property.percent_change {
        Some(pct) => format!("{sign}{:.2}", pct.abs()),
        None => "0".to_string(),
    };
    format!("{sign}${} ({percent}%)", format_number(change.abs()))
}

/// One `date: price` line per history entry, or `None` when there is nothing to show.
pub fn price_history_lines(property: &Property) -> Option<Vec<String>> {
    if property.price_history.is_empty() {
        return None;
    }

    Some(
        property
            .price_history
            .iter()
            .map(|h| format!("{}: {}", format_date(&h.date), format_currency(h.price)))
            .collect(),
    )
}
