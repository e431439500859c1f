use crate::dashboard::view::{CardAction, PropertyCard};
use maud::{html, Markup};

pub fn property_card(card: &PropertyCard) -> Markup {
    let [beds, baths, sqft] = card.details();

    html! {
        div class="property-card" data-zpid=(card.zpid) {
            div class="property-header" {
                div class="property-address" { (card.address) }
                div class="property-zpid" { (card.zpid_label()) }
            }

            div class="property-price" { (card.price) }

            div class={ "price-change " (card.change_style.css_class()) } { (card.change) }

            div class="property-details" {
                span { "🛏️ " (beds) }
                span { "🚿 " (baths) }
                span { "📐 " (sqft) }
            }

            div class="property-actions" {
                @for action in &card.actions {
                    (card_action(action))
                }
            }
        }
    }
}

fn card_action(action: &CardAction) -> Markup {
    match action {
        CardAction::UpdatePrice { zpid, address } => html! {
            details class="update-price" {
                summary { (action.label()) }
                form method="post" action="/update_price" {
                    p class="update-address" { (address) }
                    input type="hidden" name="zpid" value=(zpid);
                    label for={ "update-price-" (zpid) } { "New price" }
                    input type="number" step="any" min="0" id={ "update-price-" (zpid) } name="price" required;
                    button type="submit" { "Save" }
                }
            }
        },
        CardAction::ShowHistory { zpid } => html! {
            a class="btn" href={ "/history?zpid=" (zpid) } { (action.label()) }
        },
    }
}
