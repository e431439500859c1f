use maud::{html, Markup};

/// Add-property form. Posts the same six fields as `/api/add_property`.
pub fn add_property_form() -> Markup {
    html! {
        div id="addPropertyModal" class="modal" {
            div class="modal-content" {
                h2 { "Add Property" }
                form id="addPropertyForm" method="post" action="/add_property" {
                    (text_field("zpid", "ZPID", "text"))
                    (text_field("address", "Address", "text"))
                    (text_field("price", "Price", "number"))
                    (text_field("bedrooms", "Bedrooms", "number"))
                    (text_field("bathrooms", "Bathrooms", "number"))
                    (text_field("sqft", "Square Feet", "number"))
                    button type="submit" { "Add Property" }
                }
            }
        }
    }
}

fn text_field(name: &str, label: &str, kind: &str) -> Markup {
    html! {
        div class="form-group" {
            label for=(name) { (label) }
            input type=(kind) step=[(kind == "number").then_some("any")] id=(name) name=(name) required;
        }
    }
}
