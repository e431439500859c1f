use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn history_page(address: &str, lines: &[String]) -> Markup {
    desktop_layout(
        "Price History",
        html! {
            main class="container" {
                section class="property-card" {
                    h2 { "Price History for " (address) }
                    @if lines.is_empty() {
                        p class="loading" { "No price history recorded yet." }
                    } @else {
                        ul class="price-history" {
                            @for line in lines {
                                li { (line) }
                            }
                        }
                    }
                    p { a href="/" { "← Back to dashboard" } }
                }
            }
        },
    )
}
