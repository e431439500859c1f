use crate::dashboard::view::DashboardView;
use crate::templates::components::{add_property_form, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn dashboard_page(view: &DashboardView) -> Markup {
    desktop_layout(
        "Property Tracker",
        html! {
            main class="container" {
                div id="properties-grid" {
                    @match view {
                        DashboardView::Empty { message } => div class="loading" { (message) },
                        DashboardView::Cards(cards) => {
                            @for card in cards {
                                (property_card(card))
                            }
                        }
                    }
                }

                (add_property_form())
            }
        },
    )
}
