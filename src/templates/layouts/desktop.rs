use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem; background: #f5f5f7; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 0; }
#properties-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.property-card, .modal-content { background: white; padding: 1.25rem; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.08); }
.property-address { font-weight: 600; }
.property-zpid { color: #666; font-size: 0.85rem; }
.property-price { color: #0071e3; font-size: 1.75rem; font-weight: 600; margin: 0.5rem 0; }
.price-change.positive { color: #16a34a; }
.price-change.negative { color: #dc2626; }
.price-change.neutral { color: #666; }
.property-details { display: flex; gap: 1rem; color: #444; margin: 0.75rem 0; }
.loading { color: #666; padding: 2rem; text-align: center; }
.modal { margin-top: 2rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { "🏠 Property Tracker" }
                    nav class="header-actions" {
                        a class="btn" href="#addPropertyModal" { "Add Property" }
                        " "
                        a class="btn" href="/api/export" { "Export Data" }
                    }
                }
                (content)
            }
        }
    }
}
