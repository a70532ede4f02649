//! Districts - one panel per sector with its jurisdictions.

use barantrum_core::view::DistrictPanel;
use barantrum_ui::AccentBadge;
use dioxus::prelude::*;

#[component]
pub fn DistrictsView(panels: Vec<DistrictPanel>) -> Element {
    rsx! {
        div { class: "district-grid",
            for panel in panels {
                DistrictCard { key: "{panel.district.id}", panel: panel.clone() }
            }
        }
    }
}

#[component]
fn DistrictCard(panel: DistrictPanel) -> Element {
    let district = panel.district;

    rsx! {
        div { class: "district-card",
            div { class: "district-corner" }

            div { class: "district-head",
                h3 { class: "district-id", "{district.id}" }
                span { class: "district-sector", "SECTOR // {district.id}" }
            }

            h4 { class: "district-name", "{district.name}" }
            p { class: "district-description", "{district.description}" }

            if !panel.badges.is_empty() {
                div { class: "district-jurisdiction",
                    span { class: "jurisdiction-label", "\u{25A6} Jurisdiction:" }
                    div { class: "badge-row",
                        for badge in panel.badges {
                            AccentBadge {
                                key: "{badge.label}",
                                label: badge.label.clone(),
                                accent: badge.accent,
                            }
                        }
                    }
                }
            }
        }
    }
}
