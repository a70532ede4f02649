//! Archive frame: header, navigation bar, content rail and footer.

use barantrum_core::ViewState;
use barantrum_ui::{GridBackground, NavButton};
use dioxus::prelude::*;

use crate::theme::colors;

/// Status readouts shown at the right of the header.
const STATUS_READOUTS: [(&str, &str); 3] = [("NET", "ONLINE"), ("SYS", "STABLE"), ("PWR", "98%")];

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Currently active view
    pub current: ViewState,
    pub on_navigate: EventHandler<ViewState>,
    pub children: Element,
}

/// Page chrome around every view.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        div { class: "archive-shell",
            GridBackground { line_color: colors::GRID_LINE.to_string() }

            header { class: "archive-header",
                div {
                    h1 { class: "archive-title", "CITY ARCHIVE" }
                    p { class: "archive-protocol", "PROTOCOL: 2077 // SECURE CONNECTION" }
                }
                div { class: "archive-status",
                    for (label, value) in STATUS_READOUTS {
                        span { key: "{label}", class: "status-readout", "{label}: {value}" }
                    }
                }
            }

            nav { class: "archive-nav",
                for view in ViewState::ALL {
                    NavButton {
                        key: "{view}",
                        label: view.label().to_string(),
                        active: props.current == view,
                        onclick: move |_| on_navigate.call(view),
                    }
                }
            }

            main { class: "archive-main",
                div { class: "rail-corner top" }
                div { class: "rail-corner bottom" }
                {props.children}
            }

            footer { class: "archive-footer",
                p { "CAUTION: UNAUTHORIZED ACCESS TO CITY ARCHIVES IS A CLASS A FELONY." }
                p { "\u{00A9} 2077 CITY ADMINISTRATION. ALL RIGHTS RESERVED." }
            }
        }
    }
}
