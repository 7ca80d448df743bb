use dioxus::prelude::*;

use crate::vm::BeadVm;

fn bead_class(bead: BeadVm, clickable: bool) -> String {
    let mut class = String::from("bead");
    if bead.filled {
        class.push_str(" completed");
    }
    if clickable {
        class.push_str(" clickable");
    }
    class
}

/// A row of rosary beads. With `on_select` each bead jumps to its mystery.
#[component]
pub fn Beads(
    beads: Vec<BeadVm>,
    #[props(default = "md")] size: &'static str,
    on_select: Option<Callback<usize>>,
) -> Element {
    let clickable = on_select.is_some();
    rsx! {
        div { class: "beads beads-{size}",
            for bead in beads {
                span {
                    key: "{bead.index}",
                    class: bead_class(bead, clickable),
                    onclick: move |_| {
                        if let Some(on_select) = on_select {
                            on_select.call(bead.index);
                        }
                    },
                }
            }
        }
    }
}
