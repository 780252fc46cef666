//! Standalone demo: opens a window with a linear color picker and logs
//! every picked color.

use floem::prelude::*;
use floem::reactive::create_effect;
use floem::window::WindowConfig;
use floem_kolor::{kolor_pick, ColorSample, PickerKind};

fn main() {
    let kind = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<PickerKind>())
        .transpose()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(2);
        })
        .unwrap_or(PickerKind::Linear);

    let sample = RwSignal::new(None::<ColorSample>);
    create_effect(move |_| {
        if let Some(s) = sample.get() {
            println!("{s}");
        }
    });

    floem::Application::new()
        .window(
            move |_| kolor_pick(kind, sample),
            Some(
                WindowConfig::default()
                    .size((260.0, 520.0))
                    .title("floem-kolor"),
            ),
        )
        .run();
}
