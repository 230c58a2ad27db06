//! `check-config` summary output.

use backdrop_forward::policy::accepts_input;
use backdrop_forward::Config;

pub fn print_summary(config: &Config) {
    println!("Capture mode:     {}", config.capture.mode);
    println!("Arrangement:      {:?}", config.forwarding.arrangement);
    println!(
        "Forward moves:    {}",
        if config.forwarding.always_forward_mouse_move {
            "always"
        } else {
            "only while the desktop has focus"
        }
    );

    if config.displays.is_empty() {
        println!("Displays:         (live monitor enumeration)");
    } else {
        println!("Displays:");
        for d in &config.displays {
            println!("  {:<16} {}x{} at ({}, {})", d.name, d.width, d.height, d.x, d.y);
        }
    }

    if config.surfaces.is_empty() {
        println!("Surfaces:         none");
        return;
    }
    println!("Surfaces:");
    for s in &config.surfaces {
        let lookup = match (&s.handle, &s.window_title) {
            (Some(h), _) => format!("handle {h:#x}"),
            (None, Some(title)) => format!("title {title:?}"),
            (None, None) => "unresolvable".to_string(),
        };
        let input = if accepts_input(s.kind) {
            "accepts input"
        } else {
            "passive"
        };
        println!(
            "  {:<16} {:<14} on {:<12} {:<24} {input}",
            s.name,
            format!("{:?}", s.kind),
            s.display,
            lookup
        );
    }
}
