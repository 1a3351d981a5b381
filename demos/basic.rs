//! Basic Example - The selection pipeline end to end, headless.
//!
//! Builds a weekday picker against the simulated scroll surface, measures
//! it, drags across a few items, then taps one. Every change and haptic
//! notification is printed as it is drained.
//!
//! Run with: cargo run --example basic

use std::rc::Rc;

use snappick::{PickerItem, PickerProps, SimSurface, horizontal_picker};

fn main() {
    let items: Vec<PickerItem> = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .into_iter()
        .map(PickerItem::text)
        .collect();

    let surface = Rc::new(SimSurface::new());
    let (picker, cleanup) = horizontal_picker(
        PickerProps {
            initial_index: 2,
            visible_item_count: 7,
            on_change: Some(Rc::new(|value, index| {
                println!("  changed -> {value:?} (index {index})");
            })),
            on_haptic_feedback: Some(Rc::new(|| {
                println!("  haptic tick");
            })),
            ..PickerProps::new(items)
        },
        surface.clone(),
    );

    // Layout pass: 350 units wide, 7 visible -> items are 50 wide.
    picker.set_container_width(350.0);
    let geometry = picker.geometry();
    println!(
        "geometry: item_width={} side_padding={} snaps={:?}",
        geometry.item_width, geometry.side_padding, geometry.snap_offsets
    );
    println!(
        "initial settle command: {:?}",
        surface.last_command().unwrap()
    );

    // The settle offset flows back like any sample; equal to the initial
    // index, so it establishes a silent baseline.
    picker.offset_sample(surface.offset());
    println!("drag from Wed to Sat:");

    // A drag is just a dense stream of offsets.
    let mut offset = surface.offset();
    while offset < 250.0 {
        offset += 10.0;
        picker.offset_sample(offset);
    }
    picker.drain_effects();

    println!("tap Mon:");
    picker.cells()[0].select();
    for offset in surface.play(240) {
        picker.offset_sample(offset);
    }
    picker.drain_effects();

    let row: Vec<String> = picker
        .cells()
        .iter()
        .map(|cell| {
            if cell.focused() {
                format!("[{}]", cell.label())
            } else {
                format!(" {} ", cell.label())
            }
        })
        .collect();
    println!("row: {}", row.join(""));

    cleanup();
}
