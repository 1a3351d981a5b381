//! Interactive Example - A terminal shell driving the picker engine.
//!
//! A weight picker: arrow keys scroll one item at a time, each animated
//! scroll is played back as the sample stream a real surface would
//! produce, and the row re-renders from the per-cell focus flags. This is
//! exactly the collaborator role a platform scroll view plays.
//!
//! Run with: cargo run --example interactive

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, ClearType},
};

use snappick::{PickerHandle, PickerItem, PickerProps, SimSurface, horizontal_picker};

/// Animated scroll duration for one key press.
const SCROLL_MS: u64 = 160;

fn render(picker: &PickerHandle, status: &str, out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;

    for cell in picker.cells() {
        let label = format!(" {} ", cell.label());
        if cell.focused() {
            execute!(out, PrintStyledContent(label.bold().reverse()))?;
        } else {
            execute!(out, PrintStyledContent(label.dim()))?;
        }
    }
    execute!(out, Print(format!("  {status}")))?;
    out.flush()
}

/// Scroll one item left or right and pump the animation through the
/// engine, the way a real surface feeds offsets back during a fling.
fn nudge(picker: &PickerHandle, surface: &SimSurface, delta: i64) {
    let current = picker.selected_index().unwrap_or(0) as i64;
    let target = (current + delta).max(0) as usize;
    picker.select(target);

    for offset in surface.play(SCROLL_MS) {
        picker.offset_sample(offset);
    }
    picker.drain_effects();
}

fn main() -> io::Result<()> {
    let items: Vec<PickerItem> = (40..=120)
        .step_by(5)
        .map(|kg| PickerItem::number(kg as f64))
        .collect();

    let surface = Rc::new(SimSurface::new());
    let status: Rc<RefCell<String>> = Rc::new(RefCell::new("pick a weight".to_string()));

    let status_cb = status.clone();
    let (picker, cleanup) = horizontal_picker(
        PickerProps {
            initial_index: 6,
            visible_item_count: 7,
            on_change: Some(Rc::new(move |value, index| {
                *status_cb.borrow_mut() = format!("selected {value:?} (index {index})");
            })),
            ..PickerProps::new(items)
        },
        surface.clone(),
    );

    // One layout pass: 7 visible across 70 columns.
    picker.set_container_width(70.0);
    picker.offset_sample(surface.offset());
    picker.drain_effects();

    println!("left/right arrows move, q quits");

    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    render(&picker, status.borrow().as_str(), &mut out)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Left => nudge(&picker, &surface, -1),
                KeyCode::Right => nudge(&picker, &surface, 1),
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            }
        }
        render(&picker, status.borrow().as_str(), &mut out)?;
    }

    terminal::disable_raw_mode()?;
    println!();
    cleanup();
    Ok(())
}
