//! Scripted walk-through of three password fields.
//!
//! - A field whose "allow plain text" flag is switched on and off
//! - A field revealed by an external switch, with the toggle button hidden
//! - A field whose toggle button is clicked like a user would
//!
//! Run with `RUST_LOG=secure_field=debug` to see every swap.

use secure_field::prelude::*;
use secure_field::widget::{KeyboardModifiers, MouseButton, MousePressEvent, MouseReleaseEvent};
use tracing_subscriber::EnvFilter;

fn paint(label: &str, field: &SecureTextField) {
    let mut renderer = RecordingRenderer::new();
    {
        let mut ctx = PaintContext::new(&mut renderer, Rect::new(0.0, 0.0, 220.0, 30.0));
        field.paint(&mut ctx);
    }
    tracing::info!(
        field = label,
        visibility = ?field.visibility(),
        strategy = ?field.cell_strategy(),
        display = %field.display_text(),
        button = field.has_toggle_button(),
        commands = renderer.commands().len(),
        "painted"
    );
}

fn click(field: &mut SecureTextField) {
    let Some(rect) = field.button_rect() else {
        tracing::warn!("no toggle button to click");
        return;
    };
    let pos = rect.center();
    field.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    )));
    field.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    )));
}

fn main() -> Result<(), SecureFieldError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Field 1: plain text allowed and disallowed again.
    let mut allow_field = SecureTextField::new()
        .with_placeholder("Password")
        .with_text("correct horse");
    allow_field.set_geometry(Rect::new(0.0, 0.0, 220.0, 30.0));
    allow_field.text_changed.connect(|text| {
        tracing::info!(field = "allow", len = text.len(), "text changed");
    });
    paint("allow", &allow_field);

    allow_field.set_allow_plain_text(true);
    allow_field.set_visibility(Visibility::PlainText)?;
    paint("allow", &allow_field);

    allow_field.set_allow_plain_text(false);
    paint("allow", &allow_field);
    if let Err(err) = allow_field.set_visibility(Visibility::PlainText) {
        tracing::info!(field = "allow", %err, "reveal refused");
    }

    // Field 2: no embedded button; an external switch drives the visibility.
    let options = FieldOptions::default()
        .with_allow_plain_text(true)
        .with_show_toggle_button(false);
    let mut switch_field = SecureTextField::with_options(&options).with_text("battery staple");
    switch_field.set_geometry(Rect::new(0.0, 0.0, 220.0, 30.0));
    for visibility in [Visibility::PlainText, Visibility::Secure] {
        switch_field.set_visibility(visibility)?;
        paint("switch", &switch_field);
    }

    // Field 3: the user clicks the eye.
    let options = FieldOptions::default().with_allow_plain_text(true);
    let mut button_field = SecureTextField::with_options(&options).with_text("hunter2");
    button_field.set_geometry(Rect::new(0.0, 0.0, 220.0, 30.0));
    button_field.visibility_changed.connect(|v| {
        tracing::info!(field = "button", visibility = ?v, "visibility changed");
    });
    click(&mut button_field);
    paint("button", &button_field);
    click(&mut button_field);
    paint("button", &button_field);

    button_field.set_enabled(false);
    click(&mut button_field);
    tracing::info!(
        field = "button",
        visibility = ?button_field.visibility(),
        swaps = button_field.swap_count(),
        "click on disabled field ignored"
    );

    Ok(())
}
