use super::utils::combo_index;
use crate::panel::{
    binding::{Binding, ControlValue, FloatRange, Input, IntWidget, Shown},
    graphics::Tab,
    Control, ControlId, ControlKind,
};
use gsconf_core::{Origin, Store};
use imgui::{ItemHoveredFlags, SliderFlags, Ui};
use rfd::FileDialog;
use std::path::Path;

pub(super) struct Row {
    pub change: Option<(ControlId, ControlValue)>,
    pub help_requested: bool,
}

fn tooltip(ui: &Ui, text: &str) {
    if !text.is_empty() && ui.is_item_hovered_with_flags(ItemHoveredFlags::ALLOW_WHEN_DISABLED) {
        ui.tooltip_text(text);
    }
}

/// imgui formats are printf-style.
fn printf_suffix(suffix: &str) -> String {
    if suffix.is_empty() {
        String::new()
    } else {
        format!(" {}", suffix.replace('%', "%%"))
    }
}

fn float_format(range: &FloatRange) -> String {
    let decimals = if range.step >= 1.0 {
        0
    } else if range.step >= 0.1 {
        1
    } else {
        2
    };
    format!("%.{decimals}f{}", printf_suffix(range.suffix))
}

fn shown_index(shown: &Shown) -> usize {
    match shown.value {
        Input::Index(index) => index,
        _ => 0,
    }
}

fn shown_int(shown: &Shown) -> i32 {
    match shown.value {
        Input::Int(value) => value,
        _ => 0,
    }
}

fn folder(ui: &Ui, buffer: &mut String, width: f32) -> Option<Input> {
    let mut new_value = None;

    ui.set_next_item_width(
        width
            - (ui.calc_text_size("\u{f08e}")[0]
                + ui.calc_text_size("\u{f07c}")[0]
                + style!(ui, frame_padding)[0] * 4.0
                + style!(ui, item_spacing)[0] * 2.0),
    );
    if ui
        .input_text("##value", buffer)
        .auto_select_all(true)
        .enter_returns_true(true)
        .build()
    {
        new_value = Some(Input::Text(buffer.clone()));
    }

    ui.same_line();

    if ui.button("\u{f08e}") {
        let _ = opener::open(Path::new(buffer.as_str()));
    }
    tooltip(ui, "Open folder");

    ui.same_line();

    if ui.button("\u{f07c}") {
        if let Some(path) = FileDialog::new().pick_folder() {
            new_value = Some(Input::Text(path.to_string_lossy().into_owned()));
        }
    }
    tooltip(ui, "Browse...");

    new_value
}

/// Draws the editor for a bound value, returning what the user entered.
fn widget(
    ui: &Ui,
    binding: &Binding,
    shown: &Shown,
    width: f32,
    buffer: &mut String,
) -> Option<Input> {
    match binding {
        Binding::Bool(_) => {
            let mut value = matches!(shown.value, Input::Bool(true));
            ui.checkbox("##value", &mut value)
                .then_some(Input::Bool(value))
        }

        Binding::Int {
            widget: IntWidget::Combo(items),
            ..
        } => {
            let mut index = shown_index(shown);
            ui.set_next_item_width(width);
            combo_index(ui, "##value", &mut index, items).then_some(Input::Index(index))
        }

        Binding::Int {
            widget: IntWidget::Spin { min, max, suffix },
            ..
        } => {
            let mut value = shown_int(shown);
            let format = format!("%d{}", printf_suffix(suffix));
            ui.set_next_item_width(width);
            ui.input_scalar("##value", &mut value)
                .step(1)
                .display_format(&format)
                .build()
                .then(|| Input::Int(value.clamp(*min, *max)))
        }

        Binding::Int {
            widget: IntWidget::Slider { min, max },
            ..
        }
        | Binding::Normalized { min, max, .. } => {
            let mut value = shown_int(shown);
            ui.set_next_item_width(width);
            ui.slider_config("##value", *min, *max)
                .flags(SliderFlags::ALWAYS_CLAMP)
                .build(&mut value)
                .then_some(Input::Int(value))
        }

        Binding::Float { range, .. } => {
            let mut value = match shown.value {
                Input::Float(value) => value,
                _ => range.min,
            };
            let format = float_format(range);
            ui.set_next_item_width(width);
            ui.input_scalar("##value", &mut value)
                .step(range.step)
                .display_format(&format)
                .build()
                .then_some(Input::Float(value))
        }

        Binding::Text { items: None, .. } => {
            buffer.clear();
            if let Input::Text(text) = &shown.value {
                buffer.push_str(text);
            }
            ui.set_next_item_width(width);
            ui.input_text("##value", buffer)
                .auto_select_all(true)
                .enter_returns_true(true)
                .build()
                .then(|| Input::Text(buffer.clone()))
        }

        Binding::Text {
            items: Some(items), ..
        } => {
            let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
            let mut index = shown_index(shown);
            ui.set_next_item_width(width);
            combo_index(ui, "##value", &mut index, &labels).then_some(Input::Index(index))
        }

        Binding::Folder { .. } => {
            buffer.clear();
            if let Input::Text(text) = &shown.value {
                buffer.push_str(text);
            }
            folder(ui, buffer, width)
        }

        Binding::Enum { names, .. } => {
            let mut index = shown_index(shown);
            ui.set_next_item_width(width);
            combo_index(ui, "##value", &mut index, names).then_some(Input::Index(index))
        }
    }
}

/// A bound control's row contents: its editor, the game override toggle and the reset button.
fn bound(
    ui: &Ui,
    binding: &Binding,
    shown: &Shown,
    enabled: bool,
    per_game: bool,
    buffer: &mut String,
) -> Option<ControlValue> {
    let mut change = None;
    let inherited = per_game && shown.origin == Origin::Global;

    if per_game {
        let button_width = ui.calc_text_size("\u{f055}")[0]
            .max(ui.calc_text_size("\u{f056}")[0])
            + style!(ui, frame_padding)[0] * 2.0;
        let width = ui.content_region_avail()[0] - (button_width + style!(ui, item_spacing)[0]);
        ui.enabled(enabled && !inherited, || {
            change = widget(ui, binding, shown, width, buffer).map(ControlValue::Set);
        });
        tooltip(ui, if inherited { "Global setting" } else { "" });

        ui.same_line();
        let (label, tooltip_text) = if inherited {
            ("\u{f055}", "Add game override")
        } else {
            ("\u{f056}", "Remove game override")
        };
        ui.enabled(enabled, || {
            if ui.button_with_size(label, [button_width, 0.0]) {
                change = Some(if inherited {
                    ControlValue::Set(binding.override_value(shown))
                } else {
                    ControlValue::Inherit
                });
            }
            tooltip(ui, tooltip_text);
        });
    } else {
        ui.enabled(enabled, || {
            change = widget(ui, binding, shown, ui.content_region_avail()[0], buffer)
                .map(ControlValue::Set);
        });
    }

    ui.table_next_column();
    ui.enabled(enabled && !inherited, || {
        if ui.button("\u{f1f8}") {
            change = Some(if per_game {
                ControlValue::Set(binding.read(&Store::default()).value)
            } else {
                ControlValue::Inherit
            });
        }
        tooltip(ui, "Set default");
    });

    change
}

pub(super) fn draw(
    ui: &Ui,
    control: &Control<Tab>,
    enabled: bool,
    per_game: bool,
    has_help: bool,
    buffer: &mut String,
) -> Row {
    let _id = ui.push_id(control.id.0);
    let mut change = None;

    ui.table_next_row();

    ui.table_next_column();
    ui.align_text_to_frame_padding();
    if !control.label.is_empty() {
        ui.text(format!("{}: ", control.label));
    }

    ui.table_next_column();
    match &control.kind {
        ControlKind::Bound { binding, shown } => {
            change = bound(ui, binding, shown, enabled, per_game, buffer)
                .map(|value| (control.id, value));
        }
        ControlKind::Choice(choice) => {
            let mut index = choice.selected;
            ui.enabled(enabled, || {
                ui.set_next_item_width(ui.content_region_avail()[0]);
                if combo_index(ui, "##value", &mut index, &choice.items) {
                    change = Some((control.id, ControlValue::Set(Input::Index(index))));
                }
            });
            ui.table_next_column();
        }
        ControlKind::Label(text) => {
            ui.align_text_to_frame_padding();
            ui.text(text);
            ui.table_next_column();
        }
        ControlKind::Group => {
            ui.table_next_column();
        }
    }

    ui.table_next_column();
    let mut help_requested = false;
    if has_help {
        if ui.button("\u{f059}") {
            help_requested = true;
        }
        if ui.is_item_hovered() {
            ui.tooltip_text("Help");
        }
    }

    Row {
        change,
        help_requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imgui_formats_escape_percent_suffixes() {
        assert_eq!(printf_suffix("%"), " %%");
        assert_eq!(
            float_format(&FloatRange {
                min: 10.0,
                max: 300.0,
                step: 0.01,
                suffix: "Hz",
            }),
            "%.2f Hz"
        );
        assert_eq!(
            float_format(&FloatRange {
                min: 10.0,
                max: 300.0,
                step: 1.0,
                suffix: "%",
            }),
            "%.0f %%"
        );
    }
}
