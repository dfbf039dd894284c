use imgui::{StyleColor, Ui};
use std::{
    borrow::Cow,
    ops::{Add, Sub},
};

macro_rules! config_error {
    (yes_no, $($desc: tt)*) => {
        error!(yes_no, "Configuration error", $($desc)*)
    };
    ($($desc: tt)*) => {
        error!("Configuration error", $($desc)*)
    };
}

#[allow(clippy::too_many_arguments)]
pub fn heading_options(
    ui: &Ui,
    text: &str,
    text_indent: f32,
    line_inner_margin: f32,
    line_outer_margin_start: f32,
    line_outer_margin_end: f32,
    line_thickness: f32,
    width: f32,
    remove_item_spacing: bool,
) {
    let half_line_thickness = line_thickness * 0.5;
    let height = ui.text_line_height();

    let mut cursor_pos = ui.cursor_screen_pos();
    if remove_item_spacing {
        cursor_pos[1] -= style!(ui, item_spacing)[1];
    }
    let mut end_pos = [cursor_pos[0], cursor_pos[1] + height];
    if !remove_item_spacing {
        end_pos[1] += style!(ui, item_spacing)[1];
    }

    let line_outer_bounds = sub2s(
        [
            cursor_pos[0] + line_outer_margin_start,
            cursor_pos[0] + width - line_outer_margin_end,
        ],
        half_line_thickness,
    );
    let separator_color = ui.style_color(StyleColor::Separator);

    let line_y = cursor_pos[1] + height * 0.5 - half_line_thickness;
    let inner_start_x = cursor_pos[0] + text_indent;

    ui.set_cursor_screen_pos([inner_start_x, cursor_pos[1]]);
    ui.text(text);
    ui.same_line_with_spacing(0.0, 0.0);
    let inner_end_x = ui.cursor_screen_pos()[0];

    let draw_list = ui.get_window_draw_list();
    draw_list
        .add_line(
            [line_outer_bounds[0], line_y],
            [
                inner_start_x - line_inner_margin - half_line_thickness,
                line_y,
            ],
            separator_color,
        )
        .thickness(line_thickness)
        .build();
    draw_list
        .add_line(
            [line_outer_bounds[1], line_y],
            [
                inner_end_x + line_inner_margin - half_line_thickness,
                line_y,
            ],
            separator_color,
        )
        .thickness(line_thickness)
        .build();
    ui.set_cursor_screen_pos(end_pos);
}

pub fn heading(ui: &Ui, text: &str, text_indent: f32, line_inner_margin: f32, line_thickness: f32) {
    heading_options(
        ui,
        text,
        text_indent,
        line_inner_margin,
        0.0,
        0.0,
        line_thickness,
        ui.content_region_avail()[0],
        false,
    );
}

/// A combo over string items; `current` is left untouched unless the user picks an item.
pub fn combo_index<S: AsRef<str>>(
    ui: &Ui,
    label: impl AsRef<str>,
    current: &mut usize,
    items: &[S],
) -> bool {
    ui.combo(label, current, items, |item: &S| Cow::Borrowed(item.as_ref()))
}

#[inline]
pub fn add2<T: Add<Output = T>>([a0, a1]: [T; 2], [b0, b1]: [T; 2]) -> [T; 2] {
    [a0 + b0, a1 + b1]
}

#[inline]
pub fn sub2s<T: Sub<Output = T> + Copy>([a0, a1]: [T; 2], b: T) -> [T; 2] {
    [a0 - b, a1 - b]
}
