pub const PRIMARY_COLOR: &str = "#3f51b5";
pub const SECONDARY_COLOR: &str = "#f50057";
pub const FONT_FAMILY: &str = "\"Open Sans\", sans-serif";

pub fn root_container_style() -> String {
    format!(
        "font-family: {FONT_FAMILY}; min-height: 100vh; display: flex; flex-direction: column; padding: 0 16px;"
    )
}

pub fn nav_style() -> String {
    format!(
        "display: flex; gap: 12px; align-items: center; padding: 8px 0; border-bottom: 2px solid {PRIMARY_COLOR};"
    )
}

pub fn table_style() -> &'static str {
    "border-collapse: collapse; width: 100%; background: #fff;"
}

pub fn table_header_cell_style(active: bool) -> String {
    let color = if active { SECONDARY_COLOR } else { PRIMARY_COLOR };
    format!(
        "cursor: pointer; user-select: none; text-align: left; padding: 6px 8px; color: {color}; border-bottom: 1px solid #ddd;"
    )
}

pub fn table_cell_style() -> &'static str {
    "padding: 6px 8px; border-bottom: 1px solid #eee;"
}

pub fn button_style(primary: bool) -> String {
    let background = if primary { PRIMARY_COLOR } else { "#fff" };
    let color = if primary { "#fff" } else { PRIMARY_COLOR };
    format!(
        "background: {background}; color: {color}; border: 1px solid {PRIMARY_COLOR}; border-radius: 4px; padding: 4px 10px; margin-right: 6px;"
    )
}

pub fn modal_style() -> &'static str {
    "margin-top: 16px; padding: 12px 16px; border: 1px solid #ddd; border-radius: 6px; max-width: 420px; display: flex; flex-direction: column; gap: 8px;"
}

pub fn status_style(is_error: bool) -> String {
    let color = if is_error { SECONDARY_COLOR } else { "#555" };
    format!("color: {color}; min-height: 1.2em;")
}

pub fn player_style() -> &'static str {
    "margin-top: 12px; max-width: 720px; background: #000;"
}
