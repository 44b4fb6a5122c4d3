//! Screen colours, resolved once from the theme settings.

use ratatui::style::Color;

use crate::kernel::services::ports::ThemeSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub rating_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            accent_fg: Color::Indexed(3),       // Yellow
            header_fg: Color::Indexed(6),
            muted_fg: Color::Indexed(8),
            error_fg: Color::Indexed(1), // Red
            selected_bg: Color::Indexed(8),
            selected_fg: Color::Indexed(15), // White
            dialog_bg: Color::Reset,
            dialog_fg: Color::Indexed(15),
            rating_fg: Color::Indexed(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("NELI_HR_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    support_from_env(&colorterm, &term)
}

fn support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let truecolor = |s: &str| s.contains("truecolor") || s.contains("24bit");
    if truecolor(colorterm) || truecolor(term) {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Unset or unparsable entries keep the current colour.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        fn set(slot: &mut Color, value: &Option<String>) {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }

        set(&mut self.focus_border, &settings.focus_border);
        set(&mut self.inactive_border, &settings.inactive_border);
        set(&mut self.accent_fg, &settings.accent_fg);
        set(&mut self.header_fg, &settings.header_fg);
        set(&mut self.muted_fg, &settings.muted_fg);
        set(&mut self.error_fg, &settings.error_fg);
        set(&mut self.selected_bg, &settings.selected_bg);
        set(&mut self.selected_fg, &settings.selected_fg);
        set(&mut self.dialog_bg, &settings.dialog_bg);
        set(&mut self.dialog_fg, &settings.dialog_fg);
        set(&mut self.rating_fg, &settings.rating_fg);
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for slot in [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.accent_fg,
            &mut self.header_fg,
            &mut self.muted_fg,
            &mut self.error_fg,
            &mut self.selected_bg,
            &mut self.selected_fg,
            &mut self.dialog_bg,
            &mut self.dialog_fg,
            &mut self.rating_fg,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (_, value) => value,
    }
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

fn distance_sq((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> u32 {
    let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
    d(r1, r2) + d(g1, g2) + d(b1, b2)
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| distance_sq((r, g, b), **rgb))
        .map(|(ix, _)| ix as u8)
        .unwrap_or(7)
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (16u8..=255)
        .min_by_key(|ix| distance_sq((r, g, b), ansi256_index_to_rgb(*ix)))
        .unwrap_or(7)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }
    if index <= 231 {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        return (
            level[(offset / 36) as usize],
            level[((offset / 6) % 6) as usize],
            level[(offset % 6) as usize],
        );
    }
    let gray = 8 + (index - 232) * 10;
    (gray, gray, gray)
}

/// `#rrggbb` or a named colour (`cyan`, `dark_gray`, `light_red`, ...).
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().replace('-', "_").as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" | "darkgray" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
