use crate::field::Field;
use std::sync::Arc;

/// Terminal palette used for colorizing whole log lines.
///
/// The `Dark*` colors (and `Black`, `Brown`, `Gray`) are the normal ANSI
/// colors; the remaining ones are their bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    DarkRed,
    DarkGreen,
    Brown,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Gray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI color for this palette entry; `None` keeps the terminal default.
    pub fn to_ansi(self) -> Option<colored::Color> {
        use colored::Color as Ansi;

        let ansi = match self {
            Color::Default => return None,
            Color::Black => Ansi::Black,
            Color::DarkRed => Ansi::Red,
            Color::DarkGreen => Ansi::Green,
            Color::Brown => Ansi::Yellow,
            Color::DarkBlue => Ansi::Blue,
            Color::DarkMagenta => Ansi::Magenta,
            Color::DarkCyan => Ansi::Cyan,
            Color::Gray => Ansi::White,
            Color::DarkGray => Ansi::BrightBlack,
            Color::Red => Ansi::BrightRed,
            Color::Green => Ansi::BrightGreen,
            Color::Yellow => Ansi::BrightYellow,
            Color::Blue => Ansi::BrightBlue,
            Color::Magenta => Ansi::BrightMagenta,
            Color::Cyan => Ansi::BrightCyan,
            Color::White => Ansi::BrightWhite,
        };
        Some(ansi)
    }
}

/// Foreground/background pair applied to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FgBgColor {
    pub fg: Color,
    pub bg: Color,
}

impl FgBgColor {
    pub const DEFAULT: FgBgColor = FgBgColor::new(Color::Default, Color::Default);

    pub const fn new(fg: Color, bg: Color) -> Self {
        FgBgColor { fg, bg }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Wrap `line` in SGR escapes. A default/default pair returns the line
    /// unchanged.
    pub fn paint(&self, line: &str) -> String {
        let mut codes = Vec::with_capacity(2);
        if let Some(fg) = self.fg.to_ansi() {
            codes.push(fg.to_fg_str());
        }
        if let Some(bg) = self.bg.to_ansi() {
            codes.push(bg.to_bg_str());
        }

        if codes.is_empty() {
            return line.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), line)
    }
}

/// Picks the colors for a record from its fields.
pub type ColorFn = Arc<dyn Fn(&[Field]) -> FgBgColor + Send + Sync>;

/// Default color selection, keyed on the first `level` field.
///
/// Unknown levels, non-string level values and records without a `level`
/// field all get [`FgBgColor::DEFAULT`].
pub fn color_for(fields: &[Field]) -> FgBgColor {
    let Some(level) = fields.iter().find(|f| f.key() == "level") else {
        return FgBgColor::DEFAULT;
    };

    match level.value.as_str() {
        Some("debug") => FgBgColor::new(Color::DarkGray, Color::Default),
        Some("info") => FgBgColor::new(Color::DarkGreen, Color::Default),
        Some("stage") => FgBgColor::new(Color::DarkBlue, Color::Default),
        Some("warn") => FgBgColor::new(Color::Yellow, Color::Default),
        Some("error") => FgBgColor::new(Color::Red, Color::Default),
        Some("crit") => FgBgColor::new(Color::Gray, Color::DarkRed),
        _ => FgBgColor::DEFAULT,
    }
}

/// [`color_for`] as a shareable [`ColorFn`].
pub fn default_color_fn() -> ColorFn {
    Arc::new(color_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    fn level(name: &str) -> FgBgColor {
        color_for(&fields!["ts" => "now", "level" => name.to_string()])
    }

    #[test]
    fn known_levels_map_to_their_colors() {
        assert_eq!(level("debug"), FgBgColor::new(Color::DarkGray, Color::Default));
        assert_eq!(level("info"), FgBgColor::new(Color::DarkGreen, Color::Default));
        assert_eq!(level("stage"), FgBgColor::new(Color::DarkBlue, Color::Default));
        assert_eq!(level("warn"), FgBgColor::new(Color::Yellow, Color::Default));
        assert_eq!(level("error"), FgBgColor::new(Color::Red, Color::Default));
        assert_eq!(level("crit"), FgBgColor::new(Color::Gray, Color::DarkRed));
    }

    #[test]
    fn unknown_or_missing_level_is_default() {
        assert_eq!(level("trace"), FgBgColor::DEFAULT);
        assert_eq!(level("INFO"), FgBgColor::DEFAULT);
        assert_eq!(color_for(&fields!["msg" => "no level here"]), FgBgColor::DEFAULT);
        assert_eq!(color_for(&fields!["level" => 3]), FgBgColor::DEFAULT);
        assert_eq!(color_for(&[]), FgBgColor::DEFAULT);
    }

    #[test]
    fn first_level_field_wins() {
        let fields = fields!["level" => "warn", "level" => "crit"];
        assert_eq!(color_for(&fields), FgBgColor::new(Color::Yellow, Color::Default));
    }

    #[test]
    fn paint_wraps_in_sgr_codes() {
        assert_eq!(FgBgColor::DEFAULT.paint("plain"), "plain");
        assert_eq!(
            FgBgColor::new(Color::Red, Color::Default).paint("x"),
            "\x1b[91mx\x1b[0m"
        );
        assert_eq!(
            FgBgColor::new(Color::Gray, Color::DarkRed).paint("x"),
            "\x1b[37;41mx\x1b[0m"
        );
    }
}
