use crossterm::style::Color;

pub struct Theme {
    pub heading: Color, // Blue
    pub label: Color,   // Grey
    pub value: Color,   // Orange
    pub error: Color,   // Red
    pub channel: Color, // Yellow
}

pub const DEFAULT_THEME: Theme = Theme {
    heading: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    label: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    value: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    channel: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    },
};
