use serde::Serialize;

/// Non-data chart colours: legend, tooltip, grid and axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartChrome {
    pub legend_text: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_title: &'static str,
    pub tooltip_body: &'static str,
    pub tooltip_border: &'static str,
    pub grid_line: &'static str,
    pub y_tick: &'static str,
    pub x_tick: &'static str,
}

const LIGHT: ChartChrome = ChartChrome {
    legend_text: "#030213",
    tooltip_background: "#ffffff",
    tooltip_title: "#030213",
    tooltip_body: "#030213",
    tooltip_border: "#030213",
    grid_line: "rgba(0, 0, 0, 0.1)",
    y_tick: "#717182",
    x_tick: "#030213",
};

const DARK: ChartChrome = ChartChrome {
    legend_text: "#e4e4e7",
    tooltip_background: "#1b1c1f",
    tooltip_title: "#e4e4e7",
    tooltip_body: "#e4e4e7",
    tooltip_border: "#6366f1",
    grid_line: "#333741",
    y_tick: "#a1a1aa",
    x_tick: "#e4e4e7",
};

impl ChartChrome {
    pub fn for_theme(theme_is_dark: bool) -> Self {
        if theme_is_dark {
            DARK
        } else {
            LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartChrome;

    #[test]
    fn dark_tooltips_use_indigo_border() {
        assert_eq!(ChartChrome::for_theme(true).tooltip_border, "#6366f1");
        assert_eq!(ChartChrome::for_theme(false).tooltip_background, "#ffffff");
    }
}
