//! Plain-text rendering of a [`DashboardView`].

use std::fmt::Write;

use crate::cli::output::{apply_style, paint_hex, MessageKind, OutputPreferences};
use crate::core::services::DashboardView;

const BAR_WIDTH: usize = 30;
const BAR_GLYPH: char = '█';
const LABEL_WIDTH: usize = 16;

pub fn render_text(view: &DashboardView, prefs: &OutputPreferences) -> String {
    let mut out = String::new();
    let style = |kind, text: &str| apply_style(kind, text, prefs);

    let _ = writeln!(out, "{}", style(MessageKind::Section, "Financial Dashboard"));
    let cards = &view.cards;
    let savings_kind = if cards.positive_savings {
        MessageKind::Accent
    } else {
        MessageKind::Negative
    };
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}  {}",
        "Total Income",
        style(MessageKind::Positive, cards.income.as_str()),
        style(MessageKind::Muted, cards.caption)
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}  {}",
        "Total Expenses",
        style(MessageKind::Negative, cards.expenses.as_str()),
        style(MessageKind::Muted, cards.caption)
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}  [{}]",
        "Net Savings",
        style(savings_kind, cards.net_savings.as_str()),
        cards.savings_badge
    );

    let _ = writeln!(out, "\n{}", style(MessageKind::Section, "Weekly Spending"));
    if view.weekly.has_data {
        let max = view
            .weekly
            .bars
            .iter()
            .map(|bar| bar.total)
            .fold(0.0_f64, f64::max);
        for bar in &view.weekly.bars {
            let glyphs = scaled_width(bar.total, max);
            let body: String = std::iter::repeat(BAR_GLYPH).take(glyphs).collect();
            let padding = " ".repeat(BAR_WIDTH - glyphs);
            let _ = writeln!(
                out,
                "{} {}{} {}",
                bar.label,
                paint_hex(&body, &bar.color, prefs),
                padding,
                bar.amount
            );
        }
    } else {
        let _ = writeln!(out, "{}", style(MessageKind::Muted, "No spending data"));
    }
    let _ = writeln!(
        out,
        "Weekly Total: {}  Avg/Day: {}",
        view.weekly.total, view.weekly.average
    );

    let _ = writeln!(
        out,
        "\n{}",
        style(
            MessageKind::Section,
            format!("Spending by Category ({})", view.categories.chart_type).as_str()
        )
    );
    if view.categories.has_data {
        for slice in &view.categories.slices {
            let dot = paint_hex("●", &slice.color, prefs);
            let _ = writeln!(
                out,
                "{} {:<LABEL_WIDTH$}{:>10}  {:>6}%",
                dot, slice.share.category, slice.amount, slice.share.percentage
            );
        }
    } else {
        let _ = writeln!(out, "{}", style(MessageKind::Muted, "No category data"));
    }

    let _ = writeln!(out, "\n{}", style(MessageKind::Section, "Financial Health"));
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Savings Rate", view.health.savings_rate);
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Expense Ratio", view.health.expense_ratio);
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Budget Status", view.health.status_label);

    let _ = writeln!(out, "\n{}", style(MessageKind::Section, "Monthly Overview"));
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Daily Average", view.overview.daily_average);
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Top Category", view.overview.top_category);
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Peak Day", view.overview.peak_day);
    out
}

fn scaled_width(total: f64, max: f64) -> usize {
    if max <= 0.0 || total <= 0.0 {
        return 0;
    }
    let width = (total / max * BAR_WIDTH as f64).round() as usize;
    width.clamp(1, BAR_WIDTH)
}
