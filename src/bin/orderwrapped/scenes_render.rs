//! Turns one scene plus its reveal progress into styled lines.
//!
//! Each variant mirrors its web slide: elements appear as `current_step`
//! passes their stage, and the busiest-day quips arrive through the
//! typewriter. Missing data renders a fallback notice, never a crash.

use orderwrapped::scene::{Scene, SceneKind, SummarySnapshot};
use orderwrapped::stats::Order;
use orderwrapped::steps::StepController;
use orderwrapped::vibe::VibeResult;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::{self, ACCENT_YELLOW, DIMMED};

const MISSING_NOTICE: &str = "(nothing in the data for this one)";

fn title(text: &str, scene: &Scene) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme::scene_accent(&scene.kind))
            .add_modifier(Modifier::BOLD),
    ))
}

fn plain(text: impl Into<String>) -> Line<'static> {
    Line::from(text.into())
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(DIMMED)))
}

fn highlight(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(ACCENT_YELLOW).add_modifier(Modifier::BOLD),
    ))
}

fn order_card(order: &Order) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(restaurant) = order.restaurant_name.as_deref() {
        lines.push(highlight(restaurant.to_string()));
    }
    match (order.date(), order.time_of_day()) {
        (Some(date), Some(time)) => lines.push(plain(format!("{date} at {time}"))),
        (Some(date), None) => lines.push(plain(date.to_string())),
        _ => {}
    }
    if order.total > 0.0 {
        lines.push(plain(format!("${:.2}", order.total)));
    }
    if lines.is_empty() {
        lines.push(dim(MISSING_NOTICE));
    }
    lines
}

/// Render the scene body. `steps` is `None` only after the show has ended,
/// at which point everything is shown.
pub(crate) fn scene_lines(
    scene: &Scene,
    steps: Option<&StepController>,
    vibe: Option<&VibeResult>,
) -> Vec<Line<'static>> {
    let step = steps.map_or(usize::MAX, StepController::current_step);
    let mut lines: Vec<Line<'static>> = Vec::new();

    match &scene.kind {
        SceneKind::Intro { name } => {
            if step == 0 {
                let greeting = match name {
                    Some(name) => format!("Hi {name} 👋"),
                    None => "Hi 👋".to_string(),
                };
                lines.push(title(&greeting, scene));
            } else {
                lines.push(title("Your Mobile Order Wrapped is Here 🎉", scene));
                lines.push(plain(""));
                lines.push(plain("Let's take a look at what you've been"));
                lines.push(plain("craving all semester."));
            }
        }
        SceneKind::UniqueItems { total_unique_items } => {
            if step >= 1 {
                lines.push(title("You tried", scene));
            }
            if step >= 2 {
                lines.push(highlight(format!("{total_unique_items}")));
                lines.push(plain("different menu items this semester."));
            }
        }
        SceneKind::TopItems { items } => {
            lines.push(title("My Top Cravings", scene));
            lines.push(plain(""));
            if items.is_empty() {
                lines.push(dim(MISSING_NOTICE));
            }
            for entry in items.iter().take(step) {
                lines.push(highlight(entry.item.clone()));
                lines.push(plain(format!("ordered {} times", entry.count)));
                lines.push(plain(""));
            }
        }
        SceneKind::FavoriteRestaurant {
            unique_restaurants,
            name,
        } => {
            if step >= 1 {
                lines.push(title("You made the rounds...", scene));
            }
            if step >= 2 {
                lines.push(plain(format!(
                    "{unique_restaurants} different restaurants fed you."
                )));
                lines.push(plain(""));
            }
            if step >= 3 {
                lines.push(plain("But one kept you coming back:"));
                match name {
                    Some(name) => lines.push(highlight(name.clone())),
                    None => lines.push(dim(MISSING_NOTICE)),
                }
            }
        }
        SceneKind::TopRestaurants { ranked } => {
            if step >= 1 {
                lines.push(title("Most Visited", scene));
                lines.push(plain(""));
            }
            if ranked.is_empty() && step >= 1 {
                lines.push(dim(MISSING_NOTICE));
            }
            for (index, (name, count)) in ranked.iter().enumerate() {
                if step >= index + 2 {
                    lines.push(plain(format!("{}. {name} — {count} visits", index + 1)));
                }
            }
        }
        SceneKind::BusiestDay { date, order_count } => {
            if step >= 1 {
                lines.push(title("My Busiest Day", scene));
                lines.push(plain(""));
            }
            if step >= 2 {
                match date {
                    Some(date) => lines.push(highlight(date.clone())),
                    None => lines.push(dim(MISSING_NOTICE)),
                }
            }
            if step >= 3 {
                lines.push(plain(format!("{order_count} orders")));
                lines.push(plain(""));
            }
            if let Some(steps) = steps {
                for line_index in 0..2 {
                    let typed = steps.revealed_text(line_index);
                    if !typed.is_empty() {
                        lines.push(highlight(typed.to_string()));
                    }
                }
            }
        }
        SceneKind::BusiestDayOrders { orders } => {
            lines.push(title("Every order that day", scene));
            lines.push(plain(""));
            if orders.is_empty() {
                lines.push(dim(MISSING_NOTICE));
            }
            for order in orders.iter().take(step) {
                let restaurant = order.restaurant_name.as_deref().unwrap_or("(unknown)");
                match order.time_of_day() {
                    Some(time) => lines.push(plain(format!("{time}  {restaurant}"))),
                    None => lines.push(plain(restaurant.to_string())),
                }
            }
        }
        SceneKind::EarliestOrder { order } => {
            if step >= 1 {
                lines.push(title("Your earliest order", scene));
                lines.push(plain(""));
            }
            if step >= 2 {
                match order {
                    Some(order) => lines.extend(order_card(order)),
                    None => lines.push(dim(MISSING_NOTICE)),
                }
            }
        }
        SceneKind::LatestOrder { order } => {
            if step >= 1 {
                lines.push(title("Your latest order", scene));
                lines.push(plain(""));
            }
            if step >= 2 {
                match order {
                    Some(order) => lines.extend(order_card(order)),
                    None => lines.push(dim(MISSING_NOTICE)),
                }
            }
        }
        SceneKind::MostExpensiveOrder { order } => {
            if step >= 1 {
                lines.push(title("The Big Spender Moment", scene));
                lines.push(plain(""));
            }
            match order {
                Some(order) => {
                    if step >= 2 {
                        lines.extend(order_card(order));
                        lines.push(plain(""));
                    }
                    for item in order.items.iter().take(step.saturating_sub(2)) {
                        let name = item.name.as_deref().unwrap_or("(unnamed item)");
                        lines.push(plain(format!("· {name}")));
                    }
                }
                None => {
                    if step >= 2 {
                        lines.push(dim(MISSING_NOTICE));
                    }
                }
            }
        }
        SceneKind::Vibe => {
            if step >= 1 {
                lines.push(title("Your Vibe", scene));
                lines.push(plain(""));
            }
            if step >= 2 {
                match vibe.and_then(|vibe| vibe.vibe.as_deref()) {
                    Some(sentence) => lines.push(vibe_line(sentence, vibe)),
                    None => lines.push(dim("the vibe oracle is still cooking...")),
                }
            }
        }
        SceneKind::End => {
            lines.push(title("That's a wrap!", scene));
            if step >= 1 {
                lines.push(plain(""));
                lines.push(plain("See you next semester."));
            }
        }
        SceneKind::Summary(summary) => {
            lines.extend(summary_card(summary, scene));
        }
    }
    lines
}

/// Style the vibe sentence word by word, coloring words the backend mapped
/// to highlight colors.
fn vibe_line(sentence: &str, vibe: Option<&VibeResult>) -> Line<'static> {
    let colors = vibe.map(|vibe| &vibe.colors);
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (index, word) in sentence.split(' ').enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let key = word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
        let color = colors.and_then(|colors| {
            colors
                .iter()
                .find(|(name, _)| name.to_lowercase() == key)
                .and_then(|(_, hex)| theme::parse_hex_color(hex))
        });
        match color {
            Some(color) => spans.push(Span::styled(
                word.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            None => spans.push(Span::raw(word.to_string())),
        }
    }
    Line::from(spans)
}

fn summary_card(summary: &SummarySnapshot, scene: &Scene) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let heading = match summary.name.as_deref() {
        Some(name) => format!("{name}'s Semester, Wrapped"),
        None => "Your Semester, Wrapped".to_string(),
    };
    lines.push(title(&heading, scene));
    lines.push(plain(""));
    lines.push(plain(format!("{} items ordered", summary.total_items_ordered)));
    lines.push(plain(format!("{} unique items", summary.total_unique_items)));
    lines.push(plain(format!(
        "{} restaurants visited",
        summary.unique_restaurants
    )));
    if let Some(top_restaurant) = summary.top_restaurant.as_deref() {
        lines.push(highlight(format!("Top spot: {top_restaurant}")));
    }
    if let Some(top_item) = summary.top_item.as_deref() {
        lines.push(highlight(format!("Top craving: {top_item}")));
    }
    lines
}
