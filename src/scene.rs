//! Scene descriptors and the fixed scene list for one presentation.
//!
//! Scenes are immutable once built: content plus a duration. Durations are
//! mostly fixed, with two derived from content size (one beat per busiest-day
//! order, extra time per line item on the most expensive receipt).

use std::time::Duration;

use crate::stats::{DiningStats, ItemCount, Order};

/// How many busiest-day orders we replay at most.
pub const BUSIEST_ORDERS_CAP: usize = 12;
/// Beat per revealed busiest-day order.
const BUSIEST_ORDER_BEAT_MS: u64 = 1600;
/// Extra reveal time per line item on the most expensive order.
const EXPENSIVE_ITEM_BEAT_MS: u64 = 1250;

/// Closed set of scene contents. The scheduler only ever sees "has a duration
/// and can be paused"; this enum is for step planning and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneKind {
    Intro { name: Option<String> },
    UniqueItems { total_unique_items: u32 },
    TopItems { items: Vec<ItemCount> },
    FavoriteRestaurant { unique_restaurants: u32, name: Option<String> },
    TopRestaurants { ranked: Vec<(String, u32)> },
    BusiestDay { date: Option<String>, order_count: u32 },
    BusiestDayOrders { orders: Vec<Order> },
    EarliestOrder { order: Option<Order> },
    LatestOrder { order: Option<Order> },
    MostExpensiveOrder { order: Option<Order> },
    /// Content arrives late from the vibe collaborator; renders a fallback
    /// until (and unless) it does.
    Vibe,
    End,
    Summary(SummarySnapshot),
}

/// The handful of figures the closing summary card shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarySnapshot {
    pub name: Option<String>,
    pub total_items_ordered: u32,
    pub total_unique_items: u32,
    pub unique_restaurants: u32,
    pub top_restaurant: Option<String>,
    pub top_item: Option<String>,
}

/// One timed unit of the presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub kind: SceneKind,
    pub duration: Duration,
}

impl Scene {
    fn new(kind: SceneKind, millis: u64) -> Self {
        Self {
            kind,
            duration: Duration::from_millis(millis),
        }
    }
}

/// Build the ordered scene list from the statistics record. The list is fixed
/// for the lifetime of the presentation and always non-empty; missing data
/// yields fallback content inside a scene, never a shorter show.
pub fn build_scenes(stats: &DiningStats) -> Vec<Scene> {
    let mut top_items = stats.item_counts.clone();
    // The parser pre-sorts, but don't depend on it.
    top_items.sort_by(|a, b| b.count.cmp(&a.count));
    top_items.truncate(3);

    let mut ranked_restaurants = stats.ranked_restaurants();
    ranked_restaurants.truncate(3);

    let mut busiest_orders = stats.busiest_day_orders.clone();
    busiest_orders.truncate(BUSIEST_ORDERS_CAP);
    let busiest_orders_ms = (busiest_orders.len() as u64 * BUSIEST_ORDER_BEAT_MS).max(6000);

    let expensive_items = stats
        .most_expensive_order
        .as_ref()
        .map_or(0, |order| order.items.len()) as u64;
    let expensive_ms = (14_000 + expensive_items * EXPENSIVE_ITEM_BEAT_MS).max(16_000);

    let summary = SummarySnapshot {
        name: stats.recipient_name.clone(),
        total_items_ordered: stats.total_items_ordered,
        total_unique_items: stats.total_unique_items,
        unique_restaurants: stats.unique_restaurants,
        top_restaurant: stats.top_restaurant.name.clone(),
        top_item: top_items.first().map(|entry| entry.item.clone()),
    };

    vec![
        Scene::new(
            SceneKind::Intro {
                name: stats.recipient_name.clone(),
            },
            8000,
        ),
        Scene::new(
            SceneKind::UniqueItems {
                total_unique_items: stats.total_unique_items,
            },
            7750,
        ),
        Scene::new(SceneKind::TopItems { items: top_items }, 12_500),
        Scene::new(
            SceneKind::FavoriteRestaurant {
                unique_restaurants: stats.unique_restaurants,
                name: stats.top_restaurant.name.clone(),
            },
            14_000,
        ),
        Scene::new(
            SceneKind::TopRestaurants {
                ranked: ranked_restaurants,
            },
            10_000,
        ),
        Scene::new(
            SceneKind::BusiestDay {
                date: stats.busiest_day.date.clone(),
                order_count: stats.busiest_day.order_count,
            },
            10_000,
        ),
        Scene::new(
            SceneKind::BusiestDayOrders {
                orders: busiest_orders,
            },
            busiest_orders_ms,
        ),
        Scene::new(
            SceneKind::EarliestOrder {
                order: stats.earliest_order_by_time.clone(),
            },
            7000,
        ),
        Scene::new(
            SceneKind::LatestOrder {
                order: stats.latest_order_by_time.clone(),
            },
            7000,
        ),
        Scene::new(
            SceneKind::MostExpensiveOrder {
                order: stats.most_expensive_order.clone(),
            },
            expensive_ms,
        ),
        Scene::new(SceneKind::Vibe, 15_000),
        Scene::new(SceneKind::End, 10_000),
        Scene::new(SceneKind::Summary(summary), 10_000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::OrderItem;

    #[test]
    fn empty_stats_still_yields_the_full_show() {
        let scenes = build_scenes(&DiningStats::default());
        assert_eq!(scenes.len(), 13);
        assert!(scenes.iter().all(|scene| !scene.duration.is_zero()));
        assert!(matches!(scenes[0].kind, SceneKind::Intro { .. }));
        assert!(matches!(scenes.last().unwrap().kind, SceneKind::Summary(_)));
    }

    #[test]
    fn busiest_orders_duration_scales_with_count_and_is_capped() {
        let mut stats = DiningStats::default();
        stats.busiest_day_orders = vec![Order::default(); 20];
        let scenes = build_scenes(&stats);
        let scene = scenes
            .iter()
            .find(|scene| matches!(scene.kind, SceneKind::BusiestDayOrders { .. }))
            .unwrap();
        // Capped at 12 orders.
        assert_eq!(scene.duration, Duration::from_millis(12 * 1600));
        if let SceneKind::BusiestDayOrders { orders } = &scene.kind {
            assert_eq!(orders.len(), BUSIEST_ORDERS_CAP);
        }
    }

    #[test]
    fn busiest_orders_duration_has_a_floor() {
        let mut stats = DiningStats::default();
        stats.busiest_day_orders = vec![Order::default(); 2];
        let scenes = build_scenes(&stats);
        let scene = scenes
            .iter()
            .find(|scene| matches!(scene.kind, SceneKind::BusiestDayOrders { .. }))
            .unwrap();
        assert_eq!(scene.duration, Duration::from_millis(6000));
    }

    #[test]
    fn expensive_order_duration_grows_per_item() {
        let mut stats = DiningStats::default();
        stats.most_expensive_order = Some(Order {
            items: vec![OrderItem::default(); 4],
            ..Order::default()
        });
        let scenes = build_scenes(&stats);
        let scene = scenes
            .iter()
            .find(|scene| matches!(scene.kind, SceneKind::MostExpensiveOrder { .. }))
            .unwrap();
        assert_eq!(scene.duration, Duration::from_millis(14_000 + 4 * 1250));
    }

    #[test]
    fn top_items_keeps_the_best_three() {
        let mut stats = DiningStats::default();
        stats.item_counts = vec![
            ItemCount { item: "c".into(), count: 1 },
            ItemCount { item: "a".into(), count: 9 },
            ItemCount { item: "b".into(), count: 5 },
            ItemCount { item: "d".into(), count: 3 },
        ];
        let scenes = build_scenes(&stats);
        let scene = scenes
            .iter()
            .find(|scene| matches!(scene.kind, SceneKind::TopItems { .. }))
            .unwrap();
        if let SceneKind::TopItems { items } = &scene.kind {
            let names: Vec<_> = items.iter().map(|i| i.item.as_str()).collect();
            assert_eq!(names, ["a", "b", "d"]);
        }
    }
}
