//! 首次启动时写入的演示数据

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use trip_planner_core::types::{
    Destination, DestinationId, EventId, EventType, Offer, OfferGroup, OfferId, Picture,
    TripEvent,
};

use super::event_store::TripData;

fn destination(id: &str, name: &str, description: &str) -> Destination {
    Destination {
        id: DestinationId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        pictures: vec![Picture {
            src: format!("https://loremflickr.com/248/152?{id}"),
            description: format!("{name} city centre"),
        }],
    }
}

fn offer(id: &str, title: &str, price: u32) -> Offer {
    Offer {
        id: OfferId::from(id),
        title: title.to_string(),
        price,
    }
}

fn destinations() -> Vec<Destination> {
    vec![
        destination(
            "amsterdam",
            "Amsterdam",
            "Canals, bicycles and narrow gabled houses.",
        ),
        destination(
            "geneva",
            "Geneva",
            "A city in Switzerland at the southern tip of Lake Geneva.",
        ),
        destination(
            "chamonix",
            "Chamonix",
            "A resort at the base of Mont Blanc, the highest summit in the Alps.",
        ),
        destination("paris", "Paris", "Museums, boulevards and cafés."),
        destination("rome", "Rome", "Layers of history on seven hills."),
    ]
}

fn offers() -> Vec<OfferGroup> {
    let group = |event_type, offers| OfferGroup { event_type, offers };
    vec![
        group(
            EventType::Taxi,
            vec![
                offer("taxi-business", "Upgrade to a business class", 120),
                offer("taxi-radio", "Choose the radio station", 60),
            ],
        ),
        group(
            EventType::Flight,
            vec![
                offer("flight-luggage", "Add luggage", 50),
                offer("flight-comfort", "Switch to comfort", 80),
                offer("flight-meal", "Add meal", 15),
                offer("flight-seats", "Choose seats", 5),
            ],
        ),
        group(
            EventType::Train,
            vec![offer("train-meal", "Book a meal", 25)],
        ),
        group(
            EventType::CheckIn,
            vec![
                offer("checkin-breakfast", "Add breakfast", 50),
                offer("checkin-late", "Late check-out", 30),
            ],
        ),
        group(
            EventType::Drive,
            vec![offer("drive-rent", "Rent a car", 200)],
        ),
        group(
            EventType::Sightseeing,
            vec![
                offer("sight-tickets", "Book tickets", 40),
                offer("sight-lunch", "Lunch in city", 30),
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    event_type: EventType,
    destination: &str,
    from: DateTime<Utc>,
    hours: i64,
    price: u32,
    offers: &[&str],
    is_favorite: bool,
) -> TripEvent {
    TripEvent {
        id: EventId::from(id),
        event_type,
        destination: DestinationId::from(destination),
        date_from: from,
        date_to: from + TimeDelta::hours(hours),
        base_price: price,
        offers: offers.iter().map(|o| OfferId::from(*o)).collect::<BTreeSet<_>>(),
        is_favorite,
    }
}

/// 以 `now` 为基准生成演示行程，过去、当前、未来的事件都有
pub fn demo_data(now: DateTime<Utc>) -> TripData {
    let base = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    let day = TimeDelta::days(1);

    TripData {
        destinations: destinations(),
        offers: offers(),
        events: vec![
            event(
                "1",
                EventType::Flight,
                "amsterdam",
                base - day * 3,
                2,
                160,
                &["flight-meal", "flight-seats"],
                false,
            ),
            event(
                "2",
                EventType::CheckIn,
                "amsterdam",
                base - day * 3 + TimeDelta::hours(4),
                20,
                600,
                &["checkin-breakfast"],
                true,
            ),
            event(
                "3",
                EventType::Train,
                "geneva",
                base - TimeDelta::hours(1),
                3,
                90,
                &[],
                false,
            ),
            event(
                "4",
                EventType::Drive,
                "chamonix",
                base + day,
                2,
                110,
                &["drive-rent"],
                false,
            ),
            event(
                "5",
                EventType::Sightseeing,
                "chamonix",
                base + day * 2,
                5,
                50,
                &["sight-tickets"],
                true,
            ),
            event(
                "6",
                EventType::Taxi,
                "geneva",
                base + day * 3,
                1,
                20,
                &[],
                false,
            ),
        ],
    }
}
