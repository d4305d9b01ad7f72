use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

use super::item::ItemKind;

// Last tick handed out, in nanoseconds since the epoch.
static LAST_TICK: AtomicI64 = AtomicI64::new(0);

fn now_ticks() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}

/// Strictly increasing high-resolution tick, unique for the process lifetime.
fn next_tick() -> i64 {
    let now = now_ticks();
    let mut prev = LAST_TICK.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_TICK.compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

/// `item_{kind}_{tick}`
pub fn next_item_id(kind: ItemKind) -> String {
    format!("item_{}_{}", kind.as_str(), next_tick())
}

/// A timestamp strictly later than `previous`, normally just "now".
pub fn next_timestamp_after(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_never_collide_in_a_tight_loop() {
        let ids: HashSet<String> = (0..10_000)
            .map(|_| next_item_id(ItemKind::Project))
            .collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn ids_never_collide_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..1_000)
                        .map(|_| next_item_id(ItemKind::Skill))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id));
            }
        }
        assert_eq!(all.len(), 4_000);
    }

    #[test]
    fn id_carries_kind_tag() {
        assert!(next_item_id(ItemKind::SkillCategory).starts_with("item_skillCategory_"));
    }

    #[test]
    fn timestamp_after_future_previous_is_bumped() {
        let future = Utc::now() + Duration::hours(1);
        let next = next_timestamp_after(Some(future));
        assert!(next > future);
    }
}
