//! Scripted front-desk sessions.

use std::cell::RefCell;
use std::rc::Rc;

use pawdesk_runtime::core::{CacheKey, PanelProps, PanelTypeId, ReturnTo};
use pawdesk_runtime::{PanelController, QueryCache, SuccessOptions};
use serde_json::json;

use crate::cli::Script;
use crate::forms;

/// Play `script` against `ctl` and return the transcript: one entry per
/// narrated step and one per frame the renderer was notified of.
pub fn run(ctl: &PanelController, cache: &QueryCache, script: Script) -> Vec<String> {
    let transcript = Rc::new(RefCell::new(Vec::new()));

    let frames = Rc::clone(&transcript);
    let viewer = ctl.clone();
    let sub = ctl.subscribe(move |_| {
        frames.borrow_mut().push(forms::render(&viewer.view()));
    });

    let say = |line: &str| transcript.borrow_mut().push(format!("-- {line}"));

    match script {
        Script::FrontDesk => front_desk(ctl, cache, &say),
        Script::Unknown => {
            say("open a panel type no form handles");
            ctl.open("grooming-create", PanelProps::new());
            say("close");
            ctl.close();
        }
    }

    let stale: Vec<String> = cache.stale_keys().iter().map(ToString::to_string).collect();
    say(&format!("stale queries: [{}]", stale.join(", ")));

    drop(sub);
    Rc::try_unwrap(transcript)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone())
}

fn front_desk(ctl: &PanelController, cache: &QueryCache, say: &dyn Fn(&str)) {
    for key in [
        CacheKey::collection("owners"),
        CacheKey::new(["owners", "o1"]),
        CacheKey::collection("bookings"),
        CacheKey::new(["bookings", "b1"]),
        CacheKey::collection("tasks"),
        CacheKey::collection("dashboard"),
    ] {
        cache.insert(key);
    }

    say("look up owner o1");
    ctl.open(
        PanelTypeId::OwnerEdit,
        PanelProps::new().with("ownerId", "o1"),
    );

    say("book a stay from the owner record");
    ctl.open(
        PanelTypeId::BookingCreate,
        PanelProps::new().with("ownerId", "o1").with("petId", "p3"),
    );

    say("save the booking");
    ctl.complete(
        &json!({ "bookingId": "b2", "ownerId": "o1", "petId": "p3" }),
        SuccessOptions::new(),
    );

    say("open an existing booking");
    ctl.open(
        PanelTypeId::BookingEdit,
        PanelProps::new().with("bookingId", "b1"),
    );

    say("add a care task that returns to the booking");
    let reopen = ctl.clone();
    ctl.open(
        PanelTypeId::TaskCreate,
        PanelProps::new()
            .with("bookingId", "b1")
            .return_to(ReturnTo::new("Booking", move || {
                reopen.open(
                    PanelTypeId::BookingEdit,
                    PanelProps::new().with("bookingId", "b1"),
                );
            })),
    );

    say("back out of the task");
    ctl.go_back();

    say("save the booking");
    ctl.complete(
        &json!({ "bookingId": "b1", "ownerId": "o1" }),
        SuccessOptions::new()
            .invalidate([CacheKey::collection("tasks")])
            .on_success(|result: &serde_json::Value| {
                tracing::info!(booking = %result["bookingId"], "booking saved");
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(script: Script) -> (Vec<String>, Rc<QueryCache>) {
        let cache = Rc::new(QueryCache::new());
        let ctl = PanelController::new(cache.clone());
        (run(&ctl, &cache, script), cache)
    }

    #[test]
    fn front_desk_ends_closed() {
        let (transcript, _) = play(Script::FrontDesk);
        let frames: Vec<&String> = transcript.iter().filter(|l| !l.starts_with("-- ")).collect();
        assert_eq!(frames.last().map(|s| s.as_str()), Some("[closed]"));
    }

    #[test]
    fn front_desk_escape_lands_on_reopened_booking() {
        let (transcript, _) = play(Script::FrontDesk);
        let back = transcript
            .iter()
            .position(|l| l == "-- back out of the task")
            .unwrap();
        // Clearing the stack, then the callback's reopen.
        assert_eq!(transcript[back + 1], "[closed]");
        assert!(transcript[back + 2].starts_with("[1|lg] Edit Booking"));
        assert!(transcript[back + 2].ends_with("<BookingForm bookingId=b1>"));
    }

    #[test]
    fn front_desk_invalidates_touched_queries() {
        let (_, cache) = play(Script::FrontDesk);
        for key in ["bookings", "tasks", "dashboard"] {
            assert_eq!(cache.is_stale(&CacheKey::collection(key)), Some(true), "{key}");
        }
        assert_eq!(cache.is_stale(&CacheKey::new(["bookings", "b1"])), Some(true));
        assert_eq!(cache.is_stale(&CacheKey::new(["owners", "o1"])), Some(true));
        // Only the owner's detail was touched.
        assert_eq!(cache.is_stale(&CacheKey::collection("owners")), Some(false));
    }

    #[test]
    fn unknown_script_renders_fallback() {
        let (transcript, cache) = play(Script::Unknown);
        assert!(transcript.iter().any(|l| l.contains("[1|md] Panel")));
        assert!(
            transcript
                .iter()
                .any(|l| l.ends_with("!! Unknown panel type: grooming-create"))
        );
        assert!(cache.stale_keys().is_empty());
        assert_eq!(transcript.last().unwrap(), "-- stale queries: []");
    }
}
