//! # Actions
//!
//! Everything that can happen in claimcheck becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The service answers? That's `Action::ResponseReceived { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the adapter should perform next. No side effects
//! here; requests and timers are spawned by the TUI.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, error, info};

use crate::core::history::{EntryKind, HistoryEntry};
use crate::core::reveal::Reveal;
use crate::core::state::{App, PROCESSING_PLACEHOLDER, Panel, SubmissionId};
use crate::service::{ClaimOutcome, ServiceError};

#[derive(Debug)]
pub enum Action {
    /// Raw text from the input box.
    Submit(String),
    /// The service answered (or failed) for an earlier submission.
    ResponseReceived {
        submission: SubmissionId,
        claim: String,
        outcome: Result<ClaimOutcome, ServiceError>,
    },
    /// Timer fired for the echo reveal of `submission`.
    RevealTick(SubmissionId),
    ToggleHistory,
    ShowInput,
    Quit,
}

/// A claim accepted by `update` that still needs to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClaim {
    pub submission: SubmissionId,
    pub claim: String,
    /// Delay before the next reveal tick, when an echo reveal is running.
    pub reveal_after: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest(PendingClaim),
    ScheduleReveal {
        submission: SubmissionId,
        after: Duration,
    },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(raw) => submit(app, &raw),
        Action::ResponseReceived {
            submission,
            claim,
            outcome,
        } => {
            receive(app, submission, claim, outcome);
            Effect::None
        }
        Action::RevealTick(submission) => reveal_tick(app, submission),
        Action::ToggleHistory => {
            if app.history_panel.is_visible() {
                app.history_panel.hide();
            } else {
                app.history_panel.show(&app.history);
            }
            debug!(
                "History panel visible={} rows={}",
                app.history_panel.is_visible(),
                app.history_panel.rows().len()
            );
            Effect::None
        }
        Action::ShowInput => {
            app.panel = Panel::Input;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, raw: &str) -> Effect {
    let Some(claim) = app.profile.claim_text(raw) else {
        debug!("Ignoring blank claim");
        return Effect::None;
    };

    let submission = app.next_submission_id();
    app.panel = Panel::Output;
    app.in_flight += 1;
    app.status_message = PROCESSING_PLACEHOLDER.to_string();

    let reveal_after = if app.profile.echo_reveal {
        app.output.clear();
        let mut reveal = Reveal::new(submission, &claim);
        if let Some(first) = reveal.advance() {
            app.output.push(first);
        }
        let still_running = !reveal.is_done();
        app.reveal = still_running.then_some(reveal);
        app.record(HistoryEntry::new(claim.clone(), claim.clone(), EntryKind::Echo));
        still_running.then_some(app.profile.reveal_interval)
    } else {
        app.output = PROCESSING_PLACEHOLDER.to_string();
        app.reveal = None;
        None
    };

    info!(
        "Submission {} accepted (len={}, in_flight={})",
        submission,
        claim.len(),
        app.in_flight
    );

    Effect::SpawnRequest(PendingClaim {
        submission,
        claim,
        reveal_after,
    })
}

fn receive(
    app: &mut App,
    submission: SubmissionId,
    claim: String,
    outcome: Result<ClaimOutcome, ServiceError>,
) {
    app.in_flight = app.in_flight.saturating_sub(1);
    // Whatever answered last owns the output panel; a running echo would
    // otherwise keep typing over it.
    app.reveal = None;

    match outcome {
        Ok(outcome) => {
            let output = outcome.display_text(&app.profile.fallback_result);
            info!("Submission {} answered ({} bytes)", submission, output.len());
            app.output = output.clone();
            app.record(HistoryEntry::new(claim, output, EntryKind::Result));
            app.status_message = String::from("Done");
        }
        Err(e) => {
            error!("Submission {} failed: {}", submission, e);
            app.output = app.profile.failure_text(&e);
            app.status_message = String::from("Request failed");
        }
    }

    if app.is_awaiting() {
        app.status_message = PROCESSING_PLACEHOLDER.to_string();
    }
}

fn reveal_tick(app: &mut App, submission: SubmissionId) -> Effect {
    let Some(reveal) = app.reveal.as_mut().filter(|r| r.submission == submission) else {
        return Effect::None;
    };

    if let Some(next) = reveal.advance() {
        app.output.push(next);
    }

    if reveal.is_done() {
        app.reveal = None;
        Effect::None
    } else {
        Effect::ScheduleReveal {
            submission,
            after: app.profile.reveal_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Profile;
    use crate::test_support::test_app;

    fn outcome(result: &str) -> Result<ClaimOutcome, ServiceError> {
        Ok(ClaimOutcome {
            result: Some(result.to_string()),
        })
    }

    fn pending(effect: Effect) -> PendingClaim {
        match effect {
            Effect::SpawnRequest(pending) => pending,
            other => panic!("Expected SpawnRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_submit_is_a_no_op() {
        let mut app = test_app(Profile::ProcessClaim);
        for blank in ["", "   ", "\n\t"] {
            let effect = update(&mut app, Action::Submit(blank.to_string()));
            assert_eq!(effect, Effect::None);
        }
        assert_eq!(app.panel, Panel::Input);
        assert!(app.output.is_empty());
        assert!(app.history.is_empty());
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_submit_swaps_panel_and_requests_trimmed_claim() {
        let mut app = test_app(Profile::ProcessClaim);

        let claim = pending(update(&mut app, Action::Submit("  the sky is blue ".to_string())));

        assert_eq!(claim.claim, "the sky is blue");
        assert_eq!(claim.reveal_after, None);
        assert_eq!(app.panel, Panel::Output);
        assert_eq!(app.output, PROCESSING_PLACEHOLDER);
        assert!(app.is_awaiting());
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_successful_response_renders_and_records() {
        let mut app = test_app(Profile::ProcessClaim);
        let claim = pending(update(&mut app, Action::Submit("the sky is blue".to_string())));

        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: outcome("TRUE"),
            },
        );

        assert_eq!(app.output, "TRUE");
        assert_eq!(app.history.len(), 1);
        let last = app.history.last().unwrap();
        assert_eq!(last.input, "the sky is blue");
        assert_eq!(last.output, "TRUE");
        assert_eq!(last.kind, EntryKind::Result);
        assert!(!app.is_awaiting());
    }

    #[test]
    fn test_missing_result_renders_fallback() {
        let mut app = test_app(Profile::ProcessClaim);
        let claim = pending(update(&mut app, Action::Submit("claim".to_string())));

        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: Ok(ClaimOutcome::default()),
            },
        );

        assert_eq!(app.output, "No result returned");
    }

    #[test]
    fn test_failure_shows_status_and_skips_history() {
        let mut app = test_app(Profile::ProcessClaim);
        let claim = pending(update(&mut app, Action::Submit("claim".to_string())));

        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: Err(ServiceError::Http { status: 500 }),
            },
        );

        assert!(app.output.contains("500"));
        assert!(app.history.is_empty());
        assert_eq!(app.status_message, "Request failed");
        assert!(!app.is_awaiting());
    }

    #[test]
    fn test_open_history_gets_new_entry_without_rerender() {
        let mut app = test_app(Profile::ProcessClaim);
        update(&mut app, Action::ToggleHistory);
        assert!(app.history_panel.rows().is_empty());

        let claim = pending(update(&mut app, Action::Submit("claim".to_string())));
        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: outcome("TRUE"),
            },
        );

        assert_eq!(app.history_panel.rows().len(), 1);
        assert_eq!(app.history_panel.rows()[0].output, "TRUE");
    }

    #[test]
    fn test_toggle_history_renders_all_then_hides_without_clearing() {
        let mut app = test_app(Profile::ProcessClaim);
        for text in ["one", "two", "three"] {
            let claim = pending(update(&mut app, Action::Submit(text.to_string())));
            update(
                &mut app,
                Action::ResponseReceived {
                    submission: claim.submission,
                    claim: claim.claim,
                    outcome: outcome("ok"),
                },
            );
        }

        update(&mut app, Action::ToggleHistory);
        assert!(app.history_panel.is_visible());
        let inputs: Vec<&str> = app
            .history_panel
            .rows()
            .iter()
            .map(|e| e.input.as_str())
            .collect();
        assert_eq!(inputs, vec!["one", "two", "three"]);

        update(&mut app, Action::ToggleHistory);
        assert!(!app.history_panel.is_visible());
        assert_eq!(app.history_panel.rows().len(), 3);
    }

    #[test]
    fn test_echo_profile_records_interim_entry_and_sends_raw_text() {
        let mut app = test_app(Profile::Subclaims);

        let claim = pending(update(&mut app, Action::Submit(" hi ".to_string())));

        assert_eq!(claim.claim, " hi ");
        assert_eq!(claim.reveal_after, Some(app.profile.reveal_interval));
        assert_eq!(app.output, " ");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.last().unwrap().kind, EntryKind::Echo);
        assert_eq!(app.history.last().unwrap().output, " hi ");
    }

    #[test]
    fn test_echo_profile_yields_two_entries_per_submission() {
        let mut app = test_app(Profile::Subclaims);
        let claim = pending(update(&mut app, Action::Submit("claim".to_string())));

        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: outcome("1. sub"),
            },
        );

        let kinds: Vec<EntryKind> = app.history.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Echo, EntryKind::Result]);
        assert_eq!(app.output, "1. sub");
    }

    #[test]
    fn test_reveal_ticks_type_out_the_claim() {
        let mut app = test_app(Profile::Subclaims);
        let claim = pending(update(&mut app, Action::Submit("abc".to_string())));
        assert_eq!(app.output, "a");

        let effect = update(&mut app, Action::RevealTick(claim.submission));
        assert_eq!(app.output, "ab");
        assert!(matches!(effect, Effect::ScheduleReveal { .. }));

        let effect = update(&mut app, Action::RevealTick(claim.submission));
        assert_eq!(app.output, "abc");
        assert_eq!(effect, Effect::None);
        assert!(app.reveal.is_none());
    }

    #[test]
    fn test_response_stops_reveal() {
        let mut app = test_app(Profile::Subclaims);
        let claim = pending(update(&mut app, Action::Submit("abcdef".to_string())));

        update(
            &mut app,
            Action::ResponseReceived {
                submission: claim.submission,
                claim: claim.claim,
                outcome: outcome("done"),
            },
        );
        let effect = update(&mut app, Action::RevealTick(claim.submission));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.output, "done");
    }

    #[test]
    fn test_stale_reveal_tick_is_ignored() {
        let mut app = test_app(Profile::Subclaims);
        let first = pending(update(&mut app, Action::Submit("first".to_string())));
        pending(update(&mut app, Action::Submit("second".to_string())));

        let effect = update(&mut app, Action::RevealTick(first.submission));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.output, "s");
    }

    #[test]
    fn test_overlapping_submissions_last_response_wins() {
        let mut app = test_app(Profile::ProcessClaim);
        let first = pending(update(&mut app, Action::Submit("first".to_string())));
        let second = pending(update(&mut app, Action::Submit("second".to_string())));
        assert_eq!(app.in_flight, 2);

        update(
            &mut app,
            Action::ResponseReceived {
                submission: second.submission,
                claim: second.claim,
                outcome: outcome("B"),
            },
        );
        assert_eq!(app.status_message, PROCESSING_PLACEHOLDER);

        update(
            &mut app,
            Action::ResponseReceived {
                submission: first.submission,
                claim: first.claim,
                outcome: outcome("A"),
            },
        );

        assert_eq!(app.output, "A");
        assert_eq!(app.in_flight, 0);
        let inputs: Vec<&str> = app.history.entries().iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["second", "first"]);
    }

    #[test]
    fn test_show_input_returns_to_input_panel() {
        let mut app = test_app(Profile::ProcessClaim);
        update(&mut app, Action::Submit("claim".to_string()));
        assert_eq!(app.panel, Panel::Output);

        update(&mut app, Action::ShowInput);
        assert_eq!(app.panel, Panel::Input);
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app(Profile::ProcessClaim);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
