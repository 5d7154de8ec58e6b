//! Tests for celebration parameters and the clear timer.

use std::time::{Duration, Instant};

use monkey_banana::{
    Board, CelebrationParams, CelebrationTimer, DEFAULT_CLEAR_AFTER, GameSession, MoveOutcome,
    Outcome, PALETTE, evaluate_outcome,
};

#[test]
fn test_win_and_draw_bursts_differ() {
    let win = CelebrationParams::win();
    let draw = CelebrationParams::draw();

    assert_eq!((win.count, win.spread), (120, 80.0));
    assert_eq!((draw.count, draw.spread), (80, 60.0));
    assert_eq!(win.origin, draw.origin);
    assert_eq!(win.palette, &PALETTE);
}

#[test]
fn test_no_burst_while_in_progress() {
    assert_eq!(CelebrationParams::for_outcome(&Outcome::InProgress), None);
    assert_eq!(
        CelebrationParams::for_outcome(&Outcome::Draw),
        Some(CelebrationParams::draw())
    );
    let won = evaluate_outcome(&Board::from_layout("MMM BB. ...").unwrap());
    assert_eq!(
        CelebrationParams::for_outcome(&won),
        Some(CelebrationParams::win())
    );
}

#[test]
fn test_finishing_move_carries_burst() {
    let mut session = GameSession::new();
    for cell in [0, 1, 2, 4, 3, 5, 7, 6] {
        session.apply_move(cell);
    }
    match session.apply_move(8) {
        MoveOutcome::Finished {
            outcome,
            celebration,
        } => {
            assert_eq!(outcome, Outcome::Draw);
            assert_eq!(celebration, CelebrationParams::draw());
        }
        other => panic!("expected finished game, got {:?}", other),
    }
}

#[test]
fn test_timer_fires_once_after_delay() {
    let mut timer = CelebrationTimer::default();
    let start = Instant::now();
    assert!(!timer.poll(start + DEFAULT_CLEAR_AFTER));

    timer.arm(start);
    assert!(timer.is_armed());
    assert!(!timer.poll(start + Duration::from_millis(2999)));
    assert!(timer.poll(start + Duration::from_secs(3)));
    assert!(!timer.poll(start + Duration::from_secs(4)));
    assert!(!timer.is_armed());
}

#[test]
fn test_cancel_drops_pending_clear() {
    let mut timer = CelebrationTimer::new(Duration::from_millis(500));
    let start = Instant::now();
    timer.arm(start);
    timer.cancel();

    assert!(!timer.is_armed());
    assert!(!timer.poll(start + Duration::from_secs(1)));
}

#[test]
fn test_rearm_pushes_deadline() {
    let mut timer = CelebrationTimer::new(Duration::from_secs(3));
    let start = Instant::now();
    timer.arm(start);
    timer.arm(start + Duration::from_secs(2));

    assert!(!timer.poll(start + Duration::from_secs(3)));
    assert!(timer.poll(start + Duration::from_secs(5)));
}
