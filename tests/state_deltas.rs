use picks_terminal::state::{
    apply_delta, AppState, Delta, LoadPhase, Pick, PickDirection,
};

fn slate(n: usize) -> Vec<Pick> {
    (0..n)
        .map(|i| Pick {
            player: format!("Player {i}"),
            line: 20.5,
            predicted: 22.0,
            pick: PickDirection::Over,
            confidence: 50.0 + i as f64,
            game_time: None,
        })
        .collect()
}

#[test]
fn successful_load_moves_idle_to_loaded() {
    let mut state = AppState::new();
    assert_eq!(state.phase, LoadPhase::Idle);

    apply_delta(&mut state, Delta::Loading);
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(state.picks.is_empty());

    apply_delta(&mut state, Delta::SetPicks(slate(3)));
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.picks.len(), 3);
}

#[test]
fn failed_initial_load_leaves_an_empty_failed_view() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::Loading);
    apply_delta(&mut state, Delta::LoadFailed("connection refused".to_string()));

    assert_eq!(state.phase, LoadPhase::Failed);
    assert!(state.picks.is_empty());
    assert!(state
        .logs
        .back()
        .is_some_and(|line| line.contains("connection refused")));
}

#[test]
fn empty_document_is_loaded_not_failed() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::Loading);
    apply_delta(&mut state, Delta::SetPicks(Vec::new()));

    assert_eq!(state.phase, LoadPhase::Loaded);
    assert!(state.picks.is_empty());
    assert!(state.ranked().is_empty());
}

#[test]
fn failed_reload_keeps_the_previous_slate() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPicks(slate(4)));

    apply_delta(&mut state, Delta::Loading);
    apply_delta(&mut state, Delta::LoadFailed("http 503".to_string()));

    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.picks.len(), 4);
}

#[test]
fn selection_is_clamped_when_the_slate_shrinks() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPicks(slate(5)));
    state.select_last();
    assert_eq!(state.selected, 4);

    apply_delta(&mut state, Delta::SetPicks(slate(2)));
    assert_eq!(state.selected, 1);

    apply_delta(&mut state, Delta::SetPicks(Vec::new()));
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPicks(slate(3)));

    state.select_prev();
    assert_eq!(state.selected, 2);
    state.select_next();
    assert_eq!(state.selected, 0);
}

#[test]
fn log_ring_buffer_is_capped() {
    let mut state = AppState::new();
    for i in 0..500 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert!(state.logs.front().is_some_and(|l| l.ends_with("line 300")));
}
