//! End-to-end player behavior through the public API

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use vidcue::player::input::{handle_event, handle_key_event, handle_mouse_event};
use vidcue::player::render::{layout, PlayerLayout};
use vidcue::player::{InputResult, PlaylistError, TransportState, PROGRESS_SCALE, SYNC_INTERVAL};
use vidcue::{Player, PlayerOptions};

use crate::helpers::{started_player, Command, ScriptedBackend};

fn press(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ============================================================================
// Playlist
// ============================================================================

#[test]
fn next_wraps_after_playlist_length() {
    let mut player = started_player(&["a.mp4", "b.mp4", "c.mp4", "d.mp4"], false);
    let now = Instant::now();
    for _ in 0..4 {
        handle_key_event(press('j'), &mut player, now);
    }
    assert_eq!(player.playlist().cursor(), 0);
    for _ in 0..4 {
        handle_key_event(press('k'), &mut player, now);
    }
    assert_eq!(player.playlist().cursor(), 0);
}

#[test]
fn label_follows_cursor_through_wrap() {
    let mut player = started_player(&["a.mp4", "b.mp4", "c.mp4"], true);
    let now = Instant::now();
    assert_eq!(player.playlist().cursor(), 0);

    handle_key_event(press('j'), &mut player, now);
    assert_eq!(player.playlist().cursor(), 1);
    assert_eq!(player.transport().indicator().label(), "2 / 3 b.mp4");

    handle_key_event(press('j'), &mut player, now);
    handle_key_event(press('j'), &mut player, now);
    assert_eq!(player.playlist().cursor(), 0);
    assert_eq!(player.transport().indicator().label(), "1 / 3 a.mp4");
}

#[test]
fn exactly_one_session_matches_cursor() {
    let mut player = started_player(&["a.mp4", "b.mp4", "c.mp4"], false);
    let now = Instant::now();
    for key in ['j', 'j', 'k', 'j', 'j', 'j', 'k'] {
        handle_key_event(press(key), &mut player, now);
        let session = player.transport().session().expect("active session");
        assert_eq!(session.index, player.playlist().cursor());
        assert_eq!(
            player.transport().backend().media,
            Some(player.playlist().current().handle())
        );
    }
    // Every switch re-associates then plays; nothing else stops playback
    let backend = player.transport().backend();
    assert_eq!(
        backend.count(|c| matches!(c, Command::SetMedia(_))),
        backend.count(|c| *c == Command::Play)
    );
}

#[test]
fn failed_switch_keeps_cursor_label_and_session_together() {
    let mut player = started_player(&["a.mp4", "b.mp4", "c.mp4"], true);
    let now = Instant::now();
    player.transport_mut().backend_mut().refuse_media = true;

    for key in ['j', 'k', 'j'] {
        handle_key_event(press(key), &mut player, now);
        let session = player.transport().session().expect("active session");
        assert_eq!(session.index, player.playlist().cursor());
        assert_eq!(player.transport().indicator().label(), "1 / 3 a.mp4");
    }

    player.transport_mut().backend_mut().refuse_media = false;
    handle_key_event(press('j'), &mut player, now);
    assert_eq!(player.playlist().cursor(), 1);
    assert_eq!(player.transport().indicator().label(), "2 / 3 b.mp4");
}

#[test]
fn empty_playlist_fails_fast() {
    let options = PlayerOptions {
        snapshot_dir: std::env::temp_dir(),
        indicator_visible: false,
    };
    let result = Player::open(&[], ScriptedBackend::default(), options);
    assert!(matches!(result, Err(PlaylistError::Empty)));
}

// ============================================================================
// Transport
// ============================================================================

#[test]
fn seek_keys_use_fixed_deltas() {
    let mut player = started_player(&["a.mp4"], false);
    player.transport_mut().backend_mut().time = 60_000;
    let now = Instant::now();
    for key in ['s', 'w', 'd', 'a'] {
        handle_key_event(press(key), &mut player, now);
    }
    let seeks: Vec<_> = player
        .transport()
        .backend()
        .commands
        .iter()
        .filter(|c| matches!(c, Command::SetTime(_)))
        .cloned()
        .collect();
    assert_eq!(
        seeks,
        vec![
            Command::SetTime(70_000),
            Command::SetTime(60_000),
            Command::SetTime(63_000),
            Command::SetTime(60_000),
        ]
    );
}

#[test]
fn frame_step_without_fps_is_40ms() {
    let mut player = started_player(&["a.mp4"], false);
    assert_eq!(player.transport_mut().frame_step_millis(), 40);

    handle_key_event(press('c'), &mut player, Instant::now());
    assert_eq!(player.transport().backend().time, 40);
}

#[test]
fn rate_keys_pass_fixed_values() {
    let mut player = started_player(&["a.mp4"], false);
    for key in ['1', '2', '3', '4', '5'] {
        handle_key_event(press(key), &mut player, Instant::now());
    }
    let rates: Vec<_> = player
        .transport()
        .backend()
        .commands
        .iter()
        .filter_map(|c| match c {
            Command::SetRate(r) => Some(*r),
            _ => None,
        })
        .collect();
    assert_eq!(rates, vec![1.0, 1.2, 1.5, 2.0, 3.0]);
}

#[test]
fn pause_toggles_only_on_space() {
    let mut player = started_player(&["a.mp4", "b.mp4"], false);
    let now = Instant::now();
    handle_key_event(press(' '), &mut player, now);
    assert_eq!(player.transport().state(), TransportState::Paused);

    handle_key_event(press('d'), &mut player, now);
    handle_key_event(press('2'), &mut player, now);
    assert_eq!(player.transport().state(), TransportState::Paused);

    // Switching entries always plays
    handle_key_event(press('j'), &mut player, now);
    assert_eq!(player.transport().state(), TransportState::Playing);
}

#[test]
fn snapshot_lands_in_configured_dir_with_basename() {
    let mut player = started_player(&["/media/films/clip.mkv"], false);
    handle_key_event(press('f'), &mut player, Instant::now());

    let snapshot = player
        .transport()
        .backend()
        .commands
        .iter()
        .find_map(|c| match c {
            Command::Snapshot(path) => Some(path.clone()),
            _ => None,
        })
        .expect("snapshot issued");
    assert_eq!(snapshot.parent(), Some(std::env::temp_dir().as_path()));
    let name = snapshot.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("clip.mkv-") && name.ends_with(".png"), "{}", name);
}

#[test]
fn quit_key_ends_loop() {
    let mut player = started_player(&["a.mp4"], false);
    let layout = PlayerLayout::default();
    let event = crossterm::event::Event::Key(press('q'));
    assert_eq!(
        handle_event(event, &mut player, &layout, Instant::now()),
        InputResult::Quit
    );
}

// ============================================================================
// Position sync
// ============================================================================

#[test]
fn seek_then_tick_reads_back_scaled_position() {
    for f in [0.0, 0.1, 0.333, 0.5, 0.9999, 1.0] {
        let mut player = started_player(&["a.mp4"], false);
        let start = Instant::now();
        player.transport_mut().seek_absolute(f);
        player.tick(start + SYNC_INTERVAL);

        let value = player.transport().indicator().value() as f64;
        let expected = f * PROGRESS_SCALE as f64;
        assert!((value - expected).abs() <= 1.0, "f = {}: {} vs {}", f, value, expected);
    }
}

#[test]
fn sync_stops_when_backend_stops_until_rearmed() {
    let mut player = started_player(&["a.mp4", "b.mp4"], false);
    let start = Instant::now();
    player.transport_mut().backend_mut().position = 0.5;
    player.transport_mut().backend_mut().playing = false;

    player.tick(start + SYNC_INTERVAL);
    assert!(!player.transport().sync().is_active());
    assert_eq!(player.next_deadline(), None);

    // Position changes are no longer picked up
    player.transport_mut().backend_mut().position = 0.9;
    player.tick(start + SYNC_INTERVAL * 5);
    assert_eq!(player.transport().indicator().value(), PROGRESS_SCALE / 2);

    // Next entry re-arms the sync
    let later = start + Duration::from_secs(2);
    handle_key_event(press('j'), &mut player, later);
    assert!(player.transport().sync().is_active());
    assert_eq!(player.next_deadline(), Some(later + SYNC_INTERVAL));
}

#[test]
fn sync_keeps_ticking_while_playing() {
    let mut player = started_player(&["a.mp4"], false);
    let start = Instant::now();
    for i in 1..=5u32 {
        player.transport_mut().backend_mut().position = i as f64 / 10.0;
        player.tick(start + SYNC_INTERVAL * i);
        assert!(player.transport().sync().is_active());
    }
    assert_eq!(
        player.transport().indicator().value(),
        PROGRESS_SCALE / 2
    );
}

// ============================================================================
// Indicator and pointer
// ============================================================================

#[test]
fn visibility_toggle_moves_label_and_bar_together() {
    let mut player = started_player(&["a.mp4"], false);
    let area = Rect::new(0, 0, 80, 24);
    for _ in 0..3 {
        let indicator = player.transport().indicator();
        assert_eq!(indicator.label_visible(), indicator.bar_visible());
        let screen = layout(area, indicator.is_visible());
        assert_eq!(screen.label.is_some(), screen.bar.is_some());
        handle_key_event(press('e'), &mut player, Instant::now());
    }
}

#[test]
fn click_at_half_width_seeks_once_to_half() {
    let mut player = started_player(&["a.mp4"], true);
    let screen = PlayerLayout {
        bar: Some(Rect::new(0, 30, 1024, 1)),
        label: Some(Rect::new(0, 29, 1024, 1)),
        ..PlayerLayout::default()
    };

    handle_mouse_event(left_click(512, 30), &mut player, &screen);

    let backend = player.transport().backend();
    assert_eq!(backend.count(|c| matches!(c, Command::SetPosition(_))), 1);
    assert!(backend.commands.contains(&Command::SetPosition(0.5)));
    assert_eq!(player.transport().indicator().value(), PROGRESS_SCALE / 2);
}

#[test]
fn click_while_hidden_is_ignored() {
    let mut player = started_player(&["a.mp4"], false);
    let screen = PlayerLayout {
        bar: Some(Rect::new(0, 30, 1024, 1)),
        ..PlayerLayout::default()
    };
    handle_mouse_event(left_click(512, 30), &mut player, &screen);
    assert_eq!(
        player
            .transport()
            .backend()
            .count(|c| matches!(c, Command::SetPosition(_))),
        0
    );
}

#[test]
fn click_off_the_bar_is_ignored() {
    let mut player = started_player(&["a.mp4"], true);
    let screen = layout(Rect::new(0, 0, 80, 24), true);
    handle_mouse_event(left_click(10, 3), &mut player, &screen);
    assert_eq!(
        player
            .transport()
            .backend()
            .count(|c| matches!(c, Command::SetPosition(_))),
        0
    );
}
