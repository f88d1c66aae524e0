// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the public player API: cold start, fullscreen,
//! lock screen, source switching, and dismissal, driven the way a host
//! event loop would drive them.

use tubelens::config::{self, Config};
use tubelens::domain::player::{
    ControlSurface, LockControlPosition, LockStatus, MaximizedMode, PlaybackStatus, PlayerEvent,
    PlayerStateMachine, ScreenPlacement, SideEffect,
};
use tubelens::playlist::parse_master_playlist;

#[test]
fn cold_start_to_fullscreen_playback() {
    let mut machine = PlayerStateMachine::new();

    // Nothing to interact with before the source resolves.
    assert!(machine.apply(PlayerEvent::TapMaximize).effects.is_empty());
    assert!(machine.apply(PlayerEvent::TapPlay).effects.is_empty());

    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    machine.apply(PlayerEvent::TapPlay);
    let transition = machine.apply(PlayerEvent::TapMaximize);

    assert_eq!(
        transition.state.placement,
        ScreenPlacement::Maximized(MaximizedMode::Active)
    );
    assert_eq!(
        transition.effects,
        vec![SideEffect::NotifySizeChanged(true)]
    );
    assert!(transition.state.playback.is_playing());

    let surface = ControlSurface::from_state(&machine.state());
    assert!(surface.fullscreen);
    assert!(surface.seek_enabled);
    assert_eq!(surface.lock_control, Some(LockControlPosition::Corner));
}

#[test]
fn lock_screen_blocks_everything_until_confirmed_unlock() {
    let mut machine = PlayerStateMachine::new();
    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    machine.apply(PlayerEvent::TapPlay);
    machine.apply(PlayerEvent::TapMaximize);
    machine.apply(PlayerEvent::TapLock);

    // Transport and placement events bounce off the lock screen.
    let locked = machine.state();
    for event in [
        PlayerEvent::TapPause,
        PlayerEvent::TapNormalize,
        PlayerEvent::TapForward,
        PlayerEvent::TapSpeedPicker,
    ] {
        assert_eq!(machine.apply(event).state, locked);
    }

    // First tap arms the confirmation, timeout re-locks, then the
    // two-tap sequence unlocks.
    machine.apply(PlayerEvent::TapLock);
    machine.apply(PlayerEvent::UnlockConfirmTimeout);
    assert_eq!(machine.state().lock, LockStatus::Locked);

    machine.apply(PlayerEvent::TapLock);
    let transition = machine.apply(PlayerEvent::TapUnlockConfirm);
    assert_eq!(transition.state.lock, LockStatus::Unlocked);
    assert_eq!(
        transition.state.placement,
        ScreenPlacement::Maximized(MaximizedMode::Active)
    );
    assert!(transition.state.playback.is_playing());
}

#[test]
fn switching_sources_drops_the_superseded_load() {
    let mut machine = PlayerStateMachine::new();

    machine.apply(PlayerEvent::ChangeVideo("https://a.example/master.m3u8".into()));
    let first = machine.epoch();
    machine.apply(PlayerEvent::ChangeVideo("https://b.example/master.m3u8".into()));
    let second = machine.epoch();

    // Late completion of the replaced load changes nothing.
    let before = machine.state();
    let transition = machine.apply(PlayerEvent::DataLoaded { epoch: first });
    assert_eq!(transition.state, before);
    assert!(transition.effects.is_empty());

    let transition = machine.apply(PlayerEvent::DataLoaded { epoch: second });
    assert_eq!(
        transition.state.playback,
        PlaybackStatus::Paused {
            controls_hidden: false
        }
    );
}

#[test]
fn finishing_and_replaying_through_the_picker_flow() {
    let mut machine = PlayerStateMachine::new();
    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    machine.apply(PlayerEvent::TapPlay);
    machine.apply(PlayerEvent::TapMaximize);

    // Pick a different resolution mid-playback.
    machine.apply(PlayerEvent::TapResolutionPicker);
    let transition = machine.apply(PlayerEvent::SelectResolution(1));
    assert!(transition.effects.contains(&SideEffect::SwitchVariant(1)));

    // Run to the end; seek controls drop out until replay.
    machine.apply(PlayerEvent::PlaybackReachedEnd);
    let surface = ControlSurface::from_state(&machine.state());
    assert!(!surface.seek_enabled);
    assert!(surface.lock_control.is_none());

    let transition = machine.apply(PlayerEvent::TapReplay);
    assert!(transition.state.playback.is_playing());
    assert!(transition.state.playback.seek_enabled());
}

#[test]
fn dismissal_is_terminal_for_the_session() {
    let mut machine = PlayerStateMachine::new();
    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    machine.apply(PlayerEvent::TapMinimize);

    let transition = machine.apply(PlayerEvent::ExternalClose);
    assert_eq!(transition.state.placement, ScreenPlacement::NoScreen);
    assert_eq!(transition.effects, vec![SideEffect::StopDecode]);

    // Closed players ignore everything, including fresh loads.
    let terminal = machine.state();
    let epoch = machine.epoch();
    for event in [
        PlayerEvent::ExternalClose,
        PlayerEvent::DataLoaded { epoch },
        PlayerEvent::TapMaximize,
        PlayerEvent::TapPlay,
    ] {
        let transition = machine.apply(event);
        assert_eq!(transition.state, terminal);
        assert!(transition.effects.is_empty());
    }
}

#[test]
fn configured_seek_step_flows_through_a_saved_settings_file() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        seek_step_secs: Some(5),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("failed to save config");
    let loaded = config::load_from_path(&path).expect("failed to load config");

    let mut machine = PlayerStateMachine::with_config(&loaded);
    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    let transition = machine.apply(PlayerEvent::TapForward);
    assert!(transition.effects.contains(&SideEffect::SeekBy(5)));
}

#[test]
fn picker_entries_come_from_the_deduplicated_playlist() {
    let master = "#EXTM3U\n\
        #EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360\n\
        360.m3u8\n\
        #EXT-X-STREAM-INF:BANDWIDTH=1400000,RESOLUTION=640x360\n\
        360-high.m3u8\n\
        #EXT-X-STREAM-INF:BANDWIDTH=2500000,RESOLUTION=1280x720\n\
        720.m3u8\n";
    let variants =
        parse_master_playlist(master, "https://cdn.example.com/v/master.m3u8").expect("parse");

    let labels: Vec<String> = variants.iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["720p".to_string(), "360p".to_string()]);

    // Selecting the second entry asks the host to switch to that variant.
    let mut machine = PlayerStateMachine::new();
    let epoch = machine.epoch();
    machine.apply(PlayerEvent::DataLoaded { epoch });
    machine.apply(PlayerEvent::TapMaximize);
    machine.apply(PlayerEvent::TapResolutionPicker);
    let transition = machine.apply(PlayerEvent::SelectResolution(1));
    assert!(transition.effects.contains(&SideEffect::SwitchVariant(1)));
    assert!(variants.get(1).is_some());
}
