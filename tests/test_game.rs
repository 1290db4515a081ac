mod common;

use asteroid_shooter::compute::LOST_DISPLAY_TICKS;
use asteroid_shooter::entities::GameStatus;
use asteroid_shooter::game::{Game, Screen};
use asteroid_shooter::platform::{InputFrame, Track};

use common::{seeded_rng, RecordingAudio};

fn confirm() -> InputFrame {
    InputFrame { confirm: true, ..InputFrame::default() }
}

#[test]
fn starts_in_main_menu() {
    let game = Game::new(common::assets());
    assert!(matches!(game.screen(), Screen::MainMenu));
    assert!(game.session().is_none());
    assert_eq!(game.high_score(), 0);
}

#[test]
fn menu_waits_for_confirm() {
    let mut game = Game::new(common::assets());
    let mut audio = RecordingAudio::default();
    let fire = InputFrame { fire: true, ..InputFrame::default() };

    game.step(&fire, &mut seeded_rng(), &mut audio);

    assert!(matches!(game.screen(), Screen::MainMenu));
    assert!(audio.tracks.is_empty());
}

#[test]
fn confirm_starts_a_fresh_session_with_music() {
    let mut game = Game::new(common::assets());
    let mut audio = RecordingAudio::default();

    game.step(&confirm(), &mut seeded_rng(), &mut audio);

    let session = game.session().expect("in game");
    assert_eq!(session.lives, 3);
    assert_eq!(session.level, 0);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(audio.tracks, vec![Track::Background]);
}

#[test]
fn lost_session_returns_to_menu_and_keeps_high_score() {
    let mut game = Game::new(common::assets());
    let mut rng = seeded_rng();
    let mut audio = RecordingAudio::default();
    let idle = InputFrame::default();

    game.step(&confirm(), &mut rng, &mut audio);
    {
        let session = game.session_mut().expect("in game");
        session.level = 3;
        session.lives = 0;
    }

    // Banner stays up for the full display time...
    for _ in 0..LOST_DISPLAY_TICKS {
        game.step(&idle, &mut rng, &mut audio);
    }
    assert_eq!(game.session().map(|s| s.status), Some(GameStatus::Lost));
    assert_eq!(game.high_score(), 3);

    // ...then the menu comes back
    game.step(&idle, &mut rng, &mut audio);
    assert!(matches!(game.screen(), Screen::MainMenu));

    // A new session starts from scratch; the high score survives
    game.step(&confirm(), &mut rng, &mut audio);
    let session = game.session().expect("in game");
    assert_eq!(session.level, 0);
    assert_eq!(session.lives, 3);
    assert_eq!(game.high_score(), 3);
}

#[test]
fn lower_level_does_not_replace_high_score() {
    let mut game = Game::new(common::assets());
    let mut rng = seeded_rng();
    let mut audio = RecordingAudio::default();
    let idle = InputFrame::default();

    for level in [5, 2] {
        game.step(&confirm(), &mut rng, &mut audio);
        {
            let session = game.session_mut().expect("in game");
            session.level = level;
            session.player.ship.health = 0;
        }
        for _ in 0..=LOST_DISPLAY_TICKS {
            game.step(&idle, &mut rng, &mut audio);
        }
        assert!(matches!(game.screen(), Screen::MainMenu));
    }

    assert_eq!(game.high_score(), 5);
}
