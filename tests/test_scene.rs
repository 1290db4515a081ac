mod common;

use asteroid_shooter::entities::{Enemy, GameStatus, Laser};
use asteroid_shooter::game::Game;
use asteroid_shooter::platform::{InputFrame, Rect, Silent};
use asteroid_shooter::scene::{render, LOST_BANNER, MENU_PROMPT};
use crossterm::style::Color;

use common::{seeded_rng, Cmd, RecordingRenderer, GLYPH_WIDTH};

fn centred_x(text: &str) -> i32 {
    400 - text.chars().count() as i32 * GLYPH_WIDTH / 2
}

fn game_in_session() -> Game {
    let mut game = Game::new(common::assets());
    let start = InputFrame { confirm: true, ..InputFrame::default() };
    game.step(&start, &mut seeded_rng(), &mut Silent);
    game
}

#[test]
fn menu_frame_shows_centred_prompt() {
    let game = Game::new(common::assets());
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    assert_eq!(
        r.cmds,
        vec![
            Cmd::Begin,
            Cmd::Text(MENU_PROMPT.to_string(), centred_x(MENU_PROMPT), 350),
            Cmd::Present,
        ]
    );
}

#[test]
fn hud_shows_lives_level_and_high_score() {
    let mut game = game_in_session();
    game.session_mut().unwrap().level = 7;
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    let texts = r.texts();
    assert!(texts.contains(&("Lives: 3".to_string(), 10, 10)));
    // Right aligned, 10 from the edge
    assert!(texts.contains(&("Level: 7".to_string(), 800 - 8 * GLYPH_WIDTH - 10, 10)));
    assert!(texts.contains(&("High score: 0".to_string(), 10, 50)));
    assert!(!texts.iter().any(|(t, _, _)| t == LOST_BANNER));
    assert_eq!(r.cmds.first(), Some(&Cmd::Begin));
    assert_eq!(r.cmds.last(), Some(&Cmd::Present));
}

#[test]
fn every_ship_and_laser_is_drawn() {
    let mut game = game_in_session();
    let assets = common::assets();
    {
        let s = game.session_mut().unwrap();
        let mut e = Enemy::new(100, 100, &assets);
        e.ship.lasers.push(Laser::new(100, 200, assets.laser.clone()));
        s.enemies.push(e);
        s.enemies.push(Enemy::new(300, 100, &assets));
        s.player.ship.lasers.push(Laser::new(400, 600, assets.laser.clone()));
    }
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    assert_eq!(r.blits("asteroid"), 2);
    assert_eq!(r.blits("spaceship"), 1);
    assert_eq!(r.blits("laser"), 2);
    assert!(r.cmds.contains(&Cmd::Blit("spaceship", 400, 700)));
}

#[test]
fn health_bar_tracks_health() {
    let mut game = game_in_session();
    game.session_mut().unwrap().player.ship.health = 50;
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    let back = Rect { x: 400, y: 700 + 64 + 10, w: 64, h: 10 };
    assert_eq!(
        r.fills(),
        vec![(back, Color::Red), (Rect { w: 32, ..back }, Color::Green)]
    );
}

#[test]
fn health_bar_is_empty_when_health_is_negative() {
    let mut game = game_in_session();
    game.session_mut().unwrap().player.ship.health = -30;
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    let fills = r.fills();
    assert_eq!(fills[1].0.w, 0);
}

#[test]
fn lost_session_shows_banner() {
    let mut game = game_in_session();
    game.session_mut().unwrap().status = GameStatus::Lost;
    let mut r = RecordingRenderer::default();

    render(&mut r, &game).unwrap();

    assert!(r
        .texts()
        .contains(&(LOST_BANNER.to_string(), centred_x(LOST_BANNER), 350)));
}
