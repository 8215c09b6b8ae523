//! Neon maze frontend.
//!
//! Owns the window, the landing → playing → win screen flow, pointer
//! grabbing, and rendering. All game rules live in [`game::LevelSession`];
//! this binary just feeds it pointer deltas and dresses up the events it
//! reports.

#![warn(missing_docs)]

mod config;
mod game;
mod maze;

use std::path::Path;

use glam::Vec2;
use macroquad::prelude::{
    clear_background, draw_circle, draw_circle_lines, draw_rectangle, draw_text, get_time,
    is_key_pressed, is_mouse_button_pressed, measure_text, mouse_position, next_frame,
    screen_height, screen_width, set_cursor_grab, show_mouse, Color, Conf, KeyCode, MouseButton,
};

use config::GameConfig;
use game::{messages, LevelEvent, LevelSession};

const BACKGROUND: Color = Color::new(0.05, 0.055, 0.08, 1.0);
const WALL_NEON: Color = Color::new(0.0, 0.94, 1.0, 1.0);
const START_GREEN: Color = Color::new(0.2, 1.0, 0.4, 0.3);
const END_RED: Color = Color::new(1.0, 0.25, 0.25, 0.4);
const AVATAR: Color = Color::new(1.0, 0.9, 0.2, 1.0);
const AVATAR_HIT: Color = Color::new(1.0, 0.3, 0.2, 1.0);
const TEXT: Color = Color::new(0.92, 0.95, 1.0, 1.0);
const TEXT_DIM: Color = Color::new(0.92, 0.95, 1.0, 0.6);

/// Which screen the frontend is on. The win screen keeps the finished
/// session's stats so they survive until the player clicks onward.
#[derive(Clone, Copy)]
enum Screen {
    Landing,
    Playing,
    Win {
        elapsed_seconds: f64,
        line: &'static str,
        tag: &'static str,
    },
}

/// Transient overlay line with its expiry time (macroquad clock seconds).
struct Toast {
    text: String,
    until: f64,
}

fn grab(on: bool, grabbed: &mut bool) {
    set_cursor_grab(on);
    show_mouse(!on);
    *grabbed = on;
}

fn mouse_vec() -> Vec2 {
    let (x, y) = mouse_position();
    Vec2::new(x, y)
}

fn viewport() -> Vec2 {
    Vec2::new(screen_width(), screen_height())
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        y,
        size,
        color,
    );
}

/// Draws the world translated by its scroll offset, then the avatar pinned
/// to the viewport center.
fn draw_world(session: &LevelSession, viewport: Vec2, config: &GameConfig, flash: bool) {
    let world = &session.world;
    let off = world.offset;

    for (zone, color) in [(&world.start_zone, START_GREEN), (&world.end_zone, END_RED)] {
        draw_rectangle(zone.x + off.x, zone.y + off.y, zone.w, zone.h, color);
    }

    for wall in &world.walls {
        draw_rectangle(wall.x + off.x, wall.y + off.y, wall.w, wall.h, WALL_NEON);
    }

    let center = viewport * 0.5;
    let body = if flash { AVATAR_HIT } else { AVATAR };
    draw_circle(center.x, center.y, config.avatar_radius, body);
    draw_circle_lines(center.x, center.y, config.avatar_radius, 2.0, BACKGROUND);
}

fn window_conf() -> Conf {
    Conf {
        window_title: "GLOWMAZE".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::load_or_default(Path::new("glowmaze.ron"));
    let mut rng = rand::thread_rng();

    let mut screen = Screen::Landing;
    let mut session: Option<LevelSession> = None;
    let mut level: u32 = 1;
    let mut grabbed = false;
    let mut last_mouse = mouse_vec();
    let mut toast: Option<Toast> = None;
    let mut bonk_flash_until = 0.0f64;

    loop {
        let now = get_time();
        let view = viewport();
        let mouse = mouse_vec();
        let delta = mouse - last_mouse;
        last_mouse = mouse;

        clear_background(BACKGROUND);

        match screen {
            Screen::Landing => {
                draw_centered("GLOWMAZE", view.y * 0.35, 96.0, WALL_NEON);
                draw_centered(
                    "Slide the maze under the dot. Don't graze the glow.",
                    view.y * 0.5,
                    32.0,
                    TEXT,
                );
                draw_centered("Click to start", view.y * 0.62, 28.0, TEXT_DIM);

                if is_mouse_button_pressed(MouseButton::Left) {
                    session = Some(LevelSession::start(&config, view, &mut rng));
                    grab(true, &mut grabbed);
                    last_mouse = mouse_vec();
                    screen = Screen::Playing;
                }
            }
            Screen::Playing => {
                if is_key_pressed(KeyCode::Escape) && grabbed {
                    grab(false, &mut grabbed);
                    toast = Some(Toast {
                        text: "Mouse released. Click to resume.".to_owned(),
                        until: f64::MAX,
                    });
                }
                if is_mouse_button_pressed(MouseButton::Left) && !grabbed {
                    grab(true, &mut grabbed);
                    last_mouse = mouse_vec();
                    toast = None;
                }

                let motion = if grabbed { delta } else { Vec2::ZERO };
                if let Some(session) = session.as_mut() {
                    match session.frame(motion, view) {
                        Some(LevelEvent::Bonk) => {
                            toast = Some(Toast {
                                text: messages::bonk_line(&mut rng).to_owned(),
                                until: now + 1.5,
                            });
                            bonk_flash_until = now + 0.3;
                        }
                        Some(LevelEvent::Won { elapsed_seconds }) => {
                            grab(false, &mut grabbed);
                            toast = None;
                            screen = Screen::Win {
                                elapsed_seconds,
                                line: messages::win_line(&mut rng),
                                tag: messages::win_tag(&mut rng),
                            };
                        }
                        None => {}
                    }

                    draw_world(session, view, &config, now < bonk_flash_until);
                    draw_text(&format!("Level {}", level), 20.0, 40.0, 32.0, TEXT);
                    draw_text(
                        &format!("{:.1}s", session.elapsed_seconds()),
                        20.0,
                        74.0,
                        28.0,
                        TEXT_DIM,
                    );
                }
            }
            Screen::Win {
                elapsed_seconds,
                line,
                tag,
            } => {
                draw_centered(tag, view.y * 0.3, 72.0, WALL_NEON);
                draw_centered(line, view.y * 0.45, 40.0, TEXT);
                draw_centered(
                    &format!("Finished in {:.1}s", elapsed_seconds),
                    view.y * 0.58,
                    32.0,
                    TEXT,
                );
                draw_centered("Click for the next maze", view.y * 0.7, 28.0, TEXT_DIM);

                if is_mouse_button_pressed(MouseButton::Left) {
                    level += 1;
                    session = Some(LevelSession::start(&config, view, &mut rng));
                    grab(true, &mut grabbed);
                    last_mouse = mouse_vec();
                    screen = Screen::Playing;
                }
            }
        }

        if toast.as_ref().is_some_and(|t| now >= t.until) {
            toast = None;
        }
        if let Some(t) = &toast {
            draw_centered(&t.text, view.y * 0.12, 36.0, TEXT);
        }

        next_frame().await;
    }
}
