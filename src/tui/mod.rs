//! Rendering layer - all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the game
//! state; no game logic runs here and nothing in the state is mutated. Arena
//! coordinates scale uniformly onto the current terminal size, so a resize
//! only changes the zoom.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    event::{KeyCode, KeyEvent, KeyModifiers},
    style::{self, Color, Print},
    terminal,
};

use crate::config::Rgb;
use crate::sim::{FlyingObject, GameMode, GameState, InputEvent, ObjectKind};

// ── Fixed palette (run-state palettes come from config) ───────────────────────

const C_HIT: Color = Color::Red;
const C_PLAYER: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_MENU_SELECTED: Color = Color::Yellow;
const C_MENU_ITEM: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Current terminal dimensions in cells
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// Presentation-side memory
///
/// The core raises `game_over` for a single frame; the latch keeps the
/// banner on screen until the menu closes.
#[derive(Debug, Default)]
pub struct Tui {
    game_over_banner: bool,
}

/// Map a key press onto a logical input event for the current mode
///
/// The same physical key can mean different things: arrow-up navigates in
/// menus and jumps in play.
pub fn translate_key(key: KeyEvent, mode: GameMode) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match mode {
        GameMode::Play => match key.code {
            KeyCode::Up | KeyCode::Char(' ') => Some(InputEvent::Jump),
            KeyCode::Char('p') | KeyCode::Esc => Some(InputEvent::Pause),
            KeyCode::Char('q') => Some(InputEvent::Quit),
            _ => None,
        },
        GameMode::Menu | GameMode::Pause => match key.code {
            KeyCode::Up => Some(InputEvent::NavigateUp),
            KeyCode::Down => Some(InputEvent::NavigateDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            _ => None,
        },
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    tui: &mut Tui,
) -> std::io::Result<()> {
    if vp.cols < 10 || vp.rows < 6 {
        // Too small to draw anything meaningful.
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        return out.flush();
    }

    match state.mode {
        GameMode::Play => {
            tui.game_over_banner = false;
            render_arena(out, state, vp)?;
        }
        GameMode::Menu | GameMode::Pause => {
            if state.game_over {
                tui.game_over_banner = true;
            }
            render_menu(out, state, vp, tui.game_over_banner)?;
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Scale factors from arena space to terminal cells
fn scales(state: &GameState, vp: Viewport) -> (f32, f32) {
    (
        vp.cols as f32 / state.arena.screen_w,
        vp.rows as f32 / state.arena.screen_h,
    )
}

#[inline]
fn to_cell(v: f32, scale: f32) -> i32 {
    (v * scale) as i32
}

fn print_at<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    vp: Viewport,
    glyph: &str,
) -> std::io::Result<()> {
    if x >= 0 && y >= 0 && x < vp.cols as i32 && y < vp.rows as i32 {
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Play screen ───────────────────────────────────────────────────────────────

fn render_arena<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let variant = state.palette_variant();
    out.queue(style::SetBackgroundColor(color(
        state.config.background_colors[variant],
    )))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_frame(out, state, vp)?;
    draw_hud(out, state, vp)?;
    for object in &state.objects {
        draw_object(out, state, vp, object, variant)?;
    }
    draw_player(out, state, vp)?;
    Ok(())
}

/// Arena frame at the border position; flashes red while the hit flag is up
fn draw_frame<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let (sx, sy) = scales(state, vp);
    let x0 = to_cell(state.arena.border, sx).max(0);
    let x1 = to_cell(state.arena.screen_w - state.arena.border, sx).min(vp.cols as i32 - 1);
    let y0 = to_cell(state.arena.border, sy).max(0);
    let y1 = to_cell(state.arena.screen_h - state.arena.border, sy).min(vp.rows as i32 - 1);
    if x1 - x0 < 2 || y1 - y0 < 2 {
        return Ok(());
    }

    let frame_color = if state.player.is_hit {
        C_HIT
    } else {
        color(state.config.border_color)
    };
    out.queue(style::SetForegroundColor(frame_color))?;

    let span = (x1 - x0 - 1) as usize;
    print_at(out, x0, y0, vp, &format!("┌{}┐", "─".repeat(span)))?;
    print_at(out, x0, y1, vp, &format!("└{}┘", "─".repeat(span)))?;
    for row in (y0 + 1)..y1 {
        print_at(out, x0, row, vp, "│")?;
        print_at(out, x1, row, vp, "│")?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let variant = state.palette_variant();

    // Lives - left
    let hearts: String = "♥ ".repeat(state.player.lives as usize);
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(hearts))?;

    // Crystals - centre
    let crystals = format!("◆ {}", state.player.crystals);
    let cx = (vp.cols / 2).saturating_sub(crystals.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(cx, 0))?;
    out.queue(style::SetForegroundColor(color(
        state.config.collectible_colors[variant],
    )))?;
    out.queue(Print(crystals))?;

    // Controls - right
    let hint = "[↑] jump  [p] pause  [q] quit";
    let hx = vp.cols.saturating_sub(hint.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let (sx, sy) = scales(state, vp);
    let p = &state.player;
    let x0 = to_cell(p.pos.x, sx);
    let x1 = to_cell(p.pos.x + p.size.x, sx) - 1;
    let y0 = to_cell(p.pos.y, sy);
    let y1 = to_cell(p.pos.y + p.size.y, sy) - 1;

    out.queue(style::SetForegroundColor(if p.is_hit {
        C_HIT
    } else {
        C_PLAYER
    }))?;

    for row in y0..=y1 {
        for col in x0..=x1 {
            // Bottom row carries a two-phase walk cycle driven by the
            // render clock.
            let glyph = if row == y1 && row > y0 {
                match ((state.frame / 3) % 2, (col - x0) % 2) {
                    (0, 0) | (1, 1) => "▙",
                    _ => "▟",
                }
            } else {
                "█"
            };
            print_at(out, col, row, vp, glyph)?;
        }
    }
    Ok(())
}

fn draw_object<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    object: &FlyingObject,
    variant: usize,
) -> std::io::Result<()> {
    // An object shows only while fully inside the arena frame; it slides
    // in hidden from the right and winks out at the left border.
    if object.left() < state.arena.left_x || object.right() > state.arena.right_x {
        return Ok(());
    }

    let (sx, sy) = scales(state, vp);
    let x0 = to_cell(object.left(), sx);
    let x1 = to_cell(object.right(), sx);
    let y0 = to_cell(object.top(), sy);
    let y1 = to_cell(object.bottom(), sy);

    match object.kind {
        ObjectKind::Obstacle => {
            out.queue(style::SetForegroundColor(color(
                state.config.obstacle_colors[variant],
            )))?;
            let radius_sq = (object.size.x / 2.0) * (object.size.x / 2.0);
            for row in y0..=y1 {
                for col in x0..=x1 {
                    // Fill cells whose centre lies inside the ball.
                    let ax = (col as f32 + 0.5) / sx;
                    let ay = (row as f32 + 0.5) / sy;
                    let dx = ax - object.pos.x;
                    let dy = ay - object.pos.y;
                    if dx * dx + dy * dy <= radius_sq {
                        print_at(out, col, row, vp, "●")?;
                    }
                }
            }
            // Never let a ball vanish entirely at coarse scales.
            print_at(out, (x0 + x1) / 2, (y0 + y1) / 2, vp, "●")?;
        }
        ObjectKind::Collectible => {
            // A collected crystal is gone from the world.
            if object.has_scored {
                return Ok(());
            }
            out.queue(style::SetForegroundColor(color(
                state.config.collectible_colors[variant],
            )))?;
            for row in y0..=y1 {
                for col in x0..=x1 {
                    let ax = (col as f32 + 0.5) / sx;
                    let ay = (row as f32 + 0.5) / sy;
                    let dx = (ax - object.pos.x).abs() / object.size.x;
                    let dy = (ay - object.pos.y).abs() / object.size.y;
                    if dx + dy <= 0.5 {
                        print_at(out, col, row, vp, "◆")?;
                    }
                }
            }
            print_at(out, (x0 + x1) / 2, (y0 + y1) / 2, vp, "◆")?;
        }
    }
    Ok(())
}

// ── Menu screen ───────────────────────────────────────────────────────────────

fn render_menu<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    game_over: bool,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(Color::Black))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let title = "C R Y S T A L   D A S H";
    let title_color = color(state.config.collectible_colors[0]);
    print_centered(out, vp, vp.rows / 4, title, title_color)?;

    let status = format!("♥ {}   ◆ {}", state.player.lives, state.player.crystals);
    print_centered(out, vp, vp.rows / 4 + 2, &status, C_HINT)?;

    if game_over {
        print_centered(out, vp, vp.rows / 4 + 4, "G A M E   O V E R", C_HIT)?;
    } else if state.mode == GameMode::Pause {
        print_centered(out, vp, vp.rows / 4 + 4, "P A U S E D", C_MENU_ITEM)?;
    }

    let first_row = vp.rows / 2;
    for (i, item) in state.menu_items().iter().enumerate() {
        let row = first_row + i as u16;
        if i == state.menu_cursor {
            print_centered(out, vp, row, &format!("▶ {}", item.label()), C_MENU_SELECTED)?;
        } else {
            print_centered(out, vp, row, &format!("  {}", item.label()), C_MENU_ITEM)?;
        }
    }

    print_centered(
        out,
        vp,
        vp.rows.saturating_sub(2),
        "↑/↓ select   enter confirm   q quit",
        C_HINT,
    )?;
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    vp: Viewport,
    row: u16,
    text: &str,
    fg: Color,
) -> std::io::Result<()> {
    if row >= vp.rows {
        return Ok(());
    }
    let col = (vp.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(Print(text))?;
    Ok(())
}
