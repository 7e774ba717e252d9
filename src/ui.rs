//! Rendering of every screen of the terminal interface.
//!
//! Drawing only reads the [`App`]; everything shown in game comes from the renderer-side
//! [`MazeCanvas`], never from the engine's worker.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as Segment, Points, Rectangle},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    canvas::MazeCanvas,
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Draws the screen the application is currently on.
///
/// # Errors
///
/// Fails when the maze coordinates cannot be converted for the terminal canvas.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::OptionsMenu(item) => options_menu(app, frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears whatever the previous frame left behind.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Draws the centered bordered box shared by the menus and returns one row per entry.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders `labels` as menu rows, highlighting the one at `active`.
fn render_entries(frame: &mut Frame, rows: &[Rect], labels: &[String], active: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (label, row)) in labels.iter().zip(rows).enumerate() {
        let style = if idx == active {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(label.as_str(), style).centered(), *row);
    }
}

/// Renders the main menu.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let rows = init_menu(frame, MenuType::MainMenu(3));
    let labels = ["Generate", "Options", "Quit"].map(str::to_owned);
    let active = match item {
        MainMenuItem::Generate => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };

    render_entries(frame, &rows, &labels, active);
}

/// Renders the options menu with the current value of every option.
pub(crate) fn options_menu(app: &App, frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let rows = init_menu(frame, MenuType::OptionsMenu(4));
    let dimension = app.engine.config().dimension();
    let labels = [
        format!("Algorithm: {}", app.settings.algorithm),
        format!("Grid size: {dimension}x{dimension}"),
        format!(
            "Animation: {}",
            if app.settings.animate { "on" } else { "off" }
        ),
        "Back".to_owned(),
    ];
    let active = match item {
        OptionsMenuItem::Algorithm => 0,
        OptionsMenuItem::GridSize => 1,
        OptionsMenuItem::Animation => 2,
        OptionsMenuItem::Back => 3,
    };

    render_entries(frame, &rows, &labels, active);
}

/// Converts a wall coordinate to a canvas coordinate.
fn coord(value: usize) -> Result<f64> {
    Ok(f64::from(u32::try_from(value)?))
}

/// Canvas-space shapes of a maze, computed ahead of painting so conversions can fail early.
///
/// The paint closure handed to ratatui cannot return an error, so every `usize` to `f64`
/// conversion happens here first.
struct MazeShapes {
    /// Side length of the maze.
    extent: f64,
    /// Standing walls as `(x1, y1, x2, y2)`.
    walls: Vec<(f64, f64, f64, f64)>,
    /// Centers of the visited cells.
    visited: Vec<(f64, f64)>,
    /// Lower-left corner and side of the cursor square.
    cursor: Option<(f64, f64, f64)>,
}

impl MazeShapes {
    /// Flips the downward wall space into the upward canvas space.
    fn new(canvas: &MazeCanvas) -> Result<Self> {
        let extent = coord(canvas.extent())?;
        let cell_size = coord(canvas.cell_size())?;

        let walls = canvas
            .standing_walls()
            .into_iter()
            .map(|wall| {
                Ok((
                    coord(wall.start_x)?,
                    extent - coord(wall.start_y)?,
                    coord(wall.end_x)?,
                    extent - coord(wall.end_y)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let visited = canvas
            .visited()
            .map(|cell| {
                Ok((
                    coord(cell.col)?.mul_add(cell_size, cell_size / 2.0),
                    extent - coord(cell.row)?.mul_add(cell_size, cell_size / 2.0),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let cursor = canvas
            .cursor()
            .map(|cell| -> Result<(f64, f64, f64)> {
                Ok((
                    coord(cell.col)?.mul_add(cell_size, cell_size / 4.0),
                    extent - coord(cell.row + 1)?.mul_add(cell_size, -cell_size / 4.0),
                    cell_size / 2.0,
                ))
            })
            .transpose()?;

        Ok(Self {
            extent,
            walls,
            visited,
            cursor,
        })
    }
}

/// Renders the maze being generated and the status bar below it.
///
/// The maze is scaled to fit the area above the status bar. Standing walls are drawn as lines,
/// visited cells as points and the generator's current cell as a small square. The status bar
/// shows the algorithm, grid size, run state and the number of passages drawn so far.
///
/// # Errors
///
/// Fails when the maze does not fit the terminal coordinate types or the layout cannot be split.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Terminal cells are about twice as tall as wide, so a square maze spans twice as many
    // columns as rows.
    let rows = i32::from(maze_content_area.height)
        .min(rounded_div::i32(i32::from(maze_content_area.width), 2));
    let rows = u16::try_from(rows)?;
    let columns = rows.saturating_mul(2);

    let maze_area = Layout::vertical([Constraint::Length(rows)])
        .flex(Flex::Center)
        .split(maze_content_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze rows from layout")?;
    let space = Layout::horizontal([Constraint::Length(columns)])
        .flex(Flex::Center)
        .split(maze_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze space from layout")?;

    let shapes = MazeShapes::new(&app.canvas)?;

    let maze = Canvas::default()
        .x_bounds([0.0, shapes.extent])
        .y_bounds([0.0, shapes.extent])
        .marker(Marker::Braille)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &shapes.visited,
                color: Color::DarkGray,
            });
            for &(x1, y1, x2, y2) in &shapes.walls {
                ctx.draw(&Segment::new(x1, y1, x2, y2, Color::Green));
            }
            if let Some((x, y, side)) = shapes.cursor {
                ctx.draw(&Rectangle {
                    x,
                    y,
                    width: side,
                    height: side,
                    color: Color::Red,
                });
            }
        });

    frame.render_widget(maze, space);

    let tooltip_block = Block::bordered()
        .title("(c) cancel / (r) regenerate / (h) return to menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let status_area = tooltip_block.inner(tooltip_area);

    frame.render_widget(tooltip_block, tooltip_area);
    frame.render_widget(Line::raw(app.status()).centered(), status_area);

    Ok(())
}
