//! Interactive demo: `cargo run --example dashboard`.
//!
//! Tab moves focus between the panels, `q` quits. Resizing the window lays the
//! tree out again.

use std::error::Error;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use dashgrid::{
    Area, Color, Constraint, ContainerOptions, ContainerTree, CrosstermTerminal, Dashboard,
    DrawConfig, HAlign, Label, LineStyle, NodeId, Size, Split, Terminal, TerminalSession, VAlign,
};

fn build(size: Size) -> dashgrid::Result<(ContainerTree, Vec<NodeId>)> {
    let mut tree = ContainerTree::new(
        Area::from_size(size),
        ContainerOptions::new()
            .border(LineStyle::Round)
            .title("dashgrid", HAlign::Center)
            .focused_color(Color::BrightCyan),
    );
    let root = tree.root();
    let (top, bottom) = tree.split(
        root,
        Split::column(Constraint::Percent(50)),
        ContainerOptions::new()
            .border(LineStyle::Light)
            .title("status", HAlign::Left),
        ContainerOptions::new(),
    )?;
    let (left, right) = tree.split(
        bottom,
        Split::row(Constraint::Percent(50)),
        ContainerOptions::new()
            .border(LineStyle::Double)
            .title("left", HAlign::Left)
            .align(HAlign::Center, VAlign::Middle),
        ContainerOptions::new()
            .border(LineStyle::Double)
            .title("right", HAlign::Right)
            .padding(1),
    )?;

    tree.set_widget(top, Label::new("all systems nominal · 全部正常"))?;
    tree.set_widget(left, Label::new("centered").align(HAlign::Center, VAlign::Middle))?;
    tree.set_widget(right, Label::new("padded label that will not fit on one line"))?;
    tree.focus_mut().focus(top);
    Ok((tree, vec![top, left, right]))
}

fn main() -> Result<(), Box<dyn Error>> {
    let _session = TerminalSession::stdout()?;
    let terminal = CrosstermTerminal::stdout()?;
    let (tree, panels) = build(terminal.size())?;
    let dashboard = Dashboard::new(tree, terminal, DrawConfig::default());
    dashboard.redraw().ok();

    let mut focused = 0;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Tab => {
                    focused = (focused + 1) % panels.len();
                    let next = panels[focused];
                    dashboard.update(|tree| tree.focus_mut().focus(next))?;
                    dashboard.redraw().ok();
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                dashboard.resize(Size::new(width as i32, height as i32)).ok();
            }
            _ => {}
        }
    }
    Ok(())
}
