use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use dashgrid::logging::{LogEvent, LogSink, LoggingResult};
use dashgrid::{
    Area, Canvas, Constraint, ContainerOptions, ContainerTree, CrosstermTerminal, DrawConfig,
    Drawer, HAlign, Label, LineStyle, Logger, MemoryTerminal, OverrunMode, Point, Size, Split,
    TextOptions, Terminal, VAlign, draw_text,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

const LINE: &str = "cpu 42% ▏mem 3.1G ▏界面 ▏net ↑12k ↓340k ▏disk 71% ▏load 0.42 0.38 0.31";

fn text_layout(c: &mut Criterion) {
    let mut canvas = Canvas::new(Area::rect(0, 0, 48, 1)).expect("canvas");
    for (name, mode) in [
        ("draw_text_trim", OverrunMode::Trim),
        ("draw_text_three_dot", OverrunMode::ThreeDot),
    ] {
        let options = TextOptions::new().overrun(mode);
        c.bench_function(name, |b| {
            b.iter(|| {
                canvas.clear();
                draw_text(&mut canvas, black_box(LINE), Point::new(0, 0), &options)
                    .expect("draw");
            });
        });
    }
}

fn build_tree(size: Size) -> ContainerTree {
    let mut tree = ContainerTree::new(
        Area::from_size(size),
        ContainerOptions::new()
            .border(LineStyle::Round)
            .title("dashboard", HAlign::Center),
    );
    let root = tree.root();
    let (header, body) = tree
        .split(
            root,
            Split::column(Constraint::Fixed(3)),
            ContainerOptions::new().border(LineStyle::Light),
            ContainerOptions::new(),
        )
        .expect("split header");
    tree.set_widget(header, Label::new(LINE)).expect("header");

    let (left, right) = tree
        .split(
            body,
            Split::row(Constraint::Percent(40)),
            ContainerOptions::new().border(LineStyle::Light).title("hosts", HAlign::Left),
            ContainerOptions::new(),
        )
        .expect("split body");
    tree.set_widget(left, Label::new("web-01 web-02 db-01").align(HAlign::Center, VAlign::Middle))
        .expect("left");

    let mut parent = right;
    for index in 0..6 {
        let (top, rest) = tree
            .split(
                parent,
                Split::column(Constraint::Fixed(3)),
                ContainerOptions::new().border(LineStyle::Double),
                ContainerOptions::new(),
            )
            .expect("split panel");
        tree.set_widget(top, Label::new(format!("panel {index}: {LINE}")))
            .expect("panel");
        parent = rest;
    }
    tree
}

fn tree_draw(c: &mut Criterion) {
    let size = Size::new(160, 48);
    let tree = build_tree(size);
    let drawer = Drawer::new(DrawConfig::default().with_logger(Logger::new(NullSink)));

    c.bench_function("draw_tree_memory", |b| {
        let mut terminal = MemoryTerminal::new(size).expect("terminal");
        b.iter(|| {
            terminal.clear().expect("clear");
            black_box(drawer.draw_tree(&tree, &mut terminal).is_ok());
        });
    });

    c.bench_function("draw_tree_crossterm_flush", |b| {
        let mut terminal = CrosstermTerminal::new(io::sink(), size).expect("terminal");
        b.iter(|| {
            terminal.clear().expect("clear");
            black_box(drawer.draw_tree(&tree, &mut terminal).is_ok());
            terminal.flush().expect("flush");
        });
    });
}

criterion_group!(benches, text_layout, tree_draw);
criterion_main!(benches);
