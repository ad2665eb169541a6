//! Render throughput: wrapping, fitting and full-tree renders at common
//! terminal sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panelkit::{Border, Color, Component, Fragment, Layout, Line, Sizing, Style, TextView};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while the five boxing \
wizards jump quickly and a wizard's job is to vex chumps quickly in fog.";

fn styled_text() -> Line {
    Line::from_fragments(vec![
        Fragment::new(PARAGRAPH, Style::new().fg(Color::Cyan)),
        Fragment::raw(" "),
        Fragment::new(PARAGRAPH, Style::new().fg(Color::Yellow)),
    ])
}

fn tree() -> Component {
    let mut root = Layout::horizontal();
    for weight in 1..=3 {
        let mut column = Layout::vertical();
        for _ in 0..3 {
            column.append(Component::leaf(TextView::new(styled_text())), weight);
        }
        root.append(Component::layout(column), weight);
    }
    Component::layout(root)
        .with_border(Border::HEAVY)
        .with_padding(Sizing::uniform(1))
}

fn bench_text(c: &mut Criterion) {
    let line = styled_text();
    let mut group = c.benchmark_group("text");
    for width in [20usize, 80, 200] {
        group.bench_with_input(BenchmarkId::new("wrap", width), &width, |b, &w| {
            b.iter(|| black_box(&line).wrap(w).count())
        });
        group.bench_with_input(BenchmarkId::new("fit", width), &width, |b, &w| {
            b.iter(|| black_box(&line).fit(w))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for (width, height) in [(80usize, 24usize), (200, 60)] {
        let mut root = tree();
        group.bench_function(format!("{width}x{height}"), |b| {
            b.iter(|| root.render(black_box(width), black_box(height)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_text, bench_render);
criterion_main!(benches);
