//! Frame rendering benchmarks over the crate's internal TUI app.
//!
//! These verify that a verse step plus re-render stays well inside one
//! frame budget even with long chapters and an active search highlighting
//! matches across the reader pane.
//!
//! Run with: cargo bench --bench render_benchmark --features bench-internals

#![allow(missing_docs)] // criterion macros generate undocumented items

use biblia_tui::config::KeyBindings;
use biblia_tui::corpus::{Corpus, CorpusSet};
use biblia_tui::model::{Book, Theme, Translation};
use biblia_tui::state::AppState;
use biblia_tui::view::{ColorConfig, TuiApp};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Build a corpus whose first book carries one very long chapter.
///
/// 176 verses mirrors the longest real chapter (Salmos 119), so the reader
/// pane renders far more text than fits the viewport.
fn long_chapter_corpus() -> Corpus {
    let sentences = [
        "Bem-aventurados os que trilham seus caminhos com retidão.",
        "Lâmpada para os meus pés é a tua palavra e luz para o meu caminho.",
        "Alegrei-me no caminho dos teus testemunhos, como em todas as riquezas.",
    ];
    let verses: Vec<String> = (0..176)
        .map(|i| format!("{} Versículo {}.", sentences[i % sentences.len()], i + 1))
        .collect();
    Corpus::new(vec![Book {
        name: "Salmos".to_string(),
        abbrev: Some("sl".to_string()),
        chapters: vec![verses],
    }])
}

/// App state over the long-chapter corpus, nothing opened yet.
fn baseline_state() -> AppState {
    let corpus = long_chapter_corpus();
    let corpora = CorpusSet::new(corpus.clone(), corpus.clone(), corpus);
    AppState::new(corpora, Translation::Aa, Theme::Claro)
}

/// Build a TuiApp over a TestBackend with the long chapter open.
fn app_for_bench(state: AppState, width: u16, height: u16) -> TuiApp<TestBackend> {
    let backend = TestBackend::new(width, height);
    let terminal = Terminal::new(backend).expect("test terminal");
    let mut app = TuiApp::new_for_bench(
        terminal,
        state,
        KeyBindings::default(),
        ColorConfig::from_env_and_args(false),
    );
    // Expand the only book and open chapter 1 (setup, not measured)
    app.handle_key_bench(key(KeyCode::Enter));
    app.handle_key_bench(key(KeyCode::Down));
    app.handle_key_bench(key(KeyCode::Enter));
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Benchmark a single verse step plus re-render at several verse positions.
fn benchmark_verse_step(c: &mut Criterion) {
    let baseline = baseline_state();
    let mut group = c.benchmark_group("verse_step_render");

    for (name, steps) in [("start", 0usize), ("middle", 88), ("end", 170)] {
        group.bench_with_input(BenchmarkId::new("position", name), &steps, |b, &steps| {
            b.iter_batched(
                || {
                    // SETUP (outside timing): build app, walk to position, pre-render
                    let mut app = app_for_bench(baseline.clone(), 120, 40);
                    for _ in 0..steps {
                        app.handle_key_bench(key(KeyCode::Char('j')));
                    }
                    app.render_bench().expect("pre-render");
                    app
                },
                |mut app| {
                    // MEASUREMENT: single verse step + re-render
                    app.handle_key_bench(key(KeyCode::Char('j')));
                    app.render_bench().expect("render");
                    black_box(app)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark rendering with an active search highlighting the whole pane.
fn benchmark_render_with_highlights(c: &mut Criterion) {
    let baseline = baseline_state();

    c.bench_function("render_with_active_search", |b| {
        b.iter_batched(
            || {
                let mut app = app_for_bench(baseline.clone(), 120, 40);
                // Open search, type a term that hits every verse, submit,
                // then close the results overlay so the reader shows through
                app.handle_key_bench(key(KeyCode::Char('/')));
                for ch in "versiculo".chars() {
                    app.handle_key_bench(key(KeyCode::Char(ch)));
                }
                app.handle_key_bench(key(KeyCode::Enter));
                app.handle_key_bench(key(KeyCode::Esc));
                app.render_bench().expect("pre-render");
                app
            },
            |mut app| {
                app.handle_key_bench(key(KeyCode::Char('j')));
                app.render_bench().expect("render");
                black_box(app)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_verse_step, benchmark_render_with_highlights
}

criterion_main!(benches);
