use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Piece, Session};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session: Session = Session::default();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session.apply_action(GameAction::Restart);
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                board.fill_row(y, Color::Cyan);
            }
            board.clear_full_lines()
        })
    });
}

fn bench_spawn_check(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("spawn_and_check", |b| {
        b.iter(|| {
            let piece = Piece::spawn(black_box(PieceKind::T));
            board.is_blocked(&piece.shape, piece.x, piece.y)
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session: Session = Session::default();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.apply_action(black_box(GameAction::MoveLeft));
            session.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session: Session = Session::default();
    session.apply_action(GameAction::SoftDrop);
    session.apply_action(GameAction::SoftDrop);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            session.apply_action(black_box(GameAction::RotateCw));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session: Session = Session::default();
    let snap = session.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn_check,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
