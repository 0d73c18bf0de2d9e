use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trigrid::{
    check_win, find_winning_line, Board, Coord, GameRng, Heuristic, MovePolicy, PlayerId, Roster,
    BOARD_SIZE,
};

/// Deterministic boards across a range of fill densities.
fn corpus() -> Vec<Board> {
    let mut rng = GameRng::new(42);
    let mut boards = vec![Board::new()];

    for fill in 1..=(BOARD_SIZE * BOARD_SIZE - 4) {
        let mut board = Board::new();
        for i in 0..fill {
            let empties: Vec<Coord> = board.empty_cells().collect();
            let coord = *rng.choose(&empties).expect("board not yet full");
            board.place(coord, PlayerId::new((i % 3) as u8)).unwrap();
        }
        boards.push(board);
    }
    boards
}

fn bench_check_win(c: &mut Criterion) {
    c.bench_function("rules/check_win", |b| {
        let boards = corpus();
        b.iter(|| {
            let mut hits = 0u32;
            for board in &boards {
                for player in PlayerId::all(3) {
                    if check_win(board, player) {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        })
    });
}

fn bench_find_winning_line(c: &mut Criterion) {
    c.bench_function("rules/find_winning_line", |b| {
        let boards = corpus();
        b.iter(|| {
            let mut acc = 0usize;
            for board in &boards {
                for player in PlayerId::all(3) {
                    if let Some(line) = find_winning_line(board, player) {
                        acc += line.len();
                    }
                }
            }
            black_box(acc)
        })
    });
}

fn bench_heuristic_choose(c: &mut Criterion) {
    c.bench_function("ai/heuristic_choose", |b| {
        let boards = corpus();
        let roster = Roster::standard();
        b.iter(|| {
            let mut rng = GameRng::new(7);
            let mut acc = 0usize;
            for board in &boards {
                let mut board = board.clone();
                if let Ok(coord) = Heuristic.choose(&mut board, &roster, PlayerId::new(0), &mut rng)
                {
                    acc += coord.row * BOARD_SIZE + coord.col;
                }
            }
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_check_win,
    bench_find_winning_line,
    bench_heuristic_choose
);
criterion_main!(benches);
