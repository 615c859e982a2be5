//! Performance benchmarks for arbor

use arbor::test_utils::TestDir;
use arbor::tree::read_entries;
use arbor::{TreeLine, build_tree, render_tree, resolve, walk_streaming};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::{Buffer, NoColor};

fn fixture(depth: usize, width: usize) -> TestDir {
    let dir = TestDir::named("bench");
    dir.populate(depth, width);
    dir
}

fn bench_walk_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_streaming");

    // 3 levels of 5: 155 directories, 780 files
    let small = fixture(3, 5);
    let small_root = resolve(Some(small.path())).unwrap();
    group.bench_function("small_tree", |b| {
        b.iter(|| {
            let mut lines: Vec<TreeLine> = Vec::new();
            walk_streaming(black_box(&small_root), &mut lines).unwrap()
        })
    });

    // 4 levels of 6: 1554 directories, 9330 files
    let large = fixture(4, 6);
    let large_root = resolve(Some(large.path())).unwrap();
    group.bench_function("large_tree", |b| {
        b.iter(|| {
            let mut lines: Vec<TreeLine> = Vec::new();
            walk_streaming(black_box(&large_root), &mut lines).unwrap()
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let dir = fixture(3, 5);
    let root = resolve(Some(dir.path())).unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("plain", |b| {
        b.iter(|| {
            let mut out = NoColor::new(Vec::new());
            render_tree(black_box(&root), &mut out).unwrap()
        })
    });

    group.bench_function("ansi", |b| {
        b.iter(|| {
            let mut out = Buffer::ansi();
            render_tree(black_box(&root), &mut out).unwrap()
        })
    });

    group.bench_function("json_tree", |b| b.iter(|| build_tree(black_box(&root))));

    group.finish();
}

fn bench_read_entries(c: &mut Criterion) {
    let dir = TestDir::named("flat");
    for i in 0..1000 {
        dir.add_file(&format!("File_{}.txt", i), "");
    }

    c.bench_function("read_entries_1000", |b| {
        b.iter(|| read_entries(black_box(dir.path())).unwrap())
    });
}

criterion_group!(benches, bench_walk_streaming, bench_render, bench_read_entries);
criterion_main!(benches);
