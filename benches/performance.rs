use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enumerable_operators::Sequence;

#[derive(Clone)]
struct Row {
    group: String,
    order: i64,
    value: f64,
}

fn make_rows(rows: usize) -> Sequence<Row> {
    (0..rows)
        .map(|i| Row {
            group: format!("group-{}", i % 4),
            order: ((i * 7919) % rows) as i64,
            value: (i % 10) as f64,
        })
        .collect()
}

fn bench_sort_chain(c: &mut Criterion) {
    let rows = make_rows(4096);
    c.bench_function("order_by_then_by", |b| {
        b.iter(|| {
            let sorted = rows
                .order_by(|r| r.group.clone())
                .then_by_descending(|r| r.order);
            black_box(sorted.count())
        })
    });
}

fn bench_filter_select_sum(c: &mut Criterion) {
    let rows = make_rows(4096);
    c.bench_function("filter_select_sum", |b| {
        b.iter(|| {
            let total: f64 = rows
                .filter(|r| r.value > 4.0)
                .select(|r| r.value * 2.0)
                .sum(|v| *v);
            black_box(total)
        })
    });
}

fn bench_nested_loop_join(c: &mut Criterion) {
    let outer = make_rows(512);
    let inner = Sequence::range(0, 512);
    c.bench_function("join_nested_loop", |b| {
        b.iter(|| {
            let joined = outer.join(&inner, |r| r.order, |x| *x, |r, x| r.value + *x as f64);
            black_box(joined.count())
        })
    });
}

criterion_group!(
    operators,
    bench_sort_chain,
    bench_filter_select_sum,
    bench_nested_loop_join
);
criterion_main!(operators);
