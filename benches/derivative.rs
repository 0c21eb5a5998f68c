use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use symdiff::{Tree, deftree, mul};

/// Product of nested trigonometric and exponential factors, whose raw
/// derivative grows quickly with `depth`.
fn nested_product(depth: usize) -> Tree {
    let mut tree = deftree!(sin x);
    for i in 0..depth {
        tree = match i % 3 {
            0 => mul(tree, deftree!(exp (pow x 2))),
            1 => deftree!(tan (+ {tree} x)),
            _ => mul(deftree!(log (+ x 2)), tree),
        };
    }
    tree
}

fn b_raw_derivative(c: &mut Criterion) {
    let tree = nested_product(8);
    c.bench_function("diff_nested_product", |b| {
        b.iter(|| black_box(&tree).diff())
    });
}

fn b_simplified_derivative(c: &mut Criterion) {
    let tree = nested_product(8);
    c.bench_function("derivative_nested_product", |b| {
        b.iter(|| black_box(&tree).derivative())
    });
}

fn b_simplify(c: &mut Criterion) {
    let raw = nested_product(8).diff().diff();
    c.bench_function("simplify_second_diff", |b| {
        b.iter(|| black_box(&raw).simplify())
    });
}

criterion_group!(
    bench,
    b_raw_derivative,
    b_simplified_derivative,
    b_simplify
);
criterion_main!(bench);
