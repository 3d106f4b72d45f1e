//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure:
//! - Paging through books of different sizes
//! - Name lookups
//! - Deleting from the front of a book (worst case for reindexing)

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` records, each with one phone.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact {}", i), None).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            record
        })
        .collect()
}

/// Benchmark paging through the whole book.
fn bench_iterate_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pages");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| {
                let total: usize = book.iterate(black_box(20)).unwrap().map(|p| p.len()).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

/// Benchmark name lookups.
fn bench_find(c: &mut Criterion) {
    let book = create_test_book(10_000);

    c.bench_function("find_existing", |b| {
        b.iter(|| black_box(book.find(black_box("Contact 5000"))));
    });

    c.bench_function("find_missing", |b| {
        b.iter(|| black_box(book.find(black_box("Nobody"))));
    });
}

/// Benchmark deleting the first record, which shifts every later index.
fn bench_delete_front(c: &mut Criterion) {
    c.bench_function("delete_front_1000", |b| {
        b.iter_batched(
            || create_test_book(1_000),
            |mut book| black_box(book.delete("Contact 0")),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_iterate_pages, bench_find, bench_delete_front);
criterion_main!(benches);
