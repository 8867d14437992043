#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::{hint::black_box, time::Duration};

use booktrack::{
    BookId, CatalogTransactionManager, LibraryConfig, LibrarySystem, Role, User, UserDirectory,
    UserId,
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_secs(1))
}

/// One borrowed book with `queued` reservations, all but the last held by
/// guests already at their limit
fn contested_book(queued: usize) -> (CatalogTransactionManager, UserDirectory, BookId) {
    let config = LibraryConfig { reservation_capacity: None, ..LibraryConfig::default() };
    let mut catalog = CatalogTransactionManager::new(&config);
    let book = catalog.add_book("Contested", "Author");
    catalog.add_book("Other", "Author");
    let mut users = UserDirectory::new();

    users.register(User::new(Role::Teacher, "Holder", "holder"));
    let holder = users.find_by_id_mut(&UserId::new("holder")).expect("holder registered");
    catalog.borrow(holder, book).expect("book exists");

    for n in 0..queued {
        let id = format!("guest-{n}");
        let mut guest = User::new(Role::Guest, "Guest", id.as_str());
        if n.saturating_add(1) < queued {
            guest.increment_borrowed();
        }
        users.register(guest);
        catalog.reserve(book, UserId::new(id)).expect("book exists");
    }

    (catalog, users, book)
}

fn handoff_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Return and hand-off");

    for queued in [1_usize, 10, 100] {
        group.bench_function(format!("queue_{queued}"), |b| {
            b.iter_batched(
                || contested_book(queued),
                |(mut catalog, mut users, book)| {
                    let outcome =
                        catalog.return_book(book, &UserId::new("holder"), &mut users).unwrap();
                    black_box(outcome);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let system = LibrarySystem::default();
    c.bench_function("search_seeded_catalog", |b| {
        b.iter(|| black_box(system.search_book(black_box("cracking")).is_ok()));
    });
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = handoff_bench, search_bench
}
criterion_main!(benches);
