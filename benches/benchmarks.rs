use hotelling::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_payoff_five_players,
        enumerating_profiles_three_players,
        building_table_three_players,
        resolving_three_players,
        resolving_four_players,
}

fn scoring_payoff_five_players(c: &mut criterion::Criterion) {
    let positions = [0.1, 0.35, 0.5, 0.8, 1.0];
    c.bench_function("score a 5-player profile", |b| {
        b.iter(|| Payoff::compute(&positions))
    });
}

fn enumerating_profiles_three_players(c: &mut criterion::Criterion) {
    let space = Space::new(DEFAULT_RESOLUTION);
    c.bench_function("enumerate 3-player profiles at N=24", |b| {
        b.iter(|| Profiles::enumerate(&space, 3, true).count())
    });
}

fn building_table_three_players(c: &mut criterion::Criterion) {
    let space = Space::new(DEFAULT_RESOLUTION);
    let seats = Seat::lineup(3, None, true);
    c.bench_function("build a 3-player payoff table at N=24", |b| {
        b.iter(|| Table::build(&space, &seats))
    });
}

fn resolving_three_players(c: &mut criterion::Criterion) {
    let space = Space::new(DEFAULT_RESOLUTION);
    let table = Table::build(&space, &Seat::lineup(3, None, true));
    c.bench_function("resolve a 3-player game at N=24", |b| {
        b.iter(|| Resolver::new(First).resolve(table.clone()))
    });
}

fn resolving_four_players(c: &mut criterion::Criterion) {
    let space = Space::new(12);
    let table = Table::build(&space, &Seat::lineup(4, None, true));
    c.bench_function("resolve a 4-player game at N=12", |b| {
        b.iter(|| Resolver::new(Uniform::seeded(0)).resolve(table.clone()))
    });
}
