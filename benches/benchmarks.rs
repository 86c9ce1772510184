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
        shuffling_and_dealing,
        classifying_random_hands,
        comparing_plays,
        searching_free_leads,
        searching_responses,
        simulating_whole_rounds,
}

fn shuffling_and_dealing(c: &mut criterion::Criterion) {
    c.bench_function("shuffle and deal a Deck", |b| {
        b.iter(|| Deck::random().deal())
    });
}

fn classifying_random_hands(c: &mut criterion::Criterion) {
    let (hands, _) = Deck::random().deal();
    let piles = hands[0].piles();
    c.bench_function("classify a 17-card Hand", |b| {
        b.iter(|| Shape::from(&piles))
    });
}

fn comparing_plays(c: &mut criterion::Criterion) {
    let lhs = Hand::try_from("5 5 5 6 6 6 3 9").unwrap().piles();
    let rhs = Hand::try_from("4 4 4 5 5 5 J Q").unwrap().piles();
    c.bench_function("compare two airplanes", |b| {
        b.iter(|| Verdict::compare(&lhs, &rhs))
    });
}

fn searching_free_leads(c: &mut criterion::Criterion) {
    let (hands, _) = Deck::random().deal();
    c.bench_function("search every lead from a 17-card Hand", |b| {
        b.iter(|| Search::from((&hands[0], Requirement::Lead)).candidates())
    });
}

fn searching_responses(c: &mut criterion::Criterion) {
    let (hands, _) = Deck::random().deal();
    let table = Requirement::from(Hand::try_from("4 4").unwrap().piles());
    c.bench_function("search answers to a low pair", |b| {
        b.iter(|| Search::from((&hands[0], table.clone())).best())
    });
}

fn simulating_whole_rounds(c: &mut criterion::Criterion) {
    c.bench_function("play a whole all-robot round", |b| {
        b.iter(|| {
            let mut engine = Engine::new(["y"].into_iter().collect::<Script>(), Silent, 0);
            engine.run();
            engine.board().times()
        })
    });
}

use landlord::Arbitrary;
use landlord::cards::Deck;
use landlord::cards::Hand;
use landlord::gameroom::Engine;
use landlord::gameroom::Silent;
use landlord::pattern::Shape;
use landlord::pattern::Verdict;
use landlord::players::Script;
use landlord::search::Requirement;
use landlord::search::Search;
