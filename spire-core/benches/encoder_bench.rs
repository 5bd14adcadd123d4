use criterion::{criterion_group, criterion_main, Criterion};
use spire_core::batch_encoder::BatchEncoder;
use spire_core::encoder::ObservationEncoder;
use spire_engine::State;

const FIGHT: &str = include_str!("../tests/fixtures/fight.json");
const SHOP: &str = include_str!("../tests/fixtures/shop.json");

fn fixture_states() -> Vec<State> {
    [FIGHT, SHOP]
        .iter()
        .map(|text| State::from_json_str(text).expect("fixture parses"))
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let raw: serde_json::Value = serde_json::from_str(FIGHT).expect("fixture parses");
    let mut state = State::default();
    c.bench_function("update_fight_snapshot", |b| {
        b.iter(|| state.update(raw.clone()).expect("object snapshot"));
    });
}

fn bench_encoder(c: &mut Criterion) {
    let states = fixture_states();
    let mut encoder = ObservationEncoder::new();

    c.bench_function("encode_observation_1000x", |b| {
        b.iter(|| {
            for i in 0..1000 {
                encoder.encode(&states[i % states.len()]);
            }
        });
    });
}

fn bench_batch_256(c: &mut Criterion) {
    let states: Vec<State> = fixture_states().into_iter().cycle().take(256).collect();
    let mut batch = BatchEncoder::new(states.len());
    c.bench_function("batch_encode_256_states", |b| {
        b.iter(|| batch.encode_states(&states));
    });
}

criterion_group!(benches, bench_update, bench_encoder, bench_batch_256);
criterion_main!(benches);
