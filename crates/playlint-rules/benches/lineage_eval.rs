use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playlint_model::{DocumentKind, TaskNode};
use playlint_rules::{become_user_without_become, check_document};
use serde_yaml::{Mapping, Value};

fn task(has_become: bool, has_become_user: bool, children: Vec<Value>) -> Value {
    let mut map = Mapping::new();
    if has_become {
        map.insert(Value::String("become".to_string()), Value::Bool(true));
    }
    if has_become_user {
        map.insert(
            Value::String("become_user".to_string()),
            Value::String("root".to_string()),
        );
    }
    if !children.is_empty() {
        map.insert(Value::String("block".to_string()), Value::Sequence(children));
    }
    Value::Mapping(map)
}

fn deep_chain(depth: usize) -> Value {
    let mut node = task(false, true, Vec::new());
    for _ in 0..depth {
        node = task(false, false, vec![node]);
    }
    node
}

fn wide_play(tasks: usize) -> Value {
    let children: Vec<Value> = (0..tasks)
        .map(|i| task(i % 7 == 0, i % 3 == 0, Vec::new()))
        .collect();
    let mut map = Mapping::new();
    map.insert(Value::String("strategy".to_string()), Value::String("free".to_string()));
    map.insert(Value::String("tasks".to_string()), Value::Sequence(children));
    Value::Mapping(map)
}

fn bench_lineage_eval(c: &mut Criterion) {
    let deep = TaskNode::from_value(&deep_chain(64));
    let wide = TaskNode::from_value(&wide_play(256));
    let doc = Value::Sequence((0..32).map(|_| wide_play(16)).collect());

    c.bench_function("lineage_deep_chain_64", |b| {
        b.iter(|| become_user_without_become(false, black_box(&deep)))
    });

    c.bench_function("lineage_wide_play_256", |b| {
        b.iter(|| become_user_without_become(false, black_box(&wide)))
    });

    c.bench_function("check_document_32_plays", |b| {
        b.iter(|| check_document(&DocumentKind::Playbook, black_box(&doc)))
    });
}

criterion_group!(benches, bench_lineage_eval);
criterion_main!(benches);
