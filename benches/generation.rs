use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use php_literal::{php, to_string, PhpValue, ValueGenerator, ValueType};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Route {
    path: String,
    controller: String,
    methods: Vec<String>,
    cache: bool,
}

fn routes(count: usize) -> Vec<Route> {
    (0..count)
        .map(|i| Route {
            path: format!("/resource/{}", i),
            controller: format!("App\\Controller\\Resource{}", i),
            methods: vec!["GET".to_string(), "POST".to_string()],
            cache: i % 2 == 0,
        })
        .collect()
}

fn benchmark_scalars(c: &mut Criterion) {
    c.bench_function("generate_string", |b| {
        let generator = ValueGenerator::with_value("it's a \\ test", ValueType::Auto);
        b.iter(|| black_box(&generator).generate().unwrap())
    });
}

fn benchmark_serialize_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_routes");
    for size in [10, 100, 1000].iter() {
        let data = routes(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| to_string(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_environment_constants(c: &mut Criterion) {
    let value: PhpValue = php!([
        "cache_dir" => "__DIR__ . '/../var/cache'",
        "flags" => "ArrayObject::ARRAY_AS_PROPS",
        "name" => "application",
        ["nested", "values", 1, 2.5, true, null],
    ]);

    c.bench_function("generate_with_constants", |b| {
        let mut generator = ValueGenerator::with_value(value.clone(), ValueType::Auto);
        generator.init_environment_constants();
        b.iter(|| black_box(&generator).generate().unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_scalars,
    benchmark_serialize_routes,
    benchmark_environment_constants
);
criterion_main!(benches);
