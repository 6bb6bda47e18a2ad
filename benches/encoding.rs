use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graft::{render, to_value, Encode, Encoder, RenderOptions, Result};

#[derive(Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

impl Encode for Product {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut obj = encoder.object();
        obj.encode_str("sku", &self.sku);
        obj.encode_str("name", &self.name);
        obj.encode_f64("price", self.price);
        obj.encode_i64("quantity", self.quantity as i64);
        Ok(())
    }
}

fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            sku: format!("SKU-{:05}", i),
            name: format!("Product {}", i),
            price: 9.99 + i as f64,
            quantity: (i % 100) as u32,
        })
        .collect()
}

fn benchmark_encode_scalars(c: &mut Criterion) {
    c.bench_function("encode_scalar_leaf", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new();
            encoder.scalar().put_i64(black_box(42));
            encoder.finish().unwrap()
        })
    });
}

fn benchmark_encode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_array");

    for size in [10, 100, 500].iter() {
        let items = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| to_value(black_box(items)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let tree = to_value(&products(100)).unwrap();

    c.bench_function("render_compact", |b| {
        b.iter(|| render::render(black_box(&tree), &RenderOptions::default()))
    });

    c.bench_function("render_pretty", |b| {
        b.iter(|| render::render(black_box(&tree), &RenderOptions::pretty()))
    });
}

criterion_group!(
    benches,
    benchmark_encode_scalars,
    benchmark_encode_array,
    benchmark_render
);
criterion_main!(benches);
