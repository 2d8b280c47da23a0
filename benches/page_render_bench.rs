use criterion::{Criterion, criterion_group, criterion_main};
use expenditure_outlook::api::{PageBuilder, PageConfig};
use expenditure_outlook::core::{UncertaintyModel, derive_bands};
use expenditure_outlook::data::{self, INDEX_TABLE_ROWS};
use expenditure_outlook::table::render_table;
use std::hint::black_box;

fn bench_derive_bands_10k(c: &mut Criterion) {
    let points: Vec<f64> = (0..10_000).map(|i| 60.0 + (i as f64) * 0.001).collect();

    c.bench_function("derive_bands_10k", |b| {
        b.iter(|| {
            let _ = derive_bands(black_box(&points), 0.01, 0.05, 1.28);
        })
    });
}

fn bench_render_index_table(c: &mut Criterion) {
    let schema = data::index_table_schema().expect("schema");

    c.bench_function("render_index_table", |b| {
        b.iter(|| {
            let _ = render_table(black_box(&schema), black_box(&INDEX_TABLE_ROWS))
                .expect("table should render");
        })
    });
}

fn bench_full_page_html(c: &mut Criterion) {
    let config = PageConfig::default().with_uncertainty(UncertaintyModel::default());
    let page = PageBuilder::new(config).expect("builder");

    c.bench_function("full_page_html", |b| {
        b.iter(|| {
            let _ = page.render_html().expect("page should render");
        })
    });
}

criterion_group!(
    benches,
    bench_derive_bands_10k,
    bench_render_index_table,
    bench_full_page_html
);
criterion_main!(benches);
