use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{ChartRenderer, Record, RenderError, RenderOptions};

fn build_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let year = 1900 + (i % 120) as i32;
            let secs = 35 * 60 + (i as u32 * 13) % 600;
            let r = Record::new(year, secs).named(format!("Rider {i}"), "FRA");
            if i % 4 == 0 { r.with_allegation("Alleged") } else { r }
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let renderer = ChartRenderer::new(RenderOptions::default());
    let mut group = c.benchmark_group("render_svg_markup");
    for &n in &[35usize, 1_000usize, 10_000usize] {
        group.bench_function(format!("records_{n}"), |b| {
            let records = build_records(n);
            b.iter(|| -> Result<(), RenderError> {
                let chart = renderer.render_detached(&records)?;
                black_box(chart.to_svg_markup());
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
