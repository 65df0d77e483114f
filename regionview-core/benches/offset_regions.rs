use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regionview_core::{Interval, RegionViewer, ViewerParams};

fn generate_transcript(exon_count: i64) -> Vec<Interval> {
    (0..exon_count)
        .map(|i| {
            let start = 1_000_000 + i * 7_919;
            Interval::new("CDS", start, start + 120 + (i % 7) * 31)
        })
        .collect()
}

fn bench_build_viewer(c: &mut Criterion) {
    let exons = generate_transcript(300);
    let params = ViewerParams::default().with_padding(75).with_width(1600.0);

    c.bench_function("build_viewer_300_exons", |b| {
        b.iter(|| black_box(RegionViewer::new(black_box(&exons), &params)))
    });
}

fn bench_lookups(c: &mut Criterion) {
    let exons = generate_transcript(300);
    let params = ViewerParams::default().with_padding(75).with_width(1600.0);
    let viewer = match RegionViewer::new(&exons, &params) {
        Ok(viewer) => viewer,
        Err(err) => panic!("benchmark setup failed: {}", err),
    };

    c.bench_function("scale_position_300_exons", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for position in (1_000_000..3_400_000).step_by(9_973) {
                sum += viewer.scale_position(black_box(position));
            }
            black_box(sum)
        })
    });

    c.bench_function("invert_offset_300_exons", |b| {
        b.iter(|| {
            let mut sum = 0;
            for x in 0..1600 {
                sum += viewer.invert_offset(black_box(x as f64));
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_build_viewer, bench_lookups);
criterion_main!(benches);
