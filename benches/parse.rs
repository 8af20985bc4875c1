use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ballistics_scrape::{
    config::options::{RowPolicy, ScrapeOptions},
    runner,
    page::fields,
};

fn load_sample() -> String {
    // Pad the fixture with extra rows so the table is closer to the real page size.
    let page = include_str!("../tests/fixtures/ballistics.html");
    let row = "<tr><td>.308 Win. (150gr Spitzer)</td><td>2820/2648</td><td>2533/2137</td>\
               <td>2263/1705</td><td>2009/1344</td></tr>\n";
    page.replacen("</table>\n\n<table class=\"footer\">", &format!("{}</table>\n\n<table class=\"footer\">", row.repeat(300)), 1)
}

fn bench_parse(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("scrape_document_heuristic", |b| {
        let opts = ScrapeOptions::default();
        b.iter(|| {
            let table = runner::scrape_document(black_box(&doc), &opts).unwrap();
            black_box(table.len())
        })
    });

    c.bench_function("scrape_document_schema", |b| {
        let opts = ScrapeOptions { rows: RowPolicy::Schema, ..ScrapeOptions::default() };
        b.iter(|| {
            let table = runner::scrape_document(black_box(&doc), &opts).unwrap();
            black_box(table.len())
        })
    });

    c.bench_function("split_ve", |b| {
        b.iter(|| fields::split_ve(black_box("2910/2637")))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
