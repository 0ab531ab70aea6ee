// benches/decode.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dir_scrape::core::cfemail;
use dir_scrape::specs::practitioners;

fn sample_page(cards: usize) -> String {
    let mut doc = String::from("<html><body>");
    for i in 0..cards {
        let token = cfemail::encode(0x5C, &format!("agent{i}@lagoshomes.com")).unwrap_or_default();
        doc.push_str(&format!(
            r#"<div class="feat_property home7 agent"><h4>Agent {i}</h4>
               <a>Mobile: 0803 000 {i:04}</a>
               <a><span class="__cf_email__" data-cfemail="{token}">[email&#160;protected]</span></a>
               <a>Office: {i} Marina Road</a><a>Status: Registered</a></div>"#
        ));
    }
    doc.push_str(r#"<ul><li class="paginationjs-next"><a>&raquo;</a></li></ul></body></html>"#);
    doc
}

fn bench_decode(c: &mut Criterion) {
    let token = cfemail::encode(0x5C, "chioma.eze@prime-estates.ng").unwrap_or_default();
    c.bench_function("cfemail_decode", |b| {
        b.iter(|| cfemail::decode(black_box(&token)))
    });

    let doc = sample_page(12);
    c.bench_function("scan_page_12_cards", |b| {
        b.iter(|| practitioners::scan_page(black_box(&doc)).map(|s| s.records.len()))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
